use seabattle::{FieldError, Orientation, Ship};

#[test]
fn test_horizontal_run_enumerates_decks() {
    let ship = Ship::new((2, 2), (2, 5)).unwrap();
    assert_eq!(ship.len(), 4);
    let cells: Vec<_> = ship.decks().iter().map(|d| (d.row, d.column)).collect();
    assert_eq!(cells, vec![(2, 2), (2, 3), (2, 4), (2, 5)]);
    assert!(ship.decks().iter().all(|d| d.is_alive()));
    assert!(!ship.is_drowned());
    assert_eq!(ship.orientation(), Orientation::Horizontal);
}

#[test]
fn test_vertical_run_enumerates_decks() {
    let ship = Ship::new((3, 7), (6, 7)).unwrap();
    let cells: Vec<_> = ship.decks().iter().map(|d| (d.row, d.column)).collect();
    assert_eq!(cells, vec![(3, 7), (4, 7), (5, 7), (6, 7)]);
    assert_eq!(ship.orientation(), Orientation::Vertical);
}

#[test]
fn test_single_point_is_one_deck() {
    let ship = Ship::new((1, 0), (1, 0)).unwrap();
    assert_eq!(ship.len(), 1);
    assert_eq!(ship.decks()[0].row, 1);
    assert_eq!(ship.decks()[0].column, 0);
}

#[test]
fn test_reversed_endpoints_normalize() {
    let forward = Ship::new((2, 2), (2, 5)).unwrap();
    let backward = Ship::new((2, 5), (2, 2)).unwrap();
    assert_eq!(forward, backward);
}

#[test]
fn test_diagonal_endpoints_rejected() {
    let err = Ship::new((0, 0), (1, 1)).unwrap_err();
    assert_eq!(
        err,
        FieldError::InvalidCoordinates {
            start: (0, 0),
            end: (1, 1)
        }
    );
}

#[test]
fn test_deck_lookup() {
    let ship = Ship::new((2, 2), (2, 5)).unwrap();
    assert!(ship.deck(2, 3).is_some());
    assert!(ship.deck(3, 3).is_none());
    assert!(ship.deck(2, 6).is_none());
}

#[test]
fn test_fire_sinks_on_last_deck() {
    let mut ship = Ship::new((2, 2), (2, 5)).unwrap();
    assert!(!ship.fire(2, 2));
    assert!(!ship.fire(2, 3));
    assert!(!ship.fire(2, 4));
    assert!(ship.fire(2, 5));
    assert!(ship.is_drowned());
}

#[test]
fn test_fire_in_any_order() {
    let mut ship = Ship::new((2, 2), (2, 5)).unwrap();
    assert!(!ship.fire(2, 5));
    assert!(!ship.fire(2, 2));
    assert!(!ship.fire(2, 4));
    assert!(ship.fire(2, 3));
}

#[test]
fn test_refire_is_idempotent() {
    let mut ship = Ship::new((4, 4), (5, 4)).unwrap();
    assert!(!ship.fire(4, 4));
    // same deck again: no change, still afloat
    assert!(!ship.fire(4, 4));
    assert!(ship.fire(5, 4));
    // drowned ship keeps reporting drowned
    assert!(ship.fire(4, 4));
    assert!(ship.is_drowned());
}
