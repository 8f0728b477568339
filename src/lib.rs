#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitgrid;
mod board;
mod common;
mod config;
mod fleet;
#[cfg(feature = "std")]
mod logging;
mod ship;

pub use bitgrid::{BitGrid, GridError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use fleet::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use ship::*;
