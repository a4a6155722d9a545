#![no_std]

extern crate alloc;

pub use error::*;
pub use geometry::*;
pub use pointer::*;
pub use sprite::*;
pub use types::*;
pub use view::*;

pub use sweepview_protocol::{
    CellSymbol, GameStatus, MineCount, MoveButton, MoveRequest, Snapshot,
};

mod error;
mod geometry;
mod pointer;
mod sprite;
mod types;
mod view;
