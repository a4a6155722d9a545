//! Messages exchanged between the board view and the external game engine.
//!
//! The engine pushes [`Snapshot`]s as JSON strings; the view answers every
//! pointer release with a [`MoveRequest`].

pub use error::*;
pub use request::*;
pub use snapshot::*;
pub use symbol::*;

mod error;
mod request;
mod snapshot;
mod symbol;
