//! Domain Layer
//!
//! Entities and errors shared by every other layer.
//! No I/O happens here.

mod entity;
mod error;
mod session;
mod todo;

pub use entity::Entity;
pub use error::{Action, SyncError, SyncResult};
pub use session::{decode_display_name, Session, FALLBACK_DISPLAY_NAME, NAME_CLAIM};
pub use todo::{Todo, TodoId, TodoInput};
