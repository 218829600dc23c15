//! Session Layer
//!
//! Durable token storage and the account flows that fill it.

mod storage;
mod store;

pub use storage::{KeyValueStorage, MemoryStorage, TOKEN_KEY, USER_NAME_KEY};
pub use store::{Credentials, Registration, SessionStore, REGISTERED_NOTICE};
