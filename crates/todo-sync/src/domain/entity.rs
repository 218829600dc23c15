//! Domain Layer - Core Entity Trait
//!
//! Every record mirrored from the server carries a stable identifier.

/// Core trait for server-owned records
pub trait Entity: Sized + Clone {
    /// The type of the record's unique identifier
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Debug;

    /// Returns the record's unique identifier
    fn id(&self) -> Self::Id;
}
