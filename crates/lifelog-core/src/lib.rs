//! Lifelog Core - fact data model, serialization, and error handling

pub mod error;
pub mod fact;
pub mod store;

pub use error::{Error, Result};
pub use fact::{Fact, FactId, Modifier};
pub use store::FactStore;
