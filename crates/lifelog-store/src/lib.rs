//! Lifelog Store - persistence gateway for the fact store
//!
//! Two pieces: [`StoreFile`] owns the durable resource (one JSON file holding
//! the whole serialized store), and the writer queue serializes every
//! mutation-plus-save into ordered units of work behind a [`StoreHandle`].

pub mod file;
pub mod queue;

pub use file::StoreFile;
pub use queue::{spawn_writer, StoreHandle};
