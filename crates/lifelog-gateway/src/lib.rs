//! Lifelog Gateway - HTTP surface over the fact store
//!
//! Thin glue: request handlers translate JSON bodies into core calls and
//! report `{"ok": true}` only after the corresponding unit of work has been
//! durably saved.

pub mod html;
pub mod normalize;
pub mod server;

pub use server::{start_server, BindMode, ServerConfig};
