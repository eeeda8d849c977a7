pub mod error;
pub mod i18n;
pub mod ingest;
pub mod models;
pub mod parser;
pub mod render;
pub mod store;
pub mod ui;
pub mod validate;
pub mod windows;

pub use store::{Change, SharedStore, Store};

/// Commands the ui sends to the background worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Message {
    /// (validated url)
    AddFeed(String),
}
