//! # dgsbot-knowledge
//!
//! Static knowledge base for the DGS-Pay documentation chatbot: an ordered
//! collection of keyword-triggered response entries plus a fallback set,
//! immutable once loaded.
//!
//! Ships a builtin table covering the DGS-Pay API docs and accepts
//! operator-authored TOML tables in the same shape:
//!
//! ```text
//! [[entries]]
//! topic = "greetings"
//! keywords = ["hello", "hi"]
//! response = "Hello! Ask me about the API."
//!
//! fallbacks = ["Sorry, I can only help with the API docs."]
//! ```

mod builtin;
mod entry;
mod store;

pub use entry::KnowledgeEntry;
pub use store::KnowledgeBase;
