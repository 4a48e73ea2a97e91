//! Data layer: file discovery, table reading, and row filtering.
//!
//! Architecture:
//! ```text
//!   base directory
//!        │
//!        ▼
//!   ┌───────────┐
//!   │ discovery │  list entries, keep names containing "csv"
//!   └───────────┘
//!        │  Vec<DataFile>
//!        ▼
//!   ┌──────────┐
//!   │  loader  │  header row → Record per data row
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter  │  record["ngram"] ∈ TargetSet → Match
//!   └──────────┘
//! ```

pub mod discovery;
pub mod filter;
pub mod loader;
pub mod model;
