//! Statistics ingestion
//!
//! - `resolver`: provider references to roster identities
//! - `usage`: per-category usage parsing and aggregation
//! - `pipeline`: per-game parse, resolve and aggregate with warning reporting

pub mod pipeline;
pub mod resolver;
pub mod usage;


pub use pipeline::{ingest_games, IngestOutcome, IngestWarning};
pub use resolver::{IdentityMatcher, ResolvedPlayer, Resolver};
pub use usage::{extract_usage, UsageTable};
