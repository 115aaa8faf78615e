//! One-shot migration of user records from a 3x-ui panel into Remnawave.
//!
//! The binary fetches the full source list once (from a local JSON snapshot
//! or a live authenticated panel), then reconciles each record against the
//! destination by its stable uuid: create when absent, update when present.
//! Records are processed strictly one at a time; a single record's failure
//! is counted and logged but never aborts the batch.

pub mod config;
pub mod destination;
pub mod errors;
pub mod logging;
pub mod migration;
pub mod source;

pub use config::{MigrationConfig, SourceMode};
pub use errors::{DestinationError, SourceError};
pub use migration::{migrate_users, MigrationCounters, MigrationReport};
pub use source::UserRecord;
