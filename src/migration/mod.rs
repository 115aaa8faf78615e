//! The end-to-end batch: sequential per-record reconciliation and its
//! summary.

mod driver;
mod report;

pub use driver::migrate_users;
pub use report::{MigrationCounters, MigrationReport};
