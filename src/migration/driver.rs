//! Per-record reconciliation loop.

use tracing::error;

use super::report::MigrationCounters;
use crate::destination::UserDirectory;
use crate::source::UserRecord;

/// Reconciles every source record against the destination, strictly in
/// order: look up by uuid, then update the existing record or create a new
/// one. One record's failure never aborts the batch — it is counted, logged
/// with the offending username, and the loop moves on. A rejected upsert
/// response counts as an error alongside transport failures.
///
/// Single-writer assumption: the lookup-then-write sequence is not atomic,
/// so a concurrent writer could double-create. This tool is the only writer
/// for the duration of a run.
pub async fn migrate_users<D>(directory: &D, users: &[UserRecord]) -> MigrationCounters
where
    D: UserDirectory + ?Sized,
{
    let mut counters = MigrationCounters::default();

    for user in users {
        match directory.find_by_uuid(&user.uuid).await {
            Ok(Some(existing)) => match directory.update(&existing.id, user).await {
                Ok(()) => counters.updated += 1,
                Err(e) => {
                    counters.errors += 1;
                    error!("failed to update {}: {e}", user.username);
                }
            },
            Ok(None) => match directory.create(user).await {
                Ok(()) => counters.created += 1,
                Err(e) => {
                    counters.errors += 1;
                    error!("failed to create {}: {e}", user.username);
                }
            },
            Err(e) => {
                counters.errors += 1;
                error!("failed to process {}: {e}", user.username);
            }
        }
    }

    counters
}
