//! Destination-side mediation: every read and write against the Remnawave
//! user store goes through the [`UserDirectory`] seam, so the driver (and
//! its tests) never touch HTTP directly.

mod client;
mod types;

pub use client::RemnawaveClient;
pub use types::{DestinationUser, UserListResponse};

use async_trait::async_trait;

use crate::errors::DestinationError;
use crate::source::UserRecord;

/// The destination user store as the migration driver sees it.
#[async_trait]
pub trait UserDirectory {
    /// Looks up a user by the stable cross-system uuid. `None` means absent.
    /// A non-success lookup response is also reported as absent — at this
    /// layer a failed lookup is indistinguishable from "does not exist" —
    /// so only transport-level failures surface as errors.
    async fn find_by_uuid(&self, uuid: &str)
        -> Result<Option<DestinationUser>, DestinationError>;

    /// Submits the record as a new destination user.
    async fn create(&self, user: &UserRecord) -> Result<(), DestinationError>;

    /// Replaces the destination record addressed by its destination-assigned
    /// identifier (distinct from the cross-system uuid).
    async fn update(
        &self,
        destination_id: &str,
        user: &UserRecord,
    ) -> Result<(), DestinationError>;
}
