//! Destination wire shapes.

use serde::Deserialize;

/// Lookup envelope returned by `GET /users?uuid=`.
#[derive(Deserialize, Debug, Default)]
pub struct UserListResponse {
    #[serde(default)]
    pub data: Vec<DestinationUser>,
}

/// A destination-side record, reduced to the identifier the update path
/// needs. Unknown fields are ignored.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DestinationUser {
    pub id: String,
}
