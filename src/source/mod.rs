//! Source-side readers: a local JSON snapshot or the live 3x-ui panel.
//!
//! Both origins produce the same flattened record sequence, so the migration
//! driver never knows where the list came from.

mod file;
mod panel;
mod types;

pub use file::fetch_from_file;
pub use panel::{XuiClient, XuiSession};
pub use types::{
    flatten_inbounds, Inbound, InboundClient, InboundDocument, InboundSettings, UserRecord,
    XuiListResponse,
};
