//! Wire contracts describing interactions with the extension blocklist
//! backend.

pub mod api;

pub use api::{
    CreateExtensionRequest, ExtensionsApi, MutationResponse, SnapshotResponse,
};
