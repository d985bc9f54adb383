//! Request/response shapes of the backend REST API, plus the async trait
//! the panel consumes.
//!
//! The backend is an external collaborator; these types mirror its JSON
//! exactly (camelCase fields, `type` discriminator). Mutations answer with a
//! uniform `{ success, message }` envelope even on 4xx responses, so
//! implementations must parse bodies regardless of status code.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use extguard_model::{ExtensionEntry, ExtensionKind, ExtensionName, Snapshot};

/// Body of `POST /api/extensions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExtensionRequest {
    pub name: ExtensionName,
    #[serde(rename = "type")]
    pub kind: ExtensionKind,
    pub reg_id: String,
}

impl CreateExtensionRequest {
    /// Operator id the panel registers everything under.
    pub const DEFAULT_REG_ID: &'static str = "user";

    pub fn new(name: ExtensionName, kind: ExtensionKind) -> Self {
        Self { name, kind, reg_id: Self::DEFAULT_REG_ID.to_string() }
    }
}

/// `{ success, message }` envelope returned by create and delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl MutationResponse {
    pub fn ok() -> Self {
        Self { success: true, message: None }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self { success: false, message: Some(message.into()) }
    }
}

/// Payload of `GET /api/extensions`: the complete blocklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotResponse {
    pub success: bool,
    #[serde(default)]
    pub check_extensions: Vec<ExtensionEntry>,
    #[serde(default)]
    pub label_extensions: Vec<ExtensionEntry>,
}

impl From<SnapshotResponse> for Snapshot {
    fn from(response: SnapshotResponse) -> Self {
        Snapshot::new(response.check_extensions, response.label_extensions)
    }
}

/// Operations the panel needs from the blocklist backend.
///
/// Transport errors surface as `Err`; logical rejections arrive inside the
/// response envelope with `success: false`.
#[async_trait]
pub trait ExtensionsApi: Send + Sync {
    /// Fetch the complete current blocklist.
    async fn fetch_snapshot(&self) -> anyhow::Result<Snapshot>;

    /// Register a new blocked extension.
    async fn create(
        &self,
        request: CreateExtensionRequest,
    ) -> anyhow::Result<MutationResponse>;

    /// Remove a blocked extension by name.
    async fn delete(
        &self,
        name: &ExtensionName,
    ) -> anyhow::Result<MutationResponse>;
}
