//! Shared fixtures for the handler tests: a stub backend service and
//! snapshot builders, in the spirit of the settings-service stubs used by
//! the application itself.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use extguard_contracts::{
    CreateExtensionRequest, ExtensionsApi, MutationResponse,
};
use extguard_model::{
    ExtensionEntry, ExtensionKind, ExtensionName, Snapshot,
};
use extguard_panel::state::State;

/// Stub backend answering with configured responses.
pub struct StubApi {
    pub snapshot: Snapshot,
    pub mutation: MutationResponse,
}

impl StubApi {
    pub fn ok() -> Self {
        Self {
            snapshot: Snapshot::default(),
            mutation: MutationResponse::ok(),
        }
    }

    pub fn rejecting(message: &str) -> Self {
        Self {
            snapshot: Snapshot::default(),
            mutation: MutationResponse::rejected(message),
        }
    }
}

#[async_trait]
impl ExtensionsApi for StubApi {
    async fn fetch_snapshot(&self) -> anyhow::Result<Snapshot> {
        Ok(self.snapshot.clone())
    }

    async fn create(
        &self,
        _request: CreateExtensionRequest,
    ) -> anyhow::Result<MutationResponse> {
        Ok(self.mutation.clone())
    }

    async fn delete(
        &self,
        _name: &ExtensionName,
    ) -> anyhow::Result<MutationResponse> {
        Ok(self.mutation.clone())
    }
}

pub fn name(raw: &str) -> ExtensionName {
    ExtensionName::parse(raw).expect("test name should be valid")
}

pub fn entry(raw: &str, kind: ExtensionKind) -> ExtensionEntry {
    ExtensionEntry::new(name(raw), kind)
}

pub fn snapshot(checked: &[&str], labels: &[&str]) -> Snapshot {
    Snapshot::new(
        checked
            .iter()
            .map(|raw| entry(raw, ExtensionKind::Check))
            .collect(),
        labels
            .iter()
            .map(|raw| entry(raw, ExtensionKind::Label))
            .collect(),
    )
}

/// Fresh state around a stub service.
pub fn state_with(api: StubApi) -> State {
    State::new(Arc::new(api))
}

pub fn new_state() -> State {
    state_with(StubApi::ok())
}
