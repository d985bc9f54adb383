//! Message handling for the blocklist panel.
//!
//! Remote work is dispatched as [`Task`]s; completion messages route back
//! through here. The add/remove tag flows are not optimistic — they wait
//! for the post-mutation snapshot re-fetch. The fixed-extension toggle is
//! the one optimistic path and rolls back on failure.

use std::sync::Arc;

use iced::Task;

use extguard_contracts::CreateExtensionRequest;
use extguard_model::{
    AddAction, BlocklistError, ExtensionKind, ExtensionName, Snapshot,
    plan_add, sanitize_name_input,
};

use crate::message::{Message, RemoteResult};
use crate::state::State;
use crate::toast::{TOAST_TTL, ToastLevel};

/// Generic messages for transport-level failures; the server's own message
/// is used whenever it sent one.
const ADD_FAILED: &str = "Something went wrong while adding the extension.";
const REMOVE_FAILED: &str =
    "Something went wrong while removing the extension.";
const TOGGLE_FAILED: &str =
    "Something went wrong while updating the extension.";
const LOAD_FAILED: &str = "Failed to load the extension blocklist.";

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    log::debug!("update::{}", message.name());

    match message {
        Message::SnapshotLoaded(result) => {
            handle_snapshot_loaded(state, result)
        }
        Message::InputChanged(value) => handle_input_changed(state, value),
        Message::AddPressed => handle_add_pressed(state),
        Message::AddCompleted(result) => handle_add_completed(state, result),
        Message::RemoveRequested(name) => handle_remove_requested(state, name),
        Message::RemoveConfirmed => handle_remove_confirmed(state),
        Message::RemoveCancelled => handle_remove_cancelled(state),
        Message::RemoveCompleted(name, result) => {
            handle_remove_completed(state, name, result)
        }
        Message::FixedToggled(name, checked) => {
            handle_fixed_toggled(state, name, checked)
        }
        Message::FixedToggleCompleted { name, attempted, result } => {
            handle_fixed_toggle_completed(state, name, attempted, result)
        }
        Message::ToastExpired(id) => {
            state.toasts.expire(id);
            Task::none()
        }
        Message::ToastDismissed => {
            state.toasts.dismiss();
            Task::none()
        }
    }
}

// Snapshot

/// Kick off a full blocklist re-fetch.
pub fn refresh_snapshot(state: &State) -> Task<Message> {
    let api = Arc::clone(&state.api);
    Task::perform(
        async move {
            api.fetch_snapshot().await.map_err(|err| err.to_string())
        },
        Message::SnapshotLoaded,
    )
}

pub fn handle_snapshot_loaded(
    state: &mut State,
    result: Result<Snapshot, String>,
) -> Task<Message> {
    match result {
        Ok(snapshot) => {
            log::info!(
                "Loaded blocklist: {} fixed enabled, {} custom",
                snapshot.check_extensions.len(),
                snapshot.label_extension_count
            );
            state.apply_snapshot(snapshot);
            Task::none()
        }
        Err(err) => {
            log::error!("Failed to fetch blocklist snapshot: {err}");
            state.loading = false;
            show_toast(state, LOAD_FAILED, ToastLevel::Error)
        }
    }
}

// Add flow

pub fn handle_input_changed(
    state: &mut State,
    value: String,
) -> Task<Message> {
    let sanitized = sanitize_name_input(&value);
    let rejected = sanitized != value;
    state.input_value = sanitized;

    if rejected {
        show_toast(
            state,
            BlocklistError::InvalidInput.to_string(),
            ToastLevel::Error,
        )
    } else {
        Task::none()
    }
}

pub fn handle_add_pressed(state: &mut State) -> Task<Message> {
    match plan_add(&state.input_value, state.label_count) {
        AddAction::Ignore => Task::none(),
        AddAction::Reject(err) => {
            log::warn!("Add rejected locally: {err}");
            state.input_value.clear();
            show_toast(state, err.to_string(), ToastLevel::Error)
        }
        AddAction::Submit(name) => {
            log::info!("Adding custom extension '{name}'");
            state.input_value.clear();

            let api = Arc::clone(&state.api);
            Task::perform(
                async move {
                    api.create(CreateExtensionRequest::new(
                        name,
                        ExtensionKind::Label,
                    ))
                    .await
                    .map_err(|err| err.to_string())
                },
                Message::AddCompleted,
            )
        }
    }
}

pub fn handle_add_completed(
    state: &mut State,
    result: RemoteResult,
) -> Task<Message> {
    match into_outcome(result, ADD_FAILED) {
        Ok(()) => {
            log::info!("Extension added, refreshing blocklist");
            let toast = show_toast(
                state,
                "Extension added successfully.",
                ToastLevel::Success,
            );
            Task::batch([toast, refresh_snapshot(state)])
        }
        Err(err) => {
            log::warn!("Add failed: {err}");
            show_toast(state, err.to_string(), ToastLevel::Error)
        }
    }
}

// Remove flow

pub fn handle_remove_requested(
    state: &mut State,
    name: ExtensionName,
) -> Task<Message> {
    state.pending_remove = Some(name);
    Task::none()
}

pub fn handle_remove_cancelled(state: &mut State) -> Task<Message> {
    state.pending_remove = None;
    Task::none()
}

pub fn handle_remove_confirmed(state: &mut State) -> Task<Message> {
    let Some(name) = state.pending_remove.take() else {
        return Task::none();
    };
    log::info!("Removing custom extension '{name}'");

    let api = Arc::clone(&state.api);
    let completed = name.clone();
    Task::perform(
        async move {
            api.delete(&name).await.map_err(|err| err.to_string())
        },
        move |result| Message::RemoveCompleted(completed.clone(), result),
    )
}

pub fn handle_remove_completed(
    state: &mut State,
    name: ExtensionName,
    result: RemoteResult,
) -> Task<Message> {
    match into_outcome(result, REMOVE_FAILED) {
        Ok(()) => {
            log::info!("Extension '{name}' removed, refreshing blocklist");
            let toast = show_toast(
                state,
                "Extension removed successfully.",
                ToastLevel::Success,
            );
            Task::batch([toast, refresh_snapshot(state)])
        }
        Err(err) => {
            // The tag stays rendered; nothing was touched locally.
            log::warn!("Remove of '{name}' failed: {err}");
            show_toast(state, err.to_string(), ToastLevel::Error)
        }
    }
}

// Fixed-extension toggles

pub fn handle_fixed_toggled(
    state: &mut State,
    name: ExtensionName,
    checked: bool,
) -> Task<Message> {
    let Some(row) = state.fixed_mut(&name) else {
        log::warn!("Toggle for unknown fixed extension '{name}'");
        return Task::none();
    };
    // Reflect the click immediately; rolled back if the backend refuses.
    row.checked = checked;
    log::info!("Fixed extension '{name}' toggled to {checked}");

    let api = Arc::clone(&state.api);
    let completed = name.clone();
    Task::perform(
        async move {
            let result = if checked {
                api.create(CreateExtensionRequest::new(
                    name,
                    ExtensionKind::Check,
                ))
                .await
            } else {
                api.delete(&name).await
            };
            result.map_err(|err| err.to_string())
        },
        move |result| Message::FixedToggleCompleted {
            name: completed.clone(),
            attempted: checked,
            result,
        },
    )
}

pub fn handle_fixed_toggle_completed(
    state: &mut State,
    name: ExtensionName,
    attempted: bool,
    result: RemoteResult,
) -> Task<Message> {
    match into_outcome(result, TOGGLE_FAILED) {
        Ok(()) => Task::none(),
        Err(err) => {
            log::warn!("Toggle of '{name}' failed, rolling back: {err}");
            if let Some(row) = state.fixed_mut(&name) {
                row.checked = !attempted;
            }
            show_toast(state, err.to_string(), ToastLevel::Error)
        }
    }
}

// Shared plumbing

/// Collapse a remote result into the error taxonomy: `success: false`
/// surfaces the server's message, a transport failure surfaces `fallback`.
fn into_outcome(
    result: RemoteResult,
    fallback: &str,
) -> Result<(), BlocklistError> {
    match result {
        Ok(response) if response.success => Ok(()),
        Ok(response) => Err(BlocklistError::ApiRejected(
            response.message.unwrap_or_else(|| fallback.to_string()),
        )),
        Err(transport) => {
            log::error!("Transport failure: {transport}");
            Err(BlocklistError::TransportFailure(fallback.to_string()))
        }
    }
}

/// Put a toast on screen and schedule its expiry.
fn show_toast(
    state: &mut State,
    message: impl Into<String>,
    level: ToastLevel,
) -> Task<Message> {
    let id = state.toasts.show(message, level);
    Task::perform(
        async move {
            tokio::time::sleep(TOAST_TTL).await;
            id
        },
        Message::ToastExpired,
    )
}
