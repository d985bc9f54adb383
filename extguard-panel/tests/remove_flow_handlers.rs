//! Remove flow: confirmation gating and non-optimistic completion. The tag
//! only disappears when the post-remove refresh lands.

mod common;

use common::{name, new_state, snapshot};
use extguard_contracts::MutationResponse;
use extguard_panel::toast::ToastLevel;
use extguard_panel::update::{
    handle_remove_cancelled, handle_remove_completed,
    handle_remove_confirmed, handle_remove_requested,
    handle_snapshot_loaded,
};

#[test]
fn requesting_removal_only_opens_the_confirmation() {
    let mut state = new_state();
    let _ = handle_snapshot_loaded(&mut state, Ok(snapshot(&[], &["foo"])));

    let _ = handle_remove_requested(&mut state, name("foo"));

    assert_eq!(state.pending_remove, Some(name("foo")));
    // The tag is untouched until the refresh after a confirmed delete.
    assert_eq!(state.labels, vec![name("foo")]);
}

#[test]
fn declining_the_confirmation_changes_nothing() {
    let mut state = new_state();
    let _ = handle_snapshot_loaded(&mut state, Ok(snapshot(&[], &["foo"])));
    let _ = handle_remove_requested(&mut state, name("foo"));

    let _ = handle_remove_cancelled(&mut state);

    assert!(state.pending_remove.is_none());
    assert_eq!(state.labels, vec![name("foo")]);
    assert!(state.toasts.current().is_none());
}

#[test]
fn confirming_consumes_the_pending_entry() {
    let mut state = new_state();
    let _ = handle_remove_requested(&mut state, name("foo"));

    let _ = handle_remove_confirmed(&mut state);

    assert!(state.pending_remove.is_none());
}

#[test]
fn confirming_with_nothing_pending_is_a_noop() {
    let mut state = new_state();

    let _ = handle_remove_confirmed(&mut state);

    assert!(state.pending_remove.is_none());
    assert!(state.toasts.current().is_none());
}

#[test]
fn failed_removal_keeps_the_tag_and_shows_the_error() {
    let mut state = new_state();
    let _ = handle_snapshot_loaded(&mut state, Ok(snapshot(&[], &["foo"])));

    let _ = handle_remove_completed(
        &mut state,
        name("foo"),
        Ok(MutationResponse::rejected("extension not found: foo")),
    );

    assert_eq!(state.labels, vec![name("foo")]);
    let toast = state.toasts.current().expect("an error toast");
    assert_eq!(toast.level, ToastLevel::Error);
    assert_eq!(toast.message, "extension not found: foo");
}

#[test]
fn successful_removal_toasts_success() {
    let mut state = new_state();

    let _ = handle_remove_completed(
        &mut state,
        name("foo"),
        Ok(MutationResponse::ok()),
    );

    let toast = state.toasts.current().expect("a success toast");
    assert_eq!(toast.level, ToastLevel::Success);
}
