//! Add flow: sanitization, local rejections that never build a request,
//! and completion handling. The flow is not optimistic — the custom list
//! only changes when the post-add refresh lands.

mod common;

use common::new_state;
use extguard_contracts::MutationResponse;
use extguard_model::{FIXED_EXTENSIONS, MAX_LABEL_EXTENSIONS};
use extguard_panel::toast::ToastLevel;
use extguard_panel::update::{
    handle_add_completed, handle_add_pressed, handle_input_changed,
};

#[test]
fn input_is_sanitized_on_every_change() {
    let mut state = new_state();

    let _ = handle_input_changed(&mut state, "s h!".to_string());
    assert_eq!(state.input_value, "sh");
    let toast = state.toasts.current().expect("a sanitization warning");
    assert_eq!(toast.level, ToastLevel::Error);
}

#[test]
fn clean_input_raises_no_warning() {
    let mut state = new_state();

    let _ = handle_input_changed(&mut state, "sh7".to_string());
    assert_eq!(state.input_value, "sh7");
    assert!(state.toasts.current().is_none());
}

#[test]
fn adding_a_reserved_name_is_rejected_locally() {
    for reserved in FIXED_EXTENSIONS {
        let mut state = new_state();
        state.input_value = reserved.to_string();

        let _ = handle_add_pressed(&mut state);

        let toast = state.toasts.current().expect("a rejection toast");
        assert_eq!(toast.level, ToastLevel::Error);
        assert!(toast.message.contains("Fixed extensions"));
        assert!(state.input_value.is_empty());
        assert!(state.labels.is_empty());
    }
}

#[test]
fn adding_at_capacity_is_rejected_locally() {
    let mut state = new_state();
    state.label_count = MAX_LABEL_EXTENSIONS;
    state.input_value = "tar".to_string();

    let _ = handle_add_pressed(&mut state);

    let toast = state.toasts.current().expect("a rejection toast");
    assert_eq!(toast.level, ToastLevel::Error);
    assert!(toast.message.contains("200"));
}

#[test]
fn empty_input_is_a_noop() {
    let mut state = new_state();

    let _ = handle_add_pressed(&mut state);

    assert!(state.toasts.current().is_none());
}

#[test]
fn submission_clears_the_field_before_the_response_arrives() {
    let mut state = new_state();
    state.input_value = "tar".to_string();

    let _ = handle_add_pressed(&mut state);

    assert!(state.input_value.is_empty());
    // No optimistic insertion.
    assert!(state.labels.is_empty());
}

#[test]
fn successful_add_toasts_success() {
    let mut state = new_state();

    let _ = handle_add_completed(&mut state, Ok(MutationResponse::ok()));

    let toast = state.toasts.current().expect("a success toast");
    assert_eq!(toast.level, ToastLevel::Success);
}

#[test]
fn rejected_add_surfaces_the_server_message() {
    let mut state = new_state();

    let _ = handle_add_completed(
        &mut state,
        Ok(MutationResponse::rejected("extension already exists: tar")),
    );

    let toast = state.toasts.current().expect("an error toast");
    assert_eq!(toast.level, ToastLevel::Error);
    assert_eq!(toast.message, "extension already exists: tar");
    assert!(state.labels.is_empty());
}

#[test]
fn transport_failure_surfaces_a_generic_message() {
    let mut state = new_state();

    let _ = handle_add_completed(
        &mut state,
        Err("error sending request".to_string()),
    );

    let toast = state.toasts.current().expect("an error toast");
    assert_eq!(toast.level, ToastLevel::Error);
    assert!(!toast.message.contains("error sending request"));
    assert!(toast.message.contains("adding"));
}
