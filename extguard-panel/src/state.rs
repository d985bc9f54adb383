//! Application state for the blocklist panel.

use std::sync::Arc;

use extguard_contracts::ExtensionsApi;
use extguard_model::{
    AddControl, ExtensionName, Snapshot, add_control, fixed_extension_names,
};

use crate::toast::Toasts;

/// One row of the fixed-extension checkbox group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedExtension {
    pub name: ExtensionName,
    pub checked: bool,
}

/// All client-side state for the blocked-extension editor.
///
/// The state owns a handle to the backend service; everything else is what
/// the last snapshot said, plus the in-progress edit and overlay state.
pub struct State {
    pub api: Arc<dyn ExtensionsApi>,

    /// The seven fixed extensions, in display order.
    pub fixed: Vec<FixedExtension>,
    /// Custom extensions rendered as removable tags.
    pub labels: Vec<ExtensionName>,
    /// Custom-extension count as reported by the snapshot.
    pub label_count: usize,

    /// Current (already sanitized) content of the add field.
    pub input_value: String,
    /// Tag awaiting removal confirmation, if the modal is open.
    pub pending_remove: Option<ExtensionName>,

    pub toasts: Toasts,
    /// True until the first snapshot lands.
    pub loading: bool,
}

impl State {
    pub fn new(api: Arc<dyn ExtensionsApi>) -> Self {
        Self {
            api,
            fixed: fixed_extension_names()
                .map(|name| FixedExtension { name, checked: false })
                .collect(),
            labels: Vec::new(),
            label_count: 0,
            input_value: String::new(),
            pending_remove: None,
            toasts: Toasts::default(),
            loading: true,
        }
    }

    /// Replace everything the snapshot governs. No merging: the server's
    /// answer wins wholesale.
    pub fn apply_snapshot(&mut self, snapshot: Snapshot) {
        for row in &mut self.fixed {
            row.checked = snapshot.is_checked(row.name.as_str());
        }
        self.labels = snapshot
            .label_extensions
            .into_iter()
            .map(|entry| entry.name)
            .collect();
        self.label_count = snapshot.label_extension_count;
        self.loading = false;
    }

    /// Current add-control affordance, derived from input and count.
    pub fn add_control(&self) -> AddControl {
        add_control(&self.input_value, self.label_count)
    }

    pub fn fixed_mut(
        &mut self,
        name: &ExtensionName,
    ) -> Option<&mut FixedExtension> {
        self.fixed.iter_mut().find(|row| row.name == *name)
    }
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("fixed", &self.fixed)
            .field("labels", &self.labels)
            .field("label_count", &self.label_count)
            .field("input_value", &self.input_value)
            .field("pending_remove", &self.pending_remove)
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}
