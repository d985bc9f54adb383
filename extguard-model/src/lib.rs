//! Core data model definitions shared across Extguard crates.

pub mod error;
pub mod extension;
pub mod snapshot;

pub use error::{BlocklistError, NameError};
pub use extension::{
    AddAction, AddControl, ExtensionEntry, ExtensionKind, ExtensionName,
    FIXED_EXTENSIONS, MAX_LABEL_EXTENSIONS, MAX_NAME_LEN, add_control,
    fixed_extension_names, plan_add, sanitize_name_input,
};
pub use snapshot::Snapshot;
