use extguard_contracts::MutationResponse;
use extguard_model::{ExtensionName, Snapshot};

/// Remote results arrive with transport errors already flattened to their
/// display strings, so messages stay `Clone`.
pub type RemoteResult = Result<MutationResponse, String>;

#[derive(Debug, Clone)]
pub enum Message {
    /// A fresh snapshot arrived (boot or post-mutation refresh).
    SnapshotLoaded(Result<Snapshot, String>),

    /// The add field changed.
    InputChanged(String),
    /// The add button was pressed (or Enter in the field).
    AddPressed,
    AddCompleted(RemoteResult),

    /// The remove button on a tag was pressed; asks for confirmation.
    RemoveRequested(ExtensionName),
    RemoveConfirmed,
    RemoveCancelled,
    RemoveCompleted(ExtensionName, RemoteResult),

    /// A fixed-extension checkbox was flipped to `checked`.
    FixedToggled(ExtensionName, bool),
    FixedToggleCompleted {
        name: ExtensionName,
        /// The state the user flipped the box to, to roll back on failure.
        attempted: bool,
        result: RemoteResult,
    },

    ToastExpired(u64),
    ToastDismissed,
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SnapshotLoaded(_) => "SnapshotLoaded",
            Self::InputChanged(_) => "InputChanged",
            Self::AddPressed => "AddPressed",
            Self::AddCompleted(_) => "AddCompleted",
            Self::RemoveRequested(_) => "RemoveRequested",
            Self::RemoveConfirmed => "RemoveConfirmed",
            Self::RemoveCancelled => "RemoveCancelled",
            Self::RemoveCompleted(..) => "RemoveCompleted",
            Self::FixedToggled(..) => "FixedToggled",
            Self::FixedToggleCompleted { .. } => "FixedToggleCompleted",
            Self::ToastExpired(_) => "ToastExpired",
            Self::ToastDismissed => "ToastDismissed",
        }
    }
}
