use serde::{Deserialize, Serialize};

use crate::extension::ExtensionEntry;

/// The server-computed state of every blocked extension at fetch time.
///
/// Snapshots are replaced wholesale: the panel re-fetches after each
/// successful mutation instead of patching entries locally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub check_extensions: Vec<ExtensionEntry>,
    #[serde(default)]
    pub label_extensions: Vec<ExtensionEntry>,
    #[serde(default)]
    pub label_extension_count: usize,
}

impl Snapshot {
    pub fn new(
        check_extensions: Vec<ExtensionEntry>,
        label_extensions: Vec<ExtensionEntry>,
    ) -> Self {
        let label_extension_count = label_extensions.len();
        Self { check_extensions, label_extensions, label_extension_count }
    }

    /// Whether a fixed extension is currently enabled in this snapshot.
    pub fn is_checked(&self, name: &str) -> bool {
        self.check_extensions.iter().any(|entry| entry.name.as_str() == name)
    }
}
