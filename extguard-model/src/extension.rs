//! Extension names, kinds, and the pure decision logic behind the add
//! control.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{BlocklistError, NameError};

/// The seven permanently known dangerous extensions, toggled by checkbox.
///
/// This set is closed: the backend stores their enabled state but the names
/// themselves never change, and none of them may appear in the custom list.
pub const FIXED_EXTENSIONS: [&str; 7] =
    ["bat", "cmd", "com", "cpl", "exe", "scr", "js"];

/// Upper bound on user-added custom extensions.
pub const MAX_LABEL_EXTENSIONS: usize = 200;

/// Longest accepted extension name, matching the backend's
/// `^[a-zA-Z0-9]{1,20}$` rule.
pub const MAX_NAME_LEN: usize = 20;

/// A validated extension name: lowercase ASCII alphanumeric, 1..=20 bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExtensionName(String);

impl ExtensionName {
    /// Parse a user- or server-supplied name, trimming surrounding
    /// whitespace and lowercasing before validating.
    pub fn parse(raw: &str) -> Result<Self, NameError> {
        let name = raw.trim().to_ascii_lowercase();
        if name.is_empty() {
            return Err(NameError::Empty);
        }
        if name.len() > MAX_NAME_LEN {
            return Err(NameError::TooLong);
        }
        if !name.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(NameError::InvalidCharacter);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is one of the seven reserved fixed extensions.
    pub fn is_fixed(&self) -> bool {
        FIXED_EXTENSIONS.contains(&self.0.as_str())
    }
}

impl std::fmt::Display for ExtensionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ExtensionName {
    type Error = NameError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<ExtensionName> for String {
    fn from(name: ExtensionName) -> Self {
        name.0
    }
}

/// The fixed set as validated names, in display order.
pub fn fixed_extension_names() -> impl Iterator<Item = ExtensionName> {
    FIXED_EXTENSIONS.into_iter().map(|name| ExtensionName(name.to_string()))
}

/// How an extension is represented and managed in the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionKind {
    /// Fixed extension, toggled by checkbox.
    Check,
    /// User-added custom extension, rendered as a removable tag.
    Label,
}

impl ExtensionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Check => "check",
            Self::Label => "label",
        }
    }
}

/// One blocked extension as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionEntry {
    pub name: ExtensionName,
    #[serde(rename = "type")]
    pub kind: ExtensionKind,
    /// Operator id recorded by the backend at registration time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reg_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reg_date: Option<DateTime<Utc>>,
}

impl ExtensionEntry {
    pub fn new(name: ExtensionName, kind: ExtensionKind) -> Self {
        Self { name, kind, reg_id: None, reg_date: None }
    }
}

/// Filter an add-field edit down to the characters the backend accepts.
///
/// Strips everything outside `[a-zA-Z0-9]` and clamps to [`MAX_NAME_LEN`].
pub fn sanitize_name_input(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .take(MAX_NAME_LEN)
        .collect()
}

/// Mutually exclusive states of the add control, derived from the current
/// input text and custom count. [`AddControl::Blocked`] wins over
/// [`AddControl::AtCapacity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddControl {
    /// The input spells a fixed extension; adding is disabled.
    Blocked,
    /// The custom list is full; adding is disabled.
    AtCapacity,
    /// Adding is allowed.
    Normal,
}

/// Derive the add-control state for the given input and custom count.
pub fn add_control(input: &str, label_count: usize) -> AddControl {
    let candidate = input.trim().to_ascii_lowercase();
    if !candidate.is_empty() && FIXED_EXTENSIONS.contains(&candidate.as_str())
    {
        AddControl::Blocked
    } else if label_count >= MAX_LABEL_EXTENSIONS {
        AddControl::AtCapacity
    } else {
        AddControl::Normal
    }
}

/// What pressing Add should do for the current input and custom count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddAction {
    /// Input is empty; do nothing.
    Ignore,
    /// Reject locally. Rejections never reach the network.
    Reject(BlocklistError),
    /// Submit the validated name to the backend.
    Submit(ExtensionName),
}

/// Decide what pressing Add does. Local rejections (reserved names, a full
/// list, invalid input) are decided here, before any request is built.
pub fn plan_add(input: &str, label_count: usize) -> AddAction {
    if input.trim().is_empty() {
        return AddAction::Ignore;
    }
    let name = match ExtensionName::parse(input) {
        Ok(name) => name,
        Err(_) => return AddAction::Reject(BlocklistError::InvalidInput),
    };
    if name.is_fixed() {
        return AddAction::Reject(BlocklistError::FixedExtensionConflict);
    }
    if label_count >= MAX_LABEL_EXTENSIONS {
        return AddAction::Reject(BlocklistError::CapacityExceeded);
    }
    AddAction::Submit(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_lowercases() {
        let name = ExtensionName::parse("  PdF ").unwrap();
        assert_eq!(name.as_str(), "pdf");
    }

    #[test]
    fn parse_rejects_empty_and_whitespace() {
        assert_eq!(ExtensionName::parse(""), Err(NameError::Empty));
        assert_eq!(ExtensionName::parse("   "), Err(NameError::Empty));
    }

    #[test]
    fn parse_rejects_non_alphanumerics() {
        for raw in ["ex e", "exe!", "한글", "tar.gz", "a-b"] {
            assert_eq!(
                ExtensionName::parse(raw),
                Err(NameError::InvalidCharacter),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn parse_enforces_length_cap() {
        let at_cap = "a".repeat(MAX_NAME_LEN);
        assert!(ExtensionName::parse(&at_cap).is_ok());
        let over = "a".repeat(MAX_NAME_LEN + 1);
        assert_eq!(ExtensionName::parse(&over), Err(NameError::TooLong));
    }

    #[test]
    fn fixed_membership_is_case_insensitive_after_parse() {
        for raw in ["exe", "EXE", " Exe "] {
            assert!(ExtensionName::parse(raw).unwrap().is_fixed());
        }
        assert!(!ExtensionName::parse("pdf").unwrap().is_fixed());
    }

    #[test]
    fn sanitize_strips_everything_outside_the_accepted_alphabet() {
        for raw in ["ab!c", "한글abc", "a b\tc", "a.b,c", "<script>abc</script>"]
        {
            let cleaned = sanitize_name_input(raw);
            assert!(
                cleaned.chars().all(|c| c.is_ascii_alphanumeric()),
                "{raw:?} sanitized to {cleaned:?}"
            );
        }
        assert_eq!(sanitize_name_input("ab!c"), "abc");
        assert_eq!(sanitize_name_input("...."), "");
    }

    #[test]
    fn sanitize_clamps_to_name_length() {
        let raw = "a".repeat(MAX_NAME_LEN * 2);
        assert_eq!(sanitize_name_input(&raw).len(), MAX_NAME_LEN);
    }

    #[test]
    fn add_control_flags_reserved_names() {
        for name in FIXED_EXTENSIONS {
            assert_eq!(add_control(name, 0), AddControl::Blocked);
        }
        // Reserved beats at-capacity.
        assert_eq!(add_control("exe", MAX_LABEL_EXTENSIONS), AddControl::Blocked);
    }

    #[test]
    fn add_control_flags_a_full_list() {
        assert_eq!(
            add_control("pdf", MAX_LABEL_EXTENSIONS),
            AddControl::AtCapacity
        );
        assert_eq!(add_control("", MAX_LABEL_EXTENSIONS), AddControl::AtCapacity);
        assert_eq!(
            add_control("pdf", MAX_LABEL_EXTENSIONS - 1),
            AddControl::Normal
        );
    }

    #[test]
    fn plan_add_never_submits_reserved_names() {
        for name in FIXED_EXTENSIONS {
            assert_eq!(
                plan_add(name, 0),
                AddAction::Reject(BlocklistError::FixedExtensionConflict)
            );
        }
        // Normalization cannot be used to sneak one past the check.
        assert_eq!(
            plan_add(" EXE ", 0),
            AddAction::Reject(BlocklistError::FixedExtensionConflict)
        );
    }

    #[test]
    fn plan_add_never_submits_past_capacity() {
        assert_eq!(
            plan_add("pdf", MAX_LABEL_EXTENSIONS),
            AddAction::Reject(BlocklistError::CapacityExceeded)
        );
        assert_eq!(
            plan_add("pdf", MAX_LABEL_EXTENSIONS + 3),
            AddAction::Reject(BlocklistError::CapacityExceeded)
        );
    }

    #[test]
    fn plan_add_ignores_empty_input() {
        assert_eq!(plan_add("", 0), AddAction::Ignore);
        assert_eq!(plan_add("   ", 0), AddAction::Ignore);
    }

    #[test]
    fn plan_add_submits_normalized_names() {
        let AddAction::Submit(name) = plan_add(" Pdf ", 3) else {
            panic!("expected a submission");
        };
        assert_eq!(name.as_str(), "pdf");
    }

    #[test]
    fn name_serde_round_trip_validates() {
        let name: ExtensionName = serde_json::from_str("\"PDF\"").unwrap();
        assert_eq!(name.as_str(), "pdf");
        assert!(serde_json::from_str::<ExtensionName>("\"no way\"").is_err());
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"pdf\"");
    }

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ExtensionKind::Check).unwrap(),
            "\"check\""
        );
        assert_eq!(
            serde_json::to_string(&ExtensionKind::Label).unwrap(),
            "\"label\""
        );
    }
}
