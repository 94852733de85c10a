//! Action → transformation lookup table.
//!
//! The table keeps insertion order so listings match the order controls were
//! declared in. It is immutable once built.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One named action and the transformation string it selects.
///
/// An empty `transformation` means "no transformation".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformEntry {
    pub action: String,
    #[serde(default)]
    pub transformation: String,
}

impl TransformEntry {
    pub fn new(action: impl Into<String>, transformation: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            transformation: transformation.into(),
        }
    }
}

/// Built-in demo actions, in button order.
const BUILTIN: &[(&str, &str)] = &[
    ("overlay", "c_fit,l_text:Arial_50:Overlay%20Text,co_white"),
    ("cartoon", "e_cartoonify"),
    ("square", "c_fill,g_auto,w_333,ar_1"),
    ("gen_remove", "e_gen_remove:prompt_the%20bee"),
    ("reset", ""),
];

/// Ordered, read-only mapping from action name to transformation string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformTable {
    entries: Vec<TransformEntry>,
}

impl TransformTable {
    /// Builds a table, rejecting empty or duplicate action names.
    pub fn new(entries: Vec<TransformEntry>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            if entry.action.trim().is_empty() {
                return Err(ConfigError::EmptyAction { index });
            }
            if !seen.insert(entry.action.as_str()) {
                return Err(ConfigError::DuplicateAction(entry.action.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// The table shipped with the demo page.
    pub fn builtin() -> Self {
        Self {
            entries: builtin_entries(),
        }
    }

    /// Transformation for `action`, or `None` if the action is not defined.
    ///
    /// `Some("")` is a defined action that applies no transformation.
    pub fn get(&self, action: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.action == action)
            .map(|e| e.transformation.as_str())
    }

    pub fn actions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.action.as_str())
    }

    pub fn entries(&self) -> &[TransformEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Built-in entries as owned values (used for the default config file).
pub fn builtin_entries() -> Vec<TransformEntry> {
    BUILTIN
        .iter()
        .map(|(action, t)| TransformEntry::new(*action, *t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lookup() {
        let table = TransformTable::builtin();
        assert_eq!(table.get("cartoon"), Some("e_cartoonify"));
        assert_eq!(table.get("square"), Some("c_fill,g_auto,w_333,ar_1"));
        assert_eq!(
            table.get("overlay"),
            Some("c_fit,l_text:Arial_50:Overlay%20Text,co_white")
        );
        assert_eq!(table.get("gen_remove"), Some("e_gen_remove:prompt_the%20bee"));
    }

    #[test]
    fn reset_is_defined_but_empty() {
        let table = TransformTable::builtin();
        assert_eq!(table.get("reset"), Some(""));
    }

    #[test]
    fn unknown_action_is_absent() {
        let table = TransformTable::builtin();
        assert_eq!(table.get("unknown_action"), None);
        assert_eq!(table.get("Cartoon"), None);
        assert_eq!(table.get(""), None);
    }

    #[test]
    fn builtin_order_is_button_order() {
        let table = TransformTable::builtin();
        let actions: Vec<&str> = table.actions().collect();
        assert_eq!(
            actions,
            vec!["overlay", "cartoon", "square", "gen_remove", "reset"]
        );
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn custom_table_keeps_order() {
        let table = TransformTable::new(vec![
            TransformEntry::new("sepia", "e_sepia"),
            TransformEntry::new("blur", "e_blur:300"),
        ])
        .unwrap();
        let actions: Vec<&str> = table.actions().collect();
        assert_eq!(actions, vec!["sepia", "blur"]);
        assert_eq!(table.get("blur"), Some("e_blur:300"));
    }

    #[test]
    fn rejects_duplicate_action() {
        let err = TransformTable::new(vec![
            TransformEntry::new("blur", "e_blur"),
            TransformEntry::new("blur", "e_blur:300"),
        ])
        .unwrap_err();
        assert_eq!(err, ConfigError::DuplicateAction("blur".to_string()));
    }

    #[test]
    fn rejects_empty_action() {
        let err = TransformTable::new(vec![
            TransformEntry::new("blur", "e_blur"),
            TransformEntry::new("  ", "e_sepia"),
        ])
        .unwrap_err();
        assert_eq!(err, ConfigError::EmptyAction { index: 1 });
    }

    #[test]
    fn empty_table_is_allowed() {
        let table = TransformTable::new(Vec::new()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.get("reset"), None);
    }
}
