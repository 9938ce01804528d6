//! Descriptive metadata for theme roles.
//!
//! [`ThemeVarConfig`] entries label and explain each role for pickers,
//! editors and generators. The manager only stores and returns them.

use serde::{Deserialize, Serialize};

use crate::role::ThemeRole;

/// Presentation metadata for one role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeVarConfig {
    /// Display name, e.g. `"Focus Ring"`.
    pub name: String,
    /// The role this entry documents.
    pub var: ThemeRole,
    /// Guidance on how the role is used, aimed at humans and generators.
    #[serde(default, alias = "aiDescription", skip_serializing_if = "Option::is_none")]
    pub ai_description: Option<String>,
}

impl ThemeVarConfig {
    pub fn new(name: impl Into<String>, var: ThemeRole) -> Self {
        Self {
            name: name.into(),
            var,
            ai_description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.ai_description = Some(description.into());
        self
    }
}

/// The canonical metadata table: one entry per role, in role order.
///
/// Copy and edit it to document a custom design system.
pub fn default_theme_config() -> Vec<ThemeVarConfig> {
    ThemeRole::ALL
        .iter()
        .map(|role| ThemeVarConfig::new(role.label(), *role).with_description(role.description()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_covers_every_role() {
        let table = default_theme_config();
        assert_eq!(table.len(), 19);
        let vars: Vec<_> = table.iter().map(|entry| entry.var).collect();
        assert_eq!(vars, ThemeRole::ALL.to_vec());
        assert!(table.iter().all(|entry| entry.ai_description.is_some()));
    }

    #[test]
    fn test_default_table_labels() {
        let table = default_theme_config();
        assert_eq!(table[3].name, "Primary Text");
        assert_eq!(table[14].name, "Focus Ring");
    }

    #[test]
    fn test_deserialize_accepts_camel_case_description() {
        let entry: ThemeVarConfig = serde_json::from_str(
            r#"{"name":"Ring","var":"ring","aiDescription":"focus outline"}"#,
        )
        .unwrap();
        assert_eq!(entry.var, ThemeRole::Ring);
        assert_eq!(entry.ai_description.as_deref(), Some("focus outline"));
    }

    #[test]
    fn test_description_is_optional() {
        let entry: ThemeVarConfig =
            serde_yaml::from_str("name: Card\nvar: card\n").unwrap();
        assert_eq!(entry.ai_description, None);
    }
}
