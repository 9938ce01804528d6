//! Theme struct: a name plus one color value per role.
//!
//! Values are opaque strings. They are written verbatim into CSS custom
//! properties, so any format the stylesheet understands works (the built-in
//! themes use bare HSL triplets such as `"222.2 84% 4.9%"`, meant to be
//! consumed as `hsl(var(--background))`).
//!
//! # Construction
//!
//! ```rust
//! use vibetheme::{Theme, ThemeRole};
//!
//! let theme = Theme::new("midnight")
//!     .with(ThemeRole::Background, "240 30% 8%")
//!     .with(ThemeRole::Foreground, "0 0% 98%");
//!
//! assert_eq!(theme.get(ThemeRole::Background), Some("240 30% 8%"));
//! assert!(!theme.is_complete());
//! ```
//!
//! # From YAML
//!
//! ```rust
//! let theme = vibetheme::Theme::from_yaml(r#"
//! name: paper
//! vars:
//!   background: "0 0% 100%"
//!   foreground: "0 0% 10%"
//! "#).unwrap();
//! assert_eq!(theme.name(), "paper");
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ThemeFileError;
use crate::role::ThemeRole;

/// Recognized theme file extensions in priority order.
pub const THEME_EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

/// Lowercased extension of `path`, so `Theme.YAML` and `theme.yaml` match alike.
pub(crate) fn file_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// A named set of role-to-value assignments.
///
/// A fully specified theme assigns all 19 roles. Partial themes are
/// accepted everywhere; [`missing_roles`](Theme::missing_roles) reports
/// the gaps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Registry key, also used as the root element class.
    #[serde(default)]
    name: String,
    /// Role values, iterated in canonical role order.
    #[serde(default)]
    vars: BTreeMap<ThemeRole, String>,
}

impl Theme {
    /// Creates a theme with the given name and no values.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vars: BTreeMap::new(),
        }
    }

    /// Creates a complete theme from values listed in [`ThemeRole::ALL`] order.
    pub fn from_values(name: impl Into<String>, values: &[&str; 19]) -> Self {
        let vars = ThemeRole::ALL
            .iter()
            .zip(values.iter())
            .map(|(role, value)| (*role, (*value).to_string()))
            .collect();
        Self {
            name: name.into(),
            vars,
        }
    }

    /// Sets a role value, returning `self` for chaining.
    pub fn with(mut self, role: ThemeRole, value: impl Into<String>) -> Self {
        self.vars.insert(role, value.into());
        self
    }

    /// Renames the theme, returning `self` for chaining.
    ///
    /// Handy for deriving a custom theme from a built-in one.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets a role value in place, returning the previous value.
    pub fn set(&mut self, role: ThemeRole, value: impl Into<String>) -> Option<String> {
        self.vars.insert(role, value.into())
    }

    /// Returns the theme name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value assigned to `role`, if any.
    pub fn get(&self, role: ThemeRole) -> Option<&str> {
        self.vars.get(&role).map(String::as_str)
    }

    /// Iterates assigned roles and their values in canonical order.
    pub fn vars(&self) -> impl Iterator<Item = (ThemeRole, &str)> + '_ {
        self.vars.iter().map(|(role, value)| (*role, value.as_str()))
    }

    /// Iterates `(custom property name, value)` pairs, e.g. `("--ring", "...")`.
    pub fn css_properties(&self) -> impl Iterator<Item = (String, &str)> + '_ {
        self.vars().map(|(role, value)| (role.css_var(), value))
    }

    /// Number of assigned roles.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns true if no role is assigned.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Roles without a value, in canonical order.
    pub fn missing_roles(&self) -> Vec<ThemeRole> {
        ThemeRole::ALL
            .iter()
            .copied()
            .filter(|role| !self.vars.contains_key(role))
            .collect()
    }

    /// Returns true if every role has a value.
    pub fn is_complete(&self) -> bool {
        self.vars.len() == ThemeRole::ALL.len()
    }

    /// Overlays `other`'s values on top of this theme's.
    ///
    /// The name is kept; values present in `other` win.
    pub fn merge(mut self, other: Theme) -> Self {
        self.vars.extend(other.vars);
        self
    }

    /// Parses a theme from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeFileError::Parse`] on malformed YAML or unknown role keys.
    pub fn from_yaml(yaml: &str) -> Result<Self, ThemeFileError> {
        serde_yaml::from_str(yaml).map_err(|e| ThemeFileError::parse(None, e))
    }

    /// Parses a theme from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeFileError::Parse`] on malformed JSON or unknown role keys.
    pub fn from_json(json: &str) -> Result<Self, ThemeFileError> {
        serde_json::from_str(json).map_err(|e| ThemeFileError::parse(None, e))
    }

    /// Loads a theme from a `.yaml`, `.yml` or `.json` file.
    ///
    /// If the document has no `name`, the file stem is used.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let theme = vibetheme::Theme::from_file("./themes/nord.yaml")?;
    /// assert_eq!(theme.name(), "nord");
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ThemeFileError> {
        let path = path.as_ref();
        let extension = file_extension(path);

        let content = std::fs::read_to_string(path).map_err(|source| ThemeFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let parsed = match extension.as_deref() {
            Some("yaml") | Some("yml") => serde_yaml::from_str::<Theme>(&content)
                .map_err(|e| ThemeFileError::parse(Some(path.to_path_buf()), e)),
            Some("json") => serde_json::from_str::<Theme>(&content)
                .map_err(|e| ThemeFileError::parse(Some(path.to_path_buf()), e)),
            _ => Err(ThemeFileError::UnsupportedFormat(path.to_path_buf())),
        };
        let mut theme = parsed?;

        if theme.name.is_empty() {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                theme.name = stem.to_string();
            }
        }
        Ok(theme)
    }
}

/// Loads every theme file in `dir`, sorted by file name.
///
/// Files whose extension is not in [`THEME_EXTENSIONS`] are skipped.
/// Subdirectories are not descended into.
///
/// # Errors
///
/// Fails on the first unreadable directory entry or unparsable theme file.
pub fn load_theme_dir<P: AsRef<Path>>(dir: P) -> Result<Vec<Theme>, ThemeFileError> {
    let dir = dir.as_ref();
    let io_err = |source| ThemeFileError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        let recognized = file_extension(&path)
            .map(|e| THEME_EXTENSIONS.contains(&e.as_str()))
            .unwrap_or(false);
        if path.is_file() && recognized {
            paths.push(path);
        }
    }
    paths.sort();

    paths.iter().map(Theme::from_file).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_theme_is_empty() {
        let theme = Theme::new("blank");
        assert_eq!(theme.name(), "blank");
        assert!(theme.is_empty());
        assert_eq!(theme.missing_roles().len(), 19);
    }

    #[test]
    fn test_with_sets_values() {
        let theme = Theme::new("t")
            .with(ThemeRole::Ring, "0 0% 0%")
            .with(ThemeRole::Background, "0 0% 100%");

        assert_eq!(theme.len(), 2);
        assert_eq!(theme.get(ThemeRole::Ring), Some("0 0% 0%"));
        assert_eq!(theme.get(ThemeRole::Card), None);
    }

    #[test]
    fn test_vars_iterate_in_role_order() {
        let theme = Theme::new("t")
            .with(ThemeRole::PopoverForeground, "z")
            .with(ThemeRole::Background, "a")
            .with(ThemeRole::Ring, "m");

        let roles: Vec<_> = theme.vars().map(|(role, _)| role).collect();
        assert_eq!(
            roles,
            vec![
                ThemeRole::Background,
                ThemeRole::Ring,
                ThemeRole::PopoverForeground
            ]
        );
    }

    #[test]
    fn test_css_properties() {
        let theme = Theme::new("t").with(ThemeRole::MutedForeground, "1 2% 3%");
        let props: Vec<_> = theme.css_properties().collect();
        assert_eq!(props, vec![("--muted-foreground".to_string(), "1 2% 3%")]);
    }

    #[test]
    fn test_set_returns_previous() {
        let mut theme = Theme::new("t").with(ThemeRole::Input, "old");
        assert_eq!(theme.set(ThemeRole::Input, "new"), Some("old".to_string()));
        assert_eq!(theme.get(ThemeRole::Input), Some("new"));
    }

    #[test]
    fn test_from_values_is_complete() {
        let values = ["v"; 19];
        let theme = Theme::from_values("full", &values);
        assert!(theme.is_complete());
        assert!(theme.missing_roles().is_empty());
    }

    #[test]
    fn test_merge_overlays_values() {
        let base = Theme::new("base")
            .with(ThemeRole::Primary, "red")
            .with(ThemeRole::Border, "gray");
        let overrides = Theme::new("ignored").with(ThemeRole::Primary, "blue");

        let merged = base.merge(overrides);
        assert_eq!(merged.name(), "base");
        assert_eq!(merged.get(ThemeRole::Primary), Some("blue"));
        assert_eq!(merged.get(ThemeRole::Border), Some("gray"));
    }

    #[test]
    fn test_from_yaml() {
        let theme = Theme::from_yaml(
            r#"
            name: paper
            vars:
                background: "0 0% 100%"
                primary-foreground: "0 0% 98%"
            "#,
        )
        .unwrap();

        assert_eq!(theme.name(), "paper");
        assert_eq!(theme.get(ThemeRole::PrimaryForeground), Some("0 0% 98%"));
    }

    #[test]
    fn test_from_yaml_unknown_role() {
        let result = Theme::from_yaml(
            r#"
            name: bad
            vars:
                shadow: "0 0% 0%"
            "#,
        );
        assert!(matches!(result, Err(ThemeFileError::Parse { .. })));
    }

    #[test]
    fn test_from_json() {
        let theme =
            Theme::from_json(r#"{"name":"j","vars":{"card":"1 1% 1%","ring":"2 2% 2%"}}"#)
                .unwrap();
        assert_eq!(theme.name(), "j");
        assert_eq!(theme.len(), 2);
    }

    #[test]
    fn test_from_file_uses_stem_when_unnamed() {
        use std::fs;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nord.yaml");
        fs::write(
            &path,
            r#"
            vars:
                background: "220 16% 22%"
            "#,
        )
        .unwrap();

        let theme = Theme::from_file(&path).unwrap();
        assert_eq!(theme.name(), "nord");
        assert_eq!(theme.get(ThemeRole::Background), Some("220 16% 22%"));
    }

    #[test]
    fn test_from_file_keeps_declared_name() {
        use std::fs;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("file.json");
        fs::write(&path, r#"{"name":"declared","vars":{}}"#).unwrap();

        let theme = Theme::from_file(&path).unwrap();
        assert_eq!(theme.name(), "declared");
    }

    #[test]
    fn test_from_file_unsupported_extension() {
        use std::fs;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("theme.toml");
        fs::write(&path, "name = 'x'").unwrap();

        let result = Theme::from_file(&path);
        assert!(matches!(result, Err(ThemeFileError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_from_file_extension_case_insensitive() {
        use std::fs;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Nord.YML");
        fs::write(&path, "vars:\n  ring: \"0 0% 0%\"\n").unwrap();

        let theme = Theme::from_file(&path).unwrap();
        assert_eq!(theme.name(), "Nord");
        assert_eq!(theme.get(ThemeRole::Ring), Some("0 0% 0%"));
    }

    #[test]
    fn test_from_file_not_found() {
        let result = Theme::from_file("/nonexistent/path/theme.yaml");
        assert!(matches!(result, Err(ThemeFileError::Io { .. })));
    }

    #[test]
    fn test_load_theme_dir_sorted_and_filtered() {
        use std::fs;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b.yml"), "vars: {}").unwrap();
        fs::write(temp_dir.path().join("a.json"), r#"{"vars":{}}"#).unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "not a theme").unwrap();
        fs::create_dir(temp_dir.path().join("nested.yaml")).unwrap();

        let themes = load_theme_dir(temp_dir.path()).unwrap();
        let names: Vec<_> = themes.iter().map(Theme::name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
