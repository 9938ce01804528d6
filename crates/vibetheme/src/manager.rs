//! The theme manager: registry, active selection, persistence and system following.
//!
//! [`ThemeManager`] owns a name-keyed registry of [`Theme`]s and the name of
//! the active one. Every selection is mirrored into a [`ThemeStorage`] and
//! written to a [`StyleSink`].
//!
//! # Initial selection
//!
//! At construction the active theme is, in order of preference:
//!
//! 1. the persisted choice, if it names a registered theme;
//! 2. `"dark"` or `"light"` from the [`ColorSchemeSource`], if system
//!    following is enabled;
//! 3. the configured default (`"light"` unless set).
//!
//! # System following
//!
//! While system following is enabled and no explicit choice is persisted,
//! preference changes switch between the `"light"` and `"dark"` themes.
//! Changes arrive through [`handle_system_preference_change`] (push hosts,
//! e.g. a media-query listener) or [`sync_system_preference`] (hosts that
//! poll). [`destroy`] detaches the manager from further changes.
//!
//! [`handle_system_preference_change`]: ThemeManager::handle_system_preference_change
//! [`sync_system_preference`]: ThemeManager::sync_system_preference
//! [`destroy`]: ThemeManager::destroy
//!
//! # Example
//!
//! ```rust
//! use vibetheme::{
//!     MemoryDocument, MemoryStorage, MockColorScheme, ThemeManager, ThemeManagerConfig,
//! };
//!
//! let config = ThemeManagerConfig::new().builtin_themes(true);
//! let mut manager = ThemeManager::new(
//!     config,
//!     MemoryDocument::new(),
//!     MemoryStorage::new(),
//!     MockColorScheme::dark(),
//! )
//! .unwrap();
//!
//! assert_eq!(manager.theme(), "dark");
//!
//! manager.set_theme("sepia").unwrap();
//! assert!(manager.sink().has_class("sepia"));
//! assert_eq!(manager.storage().entry("vibetheme-theme"), Some("sepia"));
//! ```

use std::fmt;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::config::ThemeVarConfig;
use crate::env::{ColorSchemeSource, MemoryStorage, OsColorScheme, ThemeStorage};
use crate::error::{ThemeError, ThemeFileError};
use crate::sink::{MemoryDocument, StyleSink};
use crate::theme::{file_extension, presets, ColorMode, Theme};

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "vibetheme-theme";

/// Theme selected when nothing else applies.
pub const DEFAULT_THEME: &str = "light";

/// Name of the head meta tag kept in place for mobile browsers.
pub const THEME_COLOR_META: &str = "theme-color";

/// Callback invoked with every applied theme.
pub type ThemeChangeCallback = Box<dyn FnMut(&Theme)>;

/// Construction options for [`ThemeManager`].
///
/// Build it in code, or load the data fields from YAML/JSON:
///
/// ```rust
/// use vibetheme::ThemeManagerConfig;
///
/// let config = ThemeManagerConfig::from_yaml(r#"
/// builtin_themes: true
/// default_theme: sepia
/// storage_key: my-app-theme
/// enable_system_theme: false
/// "#).unwrap();
///
/// assert_eq!(config.storage_key_or_default(), "my-app-theme");
/// ```
#[derive(Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeManagerConfig {
    /// Register the built-in themes before `themes`.
    builtin_themes: bool,
    /// Initial themes; later entries overwrite earlier ones of the same name.
    themes: Vec<Theme>,
    default_theme: Option<String>,
    storage_key: Option<String>,
    /// Follow the OS light/dark preference. Defaults to `true`.
    enable_system_theme: Option<bool>,
    #[serde(skip)]
    on_theme_change: Option<ThemeChangeCallback>,
    theme_config: Option<Vec<ThemeVarConfig>>,
}

impl ThemeManagerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the seven built-in themes ahead of any custom ones.
    pub fn builtin_themes(mut self, enabled: bool) -> Self {
        self.builtin_themes = enabled;
        self
    }

    /// Add initial themes.
    pub fn themes<I: IntoIterator<Item = Theme>>(mut self, themes: I) -> Self {
        self.themes.extend(themes);
        self
    }

    /// Add one initial theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.themes.push(theme);
        self
    }

    /// Theme used when neither a saved choice nor the system preference applies.
    pub fn default_theme(mut self, name: impl Into<String>) -> Self {
        self.default_theme = Some(name.into());
        self
    }

    /// Key under which the active theme name is persisted.
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = Some(key.into());
        self
    }

    pub fn enable_system_theme(mut self, enabled: bool) -> Self {
        self.enable_system_theme = Some(enabled);
        self
    }

    /// Called with the theme every time one is applied.
    pub fn on_theme_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&Theme) + 'static,
    {
        self.on_theme_change = Some(Box::new(callback));
        self
    }

    /// Descriptive role metadata, returned by [`ThemeManager::theme_config`].
    pub fn theme_config(mut self, config: Vec<ThemeVarConfig>) -> Self {
        self.theme_config = Some(config);
        self
    }

    /// The effective storage key. An empty key falls back to the default.
    pub fn storage_key_or_default(&self) -> &str {
        match self.storage_key.as_deref() {
            Some(key) if !key.is_empty() => key,
            _ => DEFAULT_STORAGE_KEY,
        }
    }

    /// The effective default theme name. An empty name falls back to `"light"`.
    pub fn default_theme_or_default(&self) -> &str {
        match self.default_theme.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_THEME,
        }
    }

    /// Whether system following is on (it is unless explicitly disabled).
    pub fn system_theme_enabled(&self) -> bool {
        self.enable_system_theme.unwrap_or(true)
    }

    /// Parses the data fields from YAML. The callback can only be set in code.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeFileError::Parse`] for malformed YAML or unknown fields.
    pub fn from_yaml(yaml: &str) -> Result<Self, ThemeFileError> {
        serde_yaml::from_str(yaml).map_err(|e| ThemeFileError::parse(None, e))
    }

    /// Parses the data fields from JSON.
    pub fn from_json(json: &str) -> Result<Self, ThemeFileError> {
        serde_json::from_str(json).map_err(|e| ThemeFileError::parse(None, e))
    }

    /// Loads a `.yaml`, `.yml` or `.json` configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ThemeFileError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ThemeFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match file_extension(path).as_deref() {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .map_err(|e| ThemeFileError::parse(Some(path.to_path_buf()), e)),
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| ThemeFileError::parse(Some(path.to_path_buf()), e)),
            _ => Err(ThemeFileError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

impl fmt::Debug for ThemeManagerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeManagerConfig")
            .field("builtin_themes", &self.builtin_themes)
            .field("themes", &self.themes.len())
            .field("default_theme", &self.default_theme)
            .field("storage_key", &self.storage_key)
            .field("enable_system_theme", &self.enable_system_theme)
            .field("on_theme_change", &self.on_theme_change.is_some())
            .field("theme_config", &self.theme_config.as_ref().map(Vec::len))
            .finish()
    }
}

/// Owns the theme registry and keeps storage and the style sink in step
/// with the active theme.
pub struct ThemeManager<K, S, C> {
    /// Registry in insertion order.
    themes: Vec<Theme>,
    current: String,
    storage_key: String,
    enable_system_theme: bool,
    on_theme_change: Option<ThemeChangeCallback>,
    theme_config: Option<Vec<ThemeVarConfig>>,
    sink: K,
    storage: S,
    scheme: C,
    /// Cleared by `destroy`.
    listening: bool,
    last_prefers_dark: Option<bool>,
}

impl<K, S, C> ThemeManager<K, S, C>
where
    K: StyleSink,
    S: ThemeStorage,
    C: ColorSchemeSource,
{
    /// Builds the registry, picks the initial theme and applies it.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Storage`] if the saved choice cannot be read.
    pub fn new(
        config: ThemeManagerConfig,
        sink: K,
        storage: S,
        scheme: C,
    ) -> Result<Self, ThemeError> {
        let storage_key = config.storage_key_or_default().to_string();
        let default_theme = config.default_theme_or_default().to_string();
        let enable_system_theme = config.system_theme_enabled();

        let mut manager = Self {
            themes: Vec::new(),
            current: default_theme,
            storage_key,
            enable_system_theme,
            on_theme_change: config.on_theme_change,
            theme_config: config.theme_config,
            sink,
            storage,
            scheme,
            listening: false,
            last_prefers_dark: None,
        };

        if config.builtin_themes {
            for theme in presets::all() {
                manager.add_theme(theme);
            }
        }
        for theme in config.themes {
            manager.add_theme(theme);
        }

        manager.init()?;
        Ok(manager)
    }

    fn init(&mut self) -> Result<(), ThemeError> {
        // Read once so the selection and the recorded baseline agree.
        let prefers_dark = self
            .enable_system_theme
            .then(|| self.scheme.prefers_dark());
        match self.saved_theme()? {
            Some(saved) if self.contains(&saved) => {
                debug!(theme = %saved, "restoring saved theme");
                self.current = saved;
            }
            saved => {
                if let Some(stale) = saved {
                    warn!(theme = %stale, "saved theme is not registered, ignoring");
                }
                if let Some(prefers_dark) = prefers_dark {
                    let mode = ColorMode::from_prefers_dark(prefers_dark);
                    debug!(?mode, "selecting theme from system preference");
                    self.current = mode.theme_name().to_string();
                }
            }
        }

        if self.enable_system_theme {
            self.listening = true;
            self.last_prefers_dark = prefers_dark;
        }

        let initial = self.current.clone();
        self.apply_theme(&initial);
        Ok(())
    }

    /// The persisted choice. An empty value counts as no choice.
    fn saved_theme(&self) -> Result<Option<String>, ThemeError> {
        Ok(self
            .storage
            .get(&self.storage_key)?
            .filter(|name| !name.is_empty()))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.themes.iter().position(|theme| theme.name() == name)
    }

    /// Writes a registered theme to the sink and fires the change callback.
    ///
    /// Unknown names are ignored without error. Only [`set_theme`] checks
    /// registration; this path is also reached from construction, where the
    /// default name may legitimately be unregistered.
    ///
    /// [`set_theme`]: ThemeManager::set_theme
    fn apply_theme(&mut self, name: &str) {
        let Some(index) = self.position(name) else {
            debug!(theme = %name, "theme not registered, nothing applied");
            return;
        };
        let theme = &self.themes[index];

        for registered in &self.themes {
            self.sink.remove_class(registered.name());
        }
        self.sink.add_class(theme.name());

        for (property, value) in theme.css_properties() {
            self.sink.set_property(&property, value);
        }

        // Content is left unset; the tag only has to exist.
        self.sink.ensure_meta_tag(THEME_COLOR_META);

        debug!(theme = %name, vars = theme.len(), "theme applied");
        if let Some(callback) = self.on_theme_change.as_mut() {
            callback(theme);
        }
    }

    /// Makes `name` the active theme, persists it and applies it.
    ///
    /// # Errors
    ///
    /// - [`ThemeError::NotFound`] if `name` is not registered; nothing changes.
    /// - [`ThemeError::Storage`] if the choice cannot be persisted; nothing changes.
    pub fn set_theme(&mut self, name: &str) -> Result<(), ThemeError> {
        if !self.contains(name) {
            return Err(ThemeError::not_found(name));
        }

        self.storage.set(&self.storage_key, name)?;
        self.current = name.to_string();
        info!(theme = %name, "theme changed");
        self.apply_theme(name);
        Ok(())
    }

    /// Name of the active theme.
    ///
    /// After [`remove_theme`](Self::remove_theme) of the active theme this
    /// still returns the removed name.
    pub fn theme(&self) -> &str {
        &self.current
    }

    /// The active theme, if its name is registered.
    pub fn active(&self) -> Option<&Theme> {
        self.get(&self.current)
    }

    /// All registered themes, in registration order.
    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.position(name).map(|index| &self.themes[index])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Registers a theme. A theme with the same name is replaced in place.
    ///
    /// Does not re-apply, even if the replaced theme is active.
    pub fn add_theme(&mut self, theme: Theme) {
        match self.position(theme.name()) {
            Some(index) => self.themes[index] = theme,
            None => self.themes.push(theme),
        }
    }

    /// Unregisters a theme and returns it.
    ///
    /// The active selection is left alone, even if it named this theme.
    ///
    /// # Errors
    ///
    /// [`ThemeError::NotFound`] if `name` is not registered.
    pub fn remove_theme(&mut self, name: &str) -> Result<Theme, ThemeError> {
        let index = self
            .position(name)
            .ok_or_else(|| ThemeError::not_found(name))?;
        Ok(self.themes.remove(index))
    }

    /// Forgets the persisted choice.
    ///
    /// With system following enabled this immediately selects the theme that
    /// matches the current preference through [`set_theme`](Self::set_theme),
    /// which persists that theme again.
    pub fn clear_saved_theme(&mut self) -> Result<(), ThemeError> {
        self.storage.remove(&self.storage_key)?;
        debug!(key = %self.storage_key, "saved theme cleared");

        if self.enable_system_theme {
            let mode = ColorMode::from_prefers_dark(self.scheme.prefers_dark());
            self.last_prefers_dark = Some(mode.is_dark());
            self.set_theme(mode.theme_name())?;
        }
        Ok(())
    }

    /// Reacts to an OS preference change.
    ///
    /// Switches to `"dark"` or `"light"` only while system following is
    /// enabled, the manager has not been destroyed, and no explicit choice
    /// is persisted.
    ///
    /// # Errors
    ///
    /// Propagates [`set_theme`](Self::set_theme) errors, e.g. when the
    /// matching theme is not registered.
    pub fn handle_system_preference_change(&mut self, prefers_dark: bool) -> Result<(), ThemeError> {
        self.last_prefers_dark = Some(prefers_dark);

        if !self.enable_system_theme || !self.listening {
            return Ok(());
        }
        if let Some(saved) = self.saved_theme()? {
            debug!(theme = %saved, "explicit choice saved, ignoring system change");
            return Ok(());
        }

        let mode = ColorMode::from_prefers_dark(prefers_dark);
        debug!(?mode, "system preference changed");
        self.set_theme(mode.theme_name())
    }

    /// Re-reads the preference source and dispatches a change if it moved.
    ///
    /// Returns `true` if a different value was observed.
    pub fn sync_system_preference(&mut self) -> Result<bool, ThemeError> {
        let prefers_dark = self.scheme.prefers_dark();
        if self.last_prefers_dark == Some(prefers_dark) {
            return Ok(false);
        }
        self.handle_system_preference_change(prefers_dark)?;
        Ok(true)
    }

    /// Stops reacting to preference changes. Idempotent.
    ///
    /// This is a real detach: every later preference change is ignored,
    /// where a mismatched listener removal would have left it live.
    pub fn destroy(&mut self) {
        if self.listening {
            debug!("detached from system preference changes");
        }
        self.listening = false;
    }

    /// Whether preference changes are currently acted on.
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// The role metadata passed at construction.
    pub fn theme_config(&self) -> Option<&[ThemeVarConfig]> {
        self.theme_config.as_deref()
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn is_system_theme_enabled(&self) -> bool {
        self.enable_system_theme
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Mutable storage access, for changes made outside the manager.
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn color_scheme(&self) -> &C {
        &self.scheme
    }
}

impl<K: fmt::Debug, S: fmt::Debug, C: fmt::Debug> fmt::Debug for ThemeManager<K, S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeManager")
            .field("themes", &self.themes.iter().map(Theme::name).collect::<Vec<_>>())
            .field("current", &self.current)
            .field("storage_key", &self.storage_key)
            .field("enable_system_theme", &self.enable_system_theme)
            .field("listening", &self.listening)
            .field("sink", &self.sink)
            .field("storage", &self.storage)
            .field("scheme", &self.scheme)
            .finish_non_exhaustive()
    }
}

/// Manager with the built-in themes, an in-memory document and storage, and
/// the OS preference.
///
/// Each call returns a fresh, independently owned manager.
pub fn default_manager(
) -> Result<ThemeManager<MemoryDocument, MemoryStorage, OsColorScheme>, ThemeError> {
    ThemeManager::new(
        ThemeManagerConfig::new().builtin_themes(true),
        MemoryDocument::new(),
        MemoryStorage::new(),
        OsColorScheme,
    )
}
