//! # vibetheme - named color themes as CSS custom properties
//!
//! `vibetheme` keeps a registry of color themes, applies the active one to a
//! document root as CSS custom properties, remembers the user's choice, and
//! can follow the OS light/dark preference until the user picks a theme.
//!
//! ## Core Concepts
//!
//! - [`ThemeRole`]: the 19 semantic color roles (`background`, `primary`, `ring`, ...)
//! - [`Theme`]: a name plus a value per role
//! - [`presets`]: seven built-in themes
//! - [`ThemeManager`]: registry, active selection, persistence, system following
//! - [`StyleSink`], [`ThemeStorage`], [`ColorSchemeSource`]: the environment
//!   seams, with in-memory, file and (on wasm32) browser implementations
//!
//! ## Quick Start
//!
//! ```rust
//! use vibetheme::{
//!     MemoryDocument, MemoryStorage, MockColorScheme, ThemeManager, ThemeManagerConfig,
//! };
//!
//! let mut manager = ThemeManager::new(
//!     ThemeManagerConfig::new().builtin_themes(true),
//!     MemoryDocument::new(),
//!     MemoryStorage::new(),
//!     MockColorScheme::light(),
//! )
//! .unwrap();
//!
//! assert_eq!(manager.theme(), "light");
//!
//! manager.set_theme("ocean").unwrap();
//! assert_eq!(manager.sink().property("--primary"), Some("195 100% 50%"));
//! assert!(manager.set_theme("vaporwave").is_err());
//! ```
//!
//! ## Custom Themes
//!
//! ```rust
//! use vibetheme::{presets, Theme, ThemeRole};
//!
//! let brand = presets::light()
//!     .with_name("brand")
//!     .merge(Theme::new("").with(ThemeRole::Primary, "262 83% 58%"));
//!
//! assert_eq!(brand.get(ThemeRole::Primary), Some("262 83% 58%"));
//! assert_eq!(brand.get(ThemeRole::Background), Some("0 0% 100%"));
//! ```
//!
//! ## Logging
//!
//! Theme selection and application are reported through `tracing`. The
//! crate installs no subscriber.

mod config;
pub mod env;
mod error;
mod manager;
mod role;
pub mod sink;
mod theme;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{default_theme_config, ThemeVarConfig};
pub use env::{
    ColorSchemeSource, FileStorage, MemoryStorage, MockColorScheme, OsColorScheme, ThemeStorage,
};
pub use error::{ThemeError, ThemeFileError};
pub use manager::{
    default_manager, ThemeChangeCallback, ThemeManager, ThemeManagerConfig, DEFAULT_STORAGE_KEY,
    DEFAULT_THEME, THEME_COLOR_META,
};
pub use role::{ThemeRole, UnknownRole};
pub use sink::{MemoryDocument, MetaTag, StyleSink};
pub use theme::{
    detect_color_mode, load_theme_dir, os_theme_detector, presets, set_theme_detector, ColorMode,
    Theme, THEME_EXTENSIONS,
};
