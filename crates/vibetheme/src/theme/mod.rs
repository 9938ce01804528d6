//! Themes, the built-in theme set, and light/dark detection.
//!
//! A [`Theme`] is a name plus one color string per [`ThemeRole`](crate::ThemeRole).
//! Themes carry no mode of their own: following the OS preference means
//! switching between the themes registered as `"light"` and `"dark"`,
//! which [`ColorMode::theme_name`] names.
//!
//! ## Construction
//!
//! Programmatic:
//! ```rust
//! use vibetheme::{presets, Theme, ThemeRole};
//!
//! let brand = presets::dark()
//!     .with_name("brand-dark")
//!     .merge(Theme::new("overrides").with(ThemeRole::Primary, "280 90% 60%"));
//! assert!(brand.is_complete());
//! ```
//!
//! From files: [`Theme::from_file`] and [`load_theme_dir`] read `.yaml`,
//! `.yml` and `.json` documents of the form
//!
//! ```yaml
//! name: brand-dark
//! vars:
//!   background: "222.2 84% 4.9%"
//!   primary: "280 90% 60%"
//! ```

mod adaptive;
pub mod presets;
#[allow(clippy::module_inception)]
mod theme;

pub use adaptive::{detect_color_mode, os_theme_detector, set_theme_detector, ColorMode};
pub(crate) use theme::file_extension;
pub use theme::{load_theme_dir, Theme, THEME_EXTENSIONS};
