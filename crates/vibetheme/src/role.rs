//! The closed set of semantic color roles a theme assigns values to.
//!
//! Roles are identified by kebab-case keys (`primary-foreground`), which is
//! also how they appear in theme files and, prefixed with `--`, as CSS
//! custom property names on the document root.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A semantic color role.
///
/// The declaration order is the canonical order used when iterating a
/// theme's values and when writing custom properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeRole {
    Background,
    Foreground,
    Primary,
    PrimaryForeground,
    Secondary,
    SecondaryForeground,
    Muted,
    MutedForeground,
    Accent,
    AccentForeground,
    Destructive,
    DestructiveForeground,
    Border,
    Input,
    Ring,
    Card,
    CardForeground,
    Popover,
    PopoverForeground,
}

/// Error returned when a string is not one of the known role keys.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme role: {0}")]
pub struct UnknownRole(pub String);

impl ThemeRole {
    /// Every role, in canonical order.
    pub const ALL: [ThemeRole; 19] = [
        ThemeRole::Background,
        ThemeRole::Foreground,
        ThemeRole::Primary,
        ThemeRole::PrimaryForeground,
        ThemeRole::Secondary,
        ThemeRole::SecondaryForeground,
        ThemeRole::Muted,
        ThemeRole::MutedForeground,
        ThemeRole::Accent,
        ThemeRole::AccentForeground,
        ThemeRole::Destructive,
        ThemeRole::DestructiveForeground,
        ThemeRole::Border,
        ThemeRole::Input,
        ThemeRole::Ring,
        ThemeRole::Card,
        ThemeRole::CardForeground,
        ThemeRole::Popover,
        ThemeRole::PopoverForeground,
    ];

    /// The kebab-case key, e.g. `"muted-foreground"`.
    pub fn key(self) -> &'static str {
        match self {
            ThemeRole::Background => "background",
            ThemeRole::Foreground => "foreground",
            ThemeRole::Primary => "primary",
            ThemeRole::PrimaryForeground => "primary-foreground",
            ThemeRole::Secondary => "secondary",
            ThemeRole::SecondaryForeground => "secondary-foreground",
            ThemeRole::Muted => "muted",
            ThemeRole::MutedForeground => "muted-foreground",
            ThemeRole::Accent => "accent",
            ThemeRole::AccentForeground => "accent-foreground",
            ThemeRole::Destructive => "destructive",
            ThemeRole::DestructiveForeground => "destructive-foreground",
            ThemeRole::Border => "border",
            ThemeRole::Input => "input",
            ThemeRole::Ring => "ring",
            ThemeRole::Card => "card",
            ThemeRole::CardForeground => "card-foreground",
            ThemeRole::Popover => "popover",
            ThemeRole::PopoverForeground => "popover-foreground",
        }
    }

    /// The CSS custom property this role is written to, e.g. `"--ring"`.
    pub fn css_var(self) -> String {
        format!("--{}", self.key())
    }

    /// Human-readable label used by pickers and editors.
    pub fn label(self) -> &'static str {
        match self {
            ThemeRole::Background => "Background",
            ThemeRole::Foreground => "Foreground",
            ThemeRole::Primary => "Primary",
            ThemeRole::PrimaryForeground => "Primary Text",
            ThemeRole::Secondary => "Secondary",
            ThemeRole::SecondaryForeground => "Secondary Text",
            ThemeRole::Muted => "Muted Background",
            ThemeRole::MutedForeground => "Muted Text",
            ThemeRole::Accent => "Accent Background",
            ThemeRole::AccentForeground => "Accent Text",
            ThemeRole::Destructive => "Destructive",
            ThemeRole::DestructiveForeground => "Destructive Text",
            ThemeRole::Border => "Border",
            ThemeRole::Input => "Input Border",
            ThemeRole::Ring => "Focus Ring",
            ThemeRole::Card => "Card Background",
            ThemeRole::CardForeground => "Card Text",
            ThemeRole::Popover => "Popover Background",
            ThemeRole::PopoverForeground => "Popover Text",
        }
    }

    /// Free-text guidance on what the role is for.
    pub fn description(self) -> &'static str {
        match self {
            ThemeRole::Background => {
                "Main background color of the application, should be light in light themes and dark in dark themes"
            }
            ThemeRole::Foreground => {
                "Primary text color, should have high contrast with background for readability"
            }
            ThemeRole::Primary => {
                "Primary brand color used for main actions, buttons, and highlights"
            }
            ThemeRole::PrimaryForeground => {
                "Text color that appears on primary colored backgrounds, should contrast well with primary color"
            }
            ThemeRole::Secondary => {
                "Secondary accent color for less prominent elements and backgrounds"
            }
            ThemeRole::SecondaryForeground => "Text color for secondary colored backgrounds",
            ThemeRole::Muted => "Subtle background color for cards, sections, and quiet areas",
            ThemeRole::MutedForeground => {
                "Subdued text color for less important information and descriptions"
            }
            ThemeRole::Accent => {
                "Accent background color for hover states and highlighted elements"
            }
            ThemeRole::AccentForeground => "Text color for accent colored backgrounds",
            ThemeRole::Destructive => {
                "Error, danger, or warning color for destructive actions and alerts"
            }
            ThemeRole::DestructiveForeground => {
                "Text color that appears on destructive colored backgrounds"
            }
            ThemeRole::Border => {
                "Color for borders, dividers, and outlines throughout the interface"
            }
            ThemeRole::Input => {
                "Border color specifically for form inputs and interactive elements"
            }
            ThemeRole::Ring => "Color for focus indicators and accessibility outlines",
            ThemeRole::Card => "Background color for cards, panels, and elevated surfaces",
            ThemeRole::CardForeground => "Text color for content on card backgrounds",
            ThemeRole::Popover => {
                "Background color for popovers, tooltips, and floating elements"
            }
            ThemeRole::PopoverForeground => "Text color for content in popovers and tooltips",
        }
    }
}

impl fmt::Display for ThemeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ThemeRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeRole::ALL
            .iter()
            .copied()
            .find(|role| role.key() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}
