//! Built-in themes.
//!
//! Seven ready-made themes, usable as-is or as a starting point for custom
//! ones via [`Theme::with_name`] and [`Theme::merge`]. Values are HSL
//! triplets without the `hsl()` wrapper.
//!
//! Each table lists values in [`ThemeRole::ALL`](crate::ThemeRole::ALL) order.

use super::theme::Theme;

/// Names of the built-in themes, in the order [`all`] returns them.
pub const BUILTIN_NAMES: [&str; 7] = [
    "light",
    "dark",
    "sepia",
    "ocean",
    "forest",
    "sunset",
    "high-contrast",
];

#[rustfmt::skip]
const LIGHT: [&str; 19] = [
    "0 0% 100%",            // background
    "222.2 84% 4.9%",       // foreground
    "221.2 83.2% 53.3%",    // primary
    "210 40% 98%",          // primary-foreground
    "210 40% 96%",          // secondary
    "222.2 84% 4.9%",       // secondary-foreground
    "210 40% 96%",          // muted
    "215.4 16.3% 46.9%",    // muted-foreground
    "210 40% 96%",          // accent
    "222.2 84% 4.9%",       // accent-foreground
    "0 84.2% 60.2%",        // destructive
    "210 40% 98%",          // destructive-foreground
    "214.3 31.8% 91.4%",    // border
    "214.3 31.8% 91.4%",    // input
    "221.2 83.2% 53.3%",    // ring
    "0 0% 100%",            // card
    "222.2 84% 4.9%",       // card-foreground
    "0 0% 100%",            // popover
    "222.2 84% 4.9%",       // popover-foreground
];

#[rustfmt::skip]
const DARK: [&str; 19] = [
    "222.2 84% 4.9%",
    "210 40% 98%",
    "217.2 91.2% 59.8%",
    "222.2 84% 4.9%",
    "217.2 32.6% 17.5%",
    "210 40% 98%",
    "217.2 32.6% 17.5%",
    "215 20.2% 65.1%",
    "217.2 32.6% 17.5%",
    "210 40% 98%",
    "0 62.8% 30.6%",
    "210 40% 98%",
    "217.2 32.6% 17.5%",
    "217.2 32.6% 17.5%",
    "224.3 76.3% 94.1%",
    "222.2 84% 4.9%",
    "210 40% 98%",
    "222.2 84% 4.9%",
    "210 40% 98%",
];

#[rustfmt::skip]
const SEPIA: [&str; 19] = [
    "30 54% 90%",
    "30 25% 15%",
    "25 80% 45%",
    "30 54% 90%",
    "30 30% 80%",
    "30 25% 15%",
    "30 30% 85%",
    "30 20% 40%",
    "35 40% 75%",
    "30 25% 15%",
    "0 70% 50%",
    "30 54% 90%",
    "30 25% 75%",
    "30 25% 75%",
    "25 80% 45%",
    "30 45% 88%",
    "30 25% 15%",
    "30 45% 88%",
    "30 25% 15%",
];

#[rustfmt::skip]
const OCEAN: [&str; 19] = [
    "200 20% 98%",
    "200 50% 10%",
    "195 100% 50%",
    "200 20% 98%",
    "195 30% 90%",
    "200 50% 10%",
    "195 20% 92%",
    "200 25% 45%",
    "190 40% 85%",
    "200 50% 10%",
    "0 70% 50%",
    "200 20% 98%",
    "195 25% 80%",
    "195 25% 80%",
    "195 100% 50%",
    "195 25% 96%",
    "200 50% 10%",
    "195 25% 96%",
    "200 50% 10%",
];

#[rustfmt::skip]
const FOREST: [&str; 19] = [
    "120 20% 97%",
    "120 30% 15%",
    "120 60% 40%",
    "120 20% 97%",
    "120 20% 88%",
    "120 30% 15%",
    "120 15% 92%",
    "120 20% 50%",
    "115 25% 85%",
    "120 30% 15%",
    "0 70% 50%",
    "120 20% 97%",
    "120 20% 82%",
    "120 20% 82%",
    "120 60% 40%",
    "120 18% 95%",
    "120 30% 15%",
    "120 18% 95%",
    "120 30% 15%",
];

#[rustfmt::skip]
const SUNSET: [&str; 19] = [
    "20 40% 96%",
    "20 50% 15%",
    "15 80% 55%",
    "20 40% 96%",
    "25 30% 88%",
    "20 50% 15%",
    "20 25% 90%",
    "20 30% 45%",
    "30 40% 82%",
    "20 50% 15%",
    "0 70% 50%",
    "20 40% 96%",
    "25 25% 80%",
    "25 25% 80%",
    "15 80% 55%",
    "22 30% 94%",
    "20 50% 15%",
    "22 30% 94%",
    "20 50% 15%",
];

#[rustfmt::skip]
const HIGH_CONTRAST: [&str; 19] = [
    "0 0% 100%",
    "0 0% 0%",
    "0 0% 0%",
    "0 0% 100%",
    "0 0% 90%",
    "0 0% 0%",
    "0 0% 95%",
    "0 0% 20%",
    "0 0% 85%",
    "0 0% 0%",
    "0 100% 40%",
    "0 0% 100%",
    "0 0% 0%",
    "0 0% 0%",
    "0 0% 0%",
    "0 0% 100%",
    "0 0% 0%",
    "0 0% 100%",
    "0 0% 0%",
];

pub fn light() -> Theme {
    Theme::from_values("light", &LIGHT)
}

pub fn dark() -> Theme {
    Theme::from_values("dark", &DARK)
}

pub fn sepia() -> Theme {
    Theme::from_values("sepia", &SEPIA)
}

pub fn ocean() -> Theme {
    Theme::from_values("ocean", &OCEAN)
}

pub fn forest() -> Theme {
    Theme::from_values("forest", &FOREST)
}

pub fn sunset() -> Theme {
    Theme::from_values("sunset", &SUNSET)
}

pub fn high_contrast() -> Theme {
    Theme::from_values("high-contrast", &HIGH_CONTRAST)
}

/// All built-in themes, in [`BUILTIN_NAMES`] order.
pub fn all() -> Vec<Theme> {
    vec![
        light(),
        dark(),
        sepia(),
        ocean(),
        forest(),
        sunset(),
        high_contrast(),
    ]
}
