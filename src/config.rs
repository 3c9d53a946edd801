use std::fmt;
use std::str::FromStr;

use log::Level;
use serde::Deserialize;

pub const PRODUCT_NAME: &str = "CodeAI Pro";

/// Side length of the pointer glow, in CSS pixels.
pub const GLOW_DIAMETER: f64 = 500.0;

/// Height of the fixed top navigation bar. Scroll targets are offset by it
/// so a section heading doesn't end up underneath the bar.
pub const NAV_HEIGHT: f64 = 64.0;

pub const DEFAULT_NAV_MODE: NavMode = NavMode::Paged;

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

/// How a navigation entry brings its section into view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavMode {
    /// Only the active section is rendered; selecting swaps it.
    Paged,
    /// Every section is rendered in order; selecting smooth-scrolls to it.
    Scroll,
}

impl Default for NavMode {
    fn default() -> Self {
        DEFAULT_NAV_MODE
    }
}

impl fmt::Display for NavMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavMode::Paged => write!(f, "paged"),
            NavMode::Scroll => write!(f, "scroll"),
        }
    }
}

impl FromStr for NavMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "paged" | "page" => Ok(NavMode::Paged),
            "scroll" | "single" => Ok(NavMode::Scroll),
            _ => Err(()),
        }
    }
}

/// Query string accepted by the landing route, e.g. `/?nav=scroll`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PageQuery {
    pub nav: Option<String>,
}

impl PageQuery {
    /// Unknown values fall back to the default mode instead of failing.
    pub fn nav_mode(&self) -> NavMode {
        self.nav
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_NAV_MODE)
    }
}
