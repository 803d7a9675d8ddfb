//! Core library for Featured Badges
//!
//! Renders small "featured on" SVG badges: a platform logo and name plus an
//! optional count or link indicator. The generic renderer lives in
//! [`render`]; [`presets`] holds the per-platform configurations that feed it.
//!
//! ```
//! use featured_badges_core::{BadgeOptions, Platform, Theme};
//!
//! let badge = Platform::HackerNews
//!     .render(BadgeOptions::default().count(42).theme(Theme::Dark))
//!     .unwrap();
//! assert!(badge.to_markup().contains(">42</tspan>"));
//! ```

pub mod error;
pub mod icons;
pub mod presets;
pub mod render;
pub mod svg;
pub mod types;
pub mod usage;

// Re-exports
pub use error::{Error, Result};
pub use presets::{BadgeTarget, Platform, PlatformInfo};
pub use render::{render, render_document, try_render, try_render_document};
pub use svg::{Element, Node};
pub use types::{
    BadgeConfig, BadgeOptions, ColorOverrides, Count, DisplayMode, IconType, Palette, Theme,
    ThemeColors,
};
