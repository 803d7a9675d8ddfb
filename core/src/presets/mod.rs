//! Platform presets
//!
//! A preset is a fixed bundle of platform name, logo, light-theme colors,
//! default icon and canvas layout. Presets never draw anything themselves:
//! they fill a [`BadgeConfig`] from caller [`BadgeOptions`] and hand it to
//! the generic renderer.

pub mod facebook;
pub mod github;
pub mod hackernews;
pub mod instagram;
pub mod linkedin;
pub mod lovable;
pub mod microlaunch;
pub mod reddit;
pub mod twitter;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::render;
use crate::svg::{Element, Node};
use crate::types::{BadgeConfig, BadgeOptions, IconType, ThemeColors};
use crate::{Error, Result};

/// Canvas width and count-group position
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Layout {
    pub view_box_width: f64,
    pub count_group_x: f64,
}

/// Default canvas
pub const STANDARD: Layout = Layout {
    view_box_width: 220.0,
    count_group_x: 172.0,
};

/// Wider canvas for longer platform names
pub const WIDE: Layout = Layout {
    view_box_width: 250.0,
    count_group_x: 202.0,
};

/// Fixed parts a preset contributes to the configuration
pub(crate) struct PresetParts {
    pub name: &'static str,
    pub light: ThemeColors,
    pub default_icon: IconType,
    /// `None` keeps whatever layout the caller asked for
    pub layout: Option<Layout>,
    pub logo: Element,
    pub name_component: Option<Node>,
}

/// Merge preset defaults under the caller's options
///
/// Caller `icon_type` and `theme` win over the preset; name, colors, logo
/// and (when the preset fixes it) layout always come from the preset.
pub(crate) fn assemble(options: BadgeOptions, parts: PresetParts) -> BadgeConfig {
    let colors = if options.theme.is_dark() {
        ThemeColors::DARK
    } else {
        parts.light
    };
    let icon_type = options.icon_type.unwrap_or(parts.default_icon);

    let mut config = options.into_config();
    config.icon_type = icon_type;
    config.platform_name = parts.name.to_string();
    config.colors = Some(colors.into());
    config.logo = Some(parts.logo.into());
    config.platform_name_component = parts.name_component;
    if let Some(layout) = parts.layout {
        config.view_box_width = layout.view_box_width;
        config.count_group_x = layout.count_group_x;
    }
    config
}

/// Supported platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Lovable,
    Reddit,
    HackerNews,
    Facebook,
    Instagram,
    Twitter,
    MicroLaunch,
    LinkedIn,
    GitHub,
}

impl Platform {
    pub const ALL: [Platform; 9] = [
        Platform::Lovable,
        Platform::Reddit,
        Platform::HackerNews,
        Platform::Facebook,
        Platform::Instagram,
        Platform::Twitter,
        Platform::MicroLaunch,
        Platform::LinkedIn,
        Platform::GitHub,
    ];

    /// Stable identifier used in URLs and on the command line
    pub fn id(&self) -> &'static str {
        match self {
            Platform::Lovable => "lovable",
            Platform::Reddit => "reddit",
            Platform::HackerNews => "hackernews",
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::Twitter => "twitter",
            Platform::MicroLaunch => "microlaunch",
            Platform::LinkedIn => "linkedin",
            Platform::GitHub => "github",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Lovable => lovable::NAME,
            Platform::Reddit => reddit::NAME,
            Platform::HackerNews => hackernews::NAME,
            Platform::Facebook => facebook::NAME,
            Platform::Instagram => instagram::NAME,
            Platform::Twitter => twitter::NAME,
            Platform::MicroLaunch => microlaunch::NAME,
            Platform::LinkedIn => linkedin::NAME,
            Platform::GitHub => github::NAME,
        }
    }

    pub fn default_icon(&self) -> IconType {
        match self {
            Platform::Lovable => lovable::DEFAULT_ICON,
            Platform::Reddit => reddit::DEFAULT_ICON,
            Platform::HackerNews => hackernews::DEFAULT_ICON,
            Platform::Facebook => facebook::DEFAULT_ICON,
            Platform::Instagram => instagram::DEFAULT_ICON,
            Platform::Twitter => twitter::DEFAULT_ICON,
            Platform::MicroLaunch => microlaunch::DEFAULT_ICON,
            Platform::LinkedIn => linkedin::DEFAULT_ICON,
            Platform::GitHub => github::DEFAULT_ICON,
        }
    }

    /// Light-theme colors; every preset shares [`ThemeColors::DARK`]
    pub fn light_colors(&self) -> ThemeColors {
        match self {
            Platform::Lovable => lovable::LIGHT,
            Platform::Reddit => reddit::LIGHT,
            Platform::HackerNews => hackernews::LIGHT,
            Platform::Facebook => facebook::LIGHT,
            Platform::Instagram => instagram::LIGHT,
            Platform::Twitter => twitter::LIGHT,
            Platform::MicroLaunch => microlaunch::LIGHT,
            Platform::LinkedIn => linkedin::LIGHT,
            Platform::GitHub => github::LIGHT,
        }
    }

    /// Layout fixed by the preset, `None` if the caller's layout is kept
    pub fn layout(&self) -> Option<Layout> {
        match self {
            Platform::Lovable => lovable::LAYOUT,
            Platform::Reddit => reddit::LAYOUT,
            Platform::HackerNews => hackernews::LAYOUT,
            Platform::Facebook => facebook::LAYOUT,
            Platform::Instagram => instagram::LAYOUT,
            Platform::Twitter => twitter::LAYOUT,
            Platform::MicroLaunch => microlaunch::LAYOUT,
            Platform::LinkedIn => linkedin::LAYOUT,
            Platform::GitHub => github::LAYOUT,
        }
    }

    /// Suggested link target shown by the demo
    pub fn default_link_url(&self) -> &'static str {
        match self {
            Platform::Lovable => "https://launched.lovable.dev/<project-slug>",
            Platform::Reddit => "https://reddit.com/...",
            Platform::HackerNews => "https://news.ycombinator.com/item?id=<post-id>",
            Platform::Facebook => "https://facebook.com/...",
            Platform::Instagram => "https://instagram.com/...",
            Platform::Twitter => "https://x.com/...",
            Platform::MicroLaunch => "https://microlaunch.net/p/<project-slug>",
            Platform::LinkedIn => "https://linkedin.com/...",
            Platform::GitHub => "https://github.com/<owner>/<repo>",
        }
    }

    /// Resolve caller options into a full renderer configuration
    pub fn config(&self, options: BadgeOptions) -> BadgeConfig {
        match self {
            Platform::Lovable => lovable::config(options),
            Platform::Reddit => reddit::config(options),
            Platform::HackerNews => hackernews::config(options),
            Platform::Facebook => facebook::config(options),
            Platform::Instagram => instagram::config(options),
            Platform::Twitter => twitter::config(options),
            Platform::MicroLaunch => microlaunch::config(options),
            Platform::LinkedIn => linkedin::config(options),
            Platform::GitHub => github::config(options),
        }
    }

    /// Render this platform's badge
    pub fn render(&self, options: BadgeOptions) -> Option<Node> {
        render::render(&self.config(options))
    }

    pub fn info(&self) -> PlatformInfo {
        let layout = self.layout().unwrap_or(STANDARD);
        PlatformInfo {
            id: self.id(),
            name: self.display_name(),
            default_icon: self.default_icon(),
            default_link_url: self.default_link_url(),
            view_box_width: layout.view_box_width,
            count_group_x: layout.count_group_x,
        }
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Platform::ALL
            .into_iter()
            .find(|p| p.id() == wanted)
            .ok_or_else(|| Error::UnknownPlatform(s.to_string()))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Either the bare generic badge or a platform preset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadgeTarget {
    /// Generic badge with an optional caller-chosen name
    Generic { platform_name: Option<String> },
    Platform(Platform),
}

impl BadgeTarget {
    pub fn id(&self) -> &'static str {
        match self {
            BadgeTarget::Generic { .. } => "generic",
            BadgeTarget::Platform(p) => p.id(),
        }
    }

    pub fn default_icon(&self) -> IconType {
        match self {
            BadgeTarget::Generic { .. } => IconType::Upvote,
            BadgeTarget::Platform(p) => p.default_icon(),
        }
    }

    pub fn default_link_url(&self) -> &'static str {
        match self {
            BadgeTarget::Generic { .. } => "https://example.com/demo-project",
            BadgeTarget::Platform(p) => p.default_link_url(),
        }
    }

    pub fn config(&self, options: BadgeOptions) -> BadgeConfig {
        match self {
            BadgeTarget::Generic { platform_name } => {
                let mut config = options.into_config();
                if let Some(name) = platform_name {
                    config.platform_name = name.clone();
                }
                config
            }
            BadgeTarget::Platform(p) => p.config(options),
        }
    }
}

impl FromStr for BadgeTarget {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("generic") {
            return Ok(BadgeTarget::Generic {
                platform_name: None,
            });
        }
        s.parse::<Platform>().map(BadgeTarget::Platform)
    }
}

impl From<Platform> for BadgeTarget {
    fn from(platform: Platform) -> Self {
        BadgeTarget::Platform(platform)
    }
}

/// Catalog entry describing a preset
#[derive(Debug, Clone, Serialize)]
pub struct PlatformInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub default_icon: IconType,
    pub default_link_url: &'static str,
    pub view_box_width: f64,
    pub count_group_x: f64,
}

/// Catalog of every preset
pub fn catalog() -> Vec<PlatformInfo> {
    Platform::ALL.iter().map(Platform::info).collect()
}
