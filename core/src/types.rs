//! Shared types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::svg::Node;
use crate::{Error, Result};

/// Default text for the small line above the platform name
pub const DEFAULT_FEATURED_TEXT: &str = "FEATURED ON";
/// Name shown by the generic badge when no platform name is given
pub const DEFAULT_PLATFORM_NAME: &str = "Social";
/// Canvas width used by most badges
pub const DEFAULT_VIEW_BOX_WIDTH: f64 = 220.0;
/// Horizontal position of the count/link group on the default canvas
pub const DEFAULT_COUNT_GROUP_X: f64 = 172.0;

/// Color scheme selector
///
/// Any unrecognized name deserializes to `Light`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl From<&str> for Theme {
    fn from(value: &str) -> Self {
        match value.trim() {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

impl From<String> for Theme {
    fn from(value: String) -> Self {
        Theme::from(value.as_str())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What occupies the right-hand region of the badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Icon plus count text
    #[default]
    Count,
    /// External-link icon
    Link,
    /// Nothing; the canvas shrinks to fit
    None,
}

impl DisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Count => "count",
            DisplayMode::Link => "link",
            DisplayMode::None => "none",
        }
    }
}

impl FromStr for DisplayMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "count" => Ok(DisplayMode::Count),
            "link" => Ok(DisplayMode::Link),
            "none" => Ok(DisplayMode::None),
            other => Err(Error::InvalidDisplayMode(other.to_string())),
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Glyph drawn next to the count
///
/// Any unrecognized name deserializes to `Upvote`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum IconType {
    #[default]
    Upvote,
    UpvoteArrow,
    Likes,
    Followers,
    Star,
}

impl IconType {
    pub const ALL: [IconType; 5] = [
        IconType::Upvote,
        IconType::UpvoteArrow,
        IconType::Likes,
        IconType::Followers,
        IconType::Star,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IconType::Upvote => "upvote",
            IconType::UpvoteArrow => "upvote-arrow",
            IconType::Likes => "likes",
            IconType::Followers => "followers",
            IconType::Star => "star",
        }
    }
}

impl From<&str> for IconType {
    fn from(value: &str) -> Self {
        match value.trim() {
            "upvote-arrow" => IconType::UpvoteArrow,
            "likes" => IconType::Likes,
            "followers" => IconType::Followers,
            "star" => IconType::Star,
            _ => IconType::Upvote,
        }
    }
}

impl From<String> for IconType {
    fn from(value: String) -> Self {
        IconType::from(value.as_str())
    }
}

impl fmt::Display for IconType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Count shown on the badge: a plain number or a preformatted label like "10.5k"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Count {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Count {
    /// Maximum rendered length of a text count
    pub const MAX_LEN: usize = 6;

    /// Text as it appears on the badge
    ///
    /// Text counts are cut to [`Count::MAX_LEN`] characters; numbers are
    /// printed in full.
    pub fn display_text(&self) -> String {
        match self {
            Count::Integer(n) => n.to_string(),
            Count::Float(n) => n.to_string(),
            Count::Text(s) => truncate_chars(s, Self::MAX_LEN),
        }
    }

    /// Count from user-typed text
    ///
    /// The text becomes a number only when the number prints back exactly as
    /// typed and fits in [`Count::MAX_LEN`] characters; anything else
    /// (`007`, `1e3`, `10.50`, long digit runs) stays a label so it renders
    /// as typed, truncated like any other label.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.chars().count() <= Self::MAX_LEN {
            if let Ok(n) = trimmed.parse::<i64>() {
                if n.to_string() == trimmed {
                    return Count::Integer(n);
                }
            } else if let Ok(n) = trimmed.parse::<f64>() {
                if n.is_finite() && n.to_string() == trimmed {
                    return Count::Float(n);
                }
            }
        }
        Count::Text(raw.to_string())
    }

    /// Only the empty string counts as missing; zero is a valid count
    pub fn is_missing(&self) -> bool {
        matches!(self, Count::Text(s) if s.is_empty())
    }
}

impl Default for Count {
    fn default() -> Self {
        Count::Integer(0)
    }
}

impl From<i64> for Count {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for Count {
    fn from(v: i32) -> Self {
        Self::Integer(v.into())
    }
}

impl From<u32> for Count {
    fn from(v: u32) -> Self {
        Self::Integer(v.into())
    }
}

impl From<f64> for Count {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Count {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Count {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// Fixed color triple, used for theme and platform defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub border: &'static str,
    pub text: &'static str,
    pub background: &'static str,
}

impl ThemeColors {
    pub const LIGHT: ThemeColors = ThemeColors {
        border: "#00000020",
        text: "#000000",
        background: "#FFFFFF",
    };

    pub const DARK: ThemeColors = ThemeColors {
        border: "#363636",
        text: "#FFFFFF",
        background: "#201e1e",
    };

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::LIGHT,
            Theme::Dark => Self::DARK,
        }
    }
}

/// Per-field color overrides; empty strings are treated as unset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

impl From<ThemeColors> for ColorOverrides {
    fn from(colors: ThemeColors) -> Self {
        Self {
            border: Some(colors.border.to_string()),
            text: Some(colors.text.to_string()),
            background: Some(colors.background.to_string()),
        }
    }
}

/// Resolved colors used for drawing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub border: String,
    pub text: String,
    pub background: String,
}

impl Palette {
    /// Theme defaults with any non-empty overrides applied field by field
    pub fn resolve(theme: Theme, overrides: Option<&ColorOverrides>) -> Self {
        let base = ThemeColors::for_theme(theme);
        let pick = |over: Option<&Option<String>>, default: &str| {
            over.and_then(|o| o.as_deref())
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .to_string()
        };

        Self {
            border: pick(overrides.map(|o| &o.border), base.border),
            text: pick(overrides.map(|o| &o.text), base.text),
            background: pick(overrides.map(|o| &o.background), base.background),
        }
    }
}

/// Full configuration for the generic badge renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeConfig {
    pub count: Count,
    pub theme: Theme,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub featured_text: String,
    pub platform_name: String,
    /// Pre-built name visual drawn instead of `platform_name`
    #[serde(skip)]
    pub platform_name_component: Option<Node>,
    pub link_enabled: bool,
    pub link_url: Option<String>,
    pub display_mode: DisplayMode,
    pub icon_type: IconType,
    pub colors: Option<ColorOverrides>,
    /// Logo visual drawn instead of the generated circle and initial
    #[serde(skip)]
    pub logo: Option<Node>,
    pub view_box_width: f64,
    pub count_group_x: f64,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            count: Count::default(),
            theme: Theme::Light,
            width: None,
            height: None,
            featured_text: DEFAULT_FEATURED_TEXT.to_string(),
            platform_name: DEFAULT_PLATFORM_NAME.to_string(),
            platform_name_component: None,
            link_enabled: true,
            link_url: None,
            display_mode: DisplayMode::Count,
            icon_type: IconType::Upvote,
            colors: None,
            logo: None,
            view_box_width: DEFAULT_VIEW_BOX_WIDTH,
            count_group_x: DEFAULT_COUNT_GROUP_X,
        }
    }
}

impl BadgeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(mut self, count: impl Into<Count>) -> Self {
        self.count = count.into();
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    pub fn featured_text(mut self, text: impl Into<String>) -> Self {
        self.featured_text = text.into();
        self
    }

    pub fn platform_name(mut self, name: impl Into<String>) -> Self {
        self.platform_name = name.into();
        self
    }

    pub fn platform_name_component(mut self, node: impl Into<Node>) -> Self {
        self.platform_name_component = Some(node.into());
        self
    }

    pub fn link_enabled(mut self, enabled: bool) -> Self {
        self.link_enabled = enabled;
        self
    }

    pub fn link_url(mut self, url: impl Into<String>) -> Self {
        self.link_url = Some(url.into());
        self
    }

    pub fn display_mode(mut self, mode: DisplayMode) -> Self {
        self.display_mode = mode;
        self
    }

    pub fn icon_type(mut self, icon: IconType) -> Self {
        self.icon_type = icon;
        self
    }

    pub fn colors(mut self, colors: ColorOverrides) -> Self {
        self.colors = Some(colors);
        self
    }

    pub fn logo(mut self, node: impl Into<Node>) -> Self {
        self.logo = Some(node.into());
        self
    }

    pub fn view_box_width(mut self, width: f64) -> Self {
        self.view_box_width = width;
        self
    }

    pub fn count_group_x(mut self, x: f64) -> Self {
        self.count_group_x = x;
        self
    }
}

/// Caller-facing options shared by the generic badge and every platform preset
///
/// Presets fix the name, colors and logo, so those are absent here.
/// `icon_type`, `view_box_width` and `count_group_x` stay optional so a
/// preset can tell "not given" apart from an explicit value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeOptions {
    pub count: Count,
    pub theme: Theme,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub featured_text: String,
    pub link_enabled: bool,
    pub link_url: Option<String>,
    pub display_mode: DisplayMode,
    pub icon_type: Option<IconType>,
    pub view_box_width: Option<f64>,
    pub count_group_x: Option<f64>,
}

impl Default for BadgeOptions {
    fn default() -> Self {
        Self {
            count: Count::default(),
            theme: Theme::Light,
            width: None,
            height: None,
            featured_text: DEFAULT_FEATURED_TEXT.to_string(),
            link_enabled: true,
            link_url: None,
            display_mode: DisplayMode::Count,
            icon_type: None,
            view_box_width: None,
            count_group_x: None,
        }
    }
}

impl BadgeOptions {
    /// Parse options from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Generic badge configuration with renderer defaults filled in
    pub fn into_config(self) -> BadgeConfig {
        BadgeConfig {
            count: self.count,
            theme: self.theme,
            width: self.width,
            height: self.height,
            featured_text: self.featured_text,
            link_enabled: self.link_enabled,
            link_url: self.link_url,
            display_mode: self.display_mode,
            icon_type: self.icon_type.unwrap_or_default(),
            view_box_width: self.view_box_width.unwrap_or(DEFAULT_VIEW_BOX_WIDTH),
            count_group_x: self.count_group_x.unwrap_or(DEFAULT_COUNT_GROUP_X),
            ..BadgeConfig::default()
        }
    }

    pub fn count(mut self, count: impl Into<Count>) -> Self {
        self.count = count.into();
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    pub fn featured_text(mut self, text: impl Into<String>) -> Self {
        self.featured_text = text.into();
        self
    }

    pub fn link_enabled(mut self, enabled: bool) -> Self {
        self.link_enabled = enabled;
        self
    }

    pub fn link_url(mut self, url: impl Into<String>) -> Self {
        self.link_url = Some(url.into());
        self
    }

    pub fn display_mode(mut self, mode: DisplayMode) -> Self {
        self.display_mode = mode;
        self
    }

    pub fn icon_type(mut self, icon: IconType) -> Self {
        self.icon_type = Some(icon);
        self
    }
}

/// First `max` characters of `s`, never splitting a character
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
