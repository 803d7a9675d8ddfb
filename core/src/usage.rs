//! Usage snippets
//!
//! Produces the Rust code that reproduces a previewed badge, listing only the
//! options that differ from their defaults (link URL and theme are always
//! shown).

use crate::presets::BadgeTarget;
use crate::types::{
    BadgeOptions, Count, DisplayMode, DEFAULT_FEATURED_TEXT, DEFAULT_PLATFORM_NAME,
};

const CRATE_NAME: &str = "featured_badges_core";

/// Rust snippet rendering the badge described by `target` and `options`
pub fn snippet(target: &BadgeTarget, options: &BadgeOptions) -> String {
    let mut imports = Vec::new();
    let mut calls = Vec::new();

    let (head, builder) = match target {
        BadgeTarget::Generic { platform_name } => {
            imports.push("render");
            imports.push("BadgeConfig");
            if let Some(name) = platform_name.as_deref().filter(|n| *n != DEFAULT_PLATFORM_NAME) {
                calls.push(format!(".platform_name({:?})", name));
            }
            ("render(\n    &".to_string(), "BadgeConfig::new()")
        }
        BadgeTarget::Platform(platform) => {
            imports.push("BadgeOptions");
            imports.push("Platform");
            (
                format!("Platform::{:?}.render(\n    ", platform),
                "BadgeOptions::default()",
            )
        }
    };

    if let Some(url) = &options.link_url {
        calls.push(format!(".link_url({:?})", url));
    }

    imports.push("Theme");
    calls.push(format!(".theme(Theme::{:?})", options.theme));

    if let Some(width) = options.width {
        calls.push(format!(".width({:?})", width));
    }
    if let Some(height) = options.height {
        calls.push(format!(".height({:?})", height));
    }

    if options.display_mode == DisplayMode::Count && options.count != Count::default() {
        match &options.count {
            Count::Integer(n) if i32::try_from(*n).is_ok() => {
                calls.push(format!(".count({})", n))
            }
            Count::Integer(n) => calls.push(format!(".count({}_i64)", n)),
            Count::Float(n) => calls.push(format!(".count({:?})", n)),
            Count::Text(s) => calls.push(format!(".count({:?})", s)),
        }
    }

    if options.featured_text != DEFAULT_FEATURED_TEXT {
        calls.push(format!(".featured_text({:?})", options.featured_text));
    }

    if !options.link_enabled {
        calls.push(".link_enabled(false)".to_string());
    }

    if options.display_mode != DisplayMode::Count {
        imports.push("DisplayMode");
        calls.push(format!(".display_mode(DisplayMode::{:?})", options.display_mode));
    }

    if let Some(icon) = options.icon_type {
        if options.display_mode == DisplayMode::Count && icon != target.default_icon() {
            imports.push("IconType");
            calls.push(format!(".icon_type(IconType::{:?})", icon));
        }
    }

    imports.sort_unstable_by_key(|name| name.to_ascii_lowercase());

    let mut out = format!("use {}::{{{}}};\n\n", CRATE_NAME, imports.join(", "));
    out.push_str("let badge = ");
    out.push_str(&head);
    out.push_str(builder);
    for call in &calls {
        out.push_str("\n        ");
        out.push_str(call);
    }
    out.push_str(",\n);\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::Platform;
    use crate::types::{IconType, Theme};

    #[test]
    fn test_preset_snippet_minimal() {
        let options = BadgeOptions::default()
            .link_url("https://news.ycombinator.com/item?id=1")
            .width(250.0);
        let code = snippet(&Platform::HackerNews.into(), &options);
        assert_eq!(
            code,
            "use featured_badges_core::{BadgeOptions, Platform, Theme};\n\n\
             let badge = Platform::HackerNews.render(\n    BadgeOptions::default()\n        \
             .link_url(\"https://news.ycombinator.com/item?id=1\")\n        \
             .theme(Theme::Light)\n        \
             .width(250.0),\n);\n"
        );
    }

    #[test]
    fn test_snippet_lists_non_defaults() {
        let options = BadgeOptions::default()
            .count("10.5k")
            .theme(Theme::Dark)
            .featured_text("TRENDING ON")
            .link_enabled(false)
            .icon_type(IconType::Star);
        let code = snippet(&Platform::Facebook.into(), &options);
        assert!(code.contains(".count(\"10.5k\")"));
        assert!(code.contains(".theme(Theme::Dark)"));
        assert!(code.contains(".featured_text(\"TRENDING ON\")"));
        assert!(code.contains(".link_enabled(false)"));
        assert!(code.contains(".icon_type(IconType::Star)"));
        assert!(code.contains("IconType, Platform, Theme}"));
    }

    #[test]
    fn test_snippet_wide_integer_count() {
        let options = BadgeOptions::default().count(5_000_000_000_i64);
        let code = snippet(&Platform::GitHub.into(), &options);
        assert!(code.contains(".count(5000000000_i64)"));

        let code = snippet(&Platform::GitHub.into(), &BadgeOptions::default().count(-42));
        assert!(code.contains(".count(-42)"));
        assert!(!code.contains("_i64"));
    }

    #[test]
    fn test_snippet_omits_platform_default_icon() {
        let options = BadgeOptions::default().count(42).icon_type(IconType::Likes);
        let code = snippet(&Platform::Facebook.into(), &options);
        assert!(code.contains(".count(42)"));
        assert!(!code.contains("icon_type"));
    }

    #[test]
    fn test_snippet_skips_count_outside_count_mode() {
        let options = BadgeOptions::default()
            .count(42)
            .display_mode(DisplayMode::Link)
            .icon_type(IconType::Star);
        let code = snippet(&Platform::Reddit.into(), &options);
        assert!(!code.contains(".count("));
        assert!(!code.contains("icon_type"));
        assert!(code.contains(".display_mode(DisplayMode::Link)"));
    }

    #[test]
    fn test_generic_snippet() {
        let target = BadgeTarget::Generic {
            platform_name: Some("MyPlatform".to_string()),
        };
        let code = snippet(&target, &BadgeOptions::default());
        assert!(code.starts_with("use featured_badges_core::{BadgeConfig, render, Theme};"));
        assert!(code.contains("render(\n    &BadgeConfig::new()"));
        assert!(code.contains(".platform_name(\"MyPlatform\")"));

        let unnamed = BadgeTarget::Generic {
            platform_name: Some("Social".to_string()),
        };
        assert!(!snippet(&unnamed, &BadgeOptions::default()).contains("platform_name"));
    }
}
