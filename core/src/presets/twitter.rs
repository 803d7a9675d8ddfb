//! X (Twitter) badge
//!
//! Shows "X" with a smaller, faded "(Twitter)" suffix. The preset keeps the
//! caller's canvas layout.

use super::{assemble, Layout, PresetParts};
use crate::svg::Element;
use crate::types::{BadgeConfig, BadgeOptions, IconType, Theme, ThemeColors};

pub const NAME: &str = "X (Twitter)";
pub const DEFAULT_ICON: IconType = IconType::Likes;
pub const LAYOUT: Option<Layout> = None;
pub const LIGHT: ThemeColors = ThemeColors {
    border: "#00000020",
    text: "#000000",
    background: "#FFFFFF",
};

const FONT_FAMILY: &str = "Helvetica-Bold, Helvetica";

pub fn logo(theme: Theme) -> Element {
    let fill = match theme {
        Theme::Light => "#000000",
        Theme::Dark => "#FFFFFF",
    };

    Element::new("svg")
        .attr("width", 29)
        .attr("height", 29)
        .attr("viewBox", "0 0 24 24")
        .attr("aria-hidden", "true")
        .child(
            Element::new("g").child(
                Element::new("path")
                    .attr("fill", fill)
                    .attr("d", "M18.244 2.25h3.308l-7.227 8.26 8.502 11.24H16.17l-5.214-6.817L4.99 21.75H1.68l7.73-8.835L1.254 2.25H8.08l4.713 6.231zm-1.161 17.52h1.833L7.084 4.126H5.117z"),
            ),
        )
}

fn run(x: f64, y: f64, size: u32, color: &str, text: &str) -> Element {
    Element::new("text")
        .attr("font-family", FONT_FAMILY)
        .attr("font-size", size)
        .attr("fill", color)
        .child(Element::new("tspan").attr("x", x).attr("y", y).text(text))
}

/// "X (Twitter)" name visual
pub fn name(theme: Theme) -> Element {
    let color = if theme.is_dark() {
        ThemeColors::DARK.text
    } else {
        LIGHT.text
    };
    let suffix_opacity = if theme.is_dark() { "0.85" } else { "0.6" };

    Element::new("g")
        .child(run(62.0, 40.0, 21, color, "X").attr("font-weight", "bold"))
        .child(run(84.0, 38.0, 11, color, "(").attr("opacity", "0.6"))
        .child(run(89.0, 40.0, 14, color, "Twitter").attr("opacity", suffix_opacity))
        .child(run(135.0, 38.0, 11, color, ")").attr("opacity", "0.6"))
}

pub fn config(options: BadgeOptions) -> BadgeConfig {
    let theme = options.theme;
    assemble(
        options,
        PresetParts {
            name: NAME,
            light: LIGHT,
            default_icon: DEFAULT_ICON,
            layout: LAYOUT,
            logo: logo(theme),
            name_component: Some(name(theme).into()),
        },
    )
}
