//! Hacker News badge

use super::{assemble, Layout, PresetParts, WIDE};
use crate::svg::Element;
use crate::types::{BadgeConfig, BadgeOptions, IconType, ThemeColors};

pub const NAME: &str = "Hacker News";
pub const DEFAULT_ICON: IconType = IconType::Upvote;
pub const LAYOUT: Option<Layout> = Some(WIDE);
pub const LIGHT: ThemeColors = ThemeColors {
    border: "#FF660020",
    text: "#FF6600",
    background: "#FFFFFF",
};

/// Orange "Y" tile
pub fn logo() -> Element {
    Element::new("svg")
        .attr("width", 29)
        .attr("height", 29)
        .attr("viewBox", "0 0 512 512")
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .child(
            Element::new("rect")
                .attr("width", 512)
                .attr("height", 512)
                .attr("rx", "15%")
                .attr("fill", "#f60"),
        )
        .child(
            Element::new("path")
                .attr("fill", "#ffffff")
                .attr("d", "M124 91h51l81 162 81-164h51L276 293v136h-40V293z"),
        )
}

pub fn config(options: BadgeOptions) -> BadgeConfig {
    assemble(
        options,
        PresetParts {
            name: NAME,
            light: LIGHT,
            default_icon: DEFAULT_ICON,
            layout: LAYOUT,
            logo: logo(),
            name_component: None,
        },
    )
}
