//! Instagram badge

use super::{assemble, Layout, PresetParts, WIDE};
use crate::svg::Element;
use crate::types::{BadgeConfig, BadgeOptions, IconType, ThemeColors};

pub const NAME: &str = "Instagram";
pub const DEFAULT_ICON: IconType = IconType::Likes;
pub const LAYOUT: Option<Layout> = Some(WIDE);
pub const LIGHT: ThemeColors = ThemeColors {
    border: "#E4405F20",
    text: "#E4405F",
    background: "#FFFFFF",
};

const GRADIENT_ID: &str = "instagram-logo_gradient";

/// Gradient tile with the camera outline
pub fn logo() -> Element {
    let gradient = Element::new("radialGradient")
        .attr("id", GRADIENT_ID)
        .attr("cx", 0.3)
        .attr("cy", 1.07)
        .attr("r", 1.5)
        .child(Element::new("stop").attr("offset", 0).attr("stop-color", "#FFDD55"))
        .child(Element::new("stop").attr("offset", 0.1).attr("stop-color", "#FFDD55"))
        .child(Element::new("stop").attr("offset", 0.5).attr("stop-color", "#FF543E"))
        .child(Element::new("stop").attr("offset", 1).attr("stop-color", "#C837AB"));

    Element::new("svg")
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr("width", 29)
        .attr("height", 29)
        .attr("viewBox", "0 0 24 24")
        .child(Element::new("defs").child(gradient))
        .child(
            Element::new("rect")
                .attr("width", 24)
                .attr("height", 24)
                .attr("rx", 6)
                .attr("fill", format!("url(#{GRADIENT_ID})")),
        )
        .child(
            Element::new("rect")
                .attr("x", 5)
                .attr("y", 5)
                .attr("width", 14)
                .attr("height", 14)
                .attr("rx", 4)
                .attr("fill", "none")
                .attr("stroke", "#FFFFFF")
                .attr("stroke-width", 1.8),
        )
        .child(
            Element::new("circle")
                .attr("cx", 12)
                .attr("cy", 12)
                .attr("r", 3.4)
                .attr("fill", "none")
                .attr("stroke", "#FFFFFF")
                .attr("stroke-width", 1.8),
        )
        .child(
            Element::new("circle")
                .attr("cx", 16.1)
                .attr("cy", 7.9)
                .attr("r", 1)
                .attr("fill", "#FFFFFF"),
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
