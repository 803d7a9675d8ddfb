//! Reddit badge

use super::{assemble, Layout, PresetParts, STANDARD};
use crate::svg::Element;
use crate::types::{BadgeConfig, BadgeOptions, IconType, ThemeColors};

pub const NAME: &str = "Reddit";
pub const DEFAULT_ICON: IconType = IconType::Upvote;
pub const LAYOUT: Option<Layout> = Some(STANDARD);
pub const LIGHT: ThemeColors = ThemeColors {
    border: "#FF450020",
    text: "#FF4500",
    background: "#FFFFFF",
};

const ORANGE: &str = "#FF4500";
const WHITE: &str = "#FFFFFF";

fn dot(cx: f64, cy: f64, r: f64, fill: &str) -> Element {
    Element::new("circle")
        .attr("cx", cx)
        .attr("cy", cy)
        .attr("r", r)
        .attr("fill", fill)
}

/// Orange disc with the alien head
pub fn logo() -> Element {
    Element::new("svg")
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr("width", 29)
        .attr("height", 29)
        .attr("viewBox", "0 0 20 20")
        .child(dot(10.0, 10.0, 10.0, ORANGE))
        .child(
            Element::new("path")
                .attr("d", "M10 7.7l.9-3.3 2.6.6")
                .attr("fill", "none")
                .attr("stroke", WHITE)
                .attr("stroke-width", 0.8)
                .attr("stroke-linecap", "round"),
        )
        .child(dot(14.0, 5.1, 1.0, WHITE))
        .child(dot(4.8, 9.2, 1.4, WHITE))
        .child(dot(15.2, 9.2, 1.4, WHITE))
        .child(
            Element::new("ellipse")
                .attr("cx", 10)
                .attr("cy", 11.8)
                .attr("rx", 5.6)
                .attr("ry", 3.9)
                .attr("fill", WHITE),
        )
        .child(dot(7.9, 11.2, 0.9, ORANGE))
        .child(dot(12.1, 11.2, 0.9, ORANGE))
        .child(
            Element::new("path")
                .attr("d", "M7.8 13.5c1.3.9 3.1.9 4.4 0")
                .attr("fill", "none")
                .attr("stroke", ORANGE)
                .attr("stroke-width", 0.7)
                .attr("stroke-linecap", "round"),
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
