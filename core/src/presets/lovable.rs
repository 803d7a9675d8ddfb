//! Lovable badge

use super::{assemble, Layout, PresetParts, STANDARD};
use crate::svg::Element;
use crate::types::{BadgeConfig, BadgeOptions, IconType, ThemeColors};

pub const NAME: &str = "Lovable";
pub const DEFAULT_ICON: IconType = IconType::Upvote;
pub const LAYOUT: Option<Layout> = Some(STANDARD);
pub const LIGHT: ThemeColors = ThemeColors {
    border: "#ff385c20",
    text: "#ff385c",
    background: "#FFFFFF",
};

const ID_PREFIX: &str = "lovable-logo_svg__";

/// Blurred ellipse behind the heart-shaped mask
fn blob(filter: char, cx: f64, cy: f64, rx: f64, ry: f64, fill: &str) -> Element {
    Element::new("g")
        .attr("filter", format!("url(#{ID_PREFIX}{filter})"))
        .child(
            Element::new("ellipse")
                .attr("cx", cx)
                .attr("cy", cy)
                .attr("fill", fill)
                .attr("rx", rx)
                .attr("ry", ry),
        )
}

fn blur_filter(id: char, width: f64, height: f64, x: f64, y: f64) -> Element {
    Element::new("filter")
        .attr("id", format!("{ID_PREFIX}{id}"))
        .attr("width", width)
        .attr("height", height)
        .attr("x", x)
        .attr("y", y)
        .attr("color-interpolation-filters", "sRGB")
        .attr("filterUnits", "userSpaceOnUse")
        .child(
            Element::new("feFlood")
                .attr("flood-opacity", 0)
                .attr("result", "BackgroundImageFix"),
        )
        .child(
            Element::new("feBlend")
                .attr("in", "SourceGraphic")
                .attr("in2", "BackgroundImageFix")
                .attr("result", "shape"),
        )
        .child(
            Element::new("feGaussianBlur")
                .attr("result", "effect1_foregroundBlur_19703_3420")
                .attr("stdDeviation", 3.58),
        )
}

fn stop(offset: f64, color: &str) -> Element {
    Element::new("stop")
        .attr("offset", offset)
        .attr("stop-color", color)
}

pub fn logo() -> Element {
    let mask = Element::new("mask")
        .attr("id", format!("{ID_PREFIX}b"))
        .attr("width", 23)
        .attr("height", 24)
        .attr("x", 0)
        .attr("y", 0)
        .attr("maskUnits", "userSpaceOnUse")
        .attr("style", "mask-type: alpha")
        .child(
            Element::new("path")
                .attr("fill", format!("url(#{ID_PREFIX}a)"))
                .attr("fill-rule", "evenodd")
                .attr("d", "M6.898 0c3.81 0 6.898 3.179 6.898 7.1v2.7h2.295c3.81 0 6.898 3.178 6.898 7.1S19.901 24 16.091 24H0V7.1C0 3.18 3.088 0 6.898 0")
                .attr("clip-rule", "evenodd"),
        );

    let blobs = Element::new("g")
        .attr("mask", format!("url(#{ID_PREFIX}b)"))
        .child(blob('c', 10.084, 12.811, 15.562, 15.977, "#4B73FF"))
        .child(blob('d', 11.794, 4.043, 19.931, 15.977, "#FF66F4"))
        .child(blob('e', 15.045, 1.037, 15.562, 14.031, "#FF0105"))
        .child(blob('f', 12.071, 4.039, 9.359, 9.608, "#FE7B02"));

    let defs = Element::new("defs")
        .child(blur_filter('c', 45.444, 46.274, -12.638, -10.326))
        .child(blur_filter('d', 54.181, 46.274, -15.297, -19.094))
        .child(blur_filter('e', 45.444, 42.383, -7.677, -20.154))
        .child(blur_filter('f', 33.038, 33.538, -4.448, -12.73))
        .child(
            Element::new("linearGradient")
                .attr("id", format!("{ID_PREFIX}a"))
                .attr("x1", 7.736)
                .attr("x2", 15.072)
                .attr("y1", 4.218)
                .attr("y2", 23.867)
                .attr("gradientUnits", "userSpaceOnUse")
                .child(stop(0.025, "#FF8E63"))
                .child(stop(0.56, "#FF7EB0"))
                .child(stop(0.95, "#4B73FF")),
        );

    Element::new("svg")
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr("viewBox", "0 0 23 24")
        .attr("width", 29)
        .attr("height", 29)
        .child(mask)
        .child(blobs)
        .child(defs)
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
