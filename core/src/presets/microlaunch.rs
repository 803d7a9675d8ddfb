//! MicroLaunch badge
//!
//! The name is drawn in two tones, "Micro" and "Launch", so the preset
//! supplies its own name visual.

use super::{assemble, Layout, PresetParts, WIDE};
use crate::svg::Element;
use crate::types::{BadgeConfig, BadgeOptions, IconType, Theme, ThemeColors};

pub const NAME: &str = "MicroLaunch";
pub const DEFAULT_ICON: IconType = IconType::Upvote;
pub const LAYOUT: Option<Layout> = Some(WIDE);
pub const LIGHT: ThemeColors = ThemeColors {
    border: "#885EF220",
    text: "#885EF2",
    background: "#FFFFFF",
};

const BRAND: &str = "#885EF2";
const DARK_ACCENT: &str = "#A889F4";

pub fn logo() -> Element {
    let gradient = Element::new("linearGradient")
        .attr("id", "paint0_linear_10_66")
        .attr("x1", 91.5)
        .attr("y1", 10.5)
        .attr("x2", 30.5)
        .attr("y2", 105.5)
        .attr("gradientUnits", "userSpaceOnUse")
        .child(Element::new("stop").attr("stop-color", "#0094FF"))
        .child(
            Element::new("stop")
                .attr("offset", 0.51)
                .attr("stop-color", "#B741FF"),
        )
        .child(
            Element::new("stop")
                .attr("offset", 1)
                .attr("stop-color", "#8000FF"),
        );

    Element::new("svg")
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr("width", 29)
        .attr("height", 29)
        .attr("viewBox", "0 0 117 115")
        .attr("fill", "none")
        .child(
            Element::new("rect")
                .attr("width", 117)
                .attr("height", 114.911)
                .attr("rx", 57.4554)
                .attr("fill", "url(#paint0_linear_10_66)"),
        )
        .child(
            Element::new("path")
                .attr("d", "M63.6719 34.1406H83.2188V70H63.6719V34.1406ZM38.4297 34.1406H57.8711V87.9297H38.4297V34.1406Z")
                .attr("fill", "white"),
        )
        .child(Element::new("defs").child(gradient))
}

/// Two-tone name; both halves share the brand color on light badges
pub fn name(theme: Theme) -> Element {
    let (micro, launch) = match theme {
        Theme::Light => (BRAND, BRAND),
        Theme::Dark => ("#FFFFFF", DARK_ACCENT),
    };

    Element::new("text")
        .attr("font-family", "Helvetica-Bold, Helvetica")
        .attr("font-size", 21)
        .attr("font-weight", "bold")
        .child(
            Element::new("tspan")
                .attr("x", 62)
                .attr("y", 40)
                .attr("fill", micro)
                .text("Micro"),
        )
        .child(Element::new("tspan").attr("fill", launch).text("Launch"))
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
            logo: logo(),
            name_component: Some(name(theme).into()),
        },
    )
}
