//! Facebook badge

use super::{assemble, Layout, PresetParts, WIDE};
use crate::svg::Element;
use crate::types::{BadgeConfig, BadgeOptions, IconType, ThemeColors};

pub const NAME: &str = "Facebook";
pub const DEFAULT_ICON: IconType = IconType::Likes;
pub const LAYOUT: Option<Layout> = Some(WIDE);
pub const LIGHT: ThemeColors = ThemeColors {
    border: "#1877F220",
    text: "#1877F2",
    background: "#FFFFFF",
};

pub fn logo() -> Element {
    Element::new("svg")
        .attr("width", 32)
        .attr("height", 32)
        .attr("viewBox", "0 0 16 16")
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr("fill", "none")
        .child(
            Element::new("path")
                .attr("fill", "#1877F2")
                .attr("d", "M15 8a7 7 0 00-7-7 7 7 0 00-1.094 13.915v-4.892H5.13V8h1.777V6.458c0-1.754 1.045-2.724 2.644-2.724.766 0 1.567.137 1.567.137v1.723h-.883c-.87 0-1.14.54-1.14 1.093V8h1.941l-.31 2.023H9.094v4.892A7.001 7.001 0 0015 8z"),
        )
        .child(
            Element::new("path")
                .attr("fill", "#ffffff")
                .attr("d", "M10.725 10.023L11.035 8H9.094V6.687c0-.553.27-1.093 1.14-1.093h.883V3.87s-.801-.137-1.567-.137c-1.6 0-2.644.97-2.644 2.724V8H5.13v2.023h1.777v4.892a7.037 7.037 0 002.188 0v-4.892h1.63z"),
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
