//! LinkedIn badge

use super::{assemble, Layout, PresetParts, WIDE};
use crate::svg::Element;
use crate::types::{BadgeConfig, BadgeOptions, IconType, Theme, ThemeColors};

pub const NAME: &str = "LinkedIn";
pub const DEFAULT_ICON: IconType = IconType::Likes;
pub const LAYOUT: Option<Layout> = Some(WIDE);
pub const LIGHT: ThemeColors = ThemeColors {
    border: "#0077B520",
    text: "#0077B5",
    background: "#FFFFFF",
};

/// "in" mark; on dark badges the white plate is dropped and the mark is drawn
/// in translucent white
pub fn logo(theme: Theme) -> Element {
    let (plate, mark) = match theme {
        Theme::Light => ("#FFF", "#0077B5"),
        Theme::Dark => ("none", "rgba(255,255,255,90)"),
    };

    Element::new("svg")
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .attr("viewBox", "0 0 34 34")
        .attr("width", 30)
        .attr("height", 30)
        .attr("focusable", "false")
        .child(
            Element::new("g")
                .attr("transform", "scale(.7083)")
                .attr("fill", "none")
                .attr("fill-rule", "evenodd")
                .child(
                    Element::new("rect")
                        .attr("fill", plate)
                        .attr("x", 1)
                        .attr("y", 1)
                        .attr("width", 46)
                        .attr("height", 46)
                        .attr("rx", 4),
                )
                .child(
                    Element::new("path")
                        .attr("d", "M0 4.01A4.01 4.01 0 014.01 0h39.98A4.01 4.01 0 0148 4.01v39.98A4.01 4.01 0 0143.99 48H4.01A4.01 4.01 0 010 43.99V4.01zM19 18.3h6.5v3.266C26.437 19.688 28.838 18 32.445 18 39.359 18 41 21.738 41 28.597V41.3h-7V30.159c0-3.906-.937-6.109-3.32-6.109-3.305 0-4.68 2.375-4.68 6.109V41.3h-7v-23zM7 41h7V18H7v23zm8-30.5a4.5 4.5 0 11-9 0 4.5 4.5 0 019 0z")
                        .attr("fill", mark),
                ),
        )
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
            name_component: None,
        },
    )
}
