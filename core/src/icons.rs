//! Glyphs shared by every badge: count icons, the link icon and the
//! fallback logo.

use crate::svg::{Element, Node};
use crate::types::IconType;

/// Stroked icon frame used by the line-art glyphs
fn line_icon(x: f64, y: f64, size: f64, view_box: &str, stroke_width: f64, color: &str) -> Element {
    Element::new("svg")
        .attr("x", x)
        .attr("y", y)
        .attr("width", size)
        .attr("height", size)
        .attr("viewBox", view_box)
        .attr("fill", "none")
        .attr("stroke", color)
        .attr("stroke-width", stroke_width)
        .attr("stroke-linecap", "round")
        .attr("stroke-linejoin", "round")
}

fn path(d: &str) -> Element {
    Element::new("path").attr("d", d)
}

/// Icon drawn above the count
pub fn count_icon(icon: IconType, color: &str) -> Node {
    match icon {
        IconType::UpvoteArrow => line_icon(13.5, -2.0, 14.0, "0 0 24 24", 3.0, color)
            .child(path("m5 12 7-7 7 7"))
            .child(path("M12 19V5"))
            .into(),
        IconType::Likes => line_icon(14.5, -1.0, 12.0, "0 0 24 24", 2.0, color)
            .child(path("M7 10v12"))
            .child(path(
                "M15 5.88 14 10h5.83a2 2 0 0 1 1.92 2.56l-2.33 8A2 2 0 0 1 17.5 22H4a2 2 0 0 1-2-2v-8a2 2 0 0 1 2-2h2.76a2 2 0 0 0 1.79-1.11L12 2a3.13 3.13 0 0 1 3 3.88Z",
            ))
            .into(),
        IconType::Followers => line_icon(14.5, -1.0, 12.0, "0 0 24 24", 2.0, color)
            .child(path("M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"))
            .child(
                Element::new("circle")
                    .attr("cx", 9)
                    .attr("cy", 7)
                    .attr("r", 4),
            )
            .child(path("M22 21v-2a4 4 0 0 0-3-3.87"))
            .child(path("M16 3.13a4 4 0 0 1 0 7.75"))
            .into(),
        IconType::Star => line_icon(14.5, -1.0, 12.0, "0 0 16 16", 1.5, color)
            .child(path(
                "M8 .25a.75.75 0 0 1 .673.418l1.882 3.815 4.21.612a.75.75 0 0 1 .416 1.279l-3.046 2.97.719 4.192a.751.751 0 0 1-1.088.791L8 12.347l-3.766 1.98a.75.75 0 0 1-1.088-.79l.72-4.194L.818 6.374a.75.75 0 0 1 .416-1.28l4.21-.611L7.327.668A.75.75 0 0 1 8 .25Z",
            ))
            .into(),
        IconType::Upvote => Element::new("polygon")
            .attr("points", "26.0024997 10 15 10 20.5012498 0")
            .attr("fill", color)
            .into(),
    }
}

/// External-link glyph for `DisplayMode::Link`
pub fn link_icon(color: &str) -> Element {
    line_icon(12.0, 6.0, 18.0, "0 0 24 24", 2.0, color)
        .child(path("M21 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h6"))
        .child(path("m21 3-9 9"))
        .child(path("M15 3h6v6"))
}

/// Circle with the platform's initial, used when no logo is supplied
pub fn default_logo(platform_name: &str, color: &str) -> Element {
    let initial: String = platform_name.chars().take(1).collect();

    Element::new("svg")
        .attr("x", 0)
        .attr("y", 0)
        .attr("width", 29)
        .attr("height", 29)
        .attr("viewBox", "0 0 29 29")
        .attr("fill", color)
        .child(
            Element::new("circle")
                .attr("cx", 14.5)
                .attr("cy", 14.5)
                .attr("r", 12.5)
                .attr("stroke", color)
                .attr("stroke-width", 2)
                .attr("fill", "none"),
        )
        .child(
            Element::new("text")
                .attr("x", 10)
                .attr("y", 20)
                .attr("font-family", "Helvetica")
                .attr("font-size", 14)
                .attr("font-weight", "bold")
                .text(initial),
        )
}
