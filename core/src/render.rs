//! Generic badge renderer
//!
//! Every badge, preset or not, goes through [`render`]. Rendering happens in
//! two steps: [`resolve`] turns a [`BadgeConfig`] into concrete drawing
//! parameters (truncated text, colors, canvas and container size), then
//! [`Resolved::compose`] builds the markup tree from them.

use tracing::error;

use crate::icons;
use crate::svg::{Element, Node};
use crate::types::{truncate_chars, BadgeConfig, DisplayMode, Palette};
use crate::{Error, Result};

/// Maximum rendered length of the featured-text line
pub const FEATURED_TEXT_MAX_LEN: usize = 15;
/// Canvas width removed when the right-hand region is empty
pub const NONE_MODE_SHRINK: f64 = 30.0;
/// Height of the SVG canvas
pub const CANVAS_HEIGHT: f64 = 54.0;

const BORDER_RADIUS: f64 = 16.0;
const FONT_FAMILY: &str = "Helvetica-Bold, Helvetica";

/// Pixel size applied to the wrapping container
///
/// A missing dimension is left to the SVG's intrinsic aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerSize {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl ContainerSize {
    /// Pick container dimensions from the requested size
    ///
    /// Non-positive dimensions count as not given.
    pub fn resolve(width: Option<f64>, height: Option<f64>, canvas_width: f64) -> Self {
        let width = width.filter(|w| *w > 0.0);
        let height = height.filter(|h| *h > 0.0);

        match (width, height) {
            (None, None) => Self {
                width: Some(canvas_width),
                height: None,
            },
            (Some(w), None) => Self {
                width: Some(w),
                height: None,
            },
            (None, Some(h)) => Self {
                width: None,
                height: Some(h),
            },
            (Some(w), Some(h)) => Self {
                width: Some(w),
                height: Some(h),
            },
        }
    }

    /// Inline CSS for the container element
    pub fn style(&self) -> String {
        let mut parts = Vec::new();
        if let Some(w) = self.width {
            parts.push(format!("width: {}px", w));
        }
        if let Some(h) = self.height {
            parts.push(format!("height: {}px", h));
        }
        parts.join("; ")
    }

    /// Both dimensions, deriving the missing one from the canvas aspect ratio
    pub fn dimensions(&self, canvas_width: f64) -> (f64, f64) {
        let ratio = canvas_width / CANVAS_HEIGHT;
        match (self.width, self.height) {
            (Some(w), Some(h)) => (w, h),
            (Some(w), None) => (w, round2(w / ratio)),
            (None, Some(h)) => (round2(h * ratio), h),
            (None, None) => (canvas_width, CANVAS_HEIGHT),
        }
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// X offset of the count text, keeping counts of any length centred under the icon
pub fn count_text_x(count_text: &str) -> f64 {
    let len = count_text.chars().count() as f64;
    16.5 - 3.3 * (len - 1.0)
}

/// Drawing parameters derived from a [`BadgeConfig`]
#[derive(Debug, Clone)]
pub struct Resolved<'a> {
    pub config: &'a BadgeConfig,
    pub featured_text: String,
    pub count_text: String,
    pub palette: Palette,
    pub canvas_width: f64,
    pub container: ContainerSize,
}

/// Resolve the configuration into drawing parameters
///
/// Fails only when count mode is asked for with an empty count string.
pub fn resolve(config: &BadgeConfig) -> Result<Resolved<'_>> {
    let featured_text = truncate_chars(&config.featured_text, FEATURED_TEXT_MAX_LEN);
    let count_text = config.count.display_text();

    if config.display_mode == DisplayMode::Count && config.count.is_missing() {
        return Err(Error::MissingCount);
    }

    let palette = Palette::resolve(config.theme, config.colors.as_ref());

    let canvas_width = match config.display_mode {
        DisplayMode::None => config.view_box_width - NONE_MODE_SHRINK,
        DisplayMode::Count | DisplayMode::Link => config.view_box_width,
    };

    let container = ContainerSize::resolve(config.width, config.height, canvas_width);

    Ok(Resolved {
        config,
        featured_text,
        count_text,
        palette,
        canvas_width,
        container,
    })
}

impl Resolved<'_> {
    /// Link target, if the badge should be clickable
    pub fn link(&self) -> Option<&str> {
        if !self.config.link_enabled {
            return None;
        }
        self.config.link_url.as_deref().filter(|url| !url.is_empty())
    }

    /// The SVG canvas
    pub fn svg(&self) -> Element {
        let text = self.palette.text.as_str();

        let plate = Element::new("rect")
            .attr("stroke", &self.palette.border)
            .attr("stroke-width", 1)
            .attr("fill", &self.palette.background)
            .attr("x", 0.5)
            .attr("y", 0.5)
            .attr("width", self.canvas_width - 1.0)
            .attr("height", CANVAS_HEIGHT - 1.0)
            .attr("rx", BORDER_RADIUS);

        let featured = Element::new("text")
            .attr("font-family", FONT_FAMILY)
            .attr("font-size", 9)
            .attr("font-weight", "bold")
            .attr("fill", text)
            .child(
                Element::new("tspan")
                    .attr("x", 63)
                    .attr("y", 20)
                    .text(self.featured_text.clone()),
            );

        let name = match &self.config.platform_name_component {
            Some(node) => node.clone(),
            None => Element::new("text")
                .attr("font-family", FONT_FAMILY)
                .attr("font-size", 21)
                .attr("font-weight", "bold")
                .attr("fill", text)
                .child(
                    Element::new("tspan")
                        .attr("x", 62)
                        .attr("y", 40)
                        .text(self.config.platform_name.clone()),
                )
                .into(),
        };

        let logo = match &self.config.logo {
            Some(node) => node.clone(),
            None => icons::default_logo(&self.config.platform_name, text).into(),
        };

        let mut content = Element::new("g")
            .child(plate)
            .child(featured)
            .child(name);
        if let Some(region) = self.right_region() {
            content = content.child(region);
        }
        content = content.child(
            Element::new("g")
                .attr("transform", "translate(18, 12)")
                .child(logo),
        );

        Element::new("svg")
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .attr("width", "100%")
            .attr("height", "100%")
            .attr("preserveAspectRatio", "xMidYMid meet")
            .attr("viewBox", format!("0 0 {} {}", self.canvas_width, CANVAS_HEIGHT))
            .attr("version", "1.1")
            .child(
                Element::new("g")
                    .attr("stroke", "none")
                    .attr("stroke-width", 1)
                    .attr("fill", "none")
                    .attr("fill-rule", "evenodd")
                    .child(content),
            )
    }

    /// Count or link group; `None` when nothing is displayed
    fn right_region(&self) -> Option<Element> {
        let text = self.palette.text.as_str();
        let inner = match self.config.display_mode {
            DisplayMode::Count => Element::new("g")
                .child(icons::count_icon(self.config.icon_type, text))
                .child(
                    Element::new("text")
                        .attr("font-family", FONT_FAMILY)
                        .attr("font-size", 13)
                        .attr("font-weight", "bold")
                        .attr("style", "line-height: 20px")
                        .child(
                            Element::new("tspan")
                                .attr("x", count_text_x(&self.count_text))
                                .attr("y", 27)
                                .text(self.count_text.clone()),
                        ),
                ),
            DisplayMode::Link => Element::new("g").child(icons::link_icon(text)),
            DisplayMode::None => return None,
        };

        Some(
            Element::new("g")
                .attr(
                    "transform",
                    format!("translate({}, 13)", self.config.count_group_x),
                )
                .attr("fill", text)
                .child(inner),
        )
    }

    /// Full badge: sized container, optionally wrapped in an external link
    pub fn compose(&self) -> Node {
        let container = Element::new("div")
            .attr("style", self.container.style())
            .child(self.svg());

        match self.link() {
            Some(url) => Element::new("a")
                .attr("href", url)
                .attr("target", "_blank")
                .attr("rel", "noopener noreferrer")
                .attr("style", "text-decoration: none; display: inline-block")
                .child(container)
                .into(),
            None => container.into(),
        }
    }

    /// Self-contained SVG document with concrete pixel dimensions
    pub fn document(&self) -> Element {
        let (width, height) = self.container.dimensions(self.canvas_width);
        self.svg().attr("width", width).attr("height", height)
    }
}

/// Render a badge, reporting configuration errors as values
pub fn try_render(config: &BadgeConfig) -> Result<Node> {
    Ok(resolve(config)?.compose())
}

/// Render a badge
///
/// Returns `None`, after logging the problem, when the configuration asks for
/// a count but supplies an empty one.
pub fn render(config: &BadgeConfig) -> Option<Node> {
    match try_render(config) {
        Ok(node) => Some(node),
        Err(err) => {
            error!("{}", err);
            None
        }
    }
}

/// Standalone SVG document string, reporting configuration errors as values
///
/// The link wrapper does not apply to standalone documents.
pub fn try_render_document(config: &BadgeConfig) -> Result<String> {
    Ok(resolve(config)?.document().to_string())
}

/// Render a badge as a standalone SVG document string
pub fn render_document(config: &BadgeConfig) -> Option<String> {
    match try_render_document(config) {
        Ok(doc) => Some(doc),
        Err(err) => {
            error!("{}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ColorOverrides, Count, IconType, Theme};
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    /// Collects the messages of ERROR events
    #[derive(Clone, Default)]
    struct ErrorCapture {
        messages: Arc<Mutex<Vec<String>>>,
    }

    struct MessageVisitor<'a>(&'a mut String);

    impl Visit for MessageVisitor<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
            if field.name() == "message" {
                *self.0 = format!("{:?}", value);
            }
        }
    }

    impl<S: Subscriber> Layer<S> for ErrorCapture {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::ERROR {
                let mut message = String::new();
                event.record(&mut MessageVisitor(&mut message));
                self.messages.lock().unwrap().push(message);
            }
        }
    }

    fn capture_errors<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
        let capture = ErrorCapture::default();
        let subscriber = tracing_subscriber::registry().with(capture.clone());
        let out = tracing::subscriber::with_default(subscriber, f);
        let messages = capture.messages.lock().unwrap().clone();
        (out, messages)
    }

    fn root(config: &BadgeConfig) -> Element {
        match render(config).expect("badge should render") {
            Node::Element(el) => el,
            Node::Text(_) => panic!("badge root should be an element"),
        }
    }

    fn plate(el: &Element) -> &Element {
        el.find("rect").expect("background plate")
    }

    fn count_group<'a>(el: &'a Element, config: &BadgeConfig) -> Option<&'a Element> {
        let transform = format!("translate({}, 13)", config.count_group_x);
        el.find_all("g")
            .into_iter()
            .find(|g| g.get_attr("transform") == Some(transform.as_str()))
    }

    #[test]
    fn test_renders_numeric_count() {
        let config = BadgeConfig::new().count(42);
        assert!(root(&config).contains_text("42"));
    }

    #[test]
    fn test_renders_platform_name() {
        let config = BadgeConfig::new().count(42).platform_name("MyPlatform");
        assert!(root(&config).contains_text("MyPlatform"));
    }

    #[test]
    fn test_light_theme_by_default() {
        let el = root(&BadgeConfig::new().count(42));
        assert_eq!(plate(&el).get_attr("fill"), Some("#FFFFFF"));
    }

    #[test]
    fn test_dark_theme() {
        let el = root(&BadgeConfig::new().count(42).theme(Theme::Dark));
        assert_eq!(plate(&el).get_attr("fill"), Some("#201e1e"));
        assert_eq!(plate(&el).get_attr("stroke"), Some("#363636"));
    }

    #[test]
    fn test_custom_colors() {
        let colors = ColorOverrides {
            border: Some("#123456".to_string()),
            text: Some("#abcdef".to_string()),
            background: Some("#fedcba".to_string()),
        };
        let el = root(&BadgeConfig::new().count(42).colors(colors));
        assert_eq!(plate(&el).get_attr("fill"), Some("#fedcba"));
        assert_eq!(plate(&el).get_attr("stroke"), Some("#123456"));
    }

    #[test]
    fn test_partial_color_override_keeps_theme_defaults() {
        let colors = ColorOverrides {
            background: Some("#fedcba".to_string()),
            ..Default::default()
        };
        let el = root(&BadgeConfig::new().count(42).theme(Theme::Dark).colors(colors));
        assert_eq!(plate(&el).get_attr("fill"), Some("#fedcba"));
        assert_eq!(plate(&el).get_attr("stroke"), Some("#363636"));
    }

    #[test]
    fn test_custom_width_and_height() {
        let el = root(&BadgeConfig::new().count(42).width(300.0).height(100.0));
        let container = el.find("div").unwrap();
        assert_eq!(container.get_attr("style"), Some("width: 300px; height: 100px"));
    }

    #[test]
    fn test_container_sizing_policy() {
        assert_eq!(ContainerSize::resolve(None, None, 190.0).style(), "width: 190px");
        assert_eq!(
            ContainerSize::resolve(Some(300.0), None, 220.0).style(),
            "width: 300px"
        );
        assert_eq!(
            ContainerSize::resolve(None, Some(100.0), 220.0).style(),
            "height: 100px"
        );
        assert_eq!(
            ContainerSize::resolve(Some(0.0), Some(100.0), 220.0).style(),
            "height: 100px"
        );
    }

    #[test]
    fn test_document_dimensions() {
        let size = ContainerSize::resolve(None, Some(108.0), 220.0);
        assert_eq!(size.dimensions(220.0), (440.0, 108.0));
        let size = ContainerSize::resolve(Some(440.0), None, 220.0);
        assert_eq!(size.dimensions(220.0), (440.0, 108.0));
        let size = ContainerSize::resolve(None, None, 220.0);
        assert_eq!(size.dimensions(220.0), (220.0, 54.0));
    }

    #[test]
    fn test_custom_featured_text() {
        let el = root(&BadgeConfig::new().count(42).featured_text("TRENDING ON"));
        assert!(el.contains_text("TRENDING ON"));
        assert!(!el.contains_text("FEATURED ON"));
    }

    #[test]
    fn test_truncates_featured_text() {
        let config = BadgeConfig::new()
            .count(42)
            .featured_text("THIS IS A VERY LONG FEATURED TEXT");
        let el = root(&config);
        assert!(el.contains_text("THIS IS A VERY"));
        assert!(!el.to_string().contains("THIS IS A VERY LONG FEATURED TEXT"));
        let tspan = el
            .find_all("tspan")
            .into_iter()
            .find(|t| t.text_content().starts_with("THIS"))
            .unwrap();
        assert_eq!(tspan.text_content(), "THIS IS A VERY ");
    }

    #[test]
    fn test_truncates_string_count() {
        let el = root(&BadgeConfig::new().count("1234567890"));
        assert!(el.contains_text("123456"));
        assert!(!el.to_string().contains("1234567"));
    }

    #[test]
    fn test_count_text_x() {
        assert_eq!(count_text_x("1"), 16.5);
        assert!((count_text_x("42") - 13.2).abs() < 1e-9);
        assert!((count_text_x("10.5k") - 3.3).abs() < 1e-9);
    }

    #[test]
    fn test_link_mode_hides_count() {
        let config = BadgeConfig::new().count(42).display_mode(DisplayMode::Link);
        let el = root(&config);
        assert!(!el.contains_text("42"));
        let group = count_group(&el, &config).expect("link group");
        assert_eq!(group.find_all("path").len(), 3);
        assert!(group.find("polygon").is_none());
    }

    #[test]
    fn test_none_mode_shrinks_canvas() {
        let config = BadgeConfig::new().count(42).display_mode(DisplayMode::None);
        let el = root(&config);
        let svg = el.find("svg").unwrap();
        assert_eq!(svg.get_attr("viewBox"), Some("0 0 190 54"));
        assert_eq!(plate(&el).get_attr("width"), Some("189"));
        assert!(count_group(&el, &config).is_none());
        assert!(!el.contains_text("42"));
        assert_eq!(el.find("div").unwrap().get_attr("style"), Some("width: 190px"));
    }

    #[test]
    fn test_empty_count_renders_nothing_and_logs_once() {
        let config = BadgeConfig::new().count("").display_mode(DisplayMode::Count);
        let (out, messages) = capture_errors(|| render(&config));
        assert!(out.is_none());
        assert_eq!(
            messages,
            vec!["SocialBadge requires a count prop when displayMode is \"count\"".to_string()]
        );
    }

    #[test]
    fn test_empty_count_with_default_mode() {
        let config = BadgeConfig::new().count("");
        let (out, messages) = capture_errors(|| render(&config));
        assert!(out.is_none());
        assert_eq!(messages.len(), 1);
        assert!(matches!(try_render(&config), Err(Error::MissingCount)));
    }

    #[test]
    fn test_empty_count_allowed_outside_count_mode() {
        let config = BadgeConfig::new().count("").display_mode(DisplayMode::Link);
        let (out, messages) = capture_errors(|| render(&config));
        assert!(out.is_some());
        assert!(messages.is_empty());
    }

    #[test]
    fn test_zero_count_renders() {
        let (out, messages) = capture_errors(|| render(&BadgeConfig::new()));
        assert!(out.unwrap().as_element().unwrap().contains_text("0"));
        assert!(messages.is_empty());
    }

    #[test]
    fn test_no_link_when_disabled() {
        let config = BadgeConfig::new()
            .count(42)
            .link_enabled(false)
            .link_url("https://example.com/social");
        let el = root(&config);
        assert_eq!(el.tag, "div");
        assert!(el.find("a").is_none());
    }

    #[test]
    fn test_no_link_without_url() {
        let el = root(&BadgeConfig::new().count(42));
        assert_eq!(el.tag, "div");
        let el = root(&BadgeConfig::new().count(42).link_url(""));
        assert_eq!(el.tag, "div");
    }

    #[test]
    fn test_link_wrapper() {
        let url = "https://example.com/social";
        let el = root(&BadgeConfig::new().count(42).link_url(url).link_enabled(true));
        assert_eq!(el.tag, "a");
        assert_eq!(el.get_attr("href"), Some(url));
        assert_eq!(el.get_attr("target"), Some("_blank"));
        assert_eq!(el.get_attr("rel"), Some("noopener noreferrer"));
        assert!(el.contains_text("42"));
    }

    #[test]
    fn test_default_logo() {
        let el = root(&BadgeConfig::new().count(42));
        assert!(el.find("circle").is_some());
        assert!(el.contains_text("S"));
    }

    #[test]
    fn test_custom_logo_and_name() {
        let config = BadgeConfig::new()
            .count(42)
            .logo(Element::new("image").attr("href", "logo.png"))
            .platform_name_component(Element::new("text").text("Custom"));
        let el = root(&config);
        assert!(el.find("circle").is_none());
        assert!(el.find("image").is_some());
        assert!(el.contains_text("Custom"));
        assert!(!el.contains_text("Social"));
    }

    #[test]
    fn test_icon_selection() {
        let el = root(&BadgeConfig::new().count(42));
        assert!(el.find("polygon").is_some());

        let config = BadgeConfig::new().count(42).icon_type(IconType::Star);
        let el = root(&config);
        let group = count_group(&el, &config).unwrap();
        assert!(group.find("polygon").is_none());
        assert!(group.find("path").is_some());
    }

    #[test]
    fn test_float_count() {
        let el = root(&BadgeConfig::new().count(Count::Float(1.5)));
        assert!(el.contains_text("1.5"));
    }

    #[test]
    fn test_document_has_no_link_and_concrete_size() {
        let config = BadgeConfig::new()
            .count(42)
            .link_url("https://example.com")
            .width(440.0);
        let doc = render_document(&config).unwrap();
        assert!(doc.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"440\" height=\"108\""));
        assert!(!doc.contains("<a "));
        assert!(!doc.contains("<div"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let config = BadgeConfig::new().count("10.5k").theme(Theme::Dark);
        assert_eq!(render(&config), render(&config));
    }
}
