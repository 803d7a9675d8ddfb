//! Askama templates

use askama::Template;

/// One preset in the gallery
#[derive(Debug, Clone)]
pub struct GalleryCard {
    pub id: &'static str,
    pub name: &'static str,
    /// Badge markup, light theme
    pub light: String,
    /// Badge markup, dark theme
    pub dark: String,
    /// Rust snippet for the light badge
    pub usage: String,
}

#[derive(Template)]
#[template(path = "pages/gallery.html")]
pub struct GalleryTemplate {
    pub cards: Vec<GalleryCard>,
    pub version: &'static str,
}
