//! Gallery page

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use featured_badges_core::{try_render, usage, BadgeTarget, Platform, Theme};
use tracing::instrument;

use crate::state::AppState;
use crate::templates::{GalleryCard, GalleryTemplate};

/// Count shown on every gallery badge
const SAMPLE_COUNT: i64 = 11;

/// Create UI router
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(gallery_page))
}

/// Every preset in both themes
#[instrument(skip(state))]
async fn gallery_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let mut cards = Vec::with_capacity(Platform::ALL.len());

    for platform in Platform::ALL {
        let target = BadgeTarget::from(platform);
        let options = state.config.base_options(&target).count(SAMPLE_COUNT);

        let light = try_render(&target.config(options.clone().theme(Theme::Light)))?;
        let dark = try_render(&target.config(options.clone().theme(Theme::Dark)))?;

        cards.push(GalleryCard {
            id: platform.id(),
            name: platform.display_name(),
            light: light.to_markup(),
            dark: dark.to_markup(),
            usage: usage::snippet(&target, &options.theme(Theme::Light)),
        });
    }

    let template = GalleryTemplate {
        cards,
        version: env!("CARGO_PKG_VERSION"),
    };
    Ok(Html(template.render()?))
}

/// Error type for page routes
#[derive(Debug)]
pub enum AppError {
    TemplateError(String),
    RenderError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let message = match &self {
            AppError::TemplateError(msg) => {
                tracing::error!("Template error: {}", msg);
                format!("Template error: {}", msg)
            }
            AppError::RenderError(msg) => {
                tracing::error!("Render error: {}", msg);
                format!("Render error: {}", msg)
            }
        };

        (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
    }
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        AppError::TemplateError(err.to_string())
    }
}

impl From<featured_badges_core::Error> for AppError {
    fn from(err: featured_badges_core::Error) -> Self {
        AppError::RenderError(err.to_string())
    }
}
