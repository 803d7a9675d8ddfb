//! Badge preview endpoints
//!
//! `GET /badge/{platform}` returns the badge as an HTML fragment and
//! `GET /badge/{platform}/svg` as a standalone SVG document. Options come from
//! the query string, on top of the configured defaults.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use featured_badges_core::{
    try_render, try_render_document, BadgeOptions, BadgeTarget, Count, DisplayMode, Error,
    IconType, Theme,
};
use serde::Deserialize;
use tracing::{debug, instrument};

use super::api::ApiError;
use crate::config::Config;
use crate::state::AppState;

/// Create badge router
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/{platform}", get(badge_fragment))
        .route("/{platform}/svg", get(badge_document))
}

/// Badge options as they arrive in a query string
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BadgeQuery {
    pub count: Option<String>,
    pub theme: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub featured_text: Option<String>,
    /// Only used by the generic badge
    pub platform_name: Option<String>,
    pub link_enabled: Option<bool>,
    pub link_url: Option<String>,
    pub display_mode: Option<String>,
    pub icon_type: Option<String>,
}

impl BadgeQuery {
    /// Resolve the badge target and merge the query over the configured defaults
    pub fn resolve(
        self,
        platform: &str,
        config: &Config,
    ) -> featured_badges_core::Result<(BadgeTarget, BadgeOptions)> {
        let mut target: BadgeTarget = platform.parse()?;
        if let BadgeTarget::Generic { platform_name } = &mut target {
            *platform_name = self.platform_name.filter(|n| !n.is_empty());
        }

        let mut options = config.base_options(&target);
        if let Some(count) = self.count {
            options.count = Count::parse(&count);
        }
        if let Some(theme) = self.theme {
            options.theme = Theme::from(theme);
        }
        options.width = parse_dimension(self.width)?;
        options.height = parse_dimension(self.height)?;
        if let Some(text) = self.featured_text {
            options.featured_text = text;
        }
        if let Some(enabled) = self.link_enabled {
            options.link_enabled = enabled;
        }
        if let Some(url) = self.link_url {
            options.link_url = Some(url);
        }
        if let Some(mode) = self.display_mode {
            options.display_mode = mode.parse::<DisplayMode>()?;
        }
        options.icon_type = self.icon_type.map(IconType::from);

        Ok((target, options))
    }
}

/// Pixel size from the query; blank means not given
fn parse_dimension(raw: Option<String>) -> featured_badges_core::Result<Option<f64>> {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(Some)
        .ok_or(Error::InvalidDimension(raw))
}

/// Badge as an HTML fragment
#[instrument(skip(state))]
async fn badge_fragment(
    State(state): State<AppState>,
    Path(platform): Path<String>,
    Query(query): Query<BadgeQuery>,
) -> Result<impl IntoResponse, (StatusCode, Json<ApiError>)> {
    let (target, options) = query
        .resolve(&platform, &state.config)
        .map_err(ApiError::from_badge_error)?;

    let node = try_render(&target.config(options)).map_err(ApiError::from_badge_error)?;
    debug!(platform = %target.id(), "Rendered badge fragment");

    Ok(Html(node.to_markup()))
}

/// Badge as a standalone SVG document
#[instrument(skip(state))]
async fn badge_document(
    State(state): State<AppState>,
    Path(platform): Path<String>,
    Query(query): Query<BadgeQuery>,
) -> Result<impl IntoResponse, (StatusCode, Json<ApiError>)> {
    let (target, options) = query
        .resolve(&platform, &state.config)
        .map_err(ApiError::from_badge_error)?;

    let document =
        try_render_document(&target.config(options)).map_err(ApiError::from_badge_error)?;
    debug!(platform = %target.id(), "Rendered badge document");

    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], document))
}

#[cfg(test)]
mod tests {
    use super::*;
    use featured_badges_core::Platform;

    #[test]
    fn test_resolve_preset() {
        let query = BadgeQuery {
            count: Some("10.5k".to_string()),
            theme: Some("dark".to_string()),
            icon_type: Some("star".to_string()),
            ..Default::default()
        };
        let (target, options) = query.resolve("HackerNews", &Config::default()).unwrap();
        assert_eq!(target, BadgeTarget::Platform(Platform::HackerNews));
        assert_eq!(options.count, Count::Text("10.5k".to_string()));
        assert_eq!(options.theme, Theme::Dark);
        assert_eq!(options.icon_type, Some(IconType::Star));
        assert_eq!(options.featured_text, "FEATURED ON");
    }

    #[test]
    fn test_resolve_generic_name() {
        let query = BadgeQuery {
            platform_name: Some("MyPlatform".to_string()),
            ..Default::default()
        };
        let (target, _) = query.resolve("generic", &Config::default()).unwrap();
        assert_eq!(
            target,
            BadgeTarget::Generic {
                platform_name: Some("MyPlatform".to_string())
            }
        );
    }

    #[test]
    fn test_resolve_errors() {
        let err = BadgeQuery::default()
            .resolve("myspace", &Config::default())
            .unwrap_err();
        assert!(matches!(err, Error::UnknownPlatform(_)));

        let query = BadgeQuery {
            display_mode: Some("sideways".to_string()),
            ..Default::default()
        };
        let err = query.resolve("reddit", &Config::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidDisplayMode(_)));
    }

    #[test]
    fn test_resolve_dimensions() {
        let query = BadgeQuery {
            width: Some("300".to_string()),
            height: Some(" ".to_string()),
            ..Default::default()
        };
        let (_, options) = query.resolve("reddit", &Config::default()).unwrap();
        assert_eq!(options.width, Some(300.0));
        assert_eq!(options.height, None);

        for bad in ["abc", "inf"] {
            let query = BadgeQuery {
                width: Some(bad.to_string()),
                ..Default::default()
            };
            let err = query.resolve("reddit", &Config::default()).unwrap_err();
            assert!(matches!(err, Error::InvalidDimension(_)), "{bad}");
        }
    }

    #[test]
    fn test_unknown_query_values_are_lenient() {
        let query = BadgeQuery {
            theme: Some("sepia".to_string()),
            icon_type: Some("sparkles".to_string()),
            ..Default::default()
        };
        let (_, options) = query.resolve("reddit", &Config::default()).unwrap();
        assert_eq!(options.theme, Theme::Light);
        assert_eq!(options.icon_type, Some(IconType::Upvote));
    }
}
