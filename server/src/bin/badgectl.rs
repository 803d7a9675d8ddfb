//! badgectl - render featured badges from the command line
//!
//! Renders any preset (or the generic badge) to an HTML fragment or a
//! standalone SVG file, lists the available presets and prints the Rust
//! snippet that reproduces a badge.

use clap::{Args, Parser, Subcommand, ValueEnum};
use featured_badges_core::{
    presets, try_render, try_render_document, usage, BadgeOptions, BadgeTarget, Count,
    DisplayMode, IconType, Theme,
};
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

/// badgectl - featured badge renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a badge
    Render {
        /// Platform id, or `generic` for the bare badge
        platform: String,

        #[command(flatten)]
        badge: BadgeArgs,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Html)]
        format: Format,
    },

    /// List platform presets
    Platforms {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the Rust snippet that renders a badge
    Usage {
        /// Platform id, or `generic` for the bare badge
        platform: String,

        #[command(flatten)]
        badge: BadgeArgs,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// HTML fragment, wrapped in a link when one is set
    Html,
    /// Standalone SVG document
    Svg,
}

#[derive(Args, Debug, Default)]
struct BadgeArgs {
    /// Count to display, e.g. 42 or 10.5k
    #[arg(short, long)]
    count: Option<String>,

    /// Color theme (light or dark)
    #[arg(short, long, default_value = "light")]
    theme: String,

    /// Container width in pixels
    #[arg(long)]
    width: Option<f64>,

    /// Container height in pixels
    #[arg(long)]
    height: Option<f64>,

    /// Text above the platform name
    #[arg(long)]
    featured_text: Option<String>,

    /// Name shown by the generic badge
    #[arg(long)]
    platform_name: Option<String>,

    /// Link target
    #[arg(short, long)]
    link_url: Option<String>,

    /// Never wrap the badge in a link
    #[arg(long)]
    no_link: bool,

    /// count, link or none
    #[arg(short, long)]
    display_mode: Option<String>,

    /// upvote, upvote-arrow, likes, followers or star
    #[arg(short, long)]
    icon_type: Option<String>,
}

impl BadgeArgs {
    fn resolve(self, platform: &str) -> featured_badges_core::Result<(BadgeTarget, BadgeOptions)> {
        let mut target: BadgeTarget = platform.parse()?;
        if let BadgeTarget::Generic { platform_name } = &mut target {
            *platform_name = self.platform_name;
        }

        let mut options = BadgeOptions::default()
            .theme(Theme::from(self.theme))
            .link_enabled(!self.no_link);
        if let Some(count) = self.count {
            options.count = Count::parse(&count);
        }
        options.width = self.width;
        options.height = self.height;
        if let Some(text) = self.featured_text {
            options.featured_text = text;
        }
        options.link_url = self.link_url;
        if let Some(mode) = self.display_mode {
            options.display_mode = mode.parse::<DisplayMode>()?;
        }
        options.icon_type = self.icon_type.map(IconType::from);

        Ok((target, options))
    }
}

fn main() {
    // Initialize tracing; stdout is reserved for badge output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            platform,
            badge,
            output,
            format,
        } => handle_render(&platform, badge, output, format),
        Commands::Platforms { json } => handle_platforms(json),
        Commands::Usage { platform, badge } => handle_usage(&platform, badge),
    };

    if let Err(e) = result {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn render_badge(platform: &str, badge: BadgeArgs, format: Format) -> anyhow::Result<String> {
    let (target, options) = badge.resolve(platform)?;
    let config = target.config(options);

    let rendered = match format {
        Format::Html => try_render(&config)?.to_markup(),
        Format::Svg => try_render_document(&config)?,
    };
    Ok(rendered)
}

fn handle_render(
    platform: &str,
    badge: BadgeArgs,
    output: Option<PathBuf>,
    format: Format,
) -> anyhow::Result<()> {
    let rendered = render_badge(platform, badge, format)?;

    match output {
        Some(path) => {
            std::fs::write(&path, &rendered)?;
            info!(path = %path.display(), ?format, "Wrote badge");
        }
        None => println!("{}", rendered),
    }
    Ok(())
}

fn handle_platforms(json: bool) -> anyhow::Result<()> {
    let catalog = presets::catalog();

    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    println!("{:<12} {:<14} {:<13} LINK", "ID", "NAME", "ICON");
    for info in catalog {
        println!(
            "{:<12} {:<14} {:<13} {}",
            info.id,
            info.name,
            info.default_icon.to_string(),
            info.default_link_url
        );
    }
    Ok(())
}

fn handle_usage(platform: &str, badge: BadgeArgs) -> anyhow::Result<()> {
    let (target, options) = badge.resolve(platform)?;
    print!("{}", usage::snippet(&target, &options));
    Ok(())
}
