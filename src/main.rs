//! Binary driver: renders the full badge icon set into a directory.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use badge_renderer::{export_plan, write_png, BadgeRenderer, StyleProfile, DEFAULT_PREFIX};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render the application badge icon set", long_about = None)]
struct Args {
    /// Directory the PNG files are written into.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// File-name prefix for the exported icons.
    #[arg(long)]
    prefix: Option<String>,

    /// JSON style profile overriding the built-in badge style.
    #[arg(long)]
    style: Option<PathBuf>,

    /// Glyph character, winning over the profile.
    #[arg(long)]
    glyph: Option<char>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let profile = match &args.style {
        Some(path) => StyleProfile::load(path)?,
        None => StyleProfile::default(),
    };

    let mut style = profile.resolve()?;
    if let Some(glyph) = args.glyph {
        style.glyph = glyph;
    }
    let prefix = args
        .prefix
        .or(profile.prefix)
        .unwrap_or_else(|| DEFAULT_PREFIX.to_string());

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output directory {}", args.out_dir.display()))?;

    let renderer = BadgeRenderer::new(style);

    println!("Creating {prefix} icons...");
    for job in export_plan(&prefix) {
        let canvas = renderer.render(job.size);
        write_png(&canvas, &args.out_dir.join(&job.file_name))?;
        println!("  Created {}", job.label());
    }

    println!();
    println!("Icons created successfully!");
    let location = args.out_dir.canonicalize().unwrap_or(args.out_dir);
    println!("Location: {}", location.display());
    Ok(())
}
