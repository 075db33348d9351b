use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use blogdeck::app::App;
use blogdeck::catalog::{Catalog, Post};
use blogdeck::config::Config;
use blogdeck::engine::ViewEngine;
use blogdeck::util::{directory_base_url, strip_control_chars};

/// Get the config directory path (~/.config/blogdeck/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".config").join("blogdeck"))
}

#[derive(Parser, Debug)]
#[command(name = "blogdeck", about = "Browse, filter and search a blog catalog in the terminal")]
struct Args {
    /// Catalog file (.toml or .json). Defaults to the built-in sample posts.
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Config file. Defaults to ~/.config/blogdeck/config.toml.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print one page of the listing instead of starting the TUI
    #[arg(long)]
    list: bool,

    /// Print the featured posts instead of starting the TUI
    #[arg(long, conflicts_with = "list")]
    featured: bool,

    /// Category filter for --list: all, doctor, nursing, hospital, education
    #[arg(long, default_value = "all", requires = "list")]
    category: String,

    /// Sort order for --list: newest, oldest, reading-time
    #[arg(long, default_value = "newest", requires = "list")]
    sort: String,

    /// Reading-time filter for --list: all, short, medium, long
    #[arg(long, default_value = "all", requires = "list")]
    time: String,

    /// Search text for --list
    #[arg(long, default_value = "", requires = "list")]
    search: String,

    /// Page to print with --list (1-based)
    #[arg(long, default_value_t = 1, requires = "list")]
    page: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they never mix with the TUI or --list output.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => get_config_dir()?.join("config.toml"),
    };
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    let catalog_path = args.catalog.clone().or_else(|| config.catalog_path.clone());
    let catalog = match &catalog_path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => Catalog::sample(),
    };
    tracing::debug!(posts = catalog.len(), "Catalog ready");

    let mut engine = ViewEngine::new(Arc::new(catalog));

    if args.featured {
        print_featured(&engine);
        return Ok(());
    }

    if args.list {
        apply_list_filters(&mut engine, &args)?;
        print_listing(&engine);
        return Ok(());
    }

    let mut app = App::new(engine);
    for warning in app.apply_config(&config) {
        tracing::warn!("{}", warning);
    }
    app.base_url = resolve_base_url(&config, catalog_path.as_deref())?;

    blogdeck::ui::run(&mut app).await?;

    println!("Goodbye!");
    Ok(())
}

/// Configured base URL, else the catalog file's directory.
fn resolve_base_url(config: &Config, catalog_path: Option<&Path>) -> Result<Option<url::Url>> {
    if let Some(base) = &config.base_url {
        let url = url::Url::parse(base).with_context(|| format!("Invalid base_url '{}'", base))?;
        return Ok(Some(url));
    }
    Ok(catalog_path.and_then(directory_base_url))
}

fn apply_list_filters(engine: &mut ViewEngine, args: &Args) -> Result<()> {
    engine.set_category_code(&args.category)?;
    engine.set_sort_code(&args.sort)?;
    engine.set_time_filter_code(&args.time)?;
    engine.set_search(args.search.as_str());

    if args.page != 1 && !engine.go_to_page(args.page) {
        eprintln!(
            "Warning: page {} is out of range (1-{}), showing page 1",
            args.page,
            engine.total_pages().max(1)
        );
    }
    Ok(())
}

fn print_listing(engine: &ViewEngine) {
    let summary = engine.pagination_summary();
    if summary.is_empty() {
        println!("No blogs found");
        println!("Try adjusting your filters or search terms.");
        return;
    }

    println!(
        "{} (page {} of {})",
        summary, summary.current_page, summary.total_pages
    );
    println!();
    for post in engine.visible_posts() {
        print_post(post);
    }
}

fn print_featured(engine: &ViewEngine) {
    let featured = engine.featured();
    println!("Featured posts ({})", featured.len());
    println!();
    for post in featured {
        print_post(post);
    }
}

fn print_post(post: &Post) {
    println!("  [{}] {}", post.id, strip_control_chars(&post.title));
    println!(
        "      {} · {} min read · {} · By {}",
        post.category_name,
        post.read_time,
        post.display_date(),
        strip_control_chars(&post.author)
    );
}
