//! CLI tool for inspecting the generated page catalog.
//!
//! Works directly on the taxonomy, without a running server.
//!
//! # Usage
//!
//! ```bash
//! # List every generated page
//! cargo run --bin catalog -- list
//!
//! # Only niche-in-city pages
//! cargo run --bin catalog -- list --kind city-niche
//!
//! # Resolve a slug
//! cargo run --bin catalog -- resolve geracao-de-leads-b2b-santos
//!
//! # Show the generated content of a page
//! cargo run --bin catalog -- page prospeccao-b2b-dentistas-santos
//!
//! # Show cross-links
//! cargo run --bin catalog -- related prospeccao-b2b-dentistas-santos --limit 3
//!
//! # Print the sitemap
//! cargo run --bin catalog -- sitemap --base-url https://www.leadradar.com.br
//!
//! # Validate a custom taxonomy file
//! cargo run --bin catalog -- --taxonomy ./taxonomy.json check
//! ```

use seo_pages::application::related::DEFAULT_RELATED_LIMIT;
use seo_pages::application::services::{PageCatalog, PageService};
use seo_pages::config::parse_base_url;
use seo_pages::domain::entities::{PageEntry, PageKind};
use seo_pages::domain::taxonomy::Taxonomy;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use std::path::PathBuf;
use std::sync::Arc;

/// CLI tool for inspecting generated landing pages.
#[derive(Parser)]
#[command(name = "catalog")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON taxonomy file (defaults to the built-in reference taxonomy)
    #[arg(long, global = true)]
    taxonomy: Option<PathBuf>,

    /// Public site root used for page URLs
    #[arg(long, global = true, default_value = "https://www.leadradar.com.br")]
    base_url: String,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// List generated pages
    List {
        /// Only list pages of this kind
        #[arg(short, long, value_enum)]
        kind: Option<KindArg>,
    },

    /// Resolve a slug to its page entry
    Resolve {
        /// Page slug
        slug: String,
    },

    /// Show the generated content of a page
    Page {
        /// Page slug
        slug: String,

        /// Print as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show cross-links of a page
    Related {
        /// Page slug
        slug: String,

        /// Maximum number of links
        #[arg(short, long, default_value_t = DEFAULT_RELATED_LIMIT)]
        limit: usize,
    },

    /// Print the XML sitemap
    Sitemap,

    /// Validate the taxonomy
    Check,
}

/// Page kind filter.
#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    City,
    CityNiche,
    Neighborhood,
}

impl From<KindArg> for PageKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::City => PageKind::City,
            KindArg::CityNiche => PageKind::CityNiche,
            KindArg::Neighborhood => PageKind::Neighborhood,
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let taxonomy = load_taxonomy(cli.taxonomy.as_ref())?;

    let base_url = parse_base_url(&cli.base_url).context("Invalid --base-url")?;
    let catalog = Arc::new(PageCatalog::new(&taxonomy));
    let service = PageService::new(catalog, base_url, DEFAULT_RELATED_LIMIT);

    match cli.command {
        Commands::List { kind } => list(&service, kind.map(PageKind::from)),
        Commands::Resolve { slug } => resolve(&service, &slug)?,
        Commands::Page { slug, json } => page(&service, &slug, json)?,
        Commands::Related { slug, limit } => related(&service, &slug, limit)?,
        Commands::Sitemap => print!("{}", service.sitemap_xml()?),
        Commands::Check => check(&taxonomy)?,
    }

    Ok(())
}

/// Loads the taxonomy file, or the reference taxonomy when no file is given.
fn load_taxonomy(path: Option<&PathBuf>) -> Result<Taxonomy> {
    match path {
        Some(path) => Taxonomy::from_json_file(path)
            .with_context(|| format!("Failed to load taxonomy from {}", path.display())),
        None => Ok(Taxonomy::reference()),
    }
}

/// Lists pages as a table.
///
/// # Output Format
///
/// ```text
/// 📋 Generated pages
///
///   Kind          Slug                                          Label
///   ──────────────────────────────────────────────────────────────────────────
///   city          geracao-de-leads-b2b-praia-grande             Leads B2B em Praia Grande
/// ```
fn list(service: &PageService, kind: Option<PageKind>) {
    println!("{}", "📋 Generated pages".bright_blue().bold());
    println!();

    let summaries: Vec<_> = service
        .summaries()
        .into_iter()
        .filter(|s| kind.is_none_or(|k| s.kind == k))
        .collect();

    if summaries.is_empty() {
        println!("{}", "  No pages found".yellow());
        return;
    }

    println!(
        "  {:<13} {:<45} {}",
        "Kind".bright_white().bold(),
        "Slug".bright_white().bold(),
        "Label".bright_white().bold()
    );
    println!("  {}", "─".repeat(90).bright_black());

    for summary in &summaries {
        println!(
            "  {:<13} {:<45} {}",
            summary.kind.as_str().bright_black(),
            summary.slug.cyan(),
            summary.label
        );
    }

    println!();
    println!(
        "  Total: {}",
        summaries.len().to_string().bright_white().bold()
    );
}

fn resolve(service: &PageService, slug: &str) -> Result<()> {
    let entry = find(service, slug)?;
    print_entry(entry);
    Ok(())
}

/// Prints title, description and every content block of a page.
fn page(service: &PageService, slug: &str, json: bool) -> Result<()> {
    let entry = find(service, slug)?;
    let page = service.render_entry(entry);

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    println!("{}", page.title.bright_blue().bold());
    println!("{}", page.canonical_url.bright_black());
    println!();
    println!("{}", page.description.italic());

    print_section("Intro", &page.intro);
    print_section("Local", &page.local);

    if !page.faq.is_empty() {
        println!();
        println!("{}", "FAQ".bright_white().bold());
        for item in &page.faq {
            println!("  {} {}", "Q:".cyan(), item.question);
            println!("  {} {}", "A:".green(), item.answer);
        }
    }

    if !page.related.is_empty() {
        println!();
        println!("{}", "Related".bright_white().bold());
        for link in &page.related {
            println!("  {} {}", link.label, link.slug.bright_black());
        }
    }

    Ok(())
}

fn related(service: &PageService, slug: &str, limit: usize) -> Result<()> {
    let links = service
        .related_links(slug, limit)
        .with_context(|| format!("No page for slug '{}'", slug))?;

    println!("{}", "🔗 Related pages".bright_blue().bold());
    println!();

    if links.is_empty() {
        println!("{}", "  No related pages".yellow());
        return Ok(());
    }

    for link in &links {
        println!("  {:<30} {}", link.label.cyan(), link.slug.bright_black());
    }

    Ok(())
}

/// Validates the taxonomy and prints a summary.
fn check(taxonomy: &Taxonomy) -> Result<()> {
    println!("{}", "🔍 Checking taxonomy".bright_blue().bold());
    println!();

    taxonomy.validate().context("Taxonomy is invalid")?;

    println!("  Cities:         {}", taxonomy.cities.len());
    println!("  Niches:         {}", taxonomy.niches.len());
    println!("  Neighborhoods:  {}", taxonomy.neighborhoods.len());
    println!("  Combination cap: {}", taxonomy.combination_cap);
    println!(
        "  Pages:          {}",
        taxonomy.enumerate().len().to_string().bright_white().bold()
    );
    println!();
    println!("{}", "✅ Taxonomy is valid".green().bold());

    Ok(())
}

fn find<'a>(service: &'a PageService, slug: &str) -> Result<&'a PageEntry> {
    service
        .resolve(slug)
        .with_context(|| format!("No page for slug '{}'", slug))
}

fn print_entry(entry: &PageEntry) {
    println!("  Slug:         {}", entry.slug.cyan());
    println!("  Kind:         {}", entry.kind.as_str());
    if let Some(city) = &entry.city {
        println!("  City:         {}", city);
    }
    if let Some(niche) = &entry.niche {
        println!("  Niche:        {}", niche);
    }
    if let Some(neighborhood) = &entry.neighborhood {
        println!("  Neighborhood: {}", neighborhood);
    }
    if let Some(region) = &entry.region {
        println!("  Region:       {}", region.bright_black());
    }
}

fn print_section(title: &str, paragraphs: &[String]) {
    if paragraphs.is_empty() {
        return;
    }
    println!();
    println!("{}", title.bright_white().bold());
    for paragraph in paragraphs {
        println!("  {}", paragraph);
    }
}
