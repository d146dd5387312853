//! Command-line browser for the ZooConnect experience catalog.
//!
//! Loads the catalog (embedded, or a JSON file named by the config or
//! `--catalog`), then validates, lists, filters or shows experiences.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::debug;

use zooconnect::browse::{Listing, list};
use zooconnect::catalog::Catalog;
use zooconnect::core::filter::{DurationBounds, FilterOptions};
use zooconnect::core::query::bind_query;
use zooconnect::core::summary::ResultSummary;
use zooconnect::core::types::{Continent, VolunteerTask, WildlifeType};
use zooconnect::exit_codes;
use zooconnect::experience::Experience;
use zooconnect::io::catalog_store::load_catalog_or_default;
use zooconnect::io::config::{DEFAULT_CONFIG_FILE, load_config};
use zooconnect::logging;

#[derive(Parser)]
#[command(
    name = "zooconnect",
    version,
    about = "Browse and filter wildlife volunteering experiences"
)]
struct Cli {
    /// Site config file (TOML). Missing file means defaults.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Catalog JSON file. Overrides `catalog_path` from the config.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check the catalog against the schema and invariants (unique ids, week bounds, etc.).
    Validate,
    /// List experiences matching the given filters.
    List(ListArgs),
    /// Print one experience by id.
    Show {
        id: String,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// List featured experiences.
    Featured {
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug, Default)]
struct ListArgs {
    /// Navigation query string (`continent=...&wildlifeType=...&search=...`).
    /// Flags below narrow the result further.
    #[arg(long)]
    query: Option<String>,

    #[arg(long = "continent", value_name = "CONTINENT")]
    continents: Vec<Continent>,

    #[arg(long = "country", value_name = "COUNTRY")]
    countries: Vec<String>,

    #[arg(long = "wildlife", value_name = "TYPE")]
    wildlife_types: Vec<WildlifeType>,

    #[arg(long = "task", value_name = "TASK")]
    volunteer_tasks: Vec<VolunteerTask>,

    #[arg(long)]
    min_weeks: Option<u32>,

    #[arg(long)]
    max_weeks: Option<u32>,

    /// Only beginner-friendly experiences (three requirements or fewer).
    #[arg(long)]
    accessible: bool,

    /// Emit JSON instead of text.
    #[arg(long)]
    json: bool,
}

impl ListArgs {
    /// Merge the query binding with explicit flags.
    fn to_options(&self) -> (FilterOptions, Option<String>) {
        let binding = bind_query(self.query.as_deref().unwrap_or_default());
        let mut options = binding.options;
        extend_unique(&mut options.continent, &self.continents);
        extend_unique(&mut options.country, &self.countries);
        extend_unique(&mut options.wildlife_types, &self.wildlife_types);
        extend_unique(&mut options.volunteer_tasks, &self.volunteer_tasks);
        if self.min_weeks.is_some() || self.max_weeks.is_some() {
            options.duration = Some(DurationBounds {
                min: self.min_weeks,
                max: self.max_weeks,
            });
        }
        options.accessible = self.accessible;
        (options, binding.search)
    }
}

fn extend_unique<T: Clone + PartialEq>(target: &mut Vec<T>, extra: &[T]) {
    for value in extra {
        if !target.contains(value) {
            target.push(value.clone());
        }
    }
}

fn main() {
    logging::init("warn");
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let catalog = open_catalog(&cli.config, cli.catalog.as_deref())?;
    match cli.command {
        Command::Validate => cmd_validate(&catalog),
        Command::List(args) => cmd_list(&catalog, &args),
        Command::Show { id, json } => cmd_show(&catalog, &id, json),
        Command::Featured { json } => cmd_featured(&catalog, json),
    }
}

fn open_catalog(config_path: &Path, catalog_override: Option<&Path>) -> Result<Catalog> {
    let config = load_config(config_path)?;
    let path = catalog_override.or(config.catalog_path.as_deref());
    debug!(catalog = ?path, "opening catalog");
    load_catalog_or_default(path)
}

fn cmd_validate(catalog: &Catalog) -> Result<i32> {
    let summary = ResultSummary::of(catalog.all());
    println!(
        "ok: {} experiences across {} continents",
        summary.total,
        summary.continent_count()
    );
    Ok(exit_codes::OK)
}

fn cmd_list(catalog: &Catalog, args: &ListArgs) -> Result<i32> {
    let (options, search) = args.to_options();
    let listing = list(catalog, options, search);
    if args.json {
        print_json(&listing)?;
    } else {
        print_listing(&listing);
    }
    Ok(exit_codes::OK)
}

fn cmd_show(catalog: &Catalog, id: &str, json: bool) -> Result<i32> {
    let Some(experience) = catalog.get(id) else {
        eprintln!("experience not found: {}", id);
        return Ok(exit_codes::NOT_FOUND);
    };
    if json {
        print_json(experience)?;
    } else {
        print_experience(experience);
    }
    Ok(exit_codes::OK)
}

fn cmd_featured(catalog: &Catalog, json: bool) -> Result<i32> {
    let featured = catalog.featured();
    if json {
        print_json(&featured)?;
    } else {
        for experience in featured {
            println!("{}", row(experience));
        }
    }
    Ok(exit_codes::OK)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value).context("serialize json")?;
    println!("{}", payload);
    Ok(())
}

fn print_listing(listing: &Listing<'_>) {
    println!(
        "Found {} experiences across {} continents",
        listing.summary.total,
        listing.summary.continent_count()
    );
    for experience in &listing.experiences {
        println!("{}", row(experience));
    }
}

fn row(experience: &Experience) -> String {
    format!(
        "{}\t{}\t{}, {}\t{}",
        experience.id,
        experience.title,
        experience.location.city,
        experience.location.country,
        experience.duration.label()
    )
}

fn print_experience(experience: &Experience) {
    println!("{}", experience.title);
    println!(
        "{}, {} ({})",
        experience.location.city, experience.location.country, experience.location.continent
    );
    println!(
        "{} ({} reviews) | {} | {} {} / {}",
        experience.rating,
        experience.reviews_count,
        experience.duration.label(),
        experience.pricing.amount,
        experience.pricing.currency,
        experience.pricing.period
    );
    println!();
    println!("{}", experience.overview);
    println!();
    println!("Wildlife: {}", join(&experience.wildlife_types));
    println!("Tasks: {}", join(&experience.volunteer_tasks));
    if !experience.requirements.is_empty() {
        println!("Requirements:");
        for requirement in &experience.requirements {
            println!("- {}", requirement);
        }
    }
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
