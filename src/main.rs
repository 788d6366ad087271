//! CLI entry point for folio-rs

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio-rs")]
#[command(version)]
#[command(about = "Content pipeline for an MDX-driven portfolio site", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new portfolio site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new content file
    New {
        /// Content type (pages, projects, blog, android)
        r#type: String,

        /// Title of the new entry
        title: String,

        /// File name slug (defaults to the slugified title)
        #[arg(short, long)]
        slug: Option<String>,

        /// Write a localized variant (`slug.<lang>.mdx`)
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Generate page data for every route
    #[command(alias = "g")]
    Generate,

    /// Clean the public folder
    Clean,

    /// List content of one type, newest first
    List {
        /// Type of content to list (pages, projects, blog, android)
        #[arg(default_value = "blog")]
        r#type: String,

        /// Locale used for titles (defaults to the site language)
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Print one resolved record as JSON
    Show {
        /// Content type (pages, projects, blog, android)
        r#type: String,

        /// Slug to resolve
        slug: String,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio_rs=debug,info"
    } else {
        "folio_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Cannot determine current directory")?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            folio_rs::commands::init::init_site(&target_dir)?;
            println!("Initialized portfolio site in {:?}", target_dir);
        }

        Commands::New {
            r#type,
            title,
            slug,
            lang,
        } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            tracing::info!("Creating new {} with title: {}", r#type, title);
            folio_rs::commands::new::run(&folio, &r#type, &title, slug.as_deref(), lang.as_deref())?;
        }

        Commands::Generate => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            tracing::info!("Generating page data...");
            let count = folio_rs::commands::generate::run_counted(&folio)?;
            println!("Generated {} routes successfully!", count);
        }

        Commands::Clean => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            folio.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type, lang } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            folio_rs::commands::list::run(&folio, &r#type, lang.as_deref())?;
        }

        Commands::Show { r#type, slug } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            folio_rs::commands::show::run(&folio, &r#type, &slug)?;
        }

        Commands::Version => {
            println!("folio-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
