//! Folio CLI
//!
//! Build and validate the portfolio page.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use folio_content::Profile;
use folio_motion::MotionPrefs;
use folio_page::Document;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Static portfolio page generator", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the page to an output directory
    Build {
        /// Optional TOML content file (built-in profile when omitted)
        #[arg(short, long)]
        content: Option<PathBuf>,

        /// Output directory
        #[arg(short, long, default_value = "dist")]
        output: PathBuf,

        /// Generate the page with reduced motion (no slide offsets,
        /// no hover lift)
        #[arg(long)]
        reduced_motion: bool,
    },

    /// Validate content without writing output
    Check {
        /// Optional TOML content file
        #[arg(short, long)]
        content: Option<PathBuf>,
    },

    /// Show a summary of the content that would be rendered
    Info {
        /// Optional TOML content file
        #[arg(short, long)]
        content: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn load_profile(content: Option<&PathBuf>) -> Result<Profile> {
    let profile = match content {
        Some(path) => Profile::load(path)?,
        None => Profile::default_content(),
    };
    Ok(profile)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Build {
            content,
            output,
            reduced_motion,
        } => {
            let profile = load_profile(content.as_ref())?;
            let prefs = if reduced_motion {
                MotionPrefs::reduced()
            } else {
                MotionPrefs::full()
            };
            let path = Document::new(profile, prefs).write_to(&output)?;
            info!(path = %path.display(), "build complete");
        }
        Commands::Check { content } => {
            let profile = load_profile(content.as_ref())?;
            profile.validate()?;
            info!(
                projects = profile.projects.len(),
                badges = profile.identity.badges.len(),
                "content is valid"
            );
        }
        Commands::Info { content } => {
            let profile = load_profile(content.as_ref())?;
            println!("folio {}", env!("CARGO_PKG_VERSION"));
            println!("name:           {}", profile.identity.name);
            println!("role:           {}", profile.identity.role);
            println!("projects:       {}", profile.projects.len());
            println!("skill cards:    {}", profile.skill_cards.len());
            println!("certifications: {}", profile.certifications.len());
            println!("cv:             {}", profile.links.cv);
        }
    }

    Ok(())
}
