//! CLI frontend for the Orrery astronomy quiz.

mod commands;
mod tui;

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Mutex;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use orrery_quiz::Mode;

#[derive(Parser)]
#[command(
    name = "orrery",
    about = "Orrery: guess sizes and names of planets, moons, and nebulae",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play comparison mode: pick the bigger of two bodies
    Compare {
        /// Catalog file
        #[arg(short, long, default_value = "objects.json")]
        catalog: PathBuf,

        /// RNG seed for a reproducible game (default: random)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Play identification mode: name the body from three options
    Identify {
        /// Catalog file
        #[arg(short, long, default_value = "objects.json")]
        catalog: PathBuf,

        /// RNG seed for a reproducible game (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Progress file for the success counter (default: user data directory)
        #[arg(long)]
        store: Option<PathBuf>,
    },

    /// Check catalog records and report errors and warnings
    Validate {
        /// Catalog file
        #[arg(short, long, default_value = "objects.json")]
        catalog: PathBuf,

        /// Also check that texture files exist in this directory
        #[arg(short, long)]
        textures: Option<PathBuf>,
    },

    /// List bodies in the catalog
    List {
        /// Catalog file
        #[arg(short, long, default_value = "objects.json")]
        catalog: PathBuf,

        /// Filter by type (planet, moon, nebula, galaxy, star_cluster, star)
        #[arg(short, long)]
        kind: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Append a body to the catalog
    Add {
        /// Body name
        name: String,

        /// Diameter in kilometers
        #[arg(long)]
        size: f64,

        /// Display color as hex (#RRGGBB, 0xRRGGBB, or RRGGBB)
        #[arg(long)]
        color: String,

        /// Texture file name inside the textures directory
        #[arg(long)]
        texture: Option<String>,

        /// Body type
        #[arg(short, long)]
        kind: Option<String>,

        /// How the body is drawn (sphere, flat, billboard)
        #[arg(long)]
        render_mode: Option<String>,

        /// Body this one orbits (moons only)
        #[arg(long)]
        parent: Option<String>,

        /// The body gives off its own light
        #[arg(long)]
        emissive: bool,

        /// Catalog file
        #[arg(short, long, default_value = "objects.json")]
        catalog: PathBuf,
    },

    /// Drop bodies whose texture file is missing
    Prune {
        /// Catalog file
        #[arg(short, long, default_value = "objects.json")]
        catalog: PathBuf,

        /// Textures directory
        #[arg(short, long, default_value = "textures")]
        textures: PathBuf,
    },

    /// Show or reset the identification success counter
    Score {
        /// Progress file (default: user data directory)
        #[arg(long)]
        store: Option<PathBuf>,

        /// Reset the counter to zero
        #[arg(long)]
        reset: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.quiet, cli.verbose, cli.log_file.as_deref()) {
        eprintln!("error: {e}");
        process::exit(1);
    }

    let result = match cli.command {
        Commands::Compare { catalog, seed } => {
            commands::play::run(Mode::Comparison, &catalog, seed, None)
        }
        Commands::Identify {
            catalog,
            seed,
            store,
        } => commands::play::run(Mode::Identification, &catalog, seed, store.as_deref()),
        Commands::Validate { catalog, textures } => {
            commands::validate::run(&catalog, textures.as_deref())
        }
        Commands::List {
            catalog,
            kind,
            json,
        } => commands::list::run(&catalog, kind.as_deref(), json),
        Commands::Add {
            name,
            size,
            color,
            texture,
            kind,
            render_mode,
            parent,
            emissive,
            catalog,
        } => commands::add::run(
            &catalog,
            commands::add::NewBody {
                name,
                size,
                color,
                texture,
                kind,
                render_mode,
                parent,
                emissive,
            },
        ),
        Commands::Prune { catalog, textures } => commands::prune::run(&catalog, &textures),
        Commands::Score { store, reset } => commands::score::run(store.as_deref(), reset),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn init_tracing(quiet: bool, verbose: bool, log_file: Option<&Path>) -> Result<(), String> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_env("ORRERY_LOG").unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = match log_file {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| format!("cannot open log file {}: {e}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    result.map_err(|e| format!("failed to initialize tracing subscriber: {e}"))
}
