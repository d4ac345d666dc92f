//! Main CLI application for the Game of Life board service

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use life_board::{
    config::{CliOverrides, OutputFormat, Settings},
    game_of_life::{
        create_example_patterns, load_description_from_json, load_pattern_from_file, Board,
        BoardDescription, BoardId,
    },
    service::{BoardService, FileStore, RandomIdGenerator},
    utils::{BoardFormatter, ColorOutput},
    ServiceError,
};
use log::debug;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "life_board")]
#[command(about = "Game of Life board service")]
#[command(version = "0.1.0")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, default_value = "config/default.yaml")]
    config: PathBuf,

    /// Board storage directory (overrides config)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Output format (overrides config)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Largest viewport area drawn as a grid (overrides config)
    #[arg(long, global = true)]
    max_render_cells: Option<u64>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a new board and print its id
    Upload {
        /// Pattern file ('0'/'1' rows)
        #[arg(short, long, conflicts_with = "board", required_unless_present = "board")]
        pattern: Option<PathBuf>,

        /// JSON board description with width, height and live_cells
        #[arg(short, long)]
        board: Option<PathBuf>,

        /// Board width (overrides the input)
        #[arg(long)]
        width: Option<usize>,

        /// Board height (overrides the input)
        #[arg(long)]
        height: Option<usize>,
    },

    /// Show the stored board without advancing it
    Show { id: BoardId },

    /// Advance a board one generation
    Next { id: BoardId },

    /// Advance a board a number of generations
    Advance { id: BoardId, generations: u64 },

    /// Advance a board until it stops changing
    Final {
        id: BoardId,

        /// Iteration budget (overrides config)
        #[arg(short, long)]
        max_iterations: Option<usize>,
    },

    /// Create a default configuration and example patterns
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

/// Which state of a stored board to produce
#[derive(Debug, Clone, Copy)]
enum Request {
    Current,
    Next,
    Advance(u64),
    Final,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let max_iterations = match cli.command {
        Commands::Final { max_iterations, .. } => max_iterations,
        _ => None,
    };
    let settings = load_settings(
        &cli.config,
        &CliOverrides {
            max_iterations,
            storage_dir: cli.store.clone(),
            format: cli.format,
            max_render_cells: cli.max_render_cells,
            verbose: cli.verbose,
        },
    )?;

    simple_logger::init_with_level(settings.logging.level.to_level())
        .context("Failed to initialise logging")?;

    match cli.command {
        Commands::Upload { pattern, board, width, height } => {
            let id = upload_command(&settings, pattern, board, width, height)?;
            println!("{}", id);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Show { id } => board_command(&settings, id, Request::Current),
        Commands::Next { id } => board_command(&settings, id, Request::Next),
        Commands::Advance { id, generations } => {
            board_command(&settings, id, Request::Advance(generations))
        }
        Commands::Final { id, .. } => board_command(&settings, id, Request::Final),
        Commands::Setup { directory, force } => {
            setup_command(directory, force)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_settings(config_path: &Path, overrides: &CliOverrides) -> Result<Settings> {
    let mut settings = if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        if overrides.verbose {
            eprintln!("{}", ColorOutput::warning(&format!(
                "Config file {} not found, using defaults", config_path.display()
            )));
        }
        Settings::default()
    };

    settings.merge_with_cli(overrides);
    settings.validate()
        .context("Configuration validation failed")?;

    Ok(settings)
}

fn open_service(settings: &Settings) -> BoardService<FileStore, RandomIdGenerator> {
    BoardService::new(FileStore::new(&settings.storage.directory), RandomIdGenerator)
        .with_max_iterations(settings.simulation.max_iterations)
}

fn upload_command(
    settings: &Settings,
    pattern: Option<PathBuf>,
    board: Option<PathBuf>,
    width: Option<usize>,
    height: Option<usize>,
) -> Result<BoardId> {
    let mut description: BoardDescription = match (pattern, board) {
        (Some(path), _) => load_pattern_from_file(&path)?,
        (None, Some(path)) => load_description_from_json(&path)?,
        (None, None) => anyhow::bail!("Either a pattern file or a board description is required"),
    };

    if let Some(width) = width {
        description.width = width;
    }
    if let Some(height) = height {
        description.height = height;
    }

    let id = open_service(settings).upload(description)
        .context("Failed to upload board")?;

    Ok(id)
}

fn run_request(settings: &Settings, id: BoardId, request: Request) -> Result<Option<Board>, ServiceError> {
    let mut service = open_service(settings);
    let start_time = Instant::now();

    let board = match request {
        Request::Current => service.current(id),
        Request::Next => service.next(id),
        Request::Advance(generations) => service.advance(id, generations),
        Request::Final => service.final_state(id),
    }?;

    debug!("{:?} for board {} took {:.3}s", request, id, start_time.elapsed().as_secs_f64());
    Ok(board)
}

fn not_stable_message(id: BoardId, err: &ServiceError) -> String {
    format!("Board {} has no final state: {}", id, err)
}

fn board_command(settings: &Settings, id: BoardId, request: Request) -> Result<ExitCode> {
    match run_request(settings, id, request) {
        Ok(Some(board)) => {
            let rendered = BoardFormatter::render(&board, settings.output.format, settings.output.max_render_cells)?;
            println!("{}", rendered);
            Ok(ExitCode::SUCCESS)
        }
        Ok(None) => {
            eprintln!("{}", ColorOutput::warning(&format!("No content: board {} not found", id)));
            Ok(ExitCode::SUCCESS)
        }
        Err(err) if err.is_not_stable() => {
            eprintln!("{}", ColorOutput::error(&not_stable_message(id, &err)));
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(anyhow::Error::new(err)
            .context(format!("Failed to compute {:?} state of board {}", request, id))),
    }
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let pattern_dir = directory.join("patterns");
    let store_dir = directory.join("data/boards");

    for dir in [&config_dir, &pattern_dir, &store_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        let mut settings = Settings::default();
        settings.storage.directory = store_dir.clone();
        settings.to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_patterns(&pattern_dir)
        .context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", pattern_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Upload a pattern: life_board upload --pattern {}", pattern_dir.join("glider.txt").display());
    println!("2. Advance it: life_board advance <id> 8");
    println!("3. Find where it settles: life_board final <id>");

    Ok(())
}
