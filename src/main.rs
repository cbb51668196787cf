//! Wordle Helper - CLI
//!
//! Console prompt loop, terminal UI, one-shot suggestions and a JSON-lines
//! adapter, all backed by the same filtering and scoring engine.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_helper::{
    commands::{SuggestRequest, run_serve, run_simple, run_suggest},
    config::{DEFAULT_DATA_DIR, SolverConfig},
    solver::Solver,
};

#[derive(Parser)]
#[command(
    name = "wordle_helper",
    about = "Wordle helper: filters candidate words from feedback and ranks them by letter frequency",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding pos1.txt .. pos5.txt
    #[arg(short, long, global = true, env = "WORDLE_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Word list file (default: <data-dir>/words.txt)
    #[arg(short = 'w', long, global = true, env = "WORDLE_WORDS")]
    words: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Console prompt loop (default)
    Simple,

    /// Full-screen terminal UI
    Play,

    /// Apply one round of feedback and print candidates and suggestions
    Suggest {
        /// The guessed word
        #[arg(short, long)]
        guess: String,

        /// Green feedback, dots for unknown positions (e.g. 'S..NT')
        #[arg(long)]
        greens: String,

        /// Yellow feedback, dots for other positions (e.g. '.A...')
        #[arg(long, default_value = ".....")]
        yellows: String,

        /// Grey letters, separate values or one space-separated string
        #[arg(long, num_args = 0..)]
        greys: Vec<String>,

        /// Print the JSON response instead of text
        #[arg(long)]
        json: bool,
    },

    /// Answer JSON-lines requests on stdin
    Serve,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = SolverConfig::new(cli.data_dir, cli.words);
    let solver = Solver::load(&config).with_context(|| {
        format!(
            "Failed to load solver data from {}",
            config.frequency_dir().display()
        )
    })?;
    log::info!(
        "Loaded {} words from {}",
        solver.dictionary().len(),
        config.words_file().display()
    );

    // Default to the console loop if no command given
    let command = cli.command.unwrap_or(Commands::Simple);

    match command {
        Commands::Simple => run_simple(&solver).map(|_| ()),
        Commands::Play => run_play_command(&solver),
        Commands::Suggest {
            guess,
            greens,
            yellows,
            greys,
            json,
        } => {
            let request = SuggestRequest {
                guess,
                greens,
                yellows,
                greys,
            };
            run_suggest(&solver, &request, json)
        }
        Commands::Serve => {
            let stdin = io::stdin();
            run_serve(&solver, stdin.lock(), io::stdout().lock())
        }
    }
}

fn run_play_command(solver: &Solver) -> Result<()> {
    use wordle_helper::interactive::{App, run_tui};

    let app = App::new(solver);
    run_tui(app)
}
