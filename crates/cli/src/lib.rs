use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use guess_game::{Game, GameConfig};
use guess_hints::{ConceptManager, Generation};
use guess_numbers::SeededRandom;
use std::io::{self, Write};
use std::path::PathBuf;

mod play;

fn print_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[derive(Parser)]
#[command(name = "guess")]
#[command(about = "Guess the number, one mathematical hint at a time", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game on stdin/stdout
    Play(PlayArgs),

    /// Print the hints generated for a number
    Hints(HintsArgs),

    /// Check whether a guess keeps a hint true
    Evaluate(EvaluateArgs),
}

#[derive(Args)]
struct PlayArgs {
    /// TOML game config (min, max, max_guesses, seed)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Smallest possible winning number
    #[arg(long, allow_negative_numbers = true)]
    min: Option<i64>,

    /// Largest possible winning number (inclusive)
    #[arg(long, allow_negative_numbers = true)]
    max: Option<i64>,

    /// Guesses allowed before the game is lost
    #[arg(long)]
    max_guesses: Option<u32>,

    /// Seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args)]
struct HintsArgs {
    /// Winning number to describe
    #[arg(allow_negative_numbers = true)]
    number: i64,

    /// List every candidate hint instead of a sampled game pool
    #[arg(long)]
    exhaustive: bool,

    /// Seed for sampled hints
    #[arg(long)]
    seed: Option<u64>,

    /// Output JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct EvaluateArgs {
    /// Guess to check
    #[arg(allow_negative_numbers = true)]
    guess: i64,

    /// Hint text exactly as it was shown
    hint: String,

    /// Output JSON
    #[arg(long)]
    json: bool,
}

pub fn main_entry() -> Result<()> {
    let mut cli = Cli::parse();

    let json_output = match &cli.command {
        Commands::Hints(args) => args.json,
        Commands::Evaluate(args) => args.json,
        Commands::Play(_) => false,
    };
    if json_output {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Play(args) => run_play(args),
        Commands::Hints(args) => run_hints(args),
        Commands::Evaluate(args) => run_evaluate(args),
    }
}

fn resolve_config(args: &PlayArgs) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(min) = args.min {
        config.min = min;
    }
    if let Some(max) = args.max {
        config.max = max;
    }
    if let Some(max_guesses) = args.max_guesses {
        config.max_guesses = max_guesses;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate().context("Invalid game configuration")?;
    Ok(config)
}

fn run_play(args: PlayArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let game = Game::from_config(&config).context("Failed to start game")?;
    log::info!(
        "Starting game in [{}, {}] with {} guesses (seed {})",
        config.min,
        config.max,
        config.max_guesses,
        game.seed()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    play::play(game, &config, stdin.lock(), stdout.lock())
}

fn run_hints(args: HintsArgs) -> Result<()> {
    let mut rng = args
        .seed
        .map_or_else(SeededRandom::from_entropy, SeededRandom::new);
    let generation = if args.exhaustive {
        Generation::Exhaustive
    } else {
        Generation::Sampled
    };
    let hints = ConceptManager::new(args.number)
        .generate_hints(generation, &mut rng)
        .with_context(|| format!("Failed to generate hints for {}", args.number))?;

    if args.json {
        let body = serde_json::json!({
            "number": args.number,
            "seed": rng.seed(),
            "exhaustive": args.exhaustive,
            "hints": hints,
        });
        print_stdout(&serde_json::to_string_pretty(&body)?)
    } else {
        print_stdout(&hints.join("\n"))
    }
}

fn run_evaluate(args: EvaluateArgs) -> Result<()> {
    let manager = ConceptManager::new(args.guess);
    let (_, parsed) = manager.parse_hint(&args.hint)?;
    let feedback = manager.evaluate_guess(args.guess, &args.hint)?;

    if args.json {
        let body = serde_json::json!({
            "guess": args.guess,
            "hint": args.hint,
            "concept": parsed.concept,
            "shape": parsed.shape,
            "feedback": feedback,
        });
        print_stdout(&serde_json::to_string_pretty(&body)?)
    } else {
        print_stdout(feedback.as_str())
    }
}
