use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use env_logger::{Builder, Env, Target};
use kana_quiz::quiz::{InputMode, QuizMode};
use kana_quiz::{load_settings, run, App, EngineTiming, KanaQuizError, QuizConfiguration, QuizEngine};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    KanaToRomaji,
    RomajiToKana,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum InputArg {
    Choice,
    Typed,
}

#[derive(Parser, Debug)]
#[command(version, about = "Kana quiz and phrase practice in the terminal", long_about = None)]
struct Args {
    /// JSON file with quiz settings
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Quiz direction (overrides the settings file)
    #[arg(short, long, value_enum)]
    mode: Option<ModeArg>,

    /// Answer input style (overrides the settings file)
    #[arg(short, long, value_enum)]
    input: Option<InputArg>,

    /// Seed for a reproducible question order
    #[arg(long)]
    seed: Option<u64>,

    /// How long answer feedback stays on screen, in milliseconds
    #[arg(long, default_value_t = 2000)]
    feedback_ms: u64,

    /// Simulated latency of preparing a question, in milliseconds
    #[arg(long, default_value_t = 100)]
    loading_ms: u64,

    /// Simulated latency of the phrase practice, in milliseconds
    #[arg(long, default_value_t = 1000)]
    practice_ms: u64,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&PathBuf>) -> std::io::Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(path) = log_file {
        builder.target(Target::Pipe(Box::new(File::create(path)?)));
    }
    builder.init();
    Ok(())
}

fn build_config(args: &Args) -> Result<QuizConfiguration, KanaQuizError> {
    let mut config = match &args.settings {
        Some(path) => load_settings(path)?,
        None => QuizConfiguration::default(),
    };
    if let Some(mode) = args.mode {
        config.mode = match mode {
            ModeArg::KanaToRomaji => QuizMode::KanaToRomaji,
            ModeArg::RomajiToKana => QuizMode::RomajiToKana,
        };
    }
    if let Some(input) = args.input {
        config.input_mode = match input {
            InputArg::Choice => InputMode::MultipleChoice,
            InputArg::Typed => InputMode::Typed,
        };
    }
    Ok(config)
}

async fn start(args: Args) -> Result<(), KanaQuizError> {
    let config = build_config(&args)?;
    let timing = EngineTiming {
        feedback_delay: Duration::from_millis(args.feedback_ms),
        loading_delay: Duration::from_millis(args.loading_ms),
    };
    info!("starting with {:?}", config);

    let engine = match args.seed {
        Some(seed) => QuizEngine::with_rng(config, timing, StdRng::seed_from_u64(seed)),
        None => QuizEngine::new(config, timing),
    };
    run(App::new(engine, Duration::from_millis(args.practice_ms))).await
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    if let Err(e) = init_logging(args.log_file.as_ref()) {
        eprintln!("Error opening log file: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = start(args).await {
        eprintln!("Error running kana quiz: {}", e);
        std::process::exit(1);
    }
}
