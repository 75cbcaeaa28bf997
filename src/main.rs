use std::path::Path;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use validator::Validate;

use sw_playground::{
    app_state::AppState,
    config::Config,
    constants::report_text::{NO_ATTEMPTS_NOTICE, NO_PRACTICE_NOTICE, NO_REPORT_PREVIEW},
    errors::{AppError, AppResult},
    models::{
        domain::{roadmap, QuestionKind, ReportFormat},
        dto::request::{FixedWindowRequest, SubmitFixRequest, Submission},
    },
    services::{
        attempt_recorder::AttemptRecorder, practice_generator::PracticeGenerator,
        report_formatter::ReportFormatter, window_simulator,
    },
    utils::time::now_millis,
};

#[derive(Parser)]
#[command(name = "sw-playground")]
#[command(about = "Sliding window playground: debug quiz, reports and practice sets")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the debug quiz questions
    Questions,

    /// Answer one quiz question
    Answer {
        /// Question id, e.g. q1
        id: String,

        /// Zero-based option index for multiple-choice questions
        #[arg(long, conflicts_with = "fix")]
        option: Option<usize>,

        /// Corrected code for free-text questions
        #[arg(long)]
        fix: Option<String>,
    },

    /// Show every recorded attempt
    Attempts,

    /// Short report summary
    Preview,

    /// Export the full debugging report
    Report {
        /// md or plain
        #[arg(short, long, default_value = "md")]
        format: ReportFormat,

        /// Print instead of writing a file
        #[arg(long)]
        stdout: bool,
    },

    /// Erase the attempt history
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    /// Generate, show or export practice problems
    Practice {
        #[command(subcommand)]
        action: PracticeAction,
    },

    /// Run a sliding window simulation
    Simulate {
        #[command(subcommand)]
        mode: SimulateMode,
    },

    /// Practice checklist with progress
    Roadmap {
        /// Ids already solved, comma separated
        #[arg(long, value_delimiter = ',')]
        done: Vec<u32>,
    },
}

#[derive(Subcommand)]
enum PracticeAction {
    Generate {
        #[arg(short, long)]
        count: Option<usize>,

        /// Seed for a reproducible set
        #[arg(long)]
        seed: Option<u64>,
    },
    Show,
    Export {
        /// Include reference answers
        #[arg(long)]
        answers: bool,

        #[arg(long)]
        stdout: bool,
    },
}

#[derive(Subcommand)]
enum SimulateMode {
    /// Fixed-size window sums
    Fixed {
        #[arg(long)]
        array: Option<String>,
        #[arg(short, long)]
        k: Option<usize>,
        /// classic, peaks or random
        #[arg(long, default_value = "classic")]
        preset: String,
    },
    /// Narrated step-through of the fixed window
    Walkthrough {
        #[arg(long)]
        array: Option<String>,
        #[arg(short, long)]
        k: Option<usize>,
        #[arg(long, default_value = "classic")]
        preset: String,
    },
    /// Longest substring without repeating characters
    Variable {
        #[arg(long)]
        text: Option<String>,
        #[arg(long, default_value = "classic")]
        preset: String,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli, config).await {
        log::error!("{} ({})", err, err.error_code());
        eprintln!("{}", err);
        std::process::exit(if err.is_user_error() { 2 } else { 1 });
    }
}

async fn run(cli: Cli, config: Config) -> AppResult<()> {
    let state = AppState::new(config)?;

    match cli.command {
        Commands::Questions => list_questions(&state),
        Commands::Answer { id, option, fix } => answer(&state, &id, option, fix).await?,
        Commands::Attempts => {
            let attempts = state.attempts.load().await;
            if attempts.is_empty() {
                println!("{}", NO_ATTEMPTS_NOTICE);
            } else {
                print!("{}", ReportFormatter::attempt_listing(&attempts));
            }
        }
        Commands::Preview => print_preview(&state).await,
        Commands::Report { format, stdout } => export_report(&state, format, stdout).await,
        Commands::Clear { yes } => {
            if !yes {
                println!("Clear debug history? Re-run with --yes to confirm.");
                return Ok(());
            }
            state.attempts.clear().await?;
            println!("Debug history cleared.");
        }
        Commands::Practice { action } => practice(&state, action).await?,
        Commands::Simulate { mode } => simulate(mode)?,
        Commands::Roadmap { done } => {
            for item in roadmap::ROADMAP {
                let mark = if done.contains(&item.id) { "x" } else { " " };
                println!(
                    "[{}] {}. {} ({}) - {}",
                    mark, item.id, item.name, item.pattern, item.link
                );
            }
            println!("Progress: {}%", roadmap::progress_percent(roadmap::ROADMAP, &done));
        }
    }

    Ok(())
}

fn list_questions(state: &AppState) {
    for (i, question) in state.catalog.questions().iter().enumerate() {
        println!("{}. [{}] {} ({} pts)", i + 1, question.id, question.title, question.points);
        println!("{}", question.snippet);
        for (index, option) in question.options().iter().enumerate() {
            println!("  [{}] {}", index, option);
        }
        if let QuestionKind::FreeTextFix { prompt, .. } = &question.kind {
            println!("  {}", prompt);
        }
        println!();
    }
}

async fn answer(
    state: &AppState,
    id: &str,
    option: Option<usize>,
    fix: Option<String>,
) -> AppResult<()> {
    let question = state.catalog.get(id)?.clone();

    let submission = match (option, fix) {
        (Some(index), _) => {
            let (option_text, correct) = question.choose_option(index).ok_or_else(|| {
                AppError::ValidationError(format!(
                    "Question '{}' has no option {}",
                    id, index
                ))
            })?;
            Submission::Choice { option_text, correct }
        }
        (None, Some(raw)) => {
            let request = SubmitFixRequest::new(id, &raw);
            request.validate()?;
            request.into_submission().1
        }
        (None, None) => {
            return Err(AppError::ValidationError(
                "Pass --option N or --fix TEXT".to_string(),
            ))
        }
    };

    let record = state.recorder.record(id, submission.clone()).await?;
    println!(
        "{}",
        AttemptRecorder::feedback(&question, &submission, record.correct)
    );
    println!();
    print_preview(state).await;
    Ok(())
}

async fn print_preview(state: &AppState) {
    match state.aggregator.summarize().await {
        Some(summary) => print!("{}", ReportFormatter::preview(&summary)),
        None => println!("{}", NO_REPORT_PREVIEW),
    }
}

async fn export_report(state: &AppState, format: ReportFormat, stdout: bool) {
    let Some(summary) = state.aggregator.summarize().await else {
        println!("{}", NO_ATTEMPTS_NOTICE);
        return;
    };

    let export = ReportFormatter::export(&summary, format);
    if stdout {
        print!("{}", export.content);
        return;
    }

    save_export(&state.config.export_dir, &export.filename, &export.content).await;
}

/// Saving is best effort: a failure is reported and the command still
/// succeeds.
async fn save_export(dir: &Path, filename: &str, content: &str) {
    let path = dir.join(filename);
    let result = async {
        tokio::fs::create_dir_all(dir).await?;
        tokio::fs::write(&path, content).await
    }
    .await;

    match result {
        Ok(()) => println!("Saved {}", path.display()),
        Err(err) => {
            log::warn!("Export to {} failed: {}", path.display(), err);
            println!("Could not save {}: {}", path.display(), err);
        }
    }
}

async fn practice(state: &AppState, action: PracticeAction) -> AppResult<()> {
    match action {
        PracticeAction::Generate { count, seed } => {
            let count = count.or(Some(state.config.practice_count));
            let problems = match seed {
                Some(seed) => PracticeGenerator::generate_seeded(count, seed),
                None => PracticeGenerator::generate(count, &mut StdRng::from_entropy()),
            };
            state.practice.save(&problems).await?;
            print!("{}", PracticeGenerator::render_text(&problems, false)?);
        }
        PracticeAction::Show => match state.practice.load().await {
            Some(problems) if !problems.is_empty() => {
                print!("{}", PracticeGenerator::render_text(&problems, false)?)
            }
            _ => println!("{}", NO_PRACTICE_NOTICE),
        },
        PracticeAction::Export { answers, stdout } => {
            let Some(problems) = state.practice.load().await else {
                println!("{}", NO_PRACTICE_NOTICE);
                return Ok(());
            };
            let content = PracticeGenerator::render_text(&problems, answers)?;
            if stdout {
                print!("{}", content);
            } else {
                let filename = PracticeGenerator::filename(&now_millis());
                save_export(&state.config.export_dir, &filename, &content).await;
            }
        }
    }
    Ok(())
}

fn simulate(mode: SimulateMode) -> AppResult<()> {
    let mut rng = StdRng::from_entropy();

    match mode {
        SimulateMode::Fixed { array, k, preset } => {
            let request = window_request(array, k, &preset, &mut rng)?;
            for (i, frame) in window_simulator::fixed_window_sums(&request.array, request.k)?
                .iter()
                .enumerate()
            {
                let items: Vec<String> = frame.window.iter().map(|v| v.to_string()).collect();
                println!("Window {}: [{}] → Sum = {}", i + 1, items.join(", "), frame.sum);
            }
        }
        SimulateMode::Walkthrough { array, k, preset } => {
            let request = window_request(array, k, &preset, &mut rng)?;
            for step in window_simulator::walkthrough(&request.array, request.k)? {
                let cells: Vec<String> = request
                    .array
                    .iter()
                    .enumerate()
                    .map(|(i, v)| {
                        if step.in_window(i, request.k) {
                            format!("[{}]", v)
                        } else {
                            format!(" {} ", v)
                        }
                    })
                    .collect();
                println!("{}  {}", cells.join(""), step.text);
            }
        }
        SimulateMode::Variable { text, preset } => {
            let text =
                text.unwrap_or_else(|| window_simulator::Preset::by_name(&preset, &mut rng).text);
            for (i, frame) in window_simulator::longest_unique_steps(&text)
                .iter()
                .enumerate()
            {
                println!("Step {}: \"{}\" (len {})", i + 1, frame.window, frame.len);
            }
            println!(
                "Longest unique substring length: {}",
                window_simulator::longest_unique_len(&text)
            );
        }
    }

    Ok(())
}

fn window_request(
    array: Option<String>,
    k: Option<usize>,
    preset: &str,
    rng: &mut StdRng,
) -> AppResult<FixedWindowRequest> {
    let preset = window_simulator::Preset::by_name(preset, rng);
    let request = FixedWindowRequest {
        array: array
            .map(|raw| window_simulator::parse_array_input(&raw))
            .unwrap_or(preset.array),
        k: k.unwrap_or(preset.k),
    };
    request.validate()?;
    Ok(request)
}
