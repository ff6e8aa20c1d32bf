use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use notequiz::{run_practice, write_question};
use notequiz_core::random::rng_for;
use notequiz_core::{build_question, DifficultyLevel, ProfileTable, Session};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "notequiz", version, about = "Staff-reading practice in the terminal")]
struct Cli {
    /// YAML file with difficulty profiles, replacing the built-in levels
    #[arg(long, global = true)]
    profiles: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Answer questions interactively
    Practice {
        #[arg(short, long, default_value = "beginner")]
        level: DifficultyLevel,

        #[arg(short, long, default_value_t = 10)]
        rounds: u32,

        /// Seed for a reproducible question sequence
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print generated questions without asking them
    Sample {
        #[arg(short, long, default_value = "beginner")]
        level: DifficultyLevel,

        #[arg(short, long, default_value_t = 5)]
        count: u32,

        #[arg(long)]
        seed: Option<u64>,

        /// One JSON object per line
        #[arg(long)]
        json: bool,
    },
    /// List the difficulty levels
    Levels {
        #[arg(long)]
        json: bool,
    },
}

fn load_profiles(path: Option<&PathBuf>) -> Result<ProfileTable> {
    match path {
        Some(path) => {
            let yaml = fs::read_to_string(path)
                .with_context(|| format!("failed to read profiles from '{}'", path.display()))?;
            ProfileTable::from_yaml(&yaml).with_context(|| format!("invalid profiles in '{}'", path.display()))
        }
        None => ProfileTable::builtin().context("built-in profiles are invalid"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let table = load_profiles(cli.profiles.as_ref())?;
    info!(levels = ?table.levels(), "loaded difficulty profiles");
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Practice { level, rounds, seed } => {
            info!(%level, rounds, ?seed, "starting practice session");
            let mut session = Session::new(table, level, rng_for(seed))?;
            let stdin = io::stdin();
            run_practice(&mut session, rounds, &mut stdin.lock(), &mut out)?;
        }
        Command::Sample {
            level,
            count,
            seed,
            json,
        } => {
            let profile = table.get(level)?;
            let mut rng = rng_for(seed);
            for i in 0..count {
                let question = build_question(profile, &mut rng);
                if json {
                    writeln!(out, "{}", serde_json::to_string(&question)?)?;
                } else {
                    if i > 0 {
                        writeln!(out)?;
                    }
                    writeln!(out, "{} (answer: {})", question.id, question.correct_answer)?;
                    write_question(&mut out, &question, true)?;
                }
            }
        }
        Command::Levels { json } => {
            if json {
                let profiles: Vec<_> = table.iter().collect();
                writeln!(out, "{}", serde_json::to_string_pretty(&profiles)?)?;
            } else {
                for profile in table.iter() {
                    let clefs: Vec<&str> = profile.clefs().iter().map(|c| c.name()).collect();
                    let time_limit = profile
                        .time_limit()
                        .map_or_else(|| "none".to_string(), |limit| format!("{} s", limit.as_secs()));
                    writeln!(
                        out,
                        "{:<13} {:<8} clefs: {:<12} accidentals: {:<3} ledger lines: {} time limit: {}",
                        profile.level(),
                        profile.range().to_string(),
                        clefs.join(", "),
                        if profile.allow_accidentals() { "yes" } else { "no" },
                        profile.ledger_lines(),
                        time_limit
                    )?;
                }
            }
        }
    }

    Ok(())
}
