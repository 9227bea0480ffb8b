//! Headless Duel Runner
//!
//! Loads JSON request files, enforces the request-layer ranges the core
//! deliberately does not, and runs loadout validation or a single duel.
//! The winner report echoes the concrete seed so unseeded runs can be
//! replayed.

use chess_arena::core::limits::{ATTRIBUTE_RANGE, HP_RANGE, POOL_RANGE};
use chess_arena::core::{ArenaError, Piece, PieceId, Result};
use chess_arena::duel::{DuelEngine, DuelOutcome};
use chess_arena::loadout::{Loadout, ValidationReport};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Headless duel runner - validate loadouts and resolve seeded duels
#[derive(Parser, Debug)]
#[command(name = "duel_runner")]
#[command(about = "Validate piece loadouts and resolve seeded 1v1 duels")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Output format: json or text
    #[arg(long, default_value = "json", global = true)]
    format: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a loadout request against the role and budget rules
    Validate {
        /// Path to a JSON loadout request
        file: PathBuf,
    },
    /// Resolve a duel request between two non-king pieces
    Duel {
        /// Path to a JSON duel request
        file: PathBuf,

        /// Random seed for deterministic runs (overrides the request's rng_seed)
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Loadout request body
#[derive(Deserialize, Debug)]
struct LoadoutRequest {
    points_pool: i32,
    pieces: Vec<Piece>,
}

/// Duel request body
#[derive(Deserialize, Debug)]
struct DuelRequest {
    a: Piece,
    b: Piece,
    rng_seed: Option<u64>,
}

/// Duel response body
#[derive(Serialize, Debug)]
struct DuelReport {
    winner_id: PieceId,
    details: String,
    seed: u64,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Validate { file } => run_validate(&file, &args.format),
        Command::Duel { file, seed } => run_duel(&file, seed, &args.format),
    }
}

fn run_validate(file: &Path, format: &str) -> Result<()> {
    let request: LoadoutRequest = read_request(file)?;

    if !POOL_RANGE.contains(&request.points_pool) {
        return Err(ArenaError::InvalidRequest(format!(
            "points_pool {} outside {}..={}",
            request.points_pool,
            POOL_RANGE.start(),
            POOL_RANGE.end()
        )));
    }
    if request.pieces.is_empty() {
        return Err(ArenaError::InvalidRequest(
            "loadout must contain at least one piece".into(),
        ));
    }
    for piece in &request.pieces {
        check_piece(piece)?;
    }

    let loadout = Loadout::new(request.points_pool, request.pieces);
    let report = ValidationReport::from(loadout.validate());
    tracing::info!(ok = report.ok, "loadout checked");

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        "text" => {
            println!("{}", if report.ok { "VALID" } else { "INVALID" });
            println!("{}", report.message);
        }
        _ => {
            eprintln!("Unknown format '{}', defaulting to json", format);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

fn run_duel(file: &Path, seed_override: Option<u64>, format: &str) -> Result<()> {
    let request: DuelRequest = read_request(file)?;

    check_piece(&request.a)?;
    check_piece(&request.b)?;
    if request.a.is_king() || request.b.is_king() {
        return Err(ArenaError::InvalidRequest(
            "the king does not fight duels".into(),
        ));
    }

    let mut engine = DuelEngine::new(seed_override.or(request.rng_seed));
    tracing::info!(seed = engine.seed(), a = %request.a.id, b = %request.b.id, "running duel");
    let outcome = DuelOutcome::new(engine.duel(&request.a, &request.b));

    let report = DuelReport {
        winner_id: outcome.winner_id,
        details: outcome.details,
        seed: engine.seed(),
    };

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        "text" => {
            println!("Winner: {}", report.winner_id);
            println!("{}", report.details);
            println!("Seed: {}", report.seed);
        }
        _ => {
            eprintln!("Unknown format '{}', defaulting to json", format);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

/// Range enforcement the core contract pushes onto this layer
fn check_piece(piece: &Piece) -> Result<()> {
    if piece.id.0.is_empty() {
        return Err(ArenaError::InvalidRequest(
            "piece id must not be empty".into(),
        ));
    }
    if !HP_RANGE.contains(&piece.hp) {
        return Err(ArenaError::InvalidRequest(format!(
            "piece {}: hp {} outside {}..={}",
            piece.id,
            piece.hp,
            HP_RANGE.start(),
            HP_RANGE.end()
        )));
    }
    for (name, value) in [("atk", piece.atk), ("def", piece.def), ("spd", piece.spd)] {
        if !ATTRIBUTE_RANGE.contains(&value) {
            return Err(ArenaError::InvalidRequest(format!(
                "piece {}: {} {} outside {}..={}",
                piece.id,
                name,
                value,
                ATTRIBUTE_RANGE.start(),
                ATTRIBUTE_RANGE.end()
            )));
        }
    }
    Ok(())
}

fn read_request<T: serde::de::DeserializeOwned>(file: &Path) -> Result<T> {
    let body = std::fs::read_to_string(file)?;
    Ok(serde_json::from_str(&body)?)
}
