use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use chess_mentor::agent::Agent;
use chess_mentor::config::AppConfig;
use chess_mentor::env::{
    french_defense, italian_game, ruy_lopez, sicilian_defense, Environment, ScriptedEnvironment,
};
use chess_mentor::learning::ConflictPolicy;

/// Teach a student agent a recorded opening line through memory transfer.
#[derive(Parser)]
#[command(name = "chess-mentor", about = "Teacher/student memory transfer demo")]
struct Cli {
    /// Opening line to replay: ruy-lopez, italian, sicilian, or french
    #[arg(long, default_value = "ruy-lopez")]
    opening: String,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the transfer conflict policy: overwrite or keep-best
    #[arg(long)]
    policy: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(policy) = &cli.policy {
        config.transfer.conflict_policy = policy
            .parse::<ConflictPolicy>()
            .map_err(anyhow::Error::msg)?;
    }

    let line = match cli.opening.as_str() {
        "ruy-lopez" => ruy_lopez(),
        "italian" => italian_game(),
        "sicilian" => sicilian_defense(),
        "french" => french_defense(),
        other => bail!(
            "unknown opening '{}' (expected 'ruy-lopez', 'italian', 'sicilian', or 'french')",
            other
        ),
    };
    let mut env = ScriptedEnvironment::new(line);
    println!("Replaying line: {}", env.line_name());
    let mut teacher = Agent::with_config("Teacher", config.demo.teacher_skill_level, config.memory);
    let mut student = Agent::with_config("Student", config.demo.student_skill_level, config.memory);

    // Walk the environment, collecting the game as explicit sequences.
    let mut positions = Vec::new();
    let mut moves = Vec::new();
    let mut evaluations = Vec::new();
    while let Some(advice) = env.best_move() {
        positions.push(env.board_state());
        if !env.make_move(&advice.mv) {
            bail!("environment rejected its own advice '{}'", advice.mv);
        }
        moves.push(advice.mv);
        evaluations.push(advice.evaluation);
    }

    let summary = teacher.learn_from_game(&positions, &moves, &evaluations)?;
    println!(
        "Teacher learned {} positions ({} unique, mean evaluation {:.2})",
        summary.positions_seen, summary.unique_positions, summary.mean_evaluation
    );

    let report = teacher.transfer_memories_with(&mut student, config.transfer.conflict_policy)?;
    println!(
        "Transferred {} records ({} conflicts, policy {})",
        report.copied, report.conflicts, config.transfer.conflict_policy
    );

    let mut correct = 0;
    for (position, expected) in positions.iter().zip(&moves) {
        let recalled = student.get_move_from_memory(position);
        if recalled.map(|mv| mv.as_str()) == Some(expected.as_str()) {
            correct += 1;
        }
    }
    println!("Student recall: {}/{} positions", correct, positions.len());

    for agent in [&teacher, &student] {
        let stats = agent.get_stats();
        println!(
            "{} (skill {}): {} positions in memory, {} games learned, {} lessons given",
            stats.name,
            stats.skill_level,
            stats.positions_stored,
            stats.games_learned,
            stats.lessons_given
        );
    }

    Ok(())
}
