//! Run seeded NPC decisions and report the action distribution.
//!
//! The battle snapshot is frozen: every decision sees the same state, so the
//! output approximates the strategy's action probabilities for that turn.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use battle_core::{ParticipantId, PcgStream};
use clap::Parser;
use console::style;
use runtime::{ActionProvider, AiMemory, DecisionRequest, NpcDecisionProvider};
use serde::Serialize;

use super::describe_action;
use crate::content::{Content, HealthArgs, build_battle};

/// Run seeded decisions for a trainer and print the action distribution
#[derive(Parser)]
pub struct Simulate {
    /// Id of the NPC trainer making decisions
    #[arg(value_name = "TRAINER")]
    trainer: String,

    /// Id of the trainer whose party stands in for the player
    #[arg(short, long, value_name = "TRAINER")]
    against: String,

    /// Number of decisions to run
    #[arg(short = 'n', long, default_value_t = 1000)]
    decisions: u32,

    /// Game seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Battle id mixed into the game seed
    #[arg(long, default_value_t = 0)]
    battle: u64,

    /// Keep AI memory between decisions, as within a single battle
    #[arg(long)]
    carry_memory: bool,

    #[command(flatten)]
    health: HealthArgs,

    /// Data directory (defaults to the bundled `data/`)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Table of actions with counts and shares
    Summary,
    /// Full JSON report
    Json,
}

#[derive(Serialize)]
struct Report {
    trainer: String,
    against: String,
    seed: u64,
    battle: u64,
    decisions: u32,
    memory: AiMemory,
    actions: Vec<ActionCount>,
}

#[derive(Serialize)]
struct ActionCount {
    action: String,
    count: u32,
    share: f64,
}

impl Simulate {
    pub fn execute(self) -> Result<()> {
        let content = Content::load(self.data_dir.clone())?;
        let npc = content.trainer(&self.trainer)?;
        let player = content.trainer(&self.against)?;
        let state = build_battle(npc, player, self.health);

        let provider = NpcDecisionProvider::new(
            content.oracles.clone(),
            content.config.clone(),
            npc.profile.clone(),
        );
        let seed = self.seed.unwrap_or_else(rand::random);
        let mut rng = PcgStream::for_battle(seed, self.battle);
        let mut memory = AiMemory::new();
        let env = content.oracles.as_battle_env();
        let actor = state
            .active(ParticipantId::Opponent)
            .context("NPC has no active combatant")?;

        let mut counts: BTreeMap<String, u32> = BTreeMap::new();
        for _ in 0..self.decisions {
            if !self.carry_memory {
                memory = AiMemory::new();
            }
            let action = provider
                .provide_action(DecisionRequest::new(
                    ParticipantId::Opponent,
                    &state,
                    &mut memory,
                    &mut rng,
                ))
                .context("Decision failed")?;
            *counts.entry(describe_action(&action, actor, &env)).or_default() += 1;
        }

        let mut actions: Vec<ActionCount> = counts
            .into_iter()
            .map(|(action, count)| ActionCount {
                action,
                count,
                share: f64::from(count) / f64::from(self.decisions.max(1)),
            })
            .collect();
        actions.sort_by(|a, b| b.count.cmp(&a.count));

        let report = Report {
            trainer: npc.id.clone(),
            against: player.id.clone(),
            seed,
            battle: self.battle,
            decisions: self.decisions,
            memory,
            actions,
        };

        match self.format {
            OutputFormat::Summary => print_summary(&report, &provider),
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&report)
                    .context("Failed to serialize report to JSON")?;
                println!("{}", json);
            }
        }

        Ok(())
    }
}

fn print_summary(report: &Report, provider: &NpcDecisionProvider) {
    println!(
        "{} {} vs {}",
        style("Matchup:").bold().cyan(),
        report.trainer,
        report.against
    );
    println!(
        "{} {}",
        style("Strategy:").bold().cyan(),
        provider.profile().strategy
    );
    println!(
        "{} {}",
        style("Pipeline:").bold().cyan(),
        provider.pipeline().stage_names().join(" > ")
    );
    println!(
        "{} seed {} battle {}",
        style("Stream:").bold().cyan(),
        report.seed,
        report.battle
    );
    println!();

    println!("{}", style("Actions:").bold().yellow());
    for entry in &report.actions {
        println!(
            "  {:>6}  {:>6.2}%  {}",
            entry.count,
            entry.share * 100.0,
            entry.action
        );
    }
    println!();

    println!("{}", style("AI memory:").bold().yellow());
    println!("  Status moves used: {}", report.memory.status_moves_used);
    println!("  Times healed: {}", report.memory.times_healed);
}
