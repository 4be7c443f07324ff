//! Print the move weight vector an NPC would draw from.

use std::path::PathBuf;

use anyhow::{Context, Result};
use battle_core::{ParticipantId, StrategyKind};
use clap::Parser;
use console::style;
use runtime::providers::ai::scoring::{WeightProfile, move_weights, normalize};

use crate::content::{Content, HealthArgs, build_battle};

/// Print the move weight vector a trainer would draw from
#[derive(Parser)]
pub struct Weights {
    /// Id of the NPC trainer
    #[arg(value_name = "TRAINER")]
    trainer: String,

    /// Id of the trainer whose party stands in for the player
    #[arg(short, long, value_name = "TRAINER")]
    against: String,

    /// Stat- or condition-affecting moves already used this battle
    #[arg(long, default_value_t = 0)]
    status_used: u32,

    /// Use the wild weighting regardless of the trainer's strategy
    #[arg(long)]
    wild: bool,

    #[command(flatten)]
    health: HealthArgs,

    /// Data directory (defaults to the bundled `data/`)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl Weights {
    pub fn execute(self) -> Result<()> {
        let content = Content::load(self.data_dir)?;
        let npc = content.trainer(&self.trainer)?;
        let player = content.trainer(&self.against)?;
        let state = build_battle(npc, player, self.health);
        let env = content.oracles.as_battle_env();

        let user = state
            .active(ParticipantId::Opponent)
            .context("NPC has no active combatant")?;
        let opponent = state.active(ParticipantId::Player);

        let profile = if self.wild || npc.profile.strategy == StrategyKind::WildPokemon {
            WeightProfile::Wild
        } else {
            WeightProfile::Trainer
        };

        let weights = move_weights(user, opponent, &env, self.status_used, profile);
        let probabilities = normalize(&weights);

        println!(
            "{} {} ({}/{} HP) vs {}",
            style("Weights for").bold().cyan(),
            user.species,
            user.health,
            user.max_health,
            opponent
                .map(|target| target.species.as_str())
                .unwrap_or("nobody")
        );
        println!("{} {:?}", style("Profile:").bold().cyan(), profile);
        println!();

        for (index, slot) in user.moves.iter().enumerate() {
            let name = if slot.is_set() {
                env.move_descriptor(slot.move_id)
                    .map(|descriptor| descriptor.name)
                    .unwrap_or_else(|err| err.to_string())
            } else {
                "(empty)".to_string()
            };
            println!(
                "  [{}] {:<16} PP {:>2}  weight {:>7.4}  p {:>6.2}%",
                index,
                name,
                slot.pp,
                weights[index],
                probabilities[index] * 100.0
            );
        }

        Ok(())
    }
}
