//! List the trainer roster of a data directory.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;

use crate::content::Content;

/// List the trainers in a data directory
#[derive(Parser)]
pub struct Trainers {
    /// Data directory (defaults to the bundled `data/`)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Also list each party member's moves
    #[arg(short, long)]
    verbose: bool,
}

impl Trainers {
    pub fn execute(self) -> Result<()> {
        let content = Content::load(self.data_dir)?;
        let env = content.oracles.as_battle_env();

        println!(
            "{}",
            style(format!("=== {} Trainers ===", content.trainers.len()))
                .bold()
                .green()
        );

        for trainer in &content.trainers {
            println!();
            println!(
                "{} {} ({})",
                style(&trainer.id).bold().cyan(),
                trainer.participant.name,
                style(trainer.profile.strategy).yellow()
            );
            if let Some(item) = trainer.profile.healing_item {
                println!(
                    "  Heals with {} up to {} times",
                    item,
                    trainer.profile.max_times_healed_or(&content.config)
                );
            }

            for combatant in &trainer.participant.party {
                println!(
                    "  {} HP {}/{}",
                    combatant.species, combatant.health, combatant.max_health
                );
                if !self.verbose {
                    continue;
                }
                for slot in combatant.moves.iter().filter(|slot| slot.is_set()) {
                    let name = env
                        .move_descriptor(slot.move_id)
                        .map(|descriptor| descriptor.name)
                        .unwrap_or_else(|err| err.to_string());
                    println!("    - {} (PP {})", name, slot.pp);
                }
            }
        }

        Ok(())
    }
}
