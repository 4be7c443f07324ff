//! Content loading shared by every command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use battle_content::{ContentFactory, TrainerDefinition};
use battle_core::{BattleConfig, BattleState, Participant};
use runtime::OracleManager;

/// Bundled data directory of the workspace.
pub fn default_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("data")
}

/// Everything loaded from one data directory.
pub struct Content {
    pub config: BattleConfig,
    pub oracles: OracleManager,
    pub trainers: Vec<TrainerDefinition>,
}

impl Content {
    pub fn load(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.unwrap_or_else(default_data_dir);
        let factory = ContentFactory::new(&data_dir);

        let config = factory
            .load_config()
            .with_context(|| format!("Failed to load config from {}", data_dir.display()))?;
        let oracles = OracleManager::from_content(&factory)
            .with_context(|| format!("Failed to load registries from {}", data_dir.display()))?;
        let trainers = factory
            .load_trainers(oracles.moves())
            .with_context(|| format!("Failed to load trainers from {}", data_dir.display()))?;

        tracing::debug!(
            "Loaded {} trainers from {}",
            trainers.len(),
            data_dir.display()
        );

        Ok(Self {
            config,
            oracles,
            trainers,
        })
    }

    pub fn trainer(&self, id: &str) -> Result<&TrainerDefinition> {
        self.trainers.iter().find(|t| t.id == id).with_context(|| {
            let known: Vec<_> = self.trainers.iter().map(|t| t.id.as_str()).collect();
            format!("Unknown trainer '{}' (known: {})", id, known.join(", "))
        })
    }
}

/// Health overrides applied to both active combatants before deciding.
#[derive(Clone, Copy, Debug, Default, clap::Args)]
pub struct HealthArgs {
    /// Health of the NPC's active combatant
    #[arg(long, value_name = "HP")]
    pub npc_health: Option<u16>,

    /// Health of the opposing active combatant
    #[arg(long, value_name = "HP")]
    pub player_health: Option<u16>,
}

/// Battle with `npc` on the opponent side, health overrides applied.
pub fn build_battle(
    npc: &TrainerDefinition,
    player: &TrainerDefinition,
    health: HealthArgs,
) -> BattleState {
    let mut npc_side = npc.participant.clone();
    let mut player_side = player.participant.clone();
    apply_health(&mut npc_side, health.npc_health);
    apply_health(&mut player_side, health.player_health);
    BattleState::new(player_side, npc_side)
}

fn apply_health(side: &mut Participant, health: Option<u16>) {
    let Some(health) = health else {
        return;
    };
    let index = side.active_index;
    if let Some(active) = side.party.get_mut(index) {
        active.health = health.min(active.max_health);
    }
}
