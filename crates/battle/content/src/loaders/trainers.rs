//! Trainer roster loader.
//!
//! Trainers are stored as specs (strategy name, party of species with move
//! ids) and instantiated against the move registry so every move slot starts
//! with full PP.

use std::path::Path;
use std::str::FromStr;

use battle_core::{
    BattleConfig, Combatant, ItemId, MoveId, MoveOracle, MoveSlot, NonVolatileStatus, Participant,
    StrategyKind, TrainerProfile, TypePair,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One party member as written in content files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantSpec {
    pub species: String,
    pub types: TypePair,
    pub max_health: u16,
    /// Starting health; defaults to `max_health`.
    #[serde(default)]
    pub health: Option<u16>,
    #[serde(default)]
    pub status: NonVolatileStatus,
    /// Up to four move ids, in slot order.
    pub moves: Vec<MoveId>,
}

impl CombatantSpec {
    /// Builds the combatant with every listed move at full PP.
    pub fn instantiate<M>(&self, moves: &M) -> LoadResult<Combatant>
    where
        M: MoveOracle + ?Sized,
    {
        if self.moves.len() > BattleConfig::MAX_MOVE_SLOTS {
            anyhow::bail!(
                "'{}' lists {} moves, at most {} are allowed",
                self.species,
                self.moves.len(),
                BattleConfig::MAX_MOVE_SLOTS
            );
        }

        let mut combatant = Combatant::new(self.species.clone(), self.types, self.max_health)
            .with_status(self.status);
        if let Some(health) = self.health {
            combatant = combatant.with_health(health);
        }

        for (slot, move_id) in self.moves.iter().copied().enumerate() {
            if move_id.is_unset() {
                continue;
            }
            let descriptor = moves.descriptor(move_id).ok_or_else(|| {
                anyhow::anyhow!("'{}' knows unknown move {}", self.species, move_id)
            })?;
            combatant = combatant.with_move(slot, MoveSlot::new(move_id, descriptor.max_pp));
        }

        Ok(combatant)
    }
}

/// A trainer as written in content files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainerSpec {
    pub id: String,
    pub name: String,
    /// Strategy name, e.g. `"basic_trainer"` (case-insensitive).
    pub strategy: String,
    #[serde(default)]
    pub healing_item: Option<ItemId>,
    #[serde(default)]
    pub max_times_healed: Option<u32>,
    pub party: Vec<CombatantSpec>,
}

impl TrainerSpec {
    pub fn profile(&self) -> LoadResult<TrainerProfile> {
        let strategy = StrategyKind::from_str(&self.strategy).map_err(|_| {
            anyhow::anyhow!(
                "Unknown strategy '{}' for trainer '{}'",
                self.strategy,
                self.id
            )
        })?;
        Ok(TrainerProfile {
            strategy,
            healing_item: self.healing_item,
            max_times_healed: self.max_times_healed,
        })
    }

    /// Resolves the strategy and builds the party at full PP.
    pub fn instantiate<M>(&self, moves: &M) -> LoadResult<TrainerDefinition>
    where
        M: MoveOracle + ?Sized,
    {
        if self.party.is_empty() {
            anyhow::bail!("Trainer '{}' has an empty party", self.id);
        }
        if self.party.len() > BattleConfig::MAX_PARTY_SIZE {
            anyhow::bail!(
                "Trainer '{}' has {} party members, at most {} are allowed",
                self.id,
                self.party.len(),
                BattleConfig::MAX_PARTY_SIZE
            );
        }

        let profile = self.profile()?;
        let party = self
            .party
            .iter()
            .map(|member| member.instantiate(moves))
            .collect::<LoadResult<Vec<_>>>()
            .map_err(|e| anyhow::anyhow!("Trainer '{}': {}", self.id, e))?;

        Ok(TrainerDefinition {
            id: self.id.clone(),
            profile,
            participant: Participant::new(self.name.clone(), party),
        })
    }
}

/// A trainer ready to take part in a battle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainerDefinition {
    pub id: String,
    pub profile: TrainerProfile,
    pub participant: Participant,
}

/// Trainer roster structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerRoster {
    pub trainers: Vec<TrainerSpec>,
}

/// Loader for trainer rosters from RON files.
pub struct TrainerLoader;

impl TrainerLoader {
    /// Load trainer specs from a RON file without resolving them.
    pub fn load_specs(path: &Path) -> LoadResult<Vec<TrainerSpec>> {
        let content = read_file(path)?;
        Self::parse_specs(&content)
    }

    pub fn parse_specs(content: &str) -> LoadResult<Vec<TrainerSpec>> {
        let roster: TrainerRoster = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse trainer roster RON: {}", e))?;
        Ok(roster.trainers)
    }

    /// Load and instantiate every trainer against the move registry.
    pub fn load<M>(path: &Path, moves: &M) -> LoadResult<Vec<TrainerDefinition>>
    where
        M: MoveOracle + ?Sized,
    {
        Self::load_specs(path)?
            .iter()
            .map(|spec| spec.instantiate(moves))
            .collect()
    }
}
