//! Read-only battle state handed to the decision engine.

use std::fmt;

use arrayvec::ArrayVec;

use crate::combatant::Combatant;
use crate::config::BattleConfig;

/// Side of a two-participant battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParticipantId {
    Player,
    Opponent,
}

impl ParticipantId {
    /// The other side of the battle.
    pub const fn opposing(self) -> Self {
        match self {
            Self::Player => Self::Opponent,
            Self::Opponent => Self::Player,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Player => 0,
            Self::Opponent => 1,
        }
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ParticipantId::Player => "player",
            ParticipantId::Opponent => "opponent",
        };
        write!(f, "{}", label)
    }
}

/// One side's party and which member is in battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Participant {
    pub name: String,
    pub party: ArrayVec<Combatant, { BattleConfig::MAX_PARTY_SIZE }>,
    pub active_index: usize,
}

impl Participant {
    /// Creates a participant whose first party member is active.
    ///
    /// Members beyond [`BattleConfig::MAX_PARTY_SIZE`] are ignored.
    pub fn new(name: impl Into<String>, party: impl IntoIterator<Item = Combatant>) -> Self {
        Self {
            name: name.into(),
            party: party
                .into_iter()
                .take(BattleConfig::MAX_PARTY_SIZE)
                .collect(),
            active_index: 0,
        }
    }

    #[must_use]
    pub fn with_active_index(mut self, active_index: usize) -> Self {
        self.active_index = active_index;
        self
    }

    /// The combatant currently in battle, if the active index is valid.
    pub fn active(&self) -> Option<&Combatant> {
        self.party.get(self.active_index)
    }

    /// True when every party member has fainted.
    pub fn is_defeated(&self) -> bool {
        self.party.iter().all(Combatant::is_fainted)
    }
}

/// Snapshot of a battle between two participants.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    pub turn: u32,
    participants: [Participant; 2],
}

impl BattleState {
    pub fn new(player: Participant, opponent: Participant) -> Self {
        Self {
            turn: 0,
            participants: [player, opponent],
        }
    }

    #[must_use]
    pub fn with_turn(mut self, turn: u32) -> Self {
        self.turn = turn;
        self
    }

    pub fn participant(&self, id: ParticipantId) -> &Participant {
        &self.participants[id.index()]
    }

    pub fn participant_mut(&mut self, id: ParticipantId) -> &mut Participant {
        &mut self.participants[id.index()]
    }

    /// Active combatant of `id`'s side.
    pub fn active(&self, id: ParticipantId) -> Option<&Combatant> {
        self.participant(id).active()
    }

    /// Active combatant of the side opposing `id`.
    pub fn opposing_active(&self, id: ParticipantId) -> Option<&Combatant> {
        self.active(id.opposing())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ElementType, TypePair};

    fn mon(name: &str) -> Combatant {
        Combatant::new(name, TypePair::single(ElementType::Normal), 20)
    }

    #[test]
    fn opposing_sides() {
        let state = BattleState::new(
            Participant::new("red", [mon("pidgey")]),
            Participant::new("brock", [mon("onix"), mon("geodude")]).with_active_index(1),
        );
        assert_eq!(ParticipantId::Player.opposing(), ParticipantId::Opponent);
        assert_eq!(state.active(ParticipantId::Opponent).unwrap().species, "geodude");
        assert_eq!(state.opposing_active(ParticipantId::Opponent).unwrap().species, "pidgey");
    }

    #[test]
    fn party_is_capped() {
        let participant = Participant::new("big", (0..9).map(|i| mon(&format!("m{i}"))));
        assert_eq!(participant.party.len(), BattleConfig::MAX_PARTY_SIZE);
    }

    #[test]
    fn defeat_requires_all_fainted() {
        let mut participant = Participant::new("misty", [mon("staryu"), mon("starmie")]);
        participant.party[0].health = 0;
        assert!(!participant.is_defeated());
        participant.party[1].health = 0;
        assert!(participant.is_defeated());
    }

    #[test]
    fn invalid_active_index_has_no_active() {
        let participant = Participant::new("empty", [mon("a")]).with_active_index(4);
        assert!(participant.active().is_none());
    }
}
