//! Type-effectiveness oracle and the standard 17-type chart.

use crate::types::{ElementType, TypePair};

/// Oracle computing damage multipliers between elemental types.
pub trait TypeOracle: Send + Sync {
    /// Multiplier of `attacking` against a single defending type
    /// (`0`, `0.5`, `1` or `2` for the standard chart).
    fn single_multiplier(&self, attacking: ElementType, defending: ElementType) -> f64;

    /// Multiplier against a single or dual typing; dual typings multiply the
    /// two single-type factors.
    fn multiplier(&self, attacking: ElementType, defending: TypePair) -> f64 {
        let primary = self.single_multiplier(attacking, defending.primary);
        match defending.secondary {
            Some(secondary) => primary * self.single_multiplier(attacking, secondary),
            None => primary,
        }
    }
}

/// The 17-type effectiveness chart used by the bundled content.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardTypeChart;

impl StandardTypeChart {
    /// Defending types `attacking` deals double damage to.
    fn super_effective_against(attacking: ElementType) -> &'static [ElementType] {
        use ElementType::*;
        match attacking {
            Normal => &[],
            Fire => &[Grass, Ice, Bug, Steel],
            Fighting => &[Normal, Ice, Rock, Dark, Steel],
            Water => &[Fire, Ground, Rock],
            Flying => &[Grass, Fighting, Bug],
            Grass => &[Water, Ground, Rock],
            Poison => &[Grass],
            Electric => &[Water, Flying],
            Ground => &[Fire, Electric, Poison, Rock, Steel],
            Psychic => &[Fighting, Poison],
            Rock => &[Fire, Ice, Flying, Bug],
            Ice => &[Grass, Ground, Flying, Dragon],
            Bug => &[Grass, Psychic, Dark],
            Dragon => &[Dragon],
            Ghost => &[Psychic, Ghost],
            Dark => &[Psychic, Ghost],
            Steel => &[Ice, Rock],
        }
    }

    /// Attacking types `defending` takes half damage from.
    fn resisted_by(defending: ElementType) -> &'static [ElementType] {
        use ElementType::*;
        match defending {
            Normal => &[],
            Fire => &[Fire, Grass, Ice, Bug, Steel],
            Fighting => &[Bug, Rock, Dark],
            Water => &[Fire, Water, Ice, Steel],
            Flying => &[Grass, Fighting, Bug],
            Grass => &[Water, Electric, Grass, Ground],
            Poison => &[Grass, Fighting, Poison, Bug],
            Electric => &[Electric, Flying, Steel],
            Ground => &[Poison, Rock],
            Psychic => &[Fighting, Psychic],
            Rock => &[Normal, Fire, Poison, Flying],
            Ice => &[Ice],
            Bug => &[Grass, Fighting, Ground],
            Dragon => &[Fire, Water, Electric, Grass],
            Ghost => &[Poison, Bug],
            Dark => &[Ghost, Dark],
            Steel => &[
                Normal, Grass, Ice, Flying, Psychic, Bug, Rock, Dragon, Steel,
            ],
        }
    }

    /// Attacking types `defending` is immune to.
    fn immune_to(defending: ElementType) -> &'static [ElementType] {
        use ElementType::*;
        match defending {
            Normal => &[Ghost],
            Flying => &[Ground],
            Ghost => &[Normal, Fighting],
            Dark => &[Psychic],
            Steel => &[Poison],
            Ground => &[Electric],
            _ => &[],
        }
    }
}

impl TypeOracle for StandardTypeChart {
    fn single_multiplier(&self, attacking: ElementType, defending: ElementType) -> f64 {
        if Self::super_effective_against(attacking).contains(&defending) {
            2.0
        } else if Self::resisted_by(defending).contains(&attacking) {
            0.5
        } else if Self::immune_to(defending).contains(&attacking) {
            0.0
        } else {
            1.0
        }
    }
}
