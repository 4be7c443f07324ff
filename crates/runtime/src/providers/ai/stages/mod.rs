//! Building blocks for strategy pipelines.
//!
//! Listed in the precedence they take when combined:
//!
//! 1. [`StruggleGuard`]: nothing usable, Struggle
//! 2. [`ScriptedHeal`]: capped self-heal at low health
//! 3. [`PriorityFinisher`]: priority move against a low-health opponent
//! 4. [`WeightedMoves`] / [`RandomMoves`]: regular move choice
//!
//! [`RandomItem`] stands alone for item-only strategies.

mod guards;
mod items;
mod priority;
mod random;
mod scripted;
mod weighted;

pub use guards::StruggleGuard;
pub use items::RandomItem;
pub use priority::PriorityFinisher;
pub use random::RandomMoves;
pub use scripted::ScriptedHeal;
pub use weighted::WeightedMoves;
