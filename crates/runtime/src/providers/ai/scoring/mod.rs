//! Weighting and selection for NPC decisions.
//!
//! Scoring is split the way a decision flows:
//!
//! 1. **Weighting functions** ([`weights`]): map one battle signal to a
//!    relative weight
//! 2. **Candidate passes** ([`moves`], [`items`]): zero out illegal candidates
//!    and combine the weighting functions per candidate
//! 3. **Selection** ([`selector`]): normalize a weight vector and draw one
//!    index from the battle's random stream
//!
//! Weight vectors are plain `f64` slices in candidate order. Entries are never
//! negative and an all-zero vector is valid input to the selector.

pub mod items;
pub mod moves;
pub mod selector;
pub mod weights;

pub use items::{ItemChoice, choose_item, compatible_items};
pub use moves::{MoveWeights, WeightProfile, has_legal_move, is_legal, move_weights};
pub use selector::{draw_index, normalize, select_index};
pub use weights::{attack_move_weight, healing_move_weight, status_move_weight};
