//! Combat model: damage intake, death, and loot
//!
//! Projectile flight and hit detection live with the embedding game; this
//! module owns what happens once a hit lands, plus the weighted loot rolls
//! that deaths trigger.

pub mod damage;
pub mod loot;

pub use damage::{apply_damage, enter_death};
pub use loot::{LootDrop, LootTable, PowerupKind, PowerupWeight};
