//! Loot tables and drop rolls
//!
//! Every agent carries a [`LootTable`]. On death the table is rolled once:
//! first a drop-chance gate, then a weighted pick across coin, heart, and
//! powerup buckets. Weights are plain floats so tables can be tuned in
//! config without code changes.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Powerup identities a drop can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerupKind {
    Wheel,
    MachineGun,
    Nuke,
    Tombstone,
    Coffee,
    Shotgun,
    SmokeGrenade,
    Badge,
}

impl PowerupKind {
    /// Every kind, in declaration order.
    pub const ALL: [PowerupKind; 8] = [
        PowerupKind::Wheel,
        PowerupKind::MachineGun,
        PowerupKind::Nuke,
        PowerupKind::Tombstone,
        PowerupKind::Coffee,
        PowerupKind::Shotgun,
        PowerupKind::SmokeGrenade,
        PowerupKind::Badge,
    ];
}

/// One weighted powerup entry in a loot table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerupWeight {
    pub kind: PowerupKind,
    pub weight: f32,
}

/// What a successful roll produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LootDrop {
    /// A coin; rare coins are worth more to whoever picks them up.
    Coin { rare: bool },
    Heart,
    Powerup(PowerupKind),
}

impl LootDrop {
    /// Currency value of a coin drop: 1 common, 5 rare, 0 for anything else.
    #[must_use]
    pub fn coin_value(&self) -> u32 {
        match self {
            LootDrop::Coin { rare: true } => 5,
            LootDrop::Coin { rare: false } => 1,
            _ => 0,
        }
    }
}

/// Drop chance plus bucket weights for one agent kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootTable {
    /// Probability in [0, 1] that the death drops anything at all
    pub drop_chance: f32,
    pub coin_weight: f32,
    pub heart_weight: f32,
    /// Powerup buckets, walked in declared order after coin and heart
    pub powerups: Vec<PowerupWeight>,
    /// Probability that a dropped coin is the rare variant
    pub rare_coin_chance: f32,
}

impl LootTable {
    /// A table that never drops anything.
    #[must_use]
    pub fn none() -> Self {
        Self {
            drop_chance: 0.0,
            coin_weight: 0.0,
            heart_weight: 0.0,
            powerups: Vec::new(),
            rare_coin_chance: 0.0,
        }
    }
}

impl Default for LootTable {
    fn default() -> Self {
        Self {
            drop_chance: 0.35,
            coin_weight: 70.0,
            heart_weight: 30.0,
            powerups: Vec::new(),
            rare_coin_chance: 0.15,
        }
    }
}

/// Roll a table once.
///
/// Zero-weight buckets are skipped; a non-positive total weight means no
/// drop even when the chance gate passes.
pub fn roll(table: &LootTable, rng: &mut impl Rng) -> Option<LootDrop> {
    if rng.gen_range(0.0..1.0) >= table.drop_chance {
        return None;
    }

    let coin = table.coin_weight.max(0.0);
    let heart = table.heart_weight.max(0.0);
    let total: f32 = coin + heart + table.powerups.iter().map(|p| p.weight.max(0.0)).sum::<f32>();
    if total <= 0.0 {
        return None;
    }

    let mut draw = rng.gen_range(0.0..1.0) * total;
    draw -= coin;
    if draw < 0.0 && coin > 0.0 {
        let rare = rng.gen_range(0.0..1.0) < table.rare_coin_chance;
        return Some(LootDrop::Coin { rare });
    }
    draw -= heart;
    if draw < 0.0 && heart > 0.0 {
        return Some(LootDrop::Heart);
    }
    for entry in &table.powerups {
        draw -= entry.weight.max(0.0);
        if draw < 0.0 && entry.weight > 0.0 {
            return Some(LootDrop::Powerup(entry.kind));
        }
    }

    // Float tail: fall back to the last bucket with any weight.
    if let Some(entry) = table.powerups.iter().rev().find(|p| p.weight > 0.0) {
        return Some(LootDrop::Powerup(entry.kind));
    }
    if heart > 0.0 {
        return Some(LootDrop::Heart);
    }
    Some(LootDrop::Coin {
        rare: rng.gen_range(0.0..1.0) < table.rare_coin_chance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_zero_chance_never_drops() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let table = LootTable {
            drop_chance: 0.0,
            ..LootTable::default()
        };
        for _ in 0..1000 {
            assert_eq!(roll(&table, &mut rng), None);
        }
    }

    #[test]
    fn test_zero_total_weight_drops_nothing() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let table = LootTable {
            drop_chance: 1.0,
            coin_weight: 0.0,
            heart_weight: 0.0,
            powerups: vec![PowerupWeight {
                kind: PowerupKind::Nuke,
                weight: 0.0,
            }],
            rare_coin_chance: 0.0,
        };
        for _ in 0..1000 {
            assert_eq!(roll(&table, &mut rng), None);
        }
    }

    #[test]
    fn test_single_powerup_bucket() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let table = LootTable {
            drop_chance: 1.0,
            coin_weight: 0.0,
            heart_weight: 0.0,
            powerups: vec![PowerupWeight {
                kind: PowerupKind::Shotgun,
                weight: 2.5,
            }],
            rare_coin_chance: 0.0,
        };
        for _ in 0..200 {
            assert_eq!(roll(&table, &mut rng), Some(LootDrop::Powerup(PowerupKind::Shotgun)));
        }
    }

    #[test]
    fn test_rare_coin_gate() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let always_rare = LootTable {
            drop_chance: 1.0,
            coin_weight: 1.0,
            heart_weight: 0.0,
            powerups: Vec::new(),
            rare_coin_chance: 1.0,
        };
        let never_rare = LootTable {
            rare_coin_chance: 0.0,
            ..always_rare.clone()
        };
        for _ in 0..200 {
            assert_eq!(roll(&always_rare, &mut rng), Some(LootDrop::Coin { rare: true }));
            assert_eq!(roll(&never_rare, &mut rng), Some(LootDrop::Coin { rare: false }));
        }
        assert_eq!(LootDrop::Coin { rare: true }.coin_value(), 5);
        assert_eq!(LootDrop::Coin { rare: false }.coin_value(), 1);
        assert_eq!(LootDrop::Heart.coin_value(), 0);
    }

    #[test]
    fn test_drop_statistics() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let table = LootTable {
            drop_chance: 0.8,
            coin_weight: 70.0,
            heart_weight: 30.0,
            powerups: Vec::new(),
            rare_coin_chance: 0.15,
        };

        let trials = 100_000u32;
        let mut drops = 0u32;
        let mut coins = 0u32;
        for _ in 0..trials {
            match roll(&table, &mut rng) {
                Some(LootDrop::Coin { .. }) => {
                    drops += 1;
                    coins += 1;
                }
                Some(_) => drops += 1,
                None => {}
            }
        }

        let drop_rate = f64::from(drops) / f64::from(trials);
        assert!((drop_rate - 0.8).abs() < 0.01, "drop rate {drop_rate}");
        let coin_share = f64::from(coins) / f64::from(drops);
        assert!((coin_share - 0.7).abs() < 0.02, "coin share {coin_share}");
    }
}
