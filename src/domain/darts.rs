//! Darts outcome generator.
//!
//! A throw lands in one of a fixed set of zones. Each zone carries a
//! probability and a payout multiplier; zones with a zero multiplier are
//! misses. The table is pure data so the house edge can be audited with
//! [`DartsTable::expected_return`] without touching the ledger.

use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::outcome::Outcome;
use super::weighted::WeightedTable;

const TABLE: &str = "darts";

/// One region of the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DartZone {
    /// Zone name recorded in history, e.g. "bullseye".
    pub name: String,
    /// Probability that a throw lands here.
    pub probability: Decimal,
    /// Payout multiplier applied to the stake.
    pub multiplier: Decimal,
}

impl DartZone {
    pub fn new(name: impl Into<String>, probability: Decimal, multiplier: Decimal) -> Self {
        Self {
            name: name.into(),
            probability,
            multiplier,
        }
    }
}

/// Immutable, validated darts board.
#[derive(Debug, Clone)]
pub struct DartsTable {
    zones: Vec<DartZone>,
    sampler: WeightedTable,
}

impl DartsTable {
    /// Build a board from zones.
    ///
    /// # Errors
    /// Returns an error if probabilities do not sum to one, a zone repeats,
    /// or a multiplier is negative.
    pub fn try_new(zones: Vec<DartZone>) -> Result<Self, DomainError> {
        for zone in &zones {
            if zone.multiplier < Decimal::ZERO {
                return Err(DomainError::NegativeMultiplier {
                    table: TABLE,
                    entry: zone.name.clone(),
                    multiplier: zone.multiplier,
                });
            }
        }
        let sampler = WeightedTable::try_new(
            TABLE,
            zones.iter().map(|z| (z.name.as_str(), z.probability)),
        )?;
        Ok(Self { zones, sampler })
    }

    /// Zones in configuration order.
    #[must_use]
    pub fn zones(&self) -> &[DartZone] {
        &self.zones
    }

    /// Expected payout per unit staked. Below one means a house edge.
    #[must_use]
    pub fn expected_return(&self) -> Decimal {
        self.zones
            .iter()
            .map(|z| z.probability * z.multiplier)
            .sum()
    }

    /// Throw a dart.
    pub fn throw<R: Rng + ?Sized>(&self, rng: &mut R) -> Outcome {
        self.resolve(self.sampler.sample(rng))
    }

    /// Outcome for a throw landing in the zone at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn resolve(&self, index: usize) -> Outcome {
        let zone = &self.zones[index];
        let narrative = if zone.multiplier > Decimal::ZERO {
            format!("🎯 Your dart lands in the {}! ({}x)", zone.name, zone.multiplier.normalize())
        } else {
            format!("🎯 Your dart hits the {}...", zone.name)
        };
        Outcome::new(zone.multiplier, narrative, zone.name.clone())
    }
}

/// Default board: 80% expected return.
#[must_use]
pub fn default_zones() -> Vec<DartZone> {
    vec![
        DartZone::new("bullseye", dec!(0.05), dec!(5)),
        DartZone::new("inner ring", dec!(0.15), dec!(2)),
        DartZone::new("outer ring", dec!(0.25), dec!(1)),
        DartZone::new("miss", dec!(0.55), dec!(0)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn default_zone_probabilities_sum_to_one() {
        let total: Decimal = default_zones().iter().map(|z| z.probability).sum();
        assert_eq!(total, Decimal::ONE);
    }

    #[test]
    fn default_board_has_house_edge() {
        let table = DartsTable::try_new(default_zones()).unwrap();
        assert_eq!(table.expected_return(), dec!(0.80));
        assert!(table.expected_return() < Decimal::ONE);
    }

    #[test]
    fn zero_payout_zone_is_a_loss() {
        let table = DartsTable::try_new(default_zones()).unwrap();
        let miss = table.zones().iter().position(|z| z.name == "miss").unwrap();
        let outcome = table.resolve(miss);
        assert!(!outcome.is_win());
        assert_eq!(outcome.detail, "miss");
    }

    #[test]
    fn bullseye_pays_its_multiplier() {
        let table = DartsTable::try_new(default_zones()).unwrap();
        let outcome = table.resolve(0);
        assert!(outcome.is_win());
        assert_eq!(outcome.payout(dec!(1.00)), dec!(5.00));
    }

    #[test]
    fn board_that_always_misses_never_wins() {
        let table = DartsTable::try_new(vec![
            DartZone::new("bullseye", dec!(0), dec!(5)),
            DartZone::new("miss", dec!(1), dec!(0)),
        ])
        .unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            assert!(!table.throw(&mut rng).is_win());
        }
    }

    #[test]
    fn rejects_negative_multiplier() {
        let err = DartsTable::try_new(vec![DartZone::new("miss", dec!(1), dec!(-1))]).unwrap_err();
        assert!(matches!(err, DomainError::NegativeMultiplier { .. }));
    }

    #[test]
    fn rejects_unbalanced_board() {
        let err = DartsTable::try_new(vec![
            DartZone::new("bullseye", dec!(0.5), dec!(5)),
            DartZone::new("miss", dec!(0.6), dec!(0)),
        ])
        .unwrap_err();
        assert!(matches!(err, DomainError::ProbabilitySum { .. }));
    }
}
