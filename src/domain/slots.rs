//! Slots outcome generator.
//!
//! Three reels are drawn independently from a symbol weight table. Three
//! identical symbols pay that symbol's jackpot multiplier; exactly two pay
//! its pair multiplier (which may be zero). The full combination space is
//! enumerable so the house edge is auditable in isolation.

use std::collections::HashMap;

use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::outcome::Outcome;
use super::weighted::WeightedTable;

/// Number of reels on the machine.
pub const REELS: usize = 3;

const TABLE: &str = "slots";

/// A reel symbol and its payouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotSymbol {
    /// Display glyph, e.g. "🍒".
    pub glyph: String,
    /// Probability that one reel shows this symbol.
    pub weight: Decimal,
    /// Multiplier when all reels match this symbol.
    pub jackpot: Decimal,
    /// Multiplier when exactly two reels match this symbol.
    #[serde(default)]
    pub pair: Decimal,
}

impl SlotSymbol {
    pub fn new(glyph: impl Into<String>, weight: Decimal, jackpot: Decimal, pair: Decimal) -> Self {
        Self {
            glyph: glyph.into(),
            weight,
            jackpot,
            pair,
        }
    }
}

/// Classification of a reel combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotWin {
    /// All reels show the symbol at this index.
    Jackpot(usize),
    /// Exactly two reels show the symbol at this index.
    Pair(usize),
    /// No matching symbols.
    Nothing,
}

/// One entry of the enumerated combination space.
#[derive(Debug, Clone, PartialEq)]
pub struct Combination {
    pub reels: [usize; REELS],
    pub probability: Decimal,
    pub win: SlotWin,
    pub multiplier: Decimal,
}

/// Immutable, validated slot machine.
#[derive(Debug, Clone)]
pub struct SlotsTable {
    symbols: Vec<SlotSymbol>,
    sampler: WeightedTable,
}

impl SlotsTable {
    /// Build a machine from its symbols.
    ///
    /// # Errors
    /// Returns an error if weights do not sum to one, a glyph repeats, or a
    /// multiplier is negative.
    pub fn try_new(symbols: Vec<SlotSymbol>) -> Result<Self, DomainError> {
        for symbol in &symbols {
            for multiplier in [symbol.jackpot, symbol.pair] {
                if multiplier < Decimal::ZERO {
                    return Err(DomainError::NegativeMultiplier {
                        table: TABLE,
                        entry: symbol.glyph.clone(),
                        multiplier,
                    });
                }
            }
        }
        let sampler = WeightedTable::try_new(
            TABLE,
            symbols.iter().map(|s| (s.glyph.as_str(), s.weight)),
        )?;
        Ok(Self { symbols, sampler })
    }

    /// Symbols in configuration order.
    #[must_use]
    pub fn symbols(&self) -> &[SlotSymbol] {
        &self.symbols
    }

    /// Classify a combination of symbol indices.
    #[must_use]
    pub fn classify(reels: &[usize; REELS]) -> SlotWin {
        let mut counts: HashMap<usize, usize> = HashMap::new();
        for &symbol in reels {
            *counts.entry(symbol).or_insert(0) += 1;
        }
        let best = counts
            .into_iter()
            .max_by_key(|&(symbol, count)| (count, std::cmp::Reverse(symbol)));
        match best {
            Some((symbol, count)) if count == REELS => SlotWin::Jackpot(symbol),
            Some((symbol, 2)) => SlotWin::Pair(symbol),
            _ => SlotWin::Nothing,
        }
    }

    /// Multiplier paid for a classification.
    #[must_use]
    pub fn multiplier(&self, win: SlotWin) -> Decimal {
        match win {
            SlotWin::Jackpot(symbol) => self.symbols[symbol].jackpot,
            SlotWin::Pair(symbol) => self.symbols[symbol].pair,
            SlotWin::Nothing => Decimal::ZERO,
        }
    }

    /// Every reel combination with its probability and payout.
    #[must_use]
    pub fn combinations(&self) -> Vec<Combination> {
        let n = self.symbols.len();
        let mut out = Vec::with_capacity(n.pow(REELS as u32));
        for a in 0..n {
            for b in 0..n {
                for c in 0..n {
                    let reels = [a, b, c];
                    let probability = reels.iter().map(|&i| self.symbols[i].weight).product();
                    let win = Self::classify(&reels);
                    out.push(Combination {
                        reels,
                        probability,
                        win,
                        multiplier: self.multiplier(win),
                    });
                }
            }
        }
        out
    }

    /// Expected payout per unit staked. Below one means a house edge.
    #[must_use]
    pub fn expected_return(&self) -> Decimal {
        self.combinations()
            .iter()
            .map(|c| c.probability * c.multiplier)
            .sum()
    }

    /// Spin the reels.
    pub fn spin<R: Rng + ?Sized>(&self, rng: &mut R) -> Outcome {
        let reels = [
            self.sampler.sample(rng),
            self.sampler.sample(rng),
            self.sampler.sample(rng),
        ];
        self.resolve(&reels)
    }

    /// Outcome for a given combination of symbol indices.
    #[must_use]
    pub fn resolve(&self, reels: &[usize; REELS]) -> Outcome {
        let line = reels
            .iter()
            .map(|&i| self.symbols[i].glyph.as_str())
            .collect::<Vec<_>>()
            .join(" | ");
        let win = Self::classify(reels);
        let multiplier = self.multiplier(win);

        let (headline, detail) = match win {
            SlotWin::Jackpot(i) => (
                format!("JACKPOT! Three {}", self.symbols[i].glyph),
                format!("jackpot {}", self.symbols[i].glyph),
            ),
            SlotWin::Pair(i) if multiplier > Decimal::ZERO => (
                format!("Two {} - a small win!", self.symbols[i].glyph),
                format!("pair {}", self.symbols[i].glyph),
            ),
            SlotWin::Pair(i) => (
                format!("Two {} - but they don't pay.", self.symbols[i].glyph),
                format!("pair {}", self.symbols[i].glyph),
            ),
            SlotWin::Nothing => ("No match.".to_string(), "no match".to_string()),
        };

        Outcome::new(multiplier, format!("[ {line} ]\n{headline}"), detail)
    }
}

/// Default machine: roughly 79% expected return.
#[must_use]
pub fn default_symbols() -> Vec<SlotSymbol> {
    vec![
        SlotSymbol::new("🍒", dec!(0.35), dec!(5), dec!(0)),
        SlotSymbol::new("🍋", dec!(0.30), dec!(8), dec!(0)),
        SlotSymbol::new("🔔", dec!(0.20), dec!(15), dec!(1)),
        SlotSymbol::new("💎", dec!(0.10), dec!(40), dec!(2)),
        SlotSymbol::new("7️⃣", dec!(0.05), dec!(100), dec!(5)),
    ]
}
