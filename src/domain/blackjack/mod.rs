//! Interactive blackjack: cards, hand valuation and the per-hand state machine.

pub mod card;
pub mod hand;
pub mod session;

pub use card::{Card, Deck, Suit};
pub use hand::{hand_value, is_blackjack};
pub use session::{BlackjackRules, BlackjackSession, Phase, Settlement, Verdict};
