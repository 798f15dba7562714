//! Hand valuation.

use super::card::Card;

/// Best total of a hand and whether an ace is still counted as 11.
#[must_use]
pub fn hand_value(cards: &[Card]) -> (u8, bool) {
    let mut value: u16 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value += u16::from(card.points());
    }

    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= 21;
    (value.min(255) as u8, is_soft)
}

/// Two-card 21.
#[must_use]
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && hand_value(cards).0 == 21
}

#[must_use]
pub fn is_bust(cards: &[Card]) -> bool {
    hand_value(cards).0 > 21
}

/// Render a hand as "A♠ K♥ (21)".
#[must_use]
pub fn describe(cards: &[Card]) -> String {
    let shown = cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    format!("{shown} ({})", hand_value(cards).0)
}

#[cfg(test)]
mod tests {
    use super::super::card::Suit;
    use super::*;

    fn cards(ranks: &[u8]) -> Vec<Card> {
        ranks.iter().map(|&r| Card::new(r, Suit::Spades)).collect()
    }

    #[test]
    fn ace_and_king_is_blackjack() {
        let hand = cards(&[1, 13]);
        assert_eq!(hand_value(&hand), (21, true));
        assert!(is_blackjack(&hand));
    }

    #[test]
    fn three_card_21_is_not_blackjack() {
        let hand = cards(&[7, 7, 7]);
        assert_eq!(hand_value(&hand), (21, false));
        assert!(!is_blackjack(&hand));
    }

    #[test]
    fn aces_soften_to_avoid_bust() {
        assert_eq!(hand_value(&cards(&[1, 1])), (12, true));
        assert_eq!(hand_value(&cards(&[1, 6, 10])), (17, false));
        assert_eq!(hand_value(&cards(&[1, 1, 9])), (21, true));
    }

    #[test]
    fn bust_over_21() {
        assert!(is_bust(&cards(&[10, 10, 2])));
        assert!(!is_bust(&cards(&[10, 10, 1])));
    }

    #[test]
    fn describe_lists_cards_and_total() {
        assert_eq!(describe(&cards(&[1, 13])), "A♠ K♠ (21)");
    }
}
