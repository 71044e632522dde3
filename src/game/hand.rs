//! Seven-card hand evaluation and comparison.
//!
//! `evaluate_hand` ranks the union of a seat's hole cards and the board
//! into a [`HandValue`]: a category plus ordered tiebreakers. Categories
//! are tried strongest-first and the first match wins. Comparison is a
//! strict total order: category dominates, then tiebreakers decide
//! element by element, most significant first.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::entities::{Card, GameState, Player, Suit, Value};
use super::errors::EngineError;

/// Hand categories, weakest to strongest. The derived `Ord` is the
/// comparison order used at showdown.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum HandCategory {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::HighCard => "High Card",
            Self::OnePair => "One Pair",
            Self::TwoPair => "Two Pair",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full House",
            Self::FourOfAKind => "Four of a Kind",
            Self::StraightFlush => "Straight Flush",
        };
        write!(f, "{repr}")
    }
}

/// A comparable hand strength: category first, then tiebreakers ordered
/// most-significant-first. Tiebreaker layout per category:
///
/// - straight flush / straight: `[high rank]` (5 for the wheel)
/// - four of a kind: `[quad rank, kicker]`
/// - full house: `[triple rank, pair rank]`
/// - flush / high card: top 5 ranks, descending
/// - three of a kind: `[set rank, kicker, kicker]`
/// - two pair: `[high pair, low pair, kicker]`
/// - one pair: `[pair rank, kicker, kicker, kicker]`
///
/// The derived `Ord` compares `category` first and then the tiebreaker
/// vectors lexicographically, which is exactly the showdown order since
/// equal categories always carry equally long tiebreaker lists.
#[derive(Clone, Debug, Deserialize, Eq, Ord, PartialEq, PartialOrd, Serialize)]
pub struct HandValue {
    pub category: HandCategory,
    pub tiebreakers: Vec<Value>,
}

/// Scan distinct ranks, descending, for a run of five consecutive values.
/// An ace additionally counts low so that 5-4-3-2-A completes a straight
/// with high card 5. Returns the high rank of the best run.
fn find_straight(values: &[Value]) -> Option<Value> {
    let mut unique = values.to_vec();
    unique.sort_unstable_by(|a, b| b.cmp(a));
    unique.dedup();
    if unique.contains(&14) {
        unique.push(1);
    }

    let mut run = 1;
    for i in 0..unique.len().saturating_sub(1) {
        if unique[i] - 1 == unique[i + 1] {
            run += 1;
            if run == 5 {
                return Some(unique[i - 3]);
            }
        } else {
            run = 1;
        }
    }
    None
}

/// Top `n` ranks among `counts` entries whose rank is not in `used`,
/// descending. `counts` arrives sorted by (count, rank) descending, so
/// entries with equal counts are already rank-ordered.
fn kickers(counts: &[(Value, usize)], used: &[Value], n: usize) -> Vec<Value> {
    let mut ranks: Vec<Value> = counts
        .iter()
        .map(|&(rank, _)| rank)
        .filter(|rank| !used.contains(rank))
        .collect();
    ranks.sort_unstable_by(|a, b| b.cmp(a));
    ranks.truncate(n);
    ranks
}

/// Rank a combination of 2..=7 cards. Mid-hand callers (bot heuristics)
/// may pass fewer than seven cards; showdown always passes 2 hole + 5
/// community.
#[must_use]
pub fn evaluate_hand(cards: &[Card]) -> HandValue {
    let values: Vec<Value> = cards.iter().map(|c| c.rank).collect();

    let mut rank_counts: HashMap<Value, usize> = HashMap::new();
    for &v in &values {
        *rank_counts.entry(v).or_default() += 1;
    }
    // Sorted by count desc, then rank desc.
    let mut counts: Vec<(Value, usize)> = rank_counts.into_iter().collect();
    counts.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

    let mut suit_groups: HashMap<Suit, Vec<Value>> = HashMap::new();
    for c in cards {
        suit_groups.entry(c.suit).or_default().push(c.rank);
    }

    // Straight flush: at most one suit can hold five of seven cards.
    for suit_ranks in suit_groups.values() {
        if suit_ranks.len() >= 5 {
            if let Some(high) = find_straight(suit_ranks) {
                return HandValue {
                    category: HandCategory::StraightFlush,
                    tiebreakers: vec![high],
                };
            }
        }
    }

    // Four of a kind.
    if counts[0].1 == 4 {
        let quad = counts[0].0;
        let tiebreakers: Vec<Value> = std::iter::once(quad)
            .chain(kickers(&counts, &[quad], 1))
            .collect();
        return HandValue {
            category: HandCategory::FourOfAKind,
            tiebreakers,
        };
    }

    // Full house: a triple plus a pair, or a second triple.
    if counts[0].1 == 3 && counts.get(1).is_some_and(|c| c.1 >= 2) {
        let triple = counts[0].0;
        let pair = counts[1].0;
        return HandValue {
            category: HandCategory::FullHouse,
            tiebreakers: vec![triple, pair],
        };
    }

    // Flush.
    for suit_ranks in suit_groups.values() {
        if suit_ranks.len() >= 5 {
            let mut top = suit_ranks.clone();
            top.sort_unstable_by(|a, b| b.cmp(a));
            top.truncate(5);
            return HandValue {
                category: HandCategory::Flush,
                tiebreakers: top,
            };
        }
    }

    // Straight.
    if let Some(high) = find_straight(&values) {
        return HandValue {
            category: HandCategory::Straight,
            tiebreakers: vec![high],
        };
    }

    // Three of a kind.
    if counts[0].1 == 3 {
        let set = counts[0].0;
        let tiebreakers: Vec<Value> =
            std::iter::once(set).chain(kickers(&counts, &[set], 2)).collect();
        return HandValue {
            category: HandCategory::ThreeOfAKind,
            tiebreakers,
        };
    }

    // Two pair.
    if counts[0].1 == 2 && counts.get(1).is_some_and(|c| c.1 == 2) {
        let high_pair = counts[0].0;
        let low_pair = counts[1].0;
        let tiebreakers: Vec<Value> = [high_pair, low_pair]
            .into_iter()
            .chain(kickers(&counts, &[high_pair, low_pair], 1))
            .collect();
        return HandValue {
            category: HandCategory::TwoPair,
            tiebreakers,
        };
    }

    // One pair.
    if counts[0].1 == 2 {
        let pair = counts[0].0;
        let tiebreakers: Vec<Value> =
            std::iter::once(pair).chain(kickers(&counts, &[pair], 3)).collect();
        return HandValue {
            category: HandCategory::OnePair,
            tiebreakers,
        };
    }

    // High card: top 5 ranks, descending.
    let mut top = values;
    top.sort_unstable_by(|a, b| b.cmp(a));
    top.truncate(5);
    HandValue {
        category: HandCategory::HighCard,
        tiebreakers: top,
    }
}

/// Reduce a list of hand values to the strongest one; ties keep the
/// earliest entry. An empty list is a dealing defect upstream and is
/// fatal.
pub fn best_hand_value(hands: &[HandValue]) -> Result<&HandValue, EngineError> {
    hands
        .iter()
        .fold(None, |best: Option<&HandValue>, hand| match best {
            Some(b) if b >= hand => Some(b),
            _ => Some(hand),
        })
        .ok_or(EngineError::NoShowdownCandidates)
}

/// Assign a [`HandValue`] to every non-folded seat for showdown. Every
/// seat must hold exactly two hole cards; anything else means the deal
/// was defective and must not be silently tolerated.
pub fn evaluate_showdown(state: &GameState) -> Result<Vec<Player>, EngineError> {
    let mut players = state.players.clone();
    for player in &mut players {
        if player.hand.len() != 2 {
            return Err(EngineError::MalformedHand {
                name: player.name.clone(),
                cards: player.hand.len(),
            });
        }
        if player.is_active() {
            let mut cards = player.hand.clone();
            cards.extend_from_slice(&state.community);
            player.hand_value = Some(evaluate_hand(&cards));
        }
    }
    Ok(players)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(rank: Value, suit: Suit) -> Card {
        Card { rank, suit }
    }

    fn ranks(cards: &[(Value, Suit)]) -> Vec<Card> {
        cards.iter().map(|&(r, s)| card(r, s)).collect()
    }

    #[test]
    fn straight_flush_beats_quads() {
        let sf = evaluate_hand(&ranks(&[
            (9, Suit::Heart),
            (8, Suit::Heart),
            (7, Suit::Heart),
            (6, Suit::Heart),
            (5, Suit::Heart),
            (5, Suit::Spade),
            (5, Suit::Club),
        ]));
        assert_eq!(sf.category, HandCategory::StraightFlush);
        assert_eq!(sf.tiebreakers, vec![9]);

        let quads = evaluate_hand(&ranks(&[
            (14, Suit::Heart),
            (14, Suit::Diamond),
            (14, Suit::Club),
            (14, Suit::Spade),
            (13, Suit::Heart),
            (2, Suit::Club),
            (3, Suit::Diamond),
        ]));
        assert_eq!(quads.category, HandCategory::FourOfAKind);
        assert_eq!(quads.tiebreakers, vec![14, 13]);

        assert!(sf > quads);
    }

    #[test]
    fn full_house_prefers_pair_then_second_triple() {
        // Triple of tens plus pair of nines.
        let boat = evaluate_hand(&ranks(&[
            (10, Suit::Heart),
            (10, Suit::Diamond),
            (10, Suit::Club),
            (9, Suit::Spade),
            (9, Suit::Heart),
            (2, Suit::Club),
            (3, Suit::Diamond),
        ]));
        assert_eq!(boat.category, HandCategory::FullHouse);
        assert_eq!(boat.tiebreakers, vec![10, 9]);

        // Two triples: higher triple fills, lower acts as the pair.
        let double = evaluate_hand(&ranks(&[
            (10, Suit::Heart),
            (10, Suit::Diamond),
            (10, Suit::Club),
            (4, Suit::Spade),
            (4, Suit::Heart),
            (4, Suit::Diamond),
            (2, Suit::Club),
        ]));
        assert_eq!(double.category, HandCategory::FullHouse);
        assert_eq!(double.tiebreakers, vec![10, 4]);
    }

    #[test]
    fn flush_takes_top_five_of_suit() {
        let flush = evaluate_hand(&ranks(&[
            (13, Suit::Club),
            (11, Suit::Club),
            (8, Suit::Club),
            (5, Suit::Club),
            (3, Suit::Club),
            (2, Suit::Club),
            (14, Suit::Heart),
        ]));
        assert_eq!(flush.category, HandCategory::Flush);
        assert_eq!(flush.tiebreakers, vec![13, 11, 8, 5, 3]);
    }

    #[test]
    fn wheel_straight_high_card_is_five() {
        let wheel = evaluate_hand(&ranks(&[
            (14, Suit::Heart),
            (5, Suit::Diamond),
            (4, Suit::Club),
            (3, Suit::Spade),
            (2, Suit::Heart),
            (9, Suit::Club),
            (11, Suit::Diamond),
        ]));
        assert_eq!(wheel.category, HandCategory::Straight);
        assert_eq!(wheel.tiebreakers, vec![5]);
    }

    #[test]
    fn straight_favors_highest_run() {
        // 4..9 present: high card must be 9, not 8.
        let hv = evaluate_hand(&ranks(&[
            (9, Suit::Heart),
            (8, Suit::Diamond),
            (7, Suit::Club),
            (6, Suit::Spade),
            (5, Suit::Heart),
            (4, Suit::Club),
            (13, Suit::Diamond),
        ]));
        assert_eq!(hv.category, HandCategory::Straight);
        assert_eq!(hv.tiebreakers, vec![9]);
    }

    #[test]
    fn two_pair_kicker_is_best_remaining_rank() {
        // Three pairs dealt: top two count, the kicker is the king,
        // not the leftover pair rank.
        let hv = evaluate_hand(&ranks(&[
            (9, Suit::Heart),
            (9, Suit::Diamond),
            (5, Suit::Club),
            (5, Suit::Spade),
            (2, Suit::Heart),
            (2, Suit::Club),
            (13, Suit::Diamond),
        ]));
        assert_eq!(hv.category, HandCategory::TwoPair);
        assert_eq!(hv.tiebreakers, vec![9, 5, 13]);
    }

    #[test]
    fn one_pair_carries_three_kickers() {
        let hv = evaluate_hand(&ranks(&[
            (9, Suit::Heart),
            (9, Suit::Diamond),
            (13, Suit::Club),
            (7, Suit::Spade),
            (4, Suit::Heart),
            (3, Suit::Club),
            (2, Suit::Diamond),
        ]));
        assert_eq!(hv.category, HandCategory::OnePair);
        assert_eq!(hv.tiebreakers, vec![9, 13, 7, 4]);
    }

    #[test]
    fn high_card_is_top_five_descending() {
        let hv = evaluate_hand(&ranks(&[
            (14, Suit::Heart),
            (12, Suit::Diamond),
            (10, Suit::Club),
            (7, Suit::Spade),
            (3, Suit::Heart),
            (2, Suit::Club),
            (5, Suit::Diamond),
        ]));
        assert_eq!(hv.category, HandCategory::HighCard);
        assert_eq!(hv.tiebreakers, vec![14, 12, 10, 7, 5]);
    }

    #[test]
    fn comparison_category_dominates() {
        let pair_of_aces = HandValue {
            category: HandCategory::OnePair,
            tiebreakers: vec![14, 13, 12, 11],
        };
        let two_low_pair = HandValue {
            category: HandCategory::TwoPair,
            tiebreakers: vec![3, 2, 4],
        };
        assert!(two_low_pair > pair_of_aces);
    }

    #[test]
    fn comparison_first_differing_tiebreaker_decides() {
        let a = HandValue {
            category: HandCategory::FullHouse,
            tiebreakers: vec![13, 5],
        };
        let b = HandValue {
            category: HandCategory::FullHouse,
            tiebreakers: vec![10, 9],
        };
        assert!(a > b);

        let c = HandValue {
            category: HandCategory::FullHouse,
            tiebreakers: vec![13, 5],
        };
        assert_eq!(a, c);
    }

    #[test]
    fn best_hand_value_of_empty_list_is_fatal() {
        assert!(matches!(
            best_hand_value(&[]),
            Err(EngineError::NoShowdownCandidates)
        ));
    }

    #[test]
    fn evaluator_handles_two_cards() {
        let hv = evaluate_hand(&ranks(&[(14, Suit::Heart), (14, Suit::Spade)]));
        assert_eq!(hv.category, HandCategory::OnePair);
        assert_eq!(hv.tiebreakers, vec![14]);
    }
}
