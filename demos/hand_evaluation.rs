//! Hand Evaluation Example
//!
//! Demonstrates evaluating and comparing seven-card poker hands.

use solo_poker::game::{best_hand_value, evaluate_hand, Card, Suit};

fn main() {
    println!("=== Poker Hand Evaluation Example ===\n");

    // Example 1: Evaluate a single hand
    println!("Example 1: Evaluating a 7-card hand");
    let royal = vec![
        Card { rank: 14, suit: Suit::Heart }, // Ace of Hearts
        Card { rank: 13, suit: Suit::Heart }, // King of Hearts
        Card { rank: 12, suit: Suit::Heart }, // Queen of Hearts
        Card { rank: 11, suit: Suit::Heart }, // Jack of Hearts
        Card { rank: 10, suit: Suit::Heart }, // Ten of Hearts
        Card { rank: 9, suit: Suit::Spade },
        Card { rank: 2, suit: Suit::Club },
    ];

    let value = evaluate_hand(&royal);
    println!("Hand: {royal:?}");
    println!("Category: {} ({:?})\n", value.category, value.tiebreakers);

    // Example 2: Compare two hands
    println!("Example 2: Comparing two hands");

    let aces = vec![
        Card { rank: 14, suit: Suit::Spade }, // Pair of Aces
        Card { rank: 14, suit: Suit::Heart },
        Card { rank: 10, suit: Suit::Club },
        Card { rank: 9, suit: Suit::Diamond },
        Card { rank: 2, suit: Suit::Spade },
    ];
    let kings = vec![
        Card { rank: 13, suit: Suit::Spade }, // Pair of Kings
        Card { rank: 13, suit: Suit::Heart },
        Card { rank: 10, suit: Suit::Club },
        Card { rank: 9, suit: Suit::Diamond },
        Card { rank: 2, suit: Suit::Spade },
    ];

    let value_a = evaluate_hand(&aces);
    let value_b = evaluate_hand(&kings);
    println!("Hand A: {} {:?}", value_a.category, value_a.tiebreakers);
    println!("Hand B: {} {:?}", value_b.category, value_b.tiebreakers);

    let values = [value_a, value_b];
    match best_hand_value(&values) {
        Ok(best) if *best == values[0] => println!("Winner: Hand A (Pair of Aces)\n"),
        Ok(_) => println!("Winner: Hand B (Pair of Kings)\n"),
        Err(e) => println!("No winner: {e}\n"),
    }

    // Example 3: The wheel
    println!("Example 3: An ace playing low");
    let wheel = vec![
        Card { rank: 14, suit: Suit::Spade },
        Card { rank: 2, suit: Suit::Heart },
        Card { rank: 3, suit: Suit::Club },
        Card { rank: 4, suit: Suit::Diamond },
        Card { rank: 5, suit: Suit::Spade },
        Card { rank: 9, suit: Suit::Heart },
        Card { rank: 11, suit: Suit::Club },
    ];
    let value = evaluate_hand(&wheel);
    println!("Hand: {wheel:?}");
    println!("Category: {} (high card {})", value.category, value.tiebreakers[0]);
}
