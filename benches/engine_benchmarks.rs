use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use solo_poker::game::{
    evaluate_hand, init_game, reduce, start_hand, BotProfile, BotSeat, Card, GameEvent, GameState,
    PlayerAction, PregameConfig, Suit,
};

/// Helper to create a dealt table with one human and `bots` bots.
fn setup_dealt_table(bots: usize) -> GameState {
    let config = PregameConfig {
        bots: (0..bots)
            .map(|i| BotSeat { name: format!("bot{i}"), profile: BotProfile::Basic })
            .collect(),
        buy_in: 1000,
        big_blind: 10,
        small_blind: 5,
    };
    let (seated, _) = reduce(&init_game(), &GameEvent::InitiateGame(config)).unwrap();
    let (state, _) = reduce(&seated, &GameEvent::StartNextHand).unwrap();
    state
}

/// Benchmark hand evaluation with 7 cards (hole cards + full board)
fn bench_evaluate_hand_7_cards(c: &mut Criterion) {
    let royal = [
        Card { rank: 14, suit: Suit::Spade },
        Card { rank: 13, suit: Suit::Spade },
        Card { rank: 12, suit: Suit::Spade },
        Card { rank: 11, suit: Suit::Spade },
        Card { rank: 10, suit: Suit::Spade },
        Card { rank: 2, suit: Suit::Heart },
        Card { rank: 3, suit: Suit::Diamond },
    ];
    // Worst case for the cascade: nothing matches until high card.
    let ragged = [
        Card { rank: 2, suit: Suit::Spade },
        Card { rank: 4, suit: Suit::Heart },
        Card { rank: 7, suit: Suit::Diamond },
        Card { rank: 9, suit: Suit::Club },
        Card { rank: 11, suit: Suit::Spade },
        Card { rank: 13, suit: Suit::Heart },
        Card { rank: 14, suit: Suit::Diamond },
    ];

    c.bench_function("evaluate_hand_royal_flush", |b| {
        b.iter(|| evaluate_hand(&royal));
    });
    c.bench_function("evaluate_hand_high_card", |b| {
        b.iter(|| evaluate_hand(&ragged));
    });
}

/// Benchmark a full reduction, the hot path of every dispatch
fn bench_reduce_action(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce_call");
    for bots in [1usize, 3, 5] {
        let state = setup_dealt_table(bots);
        group.bench_with_input(BenchmarkId::from_parameter(bots), &state, |b, state| {
            b.iter(|| reduce(state, &GameEvent::PlayerAction(PlayerAction::Call)).unwrap());
        });
    }
    group.finish();
}

/// Benchmark dealing a fresh hand (shuffle included)
fn bench_start_hand(c: &mut Criterion) {
    let state = setup_dealt_table(5);
    c.bench_function("start_hand_6_seats", |b| {
        b.iter(|| start_hand(&state));
    });
}

criterion_group!(
    benches,
    bench_evaluate_hand_7_cards,
    bench_reduce_action,
    bench_start_hand
);
criterion_main!(benches);
