//! Property tests for card comparison, dealing and whole-game invariants.

use proptest::prelude::*;
use rustc_hash::FxHashSet;

use fool_engine::cards::{Card, Deck, Rank, Suit};
use fool_engine::core::{GameRng, RuleSet};
use fool_engine::engine::{legality, MoveOutcome, TurnPhase};
use fool_engine::table::Table;
use fool_engine::{RandomStrategy, TurnCoordinator};

fn suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ALL.to_vec())
}

fn rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::ALL.to_vec())
}

fn card() -> impl Strategy<Value = Card> {
    (suit(), rank()).prop_map(|(s, r)| Card::new(s, r))
}

fn lowest_rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(vec![Rank::Two, Rank::Six])
}

proptest! {
    /// Two distinct cards never beat each other.
    #[test]
    fn prop_beats_is_one_way(a in card(), b in card(), trump in suit()) {
        prop_assume!(a != b);
        prop_assert!(!(a.beats(b, trump, false, Rank::Two) && b.beats(a, trump, false, Rank::Two)));
    }

    /// A trump beats every non-trump; a non-trump beats no trump.
    #[test]
    fn prop_trump_dominates(trump in suit(), trump_rank in rank(), b in card()) {
        prop_assume!(b.suit != trump);
        let a = Card::new(trump, trump_rank);
        prop_assert!(a.beats(b, trump, false, Rank::Two));
        prop_assert!(!b.beats(a, trump, true, Rank::Two));
    }

    /// A card never beats itself.
    #[test]
    fn prop_beats_irreflexive(a in card(), trump in suit(), deuce in any::<bool>()) {
        prop_assert!(!a.beats(a, trump, deuce, Rank::Two));
    }

    /// A shuffled deck holds every card once, trump from the bottom card.
    #[test]
    fn prop_shuffled_deck_complete(seed in any::<u64>(), lowest in lowest_rank()) {
        let mut rng = GameRng::new(seed);
        let deck = Deck::shuffled(lowest, &mut rng);
        let rules = RuleSet::default().with_lowest_rank(lowest);

        let unique: FxHashSet<Card> = deck.cards().iter().copied().collect();
        prop_assert_eq!(unique.len(), rules.deck_size());
        prop_assert_eq!(deck.len(), rules.deck_size());
        prop_assert_eq!(Some(deck.trump_suit()), deck.trump_card().map(|c| c.suit));
        prop_assert!(deck.cards().iter().all(|c| c.rank >= lowest));
    }

    /// Only ranks already on the table may be thrown in.
    #[test]
    fn prop_throw_needs_table_rank(
        attack in prop::collection::vec(card(), 1..6),
        candidate in card(),
    ) {
        let mut table = Table::new();
        for c in attack {
            table.place_attack(c);
        }
        let hand = vec![candidate];
        let ok = legality::card_can_be_thrown(&hand, candidate, &table);
        prop_assert_eq!(ok, table.ranks_present().contains(&candidate.rank));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Random legal play keeps every card accounted for and the table sane.
    #[test]
    fn prop_random_games_keep_invariants(
        seed in any::<u64>(),
        players in 2usize..=5,
        allow_pass in any::<bool>(),
        lowered in any::<bool>(),
        lowest in lowest_rank(),
    ) {
        let rules = RuleSet::default()
            .with_player_count(players)
            .with_allow_pass(allow_pass)
            .with_lowered_first_discard_limit(lowered)
            .with_lowest_rank(lowest);
        let rng = GameRng::new(seed);
        let mut strategy = RandomStrategy::new(rng.for_context("strategy"));
        let mut game = TurnCoordinator::new(rules, rng).unwrap();
        let deck_size = rules.deck_size();

        for _ in 0..3_000 {
            let outcome = match game.step(&mut strategy).unwrap() {
                Some(outcome) => outcome,
                None => break,
            };
            prop_assert!(matches!(outcome, MoveOutcome::Accepted(_)), "{:?}", outcome);

            prop_assert_eq!(game.card_count(), deck_size);
            prop_assert_eq!(game.card_census().len(), deck_size);
            prop_assert!(game.table().is_consistent());
            prop_assert!(game.table().attack_count() <= game.throw_limit());
            prop_assert!(game.phase().awaits_decision() || game.phase() == TurnPhase::Finished);

            for (seat, &out) in game.out_of_play().iter() {
                if out {
                    prop_assert!(game.hand(seat).is_empty());
                }
            }
        }
    }
}
