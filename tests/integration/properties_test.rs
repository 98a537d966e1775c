//! Property tests for ladder invariants

use ladder_book::orderbook::{BookSide, MarketSide, OrderBook, Price, Size};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn side() -> impl Strategy<Value = BookSide> {
    prop_oneof![Just(BookSide::Bid), Just(BookSide::Ask)]
}

fn market_side() -> impl Strategy<Value = MarketSide> {
    prop_oneof![Just(MarketSide::Buy), Just(MarketSide::Sell)]
}

/// Levels with positive sizes, unique prices
fn positive_ladder() -> impl Strategy<Value = BTreeMap<Price, Size>> {
    prop::collection::btree_map(-1_000i64..1_000, 1i64..500, 0..20)
}

fn book_from(side: BookSide, levels: &BTreeMap<Price, Size>) -> OrderBook {
    let mut book = OrderBook::new();
    for (&price, &size) in levels {
        book.update(side, price, size);
    }
    book
}

proptest! {
    #[test]
    fn last_update_wins(
        side in side(),
        price in -1_000i64..1_000,
        sizes in prop::collection::vec(-100i64..100, 1..10),
    ) {
        let mut book = OrderBook::new();
        for &size in &sizes {
            book.update(side, price, size);
        }
        prop_assert_eq!(book.level_count(side), 1);
        prop_assert_eq!(book.best(side).unwrap().size, *sizes.last().unwrap());
    }

    #[test]
    fn best_is_extreme_key(
        updates in prop::collection::vec((side(), -1_000i64..1_000, -50i64..50), 1..40),
    ) {
        let mut book = OrderBook::new();
        for &(side, price, size) in &updates {
            book.update(side, price, size);
        }

        let max_bid = updates.iter().filter(|u| u.0 == BookSide::Bid).map(|u| u.1).max();
        let min_ask = updates.iter().filter(|u| u.0 == BookSide::Ask).map(|u| u.1).min();

        prop_assert_eq!(book.best_bid().ok().map(|l| l.price), max_bid);
        prop_assert_eq!(book.best_ask().ok().map(|l| l.price), min_ask);
    }

    #[test]
    fn market_order_removes_min_of_requested_and_resting(
        market in market_side(),
        levels in positive_ladder(),
        size in 0i64..5_000,
    ) {
        let contra = market.contra();
        let mut book = book_from(contra, &levels);
        let before = book.total_size(contra);

        book.execute_market(market, size);

        let removed = before - book.total_size(contra);
        prop_assert!(removed >= 0);
        prop_assert_eq!(removed, size.min(before));
    }

    #[test]
    fn market_order_consumes_best_levels_first(
        market in market_side(),
        levels in positive_ladder(),
        size in 1i64..5_000,
    ) {
        let contra = market.contra();
        let mut book = book_from(contra, &levels);
        let original = book.levels(contra);

        book.execute_market(market, size);
        let remaining = book.levels(contra);

        // What is left is a suffix of the original best-first ladder,
        // except that its head may have been partially filled
        let consumed = original.len() - remaining.len();
        let expected_tail = &original[consumed..];
        prop_assert_eq!(remaining.len(), expected_tail.len());
        for (i, (left, orig)) in remaining.iter().zip(expected_tail).enumerate() {
            prop_assert_eq!(left.price, orig.price);
            if i == 0 {
                prop_assert!(left.size <= orig.size && left.size > 0);
            } else {
                prop_assert_eq!(left.size, orig.size);
            }
        }
    }

    #[test]
    fn price_priority_holds_at_every_step(
        market in market_side(),
        levels in positive_ladder(),
        steps in prop::collection::vec(1i64..40, 1..60),
    ) {
        let contra = market.contra();
        let mut book = book_from(contra, &levels);
        let original = book.levels(contra);

        for &step in &steps {
            let before = book.levels(contra);
            book.execute_market(market, step);
            let after = book.levels(contra);

            // Only the head may shrink; everything behind it is the untouched
            // tail of the original best-first ladder
            let tail = &original[original.len() - after.len()..];
            for (i, (left, orig)) in after.iter().zip(tail).enumerate() {
                prop_assert_eq!(left.price, orig.price);
                if i == 0 {
                    prop_assert!(left.size > 0 && left.size <= orig.size);
                } else {
                    prop_assert_eq!(left.size, orig.size);
                }
            }

            // A worse level is never touched while a better one survives
            let consumed = before.len() - after.len();
            if let Some(head) = after.first() {
                prop_assert_eq!(head.price, before[consumed].price);
            }

            let removed = before.iter().map(|l| l.size).sum::<i64>()
                - after.iter().map(|l| l.size).sum::<i64>();
            let resting = before.iter().map(|l| l.size).sum::<i64>();
            prop_assert_eq!(removed, step.min(resting));
        }
    }

    #[test]
    fn market_order_leaves_own_side_untouched(
        market in market_side(),
        own in positive_ladder(),
        contra_levels in positive_ladder(),
        size in 0i64..5_000,
    ) {
        let own_side = match market {
            MarketSide::Buy => BookSide::Bid,
            MarketSide::Sell => BookSide::Ask,
        };
        let mut book = book_from(own_side, &own);
        for (&price, &level) in &contra_levels {
            book.update(market.contra(), price, level);
        }
        let own_before = book.levels(own_side);

        book.execute_market(market, size);

        prop_assert_eq!(book.levels(own_side), own_before);
    }

    #[test]
    fn size_query_prefers_bid(
        price in -1_000i64..1_000,
        bid in -100i64..100,
        ask in -100i64..100,
    ) {
        let mut book = OrderBook::new();
        book.update(BookSide::Ask, price, ask);
        book.update(BookSide::Bid, price, bid);
        prop_assert_eq!(book.size_at(price), bid);
    }
}
