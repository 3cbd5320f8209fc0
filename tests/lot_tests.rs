use lot_auction::domain::{Bid, BidOutcome, Bidder, Errors, Lot};
use std::sync::Arc;
#[path="utils/mod.rs"] mod utils;
use utils::*;

#[test]
fn test_new_lot_has_no_bids() {
    let lot = Lot::new(1, "Vase");
    assert_eq!(lot.number(), 1);
    assert_eq!(lot.description(), "Vase");
    assert!(lot.highest_bid().is_none());
    assert!(!lot.has_bids());
}

#[test]
fn test_first_bid_is_always_accepted() {
    let mut lot = Lot::new(1, "Vase");
    assert!(lot.bid_for(bid(alice(), 0)));

    let highest = lot.highest_bid().unwrap();
    assert_eq!(highest.value(), 0);
    assert_eq!(**highest.bidder(), alice());
}

#[test]
fn test_equal_bid_is_rejected() {
    let mut lot = Lot::new(1, "Vase");
    assert!(lot.bid_for(bid(alice(), 50)));

    // Ties never win
    assert_eq!(lot.try_bid_for(bid(bob(), 50)), BidOutcome::Rejected { highest: 50 });

    let highest = lot.highest_bid().unwrap();
    assert_eq!(highest.value(), 50);
    assert_eq!(highest.bidder().name(), "Alice");
}

#[test]
fn test_lower_bid_is_rejected() {
    let mut lot = Lot::new(1, "Vase");
    assert!(lot.bid_for(bid(alice(), 50)));
    assert!(!lot.bid_for(bid(bob(), 49)));
    assert_eq!(lot.highest_bid().unwrap().value(), 50);
}

#[test]
fn test_higher_bid_replaces_highest() {
    let mut lot = Lot::new(1, "Vase");
    assert!(lot.bid_for(bid(alice(), 50)));
    assert_eq!(lot.try_bid_for(bid(bob(), 60)), BidOutcome::Accepted);

    let highest = lot.highest_bid().unwrap();
    assert_eq!(highest.value(), 60);
    assert_eq!(highest.bidder().name(), "Bob");
}

#[test]
fn test_same_bidder_can_raise_own_bid() {
    let mut lot = Lot::new(1, "Vase");
    assert!(lot.bid_for(bid(alice(), 10)));
    assert!(lot.bid_for(bid(alice(), 11)));
    assert_eq!(lot.highest_bid().unwrap().value(), 11);
}

#[test]
fn test_bid_requires_bidder() {
    assert_eq!(Bid::new(None, 10), Err(Errors::MissingBidder));
}

#[test]
fn test_bid_rejects_negative_value() {
    assert_eq!(Bid::new(shared(alice()), -1), Err(Errors::NegativeBidValue(-1)));
}

#[test]
fn test_bid_shares_bidder() {
    let alice = Arc::new(alice());
    let first = Bid::new(Some(alice.clone()), 1).unwrap();
    let second = Bid::new(Some(alice.clone()), 2).unwrap();
    assert!(Arc::ptr_eq(first.bidder(), second.bidder()));
    assert_eq!(Arc::strong_count(&alice), 3);
}

#[test]
fn test_bidders_compare_by_identity_not_name() {
    let first = Bidder::new("Alice");
    let second = Bidder::new("Alice");
    assert_ne!(first, second);
    assert_eq!(first, first.clone());
    assert_eq!(alice(), Bidder::with_id(alice_id(), "Someone else"));
}
