#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use lot_auction::domain::{Auction, Bidder, BidderId, Bid};
use std::str::FromStr;
use std::sync::Arc;
// See https://users.rust-lang.org/t/sharing-code-and-macros-in-tests-directory/3098/7

pub fn sample_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2019, 10, 3, 9, 0, 0).unwrap()
}

pub fn sample_bid_time() -> DateTime<Utc> {
    sample_time() + Duration::minutes(5)
}

pub fn alice_id() -> BidderId {
    BidderId::from_str("7d1d6a4e-3c3e-4d5b-9f3a-2a1f0c6b8e01").unwrap()
}

pub fn bob_id() -> BidderId {
    BidderId::from_str("0b5e8c52-91a4-4f6e-a0d2-5c7e3b9f1d02").unwrap()
}

pub fn alice() -> Bidder {
    Bidder::with_id(alice_id(), "Alice")
}

pub fn bob() -> Bidder {
    Bidder::with_id(bob_id(), "Bob")
}

pub fn shared(bidder: Bidder) -> Option<Arc<Bidder>> {
    Some(Arc::new(bidder))
}

pub fn bid(bidder: Bidder, value: i64) -> Bid {
    Bid::new(shared(bidder), value).unwrap()
}

pub fn auction_with_lots(descriptions: &[&str]) -> Auction {
    let mut auction = Auction::new();
    for description in descriptions {
        assert!(auction.enter_lot(Some(description)));
    }
    auction
}
