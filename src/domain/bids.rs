// src/domain/bids.rs
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use super::core::{AmountValue, Bidder, Errors};

/// An offer of `value` made by a bidder. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedBid")]
pub struct Bid {
    bidder: Arc<Bidder>,
    value: AmountValue,
}

impl Bid {
    /// Rejects a missing bidder or a negative value, so every constructed
    /// bid compares totally against any other.
    pub fn new(bidder: Option<Arc<Bidder>>, value: AmountValue) -> Result<Self, Errors> {
        let bidder = bidder.ok_or(Errors::MissingBidder)?;
        if value < 0 {
            return Err(Errors::NegativeBidValue(value));
        }
        Ok(Bid { bidder, value })
    }

    pub fn bidder(&self) -> &Arc<Bidder> {
        &self.bidder
    }

    pub fn value(&self) -> AmountValue {
        self.value
    }
}

#[derive(Deserialize)]
struct UncheckedBid {
    bidder: Arc<Bidder>,
    value: AmountValue,
}

impl TryFrom<UncheckedBid> for Bid {
    type Error = Errors;

    fn try_from(raw: UncheckedBid) -> Result<Self, Self::Error> {
        Bid::new(Some(raw.bidder), raw.value)
    }
}
