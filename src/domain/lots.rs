// src/domain/lots.rs
use log::debug;
use serde::{Deserialize, Serialize};
use super::bids::Bid;
use super::core::{AmountValue, LotNumber};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "$type")]
pub enum BidOutcome {
    Accepted,
    /// The bid did not beat `highest`; ties lose.
    Rejected { highest: AmountValue },
}

impl BidOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, BidOutcome::Accepted)
    }
}

/// An item for sale together with its current highest bid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lot {
    number: LotNumber,
    description: String,
    #[serde(rename = "highestBid")]
    highest_bid: Option<Bid>,
}

impl Lot {
    pub fn new(number: LotNumber, description: impl Into<String>) -> Self {
        Lot {
            number,
            description: description.into(),
            highest_bid: None,
        }
    }

    pub fn number(&self) -> LotNumber {
        self.number
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// `None` means nobody has bid yet, i.e. the lot is unsold.
    pub fn highest_bid(&self) -> Option<&Bid> {
        self.highest_bid.as_ref()
    }

    pub fn has_bids(&self) -> bool {
        self.highest_bid.is_some()
    }

    /// Replaces the highest bid when `candidate` is strictly greater.
    pub fn try_bid_for(&mut self, candidate: Bid) -> BidOutcome {
        match &self.highest_bid {
            Some(highest) if candidate.value() <= highest.value() => {
                debug!(
                    "Lot {}: bid of {} by {} does not beat {}",
                    self.number,
                    candidate.value(),
                    candidate.bidder(),
                    highest.value()
                );
                BidOutcome::Rejected { highest: highest.value() }
            }
            _ => {
                debug!(
                    "Lot {}: new highest bid of {} by {}",
                    self.number,
                    candidate.value(),
                    candidate.bidder()
                );
                self.highest_bid = Some(candidate);
                BidOutcome::Accepted
            }
        }
    }

    pub fn bid_for(&mut self, candidate: Bid) -> bool {
        self.try_bid_for(candidate).is_accepted()
    }
}
