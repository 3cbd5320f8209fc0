// src/domain/core.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

pub type LotNumber = u32;
pub type AmountValue = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BidderId(Uuid);

impl BidderId {
    pub fn new() -> Self {
        BidderId(Uuid::new_v4())
    }
}

impl Default for BidderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BidderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BidderId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(BidderId)
            .map_err(|e| format!("Invalid bidder id {}: {}", s, e))
    }
}

/// A party that may place bids.
///
/// Identity is carried by `id`; two bidders with the same name are still
/// different bidders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bidder {
    id: BidderId,
    name: String,
}

impl Bidder {
    pub fn new(name: impl Into<String>) -> Self {
        Bidder {
            id: BidderId::new(),
            name: name.into(),
        }
    }

    pub fn with_id(id: BidderId, name: impl Into<String>) -> Self {
        Bidder { id, name: name.into() }
    }

    pub fn id(&self) -> BidderId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Bidder {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Bidder {}

impl Hash for Bidder {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Bidder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Errors {
    #[error("Auction is closed")]
    AuctionClosed,

    #[error("Auction is already closed")]
    AlreadyClosed,

    #[error("Auction is still open")]
    AuctionStillOpen,

    #[error("Lot description is missing")]
    MissingDescription,

    #[error("Bidder is missing")]
    MissingBidder,

    #[error("Bid value must not be negative: {0}")]
    NegativeBidValue(AmountValue),

    #[error("Unknown lot: {0}")]
    UnknownLot(LotNumber),

    #[error("Lot has bids and cannot be removed: {0}")]
    LotHasBids(LotNumber),
}
