// src/report.rs
//! Read-only views over an auction for whatever presents it to people.
//! Nothing here prints; every view implements `Display`.
use serde::{Deserialize, Serialize};
use std::fmt;
use crate::domain::{AmountValue, Auction, BidOutcome, Lot, LotNumber};

/// The `showLots` listing: every lot in entry order.
pub struct LotListing<'a> {
    lots: &'a [Lot],
}

impl<'a> LotListing<'a> {
    pub fn new(auction: &'a Auction) -> Self {
        LotListing { lots: auction.lots() }
    }
}

impl fmt::Display for LotListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lots.is_empty() {
            return writeln!(f, "There are no lots");
        }
        for lot in self.lots {
            writeln!(f, "{}: {}", lot.number(), lot.description())?;
            if let Some(bid) = lot.highest_bid() {
                writeln!(f, "    Highest bid: {} by {}", bid.value(), bid.bidder().name())?;
            }
        }
        Ok(())
    }
}

/// The outcome of one well-formed bid attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidReport {
    pub lot: LotNumber,
    pub bidder: String,
    pub value: AmountValue,
    pub outcome: BidOutcome,
}

impl fmt::Display for BidReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.outcome.is_accepted() {
            writeln!(f, "Bid was successful")?;
            writeln!(f, "Lot Number: {}", self.lot)?;
            writeln!(f, "Bidder: {}", self.bidder)?;
        } else {
            writeln!(f, "Bid was not successful")?;
            writeln!(f, "Lot Number: {}", self.lot)?;
        }
        writeln!(f, "Value: {}", self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "$type")]
pub enum Sale {
    Sold { bidder: String, value: AmountValue },
    NotSold,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotResult {
    pub number: LotNumber,
    pub description: String,
    pub sale: Sale,
}

impl From<&Lot> for LotResult {
    fn from(lot: &Lot) -> Self {
        let sale = match lot.highest_bid() {
            Some(bid) => Sale::Sold {
                bidder: bid.bidder().name().to_string(),
                value: bid.value(),
            },
            None => Sale::NotSold,
        };
        LotResult {
            number: lot.number(),
            description: lot.description().to_string(),
            sale,
        }
    }
}

impl fmt::Display for LotResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Lot Number: {}", self.number)?;
        writeln!(f, "Description: {}", self.description)?;
        match &self.sale {
            Sale::Sold { bidder, value } => {
                writeln!(f, "Highest bidder: {}", bidder)?;
                writeln!(f, "Bid value: {}", value)
            }
            Sale::NotSold => writeln!(f, "Item did not sell"),
        }
    }
}

/// Per-lot results of a closed auction, in entry order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FinalResults(Vec<LotResult>);

impl FinalResults {
    pub fn from_lots(lots: &[Lot]) -> Self {
        FinalResults(lots.iter().map(LotResult::from).collect())
    }

    pub fn lots(&self) -> &[LotResult] {
        &self.0
    }

    pub fn sold(&self) -> impl Iterator<Item = &LotResult> {
        self.0.iter().filter(|result| matches!(result.sale, Sale::Sold { .. }))
    }

    pub fn unsold(&self) -> impl Iterator<Item = &LotResult> {
        self.0.iter().filter(|result| result.sale == Sale::NotSold)
    }
}

impl fmt::Display for FinalResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for result in &self.0 {
            write!(f, "{}", result)?;
        }
        Ok(())
    }
}
