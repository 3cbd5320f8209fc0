// src/domain/auctions.rs
use log::{debug, info};
use serde::Serialize;
use std::sync::Arc;
use crate::report::FinalResults;
use super::bids::Bid;
use super::core::{AmountValue, Bidder, Errors, LotNumber};
use super::lots::{BidOutcome, Lot};

const FIRST_LOT_NUMBER: LotNumber = 1;

/// A single auction event: an ordered list of lots, open for entries and
/// bids until it is closed.
///
/// Lot numbers are handed out in entry order and never reused, even after a
/// lot has been removed. Closing is terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Auction {
    lots: Vec<Lot>,
    #[serde(rename = "nextLotNumber")]
    next_lot_number: LotNumber,
    #[serde(rename = "isOpen")]
    is_open: bool,
}

impl Default for Auction {
    fn default() -> Self {
        Auction {
            lots: Vec::new(),
            next_lot_number: FIRST_LOT_NUMBER,
            is_open: true,
        }
    }
}

impl Auction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a follow-on auction.
    ///
    /// Only a closed prior auction hands over its unsold lots and its lot
    /// numbering. An open (or missing) prior auction yields a fresh auction,
    /// since its unsold lots are not final yet.
    pub fn successor(prior: Option<Auction>) -> Self {
        match prior {
            Some(prior) if !prior.is_open => {
                let next_lot_number = prior.next_lot_number;
                let lots = prior.into_no_bids();
                info!(
                    "Carrying {} unsold lot(s) forward, next lot number {}",
                    lots.len(),
                    next_lot_number
                );
                Auction {
                    lots,
                    next_lot_number,
                    is_open: true,
                }
            }
            Some(_) => {
                debug!("Prior auction is still open, starting a fresh auction");
                Self::default()
            }
            None => Self::default(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn next_lot_number(&self) -> LotNumber {
        self.next_lot_number
    }

    /// All lots in entry order.
    pub fn lots(&self) -> &[Lot] {
        &self.lots
    }

    fn ensure_open(&self) -> Result<(), Errors> {
        if self.is_open {
            Ok(())
        } else {
            Err(Errors::AuctionClosed)
        }
    }

    pub fn try_enter_lot(&mut self, description: Option<&str>) -> Result<LotNumber, Errors> {
        self.ensure_open()?;
        let description = description.ok_or(Errors::MissingDescription)?;

        let number = self.next_lot_number;
        self.lots.push(Lot::new(number, description));
        self.next_lot_number += 1;
        debug!("Entered lot {}: {}", number, description);
        Ok(number)
    }

    pub fn enter_lot(&mut self, description: Option<&str>) -> bool {
        self.try_enter_lot(description).is_ok()
    }

    /// A losing bid is still `Ok`; only malformed requests are errors.
    pub fn try_bid_for(
        &mut self,
        lot_number: LotNumber,
        bidder: Option<Arc<Bidder>>,
        value: AmountValue,
    ) -> Result<BidOutcome, Errors> {
        self.ensure_open()?;
        let index = self.position(lot_number).ok_or(Errors::UnknownLot(lot_number))?;
        let candidate = Bid::new(bidder, value)?;
        Ok(self.lots[index].try_bid_for(candidate))
    }

    pub fn bid_for(&mut self, lot_number: LotNumber, bidder: Option<Arc<Bidder>>, value: AmountValue) -> bool {
        self.try_bid_for(lot_number, bidder, value).is_ok()
    }

    // Lots are not guaranteed to be sorted by number.
    fn position(&self, lot_number: LotNumber) -> Option<usize> {
        self.lots.iter().position(|lot| lot.number() == lot_number)
    }

    pub fn get_lot(&self, lot_number: LotNumber) -> Option<&Lot> {
        self.position(lot_number).map(|index| &self.lots[index])
    }

    /// Lots without a bid, in entry order.
    pub fn no_bids(&self) -> Vec<&Lot> {
        self.lots.iter().filter(|lot| !lot.has_bids()).collect()
    }

    fn into_no_bids(self) -> Vec<Lot> {
        self.lots.into_iter().filter(|lot| !lot.has_bids()).collect()
    }

    pub fn try_remove_lot(&mut self, lot_number: LotNumber) -> Result<Lot, Errors> {
        self.ensure_open()?;
        let index = self.position(lot_number).ok_or(Errors::UnknownLot(lot_number))?;
        if self.lots[index].has_bids() {
            return Err(Errors::LotHasBids(lot_number));
        }
        debug!("Removed lot {}", lot_number);
        Ok(self.lots.remove(index))
    }

    pub fn remove_lot(&mut self, lot_number: LotNumber) -> bool {
        self.try_remove_lot(lot_number).is_ok()
    }

    pub fn try_close(&mut self) -> Result<FinalResults, Errors> {
        if !self.is_open {
            return Err(Errors::AlreadyClosed);
        }
        self.is_open = false;
        let results = FinalResults::from_lots(&self.lots);
        info!(
            "Auction closed: {} lot(s), {} unsold",
            self.lots.len(),
            results.unsold().count()
        );
        Ok(results)
    }

    pub fn close(&mut self) -> bool {
        self.try_close().is_ok()
    }

    /// Final per-lot results; only available once the auction is closed.
    pub fn final_results(&self) -> Option<FinalResults> {
        if self.is_open {
            None
        } else {
            Some(FinalResults::from_lots(&self.lots))
        }
    }
}
