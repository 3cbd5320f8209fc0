// src/domain/mod.rs
pub mod auctions;
pub mod bids;
pub mod commands;
pub mod core;
pub mod lots;

use log::warn;
use std::sync::Arc;
use thiserror::Error;

pub use self::auctions::*;
pub use self::bids::*;
pub use self::commands::*;
pub use self::core::*;
pub use self::lots::*;

use crate::report::BidReport;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandleError {
    #[error("Auction error: {0}")]
    AuctionError(#[from] Errors),
}

/// Applies `command` to `auction`. On error the auction is left as it was.
pub fn handle(command: Command, auction: &mut Auction) -> Result<CommandSuccess, HandleError> {
    match command {
        Command::EnterLot { timestamp, description } => {
            let lot = auction.try_enter_lot(description.as_deref())?;
            Ok(CommandSuccess::LotEntered { timestamp, lot })
        }

        Command::PlaceBid { timestamp, lot, bidder, value } => {
            let bidder = bidder.map(Arc::new);
            let name = bidder.as_ref().map(|b| b.name().to_string()).unwrap_or_default();
            let outcome = auction.try_bid_for(lot, bidder, value)?;
            let report = BidReport { lot, bidder: name, value, outcome };
            Ok(CommandSuccess::BidPlaced { timestamp, report })
        }

        Command::RemoveLot { timestamp, lot } => {
            auction.try_remove_lot(lot)?;
            Ok(CommandSuccess::LotRemoved { timestamp, lot })
        }

        Command::Close { timestamp } => {
            let results = auction.try_close()?;
            Ok(CommandSuccess::AuctionClosed { timestamp, results })
        }

        // Unsold lots are only final once the auction has closed.
        Command::CarryForward { timestamp } => {
            if auction.is_open() {
                return Err(Errors::AuctionStillOpen.into());
            }
            let prior = std::mem::take(auction);
            *auction = Auction::successor(Some(prior));
            let lots = auction.lots().iter().map(Lot::number).collect();
            Ok(CommandSuccess::CarriedForward { timestamp, lots })
        }
    }
}

/// Applies `commands` in order to a fresh auction. A rejected command leaves
/// the auction untouched and replay continues with the next one.
pub fn replay<I>(commands: I) -> (Auction, Vec<Result<CommandSuccess, HandleError>>)
where
    I: IntoIterator<Item = Command>,
{
    let mut auction = Auction::new();
    let results = commands
        .into_iter()
        .map(|command| {
            let result = handle(command, &mut auction);
            if let Err(err) = &result {
                warn!("Command rejected: {}", err);
            }
            result
        })
        .collect();

    (auction, results)
}
