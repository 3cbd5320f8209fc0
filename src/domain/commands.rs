// src/domain/commands.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::report::{BidReport, FinalResults};
use super::core::{AmountValue, Bidder, LotNumber};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "$type")]
pub enum Command {
    #[serde(rename = "EnterLot")]
    EnterLot {
        #[serde(rename = "at")]
        timestamp: DateTime<Utc>,
        description: Option<String>,
    },

    #[serde(rename = "PlaceBid")]
    PlaceBid {
        #[serde(rename = "at")]
        timestamp: DateTime<Utc>,
        lot: LotNumber,
        bidder: Option<Bidder>,
        value: AmountValue,
    },

    #[serde(rename = "RemoveLot")]
    RemoveLot {
        #[serde(rename = "at")]
        timestamp: DateTime<Utc>,
        lot: LotNumber,
    },

    #[serde(rename = "Close")]
    Close {
        #[serde(rename = "at")]
        timestamp: DateTime<Utc>,
    },

    #[serde(rename = "CarryForward")]
    CarryForward {
        #[serde(rename = "at")]
        timestamp: DateTime<Utc>,
    },
}

impl Command {
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Command::EnterLot { timestamp, .. }
            | Command::PlaceBid { timestamp, .. }
            | Command::RemoveLot { timestamp, .. }
            | Command::Close { timestamp }
            | Command::CarryForward { timestamp } => *timestamp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "$type")]
pub enum CommandSuccess {
    #[serde(rename = "LotEntered")]
    LotEntered {
        #[serde(rename = "at")]
        timestamp: DateTime<Utc>,
        lot: LotNumber,
    },

    #[serde(rename = "BidPlaced")]
    BidPlaced {
        #[serde(rename = "at")]
        timestamp: DateTime<Utc>,
        report: BidReport,
    },

    #[serde(rename = "LotRemoved")]
    LotRemoved {
        #[serde(rename = "at")]
        timestamp: DateTime<Utc>,
        lot: LotNumber,
    },

    #[serde(rename = "AuctionClosed")]
    AuctionClosed {
        #[serde(rename = "at")]
        timestamp: DateTime<Utc>,
        results: FinalResults,
    },

    #[serde(rename = "CarriedForward")]
    CarriedForward {
        #[serde(rename = "at")]
        timestamp: DateTime<Utc>,
        lots: Vec<LotNumber>,
    },
}
