use lot_auction::domain::{Auction, BidOutcome};
use lot_auction::report::{BidReport, FinalResults, LotListing, LotResult, Sale};
#[path="utils/mod.rs"] mod utils;
use utils::*;

#[test]
fn test_listing_of_empty_auction() {
    let auction = Auction::new();
    assert_eq!(LotListing::new(&auction).to_string(), "There are no lots\n");
}

#[test]
fn test_listing_shows_lots_in_entry_order() {
    let mut auction = auction_with_lots(&["Vase", "Clock"]);
    assert!(auction.bid_for(1, shared(alice()), 50));

    let expected = "1: Vase\n    Highest bid: 50 by Alice\n2: Clock\n";
    assert_eq!(LotListing::new(&auction).to_string(), expected);
}

#[test]
fn test_bid_report_success() {
    let report = BidReport {
        lot: 1,
        bidder: "Bob".to_string(),
        value: 60,
        outcome: BidOutcome::Accepted,
    };
    assert_eq!(
        report.to_string(),
        "Bid was successful\nLot Number: 1\nBidder: Bob\nValue: 60\n"
    );
}

#[test]
fn test_bid_report_failure() {
    let report = BidReport {
        lot: 1,
        bidder: "Bob".to_string(),
        value: 50,
        outcome: BidOutcome::Rejected { highest: 50 },
    };
    assert_eq!(report.to_string(), "Bid was not successful\nLot Number: 1\nValue: 50\n");
}

#[test]
fn test_final_results_text() {
    let mut auction = auction_with_lots(&["Vase", "Clock"]);
    assert!(auction.bid_for(2, shared(bob()), 25));
    let results = auction.try_close().unwrap();

    let expected = "Lot Number: 1\nDescription: Vase\nItem did not sell\n\
                    Lot Number: 2\nDescription: Clock\nHighest bidder: Bob\nBid value: 25\n";
    assert_eq!(results.to_string(), expected);
}

#[test]
fn test_final_results_split_sold_and_unsold() {
    let mut auction = auction_with_lots(&["Vase", "Clock", "Rug"]);
    assert!(auction.bid_for(3, shared(alice()), 5));
    let results = FinalResults::from_lots(auction.lots());

    let sold: Vec<u32> = results.sold().map(|r| r.number).collect();
    let unsold: Vec<u32> = results.unsold().map(|r| r.number).collect();
    assert_eq!(sold, vec![3]);
    assert_eq!(unsold, vec![1, 2]);
}

#[test]
fn test_lot_result_json_shape() {
    let result = LotResult {
        number: 2,
        description: "Clock".to_string(),
        sale: Sale::Sold { bidder: "Bob".to_string(), value: 25 },
    };
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["number"], 2);
    assert_eq!(json["sale"]["$type"], "Sold");
    assert_eq!(json["sale"]["bidder"], "Bob");
    assert_eq!(json["sale"]["value"], 25);
}
