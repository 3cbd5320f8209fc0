use chrono::Utc;
use log::info;
use lot_auction::domain::{replay, Auction, Bidder, Command, CommandSuccess};
use lot_auction::persistence::json_file::read_commands;
use lot_auction::report::LotListing;
use std::env;
use std::error::Error;
use std::path::PathBuf;

struct Settings {
    commands_file: Option<PathBuf>,
}

impl Settings {
    fn from_args() -> Self {
        Settings {
            commands_file: env::args_os().nth(1).map(PathBuf::from),
        }
    }
}

fn init_logging() {
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "lot_auction=info");
    }
    env_logger::init();
}

// A tied bid that loses, then a raise that wins; the clock stays unsold.
fn demo_commands() -> Vec<Command> {
    let now = Utc::now();
    let alice = Bidder::new("Alice");
    let bob = Bidder::new("Bob");
    vec![
        Command::EnterLot { timestamp: now, description: Some("Vase".to_string()) },
        Command::EnterLot { timestamp: now, description: Some("Clock".to_string()) },
        Command::PlaceBid { timestamp: now, lot: 1, bidder: Some(alice), value: 50 },
        Command::PlaceBid { timestamp: now, lot: 1, bidder: Some(bob.clone()), value: 50 },
        Command::PlaceBid { timestamp: now, lot: 1, bidder: Some(bob), value: 60 },
        Command::Close { timestamp: now },
    ]
}

fn print_success(success: &CommandSuccess) {
    match success {
        CommandSuccess::LotEntered { lot, .. } => println!("Entered lot {}", lot),
        CommandSuccess::BidPlaced { report, .. } => print!("{}", report),
        CommandSuccess::LotRemoved { lot, .. } => println!("Removed lot {}", lot),
        CommandSuccess::AuctionClosed { results, .. } => print!("{}", results),
        CommandSuccess::CarriedForward { lots, .. } => {
            println!("Carried forward {} unsold lot(s)", lots.len())
        }
    }
    println!();
}

fn print_auction(auction: &Auction) {
    print!("{}", LotListing::new(auction));
    if !auction.is_open() {
        let unsold = auction.no_bids();
        println!("{} lot(s) did not sell", unsold.len());
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();
    let settings = Settings::from_args();

    let commands = match &settings.commands_file {
        Some(path) => {
            info!("Replaying commands from {}", path.display());
            read_commands(path)?
        }
        None => {
            info!("No commands file given, running the demo auction");
            demo_commands()
        }
    };

    let (auction, results) = replay(commands);
    for result in &results {
        match result {
            Ok(success) => print_success(success),
            Err(err) => println!("Command failed: {}\n", err),
        }
    }
    print_auction(&auction);

    Ok(())
}
