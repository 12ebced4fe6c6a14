//! Classic Community Chest and Chance decks.

use super::card::Card;
use crate::board::TileId;

pub fn chest() -> Vec<Card> {
    vec![
        Card::move_to("Advance to GO (Collect $200)", TileId::GO),
        Card::collect("Bank error in your favor. Collect $200", 200),
        Card::pay("Doctor's fee. Pay $50", 50),
        Card::collect("From sale of stock you get $50", 50),
        Card::escape("Get Out of Jail Free"),
        Card::send_to_jail("Go to Jail. Go directly to jail, do not pass GO"),
        Card::collect("Holiday fund matures. Receive $100", 100),
        Card::collect("Income tax refund. Collect $20", 20),
        Card::collect("Life insurance matures. Collect $100", 100),
        Card::pay("Pay hospital fees of $100", 100),
        Card::pay("Pay school fees of $150", 150),
        Card::collect("Receive $25 consultancy fee", 25),
        Card::collect("You have won second prize in a beauty contest. Collect $10", 10),
        Card::collect("You inherit $100", 100),
    ]
}

pub fn chance() -> Vec<Card> {
    vec![
        Card::move_to("Advance to Boardwalk", TileId::new(39)),
        Card::move_to("Advance to GO (Collect $200)", TileId::GO),
        Card::move_to("Advance to Illinois Avenue", TileId::new(24)),
        Card::move_to("Advance to St. Charles Place", TileId::new(11)),
        Card::move_to("Take a trip to Reading Railroad", TileId::new(5)),
        Card::collect("Bank pays you dividend of $50", 50),
        Card::escape("Get Out of Jail Free"),
        Card::move_back("Go Back 3 Spaces", 3),
        Card::send_to_jail("Go to Jail. Go directly to jail, do not pass GO"),
        Card::pay("Speeding fine $15", 15),
        Card::collect("Your building loan matures. Collect $150", 150),
        Card::pay("You have been elected Chairman of the Board. Pay $50", 50),
    ]
}
