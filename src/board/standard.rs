//! The classic 40-tile board.

use super::tile::{Corner, Tile, TileId, TileKind};

fn corner(id: u8, corner: Corner, name: &str) -> Tile {
    Tile::new(TileId(id), TileKind::Corner(corner), name)
}

fn special(id: u8, kind: TileKind, name: &str) -> Tile {
    Tile::new(TileId(id), kind, name)
}

fn tax(id: u8, name: &str, fee: i64) -> Tile {
    Tile::new(TileId(id), TileKind::Tax, name).with_rent(&[fee])
}

fn street(id: u8, name: &str, color: &str, price: i64, rent: [i64; 6], build: i64) -> Tile {
    Tile::new(TileId(id), TileKind::Property, name)
        .with_price(price)
        .with_rent(&rent)
        .with_build_costs(build, build)
        .with_color(color)
}

fn railroad(id: u8, name: &str) -> Tile {
    Tile::new(TileId(id), TileKind::Railroad, name)
        .with_price(200)
        .with_rent(&[25])
}

fn utility(id: u8, name: &str) -> Tile {
    Tile::new(TileId(id), TileKind::Utility, name)
        .with_price(150)
        .with_rent(&[4])
}

/// Tiles of the classic layout, in board order.
pub fn tiles() -> Vec<Tile> {
    vec![
        corner(0, Corner::Go, "GO"),
        street(1, "Mediterranean Avenue", "#8B4513", 60, [2, 10, 30, 90, 160, 250], 50),
        special(2, TileKind::Chest, "Community Chest"),
        street(3, "Baltic Avenue", "#8B4513", 60, [4, 20, 60, 180, 320, 450], 50),
        tax(4, "Income Tax", 200),
        railroad(5, "Reading Railroad"),
        street(6, "Oriental Avenue", "#87CEEB", 100, [6, 30, 90, 270, 400, 550], 50),
        special(7, TileKind::Chance, "Chance"),
        street(8, "Vermont Avenue", "#87CEEB", 100, [6, 30, 90, 270, 400, 550], 50),
        street(9, "Connecticut Avenue", "#87CEEB", 120, [8, 40, 100, 300, 450, 600], 50),
        corner(10, Corner::Jail, "Jail"),
        street(11, "St. Charles Place", "#DA70D6", 140, [10, 50, 150, 450, 625, 750], 100),
        utility(12, "Electric Company"),
        street(13, "States Avenue", "#DA70D6", 140, [10, 50, 150, 450, 625, 750], 100),
        street(14, "Virginia Avenue", "#DA70D6", 160, [12, 60, 180, 500, 700, 900], 100),
        railroad(15, "Pennsylvania Railroad"),
        street(16, "St. James Place", "#FFA500", 180, [14, 70, 200, 550, 750, 950], 100),
        special(17, TileKind::Chest, "Community Chest"),
        street(18, "Tennessee Avenue", "#FFA500", 180, [14, 70, 200, 550, 750, 950], 100),
        street(19, "New York Avenue", "#FFA500", 200, [16, 80, 220, 600, 800, 1000], 100),
        corner(20, Corner::FreeParking, "Free Parking"),
        street(21, "Kentucky Avenue", "#FF6347", 220, [18, 90, 250, 700, 875, 1050], 150),
        special(22, TileKind::Chance, "Chance"),
        street(23, "Indiana Avenue", "#FF6347", 220, [18, 90, 250, 700, 875, 1050], 150),
        street(24, "Illinois Avenue", "#FF6347", 240, [20, 100, 300, 750, 925, 1100], 150),
        railroad(25, "B&O Railroad"),
        street(26, "Atlantic Avenue", "#FFD700", 260, [22, 110, 330, 800, 975, 1150], 150),
        street(27, "Ventnor Avenue", "#FFD700", 260, [22, 110, 330, 800, 975, 1150], 150),
        utility(28, "Water Works"),
        street(29, "Marvin Gardens", "#FFD700", 280, [24, 120, 360, 850, 1025, 1200], 150),
        corner(30, Corner::GoToJail, "Go To Jail"),
        street(31, "Pacific Avenue", "#228B22", 300, [26, 130, 390, 900, 1100, 1275], 200),
        street(32, "North Carolina Avenue", "#228B22", 300, [26, 130, 390, 900, 1100, 1275], 200),
        special(33, TileKind::Chest, "Community Chest"),
        street(34, "Pennsylvania Avenue", "#228B22", 320, [28, 150, 450, 1000, 1200, 1400], 200),
        railroad(35, "Short Line"),
        special(36, TileKind::Chance, "Chance"),
        street(37, "Park Place", "#1E90FF", 350, [35, 175, 500, 1100, 1300, 1500], 200),
        tax(38, "Luxury Tax", 100),
        street(39, "Boardwalk", "#1E90FF", 400, [50, 200, 600, 1400, 1700, 2000], 200),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_street_has_full_schedule() {
        for tile in tiles().iter().filter(|t| t.kind == TileKind::Property) {
            assert_eq!(tile.rent.len(), 6, "{}", tile.name);
            assert!(tile.price > 0);
            assert!(tile.house_cost > 0);
        }
    }

    #[test]
    fn test_tax_fees() {
        let tiles = tiles();
        assert_eq!(tiles[4].tax_fee(), 200);
        assert_eq!(tiles[38].tax_fee(), 100);
    }

    #[test]
    fn test_single_go_to_jail() {
        let count = tiles()
            .iter()
            .filter(|t| t.kind == TileKind::Corner(Corner::GoToJail))
            .count();
        assert_eq!(count, 1);
    }
}
