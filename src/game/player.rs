/// Fixed token palette, one color per seat in seating order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerColor {
    Red,
    Yellow,
    Blue,
    Green,
}

impl PlayerColor {
    pub const SEATS: [PlayerColor; 4] = [
        PlayerColor::Red,
        PlayerColor::Yellow,
        PlayerColor::Blue,
        PlayerColor::Green,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PlayerColor::Red => "Red",
            PlayerColor::Yellow => "Yellow",
            PlayerColor::Blue => "Blue",
            PlayerColor::Green => "Green",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: usize,
    pub name: &'static str,
    pub color: PlayerColor,
    pub position: u8,
}

impl Player {
    /// A player at the given seat, on the start cell.
    pub fn at_seat(id: usize) -> Self {
        let color = PlayerColor::SEATS[id];
        Player {
            id,
            name: color.name(),
            color,
            position: 1,
        }
    }
}
