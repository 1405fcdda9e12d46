use rand::random_range;

/// A single six-sided die. The turn engine takes roll values as plain
/// input, so randomness lives only at the UI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Die {
    value: u8,
}

impl Die {
    pub const SIDES: u8 = 6;

    pub fn roll() -> Self {
        Die {
            value: random_range(1..=Self::SIDES),
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }
}
