/// Result of one applied roll, consumed by the notification collaborator
/// and the win check. Closed so the presentation layer matches exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Landed on an ordinary cell.
    Plain { to: u8 },
    /// Landed on a ladder entry and climbed.
    Ladder { from: u8, to: u8 },
    /// Landed on a snake entry and fell.
    Snake { from: u8, to: u8 },
    /// The roll would have carried past the last cell; position unchanged.
    Overshoot { at: u8 },
    /// Reached the last cell exactly.
    Win { player: usize },
}

/// Banner classification for transient notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl MoveOutcome {
    /// Banner severity, or `None` when the move warrants no banner.
    pub fn severity(&self) -> Option<Severity> {
        match self {
            MoveOutcome::Plain { .. } => None,
            MoveOutcome::Ladder { .. } => Some(Severity::Success),
            MoveOutcome::Snake { .. } => Some(Severity::Error),
            MoveOutcome::Overshoot { .. } => Some(Severity::Warning),
            MoveOutcome::Win { .. } => Some(Severity::Info),
        }
    }

    /// Banner text for the player who rolled, or `None` for plain moves.
    pub fn banner(&self, roller: &str) -> Option<String> {
        match self {
            MoveOutcome::Plain { .. } => None,
            MoveOutcome::Ladder { from, to } => Some(format!(
                "{roller} climbed a ladder from {from} to {to}!"
            )),
            MoveOutcome::Snake { from, to } => Some(format!(
                "{roller} was bitten by a snake and fell from {from} to {to}!"
            )),
            MoveOutcome::Overshoot { .. } => {
                Some(format!("{roller} needs exact roll to reach 100!"))
            }
            MoveOutcome::Win { .. } => Some(format!("{roller} wins the game!")),
        }
    }
}
