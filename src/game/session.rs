use tracing::{info, warn};

use crate::game::{GameError, GameState, MoveOutcome, Phase, Player};

/// Points credited for finishing a game.
pub const WIN_POINTS: u32 = 100;

/// Starting score for a fresh session.
pub const INITIAL_SCORE: u32 = 1000;

/// Running score bookkeeping surfaced next to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    score: u32,
    wins: u32,
    losses: u32,
    ties: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Scoreboard {
            score: INITIAL_SCORE,
            wins: 0,
            losses: 0,
            ties: 0,
        }
    }

    pub fn credit_win(&mut self, points: u32) {
        self.score += points;
        self.wins += 1;
    }

    pub fn credit_loss(&mut self, points: u32) {
        self.score = self.score.saturating_sub(points);
        self.losses += 1;
    }

    pub fn credit_tie(&mut self) {
        self.ties += 1;
    }

    pub fn reset(&mut self) {
        *self = Scoreboard::new();
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn losses(&self) -> u32 {
        self.losses
    }

    pub fn ties(&self) -> u32 {
        self.ties
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

/// Orchestrates the game lifecycle on behalf of the presentation layer:
/// configure, start, one roll at a time, reset.
///
/// Exactly one roll may be in flight: `begin_roll` arms a guard when the
/// dice animation starts and repeated stimuli are ignored (never queued)
/// until `deliver_roll` releases it.
pub struct Session {
    state: GameState,
    scoreboard: Scoreboard,
    roll_in_flight: bool,
}

impl Session {
    pub fn new() -> Self {
        Session {
            state: GameState::new(),
            scoreboard: Scoreboard::new(),
            roll_in_flight: false,
        }
    }

    pub fn configure(&mut self, count: usize) -> Result<(), GameError> {
        self.state.configure(count)?;
        info!(count, "roster configured");
        Ok(())
    }

    pub fn start(&mut self) -> Result<(), GameError> {
        self.state.start()?;
        info!(players = self.state.players().len(), "game started");
        Ok(())
    }

    /// Arms the roll guard. Returns `false` when the stimulus must be
    /// ignored: a roll already pending, or the game not in progress.
    pub fn begin_roll(&mut self) -> bool {
        if self.roll_in_flight {
            warn!("roll requested while one is in flight; ignoring");
            return false;
        }
        if self.state.phase() != Phase::InProgress {
            warn!(phase = ?self.state.phase(), "roll requested outside play; ignoring");
            return false;
        }
        self.roll_in_flight = true;
        true
    }

    /// Delivers a completed roll to the engine and releases the guard.
    ///
    /// `Ok(None)` means the stimulus was ignored (no roll in flight, or the
    /// game ended meanwhile). A roll value outside 1..=6 is a collaborator
    /// bug and comes back as `Err`.
    pub fn deliver_roll(&mut self, value: u8) -> Result<Option<MoveOutcome>, GameError> {
        if !self.roll_in_flight {
            warn!(value, "roll delivered with none in flight; ignoring");
            return Ok(None);
        }
        self.roll_in_flight = false;

        match self.state.apply_roll(value) {
            Ok(outcome) => {
                info!(value, ?outcome, "roll applied");
                if let MoveOutcome::Win { .. } = outcome {
                    self.scoreboard.credit_win(WIN_POINTS);
                }
                Ok(Some(outcome))
            }
            Err(GameError::InvalidState { phase, .. }) => {
                warn!(value, ?phase, "roll arrived in wrong phase; ignoring");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Back to idle: positions and scoreboard cleared, roster preserved.
    pub fn reset(&mut self) {
        self.state.reset();
        self.scoreboard.reset();
        self.roll_in_flight = false;
        info!("session reset");
    }

    /// Fresh game with the same roster.
    pub fn restart(&mut self) -> Result<(), GameError> {
        self.state.reset();
        self.scoreboard.reset();
        self.roll_in_flight = false;
        self.start()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn players(&self) -> &[Player] {
        self.state.players()
    }

    pub fn roll_in_flight(&self) -> bool {
        self.roll_in_flight
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing(count: usize) -> Session {
        let mut session = Session::new();
        session.configure(count).unwrap();
        session.start().unwrap();
        session
    }

    #[test]
    fn guard_blocks_overlapping_rolls() {
        let mut session = playing(2);
        assert!(session.begin_roll());
        // A second stimulus while the animation runs is dropped, not queued.
        assert!(!session.begin_roll());
        let outcome = session.deliver_roll(2).unwrap();
        assert!(outcome.is_some());
        assert!(!session.roll_in_flight());
        assert!(session.begin_roll());
    }

    #[test]
    fn delivery_without_begin_is_ignored() {
        let mut session = playing(2);
        assert_eq!(session.deliver_roll(4), Ok(None));
        assert_eq!(session.state().current_index(), 0);
    }

    #[test]
    fn rolls_rejected_before_start() {
        let mut session = Session::new();
        session.configure(2).unwrap();
        assert!(!session.begin_roll());
    }

    fn roll(session: &mut Session, value: u8) -> Option<MoveOutcome> {
        assert!(session.begin_roll());
        session.deliver_roll(value).unwrap()
    }

    #[test]
    fn win_freezes_rolls_and_credits_score() {
        let mut session = playing(2);
        // Seat 0 rides the ladders to 98 while seat 1 ambles along.
        for (p0, p1) in [(3, 2), (6, 2), (1, 2), (5, 2), (3, 2), (4, 2), (6, 2)] {
            roll(&mut session, p0);
            roll(&mut session, p1);
        }
        assert_eq!(session.players()[0].position, 98);

        let outcome = roll(&mut session, 2);
        assert_eq!(outcome, Some(MoveOutcome::Win { player: 0 }));
        assert_eq!(session.scoreboard().wins(), 1);
        assert_eq!(session.scoreboard().score(), INITIAL_SCORE + WIN_POINTS);

        // Dice stays disabled until reset.
        assert!(!session.begin_roll());
    }

    #[test]
    fn invalid_roll_value_surfaces() {
        let mut session = playing(2);
        assert!(session.begin_roll());
        assert_eq!(
            session.deliver_roll(7),
            Err(GameError::InvalidInput {
                what: "roll",
                value: 7
            })
        );
    }

    #[test]
    fn reset_clears_score_and_guard() {
        let mut session = playing(2);
        assert!(session.begin_roll());
        session.reset();
        assert!(!session.roll_in_flight());
        assert_eq!(session.scoreboard().score(), INITIAL_SCORE);
        assert_eq!(session.state().phase(), Phase::NotStarted);
        assert_eq!(session.players().len(), 2);
    }

    #[test]
    fn restart_keeps_roster_and_reopens_play() {
        let mut session = playing(3);
        session.begin_roll();
        session.deliver_roll(3).unwrap();
        session.restart().unwrap();
        assert_eq!(session.state().phase(), Phase::InProgress);
        assert_eq!(session.players().len(), 3);
        assert!(session.players().iter().all(|p| p.position == 1));
    }
}
