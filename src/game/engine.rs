use crate::game::{BoardTopology, GameError, MoveOutcome, Player, board::LAST_CELL};

/// Game lifecycle. Rolls are only accepted while `InProgress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    Finished,
}

/// The single owner of all mutable game state. Every transition funnels
/// through `configure`, `start`, `apply_roll` and `reset`, so each one is
/// a pure function of `(state, input)`.
#[derive(Debug, Clone)]
pub struct GameState {
    board: BoardTopology,
    players: Vec<Player>,
    current: usize,
    last_roll: Option<u8>,
    phase: Phase,
}

impl GameState {
    pub const MIN_PLAYERS: usize = 2;
    pub const MAX_PLAYERS: usize = 4;

    pub fn new() -> Self {
        GameState {
            board: BoardTopology::standard(),
            players: Vec::new(),
            current: 0,
            last_roll: None,
            phase: Phase::NotStarted,
        }
    }

    /// Replaces the roster with `count` players on the start cell.
    pub fn configure(&mut self, count: usize) -> Result<(), GameError> {
        if self.phase != Phase::NotStarted {
            return Err(GameError::InvalidState {
                op: "configure",
                phase: self.phase,
            });
        }
        if !(Self::MIN_PLAYERS..=Self::MAX_PLAYERS).contains(&count) {
            return Err(GameError::InvalidInput {
                what: "player count",
                value: count as u32,
            });
        }
        self.players = (0..count).map(Player::at_seat).collect();
        self.current = 0;
        self.last_roll = None;
        Ok(())
    }

    /// Begins play with the configured roster.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::NotStarted || self.players.is_empty() {
            return Err(GameError::InvalidState {
                op: "start",
                phase: self.phase,
            });
        }
        self.phase = Phase::InProgress;
        Ok(())
    }

    /// Applies one completed roll for the current player.
    ///
    /// Overshooting the last cell wastes the roll. Landing on a jump entry
    /// relocates once. Reaching the last cell exactly finishes the game
    /// without advancing the turn; every other outcome passes the turn on.
    pub fn apply_roll(&mut self, roll: u8) -> Result<MoveOutcome, GameError> {
        if !(1..=6).contains(&roll) {
            return Err(GameError::InvalidInput {
                what: "roll",
                value: roll as u32,
            });
        }
        if self.phase != Phase::InProgress {
            return Err(GameError::InvalidState {
                op: "apply_roll",
                phase: self.phase,
            });
        }

        self.last_roll = Some(roll);
        let tentative = self.players[self.current].position as u16 + roll as u16;

        let outcome = if tentative > LAST_CELL as u16 {
            MoveOutcome::Overshoot {
                at: self.players[self.current].position,
            }
        } else {
            let landed = tentative as u8;
            let resolved = self.board.resolve_jump(landed);
            self.players[self.current].position = resolved;

            if resolved == LAST_CELL {
                self.phase = Phase::Finished;
                return Ok(MoveOutcome::Win {
                    player: self.current,
                });
            }
            if resolved > landed {
                MoveOutcome::Ladder {
                    from: landed,
                    to: resolved,
                }
            } else if resolved < landed {
                MoveOutcome::Snake {
                    from: landed,
                    to: resolved,
                }
            } else {
                MoveOutcome::Plain { to: landed }
            }
        };

        self.current = (self.current + 1) % self.players.len();
        Ok(outcome)
    }

    /// Returns to `NotStarted` with the roster preserved: positions back to
    /// the start cell, turn back to seat 0.
    pub fn reset(&mut self) {
        for player in &mut self.players {
            player.position = 1;
        }
        self.current = 0;
        self.last_roll = None;
        self.phase = Phase::NotStarted;
    }

    pub fn board(&self) -> &BoardTopology {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current)
    }

    pub fn last_roll(&self) -> Option<u8> {
        self.last_roll
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn winner(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.position == LAST_CELL)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_progress(count: usize) -> GameState {
        let mut state = GameState::new();
        state.configure(count).unwrap();
        state.start().unwrap();
        state
    }

    #[test]
    fn configure_rejects_bad_counts() {
        let mut state = GameState::new();
        for count in [0, 1, 5, 10] {
            assert_eq!(
                state.configure(count),
                Err(GameError::InvalidInput {
                    what: "player count",
                    value: count as u32
                })
            );
        }
        assert!(state.players().is_empty());
    }

    #[test]
    fn configure_seats_players_on_start_cell() {
        let mut state = GameState::new();
        state.configure(4).unwrap();
        assert_eq!(state.players().len(), 4);
        assert_eq!(state.current_index(), 0);
        assert!(state.players().iter().all(|p| p.position == 1));
        assert_eq!(state.players()[0].name, "Red");
        assert_eq!(state.players()[3].name, "Green");
    }

    #[test]
    fn configure_rejected_after_start() {
        let mut state = in_progress(2);
        assert_eq!(
            state.configure(3),
            Err(GameError::InvalidState {
                op: "configure",
                phase: Phase::InProgress
            })
        );
    }

    #[test]
    fn start_needs_a_roster() {
        let mut state = GameState::new();
        assert!(state.start().is_err());
    }

    #[test]
    fn roll_rejected_before_start() {
        let mut state = GameState::new();
        state.configure(2).unwrap();
        assert_eq!(
            state.apply_roll(3),
            Err(GameError::InvalidState {
                op: "apply_roll",
                phase: Phase::NotStarted
            })
        );
    }

    #[test]
    fn roll_value_out_of_domain_fails_loudly() {
        let mut state = in_progress(2);
        for roll in [0, 7, 200] {
            assert_eq!(
                state.apply_roll(roll),
                Err(GameError::InvalidInput {
                    what: "roll",
                    value: roll as u32
                })
            );
        }
        // State untouched by rejected input.
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.players()[0].position, 1);
    }

    #[test]
    fn ladder_climb_from_start() {
        // Scenario A: seat 0 on cell 1 rolls 3, lands on 4, ladder to 14.
        let mut state = in_progress(2);
        let outcome = state.apply_roll(3).unwrap();
        assert_eq!(outcome, MoveOutcome::Ladder { from: 4, to: 14 });
        assert_eq!(state.players()[0].position, 14);
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn snake_bite() {
        // Scenario B: landing on 32 slides down to 10.
        let mut state = in_progress(2);
        state.players[0].position = 29;
        let outcome = state.apply_roll(3).unwrap();
        assert_eq!(outcome, MoveOutcome::Snake { from: 32, to: 10 });
        assert_eq!(state.players()[0].position, 10);
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn overshoot_wastes_the_roll() {
        // Scenario C: 98 + 5 exceeds 100; position holds, turn passes.
        let mut state = in_progress(2);
        state.players[0].position = 98;
        let outcome = state.apply_roll(5).unwrap();
        assert_eq!(outcome, MoveOutcome::Overshoot { at: 98 });
        assert_eq!(state.players()[0].position, 98);
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn exact_landing_wins() {
        // Scenario D: 94 + 6 lands on 100 exactly.
        let mut state = in_progress(2);
        state.players[0].position = 94;
        let outcome = state.apply_roll(6).unwrap();
        assert_eq!(outcome, MoveOutcome::Win { player: 0 });
        assert!(state.game_over());
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.winner().unwrap().id, 0);
        // No further rolls until reset.
        assert_eq!(
            state.apply_roll(1),
            Err(GameError::InvalidState {
                op: "apply_roll",
                phase: Phase::Finished
            })
        );
    }

    #[test]
    fn turn_advances_modulo_player_count() {
        let mut state = in_progress(3);
        // Park everyone mid-board so no roll below can win.
        for player in &mut state.players {
            player.position = 40;
        }
        for expected in [1, 2, 0, 1] {
            state.apply_roll(1).unwrap();
            assert_eq!(state.current_index(), expected);
        }
    }

    #[test]
    fn positions_stay_on_the_board() {
        let mut state = in_progress(2);
        for roll in [6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 5, 5, 3, 3, 1, 1] {
            if state.game_over() {
                break;
            }
            state.apply_roll(roll).unwrap();
            for player in state.players() {
                assert!((1..=100).contains(&player.position));
            }
        }
    }

    #[test]
    fn reset_preserves_roster() {
        let mut state = in_progress(3);
        state.apply_roll(3).unwrap();
        state.apply_roll(5).unwrap();
        let names: Vec<_> = state.players().iter().map(|p| p.name).collect();
        let colors: Vec<_> = state.players().iter().map(|p| p.color).collect();

        state.reset();

        assert_eq!(state.phase(), Phase::NotStarted);
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.last_roll(), None);
        assert!(state.players().iter().all(|p| p.position == 1));
        assert_eq!(
            state.players().iter().map(|p| p.name).collect::<Vec<_>>(),
            names
        );
        assert_eq!(
            state.players().iter().map(|p| p.color).collect::<Vec<_>>(),
            colors
        );
        // Reset leads back to NotStarted, so play can restart directly.
        state.start().unwrap();
        assert_eq!(state.phase(), Phase::InProgress);
    }

    #[test]
    fn reset_after_win_reopens_play() {
        let mut state = in_progress(2);
        state.players[0].position = 94;
        state.apply_roll(6).unwrap();
        assert!(state.game_over());

        state.reset();
        state.start().unwrap();
        let outcome = state.apply_roll(3).unwrap();
        assert_eq!(outcome, MoveOutcome::Ladder { from: 4, to: 14 });
    }
}
