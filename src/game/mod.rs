pub mod board;
pub use board::BoardTopology;

mod player;
pub use player::Player;
pub use player::PlayerColor;

mod dice;
pub use dice::Die;

mod outcome;
pub use outcome::MoveOutcome;
pub use outcome::Severity;

mod engine;
pub use engine::GameState;
pub use engine::Phase;

mod session;
pub use session::Scoreboard;
pub use session::Session;

mod error;
pub use error::GameError;
