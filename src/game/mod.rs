//! Game state and multi-game coordination

mod session;
mod state;

pub use session::{EndReason, Session, SessionError, SessionState, SessionSummary};
pub use state::GameState;
