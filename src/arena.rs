//! Agent-vs-agent games
//!
//! Drives two [`Agent`]s against each other on one [`GameState`], for self-play and for
//! comparing configurations.

use tracing::{debug, info};

use crate::agent::{build_agent, Agent};
use crate::board::Stone;
use crate::config::EngineConfig;
use crate::error::GomokuResult;
use crate::game::GameState;

/// How one game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    /// `None` for a draw (board filled without five)
    pub winner: Option<Stone>,
    /// Stones placed
    pub moves: usize,
    /// Final position
    pub state: GameState,
}

/// Tally of a match, from the first configuration's point of view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchSummary {
    pub a_wins: usize,
    pub b_wins: usize,
    pub draws: usize,
}

impl MatchSummary {
    pub fn games(&self) -> usize {
        self.a_wins + self.b_wins + self.draws
    }
}

/// Play one game from the empty board, Black moving first.
///
/// Ends on five in a row, or when the side to move has no move (full board).
pub fn play_game(black: &mut dyn Agent, white: &mut dyn Agent) -> GameRecord {
    let mut state = GameState::new();
    let mut moves = 0;

    while state.winner().is_none() {
        let agent: &mut dyn Agent = match state.current_player() {
            Stone::White => &mut *white,
            _ => &mut *black,
        };
        let decision = agent.select_move(&mut state);
        let Some(pos) = decision.best_move else {
            break;
        };
        if !state.play(pos) {
            break;
        }
        moves += 1;
        debug!(ply = moves, agent = agent.name(), %pos, score = decision.score, "arena move");
    }

    GameRecord {
        winner: state.winner(),
        moves,
        state,
    }
}

/// Play `games` games between two configurations, swapping colours every game.
///
/// Configuration `a` takes Black in even-numbered games. A seeded configuration gets its
/// seed offset by the game number so games differ but stay reproducible.
pub fn run_match(a: &EngineConfig, b: &EngineConfig, games: usize) -> GomokuResult<MatchSummary> {
    a.validate()?;
    b.validate()?;

    let mut summary = MatchSummary::default();
    for game in 0..games {
        let mut agent_a = build_agent(&reseeded(a, game));
        let mut agent_b = build_agent(&reseeded(b, game));
        let a_is_black = game % 2 == 0;

        let record = if a_is_black {
            play_game(agent_a.as_mut(), agent_b.as_mut())
        } else {
            play_game(agent_b.as_mut(), agent_a.as_mut())
        };

        let a_stone = if a_is_black { Stone::Black } else { Stone::White };
        match record.winner {
            None => summary.draws += 1,
            Some(winner) if winner == a_stone => summary.a_wins += 1,
            Some(_) => summary.b_wins += 1,
        }
        info!(
            game,
            winner = ?record.winner,
            moves = record.moves,
            a_wins = summary.a_wins,
            b_wins = summary.b_wins,
            draws = summary.draws,
            "game finished"
        );
    }
    Ok(summary)
}

fn reseeded(config: &EngineConfig, game: usize) -> EngineConfig {
    match config.seed {
        Some(seed) => config.clone().with_seed(seed.wrapping_add(game as u64)),
        None => config.clone(),
    }
}
