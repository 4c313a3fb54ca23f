//! AI players
//!
//! Both variants implement [`Agent`] and are picked by [`AgentKind`] in the
//! configuration, so callers hold a `Box<dyn Agent>` and never branch on the variant.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::board::{Pos, Stone};
use crate::config::{AgentKind, EngineConfig};
use crate::game::GameState;
use crate::search::Searcher;

/// A move choice plus whatever the agent learned while making it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub best_move: Option<Pos>,
    /// Search value from the mover's perspective (0 when not searched)
    pub score: i32,
    /// Nodes visited (0 when not searched)
    pub nodes: u64,
}

impl Decision {
    fn none() -> Self {
        Self {
            best_move: None,
            score: 0,
            nodes: 0,
        }
    }
}

/// Something that picks moves
pub trait Agent: Send {
    fn name(&self) -> &'static str;

    fn kind(&self) -> AgentKind;

    /// Choose the best cell for `side`, whoever is to move in `state`.
    ///
    /// The state is borrowed exclusively and must be unchanged on return. A decided game
    /// or a full board yields no move.
    fn select_move_for(&mut self, state: &mut GameState, side: Stone) -> Decision;

    /// Choose a move for `state.current_player()`.
    fn select_move(&mut self, state: &mut GameState) -> Decision {
        let mover = state.current_player();
        self.select_move_for(state, mover)
    }
}

/// Minimax with alpha-beta pruning
pub struct SearchAgent {
    searcher: Searcher,
}

impl SearchAgent {
    pub fn new(depth: u8, radius: u8) -> Self {
        Self {
            searcher: Searcher::with_radius(depth, radius),
        }
    }

    pub fn depth(&self) -> u8 {
        self.searcher.max_depth()
    }
}

impl Agent for SearchAgent {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn kind(&self) -> AgentKind {
        AgentKind::Search
    }

    fn select_move_for(&mut self, state: &mut GameState, side: Stone) -> Decision {
        if state.winner().is_some() {
            return Decision::none();
        }
        let result = self.searcher.search(state, side);
        Decision {
            best_move: result.best_move,
            score: result.score,
            nodes: result.nodes,
        }
    }
}

/// Plays a uniformly random empty cell
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self { rng }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &'static str {
        "random"
    }

    fn kind(&self) -> AgentKind {
        AgentKind::Random
    }

    fn select_move_for(&mut self, state: &mut GameState, _side: Stone) -> Decision {
        if state.winner().is_some() {
            return Decision::none();
        }
        let empty: Vec<Pos> = state.board().empty_cells().collect();
        Decision {
            best_move: empty.choose(&mut self.rng).copied(),
            score: 0,
            nodes: 0,
        }
    }
}

/// Build the agent a configuration asks for
pub fn build_agent(config: &EngineConfig) -> Box<dyn Agent> {
    match config.agent {
        AgentKind::Search => Box::new(SearchAgent::new(config.depth, config.neighbor_radius)),
        AgentKind::Random => Box::new(RandomAgent::new(config.seed)),
    }
}
