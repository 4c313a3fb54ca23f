//! Game flow for the Gomoku GUI
//!
//! Wraps the rules-level [`GameState`] with what the window needs: the game mode, the
//! background AI worker, timers and status messages. The worker searches a clone of the
//! game; its answer is committed here, on the UI thread, through the normal move path.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::warn;

use crate::config::{AgentKind, EngineConfig};
use crate::game::{GameState, MoveOutcome};
use crate::rules::winning_line;
use crate::{AIEngine, MoveResult, Pos, Stone};

/// Hint searches stay shallow so the window does not stall
const HINT_DEPTH: u8 = 2;

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human_color: Stone },
    /// Player vs Player (hotseat)
    PvP { show_suggestions: bool },
}

impl Default for GameMode {
    /// The AI plays Black and opens
    fn default() -> Self {
        GameMode::PvE { human_color: Stone::White }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Everything the window shows about the current game
pub struct PlayState {
    pub game: GameState,
    pub mode: GameMode,
    pub config: EngineConfig,
    pub move_count: usize,
    pub winning_line: Option<Vec<Pos>>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,
}

impl PlayState {
    pub fn new(mode: GameMode, config: EngineConfig) -> Self {
        Self {
            game: GameState::new(),
            mode,
            config,
            move_count: 0,
            winning_line: None,
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
        }
    }

    /// Start over in the same mode. A pending AI answer is dropped with its channel.
    pub fn reset(&mut self) {
        self.game.reset();
        self.move_count = 0;
        self.winning_line = None;
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.move_timer = MoveTimer::default();
        self.suggested_move = None;
        self.message = None;
    }

    pub fn current_turn(&self) -> Stone {
        self.game.current_player()
    }

    pub fn winner(&self) -> Option<Stone> {
        self.game.winner()
    }

    pub fn is_over(&self) -> bool {
        self.game.winner().is_some() || self.game.board().is_full()
    }

    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn() == human_color,
            GameMode::PvP { .. } => true,
        }
    }

    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn() != human_color,
            GameMode::PvP { .. } => false,
        }
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place a stone for the human side
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }
        self.execute_move(pos).map_err(|err| err.to_string())
    }

    /// Commit a move for the side to move (human or AI)
    fn execute_move(&mut self, pos: Pos) -> crate::GomokuResult<()> {
        let outcome = self
            .game
            .try_apply_move(i32::from(pos.row), i32::from(pos.col))?;

        self.move_count += 1;
        self.suggested_move = None;
        self.message = None;
        self.move_timer.stop();

        match outcome {
            MoveOutcome::Won { .. } => {
                self.winning_line = winning_line(self.game.board(), pos);
            }
            MoveOutcome::Continue { .. } => {
                if self.game.board().is_full() {
                    self.message = Some("Board full: draw".to_string());
                } else {
                    self.move_timer.start();
                }
            }
        }
        Ok(())
    }

    /// Spawn the AI on a copy of the game if it is the AI's move
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.is_over() {
            return;
        }

        let mut game = self.game.clone();
        let config = self.config.clone();
        let (tx, rx) = channel();

        thread::spawn(move || match AIEngine::new(config) {
            Ok(mut engine) => {
                let result = engine.get_move_with_stats(&mut game);
                let _ = tx.send(result);
            }
            Err(err) => warn!(%err, "AI engine unavailable"),
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Commit the AI's answer once the worker has one
    pub fn check_ai_result(&mut self) {
        let (move_result, elapsed) = match &self.ai_state {
            AiState::Idle => return,
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => (result, start_time.elapsed()),
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
        };

        self.ai_state = AiState::Idle;
        self.move_timer.set_ai_time(elapsed);
        let best_move = move_result.best_move;
        self.last_ai_result = Some(move_result);

        match best_move {
            Some(pos) => {
                if let Err(err) = self.execute_move(pos) {
                    warn!(%pos, %err, "AI move rejected");
                    self.message = Some(err.to_string());
                }
            }
            None => self.message = Some("AI could not find a move".to_string()),
        }
    }

    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Ask a shallow search for the side to move, PvP mode only
    pub fn request_suggestion(&mut self) {
        if self.is_over() || self.is_ai_thinking() {
            return;
        }
        let GameMode::PvP { show_suggestions } = &mut self.mode else {
            return;
        };
        *show_suggestions = true;

        let config = self
            .config
            .clone()
            .with_agent(AgentKind::Search)
            .with_depth(HINT_DEPTH);
        match AIEngine::new(config) {
            Ok(mut engine) => {
                let result = engine.get_move_with_stats(&mut self.game);
                self.suggested_move = result.best_move;
                self.last_ai_result = Some(result);
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }
}
