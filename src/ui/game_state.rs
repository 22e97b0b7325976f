//! Match state management for the Isolation GUI
//!
//! `MatchState` is the harness around the engine: it owns the current
//! position and the move history, runs engine turns on a worker thread,
//! and enforces the per-turn time budget.

use crate::config::AppConfig;
use crate::{AIEngine, GameState, MoveResult, Player, Pos};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human: Player },
    /// Player vs Player (hotseat)
    PvP { show_suggestions: bool },
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human: Player::One }
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

/// Game result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Player,
    pub win_type: WinType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinType {
    /// The loser had no legal move
    Isolated,
    /// The engine overran its turn budget or returned an illegal move
    Forfeit,
}

/// Wall-clock time spent on the current turn
pub struct TurnTimer {
    started: Option<Instant>,
    /// How long the engine took for its last reply
    pub last_engine_time: Option<Duration>,
}

impl TurnTimer {
    fn running() -> Self {
        Self {
            started: Some(Instant::now()),
            last_engine_time: None,
        }
    }

    pub fn restart(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Freeze at zero until the next `restart`
    pub fn halt(&mut self) {
        self.started = None;
    }

    pub fn elapsed(&self) -> Duration {
        self.started.map_or(Duration::ZERO, |t| t.elapsed())
    }
}

/// One match in the play window
pub struct MatchState {
    pub state: GameState,
    pub mode: GameMode,
    pub game_over: Option<GameResult>,
    pub last_move: Option<Pos>,
    /// Mover, move, and the position it produced, oldest first
    pub history: Vec<(Player, Pos, GameState)>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub turn_timer: TurnTimer,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,

    initial: GameState,
    config: AppConfig,
}

impl MatchState {
    /// Start a match from the configured opening position.
    ///
    /// `config` is assumed validated, so its opening position exists.
    pub fn new(config: AppConfig, mode: GameMode, initial: GameState) -> Self {
        Self {
            state: initial,
            mode,
            game_over: None,
            last_move: None,
            history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            turn_timer: TurnTimer::running(),
            suggested_move: None,
            message: None,
            initial,
            config,
        }
    }

    /// Same opening, same mode, empty history
    pub fn reset(&mut self) {
        *self = Self::new(self.config, self.mode, self.initial);
    }

    /// Restart in another mode
    pub fn restart(&mut self, mode: GameMode) {
        *self = Self::new(self.config, mode, self.initial);
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Wall-clock budget for one engine turn
    pub fn turn_budget(&self) -> Duration {
        Duration::from_millis(self.config.turn_time_ms)
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.state.active() == human,
            GameMode::PvP { .. } => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.state.active() != human,
            GameMode::PvP { .. } => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt a human move to `pos`
    pub fn try_move(&mut self, pos: Pos) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.execute_move(pos).map_err(|err| err.to_string())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, pos: Pos) -> crate::error::IsolationResult<()> {
        let player = self.state.active();
        let next = self.state.apply(pos)?;

        self.state = next;
        self.history.push((player, pos, next));
        self.last_move = Some(pos);
        self.suggested_move = None;
        self.message = None;
        self.turn_timer.halt();

        if let Some(winner) = next.winner() {
            info!(%winner, plies = next.ply(), "game over");
            self.game_over = Some(GameResult {
                winner,
                win_type: WinType::Isolated,
            });
            return Ok(());
        }

        self.turn_timer.restart();
        Ok(())
    }

    /// Start AI thinking
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let state = self.state;
        let engine_config = self.config.engine;
        let budget = self.turn_budget();

        let (tx, rx) = channel();

        thread::spawn(move || {
            let engine = AIEngine::with_config(engine_config);
            let result = engine.get_move_with_stats(&state, budget);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.apply_engine_result(move_result, elapsed);
        }
    }

    /// Play the engine's answer, or forfeit the engine's turn when it came
    /// too late or is not a legal move.
    pub(crate) fn apply_engine_result(&mut self, result: MoveResult, elapsed: Duration) {
        let player = self.state.active();
        self.last_ai_result = Some(result);
        self.turn_timer.last_engine_time = Some(elapsed);

        if elapsed > self.turn_budget() {
            warn!(%player, elapsed_ms = elapsed.as_millis() as u64, "engine overran its turn");
            self.forfeit(player, format!("{player} ran out of time"));
            return;
        }

        match result.best_move {
            Some(pos) => {
                if let Err(err) = self.execute_move(pos) {
                    warn!(%player, %err, "engine returned an illegal move");
                    self.forfeit(player, format!("{player} forfeits: {err}"));
                }
            }
            None => self.message = Some("AI could not find a move".to_string()),
        }
    }

    fn forfeit(&mut self, loser: Player, message: String) {
        self.game_over = Some(GameResult {
            winner: loser.opponent(),
            win_type: WinType::Forfeit,
        });
        self.message = Some(message);
        self.turn_timer.halt();
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Request move suggestion for PvP mode
    pub fn request_suggestion(&mut self) {
        if self.game_over.is_some() || self.is_ai_thinking() {
            return;
        }

        let engine = AIEngine::with_config(self.config.engine);
        let result = engine.get_move_with_stats(&self.state, self.turn_budget());

        self.suggested_move = result.best_move;
        self.last_ai_result = Some(result);
    }

    /// Undo the last move, or the last two in PvE so the human is to move
    pub fn undo(&mut self) {
        if self.history.is_empty() || self.is_ai_thinking() {
            return;
        }

        let undo_count = match self.mode {
            GameMode::PvE { .. } if self.history.len() >= 2 => 2,
            _ => 1,
        };

        // Reset and replay the kept prefix
        let moves_to_keep = self.history.len().saturating_sub(undo_count);
        let moves: Vec<Pos> = self.history.drain(..).take(moves_to_keep).map(|(_, pos, _)| pos).collect();

        self.state = self.initial;
        self.game_over = None;
        self.last_move = None;
        self.suggested_move = None;
        self.message = None;

        for pos in moves {
            if let Err(err) = self.execute_move(pos) {
                // Replaying recorded legal moves cannot fail
                warn!(%err, "undo replay stopped");
                break;
            }
        }

        self.turn_timer.restart();
    }
}
