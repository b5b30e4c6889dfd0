//! Game rules - scoring, lose/win policies and best-score tracking
//!
//! `GameRules` is a small state machine: `Playing` until a lose or win
//! condition fires, then terminal. It never touches the board or the piece
//! itself; the [`Game`](crate::game::Game) feeds it lock and clear results
//! and it answers by queuing events.

use std::collections::BTreeSet;

use log::info;

use crate::board::{Board, ClearedRows};
use crate::config::{LosePolicy, WinPolicy};
use crate::types::{GameEvent, LineId, LINE_SCORES};

/// Row key of the top boundary; a line here after a lock ends the game
pub const TOP_ROW: i32 = 0;

/// Score delta for clearing `lines` rows at `level`
///
/// Counts outside `1..=4` score nothing.
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    match lines {
        1..=4 => LINE_SCORES[lines].saturating_mul(level),
        _ => 0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RulesStatus {
    Playing,
    GameOver,
    GameWon,
}

impl RulesStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RulesStatus::Playing)
    }
}

/// Lose policy with its runtime state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoseCondition {
    Endless,
    LimitedAttempts { remaining: u32 },
}

impl LoseCondition {
    pub fn new(policy: LosePolicy) -> Self {
        match policy {
            LosePolicy::Endless => LoseCondition::Endless,
            LosePolicy::LimitedAttempts { attempts } => {
                LoseCondition::LimitedAttempts { remaining: attempts }
            }
        }
    }

    /// Score a fresh game starts with
    fn initial_score(&self) -> u32 {
        match self {
            LoseCondition::Endless => 0,
            LoseCondition::LimitedAttempts { remaining } => *remaining,
        }
    }

    fn score_order(&self) -> ScoreOrder {
        match self {
            LoseCondition::Endless => ScoreOrder::HigherIsBetter,
            LoseCondition::LimitedAttempts { .. } => ScoreOrder::LowerIsBetter,
        }
    }
}

/// Win policy with its runtime state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WinCondition {
    None,
    /// Lines still to clear, by identity
    PresetClear { pending: BTreeSet<LineId> },
}

impl WinCondition {
    pub fn new(policy: WinPolicy, preset_lines: impl IntoIterator<Item = LineId>) -> Self {
        match policy {
            WinPolicy::None => WinCondition::None,
            WinPolicy::PresetClear => WinCondition::PresetClear {
                pending: preset_lines.into_iter().collect(),
            },
        }
    }

    /// Whether a game over may still set a new best score
    fn best_score_on_lose(&self) -> bool {
        matches!(self, WinCondition::None)
    }
}

/// How two scores compare for best-score purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreOrder {
    HigherIsBetter,
    LowerIsBetter,
}

impl ScoreOrder {
    /// Check if `score` beats `best`; anything beats no record
    pub fn improves(&self, score: u32, best: Option<u32>) -> bool {
        match (self, best) {
            (_, None) => true,
            (ScoreOrder::HigherIsBetter, Some(best)) => score > best,
            (ScoreOrder::LowerIsBetter, Some(best)) => score < best,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRules {
    score: u32,
    best_score: Option<u32>,
    status: RulesStatus,
    lose: LoseCondition,
    win: WinCondition,
}

impl GameRules {
    pub fn new(lose: LoseCondition, win: WinCondition, best_score: Option<u32>) -> Self {
        Self {
            score: lose.initial_score(),
            best_score,
            status: RulesStatus::Playing,
            lose,
            win,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> Option<u32> {
        self.best_score
    }

    pub fn status(&self) -> RulesStatus {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn score_order(&self) -> ScoreOrder {
        self.lose.score_order()
    }

    /// Preset lines not yet cleared (empty without a preset-clear policy)
    pub fn pending_lines(&self) -> usize {
        match &self.win {
            WinCondition::None => 0,
            WinCondition::PresetClear { pending } => pending.len(),
        }
    }

    /// Score the clear and evaluate the win condition
    pub fn on_lines_cleared(
        &mut self,
        cleared: &ClearedRows,
        level: u32,
        events: &mut Vec<GameEvent>,
    ) {
        if self.is_terminal() || cleared.is_empty() {
            return;
        }

        if self.lose == LoseCondition::Endless {
            let delta = line_clear_score(cleared.count(), level);
            if delta > 0 {
                self.score = self.score.saturating_add(delta);
                events.push(GameEvent::ScoreChanged { score: self.score });
            }
        }

        if let WinCondition::PresetClear { pending } = &mut self.win {
            for id in &cleared.ids {
                pending.remove(id);
            }
            if pending.is_empty() {
                self.finish(RulesStatus::GameWon, events);
            }
        }
    }

    /// Evaluate the lose condition after a piece has been committed
    pub fn on_piece_locked(&mut self, board: &Board, events: &mut Vec<GameEvent>) {
        if self.is_terminal() {
            return;
        }

        let out_of_attempts = match &mut self.lose {
            LoseCondition::Endless => false,
            LoseCondition::LimitedAttempts { remaining } => {
                *remaining = remaining.saturating_sub(1);
                self.score = *remaining;
                events.push(GameEvent::ScoreChanged { score: self.score });
                *remaining == 0
            }
        };

        if out_of_attempts || board.has_row_at(TOP_ROW) {
            self.finish(RulesStatus::GameOver, events);
        }
    }

    /// A new piece could not be placed at the spawn point
    pub fn on_spawn_blocked(&mut self, events: &mut Vec<GameEvent>) {
        if self.is_terminal() {
            return;
        }
        self.finish(RulesStatus::GameOver, events);
    }

    fn finish(&mut self, status: RulesStatus, events: &mut Vec<GameEvent>) {
        self.status = status;
        match status {
            RulesStatus::GameOver => {
                info!("game over with score {}", self.score);
                events.push(GameEvent::GameOver);
                if self.win.best_score_on_lose() {
                    self.update_best_score(events);
                }
            }
            RulesStatus::GameWon => {
                info!("game won with score {}", self.score);
                events.push(GameEvent::GameWon);
                self.update_best_score(events);
            }
            RulesStatus::Playing => {}
        }
    }

    fn update_best_score(&mut self, events: &mut Vec<GameEvent>) {
        if !self.score_order().improves(self.score, self.best_score) {
            return;
        }
        self.best_score = Some(self.score);
        info!("new best score {}", self.score);
        events.push(GameEvent::BestScoreUpdated {
            best_score: self.score,
        });
    }
}
