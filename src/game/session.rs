//! Turn controller for a human-versus-computer game
//!
//! One round: tick the mover's bombs, resolve any detonation batch,
//! re-check terminal state, then play the turn. A human turn snapshots
//! the full game first and may be taken back afterwards from a fixed
//! per-game quota; taking it back replays the turn without re-ticking
//! bombs. The computer turn delegates to [`AiEngine`]. Turn ownership
//! toggles only when the round ends with the game still open.

use crate::board::{Action, CompoundAction, GameState, Side};
use crate::bomb::{detonate_batch, tick_bombs, BlastReport};
use crate::engine::AiEngine;
use crate::rules::{apply_action, apply_capture, eligible_captures, winner};

/// Takebacks granted to the human per game.
pub const UNDO_QUOTA: u8 = 3;

/// Supplies the human side's choices.
///
/// Implementations should only return legal values; the session rejects
/// illegal ones and asks again.
pub trait ActionProvider {
    /// One action for the current position.
    fn choose_action(&mut self, state: &GameState) -> Action;

    /// One capture position out of `eligible` after a mill formed.
    fn choose_capture(&mut self, state: &GameState, eligible: &[usize]) -> usize;

    /// Whether to take the just-played turn back.
    fn confirm_undo(&mut self, state: &GameState, undos_left: u8) -> bool;
}

/// What just happened, for rendering.
#[derive(Debug, Clone)]
pub enum GameEvent {
    TurnStarted { side: Side },
    Detonation(BlastReport),
    BombArmed { side: Side, target: usize },
    ActionApplied { side: Side, compound: CompoundAction },
    MoveUndone { undos_left: u8 },
    GameOver { winner: Side },
}

/// Read-only sink for state changes.
pub trait GameObserver {
    fn on_event(&mut self, state: &GameState, event: &GameEvent);
}

/// Observer that ignores everything.
pub struct NullObserver;

impl GameObserver for NullObserver {
    fn on_event(&mut self, _state: &GameState, _event: &GameEvent) {}
}

/// A full game between the human and the computer.
pub struct Session<P, O> {
    state: GameState,
    engine: AiEngine,
    provider: P,
    observer: O,
    snapshots: Vec<GameState>,
    undos_left: u8,
}

impl<P: ActionProvider, O: GameObserver> Session<P, O> {
    #[must_use]
    pub fn new(provider: P, observer: O) -> Self {
        Self {
            state: GameState::new(),
            engine: AiEngine::new(),
            provider,
            observer,
            snapshots: Vec::new(),
            undos_left: UNDO_QUOTA,
        }
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub fn undos_left(&self) -> u8 {
        self.undos_left
    }

    /// Play rounds until the game is decided.
    pub fn run(&mut self) -> Side {
        loop {
            if let Some(w) = self.play_round() {
                return w;
            }
        }
    }

    /// Play one round for the side to move.
    ///
    /// # Returns
    ///
    /// The winner once the game is decided, `None` while it is open.
    pub fn play_round(&mut self) -> Option<Side> {
        let side = self.state.turn;

        let due = tick_bombs(&mut self.state, side);
        if !due.is_empty() {
            for report in detonate_batch(&mut self.state, &due) {
                self.observer
                    .on_event(&self.state, &GameEvent::Detonation(report));
            }
            if let Some(w) = self.finish_if_decided() {
                return Some(w);
            }
        }
        if let Some(w) = self.finish_if_decided() {
            return Some(w);
        }

        self.observer
            .on_event(&self.state, &GameEvent::TurnStarted { side });

        match side {
            Side::Human => {
                // A takeback replays the turn from the snapshot; bombs
                // already ticked this round and do not tick again.
                while self.human_turn() {}
            }
            Side::Ai => self.ai_turn(),
        }

        if let Some(w) = self.finish_if_decided() {
            return Some(w);
        }
        self.state.turn = side.opponent();
        None
    }

    /// Record and announce the winner if the position is decided.
    fn finish_if_decided(&mut self) -> Option<Side> {
        let w = winner(&self.state)?;
        self.state.winner = Some(w);
        self.observer
            .on_event(&self.state, &GameEvent::GameOver { winner: w });
        Some(w)
    }

    /// One human turn. Returns `true` when it was taken back and must be
    /// replayed.
    fn human_turn(&mut self) -> bool {
        self.snapshots.push(self.state.clone());

        let (action, mill) = loop {
            let action = self.provider.choose_action(&self.state);
            match apply_action(&mut self.state, action, Side::Human) {
                Ok(mill) => break (action, mill),
                Err(_) => continue,
            }
        };
        if let Action::ArmBomb { target } = action {
            self.observer
                .on_event(&self.state, &GameEvent::BombArmed { side: Side::Human, target });
        }

        let capture = if mill {
            self.resolve_human_capture()
        } else {
            None
        };

        let compound = CompoundAction { action, capture };
        self.state.set_last_move(Side::Human, compound);
        self.observer.on_event(
            &self.state,
            &GameEvent::ActionApplied {
                side: Side::Human,
                compound,
            },
        );

        if self.undos_left > 0 && self.provider.confirm_undo(&self.state, self.undos_left) {
            if let Some(prev) = self.snapshots.pop() {
                self.state = prev;
                self.undos_left -= 1;
                self.observer.on_event(
                    &self.state,
                    &GameEvent::MoveUndone {
                        undos_left: self.undos_left,
                    },
                );
                return true;
            }
        }
        false
    }

    /// The human's capture after a mill. `None` when nothing is eligible.
    fn resolve_human_capture(&mut self) -> Option<usize> {
        let eligible = eligible_captures(&self.state, Side::Human);
        if eligible.is_empty() {
            return None;
        }
        loop {
            let pos = self.provider.choose_capture(&self.state, &eligible);
            if apply_capture(&mut self.state, pos, Side::Human).is_ok() {
                return Some(pos);
            }
        }
    }

    /// One computer turn: the engine picks the whole compound action.
    fn ai_turn(&mut self) {
        let result = self.engine.choose_move(&mut self.state);
        let Some(chosen) = result.best else {
            // No legal action at all: the terminal check settles it.
            return;
        };
        let Ok(mill) = apply_action(&mut self.state, chosen.action, Side::Ai) else {
            return;
        };
        if let Action::ArmBomb { target } = chosen.action {
            self.observer
                .on_event(&self.state, &GameEvent::BombArmed { side: Side::Ai, target });
        }

        let capture = if mill {
            let pos = self
                .engine
                .resolve_capture(&self.state, Side::Ai, chosen.capture);
            if let Some(pos) = pos {
                if apply_capture(&mut self.state, pos, Side::Ai).is_err() {
                    return;
                }
            }
            pos
        } else {
            None
        };

        let compound = CompoundAction {
            action: chosen.action,
            capture,
        };
        self.state.set_last_move(Side::Ai, compound);
        self.observer.on_event(
            &self.state,
            &GameEvent::ActionApplied {
                side: Side::Ai,
                compound,
            },
        );
    }
}
