//! Time-bomb subsystem
//!
//! Each side may arm a single bomb, once per game, on one of its own
//! pieces already on the board. The bomb rides its bearer when that piece
//! moves, ticks down by one at the start of each of its owner's turns, and
//! detonates when the timer reaches zero: every occupied adjacent position
//! loses its piece back to the owner's reserve (a non-permanent loss,
//! unlike a mill capture). A bomb caught in another bomb's blast is
//! disarmed without detonating; chain reactions never happen.

use crate::board::{GameState, Side, ADJACENT};

/// Turns (of the owner) before an armed bomb detonates.
pub const BOMB_INITIAL_TIMER: u8 = 3;

/// An armed bomb riding one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bomb {
    /// Unique, ascending per game.
    pub id: u32,
    pub owner: Side,
    /// Bearer position; updated when the bearer moves.
    pub position: usize,
    /// Owner turns remaining until detonation.
    pub timer: u8,
}

/// The armed bombs of both sides, kept sorted by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BombStore {
    bombs: Vec<Bomb>,
    next_id: u32,
}

impl BombStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            bombs: Vec::new(),
            next_id: 0,
        }
    }

    /// Iterate over armed bombs in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Bomb> {
        self.bombs.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bombs.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bombs.is_empty()
    }

    /// Check if any bomb currently sits on `pos`.
    #[inline]
    #[must_use]
    pub fn is_armed(&self, pos: usize) -> bool {
        self.bombs.iter().any(|b| b.position == pos)
    }

    /// The bomb riding `pos`, if any.
    #[must_use]
    pub fn bomb_at(&self, pos: usize) -> Option<&Bomb> {
        self.bombs.iter().find(|b| b.position == pos)
    }

    /// Arm a new bomb for `owner` on `position` and return its id.
    ///
    /// Legality (own bomb-free piece, unspent permission) is the rules
    /// engine's responsibility; this only creates the entry.
    pub fn arm(&mut self, owner: Side, position: usize) -> u32 {
        self.next_id += 1;
        self.bombs.push(Bomb {
            id: self.next_id,
            owner,
            position,
            timer: BOMB_INITIAL_TIMER,
        });
        self.next_id
    }

    /// Move the bomb `owner` has riding `from` onto `to`, if there is one.
    pub fn relocate(&mut self, owner: Side, from: usize, to: usize) {
        if let Some(bomb) = self
            .bombs
            .iter_mut()
            .find(|b| b.owner == owner && b.position == from)
        {
            bomb.position = to;
        }
    }

    /// Remove and return the bomb at `pos`, leaving the rest in id order.
    pub fn disarm_at(&mut self, pos: usize) -> Option<Bomb> {
        let idx = self.bombs.iter().position(|b| b.position == pos)?;
        Some(self.bombs.remove(idx))
    }

    /// Remove and return the bomb with the given id.
    pub fn remove_id(&mut self, id: u32) -> Option<Bomb> {
        let idx = self.bombs.iter().position(|b| b.id == id)?;
        Some(self.bombs.remove(idx))
    }

    /// Reverse an [`arm`](Self::arm) that was applied last, releasing its
    /// id. Only valid as the structural inverse of the most recent arm;
    /// anything else is left untouched.
    pub fn unarm_last(&mut self, owner: Side, position: usize) {
        if let Some(last) = self.bombs.last() {
            if last.owner == owner && last.position == position && last.id == self.next_id {
                self.bombs.pop();
                self.next_id -= 1;
            }
        }
    }

    /// Re-insert a previously disarmed bomb at its id-sorted slot.
    ///
    /// Used by the search to revert a hypothetical capture; restores the
    /// store to byte-for-byte equality with its pre-capture contents.
    pub fn reattach(&mut self, bomb: Bomb) {
        let idx = self.bombs.partition_point(|b| b.id < bomb.id);
        self.bombs.insert(idx, bomb);
    }
}

impl Default for BombStore {
    fn default() -> Self {
        Self::new()
    }
}

/// One detonation, for the presentation sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlastReport {
    /// The bomb that went off.
    pub bomb: Bomb,
    /// Pieces destroyed by the blast, with their owners.
    pub destroyed: Vec<(usize, Side)>,
    /// Bombs caught in the radius and disarmed without detonating.
    pub disarmed: Vec<Bomb>,
}

/// Tick every bomb belonging to `owner` and return the detonation batch.
///
/// The batch (ascending bomb ids) is snapshotted before any detonation
/// mutates state, so a blast can never recruit new members into it. Bombs
/// stay armed until [`detonate_batch`] processes them.
pub fn tick_bombs(state: &mut GameState, owner: Side) -> Vec<u32> {
    let mut batch = Vec::new();
    for bomb in state.bombs.bombs.iter_mut() {
        if bomb.owner == owner {
            bomb.timer = bomb.timer.saturating_sub(1);
            if bomb.timer == 0 {
                batch.push(bomb.id);
            }
        }
    }
    batch
}

/// Resolve a detonation batch in ascending id order.
///
/// A batch member that an earlier blast already disarmed is skipped: it
/// never detonates and contributes to no later batch. Destroyed pieces go
/// back to their owner's reserve.
pub fn detonate_batch(state: &mut GameState, batch: &[u32]) -> Vec<BlastReport> {
    let mut reports = Vec::new();
    for &id in batch {
        // Disarmed by an earlier blast in this batch: chain suppressed.
        let Some(bomb) = state.bombs.remove_id(id) else {
            continue;
        };
        let mut destroyed = Vec::new();
        let mut disarmed = Vec::new();
        for &adj in ADJACENT[bomb.position] {
            if let Some(owner) = state.board[adj] {
                if let Some(caught) = state.bombs.disarm_at(adj) {
                    disarmed.push(caught);
                }
                state.board[adj] = None;
                let pools = state.side_mut(owner);
                pools.on_board -= 1;
                pools.to_place += 1;
                destroyed.push((adj, owner));
            }
        }
        reports.push(BlastReport {
            bomb,
            destroyed,
            disarmed,
        });
    }
    reports
}
