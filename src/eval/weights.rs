//! Evaluation weights
//!
//! Scoring weights for the static evaluation, always from the computer's
//! perspective. The evaluation is deliberately asymmetric (the immobility
//! terms punish the computer harder than they reward it), so the search
//! runs plain minimax, not negamax.

/// Weight table for the evaluation terms.
pub struct Weight;

impl Weight {
    /// Decided game (win/loss) and the hard terminal overrides.
    pub const WIN: i32 = 10_000;

    /// Per piece-on-board difference.
    pub const PIECE: i32 = 200;
    /// Per formed-mill difference.
    pub const MILL: i32 = 300;
    /// Per reserve-piece (still to place) difference.
    pub const RESERVE: i32 = 5;

    // Terms active once either side has finished placing.
    /// Per near-mill difference (two own pieces plus one empty on a line).
    pub const NEAR_MILL: i32 = 50;
    /// Per legal-action difference.
    pub const MOBILITY: i32 = 5;
    /// Bonus when the human has no legal action left.
    pub const OPPONENT_STUCK: i32 = 2_000;
    /// Penalty when the computer has no legal action left.
    pub const SELF_STUCK: i32 = 4_000;

    // Extra terms while either side qualifies for flying.
    /// Additional per-mill weight in the flying endgame.
    pub const FLYING_MILL: i32 = 100;
    /// Additional per-near-mill weight in the flying endgame.
    pub const FLYING_NEAR_MILL: i32 = 25;
    /// Bonus when only the computer can fly.
    pub const FLYING_ONLY_AI: i32 = 100;
    /// Penalty when only the human can fly.
    pub const FLYING_ONLY_HUMAN: i32 = 150;
}
