//! Static evaluation of a position
//!
//! Scores a position from the computer's perspective: positive favors the
//! computer, negative the human. Decided games score ±[`Weight::WIN`].
//! The piece/mill/reserve core is always active; near-mill and mobility
//! terms switch on once either side has finished placing, and the flying
//! endgame adds its own bonuses on top.

use super::weights::Weight;
use crate::board::{GameState, Side, FLYING_THRESHOLD, MILLS};
use crate::rules::{legal_actions, winner};

/// Evaluate the board from the computer's perspective.
#[must_use]
pub fn evaluate(state: &GameState) -> i32 {
    match winner(state) {
        Some(Side::Ai) => return Weight::WIN,
        Some(Side::Human) => return -Weight::WIN,
        None => {}
    }

    let ai = *state.side(Side::Ai);
    let human = *state.side(Side::Human);
    let ai_flying = ai.can_fly();
    let human_flying = human.can_fly();

    let piece_diff = i32::from(ai.on_board) - i32::from(human.on_board);
    let reserve_diff = i32::from(ai.to_place) - i32::from(human.to_place);

    let (mut ai_mills, mut human_mills) = (0, 0);
    let (mut ai_near, mut human_near) = (0, 0);
    for mill in MILLS.iter() {
        let (mut ai_count, mut human_count, mut empty) = (0, 0, 0);
        for &pos in mill {
            match state.cell(pos) {
                Some(Side::Ai) => ai_count += 1,
                Some(Side::Human) => human_count += 1,
                None => empty += 1,
            }
        }
        if ai_count == 3 {
            ai_mills += 1;
        } else if human_count == 3 {
            human_mills += 1;
        } else if ai_count == 2 && empty == 1 {
            ai_near += 1;
        } else if human_count == 2 && empty == 1 {
            human_near += 1;
        }
    }
    let mill_diff = ai_mills - human_mills;
    let near_mill_diff = ai_near - human_near;

    let ai_actions = legal_actions(state, Side::Ai).len() as i32;
    let human_actions = legal_actions(state, Side::Human).len() as i32;
    let ai_stuck = ai.done_placing() && ai_actions == 0;
    let human_stuck = human.done_placing() && human_actions == 0;

    let mut score = 0;
    score += piece_diff * Weight::PIECE;
    score += mill_diff * Weight::MILL;
    score += reserve_diff * Weight::RESERVE;

    if ai.done_placing() || human.done_placing() {
        score += near_mill_diff * Weight::NEAR_MILL;
        score += (ai_actions - human_actions) * Weight::MOBILITY;
        if human_stuck {
            score += Weight::OPPONENT_STUCK;
        }
        if ai_stuck {
            score -= Weight::SELF_STUCK;
        }
    }

    if ai_flying || human_flying {
        score += mill_diff * Weight::FLYING_MILL;
        score += near_mill_diff * Weight::FLYING_NEAR_MILL;
        if ai_flying && !human_flying {
            score += Weight::FLYING_ONLY_AI;
        } else if human_flying && !ai_flying {
            score -= Weight::FLYING_ONLY_HUMAN;
        }
    }

    // Hard overrides beyond the additive score.
    if ai.done_placing() && ai.on_board < FLYING_THRESHOLD {
        return -Weight::WIN;
    }
    if human.done_placing() && human.on_board < FLYING_THRESHOLD {
        return Weight::WIN;
    }
    if human_stuck {
        return Weight::WIN;
    }
    if ai_stuck {
        return -Weight::WIN;
    }

    score
}
