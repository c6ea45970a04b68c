//! Terminal input for the human side
//!
//! Implements [`ActionProvider`] over any buffered reader. Prompts loop
//! until the input parses and passes the relevant legality predicate, so
//! the session never has to reject a choice twice.

use crate::board::{Action, GameState, Side, coord_to_index, index_to_coord};
use crate::game::ActionProvider;
use crate::rules::{is_valid_bomb_arm, is_valid_place, legal_moves};
use std::io::{BufRead, StdinLock, Write};

/// Interactive provider reading coordinates like `A1` or `D7`.
pub struct TerminalProvider<R> {
    reader: R,
}

impl TerminalProvider<StdinLock<'static>> {
    /// Provider reading from standard input.
    #[must_use]
    pub fn stdin() -> Self {
        Self::new(std::io::stdin().lock())
    }
}

impl<R: BufRead> TerminalProvider<R> {
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// One trimmed, uppercased line. Ends the process on closed input.
    fn read_line(&mut self, prompt: &str) -> String {
        print!("{prompt}");
        std::io::stdout().flush().ok();
        let mut buf = String::new();
        match self.reader.read_line(&mut buf) {
            Ok(0) | Err(_) => {
                println!("\nGame interrupted.");
                std::process::exit(0);
            }
            Ok(_) => buf.trim().to_ascii_uppercase(),
        }
    }

    /// A board position, re-prompting until the coordinate parses.
    fn read_coord(&mut self, prompt: &str) -> usize {
        loop {
            let line = self.read_line(prompt);
            if let Some(pos) = coord_to_index(&line) {
                return pos;
            }
            println!("Invalid coordinate. Use format like 'A1', 'D7', etc.");
        }
    }

    fn choose_placement(&mut self, state: &GameState) -> Option<Action> {
        let left = state.side(Side::Human).to_place;
        println!("Phase 1: Place piece ({left} left)");
        let to = self.read_coord("Enter position to place (e.g., A1): ");
        if is_valid_place(state, to) {
            Some(Action::Place { to })
        } else {
            println!("Invalid position. Try again.");
            None
        }
    }

    fn choose_movement(&mut self, state: &GameState) -> Option<Action> {
        let flying = state.side(Side::Human).can_fly();
        println!(
            "Phase {}: Select piece and destination",
            if flying { "3 (Fly)" } else { "2 (Move)" }
        );
        let from = self.read_coord("Enter position of piece to move: ");
        if state.cell(from) != Some(Side::Human) {
            println!("Not your piece.");
            return None;
        }
        let moves = legal_moves(state, Side::Human);
        let mut destinations: Vec<&str> = moves
            .iter()
            .filter(|&&(f, _)| f == from)
            .map(|&(_, t)| index_to_coord(t))
            .collect();
        if destinations.is_empty() {
            println!("This piece has no valid moves.");
            return None;
        }
        destinations.sort_unstable();
        println!(
            "Valid destinations for {}: {}",
            index_to_coord(from),
            destinations.join(", ")
        );
        let to = self.read_coord("Enter destination position: ");
        if moves.contains(&(from, to)) {
            Some(Action::Move { from, to })
        } else {
            println!("Invalid destination. Try again.");
            None
        }
    }

    fn choose_bomb(&mut self, state: &GameState) -> Option<Action> {
        println!("Select one of your pieces to arm with a Time Bomb.");
        let target = self.read_coord("Enter position of YOUR piece to arm: ");
        if is_valid_bomb_arm(state, Side::Human, target) {
            Some(Action::ArmBomb { target })
        } else {
            println!("That is not your bombless piece. Try again.");
            None
        }
    }
}

impl<R: BufRead> ActionProvider for TerminalProvider<R> {
    fn choose_action(&mut self, state: &GameState) -> Action {
        let human = state.side(Side::Human);
        let placing = !human.done_placing();
        let bomb_allowed = human.bomb_available && human.on_board > 0;

        loop {
            let mut options = vec![if placing { "(P)lace piece" } else { "(M)ove piece" }];
            if bomb_allowed {
                options.push("(B)omb");
            }
            let choice = self.read_line(&format!("Choose action: {}: ", options.join(", ")));

            let action = match choice.as_str() {
                "B" if bomb_allowed => self.choose_bomb(state),
                "P" if placing => self.choose_placement(state),
                "M" if !placing => self.choose_movement(state),
                "" => {
                    if placing {
                        self.choose_placement(state)
                    } else {
                        self.choose_movement(state)
                    }
                }
                _ => {
                    println!("Invalid action choice. Try again.");
                    None
                }
            };
            if let Some(action) = action {
                return action;
            }
        }
    }

    fn choose_capture(&mut self, _state: &GameState, eligible: &[usize]) -> usize {
        println!("\nMill formed! Select an opponent's piece (X) to remove.");
        let mut coords: Vec<&str> = eligible.iter().map(|&p| index_to_coord(p)).collect();
        coords.sort_unstable();
        loop {
            println!("Valid removal targets: {}", coords.join(", "));
            let pos = self.read_coord("Enter position to remove: ");
            if eligible.contains(&pos) {
                println!("Removed piece at {}.", index_to_coord(pos));
                return pos;
            }
            println!("Invalid removal choice. Try again.");
        }
    }

    fn confirm_undo(&mut self, _state: &GameState, undos_left: u8) -> bool {
        let answer = self.read_line(&format!(
            "\nYou have {undos_left} undos left. Undo this move? (Y/N): "
        ));
        answer == "Y"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn provider(input: &str) -> TerminalProvider<Cursor<String>> {
        TerminalProvider::new(Cursor::new(input.to_string()))
    }

    #[test]
    fn test_placement_from_input() {
        let state = GameState::new();
        let action = provider("P\nA1\n").choose_action(&state);
        assert_eq!(action, Action::Place { to: 21 });
    }

    #[test]
    fn test_bad_choice_and_coord_are_retried() {
        let state = GameState::new();
        let action = provider("Z\nP\nH9\nD6\n").choose_action(&state);
        assert_eq!(action, Action::Place { to: 4 });
    }

    #[test]
    fn test_empty_input_defaults_to_phase_action() {
        let state = GameState::new();
        let action = provider("\nD7\n").choose_action(&state);
        assert_eq!(action, Action::Place { to: 1 });
    }

    #[test]
    fn test_move_flow_with_destination_check() {
        let mut state = GameState::new();
        state.side_mut(Side::Human).to_place = 0;
        state.side_mut(Side::Ai).to_place = 0;
        state.board[0] = Some(Side::Human);
        state.side_mut(Side::Human).on_board = 1;

        // First try targets an occupied-by-nobody-adjacent cell, then A7->D7.
        let action = provider("M\nA7\nG1\nM\nA7\nD7\n").choose_action(&state);
        assert_eq!(action, Action::Move { from: 0, to: 1 });
    }

    #[test]
    fn test_bomb_arming_from_input() {
        let mut state = GameState::new();
        state.board[4] = Some(Side::Human);
        state.side_mut(Side::Human).on_board = 1;
        state.side_mut(Side::Human).to_place = 8;

        let action = provider("B\nD6\n").choose_action(&state);
        assert_eq!(action, Action::ArmBomb { target: 4 });
    }

    #[test]
    fn test_capture_rejects_ineligible_position() {
        let state = GameState::new();
        let pos = provider("A1\nD3\n").choose_capture(&state, &[16, 19]);
        assert_eq!(pos, 16);
    }

    #[test]
    fn test_undo_confirmation() {
        let state = GameState::new();
        assert!(provider("y\n").confirm_undo(&state, 3));
        assert!(!provider("n\n").confirm_undo(&state, 3));
        assert!(!provider("\n").confirm_undo(&state, 3));
    }
}
