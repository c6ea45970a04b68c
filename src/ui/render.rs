//! Text rendering of the game state
//!
//! Pure string builders plus a [`GameObserver`] that prints them. Pieces
//! carrying an armed bomb render in red via ANSI escapes.

use crate::board::{Action, CompoundAction, GameState, Phase, Side, index_to_coord};
use crate::game::{GameEvent, GameObserver};

const RED: &str = "\x1b[91m";
const RESET: &str = "\x1b[0m";

/// Symbol for one cell: `·`, `O` or `X`, red when a bomb rides it.
#[must_use]
pub fn symbol(state: &GameState, pos: usize) -> String {
    match state.cell(pos) {
        None => "·".to_string(),
        Some(side) => {
            let s = side.symbol();
            if state.bombs.is_armed(pos) {
                format!("{RED}{s}{RESET}")
            } else {
                s.to_string()
            }
        }
    }
}

/// Status header: phase plus both sides' pools and bomb availability.
#[must_use]
pub fn render_status(state: &GameState) -> String {
    let phase_desc = match state.phase() {
        Phase::Placing => "Phase 1: Placing",
        Phase::Moving => "Phase 2: Moving",
        Phase::Flying => "Phase 3: Flying",
    };
    let human = state.side(Side::Human);
    let ai = state.side(Side::Ai);
    let yn = |b: bool| if b { "Yes" } else { "No" };
    format!(
        "\n  Nine Men's Morris - {phase_desc}\n  Player: O ({} on board, {} to place), Bomb Available: {}\n  AI: X ({} on board, {} to place), Bomb Available: {}\n",
        human.on_board,
        human.to_place,
        yn(human.bomb_available),
        ai.on_board,
        ai.to_place,
        yn(ai.bomb_available),
    )
}

/// The board grid with coordinate rails on all four edges.
#[must_use]
pub fn render_board(state: &GameState) -> String {
    let p: Vec<String> = (0..24).map(|pos| symbol(state, pos)).collect();
    format!(
        "    A   B   C   D   E   F   G\n\
         7   {}-----------{}-----------{}\n\
         \x20   |           |           |\n\
         6   |   {}-------{}-------{}   |\n\
         \x20   |   |       |       |   |\n\
         5   |   |   {}---{}---{}   |   |\n\
         \x20   |   |   |       |   |   |\n\
         4   {}---{}---{}       {}---{}---{}\n\
         \x20   |   |   |       |   |   |\n\
         3   |   |   {}---{}---{}   |   |\n\
         \x20   |   |       |       |   |\n\
         2   |   {}-------{}-------{}   |\n\
         \x20   |           |           |\n\
         1   {}-----------{}-----------{}\n\
         \x20   A   B   C   D   E   F   G\n",
        p[0], p[1], p[2], p[3], p[4], p[5], p[6], p[7], p[8], p[9], p[10], p[11], p[12], p[13],
        p[14], p[15], p[16], p[17], p[18], p[19], p[20], p[21], p[22], p[23],
    )
}

/// One side's last move as prose, `"None"` before its first.
#[must_use]
pub fn format_move(compound: Option<CompoundAction>) -> String {
    let Some(compound) = compound else {
        return "None".to_string();
    };
    let mut out = match compound.action {
        Action::Place { to } => format!("Placed at {}", index_to_coord(to)),
        Action::ArmBomb { target } => {
            format!("Placed Time Bomb at {}", index_to_coord(target))
        }
        Action::Move { from, to } => {
            format!("Moved from {} to {}", index_to_coord(from), index_to_coord(to))
        }
    };
    if let Some(pos) = compound.capture {
        out.push_str(&format!(", removed piece at {}", index_to_coord(pos)));
    }
    out
}

/// Full display: status, grid, last moves and the active bomb list.
#[must_use]
pub fn render(state: &GameState) -> String {
    let mut out = render_status(state);
    out.push_str("\n  Game Board (coordinate system A1-G7):\n\n");
    out.push_str(&render_board(state));
    out.push_str("\n  Last moves:\n");
    out.push_str(&format!("  Player: {}\n", format_move(state.last_move(Side::Human))));
    out.push_str(&format!("  AI: {}\n", format_move(state.last_move(Side::Ai))));
    out.push_str("\n  Active Time Bombs:\n");
    if state.bombs.is_empty() {
        out.push_str("    None\n");
    } else {
        for bomb in state.bombs.iter() {
            let owner = match bomb.owner {
                Side::Human => "Player (O)",
                Side::Ai => "AI (X)",
            };
            out.push_str(&format!(
                "    ID {}: {} at {}, Detonates in {} of their turn(s).\n",
                bomb.id,
                owner,
                index_to_coord(bomb.position),
                bomb.timer,
            ));
        }
    }
    out
}

/// Observer that prints the game to stdout as it unfolds.
pub struct TerminalObserver;

impl GameObserver for TerminalObserver {
    fn on_event(&mut self, state: &GameState, event: &GameEvent) {
        match event {
            GameEvent::TurnStarted { side } => {
                // Fresh screen at the top of every turn.
                print!("\x1b[2J\x1b[H");
                print!("{}", render(state));
                match side {
                    Side::Human => println!("\n--- Player's Turn (O) ---"),
                    Side::Ai => println!("\n--- AI's Turn (X) ---"),
                }
            }
            GameEvent::Detonation(report) => {
                println!(
                    "\nKABOOM! Time Bomb (ID {}) at {} explodes!",
                    report.bomb.id,
                    index_to_coord(report.bomb.position)
                );
                for (pos, owner) in &report.destroyed {
                    println!(
                        "  {} piece at {} destroyed and returned to place pool.",
                        match owner {
                            Side::Human => "Player's",
                            Side::Ai => "AI's",
                        },
                        index_to_coord(*pos)
                    );
                }
                for bomb in &report.disarmed {
                    println!(
                        "  Time Bomb (ID {}) at {} was destroyed in the blast and disarmed.",
                        bomb.id,
                        index_to_coord(bomb.position)
                    );
                }
                if report.destroyed.is_empty() {
                    println!("  No pieces were in the blast radius.");
                }
            }
            GameEvent::BombArmed { side, target } => {
                println!(
                    "\n{} armed a Time Bomb at {}.",
                    match side {
                        Side::Human => "Player",
                        Side::Ai => "AI",
                    },
                    index_to_coord(*target)
                );
            }
            GameEvent::ActionApplied { side, compound } => {
                if *side == Side::Ai {
                    println!("\nAI: {}", format_move(Some(*compound)));
                }
            }
            GameEvent::MoveUndone { undos_left } => {
                println!("\nMove undone. Your turn again. ({undos_left} undos left)");
            }
            GameEvent::GameOver { winner } => {
                print!("{}", render(state));
                println!("\n--- Game Over! ---");
                println!(
                    "Winner: {}",
                    match winner {
                        Side::Human => "Player",
                        Side::Ai => "AI",
                    }
                );
            }
        }
    }
}
