use morris::board::Side;
use morris::game::Session;
use morris::ui::{TerminalObserver, TerminalProvider};

fn main() {
    let mut session = Session::new(TerminalProvider::stdin(), TerminalObserver);
    let winner = session.run();
    println!(
        "\nFinal Result: {} wins!",
        match winner {
            Side::Human => "Player",
            Side::Ai => "AI",
        }
    );
}
