//! Standalone AI-vs-AI demonstration game.
//!
//! Drives the engine exclusively through the public interactive protocol,
//! the same way a UI would: select, move, promote, and read the history for
//! the move list.
//!
//! Run with:
//! `cargo run --release`

use parlor_chess::engines::ai_player::AiPlayer;
use parlor_chess::engines::engine_trait::Difficulty;
use parlor_chess::game_state::chess_types::{Color, PieceKind};
use parlor_chess::game_state::game_engine::{GameEngine, MoveOutcome};
use parlor_chess::utils::render_game_state::render_board;

const MAX_PLIES: usize = 120;

fn main() {
    let mut game = GameEngine::new();
    let players = [
        AiPlayer::new(Color::White, Difficulty::Medium),
        AiPlayer::new(Color::Black, Difficulty::Hard),
    ];

    while !game.is_game_over() && game.move_history().len() < MAX_PLIES {
        let player = &players[game.current_player().index()];
        let Some(chosen) = player.best_move(&game) else {
            break;
        };

        game.select_piece(chosen.from);
        match game.make_move(chosen.to) {
            Ok(MoveOutcome::Completed(_)) => {}
            Ok(MoveOutcome::PromotionPending(_)) => {
                if let Err(err) = game.promote_pawn(PieceKind::Queen) {
                    eprintln!("promotion failed: {err}");
                    break;
                }
            }
            Err(err) => {
                eprintln!("engine refused {} to {}: {err}", chosen.from, chosen.to);
                break;
            }
        }
    }

    println!("{}", render_board(game.board()));
    println!();

    let labels: Vec<&str> = game
        .history()
        .iter()
        .skip(1)
        .map(|entry| entry.notation.as_str())
        .collect();
    for (turn, pair) in labels.chunks(2).enumerate() {
        match pair {
            [white, black] => println!("{}. {white} {black}", turn + 1),
            [white] => println!("{}. {white}", turn + 1),
            _ => {}
        }
    }

    println!();
    match game.winner() {
        Some(color) => println!("{color} wins by {:?}", game.status()),
        None => println!(
            "result after {} plies: {:?}",
            game.move_history().len(),
            game.status()
        ),
    }
}
