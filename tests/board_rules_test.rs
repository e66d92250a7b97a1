//! Tests for the pawn movement rules and game state machine.

use pixel_chess::{
    Activation, Board, Game, Selection, Side, SquareId, Token, is_valid_move,
    is_valid_move_labels, render_text, run_script,
};

fn sq(label: &str) -> SquareId {
    label.parse().unwrap()
}

#[test]
fn test_starting_position() {
    let board = Board::starting();
    assert_eq!(board.count(Side::White), 8);
    assert_eq!(board.count(Side::Black), 8);

    for file in ["a", "b", "c", "d", "e", "f", "g", "h"] {
        assert_eq!(board.get(sq(&format!("{file}2"))), Some(Token::WHITE));
        assert_eq!(board.get(sq(&format!("{file}7"))), Some(Token::BLACK));
        assert_eq!(board.get(sq(&format!("{file}4"))), None);
    }
}

#[test]
fn test_valid_moves_are_the_king_neighbourhood() {
    assert!(is_valid_move_labels("e2", "e3"));
    assert!(is_valid_move_labels("e2", "d1"));
    assert!(is_valid_move_labels("e2", "f3"));
    assert!(!is_valid_move_labels("e2", "e4"));
    assert!(!is_valid_move_labels("e2", "e2"));
    assert!(!is_valid_move_labels("e2", "g2"));
    assert!(!is_valid_move_labels("e2", "x9"));
    assert!(!is_valid_move(sq("a1"), sq("h8")));
}

#[test]
fn test_select_then_move() {
    let mut game = Game::new();

    assert_eq!(game.activate(sq("e2")), Activation::Selected(sq("e2")));
    assert_eq!(game.selection(), Selection::Selected(sq("e2")));

    assert_eq!(
        game.activate(sq("e3")),
        Activation::Moved {
            from: sq("e2"),
            to: sq("e3"),
            captured: None,
        }
    );
    assert_eq!(game.board().get(sq("e2")), None);
    assert_eq!(game.board().get(sq("e3")), Some(Token::WHITE));
    assert_eq!(game.turn(), Side::Black);
    assert_eq!(game.selection(), Selection::Idle);
}

#[test]
fn test_cannot_select_opponent_or_empty() {
    let mut game = Game::new();
    assert_eq!(game.activate(sq("e7")), Activation::Ignored);
    assert_eq!(game.activate(sq("e4")), Activation::Ignored);
    assert_eq!(game.selection(), Selection::Idle);
    assert_eq!(game.turn(), Side::White);
}

#[test]
fn test_invalid_destination_deselects_without_moving() {
    let mut game = Game::new();
    game.activate(sq("e2"));

    assert_eq!(
        game.activate(sq("e5")),
        Activation::Deselected {
            from: sq("e2"),
            to: sq("e5"),
        }
    );
    assert_eq!(game.board(), &Board::starting());
    assert_eq!(game.turn(), Side::White);
    assert_eq!(game.selection(), Selection::Idle);
}

#[test]
fn test_capture_replaces_token() {
    let game = run_script(["e2", "e3", "d7", "d6", "e3", "e4", "d6", "d5", "e4", "d5"]);

    assert_eq!(game.board().get(sq("d5")), Some(Token::WHITE));
    assert_eq!(game.board().count(Side::Black), 7);
    assert_eq!(game.board().count(Side::White), 8);
    assert_eq!(game.turn(), Side::Black);
}

#[test]
fn test_token_count_never_grows() {
    let script = [
        "a2", "a3", "h7", "h6", "a3", "a4", "h6", "h5", "b2", "c3", "g7", "f6",
    ];
    let mut game = Game::new();
    let mut total = 16;
    for label in script {
        game.activate_label(label);
        let now = game.board().count(Side::White) + game.board().count(Side::Black);
        assert!(now <= total);
        total = now;
    }
}

#[test]
fn test_text_render_shows_selection_and_turn() {
    let mut game = Game::new();
    game.activate(sq("e2"));
    let text = render_text(&game);

    assert!(text.contains("[♙]"));
    assert!(text.trim_end().ends_with("Turn: White"));
    assert_eq!(text.matches('♟').count(), 8);
}

#[test]
fn test_game_serializes_to_json() {
    let game = run_script(["e2", "e3"]);
    let value = serde_json::to_value(&game).unwrap();

    assert_eq!(value["turn"], "Black");
    assert_eq!(value["board"]["e3"], "White");
    assert!(value["board"].get("e2").is_none());
}
