use super::*;
use crate::testing::{Node, TreeGame};

fn config() -> SearchConfig {
    SearchConfig::default()
}

#[test]
fn test_material_from_both_perspectives() {
    let mut root = Node::default();
    root.material[Color::White.idx()][PieceKind::Queen.idx()] = 1;
    root.material[Color::White.idx()][PieceKind::Pawn.idx()] = 3;
    root.material[Color::Black.idx()][PieceKind::Rook.idx()] = 2;
    root.material[Color::White.idx()][PieceKind::King.idx()] = 1;
    root.material[Color::Black.idx()][PieceKind::King.idx()] = 1;
    let game = TreeGame::new(Color::White, root);

    // 9 + 3 - 10
    assert_eq!(evaluate(&game, Color::White, 0, &config()), 2);
    assert_eq!(evaluate(&game, Color::Black, 0, &config()), -2);
}

#[test]
fn test_mirrored_material_is_negated() {
    let mut root = Node::default();
    root.material[Color::White.idx()][PieceKind::Knight.idx()] = 2;
    root.material[Color::Black.idx()][PieceKind::Bishop.idx()] = 1;
    root.material[Color::Black.idx()][PieceKind::Pawn.idx()] = 4;
    let mut mirrored = Node::default();
    mirrored.material = [root.material[1], root.material[0]];

    let game = TreeGame::new(Color::White, root);
    let mirror = TreeGame::new(Color::Black, mirrored);

    let original = evaluate(&game, Color::White, 0, &config());
    assert_eq!(original, -1);
    assert_eq!(evaluate(&mirror, Color::White, 0, &config()), -original);
    assert_eq!(evaluate(&mirror, Color::Black, 0, &config()), original);
}

#[test]
fn test_draw_ignores_material() {
    let mut root = Node::draw();
    root.material[Color::White.idx()][PieceKind::Queen.idx()] = 2;
    let game = TreeGame::new(Color::White, root);

    assert_eq!(evaluate(&game, Color::White, 3, &config()), 0);
    assert_eq!(evaluate(&game, Color::Black, 3, &config()), 0);
}

#[test]
fn test_checkmate_sign_follows_side_to_move() {
    // The side to move is the one that has been mated.
    let game = TreeGame::new(Color::Black, Node::mate());
    assert_eq!(evaluate(&game, Color::White, 1, &config()), 999);
    assert_eq!(evaluate(&game, Color::Black, 1, &config()), -999);
}

#[test]
fn test_faster_mates_score_more_extreme() {
    let cfg = config();
    let winner = TreeGame::new(Color::Black, Node::mate());
    let loser = TreeGame::new(Color::White, Node::mate());

    for moves in 1..20 {
        let near = evaluate(&winner, Color::White, moves, &cfg);
        let far = evaluate(&winner, Color::White, moves + 1, &cfg);
        assert!(near > far, "mate in {moves} should beat mate in {}", moves + 1);

        let near = evaluate(&loser, Color::White, moves, &cfg);
        let far = evaluate(&loser, Color::White, moves + 1, &cfg);
        assert!(near < far, "being mated sooner should score lower");
    }
}

#[test]
fn test_mate_outranks_any_material() {
    let cfg = config();
    let ceiling = cfg.piece_values.material_ceiling();
    let game = TreeGame::new(Color::Black, Node::mate());
    let deepest = i32::from(cfg.max_depth);
    assert!(evaluate(&game, Color::White, deepest, &cfg) > ceiling);
}

#[test]
fn test_custom_piece_values() {
    let mut cfg = config();
    cfg.piece_values.bishop = 4;
    let mut root = Node::default();
    root.material[Color::White.idx()][PieceKind::Bishop.idx()] = 1;
    root.material[Color::Black.idx()][PieceKind::Knight.idx()] = 1;
    let game = TreeGame::new(Color::White, root);

    assert_eq!(material(&game, Color::White, &cfg), 1);
}
