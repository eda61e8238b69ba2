//! Pieces tests - templates, clockwise rotation and piece geometry

use block_drop::core::pieces::{mask_cells, rotate_cw, template, SHAPES};
use block_drop::core::{Board, Piece};
use block_drop::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_X, SPAWN_Y};

fn cells(kind: PieceKind, rotations: usize) -> Vec<(i8, i8)> {
    let mut piece = Piece::spawn(kind);
    for _ in 0..rotations {
        piece = piece.rotated();
    }
    piece.cells().collect()
}

// ============== Shape Tests ==============

#[test]
fn test_every_template_has_four_cells() {
    for mask in SHAPES.iter() {
        assert_eq!(mask_cells(mask).count(), 4);
    }
}

#[test]
fn test_i_piece_rotations() {
    assert_eq!(cells(PieceKind::I, 0), [(0, 1), (1, 1), (2, 1), (3, 1)]);
    assert_eq!(cells(PieceKind::I, 1), [(2, 0), (2, 1), (2, 2), (2, 3)]);
    assert_eq!(cells(PieceKind::I, 2), [(0, 2), (1, 2), (2, 2), (3, 2)]);
    assert_eq!(cells(PieceKind::I, 3), [(1, 0), (1, 1), (1, 2), (1, 3)]);
}

#[test]
fn test_o_piece_is_rotation_invariant() {
    let o = template(PieceKind::O);
    assert_eq!(rotate_cw(&o), o);
    assert_eq!(cells(PieceKind::O, 0), [(1, 1), (2, 1), (1, 2), (2, 2)]);
}

#[test]
fn test_t_piece_rotations() {
    assert_eq!(cells(PieceKind::T, 0), [(1, 1), (0, 2), (1, 2), (2, 2)]);
    assert_eq!(cells(PieceKind::T, 1), [(1, 0), (1, 1), (2, 1), (1, 2)]);
}

#[test]
fn test_four_rotations_are_identity() {
    for kind in PieceKind::ALL {
        let start = Piece::spawn(kind);
        let back = start.rotated().rotated().rotated().rotated();
        assert_eq!(back, start, "{:?}", kind);
    }
}

#[test]
fn test_rotation_keeps_position() {
    let piece = Piece::spawn(PieceKind::J).shifted(3, 4);
    let rotated = piece.rotated();
    assert_eq!((rotated.x, rotated.y), (piece.x, piece.y));
    assert_eq!(rotated.kind, PieceKind::J);
    assert_ne!(rotated.mask, piece.mask);
}

#[test]
fn test_spawn_position_is_centered() {
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind);
        assert_eq!((piece.x, piece.y), (SPAWN_X, SPAWN_Y));
        assert_eq!(piece.color(), kind.color());
    }
    assert_eq!(SPAWN_X, 13);
}

#[test]
fn test_every_spawn_fits_empty_board() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        let mut piece = Piece::spawn(kind);
        for _ in 0..4 {
            assert!(board.is_valid_placement(&piece, piece.x, piece.y));
            piece = piece.rotated();
        }
    }
}

#[test]
fn test_validity_bounds_for_all_shapes_and_rotations() {
    let board = Board::new();
    let w = BOARD_WIDTH as i8;
    let h = BOARD_HEIGHT as i8;

    for kind in PieceKind::ALL {
        let mut piece = Piece::spawn(kind);
        for _ in 0..4 {
            for x in -5..w + 5 {
                for y in -5..h + 5 {
                    let out_of_bounds = piece.cells().any(|(dx, dy)| {
                        let gx = x + dx;
                        let gy = y + dy;
                        gx < 0 || gx >= w || gy >= h
                    });
                    assert_eq!(
                        board.is_valid_placement(&piece, x, y),
                        !out_of_bounds,
                        "{:?} {:?} at ({}, {})",
                        kind,
                        piece.mask,
                        x,
                        y
                    );
                }
            }
            piece = piece.rotated();
        }
    }
}
