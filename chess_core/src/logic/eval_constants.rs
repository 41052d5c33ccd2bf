use shakmaty::{Color, Role, Square};

// Piece Values (AlphaZero estimates)
pub const VAL_PAWN: i32 = 100;
pub const VAL_KNIGHT: i32 = 305;
pub const VAL_BISHOP: i32 = 333;
pub const VAL_ROOK: i32 = 563;
pub const VAL_QUEEN: i32 = 950;

// Mate score and the window edges of a root search
pub const MATE_VALUE: i32 = 100_000;
pub const SEARCH_BOUND: i32 = 1_000_000;

// Move ordering
pub const SCORE_CASTLE: i32 = 200;
pub const SCORE_CHECK: i32 = 1000;

// A side is in its endgame without a queen or below this much non-pawn material
pub const ENDGAME_MATERIAL: i32 = 1300;
pub const ENDGAME_PAWN_SCALE: f32 = 1.5;

// Piece-Square Tables, White's point of view.
// Index 0 is a1, index 63 is h8. Black reads square 63 - s.

#[rustfmt::skip]
pub const PST_PAWN: [i32; 64] = [
      0,   0,   0,   0,   0,   0,   0,   0,
      5,  10,  10, -20, -20,  10,  10,   5,
      5,  -5, -10,   0,   0, -10,  -5,   5,
      0,   0,   0,  20,  20,   0,   0,   0,
      5,   5,  10,  25,  25,  10,   5,   5,
     10,  10,  20,  30,  30,  20,  10,  10,
     50,  50,  50,  50,  50,  50,  50,  50,
    100, 100, 100, 100, 100, 100, 100, 100,
];

#[rustfmt::skip]
pub const PST_KNIGHT: [i32; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50,
    -40, -20,   0,   5,   5,   0, -20, -40,
    -30,   5,  10,  15,  15,  10,   5, -30,
    -30,   0,  15,  20,  20,  15,   0, -30,
    -30,   5,  15,  20,  20,  15,   5, -30,
    -30,   0,  10,  15,  15,  10,   0, -30,
    -40, -20,   0,   0,   0,   0, -20, -40,
    -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
pub const PST_BISHOP: [i32; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20,
    -10,   5,   0,   0,   0,   0,   5, -10,
    -10,  10,  10,  10,  10,  10,  10, -10,
    -10,   0,  10,  10,  10,  10,   0, -10,
    -10,   5,   5,  10,  10,   5,   5, -10,
    -10,   0,   5,  10,  10,   5,   0, -10,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
pub const PST_ROOK: [i32; 64] = [
      0,   0,   0,   5,   5,   0,   0,   0,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
      5,  10,  10,  10,  10,  10,  10,   5,
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
pub const PST_QUEEN: [i32; 64] = [
    -20, -10, -10,  -5,  -5, -10, -10, -20,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -10,   5,   5,   5,   5,   5,   0, -10,
      0,   0,   5,   5,   5,   5,   0,  -5,
     -5,   0,   5,   5,   5,   5,   0,  -5,
    -10,   0,   5,   5,   5,   5,   0, -10,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -20, -10, -10,  -5,  -5, -10, -10, -20,
];

// Middlegame king: stay behind the pawns.
#[rustfmt::skip]
pub const PST_KING: [i32; 64] = [
     20,  30,  10,   0,   0,  10,  30,  20,
     20,  20,   0,   0,   0,   0,  20,  20,
    -10, -20, -20, -20, -20, -20, -20, -10,
    -20, -30, -30, -40, -40, -30, -30, -20,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
];

// Endgame king: head for the centre.
#[rustfmt::skip]
pub const PST_KING_END: [i32; 64] = [
    -50, -30, -30, -30, -30, -30, -30, -50,
    -30, -30,   0,   0,   0,   0, -30, -30,
    -30, -10,  20,  30,  30,  20, -10, -30,
    -30, -10,  30,  40,  40,  30, -10, -30,
    -30, -10,  30,  40,  40,  30, -10, -30,
    -30, -10,  20,  30,  30,  20, -10, -30,
    -30, -20, -10,   0,   0, -10, -20, -30,
    -50, -40, -30, -20, -20, -30, -40, -50,
];

/// Positional value of `role` standing on `square` for `color`.
pub fn get_pst_value(role: Role, color: Color, square: Square, endgame: bool) -> i32 {
    let index = square as usize;
    let index = if color == Color::White { index } else { 63 - index };

    let table = match role {
        Role::Pawn => &PST_PAWN,
        Role::Knight => &PST_KNIGHT,
        Role::Bishop => &PST_BISHOP,
        Role::Rook => &PST_ROOK,
        Role::Queen => &PST_QUEEN,
        Role::King if endgame => &PST_KING_END,
        Role::King => &PST_KING,
    };
    table.get(index).copied().unwrap_or(0)
}
