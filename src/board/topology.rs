//! Static board topology for Nine Men's Morris
//!
//! The board has 24 positions arranged as three concentric squares joined
//! at the edge midpoints. This module holds the constant data: coordinate
//! labels, adjacency lists, and the 16 mill lines. No behavior lives here
//! beyond coordinate translation.
//!
//! Position numbering (with coordinate labels):
//!
//! ```text
//! 7   0-----------1-----------2        A7          D7          G7
//!     |           |           |
//! 6   |   3-------4-------5   |            B6      D6      F6
//!     |   |       |       |   |
//! 5   |   |   6---7---8   |   |                C5  D5  E5
//!     |   |   |       |   |   |
//! 4   9--10--11      12--13--14        A4  B4  C4      E4  F4  G4
//!     |   |   |       |   |   |
//! 3   |   |  15--16--17   |   |                C3  D3  E3
//!     |   |       |       |   |
//! 2   |  18------19------20   |            B2      D2      F2
//!     |           |           |
//! 1  21----------22----------23        A1          D1          G1
//!     A   B   C   D   E   F   G
//! ```

/// Number of positions on the board.
pub const NUM_POSITIONS: usize = 24;

/// Coordinate label for each position, column letter then rank digit.
pub const COORDINATES: [&str; NUM_POSITIONS] = [
    "A7", "D7", "G7", "B6", "D6", "F6", "C5", "D5", "E5", "A4", "B4", "C4", "E4", "F4", "G4",
    "C3", "D3", "E3", "B2", "D2", "F2", "A1", "D1", "G1",
];

/// Adjacency list for each position (2-4 neighbors).
pub const ADJACENT: [&[usize]; NUM_POSITIONS] = [
    &[1, 9],
    &[0, 2, 4],
    &[1, 14],
    &[4, 10],
    &[1, 3, 5, 7],
    &[4, 13],
    &[7, 11],
    &[4, 6, 8],
    &[7, 12],
    &[0, 10, 21],
    &[3, 9, 11, 18],
    &[6, 10, 15],
    &[8, 13, 17],
    &[5, 12, 14, 20],
    &[2, 13, 23],
    &[11, 16],
    &[15, 17, 19],
    &[12, 16],
    &[10, 19],
    &[16, 18, 20, 22],
    &[13, 19],
    &[9, 22],
    &[19, 21, 23],
    &[14, 22],
];

/// The 16 three-in-a-row lines. Each position belongs to exactly two.
pub const MILLS: [[usize; 3]; 16] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [9, 10, 11],
    [12, 13, 14],
    [15, 16, 17],
    [18, 19, 20],
    [21, 22, 23],
    [0, 9, 21],
    [3, 10, 18],
    [6, 11, 15],
    [1, 4, 7],
    [16, 19, 22],
    [8, 12, 17],
    [5, 13, 20],
    [2, 14, 23],
];

/// Parse a coordinate label like `"D6"` into a position index.
///
/// Matching is case-insensitive. Returns `None` for anything that is not
/// one of the 24 labels.
#[must_use]
pub fn coord_to_index(coord: &str) -> Option<usize> {
    let upper = coord.trim().to_ascii_uppercase();
    COORDINATES.iter().position(|&c| c == upper)
}

/// Coordinate label for a position index.
#[inline]
#[must_use]
pub fn index_to_coord(pos: usize) -> &'static str {
    COORDINATES[pos]
}
