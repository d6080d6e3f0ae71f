//! Precomputed offset and ray tables.
//!
//! Tables only apply the 8x8 bounds; callers still ask
//! [`Board::is_on_board`](super::Board::is_on_board) for the variant's parity.

use once_cell::sync::Lazy;

use super::Square;

/// Rook directions followed by bishop directions, as (dx, dy)
pub(crate) const DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

pub(crate) const ORTHOGONAL: std::ops::Range<usize> = 0..4;
pub(crate) const DIAGONAL: std::ops::Range<usize> = 4..8;

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

fn targets(offsets: &[(isize, isize)]) -> Vec<Vec<Square>> {
    Square::all()
        .map(|from| {
            offsets
                .iter()
                .filter_map(|&(dx, dy)| from.offset(dx, dy))
                .collect()
        })
        .collect()
}

/// Squares a knight jumps to, per origin index
pub(crate) static KNIGHT_TARGETS: Lazy<Vec<Vec<Square>>> = Lazy::new(|| targets(&KNIGHT_OFFSETS));

/// Adjacent squares, per origin index
pub(crate) static KING_TARGETS: Lazy<Vec<Vec<Square>>> = Lazy::new(|| targets(&DIRECTIONS));

/// For each origin index and each of the 8 directions, the squares along the
/// ray ordered nearest first.
pub(crate) static RAYS: Lazy<Vec<[Vec<Square>; 8]>> = Lazy::new(|| {
    Square::all()
        .map(|from| {
            std::array::from_fn(|dir| {
                let (dx, dy) = DIRECTIONS[dir];
                std::iter::successors(from.offset(dx, dy), |sq| sq.offset(dx, dy)).collect()
            })
        })
        .collect()
});

#[inline]
pub(crate) fn ray(from: Square, dir: usize) -> &'static [Square] {
    &RAYS[from.as_index()][dir]
}

#[inline]
pub(crate) fn knight_targets(from: Square) -> &'static [Square] {
    &KNIGHT_TARGETS[from.as_index()]
}

#[inline]
pub(crate) fn king_targets(from: Square) -> &'static [Square] {
    &KING_TARGETS[from.as_index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_knight_has_two_targets() {
        assert_eq!(knight_targets(Square(0, 0)).len(), 2);
        assert_eq!(knight_targets(Square(3, 3)).len(), 8);
    }

    #[test]
    fn test_king_targets_at_edge() {
        assert_eq!(king_targets(Square(0, 0)).len(), 3);
        assert_eq!(king_targets(Square(4, 0)).len(), 5);
    }

    #[test]
    fn test_rays_nearest_first() {
        let up = ray(Square(0, 0), 0);
        assert_eq!(up.len(), 7);
        assert_eq!(up[0], Square(0, 1));
        assert_eq!(up[6], Square(0, 7));

        let diag = ray(Square(0, 0), 4);
        assert_eq!(diag.last(), Some(&Square(7, 7)));
        assert!(ray(Square(0, 0), 7).is_empty());
    }
}
