//! Offset tables for pieces that jump to a fixed set of squares.

use crate::game_state::chess_types::Coord;

/// (row delta, column delta) pairs.
pub type Offset = (i8, i8);

pub const KNIGHT_OFFSETS: [Offset; 8] = [
    (2, -1),
    (1, -2),
    (1, 2),
    (2, 1),
    (-1, -2),
    (-2, -1),
    (-1, 2),
    (-2, 1),
];

pub const KING_OFFSETS: [Offset; 8] = [
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

/// On-board squares reached from `from` by each offset.
#[inline]
pub fn leaper_targets<'a>(
    from: Coord,
    offsets: &'a [Offset],
) -> impl Iterator<Item = Coord> + 'a {
    offsets
        .iter()
        .filter_map(move |&(d_row, d_col)| from.offset(d_row, d_col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knight_in_centre_reaches_eight_squares() {
        let d4 = Coord::new(3, 3);
        assert_eq!(leaper_targets(d4, &KNIGHT_OFFSETS).count(), 8);
    }

    #[test]
    fn corner_trims_off_board_targets() {
        let a1 = Coord::new(0, 0);
        let mut knight: Vec<Coord> = leaper_targets(a1, &KNIGHT_OFFSETS).collect();
        knight.sort();
        assert_eq!(knight, vec![Coord::new(1, 2), Coord::new(2, 1)]);
        assert_eq!(leaper_targets(a1, &KING_OFFSETS).count(), 3);
    }

    #[test]
    fn accepts_caller_owned_offsets() {
        let camel: Vec<Offset> = vec![(3, 1), (1, 3), (-3, -1)];
        let targets: Vec<Coord> = leaper_targets(Coord::new(0, 0), &camel).collect();
        assert_eq!(targets, vec![Coord::new(3, 1), Coord::new(1, 3)]);
    }
}
