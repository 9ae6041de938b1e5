//! Coordinate conversions for algebraic square names.
//!
//! Converts between human-readable squares (e.g. `e4`) and board
//! coordinates reused by the FEN, notation and console components.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::Coord;

/// Convert an algebraic square (for example: "e4") to a coordinate.
#[inline]
pub fn algebraic_to_coord(square: &str) -> ChessResult<Coord> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    Ok(Coord::new(rank - b'1', file - b'a'))
}

/// Convert a coordinate to an algebraic square (for example: "e4").
#[inline]
pub fn coord_to_algebraic(coord: Coord) -> ChessResult<String> {
    if !coord.is_on_board() {
        return Err(ChessErrors::InvalidAlgebraicString(format!(
            "({}, {})",
            coord.row, coord.col
        )));
    }

    let file_char = char::from(b'a' + coord.col);
    let rank_char = char::from(b'1' + coord.row);

    Ok(format!("{file_char}{rank_char}"))
}

/// Space-separated square list, used for hints.
pub fn coords_to_algebraic_list(coords: &[Coord]) -> ChessResult<String> {
    let names = coords
        .iter()
        .map(|coord| coord_to_algebraic(*coord))
        .collect::<ChessResult<Vec<_>>>()?;
    Ok(names.join(" "))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_coord, coord_to_algebraic, coords_to_algebraic_list};
    use crate::game_state::chess_types::Coord;

    #[test]
    fn corner_squares_convert_both_ways() {
        assert_eq!(algebraic_to_coord("a1").expect("a1 should parse"), Coord::new(0, 0));
        assert_eq!(algebraic_to_coord("h8").expect("h8 should parse"), Coord::new(7, 7));
        assert_eq!(algebraic_to_coord("E2").expect("E2 should parse"), Coord::new(1, 4));
        assert_eq!(coord_to_algebraic(Coord::new(0, 0)).expect("a1 should convert"), "a1");
        assert_eq!(coord_to_algebraic(Coord::new(3, 4)).expect("e4 should convert"), "e4");
    }

    #[test]
    fn rejects_off_board_names() {
        assert!(algebraic_to_coord("i1").is_err());
        assert!(algebraic_to_coord("a9").is_err());
        assert!(algebraic_to_coord("a10").is_err());
        assert!(algebraic_to_coord("").is_err());
        assert!(coord_to_algebraic(Coord::new(8, 0)).is_err());
    }

    #[test]
    fn formats_hint_lists() {
        let coords = [Coord::new(2, 4), Coord::new(3, 4)];
        assert_eq!(
            coords_to_algebraic_list(&coords).expect("squares should convert"),
            "e3 e4"
        );
    }
}
