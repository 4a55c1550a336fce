use std::fmt::{self, Debug};

use crate::bitset::bitset_traits;
use crate::{Position, BOARD_SIZE};

const NUM_CELLS: u8 = BOARD_SIZE * BOARD_SIZE;
const BOARD_MASK: u64 = (1u64 << NUM_CELLS) - 1;

/// A [`Copy`] board representation that stores only a single
/// bit per cell.
///
/// The [`Board`](crate::Board) keeps one of these per player plus one for
/// the walls. Bit `row * 7 + col` stands for the cell `(row, col)`, so iterating
/// goes through the positions in row-major order.
///
/// It can be converted back into a list of positions by
/// means of its [`IntoIterator`] instance.
///
/// Note that its "mutating" methods return a new object instead of really mutating.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitBoard {
    /// Only the low 49 bits are used.
    bits: u64,
}

bitset_traits!(BitBoard, BOARD_MASK);

impl BitBoard {
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Every cell of the board.
    pub const fn full() -> Self {
        Self { bits: BOARD_MASK }
    }

    pub fn singleton(pos: Position) -> Self {
        Self::empty().insert(pos)
    }

    /// Set the bit at the specified position to `true`.
    #[must_use]
    pub fn insert(self, pos: Position) -> Self {
        Self {
            bits: self.bits | (1u64 << pos.index()),
        }
    }

    #[must_use]
    pub fn remove(self, pos: Position) -> Self {
        Self {
            bits: self.bits & !(1u64 << pos.index()),
        }
    }

    pub fn contains(self, pos: Position) -> bool {
        self.bits & (1u64 << pos.index()) != 0
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub fn num_entries(self) -> u32 {
        self.bits.count_ones()
    }

    /// The up to eight cells touching `pos`, including diagonally.
    pub fn neighbors(pos: Position) -> Self {
        let mut neighbors = Self::empty();
        for d_row in -1..=1 {
            for d_col in -1..=1 {
                if (d_row, d_col) == (0, 0) {
                    continue;
                }
                if let Some(neighbor) = pos.offset(d_row, d_col) {
                    neighbors = neighbors.insert(neighbor);
                }
            }
        }
        neighbors
    }
}

impl Debug for BitBoard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut s = String::with_capacity(usize::from(NUM_CELLS) * 2);
        for idx in 0..NUM_CELLS {
            s.push(if self.bits & (1u64 << idx) != 0 { '1' } else { '0' });
            if idx % BOARD_SIZE == BOARD_SIZE - 1 {
                s.push('\n');
            } else {
                s.push(' ');
            }
        }
        write!(f, "{}", s)
    }
}

impl FromIterator<Position> for BitBoard {
    fn from_iter<T: IntoIterator<Item = Position>>(iter: T) -> Self {
        iter.into_iter().fold(Self::empty(), BitBoard::insert)
    }
}

/// Iterator produced by [`BitBoard::into_iter()`].
pub struct BitBoardIter {
    bitboard: BitBoard,
}

impl IntoIterator for BitBoard {
    type Item = Position;

    type IntoIter = BitBoardIter;

    fn into_iter(self) -> Self::IntoIter {
        BitBoardIter { bitboard: self }
    }
}

impl Iterator for BitBoardIter {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bitboard.is_empty() {
            None
        } else {
            // This cast is safe, as only the low 49 bits can be set
            let idx = self.bitboard.bits.trailing_zeros() as u8;
            // Clear the flag corresponding to this position
            self.bitboard.bits ^= 1u64 << idx;
            Some(Position::from_index(idx))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bitboard.num_entries() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for BitBoardIter {}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::pos;

    quickcheck! {
        fn complement_stays_on_board(bits: u64) -> bool {
            let bb = BitBoard { bits: bits & BOARD_MASK };
            let complement = !bb;
            complement.num_entries() + bb.num_entries() == u32::from(NUM_CELLS)
                && (complement & bb).is_empty()
        }
    }

    #[test]
    fn neighbors_are_clipped_at_the_edges() {
        assert_eq!(BitBoard::neighbors(pos!(0, 0)).num_entries(), 3);
        assert_eq!(BitBoard::neighbors(pos!(0, 3)).num_entries(), 5);
        assert_eq!(BitBoard::neighbors(pos!(3, 3)).num_entries(), 8);
        assert_eq!(BitBoard::neighbors(pos!(6, 6)).num_entries(), 3);
        assert!(!BitBoard::neighbors(pos!(3, 3)).contains(pos!(3, 3)));
    }

    #[test]
    fn iterates_in_row_major_order() {
        let bb = BitBoard::from_iter([pos!(6, 0), pos!(0, 6), pos!(2, 2), pos!(0, 0)]);
        assert_eq!(
            bb.into_iter().collect::<Vec<_>>(),
            vec![pos!(0, 0), pos!(0, 6), pos!(2, 2), pos!(6, 0)]
        );
    }

    #[test]
    fn insert_and_remove() {
        let bb = BitBoard::empty().insert(pos!(4, 5)).insert(pos!(4, 5));
        assert_eq!(bb.num_entries(), 1);
        assert!(bb.contains(pos!(4, 5)));
        assert!(bb.remove(pos!(4, 5)).is_empty());
        assert_eq!(BitBoard::full().num_entries(), 49);
    }
}
