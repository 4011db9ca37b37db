use num_bigint::BigUint;

use crate::{
    combinatorics::{BinomialTable, FREE_SQUARES},
    table::WeightTable,
};

/// Exclusive bound of each side's count, and the radix of the two-digit index.
pub const PAWN_TABLE_RADIX: u32 = 16;

/// Piece choices per occupied square within one color class.
const CHOICES_PER_PIECE: u32 = 5;

#[inline]
pub const fn pawn_table_index(white: u32, black: u32) -> u32 {
    white * PAWN_TABLE_RADIX + black
}

/// `C(62, white) * C(62 - white, black) * 5^(white + black)`.
pub fn pawn_level_weight(binomials: &BinomialTable, white: u32, black: u32) -> BigUint {
    binomials.placement_count(FREE_SQUARES, &[white as u8, black as u8])
        * BigUint::from(CHOICES_PER_PIECE).pow(white + black)
}

/// All 256 (white, black) pairs, white outer. Nothing is pruned here, even pairs that
/// cannot appear in a game keep their weight.
pub fn build_pawn_table(binomials: &BinomialTable) -> WeightTable {
    let mut table = WeightTable::new("Pawn level", PAWN_TABLE_RADIX * PAWN_TABLE_RADIX);

    for white in 0..PAWN_TABLE_RADIX {
        for black in 0..PAWN_TABLE_RADIX {
            table.push(pawn_table_index(white, black), pawn_level_weight(binomials, white, black));
        }
    }

    table
}
