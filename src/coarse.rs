use log::debug;
use num_bigint::BigUint;

use crate::{
    combinatorics::{BinomialTable, FREE_SQUARES},
    table::WeightTable,
};

pub const MAX_TOTAL_PIECES: u32 = 30;

/// Piece choices per occupied square: five types in two colors.
const CHOICES_PER_PIECE: u32 = 10;

/// Weight for `pieces` non-king pieces: `C(62, pieces) * 10^pieces`. Every occupied square
/// may hold any of the ten pieces, so this overcounts illegal material on purpose.
pub fn coarse_weight(binomials: &BinomialTable, pieces: u32) -> BigUint {
    binomials.get(FREE_SQUARES, pieces) * BigUint::from(CHOICES_PER_PIECE).pow(pieces)
}

pub fn build_coarse_table(binomials: &BinomialTable) -> WeightTable {
    let mut table = WeightTable::new("Coarse", MAX_TOTAL_PIECES + 1);

    for pieces in 0..=MAX_TOTAL_PIECES {
        let weight = coarse_weight(binomials, pieces);
        debug!("{pieces} pieces: {weight}");
        table.push(pieces, weight);
    }

    table
}

#[cfg(test)]
mod coarse_tests {
    use num_integer::binomial;

    use super::*;
    use crate::combinatorics::format_weight;

    #[test]
    pub fn one_record_per_piece_count() {
        let table = build_coarse_table(&BinomialTable::for_board());

        assert_eq!(31, table.len());
        for (i, record) in table.records().iter().enumerate() {
            assert_eq!(i as u32, record.index);
        }
    }

    #[test]
    pub fn weights_are_exact() {
        let table = build_coarse_table(&BinomialTable::for_board());

        for record in table.records() {
            let p = record.index;
            let expected = binomial(BigUint::from(62u32), BigUint::from(p)) * BigUint::from(10u32).pow(p);
            assert_eq!(expected, record.weight, "p = {p}");
        }
    }

    macro_rules! coarse_record_test {
        ($($name:ident: $value:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let (pieces, expected) = $value;
                    let table = build_coarse_table(&BinomialTable::for_board());
                    let record = &table.records()[pieces];

                    assert_eq!(pieces as u32, record.index);
                    assert_eq!(expected, format_weight(&record.weight));
                }
            )*
        }
    }

    coarse_record_test! {
        no_pieces: (0, "1.0"),
        one_piece: (1, "620.0"),
        two_pieces: (2, "189100.0"),
    }
}
