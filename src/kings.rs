use log::info;
use num_bigint::BigUint;

/// White-to-move and black-to-move count as different positions.
pub const SIDES_TO_MOVE: u32 = 2;

const SQUARE_A2: u8 = 8;
const SQUARE_H7: u8 = 55;

/// Ordered (white king, black king) square pairs where the kings do not touch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KingPlacements {
    pub total: u32,
    pub none_in_pawn_field: u32,
    pub one_in_pawn_field: u32,
    pub both_in_pawn_field: u32,
}

#[inline]
const fn in_pawn_field(square: u8) -> bool {
    square >= SQUARE_A2 && square <= SQUARE_H7
}

impl KingPlacements {
    pub fn count() -> Self {
        let mut placements = KingPlacements::default();

        for white_king in 0..64u8 {
            for black_king in 0..64u8 {
                let file_distance = (white_king % 8).abs_diff(black_king % 8);
                let rank_distance = (white_king / 8).abs_diff(black_king / 8);
                if file_distance < 2 && rank_distance < 2 {
                    continue;
                }

                placements.total += 1;
                match (in_pawn_field(white_king), in_pawn_field(black_king)) {
                    (true, true) => placements.both_in_pawn_field += 1,
                    (false, false) => placements.none_in_pawn_field += 1,
                    _ => placements.one_in_pawn_field += 1,
                }
            }
        }

        placements
    }

    /// Factor turning a material weight sum into a count of pseudo-legal positions.
    pub fn position_scale(&self) -> u32 {
        self.total * SIDES_TO_MOVE
    }

    /// Pseudo-legal positions behind a table whose weights sum to `weight_sum`.
    pub fn positions(&self, weight_sum: &BigUint) -> BigUint {
        weight_sum * BigUint::from(self.position_scale())
    }

    pub fn log_summary(&self) {
        info!(
            "King placements: {}. In pawn squares: none {}, one {}, both {}",
            self.total, self.none_in_pawn_field, self.one_in_pawn_field, self.both_in_pawn_field
        );
    }
}

#[cfg(test)]
mod kings_tests {
    use super::*;

    #[test]
    pub fn non_touching_king_pairs() {
        let placements = KingPlacements::count();

        assert_eq!(3612, placements.total);
        assert_eq!(7224, placements.position_scale());
    }

    #[test]
    pub fn positions_scale_the_weight_sum() {
        let placements = KingPlacements::count();

        assert_eq!(BigUint::from(7224u32), placements.positions(&BigUint::from(1u32)));
        assert_eq!(BigUint::from(0u32), placements.positions(&BigUint::from(0u32)));
    }

    #[test]
    pub fn pawn_field_classes_partition_the_total() {
        let placements = KingPlacements::count();

        assert_eq!(
            placements.total,
            placements.none_in_pawn_field + placements.one_in_pawn_field + placements.both_in_pawn_field
        );
        // 16 back rank squares, minus the 7 neighbouring pairs on each rank in both orders
        assert_eq!(16 * 15 - 2 * (2 * 7), placements.none_in_pawn_field);
    }
}
