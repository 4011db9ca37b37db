use std::fmt::{self, Display};

// Column order of a signature. White and black alternate per piece type.
pub const WHITE_PAWNS: usize = 0;
pub const BLACK_PAWNS: usize = 1;
pub const WHITE_KNIGHTS: usize = 2;
pub const BLACK_KNIGHTS: usize = 3;
pub const WHITE_BISHOPS: usize = 4;
pub const BLACK_BISHOPS: usize = 5;
pub const WHITE_ROOKS: usize = 6;
pub const BLACK_ROOKS: usize = 7;
pub const WHITE_QUEENS: usize = 8;
pub const BLACK_QUEENS: usize = 9;

pub const COLUMN_COUNT: usize = 10;

const PIECE_LETTERS: [char; COLUMN_COUNT / 2] = ['P', 'N', 'B', 'R', 'Q'];

/// Non-king piece counts per color and type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MaterialSignature {
    pub counts: [u8; COLUMN_COUNT],
}

impl MaterialSignature {
    pub const fn new(counts: [u8; COLUMN_COUNT]) -> Self {
        Self { counts }
    }

    #[inline]
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&c| c as u32).sum()
    }

    pub fn white_total(&self) -> u32 {
        self.counts.iter().step_by(2).map(|&c| c as u32).sum()
    }

    pub fn black_total(&self) -> u32 {
        self.counts.iter().skip(1).step_by(2).map(|&c| c as u32).sum()
    }
}

impl Display for MaterialSignature {
    /// Piece letters per side, e.g. `KPPQvKpr`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut white = String::from("K");
        let mut black = String::from("K");
        for (column, &count) in self.counts.iter().enumerate() {
            let (side, letter) = if column % 2 == 0 {
                (&mut white, PIECE_LETTERS[column / 2])
            } else {
                (&mut black, PIECE_LETTERS[column / 2].to_ascii_lowercase())
            };
            for _ in 0..count {
                side.push(letter);
            }
        }

        write!(f, "{white}v{black}")
    }
}

/// Radices of the mixed-radix index, outermost (white pawns) first. A column's place
/// value is the product of the radices of every column after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexLayout {
    radices: [u32; COLUMN_COUNT],
}

impl IndexLayout {
    pub const fn with_queen_radix(queen_radix: u32) -> Self {
        Self {
            radices: [9, 9, 3, 3, 3, 3, 3, 3, queen_radix, queen_radix],
        }
    }

    pub fn place_value(&self, column: usize) -> u32 {
        self.radices[column + 1..].iter().product()
    }

    /// Size of the whole index space, realized or not.
    pub fn capacity(&self) -> u32 {
        self.radices.iter().product()
    }

    pub fn encode(&self, signature: &MaterialSignature) -> u32 {
        debug_assert!(
            signature.counts.iter().zip(self.radices).all(|(&count, radix)| (count as u32) < radix),
            "{signature:?} does not fit {:?}",
            self.radices
        );

        (0..COLUMN_COUNT)
            .map(|column| signature.counts[column] as u32 * self.place_value(column))
            .sum()
    }

    pub fn decode(&self, index: u32) -> Option<MaterialSignature> {
        if index >= self.capacity() {
            return None;
        }

        let mut rest = index;
        let mut counts = [0; COLUMN_COUNT];
        for column in (0..COLUMN_COUNT).rev() {
            counts[column] = (rest % self.radices[column]) as u8;
            rest /= self.radices[column];
        }

        Some(MaterialSignature::new(counts))
    }
}

#[cfg(test)]
mod signature_tests {
    use super::*;

    const RESTRICTED: IndexLayout = IndexLayout::with_queen_radix(4);

    #[test]
    pub fn restricted_place_values() {
        let expected = [104976, 11664, 3888, 1296, 432, 144, 48, 16, 4, 1];
        for (column, value) in expected.into_iter().enumerate() {
            assert_eq!(value, RESTRICTED.place_value(column), "column {column}");
        }
    }

    #[test]
    pub fn capacities() {
        assert_eq!(944784, RESTRICTED.capacity());
        assert_eq!(236196, IndexLayout::with_queen_radix(2).capacity());
    }

    #[test]
    pub fn encode_matches_place_value_sum() {
        let signature = MaterialSignature::new([7, 3, 1, 2, 0, 1, 2, 0, 3, 1]);
        let by_formula = 1 + 3 * 4 + 2 * 48 + 144 + 2 * 1296 + 3888 + 3 * 11664 + 7 * 104976;

        assert_eq!(by_formula, RESTRICTED.encode(&signature));
        assert_eq!(Some(signature), RESTRICTED.decode(by_formula));
    }

    #[test]
    pub fn empty_signature_is_index_zero() {
        assert_eq!(0, RESTRICTED.encode(&MaterialSignature::default()));
        assert_eq!(Some(MaterialSignature::default()), RESTRICTED.decode(0));
    }

    #[test]
    pub fn decode_rejects_out_of_range() {
        assert!(RESTRICTED.decode(RESTRICTED.capacity() - 1).is_some());
        assert_eq!(None, RESTRICTED.decode(RESTRICTED.capacity()));
    }

    #[test]
    pub fn side_totals() {
        let signature = MaterialSignature::new([8, 1, 2, 0, 1, 2, 0, 1, 3, 0]);

        assert_eq!(14, signature.white_total());
        assert_eq!(4, signature.black_total());
        assert_eq!(18, signature.total());
    }

    #[test]
    pub fn displays_as_piece_letters() {
        let signature = MaterialSignature::new([2, 0, 0, 0, 0, 0, 0, 1, 1, 0]);

        assert_eq!("KPPQvKr", signature.to_string());
        assert_eq!("KvK", MaterialSignature::default().to_string());
    }

    #[test]
    pub fn black_king_stays_uppercase() {
        let signature = MaterialSignature::new([0, 8, 0, 2, 0, 1, 0, 0, 0, 3]);
        let shown = signature.to_string();

        assert_eq!("KvKppppppppnnbqqq", shown);
        assert_eq!(2, shown.matches('K').count());
        assert!(!shown.contains('k'));
    }
}
