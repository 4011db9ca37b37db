use num_bigint::BigUint;
use num_integer::binomial;
use num_traits::{One, ToPrimitive};

/// Squares left for non-king pieces once both kings are placed.
pub const FREE_SQUARES: u32 = 62;

/// Every `C(n, k)` for `k <= n <= max_n`, computed once as exact integers.
///
/// The breakdown tables ask for roughly ten binomials per signature and there are
/// hundreds of thousands of signatures, so the coefficients are looked up instead of
/// recomputed.
pub struct BinomialTable {
    rows: Vec<Vec<BigUint>>,
}

impl BinomialTable {
    pub fn new(max_n: u32) -> Self {
        let rows = (0..=max_n)
            .map(|n| (0..=n).map(|k| binomial(BigUint::from(n), BigUint::from(k))).collect())
            .collect();

        Self { rows }
    }

    pub fn for_board() -> Self {
        Self::new(FREE_SQUARES)
    }

    #[inline]
    pub fn get(&self, n: u32, k: u32) -> &BigUint {
        debug_assert!(k <= n, "C({n}, {k}) asked for more items than slots");
        &self.rows[n as usize][k as usize]
    }

    /// Ways to split `free_squares` into consecutive groups of the given sizes plus
    /// whatever is left over, i.e. the multinomial coefficient built up one binomial
    /// at a time with the available squares shrinking after each group.
    pub fn placement_count(&self, free_squares: u32, groups: &[u8]) -> BigUint {
        let mut available = free_squares;
        let mut ways = BigUint::one();

        for &group in groups {
            let group = group as u32;
            debug_assert!(group <= available, "group of {group} does not fit in {available} squares");
            ways *= self.get(available, group);
            available -= group;
        }

        ways
    }
}

/// Narrows an exact weight for serialization. This is the only place exactness is lost.
pub fn to_weight(value: &BigUint) -> f64 {
    value.to_f64().unwrap_or(f64::INFINITY)
}

/// Text form of a narrowed weight. Always carries a fractional part or an exponent so the
/// consumer reads it as a floating literal (`1.0`, `620.0`, `1.2e40`).
pub fn format_weight(value: &BigUint) -> String {
    format!("{:?}", to_weight(value))
}
