use std::time::Instant;

use log::{debug, info};
use num_bigint::BigUint;
use num_format::{Locale, ToFormattedString};

use crate::{
    combinatorics::{BinomialTable, FREE_SQUARES, to_weight},
    signature::{
        BLACK_BISHOPS, BLACK_KNIGHTS, BLACK_PAWNS, BLACK_QUEENS, BLACK_ROOKS, COLUMN_COUNT, IndexLayout,
        MaterialSignature, WHITE_BISHOPS, WHITE_KNIGHTS, WHITE_PAWNS, WHITE_QUEENS, WHITE_ROOKS,
    },
    table::WeightTable,
};

pub const MAX_PAWNS: u8 = 8;
/// Knights, bishops and rooks. Underpromotion is not modeled.
pub const MAX_OFFICERS: u8 = 2;

/// Ceiling on one side's pawns, knights, bishops and rooks plus any further queens.
pub const SIDE_PIECE_CAP: i32 = 16;
/// Ceiling on non-king pieces of both sides together.
pub const TOTAL_PIECE_CAP: i32 = 31;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BreakdownKind {
    /// Up to three queens per side.
    Restricted,
    /// At most one queen per side.
    VeryRestricted,
}

impl BreakdownKind {
    pub const fn queen_radix(self) -> u32 {
        match self {
            BreakdownKind::Restricted => 4,
            BreakdownKind::VeryRestricted => 2,
        }
    }

    pub const fn layout(self) -> IndexLayout {
        IndexLayout::with_queen_radix(self.queen_radix())
    }

    pub const fn name(self) -> &'static str {
        match self {
            BreakdownKind::Restricted => "Restricted",
            BreakdownKind::VeryRestricted => "Very restricted",
        }
    }
}

/// Exclusive upper bound for the queen count in `column`, given everything placed in
/// the columns before it. Both the side cap and the shared cap can bind.
pub fn queen_limit(queen_radix: u32, counts: &[u8; COLUMN_COUNT], column: usize) -> u8 {
    let placed: i32 = counts[..column].iter().map(|&c| c as i32).sum();
    let own: i32 = counts[column % 2..column].iter().step_by(2).map(|&c| c as i32).sum();

    (queen_radix as i32)
        .min(SIDE_PIECE_CAP - own)
        .min(TOTAL_PIECE_CAP - placed)
        .max(0) as u8
}

#[inline]
fn column_limit(kind: BreakdownKind, counts: &[u8; COLUMN_COUNT], column: usize) -> u8 {
    match column {
        WHITE_PAWNS | BLACK_PAWNS => MAX_PAWNS + 1,
        WHITE_KNIGHTS | BLACK_KNIGHTS | WHITE_BISHOPS | BLACK_BISHOPS | WHITE_ROOKS | BLACK_ROOKS => MAX_OFFICERS + 1,
        WHITE_QUEENS | BLACK_QUEENS => queen_limit(kind.queen_radix(), counts, column),
        _ => unreachable!("signature has no column {column}"),
    }
}

/// Visits every signature of `kind` with white pawns varying slowest and black queens
/// fastest, which is also increasing index order.
pub fn for_each_signature<F: FnMut(&MaterialSignature)>(kind: BreakdownKind, mut visit: F) {
    let mut counts = [0; COLUMN_COUNT];
    visit_column(kind, 0, &mut counts, &mut visit);
}

fn visit_column<F: FnMut(&MaterialSignature)>(
    kind: BreakdownKind,
    column: usize,
    counts: &mut [u8; COLUMN_COUNT],
    visit: &mut F,
) {
    if column == COLUMN_COUNT {
        visit(&MaterialSignature::new(*counts));
        return;
    }

    // queen limits read the columns already fixed above this frame
    let limit = column_limit(kind, counts, column);
    for count in 0..limit {
        counts[column] = count;
        visit_column(kind, column + 1, counts, visit);
    }
    counts[column] = 0;
}

/// Running diagnostics of one enumeration.
#[derive(Debug, Default)]
pub struct BreakdownStats {
    pub signatures: u64,
    pub weight_sum: BigUint,
    pub max_weight: BigUint,
    pub max_weight_signature: MaterialSignature,
    pub max_pieces: u32,
    pub max_pieces_signature: MaterialSignature,
}

impl BreakdownStats {
    pub fn record(&mut self, signature: &MaterialSignature, weight: &BigUint) {
        self.signatures += 1;
        self.weight_sum += weight;

        let pieces = signature.total();
        if pieces > self.max_pieces {
            self.max_pieces = pieces;
            self.max_pieces_signature = *signature;
            info!(
                "New max piece count {pieces} ({} white, {} black) at {signature}",
                signature.white_total(),
                signature.black_total()
            );
        }

        if *weight > self.max_weight {
            self.max_weight = weight.clone();
            self.max_weight_signature = *signature;
            info!("New max weight {:e} at {signature} {:?}", to_weight(weight), signature.counts);
        }
    }

    pub fn log_summary(&self, kind: BreakdownKind) {
        info!(
            "{}: {} signatures, max pieces {} ({}), max weight {:e} ({})",
            kind.name(),
            self.signatures.to_formatted_string(&Locale::en),
            self.max_pieces,
            self.max_pieces_signature,
            to_weight(&self.max_weight),
            self.max_weight_signature
        );
    }
}

pub fn build_breakdown_table(binomials: &BinomialTable, kind: BreakdownKind) -> (WeightTable, BreakdownStats) {
    let layout = kind.layout();
    let mut table = WeightTable::with_capacity(kind.name(), layout.capacity(), layout.capacity() as usize);
    let mut stats = BreakdownStats::default();

    let start_time = Instant::now();
    for_each_signature(kind, |signature| {
        let weight = binomials.placement_count(FREE_SQUARES, &signature.counts);
        stats.record(signature, &weight);
        table.push(layout.encode(signature), weight);
    });
    let elapsed = start_time.elapsed();

    debug!(
        "{} enumeration of {} signatures took {elapsed:#?}",
        kind.name(),
        stats.signatures.to_formatted_string(&Locale::en)
    );

    (table, stats)
}
