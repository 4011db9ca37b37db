use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::ValueEnum;
use log::info;
use num_bigint::BigUint;

use crate::{
    breakdown::{BreakdownKind, build_breakdown_table},
    coarse::build_coarse_table,
    combinatorics::{BinomialTable, to_weight},
    kings::KingPlacements,
    pawn_table::build_pawn_table,
    table::WeightTable,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum TableKind {
    /// Keyed by total non-king piece count
    Coarse,
    /// Keyed by white and black pawn counts
    Pawns,
    /// Full breakdown, up to three queens per side
    Restricted,
    /// Full breakdown, at most one queen per side
    VeryRestricted,
}

impl TableKind {
    pub const ALL: [TableKind; 4] = [
        TableKind::Coarse,
        TableKind::Pawns,
        TableKind::Restricted,
        TableKind::VeryRestricted,
    ];

    pub const fn file_name(self) -> &'static str {
        match self {
            TableKind::Coarse => "combs.txt",
            TableKind::Pawns => "combsWB.txt",
            TableKind::Restricted => "restricted.txt",
            TableKind::VeryRestricted => "veryRestricted.txt",
        }
    }
}

pub struct Generator {
    binomials: BinomialTable,
    kings: KingPlacements,
}

impl Generator {
    pub fn new() -> Self {
        Self {
            binomials: BinomialTable::for_board(),
            kings: KingPlacements::count(),
        }
    }

    pub fn kings(&self) -> &KingPlacements {
        &self.kings
    }

    /// Builds one table along with the exact sum of its weights.
    pub fn build(&self, kind: TableKind) -> (WeightTable, BigUint) {
        match kind {
            TableKind::Coarse => Self::with_sum(build_coarse_table(&self.binomials)),
            TableKind::Pawns => Self::with_sum(build_pawn_table(&self.binomials)),
            TableKind::Restricted => self.build_breakdown(BreakdownKind::Restricted),
            TableKind::VeryRestricted => self.build_breakdown(BreakdownKind::VeryRestricted),
        }
    }

    fn with_sum(table: WeightTable) -> (WeightTable, BigUint) {
        let sum = table.weight_sum();
        (table, sum)
    }

    fn build_breakdown(&self, kind: BreakdownKind) -> (WeightTable, BigUint) {
        let (table, stats) = build_breakdown_table(&self.binomials, kind);
        stats.log_summary(kind);
        (table, stats.weight_sum)
    }

    /// Builds one table and writes it into `out_dir`, returning the file written.
    pub fn generate(&self, kind: TableKind, out_dir: &Path) -> Result<PathBuf> {
        let (table, weight_sum) = self.build(kind);
        table.log_summary();

        let positions = self.kings.positions(&weight_sum);
        info!(
            "{} table: weight sum {:e}, samples out of {positions} ({:e}) pseudo-legal positions",
            table.name,
            to_weight(&weight_sum),
            to_weight(&positions)
        );

        let path = out_dir.join(kind.file_name());
        table.save(&path)?;
        info!("{} table written to {}", table.name, path.display());

        Ok(path)
    }
}
