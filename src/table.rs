use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};
use log::{debug, info};
use num_bigint::BigUint;
use num_format::{Locale, ToFormattedString};
use num_traits::Zero;

use crate::combinatorics::format_weight;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeightRecord {
    pub index: u32,
    pub weight: BigUint,
}

/// (index, weight) records in the order they were produced. Weights stay exact until
/// the table is written.
pub struct WeightTable {
    pub name: &'static str,
    /// Size of the index space the records are drawn from.
    pub capacity: u32,
    records: Vec<WeightRecord>,
}

impl WeightTable {
    pub fn new(name: &'static str, capacity: u32) -> Self {
        Self {
            name,
            capacity,
            records: Vec::new(),
        }
    }

    pub fn with_capacity(name: &'static str, capacity: u32, expected_records: usize) -> Self {
        Self {
            name,
            capacity,
            records: Vec::with_capacity(expected_records),
        }
    }

    #[inline]
    pub fn push(&mut self, index: u32, weight: BigUint) {
        debug_assert!(index < self.capacity, "index {index} outside of {} table", self.name);
        self.records.push(WeightRecord { index, weight });
    }

    pub fn records(&self) -> &[WeightRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Highest index actually emitted. Indices are sparse so this can be far below
    /// `capacity`.
    pub fn max_index(&self) -> Option<u32> {
        self.records.iter().map(|r| r.index).max()
    }

    pub fn weight_sum(&self) -> BigUint {
        self.records.iter().fold(BigUint::zero(), |sum, r| sum + &r.weight)
    }

    /// Two lines per record: the decimal index, then the weight as a floating literal.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for record in self.records() {
            writeln!(writer, "{}", record.index)?;
            writeln!(writer, "{}", format_weight(&record.weight))?;
        }

        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);

        self.write_to(&mut writer)
            .and_then(|_| writer.flush())
            .with_context(|| format!("Failed to write {} table to {}", self.name, path.display()))?;

        debug!("Wrote {} records to {}", self.len(), path.display());
        Ok(())
    }

    pub fn log_summary(&self) {
        info!(
            "{} table: {} records, max index {} of capacity {}",
            self.name,
            self.len().to_formatted_string(&Locale::en),
            self.max_index().map_or(String::from("none"), |i| i.to_formatted_string(&Locale::en)),
            self.capacity.to_formatted_string(&Locale::en)
        );
    }
}
