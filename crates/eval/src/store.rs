// Copyright (C) 2025 The showdown developers
// SPDX-License-Identifier: Apache-2.0

//! Rank table persistence.
//!
//! The table file is a headerless sequence of `(hand value, rank)` records
//! written with bincode. A file that is missing, truncated, or fails
//! validation surfaces as an error the caller recovers from by rebuilding
//! the table.
use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use crate::table::RankTable;

/// Persists a rank table to a file.
pub fn save<P: AsRef<Path>>(table: &RankTable, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("cannot create table file {}", path.display()))?;

    bincode::serialize_into(BufWriter::new(file), &table.records())
        .with_context(|| format!("cannot write table file {}", path.display()))?;

    Ok(())
}

/// Loads a rank table from a file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<RankTable> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("cannot open table file {}", path.display()))?;

    let records: Vec<(u64, u16)> = bincode::deserialize_from(BufReader::new(file))
        .with_context(|| format!("cannot decode table file {}", path.display()))?;

    RankTable::from_records(records)
}
