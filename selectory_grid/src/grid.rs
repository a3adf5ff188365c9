// Copyright 2025 the Selectory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The immutable grid of option cells.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use crate::error::GridError;
use crate::types::{Coordinate, OptionColumn, OptionReadModel};

/// A rectangular grid of optional option cells.
///
/// Cells hold indices into the option records, so an option that appears in
/// several cells is stored once. The grid is fixed after construction.
pub struct Grid<O> {
    options: Vec<O>,
    cells: Vec<Vec<Option<usize>>>, // [column][row] -> option slot
    row_len: usize,
}

impl<O: OptionReadModel> core::fmt::Debug for Grid<O> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let occupied = self.cells.iter().flatten().filter(|c| c.is_some()).count();
        f.debug_struct("Grid")
            .field("columns", &self.column_len())
            .field("rows", &self.row_len)
            .field("options", &self.options.len())
            .field("occupied", &occupied)
            .finish_non_exhaustive()
    }
}

impl<O: OptionReadModel> Grid<O> {
    /// Build a grid by resolving each column's keys against `options`.
    ///
    /// Empty keys and keys without a matching record become empty cells.
    /// When several records share a key the first one wins.
    pub fn new(columns: &[OptionColumn], options: Vec<O>) -> Result<Self, GridError> {
        let Some(first) = columns.first() else {
            return Err(GridError::NoColumns);
        };
        let row_len = first.len();
        if let Some((column, c)) = columns
            .iter()
            .enumerate()
            .find(|(_, c)| c.len() != row_len)
        {
            return Err(GridError::RaggedColumn {
                column,
                expected: row_len,
                found: c.len(),
            });
        }

        {
            let mut seen = BTreeSet::new();
            for o in &options {
                if !seen.insert(o.key()) {
                    log::warn!("duplicate option key {:?}; the first record wins", o.key());
                }
            }
        }

        let cells = columns
            .iter()
            .enumerate()
            .map(|(x, column)| {
                column
                    .keys
                    .iter()
                    .enumerate()
                    .map(|(y, key)| {
                        if key.is_empty() {
                            return None;
                        }
                        let slot = options.iter().position(|o| o.key() == key);
                        if slot.is_none() {
                            log::warn!("option key {key:?} at ({x}, {y}) has no option record");
                        }
                        slot
                    })
                    .collect()
            })
            .collect();

        Ok(Self {
            options,
            cells,
            row_len,
        })
    }

    /// Number of columns (x extent).
    #[inline]
    pub fn column_len(&self) -> usize {
        self.cells.len()
    }

    /// Number of rows (y extent).
    #[inline]
    pub fn row_len(&self) -> usize {
        self.row_len
    }

    /// All option records, in the order supplied.
    pub fn options(&self) -> &[O] {
        &self.options
    }

    /// The option at `coordinate`, or `None` when out of bounds or empty.
    pub fn get(&self, coordinate: Coordinate) -> Option<&O> {
        let slot = (*self.cells.get(coordinate.column)?.get(coordinate.row)?)?;
        self.options.get(slot)
    }

    /// Whether a cursor may rest at `coordinate`.
    #[inline]
    pub fn is_selectable(&self, coordinate: Coordinate) -> bool {
        self.get(coordinate).is_some_and(|o| o.is_enable())
    }

    /// Iterate `(coordinate, option)` over occupied cells, column by column.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, &O)> + '_ {
        self.cells.iter().enumerate().flat_map(move |(x, column)| {
            column.iter().enumerate().filter_map(move |(y, slot)| {
                let option = self.options.get((*slot)?)?;
                Some((Coordinate::new(x, y), option))
            })
        })
    }

    /// First cell holding `key`, scanning columns left to right and rows top to bottom.
    pub fn coordinate_of(&self, key: &str) -> Option<Coordinate> {
        self.iter().find(|(_, o)| o.key() == key).map(|(c, _)| c)
    }

    /// First selectable cell in scan order.
    pub fn first_selectable(&self) -> Option<Coordinate> {
        self.iter().find(|(_, o)| o.is_enable()).map(|(c, _)| c)
    }

    /// Unique keys of enabled options present in the grid, in scan order.
    pub fn enabled_option_keys(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.iter()
            .filter(|(_, o)| o.is_enable() && !o.key().trim().is_empty())
            .filter_map(|(_, o)| seen.insert(o.key()).then_some(o.key()))
            .collect()
    }
}

/// Step `index` by one toward `forward`/backward inside `0..len`.
///
/// Circular axes wrap to the opposite end; other axes saturate at the boundary.
pub(crate) fn step(index: usize, forward: bool, len: usize, circular: bool) -> usize {
    debug_assert!(len > 0, "cannot step along an empty axis");
    let last = len.saturating_sub(1);
    if forward {
        if index >= last {
            if circular { 0 } else { last }
        } else {
            index + 1
        }
    } else if index == 0 {
        if circular { last } else { 0 }
    } else {
        index - 1
    }
}
