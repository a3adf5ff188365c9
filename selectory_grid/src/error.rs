// Copyright 2025 the Selectory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction errors.
//!
//! Only grid construction can fail. Navigation and lookups report "no valid
//! target" through `bool` and `Option` returns instead.

use thiserror::Error;

/// Reasons a grid cannot be built from the supplied columns and options.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// No columns were supplied.
    #[error("grid needs at least one column")]
    NoColumns,

    /// A column's length differs from the first column's.
    #[error("column {column} has {found} rows, expected {expected}")]
    RaggedColumn {
        /// Index of the offending column.
        column: usize,
        /// Row count of the first column.
        expected: usize,
        /// Row count of the offending column.
        found: usize,
    },

    /// No cell holds an enabled option, so no cursor can be placed.
    #[error("grid has no enabled option to place a cursor on")]
    NoSelectableOption,
}
