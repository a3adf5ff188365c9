// Copyright 2025 the Selectory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the selection grid: coordinates, option records, columns, and axis flags.

use alloc::string::String;
use alloc::vec::Vec;

/// A cell position in the selection grid.
///
/// By convention `column` is x (left to right) and `row` is y (top to bottom).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// Column index (x).
    pub column: usize,
    /// Row index (y).
    pub row: usize,
}

impl Coordinate {
    /// Create a coordinate from a column and a row index.
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

impl core::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Read access to a selectable option.
///
/// The grid never mutates options; it only reads the key and the enabled flag.
/// Keys are expected to be unique and non-empty.
pub trait OptionReadModel {
    /// Unique key identifying the option.
    fn key(&self) -> &str;
    /// Whether a cursor may rest on this option.
    fn is_enable(&self) -> bool;
}

/// A plain option record for callers that have no richer option type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectOption {
    /// Unique key.
    pub key: String,
    /// Enabled flag.
    pub is_enable: bool,
}

impl SelectOption {
    /// Create an option record.
    pub fn new(key: impl Into<String>, is_enable: bool) -> Self {
        Self {
            key: key.into(),
            is_enable,
        }
    }
}

impl OptionReadModel for SelectOption {
    #[inline]
    fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    fn is_enable(&self) -> bool {
        self.is_enable
    }
}

impl<O: OptionReadModel + ?Sized> OptionReadModel for &O {
    #[inline]
    fn key(&self) -> &str {
        (**self).key()
    }

    #[inline]
    fn is_enable(&self) -> bool {
        (**self).is_enable()
    }
}

/// One column of the grid, as an ordered list of option keys (one per row).
///
/// An empty key marks a cell with no option.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionColumn {
    /// Option keys from the top row down.
    pub keys: Vec<String>,
}

impl OptionColumn {
    /// Create a column from anything that yields keys.
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of rows in this column.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

bitflags::bitflags! {
    /// Navigation policy for the column axis (x, left/right moves).
    ///
    /// The default enables both auto-change flags, so horizontal moves land on
    /// the nearest selectable row of the neighbouring column.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ColumnInfo: u8 {
        /// Moving past the first or last column wraps to the other end.
        const CIRCULAR                      = 0b0000_0001;
        /// Vertical moves fail when the adjacent cell in the column is empty or disabled.
        const NOT_MOVE_WHEN_NULL_OR_DISABLE = 0b0000_0010;
        /// A left move searches the rows of the target column.
        const AUTO_CHANGE_ROW_TO_LEFT       = 0b0000_0100;
        /// A right move searches the rows of the target column.
        const AUTO_CHANGE_ROW_TO_RIGHT      = 0b0000_1000;
    }
}

impl ColumnInfo {
    /// Build column flags from individual switches.
    pub fn new(
        is_circular: bool,
        is_not_move_when_null_or_disable: bool,
        is_auto_change_row_to_left: bool,
        is_auto_change_row_to_right: bool,
    ) -> Self {
        let mut info = Self::empty();
        info.set(Self::CIRCULAR, is_circular);
        info.set(
            Self::NOT_MOVE_WHEN_NULL_OR_DISABLE,
            is_not_move_when_null_or_disable,
        );
        info.set(Self::AUTO_CHANGE_ROW_TO_LEFT, is_auto_change_row_to_left);
        info.set(Self::AUTO_CHANGE_ROW_TO_RIGHT, is_auto_change_row_to_right);
        info
    }

    /// Whether the column axis wraps around.
    #[inline]
    pub fn is_circular(self) -> bool {
        self.contains(Self::CIRCULAR)
    }

    /// Whether vertical moves are vetoed by an empty or disabled neighbour.
    #[inline]
    pub fn is_not_move_when_null_or_disable(self) -> bool {
        self.contains(Self::NOT_MOVE_WHEN_NULL_OR_DISABLE)
    }

    /// Whether horizontal moves search rows instead of columns.
    #[inline]
    pub fn is_auto_change_row(self) -> bool {
        self.intersects(Self::AUTO_CHANGE_ROW_TO_LEFT | Self::AUTO_CHANGE_ROW_TO_RIGHT)
    }
}

impl Default for ColumnInfo {
    fn default() -> Self {
        Self::AUTO_CHANGE_ROW_TO_LEFT | Self::AUTO_CHANGE_ROW_TO_RIGHT
    }
}

bitflags::bitflags! {
    /// Navigation policy for the row axis (y, up/down moves).
    ///
    /// The default only enables wraparound.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct RowInfo: u8 {
        /// Moving past the first or last row wraps to the other end.
        const CIRCULAR                      = 0b0000_0001;
        /// Horizontal moves fail when the adjacent cell in the row is empty or disabled.
        const NOT_MOVE_WHEN_NULL_OR_DISABLE = 0b0000_0010;
        /// An up move searches the columns of the target row.
        const AUTO_CHANGE_COLUMN_TO_UP      = 0b0000_0100;
        /// A down move searches the columns of the target row.
        const AUTO_CHANGE_COLUMN_TO_DOWN    = 0b0000_1000;
    }
}

impl RowInfo {
    /// Build row flags from individual switches.
    pub fn new(
        is_circular: bool,
        is_not_move_when_null_or_disable: bool,
        is_auto_change_column_to_up: bool,
        is_auto_change_column_to_down: bool,
    ) -> Self {
        let mut info = Self::empty();
        info.set(Self::CIRCULAR, is_circular);
        info.set(
            Self::NOT_MOVE_WHEN_NULL_OR_DISABLE,
            is_not_move_when_null_or_disable,
        );
        info.set(Self::AUTO_CHANGE_COLUMN_TO_UP, is_auto_change_column_to_up);
        info.set(
            Self::AUTO_CHANGE_COLUMN_TO_DOWN,
            is_auto_change_column_to_down,
        );
        info
    }

    /// Whether the row axis wraps around.
    #[inline]
    pub fn is_circular(self) -> bool {
        self.contains(Self::CIRCULAR)
    }

    /// Whether horizontal moves are vetoed by an empty or disabled neighbour.
    #[inline]
    pub fn is_not_move_when_null_or_disable(self) -> bool {
        self.contains(Self::NOT_MOVE_WHEN_NULL_OR_DISABLE)
    }

    /// Whether vertical moves search columns instead of rows.
    #[inline]
    pub fn is_auto_change_column(self) -> bool {
        self.intersects(Self::AUTO_CHANGE_COLUMN_TO_UP | Self::AUTO_CHANGE_COLUMN_TO_DOWN)
    }
}

impl Default for RowInfo {
    fn default() -> Self {
        Self::CIRCULAR
    }
}

/// One of the four cursor moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    /// Toward column 0.
    Left,
    /// Toward the last column.
    Right,
    /// Toward row 0.
    Up,
    /// Toward the last row.
    Down,
}

impl MoveDirection {
    /// Whether this move runs along the column axis.
    #[inline]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Whether this move steps toward higher indices.
    #[inline]
    pub const fn is_forward(self) -> bool {
        matches!(self, Self::Right | Self::Down)
    }
}
