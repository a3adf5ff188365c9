// Copyright 2025 the Selectory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selectory Grid: grid option selection for game menus.
//!
//! A menu is a rectangular grid of option cells. Each player owns a cursor that
//! rests on an enabled option and moves left, right, up, and down under
//! per-axis rules.
//!
//! - Circular axes wrap around; other axes stop at the boundary.
//! - A veto flag makes a move fail when the adjacent cell is empty or disabled.
//! - Auto-change flags turn a horizontal move into "step one column, then find
//!   the nearest selectable row" (and the vertical counterpart).
//! - Searches are bounded by the axis length, so grids full of disabled cells
//!   never spin.
//!
//! ## API overview
//!
//! - [`SelectOptionLogic`]: the navigation engine with per-player cursors and a
//!   coordinate-changed event.
//! - [`Grid`]: the immutable cell grid built from [`OptionColumn`]s and option records.
//! - [`OptionReadModel`]: what the engine needs from an option (a key and an
//!   enabled flag). [`SelectOption`] is a ready-made record.
//! - [`ColumnInfo`] / [`RowInfo`]: per-axis navigation flags.
//! - [`layout`]: the comma-separated key format and [`layout::OptionTable`].
//! - [`GridError`]: why a grid could not be built.
//!
//! ## Example
//!
//! ```
//! use selectory_grid::{ColumnInfo, Coordinate, OptionColumn, RowInfo, SelectOption, SelectOptionLogic};
//!
//! let columns = vec![
//!     OptionColumn::new(["", "start", ""]),
//!     OptionColumn::new(["load", "options", "quit"]),
//! ];
//! let options = vec![
//!     SelectOption::new("start", true),
//!     SelectOption::new("load", true),
//!     SelectOption::new("options", false),
//!     SelectOption::new("quit", true),
//! ];
//!
//! let mut menu = SelectOptionLogic::new();
//! menu.initialize(1, &columns, options, ColumnInfo::default(), RowInfo::default())
//!     .unwrap();
//! assert_eq!(menu.current_option_key(0), Some("start"));
//!
//! // Step right, then pick the nearest selectable row of that column.
//! assert!(menu.try_move_to_right(0, false));
//! assert_eq!(menu.current_coordinate(0), Some(Coordinate::new(1, 0)));
//!
//! // Rows wrap by default.
//! assert!(menu.try_move_to_up(0, false));
//! assert_eq!(menu.current_option_key(0), Some("quit"));
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for coordinates, columns,
//!   option records, option tables, and axis flags.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod grid;
pub mod layout;
mod select;
mod types;

pub use error::GridError;
pub use grid::Grid;
pub use select::{CoordinateChanged, SelectOptionLogic};
pub use types::{ColumnInfo, Coordinate, MoveDirection, OptionColumn, OptionReadModel, RowInfo, SelectOption};
