// Copyright 2025 the Selectory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation engine: per-player cursors over a [`Grid`].
//!
//! ## Lifecycle
//!
//! A [`SelectOptionLogic`] starts uninitialized. [`SelectOptionLogic::initialize`]
//! builds the grid and places one cursor per player on the default coordinate
//! (the first enabled cell, scanning columns left to right and rows top to
//! bottom). [`SelectOptionLogic::release`] drops the grid and all cursors.
//!
//! ## Moves
//!
//! Each move steps the cursor's primary axis by one (wrapping on circular axes,
//! saturating otherwise) and then searches for an enabled cell:
//!
//! - By default the search walks the primary axis in the move direction.
//! - With auto-change enabled for the move's axis, the stepped column (or row)
//!   is kept and the search walks across it toward index 0, starting at the
//!   cursor's current row (or column).
//!
//! Every search probes at most one axis length of cells, so a move on a line
//! with no enabled cell fails instead of spinning.
//!
//! A move fails (returns `false` and leaves state untouched) when the engine is
//! uninitialized, the player is unknown, a veto flag rejects the adjacent cell,
//! the search finds nothing, or the result equals the current coordinate.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::error::GridError;
use crate::grid::{Grid, step};
use crate::types::{ColumnInfo, Coordinate, MoveDirection, OptionColumn, OptionReadModel, RowInfo};

/// Payload of the coordinate-changed event.
#[derive(Debug)]
pub struct CoordinateChanged<'a, O> {
    /// Player whose cursor moved.
    pub player_index: usize,
    /// Cursor position before the change; `None` for a freshly placed cursor.
    pub previous_coordinate: Option<Coordinate>,
    /// Option under the previous position, if any.
    pub previous_option: Option<&'a O>,
    /// Cursor position after the change.
    pub current_coordinate: Coordinate,
    /// Option under the new position.
    pub current_option: &'a O,
}

type Listener<O> = Box<dyn FnMut(&CoordinateChanged<'_, O>)>;

/// Grid option selection with one cursor per player.
///
/// ## Usage
///
/// - Register listeners with [`SelectOptionLogic::on_coordinate_changed`].
/// - Call [`SelectOptionLogic::initialize`] (or one of its variants) once.
/// - Drive cursors with [`SelectOptionLogic::try_move`] and the four
///   `try_move_to_*` helpers, or jump with
///   [`SelectOptionLogic::try_set_current_coordinate`].
/// - Query options for rendering with [`SelectOptionLogic::option`] and
///   [`SelectOptionLogic::current_option`].
pub struct SelectOptionLogic<O> {
    grid: Option<Grid<O>>,
    column_info: ColumnInfo,
    row_info: RowInfo,
    cursors: BTreeMap<usize, Coordinate>,
    listeners: Vec<Listener<O>>,
}

impl<O: OptionReadModel> core::fmt::Debug for SelectOptionLogic<O> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SelectOptionLogic")
            .field("grid", &self.grid)
            .field("column_info", &self.column_info)
            .field("row_info", &self.row_info)
            .field("cursors", &self.cursors)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<O: OptionReadModel> Default for SelectOptionLogic<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: OptionReadModel> SelectOptionLogic<O> {
    /// Create an uninitialized engine.
    pub fn new() -> Self {
        Self {
            grid: None,
            column_info: ColumnInfo::default(),
            row_info: RowInfo::default(),
            cursors: BTreeMap::new(),
            listeners: Vec::new(),
        }
    }

    /// Register a listener for cursor changes.
    pub fn on_coordinate_changed(&mut self, f: impl FnMut(&CoordinateChanged<'_, O>) + 'static) {
        self.listeners.push(Box::new(f));
    }

    /// Drop every registered listener.
    pub fn clear_listeners(&mut self) {
        self.listeners.clear();
    }

    /// Whether a grid is loaded.
    pub fn is_initialized(&self) -> bool {
        self.grid.is_some()
    }

    /// The loaded grid, if any.
    pub fn grid(&self) -> Option<&Grid<O>> {
        self.grid.as_ref()
    }

    /// Column axis policy in effect.
    pub fn column_info(&self) -> ColumnInfo {
        self.column_info
    }

    /// Row axis policy in effect.
    pub fn row_info(&self) -> RowInfo {
        self.row_info
    }

    /// Number of columns, or `0` when uninitialized.
    pub fn max_column_length(&self) -> usize {
        self.grid.as_ref().map_or(0, Grid::column_len)
    }

    /// Number of rows, or `0` when uninitialized.
    pub fn max_row_length(&self) -> usize {
        self.grid.as_ref().map_or(0, Grid::row_len)
    }

    /// Number of players holding a cursor.
    pub fn player_count(&self) -> usize {
        self.cursors.len()
    }

    /// Player indices holding a cursor, ascending.
    pub fn player_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cursors.keys().copied()
    }

    /// Build the grid and place `player_count` cursors on the default coordinate.
    ///
    /// Does nothing when already initialized; call [`Self::release`] first to
    /// load another grid. On error the engine stays uninitialized.
    pub fn initialize(
        &mut self,
        player_count: usize,
        columns: &[OptionColumn],
        options: Vec<O>,
        column_info: ColumnInfo,
        row_info: RowInfo,
    ) -> Result<(), GridError> {
        if self.is_initialized() {
            log::debug!("initialize ignored: already initialized");
            return Ok(());
        }

        let grid = Grid::new(columns, options)?;
        if grid.first_selectable().is_none() {
            return Err(GridError::NoSelectableOption);
        }
        log::debug!(
            "initialized {}x{} grid for {player_count} players",
            grid.column_len(),
            grid.row_len()
        );

        self.grid = Some(grid);
        self.column_info = column_info;
        self.row_info = row_info;
        self.reset_player_count(player_count);
        Ok(())
    }

    /// Like [`Self::initialize`], then try to put every cursor on the option `key`.
    ///
    /// Cursors stay on the default coordinate when `key` is missing or disabled.
    pub fn initialize_with_key(
        &mut self,
        player_count: usize,
        columns: &[OptionColumn],
        options: Vec<O>,
        key: &str,
        column_info: ColumnInfo,
        row_info: RowInfo,
    ) -> Result<(), GridError> {
        if self.is_initialized() {
            log::debug!("initialize ignored: already initialized");
            return Ok(());
        }
        self.initialize(player_count, columns, options, column_info, row_info)?;
        let players: Vec<usize> = self.player_indices().collect();
        for player in players {
            self.try_set_current_option_key(player, key, true);
        }
        Ok(())
    }

    /// Like [`Self::initialize`], then try to put every cursor on `coordinate`.
    ///
    /// Cursors stay on the default coordinate when `coordinate` is not selectable.
    pub fn initialize_with_coordinate(
        &mut self,
        player_count: usize,
        columns: &[OptionColumn],
        options: Vec<O>,
        coordinate: Coordinate,
        column_info: ColumnInfo,
        row_info: RowInfo,
    ) -> Result<(), GridError> {
        if self.is_initialized() {
            log::debug!("initialize ignored: already initialized");
            return Ok(());
        }
        self.initialize(player_count, columns, options, column_info, row_info)?;
        let players: Vec<usize> = self.player_indices().collect();
        for player in players {
            self.try_set_current_coordinate(player, coordinate);
        }
        Ok(())
    }

    /// Drop the grid and every cursor. Listeners stay registered.
    pub fn release(&mut self) {
        if self.grid.take().is_none() {
            return;
        }
        self.cursors.clear();
        log::debug!("released grid");
    }

    /// Replace all cursors with players `0..player_count` on the default coordinate.
    ///
    /// Only clears cursors when uninitialized.
    pub fn reset_player_count(&mut self, player_count: usize) {
        self.cursors.clear();
        for player in 0..player_count {
            self.add_player(player);
        }
    }

    /// Add a cursor for `player_index` on the default coordinate.
    ///
    /// Returns `false` when uninitialized or the player already has a cursor.
    pub fn add_player(&mut self, player_index: usize) -> bool {
        let Some(grid) = self.grid.as_ref() else {
            return false;
        };
        if self.cursors.contains_key(&player_index) {
            return false;
        }
        let Some(coordinate) = grid.first_selectable() else {
            return false;
        };
        let Some(option) = grid.get(coordinate) else {
            return false;
        };
        self.cursors.insert(player_index, coordinate);
        emit(
            &mut self.listeners,
            &CoordinateChanged {
                player_index,
                previous_coordinate: None,
                previous_option: None,
                current_coordinate: coordinate,
                current_option: option,
            },
        );
        true
    }

    /// Remove the cursor of `player_index`. Returns whether one existed.
    pub fn remove_player(&mut self, player_index: usize) -> bool {
        self.cursors.remove(&player_index).is_some()
    }

    /// The option at `coordinate`.
    pub fn option(&self, coordinate: Coordinate) -> Option<&O> {
        self.grid.as_ref()?.get(coordinate)
    }

    /// The key of the option at `coordinate`.
    pub fn option_key(&self, coordinate: Coordinate) -> Option<&str> {
        self.option(coordinate).map(OptionReadModel::key)
    }

    /// The first option with `key` in scan order.
    pub fn option_by_key(&self, key: &str) -> Option<&O> {
        self.option(self.coordinate_of(key)?)
    }

    /// The first coordinate holding `key` in scan order.
    pub fn coordinate_of(&self, key: &str) -> Option<Coordinate> {
        self.grid.as_ref()?.coordinate_of(key)
    }

    /// The coordinate new cursors start on.
    pub fn default_coordinate(&self) -> Option<Coordinate> {
        self.grid.as_ref()?.first_selectable()
    }

    /// Unique keys of enabled options, in scan order. Empty when uninitialized.
    pub fn enabled_option_keys(&self) -> Vec<&str> {
        self.grid
            .as_ref()
            .map(Grid::enabled_option_keys)
            .unwrap_or_default()
    }

    /// Cursor position of `player_index`.
    pub fn current_coordinate(&self, player_index: usize) -> Option<Coordinate> {
        self.cursors.get(&player_index).copied()
    }

    /// Option under the cursor of `player_index`.
    pub fn current_option(&self, player_index: usize) -> Option<&O> {
        self.option(self.current_coordinate(player_index)?)
    }

    /// Key of the option under the cursor of `player_index`.
    pub fn current_option_key(&self, player_index: usize) -> Option<&str> {
        self.current_option(player_index).map(OptionReadModel::key)
    }

    /// Move a cursor to `coordinate` and notify listeners.
    ///
    /// See [`Self::try_set_current_coordinate_with`].
    pub fn try_set_current_coordinate(&mut self, player_index: usize, coordinate: Coordinate) -> bool {
        self.try_set_current_coordinate_with(player_index, coordinate, true)
    }

    /// Move a cursor to `coordinate`, notifying listeners when `notify` is set.
    ///
    /// Fails when uninitialized, when the player is unknown, or when the cell is
    /// out of bounds, empty, or disabled.
    pub fn try_set_current_coordinate_with(
        &mut self,
        player_index: usize,
        coordinate: Coordinate,
        notify: bool,
    ) -> bool {
        let Some(grid) = self.grid.as_ref() else {
            return false;
        };
        let Some(cursor) = self.cursors.get_mut(&player_index) else {
            return false;
        };
        let Some(option) = grid.get(coordinate).filter(|o| o.is_enable()) else {
            return false;
        };

        let previous = core::mem::replace(cursor, coordinate);
        if notify {
            emit(
                &mut self.listeners,
                &CoordinateChanged {
                    player_index,
                    previous_coordinate: Some(previous),
                    previous_option: grid.get(previous),
                    current_coordinate: coordinate,
                    current_option: option,
                },
            );
        }
        true
    }

    /// Move a cursor onto the first cell holding `key`.
    pub fn try_set_current_option_key(&mut self, player_index: usize, key: &str, notify: bool) -> bool {
        let Some(coordinate) = self.coordinate_of(key) else {
            return false;
        };
        self.try_set_current_coordinate_with(player_index, coordinate, notify)
    }

    /// Move a cursor one step left.
    pub fn try_move_to_left(&mut self, player_index: usize, ignore_same_option: bool) -> bool {
        self.try_move(player_index, MoveDirection::Left, ignore_same_option)
    }

    /// Move a cursor one step right.
    pub fn try_move_to_right(&mut self, player_index: usize, ignore_same_option: bool) -> bool {
        self.try_move(player_index, MoveDirection::Right, ignore_same_option)
    }

    /// Move a cursor one step up.
    pub fn try_move_to_up(&mut self, player_index: usize, ignore_same_option: bool) -> bool {
        self.try_move(player_index, MoveDirection::Up, ignore_same_option)
    }

    /// Move a cursor one step down.
    pub fn try_move_to_down(&mut self, player_index: usize, ignore_same_option: bool) -> bool {
        self.try_move(player_index, MoveDirection::Down, ignore_same_option)
    }

    /// Move a cursor one step in `direction`.
    ///
    /// With `ignore_same_option`, a primary-axis search skips cells holding the
    /// option the cursor is already on (useful when one option spans cells).
    pub fn try_move(
        &mut self,
        player_index: usize,
        direction: MoveDirection,
        ignore_same_option: bool,
    ) -> bool {
        let Some(grid) = self.grid.as_ref() else {
            return false;
        };
        let Some(&current) = self.cursors.get(&player_index) else {
            return false;
        };
        let Some(target) = resolve_move(
            grid,
            self.column_info,
            self.row_info,
            current,
            direction,
            ignore_same_option,
        ) else {
            return false;
        };
        if target == current {
            return false;
        }
        self.try_set_current_coordinate(player_index, target)
    }
}

fn emit<O>(listeners: &mut [Listener<O>], event: &CoordinateChanged<'_, O>) {
    for listener in listeners {
        listener(event);
    }
}

fn resolve_move<O: OptionReadModel>(
    grid: &Grid<O>,
    column_info: ColumnInfo,
    row_info: RowInfo,
    current: Coordinate,
    direction: MoveDirection,
    ignore_same_option: bool,
) -> Option<Coordinate> {
    let horizontal = direction.is_horizontal();
    let forward = direction.is_forward();
    let axes = Axes {
        columns: grid.column_len(),
        rows: grid.row_len(),
        column_circular: column_info.is_circular(),
        row_circular: row_info.is_circular(),
    };

    let next = axes.step(current, horizontal, forward);

    // The veto looks at the line being moved along: rows for horizontal moves.
    let (vetoed, auto_change) = if horizontal {
        (
            row_info.is_not_move_when_null_or_disable(),
            column_info.is_auto_change_row(),
        )
    } else {
        (
            column_info.is_not_move_when_null_or_disable(),
            row_info.is_auto_change_column(),
        )
    };
    if vetoed && !grid.is_selectable(next) {
        return None;
    }

    if auto_change {
        search(grid, axes, next, !horizontal, false, None)
    } else {
        let skip = if ignore_same_option {
            Some(grid.get(current)?.key())
        } else {
            None
        };
        search(grid, axes, next, horizontal, forward, skip)
    }
}

#[derive(Copy, Clone, Debug)]
struct Axes {
    columns: usize,
    rows: usize,
    column_circular: bool,
    row_circular: bool,
}

impl Axes {
    fn len(self, horizontal: bool) -> usize {
        if horizontal { self.columns } else { self.rows }
    }

    fn step(self, c: Coordinate, horizontal: bool, forward: bool) -> Coordinate {
        if horizontal {
            Coordinate::new(step(c.column, forward, self.columns, self.column_circular), c.row)
        } else {
            Coordinate::new(c.column, step(c.row, forward, self.rows, self.row_circular))
        }
    }
}

/// Probe at most one axis length of cells from `start`.
fn search<O: OptionReadModel>(
    grid: &Grid<O>,
    axes: Axes,
    start: Coordinate,
    horizontal: bool,
    forward: bool,
    skip_key: Option<&str>,
) -> Option<Coordinate> {
    let mut probe = start;
    for _ in 0..axes.len(horizontal) {
        if let Some(o) = grid.get(probe)
            && o.is_enable()
            && skip_key.is_none_or(|k| o.key() != k)
        {
            return Some(probe);
        }
        probe = axes.step(probe, horizontal, forward);
    }
    None
}
