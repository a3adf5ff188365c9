// Copyright 2025 the Selectory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter helpers for Selectory Grid.
//!
//! ## Feature
//!
//! Enable with `grid_adapter`.
//!
//! ## Notes
//!
//! These helpers map a 2D input direction onto the four grid moves: positive x
//! moves right, negative x left, positive y up, negative y down. Only the sign
//! of each component matters. Wire them to a repeat logic's movement listener:
//!
//! ```
//! use std::{cell::RefCell, rc::Rc};
//!
//! use kurbo::Vec2;
//! use selectory_grid::{ColumnInfo, OptionColumn, RowInfo, SelectOption, SelectOptionLogic};
//! use selectory_input::KeepingSelectionLogic;
//! use selectory_input::adapters::grid::movement;
//!
//! let menu = Rc::new(RefCell::new(SelectOptionLogic::<SelectOption>::new()));
//! menu.borrow_mut()
//!     .initialize(
//!         1,
//!         &[OptionColumn::new(["a"]), OptionColumn::new(["b"])],
//!         vec![SelectOption::new("a", true), SelectOption::new("b", true)],
//!         ColumnInfo::default(),
//!         RowInfo::default(),
//!     )
//!     .unwrap();
//!
//! let mut keeping = KeepingSelectionLogic::new();
//! let target = Rc::clone(&menu);
//! keeping.on_movement(move |m| {
//!     movement(&mut *target.borrow_mut(), m.player_index, m.direction, false, false);
//! });
//! keeping.reset_player_count(1);
//! keeping.turn_on(0, Vec2::new(1.0, 0.0));
//!
//! assert_eq!(menu.borrow().current_option_key(0), Some("b"));
//! ```

use kurbo::Vec2;
use selectory_grid::{OptionReadModel, SelectOptionLogic};

/// Move left or right by the sign of `direction.x`.
///
/// Returns `false` when `x` is zero or the move fails.
pub fn horizontal_movement<O: OptionReadModel>(
    logic: &mut SelectOptionLogic<O>,
    player_index: usize,
    direction: Vec2,
    ignore_same_option: bool,
) -> bool {
    if direction.x > 0.0 {
        logic.try_move_to_right(player_index, ignore_same_option)
    } else if direction.x < 0.0 {
        logic.try_move_to_left(player_index, ignore_same_option)
    } else {
        false
    }
}

/// Move up or down by the sign of `direction.y`.
///
/// Returns `false` when `y` is zero or the move fails.
pub fn vertical_movement<O: OptionReadModel>(
    logic: &mut SelectOptionLogic<O>,
    player_index: usize,
    direction: Vec2,
    ignore_same_option: bool,
) -> bool {
    if direction.y > 0.0 {
        logic.try_move_to_up(player_index, ignore_same_option)
    } else if direction.y < 0.0 {
        logic.try_move_to_down(player_index, ignore_same_option)
    } else {
        false
    }
}

/// Try the horizontal move first and fall back to the vertical one.
pub fn movement<O: OptionReadModel>(
    logic: &mut SelectOptionLogic<O>,
    player_index: usize,
    direction: Vec2,
    horizontal_ignore_same_option: bool,
    vertical_ignore_same_option: bool,
) -> bool {
    horizontal_movement(logic, player_index, direction, horizontal_ignore_same_option)
        || vertical_movement(logic, player_index, direction, vertical_ignore_same_option)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use selectory_grid::{ColumnInfo, Coordinate, OptionColumn, RowInfo, SelectOption};

    // a b
    // c -
    fn menu() -> SelectOptionLogic<SelectOption> {
        let mut logic = SelectOptionLogic::new();
        logic
            .initialize(
                1,
                &[OptionColumn::new(["a", "c"]), OptionColumn::new(["b", ""])],
                vec![
                    SelectOption::new("a", true),
                    SelectOption::new("b", true),
                    SelectOption::new("c", true),
                ],
                ColumnInfo::empty(),
                RowInfo::empty(),
            )
            .unwrap();
        logic
    }

    #[test]
    fn axis_signs_pick_moves() {
        let mut logic = menu();
        assert!(horizontal_movement(&mut logic, 0, Vec2::new(0.5, 0.0), false));
        assert_eq!(logic.current_option_key(0), Some("b"));
        assert!(horizontal_movement(&mut logic, 0, Vec2::new(-0.5, 0.0), false));
        assert_eq!(logic.current_option_key(0), Some("a"));

        assert!(vertical_movement(&mut logic, 0, Vec2::new(0.0, -1.0), false));
        assert_eq!(logic.current_option_key(0), Some("c"));
        assert!(vertical_movement(&mut logic, 0, Vec2::new(0.0, 1.0), false));
        assert_eq!(logic.current_option_key(0), Some("a"));
    }

    #[test]
    fn zero_axis_does_nothing() {
        let mut logic = menu();
        assert!(!horizontal_movement(&mut logic, 0, Vec2::new(0.0, 1.0), false));
        assert!(!vertical_movement(&mut logic, 0, Vec2::new(1.0, 0.0), false));
        assert!(!movement(&mut logic, 0, Vec2::ZERO, false, false));
        assert_eq!(logic.current_coordinate(0), Some(Coordinate::new(0, 0)));
    }

    #[test]
    fn movement_falls_back_to_vertical() {
        let mut logic = menu();
        // Left is blocked at column 0, so the diagonal moves down instead.
        assert!(movement(&mut logic, 0, Vec2::new(-1.0, -1.0), false, false));
        assert_eq!(logic.current_option_key(0), Some("c"));
        // Right of "c" is a hole, so this one goes up.
        assert!(movement(&mut logic, 0, Vec2::new(1.0, 1.0), false, false));
        assert_eq!(logic.current_option_key(0), Some("a"));
        // Horizontal wins when both axes could move.
        assert!(movement(&mut logic, 0, Vec2::new(1.0, -1.0), false, false));
        assert_eq!(logic.current_option_key(0), Some("b"));
    }
}
