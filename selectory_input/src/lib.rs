// Copyright 2025 the Selectory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selectory Input: frame-driven input logics for game menus.
//!
//! ## Overview
//!
//! - [`ConfirmLogic`]: per-player confirm counters with a round-complete event,
//!   for "all players ready" screens.
//! - [`KeepingSelectionLogic`]: repeats a held direction on a fixed interval.
//! - [`RollingLogic`]: repeats a held direction with a longer first delay and
//!   waits for asynchronous movement listeners before repeating.
//!
//! The repeat logics know nothing about grids. They emit [`Movement`]s that a
//! caller forwards to a navigation engine, for example through
//! `adapters::grid` (feature `grid_adapter`).
//!
//! ## Frame loop
//!
//! ```
//! use kurbo::Vec2;
//! use selectory_input::{KeepingSelectionLogic, Movement};
//!
//! let mut keeping = KeepingSelectionLogic::new();
//! keeping.on_movement(|m: &Movement| {
//!     // Forward to the menu here.
//!     let _ = m.direction;
//! });
//! keeping.reset_player_count(1);
//!
//! keeping.turn_on(0, Vec2::new(0.0, -1.0));
//! for _ in 0..60 {
//!     keeping.tick(1.0 / 60.0);
//! }
//! keeping.turn_off(0);
//! assert!(!keeping.player(0).unwrap().is_on);
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to Kurbo.
//! - `grid_adapter`: helpers driving a `selectory_grid::SelectOptionLogic`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
mod confirm;
mod keeping;
mod rolling;
mod timer;

pub use confirm::ConfirmLogic;
pub use keeping::{KEEPING_SELECTION_INTERVAL, KeepingSelectionLogic};
pub use rolling::{FIRST_ROLLING_INTERVAL, MovementFuture, ROLLING_INTERVAL, RollingLogic};
pub use timer::{Movement, RepeatState};
