// Copyright 2025 the Selectory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keep-selecting while a direction is held.
//!
//! `turn_on` fires one movement at once, then the timer repeats it every
//! interval until `turn_off`. Listeners run synchronously.

use alloc::boxed::Box;
use alloc::vec::Vec;

use kurbo::Vec2;

use crate::timer::{Movement, Players, RepeatState};

/// Default seconds between repeated movements.
pub const KEEPING_SELECTION_INTERVAL: f64 = 0.28;

type Listener = Box<dyn FnMut(&Movement)>;

/// Repeat timer for held directional input.
///
/// ## Usage
///
/// - Register listeners with [`KeepingSelectionLogic::on_movement`].
/// - Call [`KeepingSelectionLogic::turn_on`] when a direction is pressed and
///   [`KeepingSelectionLogic::turn_off`] when it is released.
/// - Call [`KeepingSelectionLogic::tick`] once per frame.
pub struct KeepingSelectionLogic {
    players: Players<RepeatState>,
    listeners: Vec<Listener>,
}

impl core::fmt::Debug for KeepingSelectionLogic {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeepingSelectionLogic")
            .field("players", &self.players)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for KeepingSelectionLogic {
    fn default() -> Self {
        Self::new()
    }
}

impl KeepingSelectionLogic {
    /// Create a logic with no players.
    pub fn new() -> Self {
        Self {
            players: Players::default(),
            listeners: Vec::new(),
        }
    }

    /// Register a movement listener.
    pub fn on_movement(&mut self, f: impl FnMut(&Movement) + 'static) {
        self.listeners.push(Box::new(f));
    }

    /// Number of players.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Timer snapshot of `player_index`.
    pub fn player(&self, player_index: usize) -> Option<RepeatState> {
        self.players.get(player_index).copied()
    }

    /// Replace all players with `0..player_count`, every timer off.
    pub fn reset_player_count(&mut self, player_count: usize) {
        self.players.reset(player_count, RepeatState::new);
    }

    /// Add a player. Returns `false` if it already exists.
    pub fn add_player(&mut self, player_index: usize) -> bool {
        self.players.add(player_index, RepeatState::new(player_index))
    }

    /// Remove a player. Returns whether it existed.
    pub fn remove_player(&mut self, player_index: usize) -> bool {
        self.players.remove(player_index)
    }

    /// Start repeating `direction` at [`KEEPING_SELECTION_INTERVAL`].
    pub fn turn_on(&mut self, player_index: usize, direction: Vec2) -> bool {
        self.turn_on_with_interval(player_index, direction, KEEPING_SELECTION_INTERVAL)
    }

    /// Start repeating `direction` every `interval` seconds.
    ///
    /// Fires the first movement immediately. Returns `false` for unknown players.
    pub fn turn_on_with_interval(&mut self, player_index: usize, direction: Vec2, interval: f64) -> bool {
        let Some(state) = self.players.get_mut(player_index) else {
            return false;
        };
        state.turn_on(direction, interval, interval);
        let movement = state.movement(true);
        emit(&mut self.listeners, &movement);
        true
    }

    /// Stop repeating. Idempotent; returns `false` for unknown players.
    pub fn turn_off(&mut self, player_index: usize) -> bool {
        let Some(state) = self.players.get_mut(player_index) else {
            return false;
        };
        state.turn_off();
        true
    }

    /// Advance every player's timer by `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        for state in self.players.values_mut() {
            if state.advance(dt) {
                emit(&mut self.listeners, &state.movement(false));
            }
        }
    }
}

fn emit(listeners: &mut [Listener], movement: &Movement) {
    for listener in listeners {
        listener(movement);
    }
}
