// Copyright 2025 the Selectory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rolling input: repeat a held direction with a longer first delay.
//!
//! ## Asynchronous movements
//!
//! Listeners registered with [`RollingLogic::on_movement_async`] return a
//! [`MovementFuture`], for example one that resolves when a scroll animation
//! finishes. A movement stays *in flight* until every such future resolves.
//! Then the synchronous [`RollingLogic::on_movement`] listeners run.
//!
//! While a player's movement is in flight:
//!
//! - that player's timer is frozen, so repeats never overlap;
//! - `turn_on` updates the timer but skips its immediate movement;
//! - `turn_off` stops the timer but lets the movement finish.
//!
//! Futures are polled with a no-op waker, once on `turn_on` and once at the
//! start of every `tick`. Nothing is spawned.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Waker};

use kurbo::Vec2;

use crate::timer::{Movement, Players, RepeatState};

/// Default seconds between repeats once rolling.
pub const ROLLING_INTERVAL: f64 = 0.28;

/// Default seconds before the first repeat.
pub const FIRST_ROLLING_INTERVAL: f64 = 0.42;

/// Completion signal returned by asynchronous movement listeners.
pub type MovementFuture = Pin<Box<dyn Future<Output = ()>>>;

type AsyncListener = Box<dyn FnMut(&Movement) -> MovementFuture>;
type Listener = Box<dyn FnMut(&Movement)>;

struct InFlight {
    movement: Movement,
    futures: Vec<MovementFuture>,
}

impl core::fmt::Debug for InFlight {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InFlight")
            .field("movement", &self.movement)
            .field("futures", &self.futures.len())
            .finish()
    }
}

#[derive(Debug)]
struct RollingPlayer {
    state: RepeatState,
    in_flight: Option<InFlight>,
}

impl RollingPlayer {
    fn new(index: usize) -> Self {
        Self {
            state: RepeatState::new(index),
            in_flight: None,
        }
    }
}

#[derive(Default)]
struct Listeners {
    on_async: Vec<AsyncListener>,
    on_sync: Vec<Listener>,
}

impl Listeners {
    fn start(&mut self, player: &mut RollingPlayer, is_first: bool) {
        let movement = player.state.movement(is_first);
        let futures = self.on_async.iter_mut().map(|l| l(&movement)).collect();
        player.in_flight = Some(InFlight { movement, futures });
        self.poll(player);
    }

    /// Poll the in-flight movement, finishing it when every future is done.
    ///
    /// Returns whether a movement is still in flight.
    fn poll(&mut self, player: &mut RollingPlayer) -> bool {
        let Some(in_flight) = player.in_flight.as_mut() else {
            return false;
        };
        let mut cx = Context::from_waker(Waker::noop());
        in_flight
            .futures
            .retain_mut(|f| f.as_mut().poll(&mut cx).is_pending());
        if !in_flight.futures.is_empty() {
            return true;
        }
        let movement = in_flight.movement;
        player.in_flight = None;
        for listener in &mut self.on_sync {
            listener(&movement);
        }
        false
    }
}

/// Repeat timer for held directional input with asynchronous movements.
///
/// See the [module documentation](self) for the in-flight rules.
pub struct RollingLogic {
    players: Players<RollingPlayer>,
    listeners: Listeners,
}

impl core::fmt::Debug for RollingLogic {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RollingLogic")
            .field("players", &self.players)
            .field("async_listeners", &self.listeners.on_async.len())
            .field("listeners", &self.listeners.on_sync.len())
            .finish()
    }
}

impl Default for RollingLogic {
    fn default() -> Self {
        Self::new()
    }
}

impl RollingLogic {
    /// Create a logic with no players.
    pub fn new() -> Self {
        Self {
            players: Players::default(),
            listeners: Listeners::default(),
        }
    }

    /// Register an asynchronous movement listener.
    pub fn on_movement_async(&mut self, f: impl FnMut(&Movement) -> MovementFuture + 'static) {
        self.listeners.on_async.push(Box::new(f));
    }

    /// Register a listener that runs once a movement's futures have resolved.
    pub fn on_movement(&mut self, f: impl FnMut(&Movement) + 'static) {
        self.listeners.on_sync.push(Box::new(f));
    }

    /// Number of players.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Timer snapshot of `player_index`.
    pub fn player(&self, player_index: usize) -> Option<RepeatState> {
        self.players.get(player_index).map(|p| p.state)
    }

    /// Whether `player_index` has a movement in flight.
    pub fn is_moving(&self, player_index: usize) -> bool {
        self.players
            .get(player_index)
            .is_some_and(|p| p.in_flight.is_some())
    }

    /// Replace all players with `0..player_count`, every timer off.
    ///
    /// In-flight movements of removed players are dropped unfinished.
    pub fn reset_player_count(&mut self, player_count: usize) {
        self.players.reset(player_count, RollingPlayer::new);
    }

    /// Add a player. Returns `false` if it already exists.
    pub fn add_player(&mut self, player_index: usize) -> bool {
        self.players.add(player_index, RollingPlayer::new(player_index))
    }

    /// Remove a player, dropping any in-flight movement. Returns whether it existed.
    pub fn remove_player(&mut self, player_index: usize) -> bool {
        self.players.remove(player_index)
    }

    /// Start rolling with [`ROLLING_INTERVAL`] and [`FIRST_ROLLING_INTERVAL`].
    pub fn turn_on(&mut self, player_index: usize, direction: Vec2) -> bool {
        self.turn_on_with_intervals(player_index, direction, ROLLING_INTERVAL, FIRST_ROLLING_INTERVAL)
    }

    /// Start rolling `direction`: first repeat after `first_interval`, then every `interval`.
    ///
    /// Fires the first movement immediately unless one is still in flight.
    /// Returns `false` for unknown players.
    pub fn turn_on_with_intervals(
        &mut self,
        player_index: usize,
        direction: Vec2,
        interval: f64,
        first_interval: f64,
    ) -> bool {
        let Some(player) = self.players.get_mut(player_index) else {
            return false;
        };
        player.state.turn_on(direction, interval, first_interval);
        if self.listeners.poll(player) {
            log::debug!("player {player_index} turned on with a movement in flight");
        } else {
            self.listeners.start(player, true);
        }
        true
    }

    /// Stop rolling. An in-flight movement still completes.
    ///
    /// Idempotent; returns `false` for unknown players.
    pub fn turn_off(&mut self, player_index: usize) -> bool {
        let Some(player) = self.players.get_mut(player_index) else {
            return false;
        };
        player.state.turn_off();
        true
    }

    /// Poll in-flight movements, then advance idle timers by `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        for player in self.players.values_mut() {
            if self.listeners.poll(player) {
                continue;
            }
            if player.state.advance(dt) {
                self.listeners.start(player, false);
            }
        }
    }
}
