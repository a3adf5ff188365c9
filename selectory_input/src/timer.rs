// Copyright 2025 the Selectory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-player repeat timer shared by the keeping and rolling logics.

use alloc::collections::BTreeMap;

use kurbo::Vec2;

/// A movement fired by a repeat-input logic.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Movement {
    /// Player the movement belongs to.
    pub player_index: usize,
    /// `true` for the movement fired by `turn_on`, `false` for timer repeats.
    pub is_first: bool,
    /// Input direction captured at `turn_on`.
    pub direction: Vec2,
}

/// Snapshot of one player's repeat timer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RepeatState {
    /// Player index.
    pub index: usize,
    /// Whether the timer is running.
    pub is_on: bool,
    /// Direction reported with each movement; zero while off.
    pub direction: Vec2,
    /// Seconds between repeats; zero while off.
    pub interval: f64,
    /// Seconds left before the next repeat. Repeats fire once this drops below zero.
    pub remaining: f64,
}

impl RepeatState {
    pub(crate) fn new(index: usize) -> Self {
        Self {
            index,
            is_on: false,
            direction: Vec2::ZERO,
            interval: 0.0,
            remaining: 0.0,
        }
    }

    pub(crate) fn turn_on(&mut self, direction: Vec2, interval: f64, first_interval: f64) {
        self.is_on = true;
        self.direction = direction;
        self.interval = interval;
        self.remaining = first_interval;
    }

    pub(crate) fn turn_off(&mut self) {
        *self = Self::new(self.index);
    }

    /// Advance by `dt` seconds and report whether a repeat is due.
    ///
    /// The countdown is checked before it is decremented, so an overshooting
    /// frame fires on the following tick.
    pub(crate) fn advance(&mut self, dt: f64) -> bool {
        if !self.is_on {
            return false;
        }
        if self.remaining < 0.0 {
            self.remaining = self.interval;
            return true;
        }
        self.remaining -= dt;
        false
    }

    pub(crate) fn movement(&self, is_first: bool) -> Movement {
        Movement {
            player_index: self.index,
            is_first,
            direction: self.direction,
        }
    }
}

/// Player membership keyed by index, shared by the repeat logics.
#[derive(Debug)]
pub(crate) struct Players<P> {
    map: BTreeMap<usize, P>,
}

impl<P> Default for Players<P> {
    fn default() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }
}

impl<P> Players<P> {
    pub(crate) fn reset(&mut self, player_count: usize, mut make: impl FnMut(usize) -> P) {
        self.map.clear();
        self.map.extend((0..player_count).map(|i| (i, make(i))));
    }

    pub(crate) fn add(&mut self, index: usize, player: P) -> bool {
        if self.map.contains_key(&index) {
            return false;
        }
        self.map.insert(index, player);
        true
    }

    pub(crate) fn remove(&mut self, index: usize) -> bool {
        self.map.remove(&index).is_some()
    }

    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    pub(crate) fn get(&self, index: usize) -> Option<&P> {
        self.map.get(&index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut P> {
        self.map.get_mut(&index)
    }

    pub(crate) fn values_mut(&mut self) -> impl Iterator<Item = &mut P> {
        self.map.values_mut()
    }
}
