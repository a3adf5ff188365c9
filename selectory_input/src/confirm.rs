// Copyright 2025 the Selectory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Confirm/ready voting across players.
//!
//! Each player holds a counter in `0..=max_confirm_count`. A player is
//! *confirmed* once the counter reaches the cap, and the round completes the
//! moment every player is confirmed. After that, neither confirm nor cancel is
//! accepted until a new round starts.
//!
//! Completion is checked after every change that can cap the last counter:
//! a confirm, a lower cap, or the removal of the last unconfirmed player. A
//! round with no players is never complete.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;

type CountListener = Box<dyn FnMut(usize, usize)>;
type CompleteListener = Box<dyn FnMut()>;

/// Per-player confirm counters with a round-complete event.
///
/// ## Events
///
/// - `on_confirm(player_index, count)` after a successful [`ConfirmLogic::try_confirm`].
/// - `on_cancel(player_index, count)` after a successful [`ConfirmLogic::try_cancel`].
/// - `on_complete()` once per round, when every player is at the cap.
pub struct ConfirmLogic {
    max_confirm_count: usize,
    counts: BTreeMap<usize, usize>,
    is_complete: bool,
    on_confirm: Vec<CountListener>,
    on_cancel: Vec<CountListener>,
    on_complete: Vec<CompleteListener>,
}

impl core::fmt::Debug for ConfirmLogic {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ConfirmLogic")
            .field("max_confirm_count", &self.max_confirm_count)
            .field("counts", &self.counts)
            .field("is_complete", &self.is_complete)
            .field("on_confirm", &self.on_confirm.len())
            .field("on_cancel", &self.on_cancel.len())
            .field("on_complete", &self.on_complete.len())
            .finish()
    }
}

impl Default for ConfirmLogic {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfirmLogic {
    /// Create a logic with no players and a cap of one confirm.
    pub fn new() -> Self {
        Self {
            max_confirm_count: 1,
            counts: BTreeMap::new(),
            is_complete: false,
            on_confirm: Vec::new(),
            on_cancel: Vec::new(),
            on_complete: Vec::new(),
        }
    }

    /// Register a confirm listener, called with the player index and new count.
    pub fn on_confirm(&mut self, f: impl FnMut(usize, usize) + 'static) {
        self.on_confirm.push(Box::new(f));
    }

    /// Register a cancel listener, called with the player index and new count.
    pub fn on_cancel(&mut self, f: impl FnMut(usize, usize) + 'static) {
        self.on_cancel.push(Box::new(f));
    }

    /// Register a round-complete listener.
    pub fn on_complete(&mut self, f: impl FnMut() + 'static) {
        self.on_complete.push(Box::new(f));
    }

    /// Confirms each player needs.
    pub fn max_confirm_count(&self) -> usize {
        self.max_confirm_count
    }

    /// Change the cap (at least one). Counters above it are lowered to it.
    ///
    /// Lowering the cap can complete the round. Raising it above a completed
    /// round's counters reopens the round.
    pub fn set_max_confirm_count(&mut self, max_confirm_count: usize) {
        self.max_confirm_count = max_confirm_count.max(1);
        for count in self.counts.values_mut() {
            *count = (*count).min(self.max_confirm_count);
        }
        if self.is_complete && !self.all_capped() {
            self.is_complete = false;
        }
        self.check_complete();
    }

    /// Number of players.
    pub fn player_count(&self) -> usize {
        self.counts.len()
    }

    /// Whether the current round has completed.
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// Whether any player has confirmed at least once.
    pub fn is_any_confirm(&self) -> bool {
        self.counts.values().any(|&c| c > 0)
    }

    /// Counter of `player_index`.
    pub fn confirm_count(&self, player_index: usize) -> Option<usize> {
        self.counts.get(&player_index).copied()
    }

    /// Whether `player_index` has reached the cap.
    pub fn is_confirm_completed(&self, player_index: usize) -> Option<bool> {
        self.confirm_count(player_index)
            .map(|c| c == self.max_confirm_count)
    }

    /// Start a new round with players `0..player_count`.
    pub fn reset_player_count(&mut self, player_count: usize) {
        self.counts.clear();
        self.counts.extend((0..player_count).map(|i| (i, 0)));
        self.is_complete = false;
    }

    /// Add a player at zero. Reopens a completed round.
    ///
    /// Returns `false` if the player already exists.
    pub fn add_player(&mut self, player_index: usize) -> bool {
        if self.counts.contains_key(&player_index) {
            return false;
        }
        self.counts.insert(player_index, 0);
        self.is_complete = false;
        true
    }

    /// Remove a player.
    ///
    /// Removing the last unconfirmed player completes the round. Removing
    /// everyone leaves it open.
    pub fn remove_player(&mut self, player_index: usize) -> bool {
        if self.counts.remove(&player_index).is_none() {
            return false;
        }
        if self.counts.is_empty() {
            self.is_complete = false;
        }
        self.check_complete();
        true
    }

    /// Add one confirm for `player_index`.
    ///
    /// Fails for unknown or already confirmed players and after completion.
    pub fn try_confirm(&mut self, player_index: usize) -> bool {
        if self.is_complete {
            return false;
        }
        let Some(count) = self.counts.get_mut(&player_index) else {
            return false;
        };
        if *count >= self.max_confirm_count {
            return false;
        }
        *count += 1;
        let count = *count;
        for listener in &mut self.on_confirm {
            listener(player_index, count);
        }
        self.check_complete();
        true
    }

    /// Take back one confirm for `player_index`.
    ///
    /// Fails for unknown players, at zero, once the player is confirmed, and
    /// after completion.
    pub fn try_cancel(&mut self, player_index: usize) -> bool {
        if self.is_complete {
            return false;
        }
        let Some(count) = self.counts.get_mut(&player_index) else {
            return false;
        };
        if *count == 0 || *count >= self.max_confirm_count {
            return false;
        }
        *count -= 1;
        let count = *count;
        for listener in &mut self.on_cancel {
            listener(player_index, count);
        }
        true
    }

    fn all_capped(&self) -> bool {
        self.counts.values().all(|&c| c == self.max_confirm_count)
    }

    /// Complete an open round once every player is at the cap.
    fn check_complete(&mut self) {
        if self.is_complete || self.counts.is_empty() || !self.all_capped() {
            return;
        }
        self.is_complete = true;
        log::debug!("confirm round complete with {} players", self.counts.len());
        for listener in &mut self.on_complete {
            listener();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;

    struct Observed {
        last_count: Rc<Cell<Option<usize>>>,
        completions: Rc<Cell<usize>>,
    }

    fn observed(logic: &mut ConfirmLogic) -> Observed {
        let last_count = Rc::new(Cell::new(None));
        let completions = Rc::new(Cell::new(0));
        let sink = Rc::clone(&last_count);
        logic.on_confirm(move |_, c| sink.set(Some(c)));
        let sink = Rc::clone(&last_count);
        logic.on_cancel(move |_, c| sink.set(Some(c)));
        let sink = Rc::clone(&completions);
        logic.on_complete(move || sink.set(sink.get() + 1));
        Observed {
            last_count,
            completions,
        }
    }

    #[test]
    fn defaults_and_membership() {
        let mut logic = ConfirmLogic::new();
        assert_eq!(logic.max_confirm_count(), 1);
        assert_eq!(logic.player_count(), 0);
        logic.reset_player_count(1);
        assert_eq!(logic.player_count(), 1);
        assert!(logic.add_player(1));
        assert!(!logic.add_player(1));
        assert!(logic.remove_player(1));
        assert!(!logic.remove_player(1));
        assert_eq!(logic.confirm_count(7), None);
        assert_eq!(logic.is_confirm_completed(7), None);
    }

    #[test]
    fn confirm_and_cancel_report_counts() {
        let mut logic = ConfirmLogic::new();
        let seen = observed(&mut logic);
        logic.set_max_confirm_count(2);
        logic.reset_player_count(1);

        assert!(logic.try_confirm(0));
        assert_eq!(logic.confirm_count(0), Some(1));
        assert_eq!(seen.last_count.get(), Some(1));
        assert!(logic.is_any_confirm());

        assert!(logic.try_cancel(0));
        assert_eq!(logic.confirm_count(0), Some(0));
        assert_eq!(seen.last_count.get(), Some(0));
        assert!(!logic.try_cancel(0));
        assert!(!logic.is_any_confirm());
    }

    #[test]
    fn completion_locks_the_round() {
        let mut logic = ConfirmLogic::new();
        let seen = observed(&mut logic);
        logic.set_max_confirm_count(2);
        logic.reset_player_count(1);

        assert!(logic.try_confirm(0));
        assert!(logic.try_confirm(0));
        assert_eq!(logic.confirm_count(0), Some(2));
        assert_eq!(logic.is_confirm_completed(0), Some(true));
        assert!(logic.is_complete());
        assert_eq!(seen.completions.get(), 1);

        assert!(!logic.try_confirm(0));
        assert!(!logic.try_cancel(0));
        assert_eq!(seen.completions.get(), 1);
    }

    #[test]
    fn confirmed_player_cannot_cancel_while_others_vote() {
        let mut logic = ConfirmLogic::new();
        logic.reset_player_count(2);
        assert!(logic.try_confirm(0));
        assert!(!logic.try_confirm(0));
        assert!(!logic.try_cancel(0));
        assert!(!logic.is_complete());
        assert!(logic.try_confirm(1));
        assert!(logic.is_complete());
    }

    #[test]
    fn rounds_restart() {
        let mut logic = ConfirmLogic::new();
        let seen = observed(&mut logic);
        logic.reset_player_count(1);
        logic.try_confirm(0);
        assert_eq!(seen.completions.get(), 1);

        // A late joiner reopens the round.
        assert!(logic.add_player(1));
        assert!(!logic.is_complete());
        assert!(logic.try_confirm(1));
        assert_eq!(seen.completions.get(), 2);

        logic.reset_player_count(2);
        assert!(!logic.is_complete());
        assert_eq!(logic.confirm_count(0), Some(0));
    }

    #[test]
    fn removing_the_last_holdout_completes() {
        let mut logic = ConfirmLogic::new();
        let seen = observed(&mut logic);
        logic.reset_player_count(2);
        logic.try_confirm(0);
        assert!(logic.remove_player(1));
        assert!(logic.is_complete());
        assert_eq!(seen.completions.get(), 1);

        // Removing a confirmed player keeps the round complete.
        assert!(logic.add_player(1));
        assert!(logic.try_confirm(1));
        assert_eq!(seen.completions.get(), 2);
        assert!(logic.remove_player(0));
        assert!(logic.is_complete());
        assert_eq!(seen.completions.get(), 2);
    }

    #[test]
    fn emptied_round_is_open() {
        let mut logic = ConfirmLogic::new();
        let seen = observed(&mut logic);
        logic.reset_player_count(1);
        logic.try_confirm(0);
        assert!(logic.is_complete());
        assert!(logic.remove_player(0));
        assert!(!logic.is_complete());

        logic.set_max_confirm_count(1);
        assert!(!logic.is_complete());
        assert_eq!(seen.completions.get(), 1);
    }

    #[test]
    fn lowering_the_cap_completes_the_round() {
        let mut logic = ConfirmLogic::new();
        let seen = observed(&mut logic);
        logic.set_max_confirm_count(2);
        logic.reset_player_count(1);
        assert!(logic.try_confirm(0));
        assert!(!logic.is_complete());

        logic.set_max_confirm_count(1);
        assert!(logic.is_complete());
        assert_eq!(seen.completions.get(), 1);
        assert!(!logic.try_confirm(0));
        assert!(!logic.try_cancel(0));

        // Same cap again does not fire twice.
        logic.set_max_confirm_count(1);
        assert_eq!(seen.completions.get(), 1);
    }

    #[test]
    fn raising_the_cap_reopens_the_round() {
        let mut logic = ConfirmLogic::new();
        let seen = observed(&mut logic);
        logic.reset_player_count(1);
        assert!(logic.try_confirm(0));
        assert!(logic.is_complete());

        logic.set_max_confirm_count(2);
        assert!(!logic.is_complete());
        assert_eq!(logic.is_confirm_completed(0), Some(false));
        assert!(logic.try_confirm(0));
        assert!(logic.is_complete());
        assert_eq!(seen.completions.get(), 2);
    }

    #[test]
    fn lowering_the_cap_clamps_counters() {
        let mut logic = ConfirmLogic::new();
        logic.set_max_confirm_count(3);
        logic.reset_player_count(2);
        logic.try_confirm(0);
        logic.try_confirm(0);
        logic.set_max_confirm_count(1);
        assert_eq!(logic.confirm_count(0), Some(1));
        assert_eq!(logic.is_confirm_completed(0), Some(true));
        assert!(!logic.is_complete());

        logic.set_max_confirm_count(0);
        assert_eq!(logic.max_confirm_count(), 1);
    }
}
