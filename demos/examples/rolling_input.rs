// Copyright 2025 the Selectory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A held direction rolling through a menu column at frame rate.
//!
//! An async listener models a short scroll animation: each movement stays in
//! flight for a few frames, which holds back the next repeat.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p selectory_demos --example rolling_input`

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use kurbo::Vec2;
use selectory_grid::{ColumnInfo, OptionColumn, RowInfo, SelectOption, SelectOptionLogic};
use selectory_input::adapters::grid::movement;
use selectory_input::{Movement, MovementFuture, RollingLogic};

/// Completes after being polled a fixed number of times.
struct Frames(u32);

impl Future for Frames {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<()> {
        if self.0 == 0 {
            return Poll::Ready(());
        }
        self.0 -= 1;
        Poll::Pending
    }
}

fn main() {
    env_logger::init();

    let keys = ["song_1", "song_2", "song_3", "song_4", "song_5"];
    let menu = Rc::new(RefCell::new(SelectOptionLogic::<SelectOption>::new()));
    menu.borrow_mut()
        .initialize(
            1,
            &[OptionColumn::new(keys)],
            keys.iter().map(|k| SelectOption::new(*k, true)).collect(),
            ColumnInfo::default(),
            RowInfo::CIRCULAR,
        )
        .expect("menu layout is valid");

    let frame = Rc::new(Cell::new(0_u32));
    let mut rolling = RollingLogic::new();
    rolling.on_movement_async(|_: &Movement| -> MovementFuture { Box::pin(Frames(3)) });
    let (target, clock) = (Rc::clone(&menu), Rc::clone(&frame));
    rolling.on_movement(move |m: &Movement| {
        let mut menu = target.borrow_mut();
        movement(&mut *menu, m.player_index, m.direction, false, false);
        println!(
            "frame {:>3}: {} {:?}",
            clock.get(),
            if m.is_first { "first" } else { "roll " },
            menu.current_option_key(m.player_index)
        );
    });
    rolling.reset_player_count(1);

    // Hold "down" for one second at 60 fps, then release.
    let dt = 1.0 / 60.0;
    rolling.turn_on(0, Vec2::new(0.0, -1.0));
    for _ in 0..60 {
        frame.set(frame.get() + 1);
        rolling.tick(dt);
    }
    rolling.turn_off(0);
    for _ in 0..10 {
        frame.set(frame.get() + 1);
        rolling.tick(dt);
    }

    println!("stopped on {:?}", menu.borrow().current_option_key(0));
}
