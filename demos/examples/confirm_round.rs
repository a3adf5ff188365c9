// Copyright 2025 the Selectory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An "all players ready" round with two confirms per player.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p selectory_demos --example confirm_round`

use selectory_input::ConfirmLogic;

fn main() {
    env_logger::init();

    let mut ready = ConfirmLogic::new();
    ready.on_confirm(|player, count| println!("player {player} confirmed ({count}/2)"));
    ready.on_cancel(|player, count| println!("player {player} cancelled ({count}/2)"));
    ready.on_complete(|| println!("everyone is ready"));

    ready.set_max_confirm_count(2);
    ready.reset_player_count(3);

    let presses = [(0, true), (1, true), (1, false), (0, true), (0, false), (2, true), (2, true), (1, true), (1, true)];
    for (player, confirm) in presses {
        let accepted = if confirm {
            ready.try_confirm(player)
        } else {
            ready.try_cancel(player)
        };
        if !accepted {
            println!("player {player}: {} ignored", if confirm { "confirm" } else { "cancel" });
        }
    }

    assert!(ready.is_complete());
    // The round is locked until it is reset.
    assert!(!ready.try_cancel(0));
}
