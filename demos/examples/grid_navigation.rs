// Copyright 2025 the Selectory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid navigation on a small menu with holes and disabled options.
//!
//! The layout is authored as a comma-separated key list, decoded into columns,
//! and navigated with the default axis policies (rows wrap, horizontal moves
//! change rows automatically).
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p selectory_demos --example grid_navigation`

use selectory_grid::layout::{decode_option_columns, encode_option_keys};
use selectory_grid::{ColumnInfo, CoordinateChanged, MoveDirection, RowInfo, SelectOption, SelectOptionLogic};

fn main() {
    env_logger::init();

    // Column by column, top to bottom:
    //         col 0     col 1     col 2     col 3
    // row 0   -         new       new       gallery
    // row 1   continue  (load)    -         credits
    // row 2   -         options   extras    (quit)
    let layout = ",continue,,new,load,options,new,,extras,gallery,credits,quit,";
    let columns = decode_option_columns(layout, 4, 3, false);
    assert_eq!(encode_option_keys(&columns), layout);

    let options = vec![
        SelectOption::new("continue", true),
        SelectOption::new("new", true),
        SelectOption::new("load", false),
        SelectOption::new("options", true),
        SelectOption::new("extras", true),
        SelectOption::new("gallery", true),
        SelectOption::new("credits", true),
        SelectOption::new("quit", false),
    ];

    let mut menu = SelectOptionLogic::new();
    menu.on_coordinate_changed(|e: &CoordinateChanged<'_, SelectOption>| {
        let from = e.previous_option.map_or("-", |o| o.key.as_str());
        println!(
            "player {}: {from} -> {} at {}",
            e.player_index, e.current_option.key, e.current_coordinate
        );
    });

    if let Err(err) = menu.initialize(1, &columns, options, ColumnInfo::default(), RowInfo::default()) {
        log::error!("cannot build menu: {err}");
        return;
    }

    println!("enabled: {:?}", menu.enabled_option_keys());

    let script = [
        MoveDirection::Right,
        MoveDirection::Right,
        MoveDirection::Down,
        MoveDirection::Down,
        MoveDirection::Left,
        MoveDirection::Up,
        MoveDirection::Right,
    ];
    for direction in script {
        if !menu.try_move(0, direction, true) {
            println!("player 0: {direction:?} blocked");
        }
    }

    println!("final: {:?}", menu.current_option_key(0));
    menu.release();
}
