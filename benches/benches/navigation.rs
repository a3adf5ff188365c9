// Copyright 2025 the Selectory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use selectory_grid::layout::{decode_option_columns, encode_option_keys};
use selectory_grid::{
    ColumnInfo, Coordinate, MoveDirection, OptionColumn, RowInfo, SelectOption, SelectOptionLogic,
};

/// An `n`x`n` grid where every `stride`-th cell is enabled and the rest are disabled.
fn gen_sparse_grid(n: usize, stride: usize) -> (Vec<OptionColumn>, Vec<SelectOption>) {
    let mut options = Vec::with_capacity(n * n);
    let columns = (0..n)
        .map(|x| {
            OptionColumn::new((0..n).map(|y| {
                let key = format!("{x}_{y}");
                options.push(SelectOption::new(key.clone(), (x * n + y) % stride == 0));
                key
            }))
        })
        .collect();
    (columns, options)
}

fn engine(n: usize, stride: usize, column_info: ColumnInfo, row_info: RowInfo) -> SelectOptionLogic<SelectOption> {
    let (columns, options) = gen_sparse_grid(n, stride);
    let mut logic = SelectOptionLogic::new();
    logic
        .initialize(1, &columns, options, column_info, row_info)
        .unwrap();
    logic
}

fn bench_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("moves");
    for &n in &[8_usize, 32, 128] {
        group.throughput(Throughput::Elements(4));
        group.bench_function(format!("dense_circular_n{n}"), |b| {
            let mut logic = engine(n, 1, ColumnInfo::CIRCULAR, RowInfo::CIRCULAR);
            b.iter(|| {
                for direction in [MoveDirection::Right, MoveDirection::Down, MoveDirection::Left, MoveDirection::Up] {
                    black_box(logic.try_move(0, direction, false));
                }
            });
        });
        group.bench_function(format!("sparse_auto_change_n{n}"), |b| {
            let mut logic = engine(n, 7, ColumnInfo::default(), RowInfo::default());
            b.iter(|| {
                for direction in [MoveDirection::Right, MoveDirection::Down, MoveDirection::Left, MoveDirection::Up] {
                    black_box(logic.try_move(0, direction, true));
                }
            });
        });
    }
    group.finish();
}

fn bench_worst_case_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("worst_case_search");
    for &n in &[32_usize, 256] {
        // Only (0, 0) is enabled, so every move probes a full axis and fails.
        group.bench_function(format!("single_enabled_n{n}"), |b| {
            let mut logic = engine(n, n * n, ColumnInfo::CIRCULAR, RowInfo::CIRCULAR);
            b.iter(|| {
                black_box(logic.try_move_to_right(0, true));
                black_box(logic.try_move_to_down(0, true));
            });
            assert_eq!(logic.current_coordinate(0), Some(Coordinate::new(0, 0)));
        });
    }
    group.finish();
}

fn bench_initialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("initialize");
    for &n in &[16_usize, 64] {
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("n{n}"), |b| {
            b.iter_batched(
                || gen_sparse_grid(n, 3),
                |(columns, options)| {
                    let mut logic = SelectOptionLogic::new();
                    logic
                        .initialize(4, &columns, options, ColumnInfo::default(), RowInfo::default())
                        .unwrap();
                    black_box(logic)
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let n = 64;
    let (columns, _) = gen_sparse_grid(n, 1);
    let text = encode_option_keys(&columns);
    group.throughput(Throughput::Elements((n * n) as u64));
    group.bench_function("encode_n64", |b| b.iter(|| black_box(encode_option_keys(&columns))));
    group.bench_function("decode_n64", |b| {
        b.iter(|| black_box(decode_option_columns(&text, n, n, false)));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_moves,
    bench_worst_case_search,
    bench_initialize,
    bench_layout
);
criterion_main!(benches);
