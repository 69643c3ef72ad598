/*
 * SPDX-FileCopyrightText: 2026 Inria
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Checks that lazy encoding does not allocate.
//!
//! This file contains a single test, as only one heap profiler can be
//! running at a time in the test binary.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rle_views::prelude::*;
use std::hint::black_box;

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

#[test]
fn test_lazy_does_not_allocate() {
    let _profiler = dhat::Profiler::builder().testing().build();

    let mut xs: Vec<i32> = (1..=100_000).collect();
    xs.shuffle(&mut SmallRng::seed_from_u64(0));
    xs.extend([0; 1000]);

    let before = dhat::HeapStats::get();
    let mut runs = 0;
    let mut elements = 0;
    for run in &Rle::from_slice(&xs) {
        runs += 1;
        elements += black_box(run).count;
    }
    let mut stats = RunStats::default();
    let mut sink = FnRunSink::new(|run: Run<&i32>| stats.update(&run));
    copy_runs(xs.iter().runs(), &mut sink).unwrap();
    let after = dhat::HeapStats::get();
    dhat::assert_eq!(after.total_blocks, before.total_blocks);

    assert_eq!(runs, 100_001);
    assert_eq!(elements, xs.len());
    assert_eq!(stats.runs, runs);
    assert_eq!(stats.longest, 1000);

    // The eager path into a vector, instead, allocates the output
    let mut ys: Vec<Run<i32>> = Vec::new();
    encode_into(xs.iter().copied(), &mut ys).unwrap();
    let grown = dhat::HeapStats::get().total_bytes - after.total_bytes;
    dhat::assert!(grown as usize >= ys.len() * std::mem::size_of::<Run<i32>>());
}
