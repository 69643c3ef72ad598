/*
 * SPDX-FileCopyrightText: 2026 Inria
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rle_views::prelude::*;

const N: usize = 100_000;

/// A random permutation of 1..=N: no two elements are equal, so every run
/// has length one.
fn random_data() -> Vec<i32> {
    let mut xs: Vec<i32> = (1..=N as i32).collect();
    xs.shuffle(&mut SmallRng::seed_from_u64(0));
    xs
}

fn check(xs: &[i32], runs: &[Run<i32>]) {
    assert_eq!(runs.len(), N);
    assert!(runs.iter().all(|run| run.count == 1));
    assert!(runs.iter().map(|run| run.value).eq(xs.iter().copied()));
}

#[test]
fn test_big_data_eager() -> anyhow::Result<()> {
    let xs = random_data();
    let mut ys: Vec<Run<i32>> = Vec::new();
    assert_eq!(encode_into(xs.iter().copied(), &mut ys)?, N);
    check(&xs, &ys);
    Ok(())
}

#[test]
fn test_big_data_generator() {
    let xs = random_data();
    let ys: Vec<Run<i32>> = xs.iter().copied().runs().collect();
    check(&xs, &ys);
}

#[test]
fn test_big_data_view() -> anyhow::Result<()> {
    let xs = random_data();
    let mut ys: Vec<Run<i32>> = Vec::with_capacity(N);
    assert_eq!(copy_runs(Rle::new(xs.iter().copied()), &mut ys)?, N);
    check(&xs, &ys);

    let stats: RunStats = ys.iter().collect();
    assert_eq!(stats.singletons, N);
    assert_eq!(stats.longest, 1);
    assert_eq!(stats.compression_ratio(), 1.0);
    Ok(())
}

#[test]
fn test_big_runs() {
    // A single run spanning the whole input
    let xs = vec![42_u8; 10 * N];
    let runs = encode(&xs);
    assert_eq!(runs, [Run::new(10 * N, &42)]);
}
