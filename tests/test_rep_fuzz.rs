/*
 * SPDX-FileCopyrightText: 2026 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![cfg(feature = "fuzz")]

use anyhow::Result;
use arbitrary::{Arbitrary, Unstructured};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rle_views::fuzz::rle::*;

/// Replays the corpus, if any, and then the harness on pseudorandom bytes.
#[test]
fn test_rep_fuzz_rle() -> Result<()> {
    let dir = "fuzz/corpus/rle";
    if let Ok(entries) = std::fs::read_dir(dir) {
        for file in entries {
            let file = file?;
            if file.file_type()?.is_dir() {
                continue;
            }
            let file_bytes = std::fs::read(file.path())?;
            let mut unstructured = Unstructured::new(&file_bytes);
            harness(FuzzCase::arbitrary(&mut unstructured)?);
        }
    }

    let mut rng = SmallRng::seed_from_u64(0);
    for len in 0..2000 {
        let bytes: Vec<u8> = (0..len).map(|_| rng.random()).collect();
        let mut unstructured = Unstructured::new(&bytes);
        harness(FuzzCase::arbitrary(&mut unstructured)?);
    }
    Ok(())
}
