/*
 * SPDX-FileCopyrightText: 2026 Inria
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::{Run, RunSink};

/// Copy all runs produced by `source`, in order, into `sink`, and return
/// the number of runs copied.
///
/// This function knows nothing about run-length encoding: `source` can be
/// a [`Runs`](super::Runs) cursor, an [`Rle`](super::Rle) view, a vector
/// of runs, or any adaptor thereof. Copying stops at the first error
/// returned by the sink, which is returned as is; runs copied before the
/// error remain in the sink.
///
/// ```
/// use rle_views::prelude::*;
///
/// let data = [1, 1, 2];
/// let mut pairs: Vec<(usize, i32)> = Vec::new();
/// let n = copy_runs(Rle::from_slice(&data).iter().map(|r| r.map(|v| v * 10)), &mut pairs).unwrap();
/// assert_eq!(n, 2);
/// assert_eq!(pairs, [(2, 10), (1, 20)]);
/// ```
pub fn copy_runs<T, R, S>(source: R, sink: &mut S) -> Result<usize, S::Error>
where
    R: IntoIterator<Item = Run<T>>,
    S: RunSink<T> + ?Sized,
{
    let mut copied = 0;
    for run in source {
        sink.write_run(run)?;
        copied += 1;
    }
    Ok(copied)
}
