/*
 * SPDX-FileCopyrightText: 2026 Inria
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::*;

/// Wrapping struct that keeps track of written runs and of the number of
/// elements they stand for. Optionally, logs at debug level every write,
/// with target `rle_views::count`.
pub struct CountRunSink<S, const PRINT: bool = false> {
    sink: S,
    /// The number of runs written so far on the underlying [`RunSink`].
    pub runs_written: usize,
    /// The sum of the counts of the runs written so far.
    pub elements_written: usize,
}

impl<S, const PRINT: bool> CountRunSink<S, PRINT> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            runs_written: 0,
            elements_written: 0,
        }
    }

    pub fn into_inner(self) -> S {
        self.sink
    }
}

impl<T, S: RunSink<T>, const PRINT: bool> RunSink<T> for CountRunSink<S, PRINT> {
    type Error = S::Error;

    fn write_run(&mut self, run: Run<T>) -> Result<(), Self::Error> {
        let count = run.count;
        self.sink.write_run(run).map(|()| {
            self.runs_written += 1;
            self.elements_written += count;
            if PRINT {
                log::debug!(
                    target: "rle_views::count",
                    "write_run({}) (total = {} runs, {} elements)",
                    count,
                    self.runs_written,
                    self.elements_written
                );
            }
        })
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.sink.flush()
    }
}
