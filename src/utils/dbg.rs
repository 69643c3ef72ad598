/*
 * SPDX-FileCopyrightText: 2026 Inria
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::*;
use core::fmt::Debug;

/// A wrapper over a [`RunSink`] that reports at debug level all runs
/// written, and all errors returned by the underlying sink.
///
/// Messages are emitted through the [`log`] facade with target
/// `rle_views::dbg`, so they can be enabled selectively, e.g., with
/// `RUST_LOG=rle_views::dbg=debug` when using `env_logger`.
pub struct DbgRunSink<S> {
    sink: S,
}

impl<S> DbgRunSink<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn into_inner(self) -> S {
        self.sink
    }
}

impl<T: Debug, S: RunSink<T>> RunSink<T> for DbgRunSink<S> {
    type Error = S::Error;

    fn write_run(&mut self, run: Run<T>) -> Result<(), Self::Error> {
        log::debug!(target: "rle_views::dbg", "{{{} x {:?}}}", run.count, run.value);
        self.sink.write_run(run).inspect_err(|e| {
            log::debug!(target: "rle_views::dbg", "write_run failed: {}", e);
        })
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        log::trace!(target: "rle_views::dbg", "flush()");
        self.sink.flush()
    }
}
