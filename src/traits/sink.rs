/*
 * SPDX-FileCopyrightText: 2026 Inria
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::Run;
use core::error::Error;

/// Sequential, streaming run-by-run writes.
///
/// This is the output side of every encoder in this crate. Implementations
/// are provided for vectors (of [`Run`] or of `(usize, T)` pairs), for
/// [bounded slices](crate::impls::SliceRunWriter), and for
/// [closures](crate::impls::FnRunSink); [`CountRunSink`](crate::utils::CountRunSink)
/// and [`DbgRunSink`](crate::utils::DbgRunSink) can be used to wrap any
/// sink.
///
/// A sink that cannot fail should use [`core::convert::Infallible`] as
/// error type.
pub trait RunSink<T> {
    type Error: Error + Send + Sync + 'static;

    /// Write a run at the end of the sink.
    ///
    /// If an error is returned, the run has not been written.
    fn write_run(&mut self, run: Run<T>) -> Result<(), Self::Error>;

    /// Flush the sink.
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<T, S: RunSink<T> + ?Sized> RunSink<T> for &mut S {
    type Error = S::Error;

    #[inline(always)]
    fn write_run(&mut self, run: Run<T>) -> Result<(), Self::Error> {
        (**self).write_run(run)
    }

    #[inline(always)]
    fn flush(&mut self) -> Result<(), Self::Error> {
        (**self).flush()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Errors of the fallible sinks provided by this crate.
pub enum SinkError {
    /// The sink has no room for more runs.
    Full { capacity: usize },
}

impl core::error::Error for SinkError {}
impl core::fmt::Display for SinkError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SinkError::Full { capacity } => {
                write!(f, "Run sink is full (capacity {} runs)", capacity)
            }
        }
    }
}
