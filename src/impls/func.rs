/*
 * SPDX-FileCopyrightText: 2026 Inria
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::{Run, RunSink};
use core::convert::Infallible;

/// An adapter from a closure to a [`RunSink`].
///
/// ```
/// use rle_views::prelude::*;
///
/// let mut longest = 0;
/// encode_into("abbbc".chars(), &mut FnRunSink::new(|run: Run<char>| {
///     longest = longest.max(run.count);
/// })).unwrap();
/// assert_eq!(longest, 3);
/// ```
#[derive(Debug, Clone)]
pub struct FnRunSink<F> {
    f: F,
}

impl<F> FnRunSink<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }

    pub fn into_inner(self) -> F {
        self.f
    }
}

impl<T, F: FnMut(Run<T>)> RunSink<T> for FnRunSink<F> {
    type Error = Infallible;

    #[inline(always)]
    fn write_run(&mut self, run: Run<T>) -> Result<(), Infallible> {
        (self.f)(run);
        Ok(())
    }
}
