/*
 * SPDX-FileCopyrightText: 2026 Inria
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::{Run, RunSink};
use alloc::vec::Vec;
use core::convert::Infallible;

impl<T> RunSink<T> for Vec<Run<T>> {
    type Error = Infallible;

    #[inline(always)]
    fn write_run(&mut self, run: Run<T>) -> Result<(), Infallible> {
        self.push(run);
        Ok(())
    }
}

impl<T> RunSink<T> for Vec<(usize, T)> {
    type Error = Infallible;

    #[inline(always)]
    fn write_run(&mut self, run: Run<T>) -> Result<(), Infallible> {
        self.push(run.into_pair());
        Ok(())
    }
}
