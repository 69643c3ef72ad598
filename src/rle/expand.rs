/*
 * SPDX-FileCopyrightText: 2026 Inria
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::Run;
use core::iter::FusedIterator;

/// Expand a sequence of runs back into the sequence they encode.
///
/// This is the inverse of encoding: for every sequence `s`,
/// `expand(encode(s))` yields the elements of `s`.
///
/// ```
/// use rle_views::prelude::*;
///
/// let data = "mississippi";
/// let restored: String = expand(data.chars().runs()).collect();
/// assert_eq!(restored, data);
/// ```
pub fn expand<T: Clone, R: IntoIterator<Item = Run<T>>>(runs: R) -> Expand<T, R::IntoIter> {
    Expand {
        runs: runs.into_iter(),
        current: None,
    }
}

/// The iterator returned by [`expand`].
#[derive(Debug, Clone)]
pub struct Expand<T, R> {
    runs: R,
    current: Option<Run<T>>,
}

impl<T: Clone, R: Iterator<Item = Run<T>>> Iterator for Expand<T, R> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            if let Some(run) = &mut self.current {
                if run.count > 1 {
                    run.count -= 1;
                    return Some(run.value.clone());
                }
            }
            // Last repetition: move the value out instead of cloning it
            if let Some(run) = self.current.take() {
                if run.count == 1 {
                    return Some(run.value);
                }
            }
            self.current = Some(self.runs.next()?);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = self.current.as_ref().map_or(0, |run| run.count);
        match self.runs.size_hint() {
            (_, Some(0)) => (pending, Some(pending)),
            _ => (pending, None),
        }
    }
}

impl<T: Clone, R: FusedIterator<Item = Run<T>>> FusedIterator for Expand<T, R> {}
