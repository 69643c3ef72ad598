/*
 * SPDX-FileCopyrightText: 2026 Inria
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// A maximal sequence of consecutive equal elements, stored as a count and a
/// value.
///
/// The count of a run produced by this crate is always at least one, and no
/// two consecutive runs produced by the same encoding have equal values.
///
/// Runs convert to and from `(count, value)` pairs:
/// ```
/// use rle_views::prelude::*;
///
/// let run = Run::new(3, 'a');
/// assert_eq!(run.into_pair(), (3, 'a'));
/// assert_eq!(Run::from((3, 'a')), run);
/// assert_eq!(run.iter().collect::<String>(), "aaa");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Run<T> {
    /// The number of repetitions of [`value`](Run::value).
    pub count: usize,
    /// The repeated element.
    pub value: T,
}

impl<T> Run<T> {
    #[inline(always)]
    pub const fn new(count: usize, value: T) -> Self {
        Self { count, value }
    }

    /// Return the number of repetitions.
    #[inline(always)]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Return a reference to the repeated element.
    #[inline(always)]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Return the number of elements this run stands for.
    ///
    /// This is the same as [`count`](Run::count).
    #[inline(always)]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        self.count
    }

    #[inline(always)]
    pub fn into_pair(self) -> (usize, T) {
        (self.count, self.value)
    }

    /// Apply `f` to the value, keeping the count.
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Run<U> {
        Run {
            count: self.count,
            value: f(self.value),
        }
    }

    /// Turn a run of references into a run of owned values.
    #[inline]
    pub fn cloned<U: Clone>(self) -> Run<U>
    where
        T: core::ops::Deref<Target = U>,
    {
        self.map(|v| U::clone(&v))
    }

    /// Return an iterator yielding the value [`count`](Run::count) times.
    #[inline]
    pub fn iter(&self) -> core::iter::RepeatN<T>
    where
        T: Clone,
    {
        core::iter::repeat_n(self.value.clone(), self.count)
    }
}

impl<T> From<(usize, T)> for Run<T> {
    #[inline(always)]
    fn from((count, value): (usize, T)) -> Self {
        Self { count, value }
    }
}

impl<T> From<Run<T>> for (usize, T) {
    #[inline(always)]
    fn from(run: Run<T>) -> Self {
        run.into_pair()
    }
}

impl<T: PartialEq> PartialEq<(usize, T)> for Run<T> {
    fn eq(&self, other: &(usize, T)) -> bool {
        self.count == other.0 && self.value == other.1
    }
}

impl<T: Clone> IntoIterator for Run<T> {
    type Item = T;
    type IntoIter = core::iter::RepeatN<T>;

    fn into_iter(self) -> Self::IntoIter {
        core::iter::repeat_n(self.value, self.count)
    }
}
