/*
 * SPDX-FileCopyrightText: 2026 Inria
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

use crate::traits::Run;
use core::ops::{Add, AddAssign};

/// Keeps track of the shape of a run-length encoding.
///
/// This structure can be used to determine empirically whether run-length
/// encoding is worthwhile for a given sequence. You have to [update the
/// structure](Self::update) with the runs of the encoding (or build it
/// from them, as it implements [`FromIterator`] and [`Extend`]); at any
/// time, you can examine the statistics or call
/// [`compression_ratio`](Self::compression_ratio).
///
/// ```
/// use rle_views::prelude::*;
///
/// let stats: RunStats = [1, 1, 1, 2, 3, 3].iter().runs().collect();
/// assert_eq!(stats.runs, 3);
/// assert_eq!(stats.elements, 6);
/// assert_eq!(stats.longest, 3);
/// assert_eq!(stats.singletons, 1);
/// assert_eq!(stats.compression_ratio(), 2.0);
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunStats {
    /// The number of runs observed.
    pub runs: usize,
    /// The total number of elements in the runs observed.
    pub elements: usize,
    /// The length of the longest run observed.
    pub longest: usize,
    /// The number of runs of length one.
    pub singletons: usize,
}

impl RunStats {
    /// Update the stats with a run.
    #[inline]
    pub fn update<T>(&mut self, run: &Run<T>) {
        self.runs += 1;
        self.elements += run.count;
        self.longest = self.longest.max(run.count);
        if run.count == 1 {
            self.singletons += 1;
        }
    }

    /// Combine additively the stats of another encoding, as if its runs
    /// had been observed by this structure.
    ///
    /// Note that two runs with the same value at the boundary are not
    /// coalesced.
    pub fn merge(&mut self, other: &Self) {
        self.runs += other.runs;
        self.elements += other.elements;
        self.longest = self.longest.max(other.longest);
        self.singletons += other.singletons;
    }

    /// Return the average number of elements per run, or zero if no run
    /// has been observed.
    pub fn compression_ratio(&self) -> f64 {
        if self.runs == 0 {
            0.0
        } else {
            self.elements as f64 / self.runs as f64
        }
    }
}

impl<T> Extend<Run<T>> for RunStats {
    fn extend<I: IntoIterator<Item = Run<T>>>(&mut self, iter: I) {
        for run in iter {
            self.update(&run);
        }
    }
}

impl<'a, T: 'a> Extend<&'a Run<T>> for RunStats {
    fn extend<I: IntoIterator<Item = &'a Run<T>>>(&mut self, iter: I) {
        for run in iter {
            self.update(run);
        }
    }
}

impl<T> FromIterator<Run<T>> for RunStats {
    fn from_iter<I: IntoIterator<Item = Run<T>>>(iter: I) -> Self {
        let mut stats = Self::default();
        stats.extend(iter);
        stats
    }
}

impl<'a, T: 'a> FromIterator<&'a Run<T>> for RunStats {
    fn from_iter<I: IntoIterator<Item = &'a Run<T>>>(iter: I) -> Self {
        let mut stats = Self::default();
        stats.extend(iter);
        stats
    }
}

impl AddAssign for RunStats {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}

impl Add for RunStats {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl core::iter::Sum for RunStats {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, stats| acc + stats)
    }
}
