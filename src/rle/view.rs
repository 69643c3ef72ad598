/*
 * SPDX-FileCopyrightText: 2026 Inria
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Lazy run-length encoding.
//!
//! [`Rle`] is a view: it stores the boundaries of a sequence and nothing
//! else, and hands out independent [`Runs`] cursors. A [`Runs`] cursor is a
//! standard [`Iterator`] over [`Run`]s, so it composes with `collect`,
//! `zip`, `map`, [`copy_runs`](super::copy_runs) and so on. It can also be
//! driven by hand with [`peek`](Runs::peek), [`advance`](Runs::advance) and
//! [`is_exhausted`](Runs::is_exhausted).
//!
//! Both types contain a single position (a clonable iterator over the
//! input), so they are as cheap to copy as the position itself, and they
//! never allocate.

use super::scan::run_length;
use crate::traits::Run;
use core::iter::FusedIterator;

/// A run-length encoded view over a sequence.
///
/// The view borrows (or owns, if the position does) the sequence through
/// its position, and produces a fresh cursor every time it is iterated
/// upon by reference, so it can be traversed any number of times:
/// ```
/// use rle_views::prelude::*;
///
/// let data = [1, 2, 2, 3, 4, 4, 4, 5, 5];
/// let rle = Rle::from_slice(&data);
///
/// let pairs: Vec<_> = rle.iter().map(|r| (r.count, *r.value)).collect();
/// assert_eq!(pairs, [(1, 1), (2, 2), (1, 3), (3, 4), (2, 5)]);
///
/// // A second, independent traversal
/// assert_eq!((&rle).into_iter().count(), 5);
/// ```
///
/// Views of slices (and of any other position implementing [`Default`]) are
/// default-constructible, and the default view is empty:
/// ```
/// use rle_views::prelude::*;
///
/// let rle: Rle<core::slice::Iter<'_, u8>> = Rle::default();
/// assert!(rle.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Rle<I> {
    pos: I,
}

impl<I: Iterator + Clone> Rle<I> {
    /// Create a view over a sequence.
    pub fn new<S: IntoIterator<IntoIter = I>>(seq: S) -> Self {
        Self {
            pos: seq.into_iter(),
        }
    }

    /// Return a cursor positioned on the first run.
    ///
    /// No run is computed until the cursor is used.
    #[inline(always)]
    pub fn iter(&self) -> Runs<I> {
        Runs::new(self.pos.clone())
    }

    /// Return whether the sequence is empty, that is, whether it will
    /// produce no runs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos.clone().next().is_none()
    }

    pub fn into_inner(self) -> I {
        self.pos
    }
}

impl<'a, T: PartialEq> Rle<core::slice::Iter<'a, T>> {
    /// Create a view over a slice.
    #[inline(always)]
    pub fn from_slice(data: &'a [T]) -> Self {
        Self { pos: data.iter() }
    }
}

impl<I: Iterator + Clone> IntoIterator for Rle<I>
where
    I::Item: PartialEq,
{
    type Item = Run<I::Item>;
    type IntoIter = Runs<I>;

    #[inline(always)]
    fn into_iter(self) -> Runs<I> {
        Runs::new(self.pos)
    }
}

impl<I: Iterator + Clone> IntoIterator for &Rle<I>
where
    I::Item: PartialEq,
{
    type Item = Run<I::Item>;
    type IntoIter = Runs<I>;

    #[inline(always)]
    fn into_iter(self) -> Runs<I> {
        self.iter()
    }
}

/// A cursor over the runs of a sequence.
///
/// The cursor is single pass: once it has moved past a run, there is no
/// way to get it back from the cursor. Cloning the cursor, however, yields
/// an independent cursor that will rescan the sequence from the same
/// point.
///
/// [`peek`](Runs::peek) does not move the cursor, and returns the same run
/// until [`advance`](Runs::advance) is called; [`next`](Iterator::next)
/// does both with a single scan.
/// ```
/// use rle_views::prelude::*;
///
/// let mut runs = "aab".chars().runs();
/// assert_eq!(runs.peek(), Some(Run::new(2, 'a')));
/// assert_eq!(runs.peek(), Some(Run::new(2, 'a')));
/// assert!(runs.advance());
/// assert_eq!(runs.next(), Some(Run::new(1, 'b')));
/// assert!(runs.is_exhausted());
/// assert!(!runs.advance());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Runs<I> {
    pos: I,
}

impl<I: Iterator + Clone> Runs<I> {
    /// Create a cursor positioned at the run starting at `pos`.
    #[inline(always)]
    pub fn new(pos: I) -> Self {
        Self { pos }
    }

    /// Return the current position, that is, the position of the first
    /// element of the current run.
    pub fn into_inner(self) -> I {
        self.pos
    }
}

impl<I: Iterator + Clone> Runs<I>
where
    I::Item: PartialEq,
{
    /// Return whether the cursor has reached the end of the sequence.
    ///
    /// This is the only termination test; [`peek`](Runs::peek) returns
    /// `None` and [`advance`](Runs::advance) returns false exactly when it
    /// is true.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.pos.clone().next().is_none()
    }

    /// Return the current run without moving the cursor, or `None` if the
    /// cursor is exhausted.
    #[inline]
    pub fn peek(&self) -> Option<Run<I::Item>> {
        run_length(&self.pos).map(|(run, _)| run)
    }

    /// Move the cursor past the current run.
    ///
    /// Return false, without changing the cursor, if the cursor is
    /// exhausted.
    #[inline]
    pub fn advance(&mut self) -> bool {
        match run_length(&self.pos) {
            Some((_, next)) => {
                self.pos = next;
                true
            }
            None => false,
        }
    }
}

impl<I: Iterator + Clone> Iterator for Runs<I>
where
    I::Item: PartialEq,
{
    type Item = Run<I::Item>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (run, next) = run_length(&self.pos)?;
        self.pos = next;
        Some(run)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.pos.size_hint();
        (lower.min(1), upper)
    }
}

impl<I: FusedIterator + Clone> FusedIterator for Runs<I> where I::Item: PartialEq {}

/// Extension trait turning a clonable iterator into a [`Runs`] cursor.
///
/// This is the quickest way to iterate over the runs of a sequence when a
/// reusable [`Rle`] view is not needed:
/// ```
/// use rle_views::prelude::*;
///
/// for run in [7, 7, 8].iter().runs() {
///     println!("{} x {}", run.count, run.value);
/// }
/// ```
pub trait RunLengthExt: Iterator + Clone + Sized {
    #[inline(always)]
    fn runs(self) -> Runs<Self>
    where
        Self::Item: PartialEq,
    {
        Runs::new(self)
    }
}

impl<I: Iterator + Clone> RunLengthExt for I {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_peek_is_idempotent() {
        let data = [5, 5, 6];
        let runs = Rle::from_slice(&data).iter();
        let first = runs.peek();
        assert_eq!(first, runs.peek());
        assert_eq!(first, Some(Run::new(2, &5)));
    }

    #[test]
    fn test_advance_agrees_with_peek() {
        let data = [1, 1, 2, 3, 3, 3, 1];
        let mut manual = Rle::from_slice(&data).iter();
        let mut auto = Rle::from_slice(&data).iter();
        while let Some(run) = manual.peek() {
            assert_eq!(Some(run), auto.next());
            assert!(manual.advance());
        }
        assert!(manual.is_exhausted());
        assert_eq!(auto.next(), None);
    }

    #[test]
    fn test_independent_cursors() {
        let data = [3, 3, 4, 4, 4];
        let rle = Rle::from_slice(&data);
        let mut a = rle.iter();
        assert_eq!(a.next(), Some(Run::new(2, &3)));
        // Cloning copies the current position only
        let mut b = a.clone();
        assert_eq!(a.next(), Some(Run::new(3, &4)));
        assert_eq!(a.next(), None);
        assert_eq!(b.next(), Some(Run::new(3, &4)));
        // The view itself is unaffected
        assert_eq!(rle.iter().count(), 2);
    }

    #[test]
    fn test_default() {
        let rle: Rle<core::slice::Iter<'_, i32>> = Rle::default();
        assert!(rle.is_empty());
        assert_eq!(rle.iter().next(), None);
        let mut runs: Runs<core::slice::Iter<'_, i32>> = Runs::default();
        assert!(runs.is_exhausted());
        assert_eq!(runs.peek(), None);
        assert!(!runs.advance());
    }

    #[test]
    fn test_owned_position() {
        let rle = Rle::new(vec![String::from("a"), String::from("a")]);
        let runs: Vec<_> = rle.into_iter().collect();
        assert_eq!(runs, vec![Run::new(2, String::from("a"))]);
    }

    #[test]
    fn test_size_hint() {
        let data = [1, 1, 2];
        let mut runs = data.iter().runs();
        assert_eq!(runs.size_hint(), (1, Some(3)));
        runs.next();
        runs.next();
        assert_eq!(runs.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_into_inner() {
        let data = [1, 1, 2];
        let mut runs = data.iter().runs();
        runs.advance();
        assert_eq!(runs.into_inner().as_slice(), &[2]);
    }
}
