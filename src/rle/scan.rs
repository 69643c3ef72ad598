/*
 * SPDX-FileCopyrightText: 2026 Inria
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Equality-run scanning.
//!
//! A position is any clonable iterator: cloning it is the same as copying
//! a cursor, and it carries its own end bound, which is reached when
//! [`next`](Iterator::next) returns `None`.

use crate::traits::Run;

/// Scan the run starting at `pos`.
///
/// Return the run and the position immediately after it, or `None` if
/// `pos` is at the end of its sequence. `pos` is not modified.
///
/// This is the only place where run boundaries are decided: peeking,
/// advancing, and iterating all go through this function.
///
/// ```
/// use rle_views::rle::run_length;
///
/// let data = [4, 4, 4, 2];
/// let (run, next) = run_length(&data.iter()).unwrap();
/// assert_eq!(run.into_pair(), (3, &4));
/// assert_eq!(next.as_slice(), &[2]);
/// ```
#[inline]
pub fn run_length<I>(pos: &I) -> Option<(Run<I::Item>, I)>
where
    I: Iterator + Clone,
    I::Item: PartialEq,
{
    let mut next = pos.clone();
    let value = next.next()?;
    let mut count = 1;
    loop {
        let mut ahead = next.clone();
        match ahead.next() {
            Some(x) if x == value => {
                count += 1;
                next = ahead;
            }
            _ => break,
        }
    }
    Some((Run::new(count, value), next))
}

/// Advance `pos` past the run starting at it, returning the run length,
/// or `None` (leaving `pos` unchanged) if `pos` is at the end.
#[inline]
pub fn skip_run<I>(pos: &mut I) -> Option<usize>
where
    I: Iterator + Clone,
    I::Item: PartialEq,
{
    let (run, next) = run_length(pos)?;
    *pos = next;
    Some(run.count)
}
