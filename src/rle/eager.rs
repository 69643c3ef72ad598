/*
 * SPDX-FileCopyrightText: 2026 Inria
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Eager run-length encoding.

use crate::traits::{Run, RunSink};

/// Encode `input` writing runs to `sink`, and return the number of runs
/// written.
///
/// This is a direct loop that keeps the current value and count, and does
/// not need to clone the input iterator; it is the baseline against which
/// the [lazy](super::Runs) implementation is benchmarked. The first error
/// returned by the sink stops the encoding and is returned as is.
///
/// ```
/// use rle_views::prelude::*;
///
/// let mut pairs: Vec<(usize, char)> = Vec::new();
/// assert_eq!(encode_into("xxyzz".chars(), &mut pairs).unwrap(), 3);
/// assert_eq!(pairs, [(2, 'x'), (1, 'y'), (2, 'z')]);
/// ```
pub fn encode_into<I, S>(input: I, sink: &mut S) -> Result<usize, S::Error>
where
    I: IntoIterator,
    I::Item: PartialEq,
    S: RunSink<I::Item> + ?Sized,
{
    let mut input = input.into_iter();
    let Some(mut value) = input.next() else {
        return Ok(0);
    };
    let mut count = 1;
    let mut written = 0;
    for y in input {
        if y == value {
            count += 1;
        } else {
            sink.write_run(Run::new(count, core::mem::replace(&mut value, y)))?;
            written += 1;
            count = 1;
        }
    }
    sink.write_run(Run::new(count, value))?;
    Ok(written + 1)
}

/// Encode a sequence into a vector of runs.
///
/// This is a convenience wrapper draining the lazy [`Runs`](super::Runs)
/// cursor.
///
/// ```
/// use rle_views::prelude::*;
///
/// let runs = encode(&[1, 2, 2, 3, 4, 4, 4, 5, 5]);
/// let pairs: Vec<_> = runs.into_iter().map(|r| (r.count, *r.value)).collect();
/// assert_eq!(pairs, [(1, 1), (2, 2), (1, 3), (3, 4), (2, 5)]);
/// ```
#[cfg(feature = "alloc")]
pub fn encode<S>(seq: S) -> alloc::vec::Vec<Run<S::Item>>
where
    S: IntoIterator,
    S::IntoIter: Clone,
    S::Item: PartialEq,
{
    super::Runs::new(seq.into_iter()).collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::impls::SliceRunWriter;
    use crate::traits::SinkError;

    #[test]
    fn test_empty() {
        let mut runs: Vec<Run<i32>> = vec![];
        assert_eq!(encode_into(core::iter::empty::<i32>(), &mut runs).unwrap(), 0);
        assert!(runs.is_empty());
        assert!(encode(Vec::<i32>::new()).is_empty());
    }

    #[test]
    fn test_stops_on_error() {
        let mut buffer = [Run::default(); 2];
        let mut writer = SliceRunWriter::new(&mut buffer);
        let err = encode_into([1, 2, 3, 3], &mut writer).unwrap_err();
        assert_eq!(err, SinkError::Full { capacity: 2 });
        assert_eq!(writer.written(), &[Run::new(1, 1), Run::new(1, 2)]);
    }

    #[test]
    fn test_matches_lazy() {
        let data = [0, 0, 0, 1, 0, 0, 2, 2, 1];
        let mut eager: Vec<Run<&i32>> = vec![];
        encode_into(&data, &mut eager).unwrap();
        assert_eq!(eager, encode(&data));
    }
}
