/*
 * SPDX-FileCopyrightText: 2026 Inria
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::*;

/// An implementation of [`RunSink`] for a mutable slice of runs.
///
/// Runs are written sequentially from the start of the slice; when the
/// slice is full, [`write_run`](RunSink::write_run) returns
/// [`SinkError::Full`] and the slice is left untouched. This makes it
/// possible to encode into a fixed-size buffer without allocating.
///
/// # Example
/// ```
/// use rle_views::prelude::*;
///
/// let mut buffer = [Run::default(); 2];
/// let mut writer = SliceRunWriter::new(&mut buffer);
///
/// assert!(encode_into([1, 1, 2], &mut writer).is_ok());
/// assert_eq!(writer.written(), &[Run::new(2, 1), Run::new(1, 2)]);
///
/// // there is no room for a third run
/// assert_eq!(writer.write_run(Run::new(1, 3)), Err(SinkError::Full { capacity: 2 }));
/// ```
#[derive(Debug, PartialEq)]
pub struct SliceRunWriter<'a, T> {
    data: &'a mut [Run<T>],
    run_index: usize,
}

impl<'a, T> SliceRunWriter<'a, T> {
    /// Create a new [`SliceRunWriter`] writing from the start of `data`.
    #[must_use]
    pub fn new(data: &'a mut [Run<T>]) -> Self {
        Self { data, run_index: 0 }
    }

    /// Return the number of runs written so far.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.run_index
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.run_index == 0
    }

    /// Return the maximum number of runs that can be written.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Return the runs written so far.
    pub fn written(&self) -> &[Run<T>] {
        &self.data[..self.run_index]
    }

    /// Consume the writer and return the runs written.
    pub fn into_written(self) -> &'a mut [Run<T>] {
        &mut self.data[..self.run_index]
    }
}

impl<T> RunSink<T> for SliceRunWriter<'_, T> {
    type Error = SinkError;

    #[inline]
    fn write_run(&mut self, run: Run<T>) -> Result<(), SinkError> {
        match self.data.get_mut(self.run_index) {
            Some(slot) => {
                *slot = run;
                self.run_index += 1;
                Ok(())
            }
            None => Err(SinkError::Full {
                capacity: self.data.len(),
            }),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_slice_writer() {
        let mut buffer = [Run::new(0, 0_u16); 3];
        let mut writer = SliceRunWriter::new(&mut buffer);
        assert!(writer.is_empty());
        assert_eq!(writer.capacity(), 3);
        for i in 0..3 {
            writer.write_run(Run::new(1, i)).unwrap();
        }
        assert_eq!(writer.len(), 3);
        assert!(writer.write_run(Run::new(1, 9)).is_err());
        assert_eq!(writer.into_written().len(), 3);
        assert_eq!(buffer[2], Run::new(1, 2));
    }

    #[test]
    fn test_empty_slice() {
        let mut buffer: [Run<u8>; 0] = [];
        let mut writer = SliceRunWriter::new(&mut buffer);
        assert_eq!(
            writer.write_run(Run::new(1, 1)),
            Err(SinkError::Full { capacity: 0 })
        );
        assert!(writer.written().is_empty());
    }
}
