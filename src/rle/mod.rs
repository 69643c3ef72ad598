/*
 * SPDX-FileCopyrightText: 2026 Inria
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Run-length encoding.

The encoding of a sequence is the sequence of its maximal runs of equal
elements, each represented by a [`Run`](crate::traits::Run). For example,
the encoding of `[1, 2, 2, 3, 4, 4, 4, 5, 5]` is
`[(1, 1), (2, 2), (1, 3), (3, 4), (2, 5)]`.

There are three ways to compute an encoding:

- [`encode_into`] is an eager loop writing runs to a
  [`RunSink`](crate::traits::RunSink);
- [`RunLengthExt::runs`] turns any clonable iterator into a lazy
  [`Runs`] cursor;
- [`Rle`] is a reusable, default-constructible view over a sequence that
  hands out [`Runs`] cursors, and plugs into any code expecting an
  [`IntoIterator`], such as [`copy_runs`].

All of them produce the same runs. The lazy forms never allocate and
keep no state besides a position in the input; they require positions to
be clonable (i.e., the input must be forward traversable) because each
run is found by scanning ahead with a copy of the position, using
[`run_length`]. [`encode_into`] has no such requirement.

[`expand`] performs the inverse transformation.

*/

mod scan;
pub use scan::{run_length, skip_run};

mod view;
pub use view::{Rle, RunLengthExt, Runs};

mod eager;
#[cfg(feature = "alloc")]
pub use eager::encode;
pub use eager::encode_into;

mod copy;
pub use copy::copy_runs;

mod expand;
pub use expand::{expand, Expand};
