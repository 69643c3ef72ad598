/*
 * SPDX-FileCopyrightText: 2026 Inria
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Implementations of [`RunSink`](crate::traits::RunSink).

Vectors of [`Run`](crate::traits::Run) and vectors of `(usize, T)` pairs
are sinks that never fail (they need the `alloc` feature).

If you need to write runs directly into a preallocated buffer, you can
use a [`SliceRunWriter`], which fails with
[`SinkError::Full`](crate::traits::SinkError::Full) when the buffer is
exhausted. A [`FnRunSink`] passes every run to a closure.

*/

#[cfg(feature = "alloc")]
mod vec;

mod slice;
pub use slice::*;

mod func;
pub use func::*;
