/*
 * SPDX-FileCopyrightText: 2026 Inria
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Debug helpers and statistics.

[`CountRunSink`] keeps track of the number of runs and elements written to a
[`RunSink`](crate::traits::RunSink), optionally logging the operations
performed on the sink.

[`DbgRunSink`] logs all runs written to a
[`RunSink`](crate::traits::RunSink).

[`RunStats`] keeps track of the shape of an encoding.

*/

mod count;
pub use count::*;

mod dbg;
pub use dbg::*;

pub mod stats;
pub use stats::RunStats;
