/*
 * SPDX-FileCopyrightText: 2026 Inria
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Traits and basic types.

A [`Run`] is the unit of output of every encoder; a [`RunSink`] is
where encoders write runs when they are not simply iterated upon.

*/

mod run;
pub use run::*;

mod sink;
pub use sink::*;
