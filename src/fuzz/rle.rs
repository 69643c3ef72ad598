/*
 * SPDX-FileCopyrightText: 2026 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::prelude::*;
use arbitrary::Arbitrary;

const DEBUG: bool = false;

macro_rules! debugln {
    ($($arg:tt)*) => {
        if DEBUG {
            println!($($arg)*);
        }
    };
}

#[derive(Arbitrary, Debug, Clone)]
pub struct FuzzCase {
    data: Vec<u8>,
    /// Values are reduced modulo this value plus one, so that small
    /// alphabets produce long runs.
    alphabet: u8,
    /// Capacity of the bounded sink.
    capacity: u8,
}

pub fn harness(data: FuzzCase) {
    let alphabet = data.alphabet as u16 + 1;
    let input = data
        .data
        .iter()
        .map(|&x| (x as u16 % alphabet) as u8)
        .collect::<Vec<_>>();
    debugln!("{:?}", input);

    let mut eager: Vec<Run<u8>> = vec![];
    let written = encode_into(input.iter().copied(), &mut eager).unwrap();
    assert_eq!(written, eager.len());

    // equivalence of all variants
    let lazy = encode(&input).into_iter().map(Run::cloned).collect::<Vec<_>>();
    assert_eq!(eager, lazy);
    let generator = input.iter().copied().runs().collect::<Vec<_>>();
    assert_eq!(eager, generator);
    let rle = Rle::from_slice(&input);
    let mut copied: Vec<Run<&u8>> = vec![];
    assert_eq!(copy_runs(&rle, &mut copied).unwrap(), eager.len());
    assert_eq!(copied, encode(&input));

    // empty input, positivity, and non-adjacency
    assert_eq!(input.is_empty(), eager.is_empty());
    assert_eq!(input.is_empty(), rle.is_empty());
    assert!(eager.iter().all(|run| run.count >= 1));
    for pair in eager.windows(2) {
        assert_ne!(pair[0].value, pair[1].value);
    }

    // partition
    assert_eq!(expand(eager.iter().copied()).collect::<Vec<_>>(), input);

    // idempotent peek and agreement between peek and advance
    let mut cursor = rle.iter();
    for run in &eager {
        let peeked = cursor.peek();
        assert_eq!(peeked, cursor.peek());
        assert_eq!(peeked.map(Run::cloned), Some(*run));
        assert!(cursor.advance());
    }
    assert!(cursor.is_exhausted());
    assert!(!cursor.advance());

    // bounded sink
    let capacity = data.capacity as usize;
    let mut buffer = vec![Run::default(); capacity];
    let mut writer = SliceRunWriter::new(&mut buffer);
    let result = encode_into(input.iter().copied(), &mut writer);
    if capacity >= eager.len() {
        assert_eq!(result, Ok(eager.len()));
    } else {
        assert_eq!(result, Err(SinkError::Full { capacity }));
    }
    let prefix = eager.len().min(capacity);
    assert_eq!(writer.written(), &eager[..prefix]);

    let stats: RunStats = eager.iter().collect();
    assert_eq!(stats.elements, input.len());
    assert_eq!(stats.runs, eager.len());
    debugln!("{:?}", stats);
}
