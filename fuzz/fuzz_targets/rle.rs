#![no_main]

use libfuzzer_sys::fuzz_target;
use rle_views::fuzz::rle::*;

fuzz_target!(|data: FuzzCase| {
    harness(data);
});
