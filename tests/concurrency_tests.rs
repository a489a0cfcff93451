//! Concurrency tests: the pipeline holds no state, so parallel calls must
//! agree with a sequential run.

use std::sync::Arc;
use std::thread;
use textfix::process_text;

const INPUTS: [&str; 6] = [
    "hello , world !!",
    "Wow!!! Really??",
    "first sentence. second one? third!",
    "she said \"  hi  \" loudly",
    "a\u{2014}b - c",
    "   ",
];

#[test]
fn concurrent_calls_match_sequential_results() {
    let expected: Vec<_> = INPUTS.iter().map(|text| process_text(text)).collect();
    let expected = Arc::new(expected);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let expected = Arc::clone(&expected);
            thread::spawn(move || {
                for round in 0..50 {
                    let idx = (i + round) % INPUTS.len();
                    let got = process_text(INPUTS[idx]);
                    assert_eq!(got, expected[idx], "thread {i} round {round}");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker thread panicked");
    }
}

#[test]
fn large_input_is_processed_in_one_pass() {
    let text = "wow , such text!! ok ".repeat(5_000);
    let out = process_text(&text).expect("large input normalizes");
    assert!(out.starts_with("Wow, such text! Ok wow, such text! Ok"));
    assert!(out.ends_with('.'));
    assert!(!out.contains("!!"));
}
