#![no_main]

use libfuzzer_sys::fuzz_target;
use trigart::expr::parse;

fuzz_target!(|text: &str| {
    // Keep runs fast; nesting itself is bounded by the parser
    if text.len() > 4096 {
        return;
    }

    match parse(text) {
        Ok(expr) => {
            // Accepted input must print to text that parses back to itself
            let canonical = expr.to_string();
            let reparsed = parse(&canonical).expect("canonical text must parse");
            assert_eq!(reparsed.to_string(), canonical);
        }
        Err(e) => {
            assert!(e.position <= text.chars().count());
        }
    }
});
