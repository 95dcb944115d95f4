#![no_main]

use libfuzzer_sys::fuzz_target;
use whilec::frontend::{parser, typechecker};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Recovering parse always yields a tree; check it even when syntax errors were reported
        let (mut ast, _) = parser::parse_recovering(s);
        let _ = typechecker::check(&mut ast);
    }
});
