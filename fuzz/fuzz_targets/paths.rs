#![no_main]
use lenient_uri::path::{to_abs_path, to_rel_path};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, &str)| {
    let mut dir = to_abs_path("", data.0);
    if !dir.ends_with('/') {
        dir.push('/');
    }

    let abs = to_abs_path(&dir, data.1);
    assert!(!abs.split('/').any(|seg| seg == "." || seg == ".."));
    assert_eq!(to_abs_path("", &abs), abs);

    let target = to_abs_path("", data.1);
    let rel = to_rel_path(&dir, &target);
    assert_eq!(
        to_abs_path(&dir, &rel).trim_end_matches('/'),
        target.trim_end_matches('/')
    );
});
