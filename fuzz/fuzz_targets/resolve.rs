#![no_main]
use lenient_uri::UriValue;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, &str)| {
    let base = UriValue::parse(data.0);
    let r = data.1;

    let resolved = UriValue::with_base(r, &base);
    assert_eq!(base.to_absolute(r, false), resolved.as_str());
    assert_eq!(base.is_same_origin(&resolved), resolved.is_same_origin(&base));

    let stripped = base.to_absolute(r, true);
    if base.is_same_origin(&resolved) {
        assert_eq!(stripped, resolved.relative());
    } else {
        assert_eq!(stripped, resolved.as_str());
    }

    // Never panics.
    let _ = base.to_relative(r);
});
