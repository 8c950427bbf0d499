#![no_main]
use lenient_uri::UriValue;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let u1 = UriValue::parse(data);
    if u1.is_opaque() {
        assert_eq!(u1.as_str(), data.trim());
        return;
    }

    let mut buf = String::new();
    buf.push_str(u1.directory());
    buf.push_str(u1.file());
    assert_eq!(buf, u1.path().as_str());
    assert!(u1.as_str().ends_with(&u1.relative()));

    // Serialization settles after one reparse.
    let u2 = UriValue::parse(u1.as_str());
    let u3 = UriValue::parse(u2.as_str());
    assert_eq!(u2.as_str(), u3.as_str());
    assert_eq!(u2.protocol(), u3.protocol());
    assert_eq!(u2.host(), u3.host());
    assert_eq!(u2.path(), u3.path());
});
