use lenient_uri::*;

#[test]
fn parse_absolute() {
    let u = UriValue::parse("file:///etc/hosts");
    assert_eq!(u.as_str(), "file:///etc/hosts");
    assert_eq!(u.protocol(), "file");
    assert_eq!(u.raw_authority(), "");
    assert_eq!(u.user_info(), "");
    assert_eq!(u.host(), "");
    assert_eq!(u.port(), "");
    assert!(!u.authority().unwrap().is_synthetic());
    assert_eq!(u.path(), "/etc/hosts");
    assert!(u.path().segments().eq(["etc", "hosts"]));
    assert_eq!(u.directory(), "/etc/hosts");
    assert_eq!(u.file(), "");
    assert_eq!(u.query(), "");
    assert_eq!(u.anchor(), "");

    let u = UriValue::parse("ftp://user:pw@files.example.com:2121/pub/");
    assert_eq!(u.protocol(), "ftp");
    assert_eq!(u.raw_authority(), "user:pw@files.example.com:2121");
    assert_eq!(u.user_info(), "user:pw");
    assert_eq!(u.user(), "user");
    assert_eq!(u.password(), "pw");
    assert_eq!(u.host(), "files.example.com");
    assert_eq!(u.port(), "2121");
    assert_eq!(u.directory(), "/pub/");
    assert_eq!(u.file(), "");
    assert_eq!(u.as_str(), "ftp://user:pw@files.example.com:2121/pub/");

    let u = UriValue::parse("http://www.ietf.org/rfc/rfc2396.txt?x=1&y=2#sec-3");
    assert_eq!(u.host(), "www.ietf.org");
    assert_eq!(u.path(), "/rfc/rfc2396.txt");
    assert_eq!(u.directory(), "/rfc/");
    assert_eq!(u.file(), "rfc2396.txt");
    assert_eq!(u.query(), "x=1&y=2");
    assert_eq!(u.anchor(), "sec-3");
    assert_eq!(u.relative(), "/rfc/rfc2396.txt?x=1&y=2#sec-3");

    let u = UriValue::parse("http://example.com?q#a");
    assert_eq!(u.path(), "");
    assert_eq!(u.directory(), "");
    assert_eq!(u.query(), "q");
    assert_eq!(u.anchor(), "a");
    assert_eq!(u.as_str(), "http://example.com?q#a");
}

#[test]
fn parse_trims_whitespace() {
    let u = UriValue::parse("  http://example.com/a \n");
    assert_eq!(u.as_str(), "http://example.com/a");
    assert_eq!(u.directory(), "/a");

    let u = UriValue::parse("\t#top ");
    assert!(u.is_opaque());
    assert_eq!(u.as_str(), "#top");
}

#[test]
fn parse_opaque() {
    for s in [
        "mailto:someone@example.com",
        "skype:someone?call",
        "tel:+1-555-0100",
        "javascript:void(0)",
        "#",
        "#section",
        "tel:\u{1f600}",
    ] {
        let u = UriValue::parse(s);
        assert!(u.is_opaque(), "{s}");
        assert_eq!(u.as_str(), s);
        assert_eq!(u.get_uri(true), s);
        assert_eq!(u.protocol(), "");
        assert_eq!(u.host(), "");
        assert_eq!(u.path(), "");
        assert_eq!(u.anchor(), "");
        assert_eq!(u.relative(), "");
        assert!(u.authority().is_none());
    }

    // Not opaque: a slash within the two characters after the colon.
    assert!(!UriValue::parse("http:/x").is_opaque());
    assert!(!UriValue::parse("x:/").is_opaque());
    assert!(!UriValue::parse("tel:\u{e9}").is_opaque());
}

#[test]
fn parse_protocol_relative() {
    let u = UriValue::parse("//cdn.example.com/lib.js");
    assert_eq!(u.protocol(), "");
    assert_eq!(u.host(), "cdn.example.com");
    assert_eq!(u.directory(), "/");
    assert_eq!(u.file(), "lib.js");
    assert_eq!(u.as_str(), "//cdn.example.com/lib.js");
}

#[test]
fn parse_hostless() {
    let u = UriValue::parse("/a/b.html?x");
    assert_eq!(u.protocol(), "http");
    assert_eq!(u.host(), "");
    assert!(u.authority().unwrap().is_synthetic());
    assert_eq!(u.raw_authority(), "");
    assert_eq!(u.path(), "/a/b.html");
    assert_eq!(u.as_str(), "http:///a/b.html?x");
    assert_eq!(u.get_uri(true), "/a/b.html?x");

    let u = UriValue::parse("page.html#top");
    assert!(u.authority().unwrap().is_synthetic());
    assert_eq!(u.path(), "/page.html");
    assert_eq!(u.anchor(), "top");
    assert_eq!(u.as_str(), "http:///page.html#top");

    let u = UriValue::parse("../../up/./there/");
    assert_eq!(u.path(), "/up/there/");
}

#[test]
fn parse_at_signs() {
    let u = UriValue::parse("http://host/site/@@view?a@b");
    assert_eq!(u.user_info(), "");
    assert_eq!(u.host(), "host");
    assert_eq!(u.path(), "/site/@@view");
    assert_eq!(u.query(), "a@b");
    assert_eq!(u.as_str(), "http://host/site/@@view?a@b");

    // User info never reaches past the authority.
    let u = UriValue::parse("http://a?b@host/p");
    assert_eq!(u.user_info(), "");
    assert_eq!(u.host(), "a");
    assert_eq!(u.query(), "b@host/p");

    let u = UriValue::parse("http://a#b@host/p");
    assert_eq!(u.host(), "a");
    assert_eq!(u.anchor(), "b@host/p");

    let u = UriValue::parse("http://@host/");
    assert_eq!(u.user_info(), "");
    assert_eq!(u.host(), "host");
}

#[track_caller]
fn check_split(s: &str, directory: &str, file: &str) {
    let u = UriValue::parse(s);
    assert_eq!(u.directory(), directory);
    assert_eq!(u.file(), file);
}

#[test]
fn parse_loose_file() {
    check_split("http://h/a/b.html", "/a/", "b.html");
    check_split("http://h/a/b", "/a/b", "");
    check_split("http://h/a/b.", "/a/b.", "");
    check_split("http://h/a.b/c", "/a.b/c", "");
    check_split("http://h/index.php", "/", "index.php");
    check_split("http://h/.hidden", "/.hidden", "");
    check_split("http://h/a/.htaccess", "/a/", ".htaccess");
}

#[test]
fn round_trip() {
    for s in [
        "http://example.com/a/b.html?x=1#y",
        "https://u:p@h:8443/",
        "ftp://h/dir/",
        "http://h",
        "//h/p",
        "file:///C:/docs/readme.txt",
        "custom-scheme://h/%20x",
    ] {
        let u = UriValue::parse(s);
        assert_eq!(u.as_str(), s);
        assert_eq!(UriValue::parse(u.as_str()).as_str(), u.as_str());
    }
}

#[test]
fn set_path() {
    let mut u = UriValue::parse("http://example.com/a/b.html?q#f");
    assert_eq!(u.as_str(), "http://example.com/a/b.html?q#f");

    u.set_path("/x/y.txt");
    assert_eq!(u.path(), "/x/y.txt");
    assert_eq!(u.directory(), "/x/");
    assert_eq!(u.file(), "y.txt");
    assert_eq!(u.as_str(), "http://example.com/x/y.txt?q#f");

    // Same split as parsing: no extension, no file.
    u.set_path("/x/y");
    assert_eq!(u.directory(), "/x/y");
    assert_eq!(u.file(), "");
    assert_eq!(u.as_str(), "http://example.com/x/y?q#f");
    assert_eq!(UriValue::parse(u.as_str()), u);
    assert_eq!(u.to_absolute("z", false), "http://example.com/x/y/z");

    u.set_path("z.txt");
    assert_eq!(u.directory(), "");
    assert_eq!(u.file(), "z.txt");

    let mut u = UriValue::parse("mailto:a@b.c");
    u.set_path("/x/y.html");
    assert!(!u.is_opaque());
    assert_eq!(u.protocol(), "");
    assert_eq!(u.file(), "y.html");
    assert_eq!(u.relative(), "/x/y.html");
    assert_eq!(UriValue::parse(u.as_str()), u);
}

#[test]
fn set_path_matches_reparse() {
    for path in ["/x/y", "/x/y.html", "/x/", "/", "/.b", "/a.b", "/a/b.", ""] {
        let mut u = UriValue::parse("https://u@h.com:81/a/b.html?q#f");
        u.set_path(path);
        assert_eq!(UriValue::parse(u.as_str()), u, "{path}");
    }
}

#[test]
fn traits() {
    let u: UriValue = "http://h/a".parse().unwrap();
    assert_eq!(u, UriValue::from("http://h/a"));
    assert_eq!(u.to_string(), "http://h/a");
    assert_eq!(AsRef::<str>::as_ref(&u), "http://h/a");
    assert_ne!(u, UriValue::parse("http://h/b"));

    assert_eq!(
        format!("{:?}", UriValue::parse("mailto:x@y")),
        r#"Opaque("mailto:x@y")"#
    );
    assert!(format!("{u:?}").starts_with("UriValue { protocol: \"http\""));

    assert_eq!(UriValue::default().as_str(), "//");

    let a = UriValue::parse("http://h:81/").authority().unwrap().to_string();
    assert_eq!(a, "h:81");
}

#[test]
fn moves_across_threads() {
    fn assert_send<T: Send>() {}
    assert_send::<UriValue>();

    let u = UriValue::parse("http://h/a/b.html");
    let s = std::thread::spawn(move || u.as_str().to_owned()).join().unwrap();
    assert_eq!(s, "http://h/a/b.html");
}
