//! Distinct-URL counting scenarios, flat and grouped by top-level domain.

use std::collections::BTreeMap;

use urlcount::*;

fn tld_map(entries: &[(&str, usize)]) -> BTreeMap<String, usize> {
    entries.iter().map(|(tld, count)| (tld.to_string(), *count)).collect()
}

#[test]
fn test_count_unique_scenarios() {
    let test_cases: Vec<(&str, usize, Vec<&str>)> = vec![
        (
            "query params are sorted",
            1,
            vec!["https://example.com?a=1&b=2", "https://example.com?b=2&a=1", "https://example.com?A=1&B=2"],
        ),
        ("empty list", 0, vec![]),
        (
            "same domain, http vs https",
            2,
            vec![
                "https://www.google.com",
                "https://google.com",
                "https://www.google.com?",
                "hTTps://google.com",
                "http://google.com",
                "http://google.com/",
            ],
        ),
        (
            "different domains",
            3,
            vec!["https://google.com", "https://google.org", "https://google.net"],
        ),
        (
            "duplicates",
            1,
            vec!["https://google.com", "https://google.com", "https://google.com"],
        ),
        (
            "invalid urls are dropped",
            2,
            vec!["https://example.com", "invalid-url", "ftp://ftp.example.com"],
        ),
        (
            "fragments are ignored",
            1,
            vec!["https://example.com#section1", "https://example.com#section2"],
        ),
        (
            "non-default port",
            2,
            vec!["https://example.com:8080", "https://example.com"],
        ),
        (
            "default ports",
            2,
            vec!["http://example.com:80", "http://example.com", "https://example.com:443", "https://example.com"],
        ),
        (
            "punycode labels",
            2,
            vec!["https://xn--bcher-kva.ch", "https://example.com"],
        ),
        (
            "query then fragment, fragment containing query is invalid",
            1,
            vec!["https://example.com?a=1#section1", "https://example.com#section1?a=1"],
        ),
        (
            "default port on the wrong scheme",
            4,
            vec!["http://example.com:443", "http://example.com", "https://example.com:80", "https://example.com"],
        ),
        (
            "same domain with path",
            2,
            vec![
                "https://www.google.com",
                "https://google.com",
                "https://google.com#fragment",
                "https://www.google.com?",
                "https://www.google.com/1",
                "https://google.com/1",
            ],
        ),
        (
            "percent encoding",
            2,
            vec![
                "https://foo.bar/baz*",
                "https://foo.bar/baz%2A",
                "https://foo.bar/baz%2a",
                "https://example.com/encoded%20path",
            ],
        ),
        (
            "dot segments",
            2,
            vec![
                "https://example.com/foo/./bar/baz/../qux",
                "https://example.com/foo/bar/qux",
                "https://example.com/foo/./bar/baz/../../qux",
                "https://example.com/foo/qux",
            ],
        ),
        (
            "reserved characters",
            1,
            vec!["https://example.com?a=%20&b=%21", "https://example.com?a=%2520&b=%21"],
        ),
        (
            "nested encodings",
            1,
            vec!["https://example.com/encoded%20path", "https://example.com/encoded%2520path"],
        ),
        (
            "trailing slash",
            1,
            vec!["https://example.com/foo/bar", "https://example.com/foo/bar/"],
        ),
        (
            "reserved triplet right after a stray percent",
            1,
            vec!["https://a.com/x%%2a", "https://a.com/x%*"],
        ),
        (
            "encoded dollar in query",
            1,
            vec!["https://example.com?a=1&b=%24", "https://example.com?a=1&b=$"],
        ),
    ];

    for (name, expected, urls) in test_cases {
        assert_eq!(count_unique_urls(&urls), expected, "scenario: {}", name);
    }
}

#[test]
fn test_count_is_order_independent() {
    let mut urls = vec![
        "https://example.com/foo/./bar",
        "https://example.com/foo/bar/",
        "http://example.com:80",
        "invalid-url",
        "https://example.com?b=2&a=1",
        "https://example.com?a=1&b=2",
        "https://other.org",
    ];
    let expected = count_unique_urls(&urls);
    assert_eq!(expected, 4);

    urls.reverse();
    assert_eq!(count_unique_urls(&urls), expected);

    urls.rotate_left(3);
    assert_eq!(count_unique_urls(&urls), expected);
}

#[test]
fn test_count_unique_per_tld_scenarios() {
    let test_cases: Vec<(&str, Vec<&str>, BTreeMap<String, usize>)> = vec![
        (
            "subdomains group together",
            vec![
                "https://example.com?a=1&b=2",
                "https://example.com?b=2&a=1",
                "https://www.example.com",
                "https://sub.example.com",
                "https://foo.com?a=1&b=2&c=3",
                "https://foo.com?b=2&a=1&c=3",
                "https://foo.com",
            ],
            tld_map(&[("example.com", 3), ("foo.com", 2)]),
        ),
        (
            "different tlds",
            vec!["https://example.com", "https://example.org"],
            tld_map(&[("example.com", 1), ("example.org", 1)]),
        ),
        (
            "mixed case",
            vec!["https://Example.com", "HTTPS://example.COM"],
            tld_map(&[("example.com", 1)]),
        ),
        ("empty list", vec![], tld_map(&[])),
        (
            "different ports",
            vec!["https://example.com:8080", "https://example.com:8888"],
            tld_map(&[("example.com", 2)]),
        ),
        (
            "reserved characters",
            vec!["https://example.com?a=%20&b=%21", "https://example.com?a=%2520&b=%21"],
            tld_map(&[("example.com", 1)]),
        ),
        (
            "encoded path",
            vec!["https://example.com/encoded%20path", "https://example.com/encoded%2520path"],
            tld_map(&[("example.com", 1)]),
        ),
        (
            "subdomains of different tlds",
            vec!["https://sub1.example.com", "https://sub2.example.org"],
            tld_map(&[("example.com", 1), ("example.org", 1)]),
        ),
        (
            "subdomain and apex",
            vec!["https://example.com", "https://subdomain.example.com"],
            tld_map(&[("example.com", 2)]),
        ),
        (
            "empty and invalid entries are skipped",
            vec!["", "invalid-url", "https://example.com", "https://example.c"],
            tld_map(&[("example.com", 1)]),
        ),
    ];

    for (name, urls, expected) in test_cases {
        assert_eq!(count_unique_urls_per_tld(&urls), expected, "scenario: {}", name);
    }
}

#[test]
fn test_per_tld_counts_sum_to_flat_count_across_tlds() {
    let urls = vec![
        "https://a.example.com/x",
        "https://b.example.com/x",
        "https://example.org?q=1",
        "https://www.example.org?q=1",
        "http://example.net:80/",
    ];

    let per_tld = count_unique_urls_per_tld(&urls);
    let total: usize = per_tld.values().sum();
    assert_eq!(total, count_unique_urls(&urls));
    assert_eq!(per_tld.len(), 3);
}
