use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_intern_and_resolve() {
    let interner = KeywordInterner::new();

    let hello = interner.keyword("hello");
    let world = interner.keyword("world");
    let hello2 = interner.keyword("hello");

    assert_eq!(hello, hello2);
    assert_ne!(hello, world);

    assert_eq!(interner.resolve(hello), "HELLO");
    assert_eq!(interner.resolve(world), "WORLD");
}

#[test]
fn test_case_insensitive_identity() {
    let interner = KeywordInterner::new();

    let lower = interner.keyword("foo");
    let upper = interner.keyword("FOO");
    let mixed = interner.keyword("fOo");

    assert_eq!(lower, upper);
    assert_eq!(lower, mixed);
    assert_eq!(interner.len(), 1);
}

#[test]
fn test_whitespace_is_significant() {
    let interner = KeywordInterner::new();

    let plain = interner.keyword("foo");
    let trailing = interner.keyword("foo ");
    let leading = interner.keyword(" foo");

    assert_ne!(plain, trailing);
    assert_ne!(plain, leading);
    assert_eq!(interner.resolve(trailing), "FOO ");
}

#[test]
fn test_len_and_is_empty() {
    let interner = KeywordInterner::new();
    assert!(interner.is_empty());

    interner.keyword("a");
    interner.keyword("A");
    interner.keyword("b");
    assert_eq!(interner.len(), 2);
    assert!(!interner.is_empty());
}

#[test]
fn test_try_keyword_matches_keyword() {
    let interner = KeywordInterner::new();
    let a = interner.keyword("same");
    let b = interner.try_keyword("Same");
    assert_eq!(b, Ok(a));
}

#[test]
fn test_shared_handle_converges() {
    let interner = SharedKeywords::new();
    let other = interner.clone();

    let a = interner.keyword("shared");
    let b = other.keyword("SHARED");

    assert_eq!(a, b);
    assert_eq!(interner.len(), 1);
}

#[test]
fn test_concurrent_interning_converges() {
    let interner = SharedKeywords::new();

    let keywords: Vec<Keyword> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let interner = interner.clone();
                s.spawn(move || interner.keyword("contended"))
            })
            .collect();
        handles
            .into_iter()
            .map(|h| match h.join() {
                Ok(kw) => kw,
                Err(e) => std::panic::resume_unwind(e),
            })
            .collect()
    });

    let first = keywords[0];
    assert!(keywords.iter().all(|&kw| kw == first));
    assert_eq!(interner.resolve(first), "CONTENDED");
    assert_eq!(interner.len(), 1);
}

#[test]
fn test_global_table_is_idempotent() {
    let a = keyword("global-entry");
    let b = keyword("GLOBAL-ENTRY");
    assert_eq!(a, b);
    assert_eq!(global().resolve(a), "GLOBAL-ENTRY");
}

#[test]
fn test_keyword_raw_roundtrip() {
    let kw = Keyword::from_raw(42);
    assert_eq!(kw.raw(), 42);
}

#[test]
fn test_keyword_hash() {
    use std::collections::HashSet;
    let mut set = HashSet::new();
    set.insert(Keyword::from_raw(1));
    set.insert(Keyword::from_raw(1)); // duplicate
    set.insert(Keyword::from_raw(2));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_keyword_ord() {
    assert!(Keyword::from_raw(1) < Keyword::from_raw(2));
}

#[test]
fn test_overflow_error_message() {
    let err = KeywordOverflow { count: 5 };
    assert!(err.to_string().contains("5 entries"));
}
