//! Property tests for pattern compilation and matching.

use hash_router::*;
use proptest::prelude::*;

fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z0-9]{1,6}",
        "[a-z]{1,4}".prop_map(|name| format!(":{}", name)),
        Just("*".to_string()),
    ]
}

fn pattern() -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 0..5).prop_map(|segments| format!("/{}", segments.join("/")))
}

fn path() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z0-9*]{1,6}", 0..7).prop_map(|segments| format!("/{}", segments.join("/")))
}

proptest! {
    #[test]
    fn matching_is_deterministic(pat in pattern(), p in path()) {
        let matcher = SegmentMatcher::new();
        let location = Location::new(&p);
        let first = matcher.match_route(Some(pat.as_str()), &location);
        let second = matcher.match_route(Some(pat.as_str()), &location);
        let uncached = match_compiled(Some(&CompiledPattern::compile(&pat)), &location);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, &uncached);
    }

    #[test]
    fn compiling_twice_is_structurally_equal(pat in pattern()) {
        prop_assert_eq!(CompiledPattern::compile(&pat), CompiledPattern::compile(&pat));
    }

    #[test]
    fn wildcard_only_ever_last(pat in pattern()) {
        let compiled = CompiledPattern::compile(&pat);
        let segments = compiled.segments();
        let wildcards = segments.iter().filter(|s| **s == Segment::Wildcard).count();
        prop_assert!(wildcards <= 1);
        if wildcards == 1 {
            prop_assert_eq!(segments.last(), Some(&Segment::Wildcard));
        }
    }

    #[test]
    fn absent_pattern_always_matches(p in path()) {
        let result = SegmentMatcher::new().match_route(None, &Location::new(&p));
        prop_assert_eq!(result, MatchResult::matched());
    }

    #[test]
    fn captures_come_from_the_path(pat in pattern(), p in path()) {
        let location = Location::new(&p);
        let compiled = CompiledPattern::compile(&pat);
        if let MatchResult::Matched(params) = match_compiled(Some(&compiled), &location) {
            let segments: Vec<&str> = split_segments(location.as_str()).collect();
            for name in compiled.param_names() {
                let value = params.get(name).unwrap_or_default();
                prop_assert!(segments.contains(&value));
            }
        }
    }
}
