//! Tests for length predicates

#[cfg(test)]
mod tests {
    use hexword::{HexwordError, MatchSpec};

    // Tests each predicate on both sides of its bound
    // Verified by making AtMost strict
    #[test]
    fn test_matches_truth_table() {
        let cases = [
            (MatchSpec::All, [true, true, true]),
            (MatchSpec::Equal(4), [false, true, false]),
            (MatchSpec::AtMost(4), [true, true, false]),
            (MatchSpec::AtLeast(4), [false, true, true]),
        ];

        for (spec, expected) in cases {
            let actual = [3, 4, 5].map(|value| spec.matches(&value));
            assert_eq!(actual, expected, "{spec}");
        }
    }

    // Tests word matching counts characters rather than bytes
    // Verified by using str::len
    #[test]
    fn test_matches_word() {
        assert!(MatchSpec::Equal(4).matches_word("hell"));
        assert!(!MatchSpec::Equal(4).matches_word("hello"));
        assert!(MatchSpec::Equal(3).matches_word("été"));
        assert!(MatchSpec::AtLeast(0).matches_word(""));
    }

    // Tests every accepted textual form
    // Verified by treating a bare number as AtLeast
    #[test]
    fn test_from_str() {
        assert_eq!("all".parse::<MatchSpec<usize>>().unwrap(), MatchSpec::All);
        assert_eq!("ALL".parse::<MatchSpec<usize>>().unwrap(), MatchSpec::All);
        assert_eq!("*".parse::<MatchSpec<usize>>().unwrap(), MatchSpec::All);
        assert_eq!("5".parse::<MatchSpec<usize>>().unwrap(), MatchSpec::Equal(5));
        assert_eq!("=5".parse::<MatchSpec<usize>>().unwrap(), MatchSpec::Equal(5));
        assert_eq!(
            "<= 6".parse::<MatchSpec<usize>>().unwrap(),
            MatchSpec::AtMost(6)
        );
        assert_eq!(
            " >=3 ".parse::<MatchSpec<usize>>().unwrap(),
            MatchSpec::AtLeast(3)
        );
        assert_eq!("=7".parse::<MatchSpec<u8>>().unwrap(), MatchSpec::Equal(7u8));
    }

    // Tests malformed predicates report the length parameter
    // Verified by defaulting to All on parse failure
    #[test]
    fn test_from_str_rejects_garbage() {
        for text in ["", "abc", "<5", "=>5", "-3", ">=x"] {
            let result = text.parse::<MatchSpec<usize>>();
            assert!(
                matches!(
                    result,
                    Err(HexwordError::InvalidParameter {
                        parameter: "length",
                        ..
                    })
                ),
                "{text:?} parsed as {result:?}"
            );
        }
    }

    // Tests display output parses back to the same predicate
    #[test]
    fn test_display() {
        for spec in [
            MatchSpec::All,
            MatchSpec::Equal(2),
            MatchSpec::AtMost(9),
            MatchSpec::AtLeast(1),
        ] {
            assert_eq!(spec.to_string().parse::<MatchSpec<usize>>().unwrap(), spec);
        }
        assert_eq!(MatchSpec::AtMost(9).to_string(), "<=9");
        assert_eq!(MatchSpec::<usize>::default(), MatchSpec::All);
    }
}
