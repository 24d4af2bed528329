//! Integration tests for path compilation.

use pathlite::jsonpath::{compile, compile_bracket, find_matching_close, AccessorToken, JsonPath};

use AccessorToken::*;

fn keys(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

/// Compiles the bracket that opens at position 1, as the driver would.
fn bracket(path: &str) -> AccessorToken {
    let close = find_matching_close(path, 1).unwrap();
    compile_bracket(path, 1, close).unwrap()
}

#[test]
fn test_compile_mixed_segments() {
    assert_eq!(
        compile("$[2]..['name','id']").unwrap(),
        vec![ArrayAccessor(2), DeepScanObjectAccessor(keys(&["name", "id"]))]
    );
    assert_eq!(
        compile("$[2]..['name','id'][2]").unwrap(),
        vec![
            ArrayAccessor(2),
            DeepScanObjectAccessor(keys(&["name", "id"])),
            ArrayAccessor(2),
        ]
    );
}

#[test]
fn test_compile_deep_scan_keys() {
    assert_eq!(
        compile("$..['name']").unwrap(),
        vec![DeepScanObjectAccessor(keys(&["name"]))]
    );
    assert_eq!(
        compile("$..['name','age']").unwrap(),
        vec![DeepScanObjectAccessor(keys(&["name", "age"]))]
    );
}

#[test]
fn test_compile_deep_scan_indices() {
    assert_eq!(compile("$..[0]").unwrap(), vec![DeepScanArrayAccessor(vec![0])]);
    assert_eq!(
        compile("$..[0,1,6]").unwrap(),
        vec![DeepScanArrayAccessor(vec![0, 1, 6])]
    );
    assert_eq!(
        compile("$..[0,-1,-6]").unwrap(),
        vec![DeepScanArrayAccessor(vec![0, -1, -6])]
    );
    assert_eq!(compile("$..[-2]").unwrap(), vec![DeepScanArrayAccessor(vec![-2])]);
}

#[test]
fn test_compile_deep_scan_slices() {
    assert_eq!(
        compile("$..[0:3]").unwrap(),
        vec![DeepScanArrayAccessor(vec![0, 1, 2])]
    );
    assert_eq!(
        compile("$..[:3]").unwrap(),
        vec![DeepScanArrayAccessor(vec![0, 1, 2])]
    );
    assert_eq!(
        compile("$..[1:]").unwrap(),
        vec![DeepScanLengthBasedArrayAccessor(1, None, 0)]
    );
    assert_eq!(
        compile("$..[:-2]").unwrap(),
        vec![DeepScanLengthBasedArrayAccessor(0, None, -2)]
    );
    assert_eq!(
        compile("$..[-5:]").unwrap(),
        vec![DeepScanLengthBasedArrayAccessor(-5, None, 0)]
    );
    assert_eq!(
        compile("$..[0:-2]").unwrap(),
        vec![DeepScanLengthBasedArrayAccessor(0, None, -2)]
    );
    assert_eq!(
        compile("$..[-5:6]").unwrap(),
        vec![DeepScanLengthBasedArrayAccessor(-5, Some(6), 0)]
    );
    assert_eq!(
        compile("$..[-5:-2]").unwrap(),
        vec![DeepScanLengthBasedArrayAccessor(-5, None, -2)]
    );
}

#[test]
fn test_find_matching_close() {
    assert_eq!(find_matching_close("[]", 0).unwrap(), 1);
    assert_eq!(find_matching_close("[5]", 0).unwrap(), 2);
    assert_eq!(find_matching_close("['5']", 0).unwrap(), 4);
    assert_eq!(find_matching_close("[0,1,2]", 0).unwrap(), 6);
    assert_eq!(find_matching_close("['a[']", 0).unwrap(), 5);
    assert_eq!(find_matching_close("['a]']", 0).unwrap(), 5);
    assert_eq!(find_matching_close("['a\\'b']", 0).unwrap(), 7);
    assert_eq!(find_matching_close("['a\\'\\']']", 0).unwrap(), 9);
    assert_eq!(find_matching_close("['4\\a']", 0).unwrap(), 6);
}

#[test]
fn test_compile_bracket() {
    assert_eq!(bracket("$[0]"), ArrayAccessor(0));
    assert_eq!(bracket("$[-4]"), ArrayAccessor(-4));
    assert_eq!(bracket("$[:3]"), MultiArrayAccessor(vec![0, 1, 2]));
    assert_eq!(bracket("$[3:]"), ArrayLengthBasedRangeAccessor(3, None, 0));
    assert_eq!(bracket("$[1:4]"), MultiArrayAccessor(vec![1, 2, 3]));
    assert_eq!(bracket("$[1,2,3]"), MultiArrayAccessor(vec![1, 2, 3]));
    assert_eq!(bracket("$[1,-2,3]"), MultiArrayAccessor(vec![1, -2, 3]));
    assert_eq!(bracket("$['name']"), ObjectAccessor("name".to_string()));
    assert_eq!(bracket("$['4']"), ObjectAccessor("4".to_string()));
    assert_eq!(
        bracket("$['name','age']"),
        MultiObjectAccessor(keys(&["name", "age"]))
    );
    assert_eq!(
        bracket("$['name','age',4]"),
        MultiObjectAccessor(keys(&["name", "age", "4"]))
    );
    assert_eq!(bracket("$['name:age']"), ObjectAccessor("name:age".to_string()));
}

#[test]
fn test_compile_bracket_negative_ranges() {
    assert_eq!(bracket("$[:-1]"), ArrayLengthBasedRangeAccessor(0, None, -1));
    assert_eq!(bracket("$[:-3]"), ArrayLengthBasedRangeAccessor(0, None, -3));
    assert_eq!(bracket("$[-1:]"), ArrayLengthBasedRangeAccessor(-1, None, 0));
    assert_eq!(bracket("$[-5:]"), ArrayLengthBasedRangeAccessor(-5, None, 0));
    assert_eq!(bracket("$[-5:-1]"), ArrayLengthBasedRangeAccessor(-5, None, -1));
    assert_eq!(bracket("$[5:-1]"), ArrayLengthBasedRangeAccessor(5, None, -1));
    assert_eq!(bracket("$[-5:4]"), ArrayLengthBasedRangeAccessor(-5, Some(4), 0));
}

#[test]
fn test_whitespace_padding_is_ignored() {
    assert_eq!(compile("$[  0  ]").unwrap(), compile("$[0]").unwrap());
    assert_eq!(compile("$[0,  3]").unwrap(), compile("$[0,3]").unwrap());
    assert_eq!(bracket("$[0,  3]"), MultiArrayAccessor(vec![0, 3]));
}

#[test]
fn test_compile_is_deterministic() {
    let expr = "$[2]..['name','id'][1:][-5:4]..[:-2]";
    assert_eq!(compile(expr).unwrap(), compile(expr).unwrap());
}

#[test]
fn test_root_only_path() {
    assert_eq!(compile("$").unwrap(), vec![]);
    assert!(JsonPath::parse("$").unwrap().is_root());
}

#[test]
fn test_display_round_trips_through_compile() {
    let path = JsonPath::parse("$[2]..['it\\'s','id'][1:4][-3:]").unwrap();
    assert_eq!(JsonPath::parse(&path.to_string()).unwrap(), path);
}

#[test]
fn test_rejected_expressions() {
    let rejected = [
        "[0]", "", "$[]", "$['']", "$[", "$[[]", "$.", "$['\\", "$..", "$..x", "$[0]x",
    ];
    for expr in rejected {
        let err = compile(expr).expect_err(expr);
        assert!(
            err.to_string().starts_with("Invalid path expression"),
            "{}: {}",
            expr,
            err
        );
    }
}

#[test]
fn test_rejected_brackets() {
    assert!(compile_bracket("$[]", 1, 2).is_err());
    assert!(find_matching_close("$['4\\", 1).is_err());
}

#[test]
fn test_matcher_failures_fail_compile() {
    for expr in ["$['abc", "$['a\\", "$[1", "$['a]"] {
        assert!(find_matching_close(expr, 1).is_err(), "{}", expr);
        assert!(compile(expr).is_err(), "{}", expr);
    }
}

#[test]
fn test_huge_slice_compiles_to_range() {
    assert_eq!(
        compile("$[0:9223372036854775807]").unwrap(),
        vec![ArrayLengthBasedRangeAccessor(0, Some(isize::MAX), 0)]
    );
    assert_eq!(
        compile("$..[5:1099511627776]").unwrap(),
        vec![DeepScanLengthBasedArrayAccessor(5, Some(1_099_511_627_776), 0)]
    );
}
