//! Map tests.

use rawjson::{parse, stringify, ParseError};
use std::collections::{BTreeMap, HashMap};

#[test]
fn test_btree_map() {
    let mut map = BTreeMap::new();
    map.insert(String::from("a"), 1u32);
    map.insert(String::from("b"), 2);
    let text = stringify(&map);
    assert_eq!(text, r#"{"a":1,"b":2}"#);
    assert_eq!(parse::<BTreeMap<String, u32>>(&text).unwrap(), map);
}

#[test]
fn test_hash_map() {
    let mut map = HashMap::new();
    map.insert(String::from("x"), 3.4f64);
    map.insert(String::from("y"), 1.2);
    map.insert(String::from("z"), 8.3);
    let text = stringify(&map);
    assert_eq!(parse::<HashMap<String, f64>>(&text).unwrap(), map);
}

#[test]
fn test_empty_map() {
    let map: BTreeMap<String, bool> = BTreeMap::new();
    assert_eq!(stringify(&map), "{}");
    assert_eq!(parse::<BTreeMap<String, bool>>("{}").unwrap(), map);
}

#[test]
fn test_awkward_keys_and_values() {
    let mut map = BTreeMap::new();
    map.insert(String::from("with:colon"), String::from("a,b"));
    map.insert(String::from("with\"quote"), String::from("c:d"));
    let text = stringify(&map);
    assert_eq!(parse::<BTreeMap<String, String>>(&text).unwrap(), map);
}

#[test]
fn test_nested_values() {
    let mut inner = BTreeMap::new();
    inner.insert(String::from("k"), vec![1u8, 2]);
    let mut map = BTreeMap::new();
    map.insert(String::from("inner"), inner.clone());
    let text = stringify(&map);
    assert_eq!(text, r#"{"inner":{"k":[1,2]}}"#);
    assert_eq!(
        parse::<BTreeMap<String, BTreeMap<String, Vec<u8>>>>(&text).unwrap(),
        map
    );
}

#[test]
fn test_no_trailing_separator() {
    let mut map = BTreeMap::new();
    map.insert(String::from("a"), 1u8);
    map.insert(String::from("b"), 2);
    let text = stringify(&map);
    assert!(!text.contains(",}"));
}

#[test]
fn test_malformed() {
    assert!(matches!(
        parse::<BTreeMap<String, u8>>(""),
        Err(ParseError::UnexpectedEnd)
    ));
    assert!(matches!(
        parse::<BTreeMap<String, u8>>(r#""a":1"#),
        Err(ParseError::UnexpectedToken { .. })
    ));
    assert!(matches!(
        parse::<BTreeMap<String, u8>>(r#"{"a"}"#),
        Err(ParseError::UnexpectedToken { .. })
    ));
    assert!(matches!(
        parse::<BTreeMap<String, u8>>(r#"{"a:1}"#),
        Err(ParseError::UnterminatedString)
    ));
}
