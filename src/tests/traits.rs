use crate::{Dictionary, Vector};

#[test]
fn dictionary_default_is_empty() {
    let d: Dictionary<i32, i32> = Dictionary::default();
    assert!(d.is_empty());
}

#[test]
fn dictionary_debug_format() {
    let d = Dictionary::empty().assoc(1, 2);
    let dbg = format!("{d:?}");
    assert!(dbg.contains("Dictionary"));
    assert!(dbg.contains("size"));
}

#[test]
fn dictionary_display_empty_is_parens() {
    let d: Dictionary<i32, i32> = Dictionary::empty();
    assert_eq!(d.to_string(), "()");
}

/// Traversal order is unspecified (it follows hash-digit routing, not
/// insertion order), so only the bracket shape and the presence of every
/// `k: v` pair are checked, not one fixed rendering.
#[test]
fn dictionary_display_from_pairs() {
    let d = Dictionary::from_pairs([1, 2, 3], [1, 2, 3]);
    let rendered = d.to_string();
    assert!(rendered.starts_with('{') && rendered.ends_with('}'));
    for pair in ["1: 1", "2: 2", "3: 3"] {
        assert!(rendered.contains(pair), "missing `{pair}` in {rendered:?}");
    }
}

#[test]
fn dictionary_from_iterator() {
    let d: Dictionary<i32, i32> = vec![(1, 10), (2, 20), (3, 30)].into_iter().collect();
    assert_eq!(d.size(), 3);
    assert_eq!(d.get(&1), Some(&10));
}

#[test]
fn dictionary_extend_trait() {
    let mut d = Dictionary::empty().assoc(1, 10);
    d.extend(vec![(2, 20), (3, 30)]);
    assert_eq!(d.size(), 3);
}

#[test]
fn dictionary_into_iter_over_reference() {
    let d = Dictionary::empty().assoc("a", 1).assoc("b", 2);
    let mut pairs: Vec<(&&str, &i32)> = (&d).into_iter().collect();
    pairs.sort();
    assert_eq!(pairs, vec![(&"a", &1), (&"b", &2)]);
}

#[test]
fn vector_default_is_empty() {
    let v: Vector<i32> = Vector::default();
    assert!(v.is_empty());
}

#[test]
fn vector_debug_format() {
    let v = Vector::from_seq([1, 2, 3]);
    let dbg = format!("{v:?}");
    assert_eq!(dbg, "[1, 2, 3]");
}

#[test]
fn vector_from_iterator() {
    let v: Vector<i32> = vec![1, 2, 3].into_iter().collect();
    assert_eq!(v.length(), 3);
    assert_eq!(*v.get(1).unwrap(), 2);
}

#[test]
fn vector_extend_trait() {
    let mut v = Vector::from_seq([1, 2]);
    v.extend([3, 4]);
    assert_eq!(v.length(), 4);
    assert_eq!(*v.get(3).unwrap(), 4);
}

#[test]
fn vector_into_iter_over_reference() {
    let v = Vector::from_seq([10, 20, 30]);
    let collected: Vec<&i32> = (&v).into_iter().collect();
    assert_eq!(collected, vec![&10, &20, &30]);
}
