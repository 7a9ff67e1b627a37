use crate::Dictionary;

#[test]
fn empty_dictionary() {
    let d: Dictionary<String, i32> = Dictionary::empty();
    assert_eq!(d.size(), 0);
    assert!(d.is_empty());
    assert_eq!(d.get(&"missing".to_string()), None);
}

#[test]
fn assoc_one() {
    let d = Dictionary::empty().assoc("hello", 42);
    assert_eq!(d.size(), 1);
    assert!(!d.is_empty());
    assert_eq!(d.get(&"hello"), Some(&42));
}

#[test]
fn get_missing_key() {
    let d = Dictionary::empty().assoc("a", 1);
    assert_eq!(d.get(&"b"), None);
}

#[test]
fn assoc_multiple() {
    let mut d = Dictionary::empty();
    for i in 0..10 {
        d = d.assoc(i, i * 10);
    }
    assert_eq!(d.size(), 10);
    for i in 0..10 {
        assert_eq!(d.get(&i), Some(&(i * 10)));
    }
}

#[test]
fn overwrite_value_keeps_size() {
    let d = Dictionary::empty().assoc("k", 1).assoc("k", 2);
    assert_eq!(d.size(), 1);
    assert_eq!(d.get(&"k"), Some(&2));
}

#[test]
fn contains_key() {
    let d = Dictionary::empty().assoc(42, "val");
    assert!(d.contains_key(&42));
    assert!(!d.contains_key(&7));
}

#[test]
fn remove_existing() {
    let d = Dictionary::empty().assoc("a", 1).assoc("b", 2);
    let removed = d.remove(&"a");
    assert_eq!(removed.size(), 1);
    assert_eq!(removed.get(&"a"), None);
    assert_eq!(removed.get(&"b"), Some(&2));
}

#[test]
fn remove_missing_key() {
    let d = Dictionary::empty().assoc("a", 1);
    let unchanged = d.remove(&"z");
    assert_eq!(unchanged.size(), 1);
}

#[test]
fn remove_all() {
    let d = Dictionary::empty().assoc(1, 10).assoc(2, 20).assoc(3, 30);
    let empty = d.remove(&1).remove(&2).remove(&3);
    assert!(empty.is_empty());
}

#[test]
fn fingerprint_changes_on_assoc() {
    let d0 = Dictionary::empty();
    let d1 = d0.assoc(1, 1);
    let d2 = d1.assoc(2, 2);
    assert_ne!(d0.fingerprint(), d1.fingerprint());
    assert_ne!(d1.fingerprint(), d2.fingerprint());
}

#[test]
fn fingerprint_changes_on_overwrite() {
    let d1 = Dictionary::empty().assoc("k", 1);
    let d2 = d1.assoc("k", 2);
    assert_ne!(d1.fingerprint(), d2.fingerprint());
}

#[test]
fn fingerprint_restored_after_overwrite_and_revert() {
    let d1 = Dictionary::empty().assoc("k", 1).assoc("other", 9);
    let d2 = d1.assoc("k", 2).assoc("k", 1);
    assert_eq!(d1.fingerprint(), d2.fingerprint());
}

/// From the public contract: build via repeated `assoc`, read each back.
#[test]
fn small_build_sequence() {
    let d = Dictionary::empty()
        .assoc("one", 1)
        .assoc("two", 2)
        .assoc("three", 3)
        .assoc("four", 4);
    assert_eq!(d.get(&"one"), Some(&1));
    assert_eq!(d.get(&"two"), Some(&2));
    assert_eq!(d.get(&"three"), Some(&3));
    assert_eq!(d.get(&"four"), Some(&4));
}

#[test]
fn remove_concrete_scenario() {
    let d = Dictionary::empty().assoc("one", 2).assoc("three", 3).remove(&"one");
    assert_eq!(d.get(&"three"), Some(&3));
    assert_eq!(d.get(&"one"), None);
}

#[test]
fn merge_other_wins_on_collision() {
    let a = Dictionary::empty().assoc("x", 1).assoc("y", 2);
    let b = Dictionary::empty().assoc("y", 20).assoc("z", 30);
    let merged = a.merge(&b);
    assert_eq!(merged.size(), 3);
    assert_eq!(merged.get(&"x"), Some(&1));
    assert_eq!(merged.get(&"y"), Some(&20));
    assert_eq!(merged.get(&"z"), Some(&30));
}

#[test]
fn merge_with_empty() {
    let a = Dictionary::empty().assoc("x", 1);
    let empty: Dictionary<&str, i32> = Dictionary::empty();
    assert_eq!(a.merge(&empty).size(), 1);
    assert_eq!(empty.merge(&a).size(), 1);
}

#[test]
fn from_pairs_stops_at_shorter_input() {
    let d = Dictionary::from_pairs([1, 2, 3], [10, 20]);
    assert_eq!(d.size(), 2);
    assert_eq!(d.get(&1), Some(&10));
    assert_eq!(d.get(&2), Some(&20));
    assert_eq!(d.get(&3), None);
}
