use crate::Vector;

/// N = 31 fits in a single leaf (depth 1).
#[test]
fn scale_fits_single_leaf() {
    let v = Vector::from_seq(0..31);
    assert_eq!(v.length(), 31);
    for i in 0..31 {
        assert_eq!(*v.get(i).unwrap(), i as i32);
    }
}

/// N = 1,031 forces the trie past a single branch level.
#[test]
fn scale_mid_size() {
    let v = Vector::from_seq(0..1031);
    assert_eq!(v.length(), 1031);
    for i in [0, 1, 500, 1000, 1030] {
        assert_eq!(*v.get(i).unwrap(), i as i32);
    }
}

/// N = 32,767 forces depth 3; every element round-trips.
#[test]
fn scale_depth_three() {
    let v = Vector::from_seq(0i32..32767);
    assert_eq!(v.length(), 32767);
    for i in (0..32767).step_by(997) {
        assert_eq!(*v.get(i).unwrap(), i as i32);
    }
    assert_eq!(*v.get(32766).unwrap(), 32766);
}

#[test]
fn remove_last_sweep_from_depth_three() {
    let mut v = Vector::from_seq(0i32..5000);
    for expected_len in (0..5000).rev() {
        v = v.remove_last().unwrap();
        assert_eq!(v.length(), expected_len as usize);
    }
    assert!(v.is_empty());
    assert!(v.remove_last().is_err());
}
