use fixarray::{array, Array, ErrorKind};

#[test]
fn size() {
    fn check<const N: usize>() {
        let a = Array::<u8, N>::default();
        assert_eq!(a.len(), N);
        assert_eq!(Array::<u8, N>::size(), N);
        assert_eq!(Array::<u8, N>::SIZE, N);
    }
    check::<1>();
    check::<7>();
    check::<64>();
    assert!(Array::<u8, 0>::new([]).is_empty());
}

#[test]
fn front_back() {
    let mut a: Array<char, 3> = array!['a', 'b', 'c'];
    assert_eq!((*a.front(), *a.back()), ('a', 'c'));
    *a.front_mut() = 'x';
    *a.back_mut() = 'z';
    assert_eq!(a.into_inner(), ['x', 'b', 'z']);

    let single: Array<i32, 1> = array![5];
    assert!(core::ptr::eq(single.front(), single.back()));
}

#[test]
fn indexing() {
    let mut a = Array::<i32, 4>::from_fn(|i| i as i32);
    a[2] *= 10;
    assert_eq!(a[2], 20);
    assert_eq!(&a[1..3], [1, 20]);
    assert_eq!(a.get(4), None);
    assert_eq!(a.try_get(4).unwrap_err().kind, ErrorKind::OutOfBounds);
    *a.try_get_mut(0).unwrap() = -1;
    assert_eq!(unsafe { *a.get_unchecked(0) }, -1);
    unsafe { *a.get_unchecked_mut(3) = 7 };
    assert_eq!(a.into_inner(), [-1, 1, 20, 7]);
}

#[test]
#[should_panic]
fn checked_index() {
    let a = Array::new([0u8; 3]);
    let i = a.len() + 1;
    let _x = a[i];
}

#[test]
fn iteration() {
    let mut a = Array::new([3, 1, 2]);
    assert_eq!(a.iter().count(), 3);
    for x in &mut a {
        *x *= 2;
    }
    a.as_mut_slice().sort();
    assert_eq!((&a).into_iter().copied().collect::<Vec<_>>(), [2, 4, 6]);
    assert_eq!(a.as_ref(), [2, 4, 6]);
    assert_eq!(a.into_iter().rev().collect::<Vec<_>>(), [6, 4, 2]);
}
