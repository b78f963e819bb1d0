use fixarray::{array, impl_assign, Array, Plain};
use std::rc::Rc;

/// Plain item, transferred as raw bytes.
#[derive(Clone, Copy, Default, Debug, PartialEq, Plain)]
#[repr(C)]
struct Point {
    x: i32,
    y: i32,
}

/// The same content but transferred item by item.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[repr(C)]
struct SlowPoint {
    x: i32,
    y: i32,
}
impl_assign!(SlowPoint);

fn points() -> Array<(i32, i32), 4> {
    Array::from_fn(|i| (i as i32, -(i as i32) * 3))
}

#[test]
fn fill_idempotent() {
    let mut a = Array::<Point, 3>::default();
    let p = Point { x: 1, y: 2 };
    a.fill(&p);
    let once = a;
    a.fill(&p);
    assert_eq!(a, once);
    assert!(a.iter().all(|q| *q == p));
}

#[test]
fn fill_empty() {
    let mut a = Array::<String, 0>::new([]);
    a.fill("x");
    assert!(a.is_empty());
}

#[test]
fn copy_roundtrip() {
    let b = points().map(|(x, y)| Point { x, y });
    let mut a = Array::<Point, 4>::default();
    a.copy(&b);
    assert_eq!(a, b);

    let b = array![String::from("a"), String::from("bc")];
    let mut a = Array::<String, 2>::default();
    a.copy(&b);
    assert_eq!(a, b);
}

#[test]
fn bulk_matches_elementwise() {
    let src = points();

    let mut bulk = Array::<Point, 4>::default();
    bulk.copy(&src.map(|(x, y)| Point { x, y }));
    let mut each = Array::<SlowPoint, 4>::default();
    each.copy(&src.map(|(x, y)| SlowPoint { x, y }));

    let each_bits = each.map(|p| Point { x: p.x, y: p.y });
    assert_eq!(bulk.as_bytes(), each_bits.as_bytes());

    let mut bulk_moved = Array::<Point, 4>::default();
    bulk_moved.move_from(bulk);
    let mut each_moved = Array::<SlowPoint, 4>::default();
    each_moved.move_from(each);
    assert_eq!(bulk_moved.as_bytes(), each_moved.map(|p| Point { x: p.x, y: p.y }).as_bytes());
}

#[derive(Clone, Default)]
struct Shared(Rc<i32>);
impl_assign!(Shared);

#[test]
fn move_transfers_ownership() {
    let rc = Rc::new(0);
    let src = Array::<Shared, 3>::from_fn(|_| Shared(rc.clone()));
    let mut dst = Array::<Shared, 3>::default();
    dst.move_from(src);
    assert_eq!(Rc::strong_count(&rc), 4);
    drop(dst);
    assert_eq!(Rc::strong_count(&rc), 1);
}

#[test]
fn swap_self_inverse() {
    let (a0, b0): (Array<i64, 3>, Array<i64, 3>) = (array![1, 2, 3], array![4, 5, 6]);
    let (mut a, mut b) = (a0, b0);
    a.swap(&mut b);
    assert_eq!((a, b), (b0, a0));
    a.swap(&mut b);
    assert_eq!((a, b), (a0, b0));
}

#[test]
fn same_size_plain_types() {
    let src: Array<i32, 2> = array![1, -1];
    let mut dst = Array::<u32, 2>::default();
    dst.copy(&src);
    let mut raw = Array::<u32, 2>::default();
    raw.copy_raw(&src);
    assert_eq!(dst, raw);

    let mut back = Array::<i32, 2>::default();
    back.move_from(dst);
    assert_eq!(back, src);
}

#[test]
fn convert_is_fresh() {
    let src: Array<u8, 3> = array![1, 2, 255];
    let dst = src.convert::<u32>();
    assert_eq!(dst.into_inner(), [1, 2, 255]);
    assert_eq!(src.into_inner(), [1, 2, 255]);

    let flags = Array::new([true, false]).convert::<u8>();
    assert_eq!(flags.into_inner(), [1, 0]);

    let owned = Array::new([String::from("a")]).convert_into::<String>();
    assert_eq!(owned.into_inner(), ["a"]);
}

#[test]
fn raw() {
    let p = Array::new([Point { x: 1, y: -1 }]);
    let words = p.cast::<[u32; 2]>();
    assert_eq!(words.into_inner(), [[1, u32::MAX]]);

    let mut q = Array::<Point, 1>::default();
    q.copy_raw(&words);
    assert_eq!(q, p);
}
