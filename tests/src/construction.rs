use fixarray::{array, Array, ErrorKind};
use std::rc::Rc;

#[test]
fn literal() {
    let a: Array<i32, 3> = array![1, 2, 3];
    assert_eq!(a, Array::new([1, 2, 3]));
    assert_eq!(a, Array::from([1, 2, 3]));
    assert_eq!(<[i32; 3]>::from(a), [1, 2, 3]);
    let b: Array<u8, 5> = array![9; 5];
    assert!(b == 9);
}

#[test]
fn default() {
    let a = Array::<String, 3>::default();
    assert!(a.iter().all(String::is_empty));
    assert_eq!(Array::<f32, 4>::default(), 0.0);
}

#[test]
fn from_fn() {
    let a = Array::<String, 3>::from_fn(|i| i.to_string());
    assert_eq!(a.into_inner(), ["0", "1", "2"]);
}

#[test]
fn uninit() {
    let mut a = Array::<u64, 4>::uninit();
    a.apply(|slot, i| {
        slot.write(i as u64 + 1);
    });
    let a = unsafe { a.assume_init() };
    assert_eq!(a.into_inner(), [1, 2, 3, 4]);
}

#[test]
fn from_slice() {
    let items = [1u16, 2, 3, 4];
    assert_eq!(Array::<u16, 4>::try_from(&items[..]).unwrap().into_inner(), items);

    let short = Array::<u16, 5>::try_from_slice(&items).unwrap_err();
    assert_eq!((short.kind, short.pos), (ErrorKind::InsufficientLength, 4));
    let long = Array::<u16, 3>::try_from_slice(&items).unwrap_err();
    assert_eq!((long.kind, long.pos), (ErrorKind::ExcessLength, 3));
}

#[test]
fn from_iter() {
    let a = Array::<usize, 3>::try_from_iter(0..3).unwrap();
    assert_eq!(a.into_inner(), [0, 1, 2]);
    assert_eq!(Array::<usize, 3>::try_from_iter(0..4).unwrap_err().kind, ErrorKind::ExcessLength);

    let rc = Rc::new(());
    let v = vec![rc.clone(), rc.clone()];
    assert!(Array::<Rc<()>, 3>::try_from(v).is_err());
    assert_eq!(Rc::strong_count(&rc), 1);
}

#[test]
fn error_message() {
    let err = Array::<u8, 2>::try_from_slice(&[1]).unwrap_err();
    assert_eq!(err.to_string(), "insufficient length at position 1");
}
