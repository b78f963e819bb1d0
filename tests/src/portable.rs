use fixarray::{
    array,
    portable::{be, le, NativeCast},
    Array, Portable,
};

fn assert_portable<T: Portable>() {}

#[test]
fn portable_arrays() {
    assert_portable::<Array<le::U32, 4>>();
    assert_portable::<[Array<be::I16, 2>; 3]>();
    assert_portable::<u8>();
}

#[test]
fn little_endian_bytes() {
    let native: Array<i32, 3> = array![1, 0x01020304, -1];
    let mut wire = Array::<le::I32, 3>::default();
    wire.copy(&native);
    assert_eq!(
        wire.as_bytes(),
        [1, 0, 0, 0, 4, 3, 2, 1, 0xff, 0xff, 0xff, 0xff]
    );
    let back: Array<i32, 3> = wire.convert();
    assert_eq!(back, native);
}

#[test]
fn big_endian_bytes() {
    let wire: Array<be::U16, 2> = Array::new([0x0102u16, 0xfffe]).convert();
    assert_eq!(wire.as_bytes(), [1, 2, 0xff, 0xfe]);
    assert_eq!(wire.map(|x| x.to_native()).into_inner(), [0x0102, 0xfffe]);
}

#[test]
fn same_type_is_bulk() {
    let a = Array::<le::U64, 2>::from_fn(|i| le::U64::from(i as u64 + 1));
    let mut b = Array::<le::U64, 2>::default();
    b.copy(&a);
    assert_eq!(b, a);

    let mut raw = Array::<[u8; 8], 2>::default();
    raw.copy_raw(&a);
    assert_eq!(raw[1], [2, 0, 0, 0, 0, 0, 0, 0]);
}

#[test]
fn swap_across_types() {
    let mut native: Array<i64, 2> = array![-5, 6];
    let mut wire = Array::new([le::I64::from(7), le::I64::from(-8)]);
    native.swap(&mut wire);
    assert_eq!(native, array![7, -8]);
    assert_eq!(wire.map(i64::from), array![-5, 6]);
}

#[test]
fn formatting() {
    assert_eq!(format!("{}", be::I32::from(-42)), "-42");
    assert_eq!(format!("{:?}", Array::new([le::U16::from(7)])), "Array { data: [7] }");
}
