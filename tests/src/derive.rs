use core::ops::{Div, Mul};
use fixarray::{array, impl_bulk_assign, Array, Plain, Scalar};

#[derive(Clone, Copy, Default, Debug, PartialEq, Plain)]
#[repr(C)]
struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

#[derive(Clone, Copy, Default, Debug, PartialEq, Plain)]
#[repr(transparent)]
struct Wrap<T: Copy + 'static = u16>(T);

impl_bulk_assign!(Wrap<u16> => u16, [u8; 2]);

#[derive(Clone, Copy, Default, Debug, PartialEq, Plain)]
#[repr(C)]
struct Unit;

/// Length in meters.
#[derive(Clone, Copy, Default, Debug, PartialEq, Scalar)]
struct Meters(f64);

/// Area in square meters.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
struct Area(f64);

impl Mul for Meters {
    type Output = Area;
    fn mul(self, rhs: Meters) -> Area {
        Area(self.0 * rhs.0)
    }
}

impl Div<Meters> for Area {
    type Output = Meters;
    fn div(self, rhs: Meters) -> Meters {
        Meters(self.0 / rhs.0)
    }
}

#[test]
fn plain_struct() {
    assert_eq!(core::mem::size_of::<Array<Rgb, 4>>(), 12);
    let mut pixels = Array::<Rgb, 2>::default();
    pixels.fill(&Rgb { r: 1, g: 2, b: 3 });
    assert_eq!(pixels.cast::<[u8; 3]>().into_inner(), [[1, 2, 3]; 2]);
    assert_eq!(pixels.as_bytes(), [1, 2, 3, 1, 2, 3]);

    let mut copy = Array::<Rgb, 2>::default();
    copy.copy(&pixels);
    assert_eq!(copy, pixels);
}

#[test]
fn plain_generic() {
    let a = Array::new([Wrap(0x1234u16), Wrap(0x5678)]);
    let b: Array<u16, 2> = a.cast();
    assert_eq!(b.into_inner(), [0x1234, 0x5678]);

    let mut c = Array::<Wrap, 2>::default();
    c.move_from(a);
    assert_eq!(c, a);

    let mut d = Array::<u16, 2>::default();
    d.copy(&a);
    assert_eq!(d, b);
    let e: Array<Wrap<u16>, 2> = Array::new([[0x34u8, 0x12], [0x78, 0x56]]).convert();
    assert_eq!(e.cast::<[u8; 2]>().into_inner(), [[0x34, 0x12], [0x78, 0x56]]);

    let mut units = Array::<Unit, 3>::default();
    units.copy(&Array::<Unit, 3>::default());
    assert_eq!(units.as_bytes().len(), 0);
}

#[test]
fn scalar_operand() {
    let sides = array![Meters(2.0), Meters(3.0)];
    let areas = sides * Meters(2.0);
    assert_eq!(areas, array![Area(4.0), Area(6.0)]);
    assert_eq!(areas / sides, array![Meters(2.0), Meters(2.0)]);
    assert!(sides != Meters(2.0));
    assert!(Array::new([Meters(1.5); 3]) == Meters(1.5));
}
