use crate::{
    error::{Error, ErrorKind},
    traits::Plain,
    utils::{mem, partial::Partial},
};
use core::{
    array,
    cmp::Ordering,
    mem::{ManuallyDrop, MaybeUninit},
    ops::{Index, IndexMut},
    ptr,
    slice::{self, SliceIndex},
};

/// Fixed-size array of `N` items of type `T` stored inline.
///
/// Has exactly the same layout as `[T; N]`, there is no separate length or capacity.
///
/// # Indexing
///
/// [`Index`] and [`IndexMut`] are bounds-checked and panic on out-of-range access, like slices do.
/// Code on a hot path that has already proven the index valid may use
/// [`get_unchecked`](Self::get_unchecked) which performs no check at all.
///
/// # Zero size
///
/// `Array<T, 0>` can exist, but [`front`](Self::front) and [`back`](Self::back) refuse to build for it.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Hash)]
pub struct Array<T, const N: usize> {
    data: [T; N],
}

unsafe impl<T: Plain, const N: usize> Plain for Array<T, N> {
    const LAYOUT_CHECK: () = T::LAYOUT_CHECK;
}

impl<T, const N: usize> Array<T, N> {
    /// Number of items in the array.
    pub const SIZE: usize = N;

    const NON_EMPTY: () = assert!(N > 0, "operation requires a non-empty array");

    /// Create array from items.
    ///
    /// The number of items is checked by the type system, see also [`array!`](crate::array).
    pub const fn new(data: [T; N]) -> Self {
        Self { data }
    }

    /// Create array calling `f` with index of each item, in ascending order.
    pub fn from_fn<F: FnMut(usize) -> T>(mut f: F) -> Self {
        let mut this = Self::uninit();
        // If `f` panics, items written so far are leaked.
        this.apply(|slot, i| {
            slot.write(f(i));
        });
        unsafe { this.assume_init() }
    }

    /// Array which items are left uninitialized.
    pub fn uninit() -> Array<MaybeUninit<T>, N> {
        Array::new(mem::uninit_array())
    }

    pub fn into_inner(self) -> [T; N] {
        self.data
    }

    /// Number of items. Known without an instance.
    pub const fn size() -> usize {
        N
    }
    pub const fn len(&self) -> usize {
        N
    }
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub const fn as_slice(&self) -> &[T] {
        &self.data
    }
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
    pub const fn as_array(&self) -> &[T; N] {
        &self.data
    }
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.data
    }

    /// Pointer to the first item.
    pub const fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    pub fn try_get(&self, index: usize) -> Result<&T, Error> {
        self.data.get(index).ok_or(Error::new(ErrorKind::OutOfBounds, index))
    }
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        self.data.get_mut(index).ok_or(Error::new(ErrorKind::OutOfBounds, index))
    }

    /// Item at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `N`, otherwise the behavior is undefined.
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < N);
        self.data.get_unchecked(index)
    }
    /// Mutable item at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `N`, otherwise the behavior is undefined.
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < N);
        self.data.get_unchecked_mut(index)
    }

    pub fn front(&self) -> &T {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;
        unsafe { self.data.get_unchecked(0) }
    }
    pub fn front_mut(&mut self) -> &mut T {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;
        unsafe { self.data.get_unchecked_mut(0) }
    }
    pub fn back(&self) -> &T {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;
        unsafe { self.data.get_unchecked(N - 1) }
    }
    pub fn back_mut(&mut self) -> &mut T {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;
        unsafe { self.data.get_unchecked_mut(N - 1) }
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Call `f` for every item with its index, in ascending order.
    ///
    /// All operators that produce a new array are built on top of this method.
    pub fn apply<F: FnMut(&mut T, usize)>(&mut self, mut f: F) {
        for (i, item) in self.data.iter_mut().enumerate() {
            f(item, i);
        }
    }

    /// Create a new array applying `f` to each item.
    pub fn map<O, F: FnMut(T) -> O>(self, mut f: F) -> Array<O, N> {
        let src = ManuallyDrop::new(self);
        // Each item is read exactly once. If `f` panics, the remaining items are leaked.
        Array::from_fn(|i| f(unsafe { ptr::read(src.data.as_ptr().add(i)) }))
    }

    /// Create a new array applying `f` to pairs of items with the same index.
    pub fn zip_with<V, O, F: FnMut(T, V) -> O>(self, other: Array<V, N>, mut f: F) -> Array<O, N> {
        let (lhs, rhs) = (ManuallyDrop::new(self), ManuallyDrop::new(other));
        Array::from_fn(|i| unsafe { f(ptr::read(lhs.data.as_ptr().add(i)), ptr::read(rhs.data.as_ptr().add(i))) })
    }

    /// Create array from iterator that yields exactly `N` items.
    ///
    /// On error the items already taken are dropped.
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, Error> {
        let mut partial = Partial::<T, N>::new();
        let mut iter = iter.into_iter().fuse();
        for item in iter.by_ref().take(N) {
            // `take(N)` never yields more items than `partial` can hold.
            let _ = partial.push(item);
        }
        if iter.next().is_some() {
            return Err(Error::new(ErrorKind::ExcessLength, N));
        }
        let len = partial.len();
        partial
            .finish()
            .map_err(|_| Error::new(ErrorKind::InsufficientLength, len))
    }
}

impl<T, const N: usize> Array<MaybeUninit<T>, N> {
    /// # Safety
    ///
    /// Every item must be initialized.
    pub unsafe fn assume_init(self) -> Array<T, N> {
        Array::new(mem::assume_init_array(self.data))
    }
}

impl<T: Clone, const N: usize> Array<T, N> {
    /// Create array cloning items of `slice` which length must be exactly `N`.
    pub fn try_from_slice(slice: &[T]) -> Result<Self, Error> {
        match slice.len().cmp(&N) {
            Ordering::Less => Err(Error::new(ErrorKind::InsufficientLength, slice.len())),
            Ordering::Greater => Err(Error::new(ErrorKind::ExcessLength, N)),
            Ordering::Equal => Ok(Self::from_fn(|i| slice[i].clone())),
        }
    }
}

impl<T: Plain, const N: usize> Array<T, N> {
    /// Binary representation of the array.
    ///
    /// Types with padding bytes fail to build here.
    pub fn as_bytes(&self) -> &[u8] {
        mem::as_bytes(&self.data)
    }
    /// Mutable binary representation of the array.
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        mem::as_mut_bytes(&mut self.data)
    }
}

impl<T: Default, const N: usize> Default for Array<T, N> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T, N> {
    fn from(data: [T; N]) -> Self {
        Self::new(data)
    }
}

impl<T, const N: usize> From<Array<T, N>> for [T; N] {
    fn from(array: Array<T, N>) -> Self {
        array.into_inner()
    }
}

impl<T: Clone, const N: usize> TryFrom<&[T]> for Array<T, N> {
    type Error = Error;
    fn try_from(slice: &[T]) -> Result<Self, Error> {
        Self::try_from_slice(slice)
    }
}

#[cfg(feature = "alloc")]
impl<T, const N: usize> TryFrom<alloc::vec::Vec<T>> for Array<T, N> {
    type Error = Error;
    fn try_from(vec: alloc::vec::Vec<T>) -> Result<Self, Error> {
        Self::try_from_iter(vec)
    }
}

impl<T, const N: usize> AsRef<[T]> for Array<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}
impl<T, const N: usize> AsMut<[T]> for Array<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T, I: SliceIndex<[T]>, const N: usize> Index<I> for Array<T, N> {
    type Output = I::Output;
    fn index(&self, index: I) -> &I::Output {
        Index::index(self.as_slice(), index)
    }
}
impl<T, I: SliceIndex<[T]>, const N: usize> IndexMut<I> for Array<T, N> {
    fn index_mut(&mut self, index: I) -> &mut I::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T, const N: usize> IntoIterator for Array<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
impl<'a, T, const N: usize> IntoIterator for &'a Array<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<'a, T, const N: usize> IntoIterator for &'a mut Array<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Create an [`Array`] from a list of items or from a repeated item.
///
/// The number of items must match the size of the array.
///
/// ```
/// # use fixarray_base::{array, Array};
/// let a: Array<i32, 3> = array![1, 2, 3];
/// let b: Array<i32, 3> = array![7; 3];
/// assert_eq!(a.len(), b.len());
/// ```
///
/// ```compile_fail
/// # use fixarray_base::{array, Array};
/// let a: Array<i32, 3> = array![1, 2];
/// ```
#[macro_export]
macro_rules! array {
    ($value:expr; $n:expr) => {
        $crate::Array::new([$value; $n])
    };
    ($($value:expr),* $(,)?) => {
        $crate::Array::new([$($value),*])
    };
}
