//! Numeric reductions, see also [`num_traits`].

use crate::Array;
use core::ops::Mul;
use num_traits::{One, Zero};

impl<T: Zero, const N: usize> Zero for Array<T, N> {
    fn zero() -> Self {
        Self::from_fn(|_| T::zero())
    }
    fn is_zero(&self) -> bool {
        self.iter().all(T::is_zero)
    }
}

impl<T: One, const N: usize> One for Array<T, N> {
    fn one() -> Self {
        Self::from_fn(|_| T::one())
    }
}

impl<T, const N: usize> Array<T, N> {
    /// Array of zeros.
    pub fn zero() -> Self
    where
        T: Zero,
    {
        <Self as Zero>::zero()
    }
    /// Array of ones.
    pub fn one() -> Self
    where
        T: One,
    {
        <Self as One>::one()
    }

    /// Sum of all items. Zero for an empty array.
    pub fn sum(self) -> T
    where
        T: Zero,
    {
        self.into_iter().fold(T::zero(), |acc, x| acc + x)
    }

    /// Product of all items. One for an empty array.
    pub fn product(self) -> T
    where
        T: One,
    {
        self.into_iter().fold(T::one(), |acc, x| acc * x)
    }

    /// Sum of pairwise products of items.
    pub fn dot<'a, V, O>(&'a self, other: &'a Array<V, N>) -> O
    where
        &'a T: Mul<&'a V, Output = O>,
        O: Zero,
    {
        self.iter().zip(other).fold(O::zero(), |acc, (a, b)| acc + a * b)
    }
}
