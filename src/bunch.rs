//! Bunches of numbers over n-space. What meaning they have is up to you!
//!
//! A `Bunch<S, N>` is exactly `N` scalars, no more and no fewer. Positions, normals and
//! tangents of the point records are all bunches of `f64`.
use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, Neg, Sub, SubAssign};

use cgmath::{Point2, Point3, Vector2, Vector3};
use log::debug;

use crate::error::{PointError, Result};
use crate::numeric::{Floater, Number};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bunch<S, const N: usize> {
    coords: [S; N],
}

impl<S: Number, const N: usize> Bunch<S, N> {
    pub fn new(coords: [S; N]) -> Self {
        Bunch { coords }
    }

    pub fn zero() -> Self {
        Bunch { coords: [num_traits::zero(); N] }
    }

    /// Build from a slice that must hold exactly `N` values.
    pub fn from_slice(values: &[S]) -> Result<Self> {
        if values.len() != N {
            debug!("Rejected {} values for a bunch of {}.", values.len(), N);
            return Err(PointError::mismatch(N, values.len()));
        }

        let mut coords = [num_traits::zero(); N];
        coords.copy_from_slice(values);
        Ok(Bunch { coords })
    }

    pub fn dim(&self) -> usize {
        N
    }

    pub fn as_slice(&self) -> &[S] {
        &self.coords
    }

    pub fn as_mut_slice(&mut self) -> &mut [S] {
        &mut self.coords
    }

    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.coords.iter()
    }

    pub fn dot(&self, other: &Self) -> S {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .fold(num_traits::zero(), |acc, (a, b)| acc + *a * *b)
    }
}

impl<S: Floater, const N: usize> Bunch<S, N> {
    pub fn magnitude(&self) -> S {
        self.dot(self).sqrt()
    }

    /// Unit length copy. `None` when there is no direction to keep.
    pub fn normalized(&self) -> Option<Self> {
        let mag = self.magnitude();
        if mag == S::zero() {
            return None;
        }
        let mut unit = *self;
        for a in unit.coords.iter_mut() {
            *a /= mag;
        }
        Some(unit)
    }
}

impl<S: Number, const N: usize> Default for Bunch<S, N> {
    fn default() -> Self {
        Bunch::zero()
    }
}

impl<S: Number, const N: usize> From<[S; N]> for Bunch<S, N> {
    fn from(coords: [S; N]) -> Self {
        Bunch { coords }
    }
}

impl<S: Number, const N: usize> From<Bunch<S, N>> for [S; N] {
    fn from(bunch: Bunch<S, N>) -> Self {
        bunch.coords
    }
}

impl<S: Number, const N: usize> Index<usize> for Bunch<S, N> {
    type Output = S;

    fn index(&self, index: usize) -> &S {
        &self.coords[index]
    }
}

impl<S: Number, const N: usize> IndexMut<usize> for Bunch<S, N> {
    fn index_mut(&mut self, index: usize) -> &mut S {
        &mut self.coords[index]
    }
}

impl<S: Number, const N: usize> AddAssign for Bunch<S, N> {
    fn add_assign(&mut self, rhs: Self) {
        for (a, b) in self.coords.iter_mut().zip(rhs.coords.iter()) {
            *a += *b;
        }
    }
}

impl<S: Number, const N: usize> SubAssign for Bunch<S, N> {
    fn sub_assign(&mut self, rhs: Self) {
        for (a, b) in self.coords.iter_mut().zip(rhs.coords.iter()) {
            *a -= *b;
        }
    }
}

impl<S: Number, const N: usize> Add for Bunch<S, N> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<S: Number, const N: usize> Sub for Bunch<S, N> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<S: Number, const N: usize> Mul<S> for Bunch<S, N> {
    type Output = Self;

    fn mul(mut self, rhs: S) -> Self {
        for a in self.coords.iter_mut() {
            *a *= rhs;
        }
        self
    }
}

impl<S: Floater, const N: usize> Neg for Bunch<S, N> {
    type Output = Self;

    fn neg(mut self) -> Self {
        for a in self.coords.iter_mut() {
            *a = -*a;
        }
        self
    }
}

impl<S: Number, const N: usize> fmt::Display for Bunch<S, N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, "]")
    }
}

/// Shuttle between bunches and the `cgmath` types of the same size.
macro_rules! cgmath_conversions {
    ($cg:ident, $n:literal, $($field:ident),+) => {
        impl<S: Number> From<$cg<S>> for Bunch<S, { $n }> {
            fn from(v: $cg<S>) -> Self {
                Bunch::new([$(v.$field),+])
            }
        }

        impl<S: Number> From<Bunch<S, { $n }>> for $cg<S> {
            fn from(bunch: Bunch<S, { $n }>) -> Self {
                let [$($field),+] = bunch.coords;
                $cg { $($field),+ }
            }
        }
    };
}

cgmath_conversions!(Vector2, 2, x, y);
cgmath_conversions!(Vector3, 3, x, y, z);
cgmath_conversions!(Point2, 2, x, y);
cgmath_conversions!(Point3, 3, x, y, z);
