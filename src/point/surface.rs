//! Surface points. A position and exactly one normal.
use std::fmt;

use crate::error::Result;
use crate::indent::Indent;

use super::{Payload, SpatialPoint, Vector};

/// The normal is kept as given. Nothing normalizes it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Surface<const N: usize> {
    normal: Vector<N>,
}

impl<const N: usize> Default for Surface<N> {
    fn default() -> Self {
        Surface { normal: Vector::zero() }
    }
}

impl<const N: usize> Payload for Surface<N> {
    const KIND: &'static str = "surface";

    fn print_payload(&self, sink: &mut dyn fmt::Write, indent: Indent) -> fmt::Result {
        writeln!(sink, "{}Normal: {}", indent, self.normal)
    }
}

pub type SurfacePoint<const N: usize> = SpatialPoint<Surface<N>, N>;

impl<const N: usize> SpatialPoint<Surface<N>, N> {
    pub fn normal(&self) -> &Vector<N> {
        &self.payload.normal
    }

    /// For callers accumulating a normal in place.
    pub fn normal_mut(&mut self) -> &mut Vector<N> {
        &mut self.payload.normal
    }

    pub fn set_normal(&mut self, normal: Vector<N>) {
        self.payload.normal = normal;
    }

    /// Only for `N == 2`. Anything else is rejected and the normal kept.
    pub fn set_normal_xy(&mut self, x: f64, y: f64) -> Result<()> {
        self.payload.normal = Vector::from_slice(&[x, y])?;
        Ok(())
    }

    /// Only for `N == 3`. Anything else is rejected and the normal kept.
    pub fn set_normal_xyz(&mut self, x: f64, y: f64, z: f64) -> Result<()> {
        self.payload.normal = Vector::from_slice(&[x, y, z])?;
        Ok(())
    }
}
