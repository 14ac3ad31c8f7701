//! Tube points. A centreline sample with its radius, the tangent along the tube and two
//! normals spanning the cross section.
use std::fmt;

use crate::error::Result;
use crate::indent::Indent;

use super::{Payload, SpatialPoint, Vector};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tube<const N: usize> {
    radius: f64,
    tangent: Vector<N>,
    normal1: Vector<N>,
    normal2: Vector<N>,
}

impl<const N: usize> Default for Tube<N> {
    fn default() -> Self {
        Tube {
            radius: 0.0,
            tangent: Vector::zero(),
            normal1: Vector::zero(),
            normal2: Vector::zero(),
        }
    }
}

impl<const N: usize> Payload for Tube<N> {
    const KIND: &'static str = "tube";

    fn print_payload(&self, sink: &mut dyn fmt::Write, indent: Indent) -> fmt::Result {
        writeln!(sink, "{}R: {}", indent, self.radius)?;
        writeln!(sink, "{}T: {}", indent, self.tangent)?;
        writeln!(sink, "{}V1: {}", indent, self.normal1)?;
        writeln!(sink, "{}V2: {}", indent, self.normal2)
    }
}

pub type TubePoint<const N: usize> = SpatialPoint<Tube<N>, N>;

impl<const N: usize> SpatialPoint<Tube<N>, N> {
    pub fn radius(&self) -> f64 {
        self.payload.radius
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.payload.radius = radius;
    }

    pub fn tangent(&self) -> &Vector<N> {
        &self.payload.tangent
    }

    pub fn tangent_mut(&mut self) -> &mut Vector<N> {
        &mut self.payload.tangent
    }

    pub fn set_tangent(&mut self, tangent: Vector<N>) {
        self.payload.tangent = tangent;
    }

    pub fn set_tangent_xy(&mut self, x: f64, y: f64) -> Result<()> {
        self.payload.tangent = Vector::from_slice(&[x, y])?;
        Ok(())
    }

    pub fn set_tangent_xyz(&mut self, x: f64, y: f64, z: f64) -> Result<()> {
        self.payload.tangent = Vector::from_slice(&[x, y, z])?;
        Ok(())
    }

    pub fn normal1(&self) -> &Vector<N> {
        &self.payload.normal1
    }

    pub fn set_normal1(&mut self, normal: Vector<N>) {
        self.payload.normal1 = normal;
    }

    pub fn normal2(&self) -> &Vector<N> {
        &self.payload.normal2
    }

    pub fn set_normal2(&mut self, normal: Vector<N>) {
        self.payload.normal2 = normal;
    }
}
