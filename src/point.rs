//! Spatial points. A shared base record (id, position, colour) with a shape specific
//! payload bolted on. Shapes own their points by value, in order; a point knows nothing of
//! its owner.
use std::fmt;

use log::trace;

use crate::bunch::Bunch;
use crate::colour::Rgba;
use crate::error::Result;
use crate::indent::Indent;

mod blob;
mod fields;
mod line;
mod surface;
mod tube;

pub use blob::{Blob, BlobPoint};
pub use fields::{FieldPoint, Fields};
pub use line::{Line, LinePoint};
pub use surface::{Surface, SurfacePoint};
pub use tube::{Tube, TubePoint};

/// Positions, normals, tangents. Always `f64`.
pub type Vector<const N: usize> = Bunch<f64, N>;

/// The id of a point nobody has numbered yet.
pub const UNASSIGNED_ID: i32 = -1;

/// Data a shape hangs off the base record.
pub trait Payload: Clone + Default + fmt::Debug {
    /// Short name for log output.
    const KIND: &'static str;

    /// Dump the payload only. The base record prints itself.
    fn print_payload(&self, sink: &mut dyn fmt::Write, indent: Indent) -> fmt::Result;
}

/// Human readable diagnostic dump. Not a serialization format.
pub trait PrintSelf {
    fn print_self(&self, sink: &mut dyn fmt::Write, indent: Indent) -> fmt::Result;
}

/// Base point record of dimension `N` carrying payload `P`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpatialPoint<P, const N: usize> {
    id: i32,
    position: Vector<N>,
    colour: Rgba,
    payload: P,
}

impl<P: Payload, const N: usize> SpatialPoint<P, N> {
    /// Zeroed position and payload, opaque red, unassigned id.
    pub fn new() -> Self {
        SpatialPoint::with_payload(P::default())
    }

    pub fn with_payload(payload: P) -> Self {
        SpatialPoint {
            id: UNASSIGNED_ID,
            position: Vector::zero(),
            colour: Rgba::default(),
            payload,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    pub fn position(&self) -> &Vector<N> {
        &self.position
    }

    pub fn position_mut(&mut self) -> &mut Vector<N> {
        &mut self.position
    }

    pub fn set_position(&mut self, position: Vector<N>) {
        self.position = position;
    }

    /// Only for `N == 2`. Anything else is rejected and the position kept.
    pub fn set_position_xy(&mut self, x: f64, y: f64) -> Result<()> {
        self.position = Vector::from_slice(&[x, y])?;
        Ok(())
    }

    /// Only for `N == 3`. Anything else is rejected and the position kept.
    pub fn set_position_xyz(&mut self, x: f64, y: f64, z: f64) -> Result<()> {
        self.position = Vector::from_slice(&[x, y, z])?;
        Ok(())
    }

    pub fn colour(&self) -> &Rgba {
        &self.colour
    }

    pub fn set_colour(&mut self, colour: Rgba) {
        self.colour = colour;
    }

    pub fn set_rgba(&mut self, red: f32, green: f32, blue: f32, alpha: f32) {
        self.colour = Rgba::new(red, green, blue, alpha);
    }

    pub fn red(&self) -> f32 {
        *self.colour.red()
    }

    pub fn green(&self) -> f32 {
        *self.colour.green()
    }

    pub fn blue(&self) -> f32 {
        *self.colour.blue()
    }

    pub fn alpha(&self) -> f32 {
        *self.colour.alpha()
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    pub fn payload_mut(&mut self) -> &mut P {
        &mut self.payload
    }

    /// Copy every field of `other` into this point, base first and then the payload.
    /// Returns `self` so assignments can be chained.
    pub fn assign(&mut self, other: &Self) -> &mut Self {
        trace!("Assigning {} point {} over {}.", P::KIND, other.id, self.id);
        self.id = other.id;
        self.position = other.position;
        self.colour = other.colour;
        self.payload.clone_from(&other.payload);
        self
    }
}

impl<P: Payload, const N: usize> Default for SpatialPoint<P, N> {
    fn default() -> Self {
        SpatialPoint::new()
    }
}

impl<P: Payload, const N: usize> PrintSelf for SpatialPoint<P, N> {
    fn print_self(&self, sink: &mut dyn fmt::Write, indent: Indent) -> fmt::Result {
        writeln!(sink, "{}Id: {}", indent, self.id)?;
        writeln!(sink, "{}RGBA: {}", indent, self.colour)?;
        writeln!(sink, "{}Position: {}", indent, self.position)?;
        self.payload.print_payload(sink, indent)
    }
}

impl<P: Payload, const N: usize> fmt::Display for SpatialPoint<P, N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.print_self(f, Indent::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PointError;

    #[test]
    fn base_defaults() {
        let p: BlobPoint<3> = SpatialPoint::new();
        assert_eq!(p.id(), UNASSIGNED_ID);
        assert_eq!(*p.position(), Vector::zero());
        assert_eq!(*p.colour(), Rgba::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn base_setters() {
        let mut p: BlobPoint<3> = SpatialPoint::new();
        p.set_id(7);
        p.set_position(Vector::new([1.0, 2.0, 3.0]));
        p.position_mut()[2] = 4.0;
        p.set_rgba(0.1, 0.2, 0.3, 0.4);

        assert_eq!(p.id(), 7);
        assert_eq!(*p.position(), Vector::new([1.0, 2.0, 4.0]));
        assert_eq!((p.red(), p.green(), p.blue(), p.alpha()), (0.1, 0.2, 0.3, 0.4));
    }

    #[test]
    fn position_shortcuts_check_dimension() {
        let mut p: BlobPoint<2> = SpatialPoint::new();
        p.set_position_xy(1.5, -2.0).unwrap();
        assert_eq!(*p.position(), Vector::new([1.5, -2.0]));

        let err = p.set_position_xyz(1.0, 1.0, 1.0).unwrap_err();
        assert_eq!(err, PointError::mismatch(2, 3));
        assert_eq!(*p.position(), Vector::new([1.5, -2.0]));
    }

    #[test]
    fn assign_copies_base() {
        let mut src: BlobPoint<2> = SpatialPoint::new();
        src.set_id(3);
        src.set_position(Vector::new([1.0, 1.0]));
        src.set_colour(Rgba::new(0.0, 0.0, 1.0, 0.5));

        let mut dst: BlobPoint<2> = SpatialPoint::new();
        dst.assign(&src);
        assert_eq!(dst, src);

        src.set_id(4);
        src.position_mut()[0] = 9.0;
        assert_eq!(dst.id(), 3);
        assert_eq!(*dst.position(), Vector::new([1.0, 1.0]));
    }

    #[test]
    fn assign_chains() {
        let mut src: BlobPoint<1> = SpatialPoint::new();
        src.set_id(11);

        let mut a: BlobPoint<1> = SpatialPoint::new();
        let mut b: BlobPoint<1> = SpatialPoint::new();
        b.assign(a.assign(&src));
        assert_eq!(a.id(), 11);
        assert_eq!(b.id(), 11);
    }

    #[test]
    fn base_dump() {
        let mut p: BlobPoint<3> = SpatialPoint::new();
        p.set_id(2);
        p.set_position(Vector::new([1.0, 0.5, 0.0]));

        let mut out = String::new();
        p.print_self(&mut out, Indent::new(2)).unwrap();
        assert_eq!(out, "  Id: 2\n  RGBA: 1 0 0 1\n  Position: [1, 0.5, 0]\n");
        assert_eq!(p.to_string(), "Id: 2\nRGBA: 1 0 0 1\nPosition: [1, 0.5, 0]\n");
    }
}
