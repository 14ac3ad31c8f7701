//! Line points. A line in N-space has `N - 1` normals at every point.
use std::fmt;

use crate::error::{PointError, Result};
use crate::indent::Indent;

use super::{Payload, SpatialPoint, Vector};

#[derive(Debug, Clone, PartialEq)]
pub struct Line<const N: usize> {
    normals: Vec<Vector<N>>,
}

impl<const N: usize> Line<N> {
    fn out_of_range(&self, index: usize) -> PointError {
        PointError::IndexOutOfRange { index, len: self.normals.len() }
    }
}

impl<const N: usize> Default for Line<N> {
    fn default() -> Self {
        Line { normals: vec![Vector::zero(); N.saturating_sub(1)] }
    }
}

impl<const N: usize> Payload for Line<N> {
    const KIND: &'static str = "line";

    fn print_payload(&self, sink: &mut dyn fmt::Write, indent: Indent) -> fmt::Result {
        for (i, normal) in self.normals.iter().enumerate() {
            writeln!(sink, "{}Normal #{}: {}", indent, i, normal)?;
        }
        Ok(())
    }
}

pub type LinePoint<const N: usize> = SpatialPoint<Line<N>, N>;

impl<const N: usize> SpatialPoint<Line<N>, N> {
    pub fn normals(&self) -> &[Vector<N>] {
        &self.payload.normals
    }

    pub fn normal(&self, index: usize) -> Result<&Vector<N>> {
        self.payload
            .normals
            .get(index)
            .ok_or_else(|| self.payload.out_of_range(index))
    }

    pub fn normal_mut(&mut self, index: usize) -> Result<&mut Vector<N>> {
        let err = self.payload.out_of_range(index);
        self.payload.normals.get_mut(index).ok_or(err)
    }

    pub fn set_normal(&mut self, index: usize, normal: Vector<N>) -> Result<()> {
        *self.normal_mut(index)? = normal;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_normal_fewer_than_dimensions() {
        assert_eq!(LinePoint::<1>::new().normals().len(), 0);
        assert_eq!(LinePoint::<2>::new().normals().len(), 1);
        assert_eq!(LinePoint::<3>::new().normals().len(), 2);
        assert!(LinePoint::<3>::new().normals().iter().all(|n| *n == Vector::zero()));
    }

    #[test]
    fn indexed_normals() {
        let mut p = LinePoint::<3>::new();
        p.set_normal(1, Vector::new([0.0, 0.0, 1.0])).unwrap();
        assert_eq!(*p.normal(1).unwrap(), Vector::new([0.0, 0.0, 1.0]));
        assert_eq!(*p.normal(0).unwrap(), Vector::zero());

        let err = p.set_normal(2, Vector::zero()).unwrap_err();
        assert_eq!(err, PointError::IndexOutOfRange { index: 2, len: 2 });
        assert!(p.normal(5).is_err());
    }

    #[test]
    fn assign_keeps_normals_separate() {
        let mut src = LinePoint::<2>::new();
        src.set_normal(0, Vector::new([0.0, 1.0])).unwrap();

        let mut dst = LinePoint::<2>::new();
        dst.assign(&src);
        src.set_normal(0, Vector::new([1.0, 0.0])).unwrap();
        assert_eq!(*dst.normal(0).unwrap(), Vector::new([0.0, 1.0]));
    }

    #[test]
    fn dump_numbers_normals() {
        let mut p = LinePoint::<3>::new();
        p.set_normal(0, Vector::new([1.0, 0.0, 0.0])).unwrap();

        let text = p.to_string();
        assert!(text.contains("Normal #0: [1, 0, 0]\n"));
        assert!(text.contains("Normal #1: [0, 0, 0]\n"));
    }
}
