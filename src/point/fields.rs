//! Points carrying named scalar measurements, e.g. anisotropy sampled along a fibre.
use std::fmt;

use log::debug;

use crate::error::{PointError, Result};
use crate::indent::Indent;

use super::{Payload, SpatialPoint};

/// Name/value pairs in insertion order. Names are unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields {
    fields: Vec<(String, f32)>,
}

impl Fields {
    fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|(n, _)| n == name)
    }
}

impl Payload for Fields {
    const KIND: &'static str = "field";

    fn print_payload(&self, sink: &mut dyn fmt::Write, indent: Indent) -> fmt::Result {
        for (name, value) in self.fields.iter() {
            writeln!(sink, "{}{}: {}", indent, name, value)?;
        }
        Ok(())
    }
}

pub type FieldPoint<const N: usize> = SpatialPoint<Fields, N>;

impl<const N: usize> SpatialPoint<Fields, N> {
    /// Append a field. A name already present has its value replaced instead.
    pub fn add_field(&mut self, name: &str, value: f32) {
        match self.payload.position(name) {
            Some(i) => self.payload.fields[i].1 = value,
            None => self.payload.fields.push((name.to_owned(), value)),
        }
    }

    /// Replace the value of an existing field.
    pub fn set_field(&mut self, name: &str, value: f32) -> Result<()> {
        match self.payload.position(name) {
            Some(i) => {
                self.payload.fields[i].1 = value;
                Ok(())
            },
            None => {
                debug!("No field {} on point {}.", name, self.id);
                Err(PointError::FieldNotFound(name.to_owned()))
            },
        }
    }

    pub fn field(&self, name: &str) -> Option<f32> {
        self.payload.position(name).map(|i| self.payload.fields[i].1)
    }

    pub fn fields(&self) -> &[(String, f32)] {
        &self.payload.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_stay_unique() {
        let mut p = FieldPoint::<3>::new();
        p.add_field("FA", 0.5);
        p.add_field("ADC", 1.25);
        p.add_field("FA", 0.75);

        assert_eq!(p.fields().len(), 2);
        assert_eq!(p.field("FA"), Some(0.75));
        assert_eq!(p.fields()[1], ("ADC".to_owned(), 1.25));
        assert_eq!(p.field("missing"), None);
    }

    #[test]
    fn set_requires_existing_name() {
        let mut p = FieldPoint::<3>::new();
        p.add_field("FA", 0.5);
        p.set_field("FA", 0.25).unwrap();
        assert_eq!(p.field("FA"), Some(0.25));

        let err = p.set_field("GA", 1.0).unwrap_err();
        assert_eq!(err, PointError::FieldNotFound("GA".to_owned()));
        assert_eq!(p.fields().len(), 1);
    }

    #[test]
    fn assigned_fields_are_owned() {
        let mut src = FieldPoint::<2>::new();
        src.add_field("FA", 0.5);

        let mut dst = FieldPoint::<2>::new();
        dst.add_field("stale", 9.0);
        dst.assign(&src);
        src.set_field("FA", 0.1).unwrap();

        assert_eq!(dst.fields().to_vec(), vec![("FA".to_owned(), 0.5f32)]);
    }

    #[test]
    fn dump_in_insertion_order() {
        let mut p = FieldPoint::<2>::new();
        p.add_field("b", 2.0);
        p.add_field("a", 1.0);
        assert!(p.to_string().ends_with("b: 2\na: 1\n"));
    }
}
