//! Blob points carry nothing beyond the base record.
use std::fmt;

use crate::indent::Indent;

use super::{Payload, SpatialPoint};

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Blob;

impl Payload for Blob {
    const KIND: &'static str = "blob";

    fn print_payload(&self, _sink: &mut dyn fmt::Write, _indent: Indent) -> fmt::Result {
        Ok(())
    }
}

pub type BlobPoint<const N: usize> = SpatialPoint<Blob, N>;
