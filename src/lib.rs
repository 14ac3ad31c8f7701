//! Dimension generic point records for building spatial objects out of samples.
//!
//! Every point shares a base record (id, position, colour) and carries one payload
//! picked by the shape it belongs to: a normal for surfaces, a radius and frame for
//! tubes, and so on. Points are plain values. Copying one copies everything.
pub mod numeric;
pub mod bunch;
pub mod indent;
pub mod colour;
pub mod error;
pub mod point;

pub use bunch::Bunch;
pub use colour::Rgba;
pub use error::{PointError, Result};
pub use indent::Indent;
pub use point::{
    Blob, BlobPoint, FieldPoint, Fields, Line, LinePoint, Payload, PrintSelf, SpatialPoint,
    Surface, SurfacePoint, Tube, TubePoint, Vector,
};
