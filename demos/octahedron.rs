//! Surface points of an octahedron, one per face centre with the outward face normal.
//!
//! Run with `RUST_LOG=trace` (or put it in `.env`) to see the point assignments.
use std::fmt::Write;

use cgmath::{InnerSpace, Point3, Vector3};
use log::info;

use spatial_points::{Indent, PrintSelf, Rgba, SurfacePoint};

/// Face centres and unit normals. Every face of an octahedron centred on the origin lies in
/// one octant, so the sign triple of the octant is the face normal direction.
fn faces(side_len: f64) -> Vec<(Point3<f64>, Vector3<f64>)> {
    // Distance of each vertex from the centre.
    let reach = side_len / 2f64.sqrt();
    let mut faces = Vec::with_capacity(8);

    for &sx in [-1f64, 1f64].iter() {
        for &sy in [-1f64, 1f64].iter() {
            for &sz in [-1f64, 1f64].iter() {
                let k = reach / 3.0;
                let centre = Point3::new(sx * k, sy * k, sz * k);
                let normal = Vector3::new(sx, sy, sz).normalize();
                faces.push((centre, normal));
            }
        }
    }

    faces
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    env_logger::init();

    let colour = Rgba::new(0.2, 0.6, 1.0, 1.0);
    let mut points: Vec<SurfacePoint<3>> = Vec::new();

    for (id, (centre, normal)) in faces(2.0).into_iter().enumerate() {
        let mut point = SurfacePoint::<3>::new();
        point.set_id(id as i32);
        point.set_position(centre.into());
        point.set_normal(normal.into());
        point.set_colour(colour);
        points.push(point);
    }
    info!("Built {} surface points.", points.len());

    // A mirrored copy, assigned point by point.
    let mut mirrored = vec![SurfacePoint::<3>::new(); points.len()];
    for (dst, src) in mirrored.iter_mut().zip(points.iter()) {
        dst.assign(src);
        *dst.normal_mut() = -*src.normal();
    }
    info!("Mirrored {} points.", mirrored.len());

    let mut out = String::new();
    for point in points.iter() {
        writeln!(out, "Surface point:")?;
        point.print_self(&mut out, Indent::default().next())?;
    }
    println!("{}", out);

    Ok(())
}
