// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Procedural primitive shapes used as instance templates (branch segments, markers) and as test
//! surfaces.

use super::shape::ShapeData;
use glam::{Vec2, Vec3};
use rustc_hash::FxHashMap;
use std::f32::consts::PI;

/// UV sphere centered at the origin.
///
/// `horizontal_divisions` is the number of sections around the equator, `vertical_divisions` the
/// number of sections from pole to pole.
pub fn make_sphere(horizontal_divisions: u32, vertical_divisions: u32, radius: f32) -> ShapeData {
    let horizontal_divisions = horizontal_divisions.max(3);
    let vertical_divisions = vertical_divisions.max(2);
    let mut shape = ShapeData::new();

    // ---------- Add vertices ----------

    shape.positions.push(Vec3::new(0.0, radius, 0.0));
    shape.normals.push(Vec3::Y);
    shape.texcoords.push(Vec2::new(0.5, 0.0));
    let north_pole_index = 0;

    shape.positions.push(Vec3::new(0.0, -radius, 0.0));
    shape.normals.push(-Vec3::Y);
    shape.texcoords.push(Vec2::new(0.5, 1.0));
    let south_pole_index = 1;

    let non_pole_index_start = shape.positions.len() as u32;

    for y in 1..vertical_divisions {
        let v = (y as f32) / (vertical_divisions as f32);
        let phi = v * PI; // latitude
        for x in 0..horizontal_divisions {
            let u = (x as f32) / (horizontal_divisions as f32);
            let theta = u * 2.0 * PI; // longitude

            let normal = Vec3::new(theta.sin() * phi.sin(), phi.cos(), theta.cos() * phi.sin());
            shape.positions.push(normal * radius);
            shape.normals.push(normal);
            shape.texcoords.push(Vec2::new(u, v));
        }
    }

    // ---------- add indices ----------

    for x in 0..horizontal_divisions {
        shape.triangles.push([
            north_pole_index,
            non_pole_index_start + x % horizontal_divisions,
            non_pole_index_start + (x + 1) % horizontal_divisions,
        ]);
    }

    let last_ring_start = non_pole_index_start + (vertical_divisions - 2) * horizontal_divisions;
    for x in 0..horizontal_divisions {
        shape.triangles.push([
            south_pole_index,
            last_ring_start + (x + 1) % horizontal_divisions,
            last_ring_start + x % horizontal_divisions,
        ]);
    }

    for y in 1..(vertical_divisions - 1) {
        let offset = non_pole_index_start + (y - 1) * horizontal_divisions;
        for x in 0..horizontal_divisions {
            shape.quads.push([
                offset + (x + 1) % horizontal_divisions,
                offset + x % horizontal_divisions,
                offset + horizontal_divisions + x % horizontal_divisions,
                offset + horizontal_divisions + (x + 1) % horizontal_divisions,
            ]);
        }
    }

    shape
}

/// Capped cylinder along +Y, centered at the origin, spanning `[-half_height, half_height]`.
pub fn make_uvcylinder(divisions: u32, radius: f32, half_height: f32) -> ShapeData {
    let divisions = divisions.max(3);
    let mut shape = ShapeData::new();

    for x in 0..divisions {
        let u = (x as f32) / (divisions as f32);
        let theta = u * 2.0 * PI;
        let normal = Vec3::new(theta.sin(), 0.0, theta.cos());

        shape.positions.push(Vec3::new(0.0, -half_height, 0.0) + normal * radius);
        shape.normals.push(normal);
        shape.texcoords.push(Vec2::new(u, 0.0));

        shape.positions.push(Vec3::new(0.0, half_height, 0.0) + normal * radius);
        shape.normals.push(normal);
        shape.texcoords.push(Vec2::new(u, 1.0));

        let offset = 2 * x;
        let next_offset = 2 * ((x + 1) % divisions);
        shape.quads.push([
            offset,          // bottom
            next_offset,     // next bottom
            next_offset + 1, // next top
            offset + 1,      // top
        ]);
    }

    add_cap(&mut shape, half_height, Vec3::Y, radius, divisions);
    add_cap(&mut shape, -half_height, -Vec3::Y, radius, divisions);

    shape
}

fn add_cap(shape: &mut ShapeData, height: f32, normal: Vec3, radius: f32, divisions: u32) {
    let center_index = shape.positions.len() as u32;
    shape.positions.push(Vec3::new(0.0, height, 0.0));
    shape.normals.push(normal);
    shape.texcoords.push(Vec2::new(0.5, 0.5));

    let index_start = shape.positions.len() as u32;
    for x in 0..divisions {
        let theta = (x as f32) / (divisions as f32) * 2.0 * PI;
        let out = Vec3::new(theta.sin(), 0.0, theta.cos());
        shape.positions.push(Vec3::new(0.0, height, 0.0) + out * radius);
        shape.normals.push(normal);
        shape.texcoords.push(Vec2::new(0.5 + 0.5 * out.x, 0.5 + 0.5 * out.z));

        let offset = index_start + x;
        let next_offset = index_start + (x + 1) % divisions;
        if normal.y > 0.0 {
            shape.triangles.push([center_index, offset, next_offset]);
        } else {
            shape.triangles.push([center_index, next_offset, offset]);
        }
    }
}

/// Icosphere of the given radius, refined `subdivisions` times by edge-midpoint splitting.
pub fn make_icosphere(subdivisions: u32, radius: f32) -> ShapeData {
    let t = (1.0 + 5.0f32.sqrt()) * 0.5;
    let mut positions: Vec<Vec3> = [
        (-1.0, t, 0.0),
        (1.0, t, 0.0),
        (-1.0, -t, 0.0),
        (1.0, -t, 0.0),
        (0.0, -1.0, t),
        (0.0, 1.0, t),
        (0.0, -1.0, -t),
        (0.0, 1.0, -t),
        (t, 0.0, -1.0),
        (t, 0.0, 1.0),
        (-t, 0.0, -1.0),
        (-t, 0.0, 1.0),
    ]
    .iter()
    .map(|&(x, y, z)| Vec3::new(x, y, z).normalize())
    .collect();

    let mut triangles: Vec<[u32; 3]> = vec![
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];

    for _ in 0..subdivisions {
        let mut midpoints: FxHashMap<(u32, u32), u32> = FxHashMap::default();
        let mut midpoint = |a: u32, b: u32, positions: &mut Vec<Vec3>| -> u32 {
            let key = if a < b { (a, b) } else { (b, a) };
            *midpoints.entry(key).or_insert_with(|| {
                let p = ((positions[a as usize] + positions[b as usize]) * 0.5).normalize();
                positions.push(p);
                positions.len() as u32 - 1
            })
        };

        let mut refined = Vec::with_capacity(triangles.len() * 4);
        for &[a, b, c] in &triangles {
            let ab = midpoint(a, b, &mut positions);
            let bc = midpoint(b, c, &mut positions);
            let ca = midpoint(c, a, &mut positions);
            refined.push([a, ab, ca]);
            refined.push([b, bc, ab]);
            refined.push([c, ca, bc]);
            refined.push([ab, bc, ca]);
        }
        triangles = refined;
    }

    let normals = positions.clone();
    let texcoords = positions
        .iter()
        .map(|p| Vec2::new(0.5 + p.z.atan2(p.x) / (2.0 * PI), p.y.clamp(-1.0, 1.0).acos() / PI))
        .collect();
    ShapeData {
        positions: positions.into_iter().map(|p| p * radius).collect(),
        normals,
        texcoords,
        triangles,
        ..Default::default()
    }
}

/// Flat square in the XZ plane facing +Y, `steps` quads per side, spanning `[-size/2, size/2]`.
pub fn make_grid_plane(steps: u32, size: f32) -> ShapeData {
    let steps = steps.max(1);
    let mut shape = ShapeData::new();
    for j in 0..=steps {
        for i in 0..=steps {
            let uv = Vec2::new(i as f32 / steps as f32, j as f32 / steps as f32);
            shape.positions.push(Vec3::new((uv.x - 0.5) * size, 0.0, (0.5 - uv.y) * size));
            shape.normals.push(Vec3::Y);
            shape.texcoords.push(uv);
        }
    }
    let row = steps + 1;
    for j in 0..steps {
        for i in 0..steps {
            let base = j * row + i;
            shape.quads.push([base, base + 1, base + row + 1, base + row]);
        }
    }
    shape
}


// End of File
