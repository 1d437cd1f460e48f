// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use glam::{Affine3A, Mat3, Quat, Vec3};

/// Orthonormal basis whose y axis is `normal` and whose x axis is the world X axis projected onto
/// the plane orthogonal to `normal`.  Falls back to an arbitrary orthonormal pair when `normal` is
/// parallel to X.
pub fn basis_from_normal(normal: Vec3) -> Mat3 {
    let y = normal.try_normalize().unwrap_or(Vec3::Y);
    let x = (Vec3::X - Vec3::X.dot(y) * y)
        .try_normalize()
        .unwrap_or_else(|| y.any_orthonormal_vector());
    let z = x.cross(y);
    Mat3::from_cols(x, y, z)
}

/// Frame placing a template authored around the origin at `origin`, with its +Y axis along
/// `normal`.
pub fn surface_frame(origin: Vec3, normal: Vec3) -> Affine3A {
    Affine3A::from_mat3_translation(basis_from_normal(normal), origin)
}

/// Frame that stretches a +Y aligned unit template between `start` and `end`.
///
/// `radial_scale` scales the template across the segment, the length is taken from the segment.
/// `template_length` is the full +Y extent of the template.
pub fn segment_frame(start: Vec3, end: Vec3, template_length: f32, radial_scale: f32) -> Affine3A {
    let axis = end - start;
    let length = axis.length();
    let rotation = match axis.try_normalize() {
        Some(direction) => Quat::from_rotation_arc(Vec3::Y, direction),
        None => Quat::IDENTITY,
    };
    let axial_scale = if template_length > 0.0 {
        length / template_length
    } else {
        1.0
    };
    Affine3A::from_scale_rotation_translation(
        Vec3::new(radial_scale, axial_scale, radial_scale),
        rotation,
        (start + end) * 0.5,
    )
}


// End of File
