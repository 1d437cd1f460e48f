// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Tree skeletons grown by space colonization.
//!
//! A cloud of attraction points is scattered in a spherical crown above the root.  Branch tips
//! are steered toward the points in range and consume the points they get close to; every capture
//! gives the tip a chance to fork.  Branches are kept in a flat arena and refer to their parent
//! and children by index.

use crate::error::{ensure_nonzero, ensure_positive, ensure_unit_interval, ModelError, Result};
use crate::geometry::frame::segment_frame;
use crate::geometry::primitives::{make_sphere, make_uvcylinder};
use crate::geometry::sampling::{rand1, rand3};
use crate::sample_elimination::{eliminate_indices, EliminationParams};
use crate::scene::{Instance, Material, SceneData};
use crate::util::timer::Timer;
use glam::{Affine3A, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// Crown points are oversampled by this factor before being thinned to `crown_points_num`.
const CROWN_OVERSAMPLING: usize = 4;

/// Once a tree has forked more often than this, tips outside the crown stop growing.
const FORK_GUARD: usize = 2;

const BRANCH_COLOR: Vec3 = Vec3::new(0.24, 0.15, 0.08);
const CROWN_POINT_COLOR: Vec3 = Vec3::new(1.0, 0.0, 0.0);
const CROWN_POINT_RADIUS: f32 = 0.01;
const RANGE_COLOR: Vec3 = Vec3::new(0.8, 0.8, 0.8);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeParams {
    /// Length of every branch segment
    pub step_len: f32,
    /// Crown points closer than this attract a tip
    pub range: f32,
    /// Crown points closer than this are consumed by a tip
    pub kill_range: f32,
    pub crown_radius: f32,
    /// Distance of the crown center from the root, along the root normal
    pub crown_height: f32,
    /// Target spacing of the crown points
    pub crown_points_distance: f32,
    pub crown_points_num: usize,
    /// Upper bound on growth transitions
    pub steps: usize,
    pub fork_chance: f32,
    /// Thickness of the root segment
    pub thickness: f32,
    pub main_thickness_decrease: f32,
    pub division_thickness_decrease: f32,
    /// Points whose bearing has a dot product with the parent direction at or below this are
    /// ignored
    pub ignore_points_behind: f32,
    /// Weight of the jittered parent direction against the pull of the crown
    pub branch_strictness: f32,
    pub gravity: f32,
    pub show_crown_points: bool,
    pub show_range: bool,
    pub seed: u64,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            step_len: 0.02,
            range: 0.1,
            kill_range: 0.08,
            crown_radius: 0.4,
            crown_height: 0.8,
            crown_points_distance: 0.1,
            crown_points_num: 600,
            steps: 300,
            fork_chance: 0.4,
            thickness: 0.03,
            main_thickness_decrease: 0.99,
            division_thickness_decrease: 0.75,
            ignore_points_behind: -0.5,
            branch_strictness: 1.0,
            gravity: 0.0,
            show_crown_points: false,
            show_range: false,
            seed: 1234,
        }
    }
}

impl TreeParams {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("step_len", self.step_len)?;
        ensure_positive("range", self.range)?;
        ensure_positive("kill_range", self.kill_range)?;
        ensure_positive("crown_radius", self.crown_radius)?;
        ensure_positive("crown_points_distance", self.crown_points_distance)?;
        ensure_positive("thickness", self.thickness)?;
        ensure_nonzero("crown_points_num", self.crown_points_num)?;
        ensure_nonzero("steps", self.steps)?;
        ensure_unit_interval("fork_chance", self.fork_chance)?;
        ensure_unit_interval("main_thickness_decrease", self.main_thickness_decrease)?;
        ensure_unit_interval(
            "division_thickness_decrease",
            self.division_thickness_decrease,
        )?;
        if !self.crown_height.is_finite() {
            return Err(ModelError::invalid("crown_height", "must be finite"));
        }
        if !(-1.0..=1.0).contains(&self.ignore_points_behind) {
            return Err(ModelError::invalid(
                "ignore_points_behind",
                format!("must be within [-1, 1], got {}", self.ignore_points_behind),
            ));
        }
        if !self.branch_strictness.is_finite() || self.branch_strictness < 0.0 {
            return Err(ModelError::invalid(
                "branch_strictness",
                format!("must be non-negative, got {}", self.branch_strictness),
            ));
        }
        if !self.gravity.is_finite() {
            return Err(ModelError::invalid("gravity", "must be finite"));
        }
        Ok(())
    }

    /// Copy with every length scaled by `factor`.  Counts and ratios are unchanged.
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            step_len: self.step_len * factor,
            range: self.range * factor,
            kill_range: self.kill_range * factor,
            crown_radius: self.crown_radius * factor,
            crown_height: self.crown_height * factor,
            crown_points_distance: self.crown_points_distance * factor,
            thickness: self.thickness * factor,
            ..self.clone()
        }
    }
}

/// One segment of the skeleton.
#[derive(Clone, Debug, PartialEq)]
pub struct Branch {
    pub start: Vec3,
    pub end: Vec3,
    /// Unit growth direction
    pub direction: Vec3,
    /// Index of the parent branch.  The root is its own parent.
    pub parent_index: usize,
    pub thickness: f32,
    pub children: Vec<usize>,
}

impl Branch {
    fn grow(start: Vec3, direction: Vec3, length: f32, parent_index: usize, thickness: f32) -> Self {
        Self {
            start,
            end: start + direction * length,
            direction,
            parent_index,
            thickness,
            children: Vec::new(),
        }
    }

    pub fn is_root(&self, index: usize) -> bool {
        self.parent_index == index
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TreeSkeleton {
    /// Append-only branch arena; index 0 is the root.
    pub branches: Vec<Branch>,
    /// Crown points that were never captured.
    pub crown_points: Vec<Vec3>,
    pub crown_center: Vec3,
    pub forks: usize,
    /// Growth transitions actually taken.
    pub transitions: usize,
}

/// `w` mirrored about `n`.
fn reflect(w: Vec3, n: Vec3) -> Vec3 {
    -w + 2.0 * n.dot(w) * n
}

/// A branch starting outside the crown stops growing once the tree has forked enough.
fn is_dormant(start: Vec3, forks: usize, crown_center: Vec3, crown_radius: f32) -> bool {
    forks > FORK_GUARD && start.distance(crown_center) >= crown_radius
}

/// Points uniformly distributed inside a ball.
pub fn sample_crown(center: Vec3, radius: f32, count: usize, rng: &mut StdRng) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let r = rand3(rng);
            let z = 1.0 - 2.0 * r.x;
            let ring = (1.0 - z * z).max(0.0).sqrt();
            let phi = 2.0 * PI * r.y;
            let direction = Vec3::new(ring * phi.cos(), z, ring * phi.sin());
            center + direction * (radius * r.z.cbrt())
        })
        .collect()
}

/// Scatters the crown points and thins them to an even spread.
fn seed_crown(center: Vec3, params: &TreeParams, rng: &mut StdRng) -> Result<Vec<Vec3>> {
    let oversampled = sample_crown(
        center,
        params.crown_radius,
        params.crown_points_num * CROWN_OVERSAMPLING,
        rng,
    );
    let elimination = EliminationParams::new(
        params.crown_points_distance * 0.4,
        params.crown_points_distance * 0.8,
    );
    let kept = eliminate_indices(&oversampled, params.crown_points_num, &elimination)?;
    Ok(kept.into_iter().map(|i| oversampled[i]).collect())
}

/// Grows a skeleton from `start` along `normal`.
pub fn grow_tree(start: Vec3, normal: Vec3, params: &TreeParams) -> Result<TreeSkeleton> {
    params.validate()?;
    let normal = normal
        .try_normalize()
        .ok_or_else(|| ModelError::invalid("normal", "must be non-zero and finite"))?;

    let _timer = Timer::new("tree growth");
    let mut rng = StdRng::seed_from_u64(params.seed);
    let crown_center = start + normal * params.crown_height;
    let mut crown = seed_crown(crown_center, params, &mut rng)?;

    let mut branches = vec![Branch::grow(start, normal, params.step_len, 0, params.thickness)];
    let mut cursor = 0;
    let mut forks = 0;
    let mut transitions = 0;

    for _ in 0..params.steps {
        if cursor >= branches.len() || crown.is_empty() {
            break;
        }
        transitions += 1;

        let parent = &branches[cursor];
        let (parent_start, tip, parent_direction, parent_thickness) =
            (parent.start, parent.end, parent.direction, parent.thickness);

        if is_dormant(parent_start, forks, crown_center, params.crown_radius) {
            cursor += 1;
            continue;
        }

        let jitter = (parent_direction * rand3(&mut rng))
            .try_normalize()
            .unwrap_or(parent_direction);

        let mut attraction = Vec3::ZERO;
        let mut captured = 0;
        crown.retain(|&point| {
            let offset = point - tip;
            let distance = offset.length();
            if distance >= params.range {
                return true;
            }
            let Some(bearing) = offset.try_normalize() else {
                // Sitting exactly on the tip: consumed, but pulls nowhere.
                captured += 1;
                return false;
            };
            if bearing.dot(parent_direction) <= params.ignore_points_behind {
                return true;
            }
            attraction += bearing;
            if distance < params.kill_range {
                captured += 1;
                return false;
            }
            true
        });

        let mut blended = jitter * params.branch_strictness + attraction;
        blended.y -= params.gravity;
        let direction = match blended.try_normalize() {
            Some(direction) => direction,
            None => {
                log::debug!("branch {} has no growth direction, keeping its parent's", cursor);
                parent_direction
            }
        };

        if captured > 0 && rand1(&mut rng) < params.fork_chance {
            let fork_direction = (reflect(parent_direction, direction) * rand3(&mut rng))
                .try_normalize()
                .unwrap_or(direction);
            branches.push(Branch::grow(
                tip,
                fork_direction,
                params.step_len,
                cursor,
                parent_thickness * params.division_thickness_decrease,
            ));
            let fork_index = branches.len() - 1;
            branches[cursor].children.push(fork_index);
            forks += 1;
        }

        branches.push(Branch::grow(
            tip,
            direction,
            params.step_len,
            cursor,
            parent_thickness * params.main_thickness_decrease,
        ));
        let child_index = branches.len() - 1;
        branches[cursor].children.push(child_index);
        cursor += 1;

        if transitions % 50 == 0 {
            log::debug!(
                "tree step {}: {} branches, {} crown points left",
                transitions,
                branches.len(),
                crown.len()
            );
        }
    }

    log::info!(
        "grew {} branches with {} forks in {} steps, {} crown points left",
        branches.len(),
        forks,
        transitions,
        crown.len()
    );

    Ok(TreeSkeleton {
        branches,
        crown_points: crown,
        crown_center,
        forks,
        transitions,
    })
}

/// Grows a tree and appends it to `scene`: one cylinder instance per branch, plus the optional
/// crown point markers and range sphere.
pub fn generate_tree(
    scene: &mut SceneData,
    start: Vec3,
    normal: Vec3,
    params: &TreeParams,
) -> Result<TreeSkeleton> {
    let skeleton = grow_tree(start, normal, params)?;

    // Unit radius, unit length; each instance is stretched onto its branch.
    let cylinder = scene.add_shape("branch", make_uvcylinder(16, 1.0, 0.5));
    let bark = scene.add_material(Material::matte(BRANCH_COLOR));
    for branch in &skeleton.branches {
        let frame = segment_frame(branch.start, branch.end, 1.0, branch.thickness);
        scene.add_instance(Instance::new(frame, cylinder, bark));
    }

    if params.show_crown_points {
        let marker = scene.add_shape("crown_point", make_sphere(32, 16, CROWN_POINT_RADIUS));
        let red = scene.add_material(Material::matte(CROWN_POINT_COLOR));
        for &point in &skeleton.crown_points {
            scene.add_instance(Instance::new(Affine3A::from_translation(point), marker, red));
        }
    }

    if params.show_range {
        if let Some(last) = skeleton.branches.last() {
            let sphere = scene.add_shape("range", make_sphere(32, 16, params.range));
            let glass = scene.add_material(Material::transparent(RANGE_COLOR, 0.3));
            scene.add_instance(Instance::new(
                Affine3A::from_translation(last.end),
                sphere,
                glass,
            ));
        }
    }

    Ok(skeleton)
}


// End of File
