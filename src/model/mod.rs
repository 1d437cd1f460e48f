// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Generators that turn surfaces into procedural detail.

pub mod displacement;
pub mod grass;
pub mod hair;
pub mod tree;
pub mod woods;

pub use displacement::{
    make_displacement, make_terrain, DisplacementMode, DisplacementParams, TerrainMode,
    TerrainParams,
};
pub use grass::{make_grass, GrassParams};
pub use hair::{make_dense_hair, make_hair, make_hair_sample_elimination, HairParams};
pub use tree::{generate_tree, grow_tree, Branch, TreeParams, TreeSkeleton};
pub use woods::{make_woods, WoodsParams};

// End of File
