// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules.

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod error;
    pub mod traits;
    pub mod vector;
    pub mod vector2;
    pub mod vector3;
    pub mod vector4;
}

pub use types::error::VectorError;
pub use types::traits::{CastFrom, Element, Scalar};
pub use types::vector::Vector;
pub use types::vector2::{Vector2, Vector2b, Vector2d, Vector2f, Vector2i};
pub use types::vector3::{Vector3, Vector3b, Vector3d, Vector3f, Vector3i};
pub use types::vector4::{Vector4, Vector4b, Vector4d, Vector4f, Vector4i};
