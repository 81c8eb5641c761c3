pub mod box_shape;
pub mod plane;
pub mod sphere;

pub use box_shape::create_box;
pub use plane::{create_plane, PlaneOptions};
pub use sphere::{create_uv_sphere, SphereOptions};
