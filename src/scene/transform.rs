use glam::{DAffine3, DMat3, DMat4, DQuat, DVec3, EulerRot};
use serde::{Deserialize, Serialize};

/// Euler convention of every exported rotation: X applied first, then Y, then Z
/// about the fixed world axes (matrix `Rz * Ry * Rx`).
pub const EXPORT_EULER: EulerRot = EulerRot::XYZEx;

/// Determinant magnitude below which a transform is treated as singular.
pub const SINGULAR_EPSILON: f64 = 1e-12;

/// Object-to-world 4x4 affine transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldTransform(DMat4);

/// Translation / rotation / scale split of a [`WorldTransform`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decomposed {
    pub translation: DVec3,
    pub rotation: DQuat,
    /// Rotation as XYZ Euler angles in radians (see [`EXPORT_EULER`]).
    pub euler_xyz: DVec3,
    /// Per-axis scale as column lengths, never negative.
    pub scale: DVec3,
    /// Set when the linear part is singular; rotation is then identity and
    /// `scale` holds the raw column lengths.
    pub degenerate: bool,
}

impl Decomposed {
    /// True when all three axis scales agree within `tolerance` (absolute).
    #[must_use]
    pub fn is_uniform_scale(&self, tolerance: f64) -> bool {
        let s = self.scale;
        (s.x - s.y).abs() < tolerance && (s.x - s.z).abs() < tolerance
    }
}

impl WorldTransform {
    pub const IDENTITY: Self = Self(DMat4::IDENTITY);

    #[must_use]
    pub fn from_mat4(mat: DMat4) -> Self {
        Self(mat)
    }

    /// Builds from 16 column-major values.
    #[must_use]
    pub fn from_cols_array(cols: &[f64; 16]) -> Self {
        Self(DMat4::from_cols_array(cols))
    }

    #[must_use]
    pub fn from_scale_rotation_translation(scale: DVec3, rotation: DQuat, translation: DVec3) -> Self {
        Self(DMat4::from_scale_rotation_translation(scale, rotation, translation))
    }

    /// Helper: translation + XYZ Euler rotation + per-axis scale.
    #[must_use]
    pub fn from_trs_euler(translation: DVec3, euler_xyz: DVec3, scale: DVec3) -> Self {
        let rotation = DQuat::from_euler(EXPORT_EULER, euler_xyz.x, euler_xyz.y, euler_xyz.z);
        Self::from_scale_rotation_translation(scale, rotation, translation)
    }

    #[inline]
    #[must_use]
    pub fn matrix(&self) -> &DMat4 {
        &self.0
    }

    /// Upper-left 3x3 (rotation and scale, no translation).
    #[inline]
    #[must_use]
    pub fn linear(&self) -> DMat3 {
        DMat3::from_mat4(self.0)
    }

    #[inline]
    #[must_use]
    pub fn translation(&self) -> DVec3 {
        self.0.w_axis.truncate()
    }

    #[inline]
    #[must_use]
    pub fn transform_point(&self, point: DVec3) -> DVec3 {
        self.0.transform_point3(point)
    }

    #[inline]
    #[must_use]
    pub fn transform_vector(&self, vector: DVec3) -> DVec3 {
        self.0.transform_vector3(vector)
    }

    /// Splits the transform into translation, rotation and per-axis scale.
    ///
    /// Shear is lost. Scale is always the (non-negative) column lengths; a
    /// reflection only shows up in the rotation glam extracts after
    /// flipping the x axis.
    /// Singular input does not fail: see [`Decomposed::degenerate`].
    #[must_use]
    pub fn decompose(&self) -> Decomposed {
        let affine = DAffine3::from_mat4(self.0);
        let translation = affine.translation;

        if affine.matrix3.determinant().abs() <= SINGULAR_EPSILON {
            let m = affine.matrix3;
            return Decomposed {
                translation,
                rotation: DQuat::IDENTITY,
                euler_xyz: DVec3::ZERO,
                scale: DVec3::new(m.x_axis.length(), m.y_axis.length(), m.z_axis.length()),
                degenerate: true,
            };
        }

        let (scale, rotation, translation) = affine.to_scale_rotation_translation();
        let (x, y, z) = rotation.to_euler(EXPORT_EULER);

        Decomposed {
            translation,
            rotation,
            euler_xyz: DVec3::new(x, y, z),
            scale: scale.abs(),
            degenerate: false,
        }
    }
}

impl Default for WorldTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<DMat4> for WorldTransform {
    fn from(mat: DMat4) -> Self {
        Self(mat)
    }
}
