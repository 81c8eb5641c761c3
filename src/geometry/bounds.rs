use glam::DVec3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: DVec3,
    pub max: DVec3,
}

impl BoundingBox {
    #[must_use]
    pub fn new(a: DVec3, b: DVec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Bounds of a point set, `None` when the set is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = DVec3>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::new(first, first), |bb, p| Self {
            min: bb.min.min(p),
            max: bb.max.max(p),
        }))
    }

    #[must_use]
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    #[must_use]
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Index of the axis with the smallest extent (0 = x, 1 = y, 2 = z).
    ///
    /// Ties resolve towards z, then y, so a flat square defaults to the XY plane.
    #[must_use]
    pub fn thinnest_axis(&self) -> usize {
        let size = self.size();
        if size.z <= size.x && size.z <= size.y {
            2
        } else if size.y <= size.x {
            1
        } else {
            0
        }
    }

    /// The four corners of the face on the `min` side of the thinnest axis.
    ///
    /// For a flat mesh this face is the mesh's own rectangle, which makes it
    /// the useful quad to export when no polygon data is available.
    #[must_use]
    pub fn flat_face(&self) -> [DVec3; 4] {
        let (lo, hi) = (self.min, self.max);
        match self.thinnest_axis() {
            0 => [
                DVec3::new(lo.x, lo.y, lo.z),
                DVec3::new(lo.x, hi.y, lo.z),
                DVec3::new(lo.x, hi.y, hi.z),
                DVec3::new(lo.x, lo.y, hi.z),
            ],
            1 => [
                DVec3::new(lo.x, lo.y, lo.z),
                DVec3::new(hi.x, lo.y, lo.z),
                DVec3::new(hi.x, lo.y, hi.z),
                DVec3::new(lo.x, lo.y, hi.z),
            ],
            _ => [
                DVec3::new(lo.x, lo.y, lo.z),
                DVec3::new(hi.x, lo.y, lo.z),
                DVec3::new(hi.x, hi.y, lo.z),
                DVec3::new(lo.x, hi.y, lo.z),
            ],
        }
    }
}
