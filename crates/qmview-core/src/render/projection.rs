use crate::core::utils::geometry::tilt_rotation;
use nalgebra::{Point2, Point3, Rotation3};

pub const DEFAULT_TILT_X_DEGREES: f64 = 20.0;
pub const DEFAULT_TILT_Y_DEGREES: f64 = 20.0;

/// A point after projection: canvas coordinates plus its depth towards the viewer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub point: Point2<f64>,
    pub depth: f64,
}

/// Orthographic projection after a fixed tilt: rotate about X, then about Y, then drop z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    rotation: Rotation3<f64>,
}

impl Projection {
    pub fn tilted(x_degrees: f64, y_degrees: f64) -> Self {
        Self {
            rotation: tilt_rotation(x_degrees, y_degrees),
        }
    }

    pub fn identity() -> Self {
        Self {
            rotation: Rotation3::identity(),
        }
    }

    pub fn project(&self, point: &Point3<f64>) -> Projected {
        let rotated = self.rotation * point;
        Projected {
            point: Point2::new(rotated.x, rotated.y),
            depth: rotated.z,
        }
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::tilted(DEFAULT_TILT_X_DEGREES, DEFAULT_TILT_Y_DEGREES)
    }
}
