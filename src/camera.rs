//! Orthographic 3D → 2D projection from an elevation/azimuth viewpoint.

/// Viewpoint on the scene, angles in degrees.
///
/// Azimuth rotates about +z starting from the +x axis; elevation lifts the eye above the xy-plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub elevation: f64,
    pub azimuth: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Camera {
            elevation: 30.0,
            azimuth: 25.0,
        }
    }
}

/// A projected point: screen coordinates with `+y` up, and depth towards the eye.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
}

impl Camera {
    pub fn new(elevation: f64, azimuth: f64) -> Self {
        Camera {
            elevation,
            azimuth,
        }
    }

    /// Unit vector pointing from the origin to the eye.
    pub fn eye(&self) -> [f64; 3] {
        let (se, ce) = self.elevation.to_radians().sin_cos();
        let (sa, ca) = self.azimuth.to_radians().sin_cos();
        [ce * ca, ce * sa, se]
    }

    pub fn project(&self, p: [f64; 3]) -> Projected {
        let (se, ce) = self.elevation.to_radians().sin_cos();
        let (sa, ca) = self.azimuth.to_radians().sin_cos();
        let [x, y, z] = p;
        Projected {
            x: -x * sa + y * ca,
            y: -x * se * ca - y * se * sa + z * ce,
            depth: x * ce * ca + y * ce * sa + z * se,
        }
    }

    /// Orbit by a screen-space drag, clamping elevation so the view never flips.
    pub fn orbit(self, d_azimuth: f64, d_elevation: f64) -> Self {
        Camera {
            elevation: (self.elevation + d_elevation).clamp(-89.0, 89.0),
            azimuth: (self.azimuth + d_azimuth).rem_euclid(360.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn eye_direction_collapses_to_origin() {
        let cam = Camera::default();
        let p = cam.project(cam.eye());
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.depth, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn z_axis_points_up_on_screen() {
        let p = Camera::default().project([0.0, 0.0, 1.0]);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
        assert!(p.y > 0.0);
    }

    #[test]
    fn projection_preserves_length() {
        let cam = Camera::new(12.0, 200.0);
        let p = cam.project([0.3, -0.4, 0.5]);
        let len = (p.x * p.x + p.y * p.y + p.depth * p.depth).sqrt();
        assert_relative_eq!(len, (0.5f64).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn orbit_clamps_elevation() {
        let cam = Camera::default().orbit(400.0, 100.0);
        assert_eq!(cam.elevation, 89.0);
        assert_relative_eq!(cam.azimuth, 65.0, epsilon = 1e-9);
    }
}
