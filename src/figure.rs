//! Backend-independent description of a Bloch sphere plot.
//!
//! A [`Figure`] is an ordered list of 3D primitives plus the axis and camera settings needed to draw
//! them. Backends paint primitives in list order, so later primitives sit on top.

use std::f64::consts::PI;

use tracing::debug;

use crate::{
    bloch::BlochVector,
    camera::Camera,
    config::RenderConfig,
    ket::{Ket, KetState},
    text::ToDoc,
    trajectory::Trajectory,
};

/// Label used when the caller gives none.
pub const DEFAULT_LABEL: &str = "|ψ⟩";

/// Distance from the origin at which pole labels are placed.
pub const POLE_LABEL_RADIUS: f64 = 1.2;

pub type Point3 = [f64; 3];

/// Fixed axis limits, ticks and names.
#[derive(Clone, Debug, PartialEq)]
pub struct Axes3 {
    pub limits: [[f64; 2]; 3],
    pub ticks: Vec<f64>,
    pub names: [&'static str; 3],
}

impl Default for Axes3 {
    fn default() -> Self {
        Axes3 {
            limits: [[-1.1, 1.1], [-1.1, 1.1], [-1.0, 1.0]],
            ticks: vec![-1.0, 0.0, 1.0],
            names: ["X", "Y", "Z"],
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// Translucent surface sampled on a regular grid, `grid[row][col]`.
    Surface { grid: Vec<Vec<Point3>> },
    /// Reference line, drawn thin and black.
    Segment { from: Point3, to: Point3 },
    /// Connected polyline through the points in order.
    Path { points: Vec<Point3> },
    /// Arrow from `tail` to `tip` with a head `head_ratio` of its length.
    Arrow {
        tail: Point3,
        tip: Point3,
        head_ratio: f64,
    },
    Text { at: Point3, text: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    pub title: String,
    pub label: String,
    pub axes: Axes3,
    pub camera: Camera,
    pub primitives: Vec<Primitive>,
}

/// Points of a sphere of radius `r`, sampled `n × n` over polar and azimuthal angles.
pub fn sphere_mesh(r: f64, n: usize) -> Vec<Vec<Point3>> {
    let n = n.max(2);
    let step = |i: usize, span: f64| span * i as f64 / (n - 1) as f64;
    (0..n)
        .map(|i| {
            let polar = step(i, PI);
            (0..n)
                .map(|j| {
                    let azimuth = step(j, 2.0 * PI);
                    [
                        r * polar.sin() * azimuth.cos(),
                        r * polar.sin() * azimuth.sin(),
                        r * polar.cos(),
                    ]
                })
                .collect()
        })
        .collect()
}

impl Figure {
    /// Sphere, axis lines and pole labels shared by both plot modes.
    fn scaffold(label: Option<&str>, title: Option<&str>, config: &RenderConfig) -> Self {
        let label = label.unwrap_or(DEFAULT_LABEL).to_owned();
        let title = title
            .map(str::to_owned)
            .unwrap_or_else(|| format!("Bloch Sphere ({label})"));

        let mut primitives = Vec::with_capacity(16);
        for e in [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]] {
            primitives.push(Primitive::Segment {
                from: e.map(|c: f64| -c),
                to: e,
            });
        }
        primitives.push(Primitive::Surface {
            grid: sphere_mesh(1.0, config.mesh_density),
        });
        for state in KetState::ALL {
            let at = BlochVector::from_ket(&state.to_ket()).scale(POLE_LABEL_RADIUS);
            primitives.push(Primitive::Text {
                at: at.to_array(),
                text: state.label(),
            });
        }

        Figure {
            title,
            label,
            axes: Axes3::default(),
            camera: config.camera,
            primitives,
        }
    }

    fn push_state(&mut self, vector: BlochVector, config: &RenderConfig) {
        self.primitives.push(Primitive::Arrow {
            tail: [0.0; 3],
            tip: vector.to_array(),
            head_ratio: config.arrow_head_ratio,
        });
        self.primitives.push(Primitive::Text {
            at: vector.to_array(),
            text: self.label.clone(),
        });
    }

    /// Figure for a single state.
    pub fn vector(ket: &Ket, label: Option<&str>, title: Option<&str>, config: &RenderConfig) -> Self {
        let vector = BlochVector::from_ket(ket);
        debug!(
            ket = %ket.to_pretty(80),
            vector = %vector,
            norm_sqr = ket.norm_sqr(),
            "building single-vector figure"
        );
        let mut figure = Figure::scaffold(label, title, config);
        figure.push_state(vector, config);
        figure
    }

    /// Figure for an evolution: the whole path, with the arrow on the last state.
    pub fn trajectory(
        trajectory: &Trajectory,
        label: Option<&str>,
        title: Option<&str>,
        config: &RenderConfig,
    ) -> Self {
        let path = trajectory.bloch_path();
        let current = BlochVector::from_ket(trajectory.current());
        debug!(
            points = path.len(),
            current = %current,
            "building trajectory figure"
        );
        let mut figure = Figure::scaffold(label, title, config);
        figure.primitives.push(Primitive::Path {
            points: path.into_iter().map(BlochVector::to_array).collect(),
        });
        figure.push_state(current, config);
        figure
    }

    /// The arrow of the plotted state, if any.
    pub fn arrow(&self) -> Option<(Point3, Point3)> {
        self.primitives.iter().find_map(|p| match p {
            Primitive::Arrow { tail, tip, .. } => Some((*tail, *tip)),
            _ => None,
        })
    }

    /// The trajectory path, if any.
    pub fn path(&self) -> Option<&[Point3]> {
        self.primitives.iter().find_map(|p| match p {
            Primitive::Path { points } => Some(points.as_slice()),
            _ => None,
        })
    }

    /// All text annotations in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = (&Point3, &str)> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text { at, text } => Some((at, text.as_str())),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn mesh_lies_on_sphere() {
        let grid = sphere_mesh(1.0, 7);
        assert_eq!(grid.len(), 7);
        assert!(grid.iter().all(|row| row.len() == 7));
        for p in grid.iter().flatten() {
            let r = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
            assert_relative_eq!(r, 1.0, epsilon = 1e-12);
        }
        assert_relative_eq!(grid[0][0][2], 1.0);
        assert_relative_eq!(grid[6][3][2], -1.0);
    }

    #[test]
    fn default_title_mentions_label() {
        let config = RenderConfig::default();
        let fig = Figure::vector(&KetState::Zero.to_ket(), None, None, &config);
        assert_eq!(fig.title, "Bloch Sphere (|ψ⟩)");
        let fig = Figure::vector(&KetState::Zero.to_ket(), Some("a"), Some("t"), &config);
        assert_eq!(fig.title, "t");
        assert_eq!(fig.label, "a");
    }

    #[test]
    fn six_distinct_pole_labels() {
        let config = RenderConfig {
            mesh_density: 4,
            ..RenderConfig::default()
        };
        let fig = Figure::vector(&KetState::Plus.to_ket(), Some("ψ"), None, &config);
        let poles: Vec<_> = fig.texts().filter(|(_, t)| *t != "ψ").collect();
        assert_eq!(poles.len(), 6);
        let (at, _) = poles.iter().find(|(_, t)| *t == "|−i⟩").unwrap();
        assert_relative_eq!(at[1], -POLE_LABEL_RADIUS, epsilon = 1e-12);
    }
}
