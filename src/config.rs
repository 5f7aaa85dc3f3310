//! Presentation settings shared by the figure builder and both backends.

use crate::camera::Camera;

/// Where a figure is presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Backend {
    /// Interactive window, blocks until closed.
    #[default]
    Window,
    /// Text rendering printed to stdout.
    Ascii,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    pub backend: Backend,
    pub camera: Camera,
    /// Samples along each of the polar and azimuthal directions of the sphere mesh.
    pub mesh_density: usize,
    pub surface_alpha: f32,
    /// Arrow head length as a fraction of the arrow length.
    pub arrow_head_ratio: f64,
    pub arrow_width: f32,
    pub axis_width: f32,
    pub label_size: f32,
    pub title_size: f32,
    /// Window size in logical pixels.
    pub window_size: [f32; 2],
    /// ASCII canvas size in character cells.
    pub ascii_size: [usize; 2],
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            backend: Backend::default(),
            camera: Camera::default(),
            mesh_density: 100,
            surface_alpha: 0.3,
            arrow_head_ratio: 0.15,
            arrow_width: 3.0,
            axis_width: 1.0,
            label_size: 11.0,
            title_size: 16.0,
            window_size: [666.0, 400.0],
            ascii_size: [72, 32],
        }
    }
}
