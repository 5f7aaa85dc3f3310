//! Headless text backend: projects a figure onto a grid of character cells.

use std::f64::consts::TAU;

use tracing::info;

use crate::{
    camera::Camera,
    config::RenderConfig,
    figure::{Figure, Point3, Primitive},
};

/// Half-extent of the scene that fits in the canvas, in scene units.
const EXTENT: f64 = 1.45;

struct Canvas {
    cells: Vec<Vec<char>>,
    camera: Camera,
}

impl Canvas {
    fn new(camera: Camera, [width, height]: [usize; 2]) -> Self {
        Canvas {
            cells: vec![vec![' '; width.max(8)]; height.max(4)],
            camera,
        }
    }

    fn width(&self) -> usize {
        self.cells[0].len()
    }

    fn height(&self) -> usize {
        self.cells.len()
    }

    /// Cell of a screen-plane point, `None` when it falls outside the canvas.
    fn screen_cell(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        let (w, h) = (self.width() as f64, self.height() as f64);
        let col = (w / 2.0 + x / EXTENT * (w / 2.0)).round();
        let row = (h / 2.0 - y / EXTENT * (h / 2.0)).round();
        (col >= 0.0 && row >= 0.0 && col < w && row < h).then_some((col as usize, row as usize))
    }

    fn cell(&self, p: Point3) -> Option<(usize, usize)> {
        let q = self.camera.project(p);
        self.screen_cell(q.x, q.y)
    }

    fn plot_screen(&mut self, x: f64, y: f64, c: char) {
        if let Some((col, row)) = self.screen_cell(x, y) {
            self.cells[row][col] = c;
        }
    }

    fn plot(&mut self, p: Point3, c: char) {
        if let Some((col, row)) = self.cell(p) {
            self.cells[row][col] = c;
        }
    }

    fn line(&mut self, from: Point3, to: Point3, c: char) {
        let steps = (self.width().max(self.height()) * 2).max(2);
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let p = [0, 1, 2].map(|k| from[k] + (to[k] - from[k]) * t);
            self.plot(p, c);
        }
    }

    /// Write `text` starting one cell right of its anchor, clipped at the canvas edge.
    /// On canvases much smaller than the default, later primitives may overwrite labels.
    fn text(&mut self, at: Point3, text: &str) {
        if let Some((col, row)) = self.cell(at) {
            let width = self.width();
            let start = (col + 1).min(width);
            for (cell, c) in self.cells[row][start..width].iter_mut().zip(text.chars()) {
                *cell = c;
            }
        }
    }

    fn finish(self) -> String {
        let mut out = String::new();
        for row in self.cells {
            let line: String = row.into_iter().collect();
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

/// Render `figure` as text: the title followed by the projected scene.
pub fn render(figure: &Figure, config: &RenderConfig) -> String {
    let mut canvas = Canvas::new(figure.camera, config.ascii_size);

    for primitive in &figure.primitives {
        match primitive {
            Primitive::Surface { grid } => {
                // Silhouette plus the front half of the equator stand in for the shaded surface.
                let n = 4 * canvas.width();
                for i in 0..n {
                    let (s, c) = (TAU * i as f64 / n as f64).sin_cos();
                    canvas.plot_screen(c, s, '·');
                }
                if let Some(row) = grid.get(grid.len() / 2) {
                    for p in row {
                        if figure.camera.project(*p).depth >= 0.0 {
                            canvas.plot(*p, '.');
                        }
                    }
                }
            }
            Primitive::Segment { from, to } => canvas.line(*from, *to, ':'),
            Primitive::Path { points } => {
                for pair in points.windows(2) {
                    canvas.line(pair[0], pair[1], '*');
                }
                if let [only] = points.as_slice() {
                    canvas.plot(*only, '*');
                }
            }
            Primitive::Arrow { tail, tip, .. } => {
                canvas.line(*tail, *tip, '#');
                canvas.plot(*tip, '@');
            }
            Primitive::Text { at, text } => canvas.text(*at, text),
        }
    }

    info!(title = %figure.title, "rendered figure as text");
    format!("{}\n{}", figure.title, canvas.finish())
}
