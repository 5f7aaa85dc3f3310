//! Interactive window backend built on egui.
//!
//! The figure is projected with the figure camera on every frame; dragging orbits a local copy of the
//! camera and double-clicking restores the figure's own viewpoint.

use eframe::egui;
use tracing::{debug, info};

use crate::{
    camera::{Camera, Projected},
    config::RenderConfig,
    error::BlochError,
    figure::{Figure, Point3, Primitive},
};

const STATE_RED: egui::Color32 = egui::Color32::from_rgb(214, 39, 40);
const AXIS_BLACK: egui::Color32 = egui::Color32::from_rgb(20, 20, 20);
const BOX_GREY: egui::Color32 = egui::Color32::from_rgb(190, 190, 190);
const TEXT_DARK: egui::Color32 = egui::Color32::from_rgb(30, 30, 30);

const VIRIDIS: [(u8, u8, u8); 5] = [
    (68, 1, 84),
    (59, 82, 139),
    (33, 145, 140),
    (94, 201, 98),
    (253, 231, 37),
];

/// Sample the viridis ramp at `t ∈ [0, 1]`.
fn viridis(t: f64, alpha: f32) -> egui::Color32 {
    let t = t.clamp(0.0, 1.0) * (VIRIDIS.len() - 1) as f64;
    let i = (t.floor() as usize).min(VIRIDIS.len() - 2);
    let f = t - i as f64;
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * f).round() as u8;
    let (r0, g0, b0) = VIRIDIS[i];
    let (r1, g1, b1) = VIRIDIS[i + 1];
    egui::Color32::from_rgba_unmultiplied(
        lerp(r0, r1),
        lerp(g0, g1),
        lerp(b0, b1),
        (alpha.clamp(0.0, 1.0) * 255.0) as u8,
    )
}

/// Maps projected scene coordinates into a screen rectangle.
#[derive(Clone, Copy)]
struct Screen {
    camera: Camera,
    center: egui::Pos2,
    scale: f32,
}

impl Screen {
    fn new(camera: Camera, rect: egui::Rect) -> Self {
        Screen {
            camera,
            center: rect.center() + egui::vec2(0.0, 12.0),
            scale: rect.width().min(rect.height()) * 0.34,
        }
    }

    fn project(&self, p: Point3) -> (egui::Pos2, f64) {
        let Projected { x, y, depth } = self.camera.project(p);
        (
            egui::pos2(
                self.center.x + x as f32 * self.scale,
                self.center.y - y as f32 * self.scale,
            ),
            depth,
        )
    }

    fn pos(&self, p: Point3) -> egui::Pos2 {
        self.project(p).0
    }
}

struct BlochApp {
    figure: Figure,
    config: RenderConfig,
    camera: Camera,
}

impl BlochApp {
    fn new(figure: Figure, config: RenderConfig) -> Self {
        BlochApp {
            camera: figure.camera,
            figure,
            config,
        }
    }

    fn draw_box(&self, painter: &egui::Painter, screen: &Screen) {
        let [[x0, x1], [y0, y1], [z0, z1]] = self.figure.axes.limits;
        let stroke = egui::Stroke::new(0.6, BOX_GREY);
        for (a, b) in [
            ([x0, y0, z0], [x1, y0, z0]),
            ([x0, y1, z0], [x1, y1, z0]),
            ([x0, y0, z0], [x0, y1, z0]),
            ([x1, y0, z0], [x1, y1, z0]),
            ([x0, y1, z0], [x0, y1, z1]),
            ([x1, y1, z0], [x1, y1, z1]),
            ([x0, y1, z1], [x1, y1, z1]),
        ] {
            painter.line_segment([screen.pos(a), screen.pos(b)], stroke);
        }

        let font = egui::FontId::proportional(self.config.label_size - 2.0);
        for &t in &self.figure.axes.ticks {
            let tx = t.clamp(x0, x1);
            let ty = t.clamp(y0, y1);
            let tz = t.clamp(z0, z1);
            for (at, text) in [
                ([tx, y0 - 0.15, z0], t),
                ([x1 + 0.15, ty, z0], t),
                ([x0 - 0.15, y1, tz], t),
            ] {
                painter.text(
                    screen.pos(at),
                    egui::Align2::CENTER_CENTER,
                    format!("{text}"),
                    font.clone(),
                    TEXT_DARK,
                );
            }
        }

        let name_font = egui::FontId::proportional(self.config.label_size);
        let [nx, ny, nz] = self.figure.axes.names;
        for (at, name) in [
            ([0.0, y0 - 0.4, z0], nx),
            ([x1 + 0.4, 0.0, z0], ny),
            ([x0 - 0.4, y1, 0.0], nz),
        ] {
            painter.text(
                screen.pos(at),
                egui::Align2::CENTER_CENTER,
                name,
                name_font.clone(),
                TEXT_DARK,
            );
        }
    }

    fn draw_surface(&self, painter: &egui::Painter, screen: &Screen, grid: &[Vec<Point3>]) {
        let mut quads = Vec::new();
        for (row, next) in grid.iter().zip(grid.iter().skip(1)) {
            for j in 0..row.len().min(next.len()).saturating_sub(1) {
                let corners = [row[j], row[j + 1], next[j + 1], next[j]];
                let projected = corners.map(|p| screen.project(p));
                let depth = projected.iter().map(|(_, d)| d).sum::<f64>() / 4.0;
                let z = corners.iter().map(|p| p[2]).sum::<f64>() / 4.0;
                quads.push((depth, z, projected.map(|(pos, _)| pos)));
            }
        }
        // Back to front, so nearer patches blend over farther ones.
        quads.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut mesh = egui::Mesh::default();
        for (_, z, [p0, p1, p2, p3]) in quads {
            let color = viridis((z + 1.0) / 2.0, self.config.surface_alpha);
            let base = mesh.vertices.len() as u32;
            for p in [p0, p1, p2, p3] {
                mesh.colored_vertex(p, color);
            }
            mesh.add_triangle(base, base + 1, base + 2);
            mesh.add_triangle(base, base + 2, base + 3);
        }
        painter.add(egui::Shape::mesh(mesh));
    }

    fn draw_arrow(&self, painter: &egui::Painter, screen: &Screen, tail: Point3, tip: Point3, ratio: f64) {
        let stroke = egui::Stroke::new(self.config.arrow_width, STATE_RED);
        let (t0, t1) = (screen.pos(tail), screen.pos(tip));
        painter.line_segment([t0, t1], stroke);

        let shaft = t1 - t0;
        if shaft.length() < f32::EPSILON {
            return;
        }
        let head = shaft * ratio as f32;
        let normal = egui::vec2(-head.y, head.x) * 0.5;
        painter.line_segment([t1, t1 - head + normal], stroke);
        painter.line_segment([t1, t1 - head - normal], stroke);
    }

    fn paint(&self, painter: &egui::Painter, rect: egui::Rect) {
        painter.rect_filled(rect, 0.0, egui::Color32::WHITE);
        let screen = Screen::new(self.camera, rect);
        self.draw_box(painter, &screen);

        let label_font = egui::FontId::proportional(self.config.label_size);
        for primitive in &self.figure.primitives {
            match primitive {
                Primitive::Surface { grid } => self.draw_surface(painter, &screen, grid),
                Primitive::Segment { from, to } => {
                    painter.line_segment(
                        [screen.pos(*from), screen.pos(*to)],
                        egui::Stroke::new(self.config.axis_width, AXIS_BLACK),
                    );
                }
                Primitive::Path { points } => {
                    let line: Vec<_> = points.iter().map(|p| screen.pos(*p)).collect();
                    painter.add(egui::Shape::line(line, egui::Stroke::new(1.5, STATE_RED)));
                }
                Primitive::Arrow {
                    tail,
                    tip,
                    head_ratio,
                } => self.draw_arrow(painter, &screen, *tail, *tip, *head_ratio),
                Primitive::Text { at, text } => {
                    painter.text(
                        screen.pos(*at),
                        egui::Align2::LEFT_BOTTOM,
                        text,
                        label_font.clone(),
                        TEXT_DARK,
                    );
                }
            }
        }

        painter.text(
            rect.center_top() + egui::vec2(0.0, 8.0),
            egui::Align2::CENTER_TOP,
            &self.figure.title,
            egui::FontId::proportional(self.config.title_size),
            TEXT_DARK,
        );
    }
}

impl eframe::App for BlochApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
                if response.dragged() {
                    let delta = response.drag_delta();
                    self.camera = self
                        .camera
                        .orbit(-delta.x as f64 * 0.4, delta.y as f64 * 0.4);
                }
                if response.double_clicked() {
                    self.camera = self.figure.camera;
                }
                self.paint(&painter, response.rect);
            });
    }
}

/// Open a window showing `figure`, blocking until it is closed.
pub fn show(figure: Figure, config: &RenderConfig) -> Result<(), BlochError> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title(figure.title.clone()),
        ..Default::default()
    };
    info!(title = %figure.title, "opening plot window");
    let app = BlochApp::new(figure, config.clone());
    eframe::run_native("bloch", options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|e| BlochError::Display(e.to_string()))?;
    debug!("plot window closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viridis_endpoints() {
        assert_eq!(viridis(0.0, 1.0), egui::Color32::from_rgb(68, 1, 84));
        assert_eq!(viridis(1.0, 1.0), egui::Color32::from_rgb(253, 231, 37));
        assert_eq!(viridis(7.0, 1.0), viridis(1.0, 1.0));
    }

    #[test]
    fn origin_maps_to_screen_center() {
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(600.0, 400.0));
        let screen = Screen::new(Camera::default(), rect);
        let (pos, depth) = screen.project([0.0; 3]);
        assert_eq!(pos, screen.center);
        assert_eq!(depth, 0.0);
        // +z is drawn above the centre.
        assert!(screen.pos([0.0, 0.0, 1.0]).y < screen.center.y);
    }
}
