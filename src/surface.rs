use season_core::{EffectError, EffectKind, Paint, Painter, Path, PathCmd, Surface, Viewport};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::constants::{canvas_id, canvas_style, CANVAS_Z_INDEX};

/// One overlay `<canvas>` with its 2D context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    width: f32,
    height: f32,
}

#[inline]
fn host_err(e: JsValue) -> EffectError {
    EffectError::Host(format!("{:?}", e))
}

impl CanvasSurface {
    pub fn create(
        document: &web::Document,
        kind: EffectKind,
        viewport: Viewport,
    ) -> Result<Self, EffectError> {
        let canvas = document
            .create_element("canvas")
            .map_err(host_err)?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|_| EffectError::UnsupportedSurface(kind))?;
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
            .ok_or(EffectError::UnsupportedSurface(kind))?;

        canvas.set_id(&canvas_id(kind.name()));
        _ = canvas.set_attribute("style", &canvas_style(CANVAS_Z_INDEX));
        _ = canvas.set_attribute("aria-hidden", "true");
        let body = document
            .body()
            .ok_or_else(|| EffectError::Host("document has no body".to_string()))?;
        body.append_child(&canvas).map_err(host_err)?;

        let mut surface = Self {
            canvas,
            ctx,
            width: 0.0,
            height: 0.0,
        };
        Surface::resize(&mut surface, viewport);
        Ok(surface)
    }

    fn trace(&self, path: &Path) {
        self.ctx.begin_path();
        for cmd in path.commands() {
            match *cmd {
                PathCmd::MoveTo(p) => self.ctx.move_to(p.x as f64, p.y as f64),
                PathCmd::LineTo(p) => self.ctx.line_to(p.x as f64, p.y as f64),
                PathCmd::QuadTo { ctrl, to } => self.ctx.quadratic_curve_to(
                    ctrl.x as f64,
                    ctrl.y as f64,
                    to.x as f64,
                    to.y as f64,
                ),
                PathCmd::CubicTo { c1, c2, to } => self.ctx.bezier_curve_to(
                    c1.x as f64,
                    c1.y as f64,
                    c2.x as f64,
                    c2.y as f64,
                    to.x as f64,
                    to.y as f64,
                ),
                PathCmd::Arc {
                    center,
                    radius,
                    start,
                    end,
                } => {
                    _ = self.ctx.arc(
                        center.x as f64,
                        center.y as f64,
                        radius.max(0.0) as f64,
                        start as f64,
                        end as f64,
                    );
                }
                PathCmd::Close => self.ctx.close_path(),
            }
        }
    }
}

impl Painter for CanvasSurface {
    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f32, y: f32) {
        _ = self.ctx.translate(x as f64, y as f64);
    }

    fn rotate(&mut self, radians: f32) {
        _ = self.ctx.rotate(radians as f64);
    }

    fn draw(&mut self, path: &Path, paint: &Paint) {
        self.trace(path);
        match paint {
            Paint::Fill(color) => {
                self.ctx.set_fill_style_str(&color.css());
                self.ctx.fill();
            }
            Paint::Stroke { color, width } => {
                self.ctx.set_stroke_style_str(&color.css());
                self.ctx.set_line_width(*width as f64);
                self.ctx.set_line_cap("round");
                self.ctx.stroke();
            }
            Paint::Erase => {
                _ = self.ctx.set_global_composite_operation("destination-out");
                self.ctx.set_fill_style_str("rgba(0, 0, 0, 1)");
                self.ctx.fill();
                _ = self.ctx.set_global_composite_operation("source-over");
            }
        }
    }
}

impl Surface for CanvasSurface {
    fn is_attached(&self) -> bool {
        self.canvas.is_connected()
    }

    fn set_visible(&mut self, visible: bool) {
        // fallback: inline display keeps working without any page CSS
        _ = self
            .canvas
            .style()
            .set_property("display", if visible { "block" } else { "none" });
    }

    fn resize(&mut self, viewport: Viewport) {
        self.width = viewport.width.max(1.0);
        self.height = viewport.height.max(1.0);
        self.canvas.set_width(self.width as u32);
        self.canvas.set_height(self.height as u32);
    }

    fn detach(&mut self) {
        self.canvas.remove();
    }
}
