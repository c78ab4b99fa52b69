use kurbo::Shape as _;

use crate::foundation::core::{BezPath, Circle, Rgba8, Viewport};
use crate::foundation::error::{StarfieldError, StarfieldResult};
use crate::render::surface::{FrameRgba, Surface};

/// Flattening tolerance when turning a disc into a fill path.
const CIRCLE_TOLERANCE: f64 = 0.1;

/// CPU rasteriser: a `vello_cpu` pixmap sized to the viewport's physical
/// dimensions, with the device-pixel-ratio scale applied as the draw
/// transform so callers stay in logical coordinates.
pub struct CpuSurface {
    viewport: Viewport,
    width_px: u16,
    height_px: u16,
    pixmap: vello_cpu::Pixmap,
    ctx: Option<vello_cpu::RenderContext>,
}

impl CpuSurface {
    pub fn new(viewport: Viewport) -> StarfieldResult<Self> {
        let (width_px, height_px) = physical_dims(viewport)?;
        Ok(Self {
            viewport,
            width_px,
            height_px,
            pixmap: vello_cpu::Pixmap::new(width_px, height_px),
            ctx: None,
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Read back the last presented frame as premultiplied RGBA8.
    pub fn to_frame(&self) -> FrameRgba {
        FrameRgba {
            width: u32::from(self.width_px),
            height: u32::from(self.height_px),
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    fn fill_cpu_path(
        &mut self,
        path: vello_cpu::kurbo::BezPath,
        color: Rgba8,
    ) -> StarfieldResult<()> {
        let scale = self.viewport.scale;
        let ctx = self.ctx.as_mut().ok_or_else(|| {
            StarfieldError::surface("fill outside begin_frame/end_frame")
        })?;
        ctx.set_transform(vello_cpu::kurbo::Affine::scale(scale));
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
        ctx.fill_path(&path);
        Ok(())
    }
}

impl Surface for CpuSurface {
    fn begin_frame(&mut self, clear: Rgba8) -> StarfieldResult<()> {
        clear_pixmap(
            &mut self.pixmap,
            premul_rgba8(clear.r, clear.g, clear.b, clear.a),
        );
        self.ctx = Some(vello_cpu::RenderContext::new(self.width_px, self.height_px));
        Ok(())
    }

    fn fill_path(&mut self, path: &BezPath, color: Rgba8) -> StarfieldResult<()> {
        self.fill_cpu_path(bezpath_to_cpu(path), color)
    }

    fn fill_circle(&mut self, circle: Circle, color: Rgba8) -> StarfieldResult<()> {
        self.fill_cpu_path(bezpath_to_cpu(&circle.to_path(CIRCLE_TOLERANCE)), color)
    }

    fn end_frame(&mut self) -> StarfieldResult<()> {
        let mut ctx = self.ctx.take().ok_or_else(|| {
            StarfieldError::surface("end_frame without a matching begin_frame")
        })?;
        ctx.flush();
        ctx.render_to_pixmap(&mut self.pixmap);
        Ok(())
    }

    fn resize(&mut self, viewport: Viewport) -> StarfieldResult<()> {
        // A resize mid-frame abandons the recorded ops; the next frame starts
        // clean against the new buffer.
        self.ctx = None;

        let (width_px, height_px) = physical_dims(viewport)?;
        if width_px != self.width_px || height_px != self.height_px {
            self.pixmap = vello_cpu::Pixmap::new(width_px, height_px);
            self.width_px = width_px;
            self.height_px = height_px;
        }
        self.viewport = viewport;
        Ok(())
    }
}

fn physical_dims(viewport: Viewport) -> StarfieldResult<(u16, u16)> {
    let width: u16 = viewport
        .physical_width()
        .try_into()
        .map_err(|_| StarfieldError::surface("surface width exceeds u16"))?;
    let height: u16 = viewport
        .physical_height()
        .try_into()
        .map_err(|_| StarfieldError::surface("surface height exceeds u16"))?;
    Ok((width, height))
}

fn premul_rgba8(r: u8, g: u8, b: u8, a: u8) -> [u8; 4] {
    let af = (a as u16) + 1;
    let premul = |c: u8| -> u8 { (((c as u16) * af) >> 8) as u8 };
    [premul(r), premul(g), premul(b), a]
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, rgba: [u8; 4]) {
    let data = pixmap.data_as_u8_slice_mut();
    for px in data.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
