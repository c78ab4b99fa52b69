use crate::foundation::core::{BezPath, Circle, Rgba8, Viewport};
use crate::foundation::error::StarfieldResult;

/// One rendered frame: premultiplied RGBA8 pixels at physical resolution.
#[derive(Clone, Debug)]
pub struct FrameRgba {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

/// The host's drawable 2D surface.
///
/// A frame is bracketed by [`begin_frame`](Surface::begin_frame) /
/// [`end_frame`](Surface::end_frame); fills in between take logical
/// coordinates and a straight-alpha color. `resize` may be called between
/// frames and must leave the surface unchanged when the dimensions are
/// unchanged.
///
/// Drawing outside an open frame is a `Surface` error — a host that lost its
/// surface should skip the decoration, not crash the page around it.
pub trait Surface {
    /// Start a frame by clearing the whole surface to `clear`.
    fn begin_frame(&mut self, clear: Rgba8) -> StarfieldResult<()>;

    /// Fill a closed path.
    fn fill_path(&mut self, path: &BezPath, color: Rgba8) -> StarfieldResult<()>;

    /// Fill a disc.
    fn fill_circle(&mut self, circle: Circle, color: Rgba8) -> StarfieldResult<()>;

    /// Finish the frame and present it to the backing buffer.
    fn end_frame(&mut self) -> StarfieldResult<()>;

    /// Adopt new viewport geometry (logical size and/or scale factor).
    fn resize(&mut self, viewport: Viewport) -> StarfieldResult<()>;
}
