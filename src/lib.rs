//! Starfield is the decorative engine behind a space-themed landing page.
//!
//! The core is a perspective "flying through stars" simulation: a fixed
//! collection of particles in a pseudo-3D space, advanced once per display
//! refresh and projected onto a 2D surface through a pinhole-camera
//! approximation.
//!
//! # Pipeline overview
//!
//! 1. **Tick**: [`StarField::tick`] moves every star toward the camera and
//!    respawns the ones that cross the near plane.
//! 2. **Project**: [`Projector::project`] maps world-plane positions to
//!    screen coordinates and apparent radii; conservative culling skips
//!    off-screen and sub-pixel stars without touching their state.
//! 3. **Draw**: an [`Animator`] fills each visible star as a disc or a
//!    spiked polygon on a host [`Surface`]; [`CpuSurface`] rasterises to
//!    premultiplied RGBA8 pixels.
//! 4. **Schedule**: [`Animator::run`] repeats this against a [`FrameClock`]
//!    until the host's [`StopHandle`] cancels it.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic when seeded**: a seeded scene replays identically.
//! - **Decoration never blocks the page**: a missing or undersized surface
//!   is an error the host can skip on, not a panic.
//!
//! The crate also carries the page's content helpers, distilled to pure
//! logic: the news feed (load, sort, teaser), join-form validation, and the
//! scroll-linked hero fade.
#![forbid(unsafe_code)]

mod content;
mod driver;
mod field;
mod foundation;
mod projection;
mod render;
mod scene;

pub use content::articles::{
    Article, RECENT_LIMIT, TEASER_CHARS, find_by_id, load_articles, recent_articles,
};
pub use content::form::{
    FieldError, JoinSubmission, validate_email, validate_name, validate_submission,
};
pub use content::scroll::{FadeSample, ScrollFade};
pub use driver::{Animator, FixedRateClock, FrameClock, StopHandle};
pub use field::field::{FieldParams, StarField};
pub use field::star::{NEAR_PLANE, Star};
pub use foundation::core::{
    Affine, BezPath, Circle, Point, Rect, Rgba8, Vec2, Viewport,
};
pub use foundation::error::{StarfieldError, StarfieldResult};
pub use projection::{MIN_DRAW_RADIUS, Projected, Projector};
pub use render::cpu::CpuSurface;
pub use render::shape::{StarShape, spiked_star_path};
pub use render::surface::{FrameRgba, Surface};
pub use scene::SceneConfig;
