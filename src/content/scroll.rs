/// Scroll-linked fade for the hero image.
///
/// Progress runs from 0 when the hero section's bottom edge sits at the
/// bottom of the viewport to 1 once it has climbed to 20% of the viewport
/// height; the image shrinks and fades linearly over that range and is
/// removed from hit-testing once fully played out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollFade {
    start: f64,
    end: f64,
}

/// Point-in-time output of the fade.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeSample {
    pub scale: f64,
    pub opacity: f64,
    pub visible: bool,
}

impl ScrollFade {
    /// Fade over the range the page uses: viewport height down to 20% of it.
    pub fn for_viewport(viewport_height: f64) -> Self {
        Self {
            start: viewport_height,
            end: viewport_height * 0.2,
        }
    }

    pub fn with_range(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Progress in `[0, 1]` for the hero bottom edge at `hero_bottom`
    /// viewport-relative pixels.
    pub fn progress(&self, hero_bottom: f64) -> f64 {
        let raw = (self.start - hero_bottom) / (self.start - self.end);
        raw.clamp(0.0, 1.0)
    }

    pub fn sample(&self, hero_bottom: f64) -> FadeSample {
        let progress = self.progress(hero_bottom);
        FadeSample {
            scale: 1.0 - progress,
            opacity: 1.0 - progress,
            visible: progress < 1.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/scroll.rs"]
mod tests;
