use super::constants::{
    ANIMATION_END, CUBE_FULL_TURN_VIEWPORTS, SCENE_FADE_RATE, SHOWCASE_ROTATE_MAX_DEG,
    SHOWCASE_SCALE_MIN, SHOWCASE_SCALE_SPAN, TEXT_HIDDEN_OFFSET_PX, TEXT_REVEAL_THRESHOLD,
};

/// Layout measurements of a sticky scroll container, in CSS pixels.
///
/// `container_top` is the container's bounding box top relative to the
/// viewport: 0 when the container's top touches the viewport top, negative
/// once it has scrolled past.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollGeometry {
    pub container_top: f32,
    pub viewport_height: f32,
    pub container_height: f32,
}

impl ScrollGeometry {
    /// Distance the page scrolls while the container's sticky part is locked.
    pub fn travel(&self) -> f32 {
        self.container_height - self.viewport_height
    }

    /// Fraction of the travel already scrolled, clamped to \[0, 1\].
    ///
    /// A container that fits inside the viewport has no travel; its progress
    /// is a step that completes as soon as the container top reaches the
    /// viewport top.
    pub fn raw_progress(&self) -> f32 {
        if !self.container_top.is_finite()
            || !self.viewport_height.is_finite()
            || !self.container_height.is_finite()
        {
            return 0.0;
        }
        let travel = self.travel();
        if travel <= 0.0 {
            return if self.container_top <= 0.0 { 1.0 } else { 0.0 };
        }
        (-self.container_top / travel).clamp(0.0, 1.0)
    }

    /// Progress remapped so the animation finishes at [`ANIMATION_END`] of the
    /// travel, leaving the rest as a settle region.
    pub fn anim_progress(&self) -> f32 {
        anim_progress_from_raw(self.raw_progress())
    }
}

#[inline]
pub fn anim_progress_from_raw(raw: f32) -> f32 {
    (raw / ANIMATION_END).min(1.0)
}

#[inline]
pub fn is_text_revealed(anim_progress: f32) -> bool {
    anim_progress > TEXT_REVEAL_THRESHOLD
}

/// Visual parameters for one scroll event of the showcase section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShowcaseFrame {
    pub anim_progress: f32,
    pub scale: f32,
    pub rotate_deg: f32,
    pub text_revealed: bool,
}

impl ShowcaseFrame {
    pub fn from_geometry(geometry: &ScrollGeometry) -> Self {
        Self::from_anim_progress(geometry.anim_progress())
    }

    pub fn from_anim_progress(anim_progress: f32) -> Self {
        Self {
            anim_progress,
            scale: SHOWCASE_SCALE_MIN + anim_progress * SHOWCASE_SCALE_SPAN,
            rotate_deg: anim_progress * SHOWCASE_ROTATE_MAX_DEG,
            text_revealed: is_text_revealed(anim_progress),
        }
    }

    pub fn object_transform(&self) -> String {
        format!("scale({}) rotate({}deg)", self.scale, self.rotate_deg)
    }

    /// `(opacity, transform)` for the companion text element.
    pub fn text_style(&self) -> (&'static str, String) {
        if self.text_revealed {
            ("1", "translateY(0)".to_string())
        } else {
            ("0", format!("translateY({}px)", TEXT_HIDDEN_OFFSET_PX))
        }
    }
}

/// Rotation and scene fade for the 3D cube hero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubeFrame {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    pub scene_opacity: f32,
}

impl CubeFrame {
    pub fn new(scroll_y: f32, viewport_height: f32, hero_bottom: f32) -> Self {
        let full_turn = viewport_height * CUBE_FULL_TURN_VIEWPORTS;
        let rotation = if full_turn > 0.0 {
            scroll_y / full_turn * 360.0
        } else {
            0.0
        };
        Self {
            rotate_x_deg: rotation,
            rotate_y_deg: rotation,
            scene_opacity: scene_opacity(hero_bottom, viewport_height),
        }
    }

    pub fn cube_transform(&self) -> String {
        format!(
            "rotateX({}deg) rotateY({}deg)",
            self.rotate_x_deg, self.rotate_y_deg
        )
    }
}

// Fades the scene out as the hero's bottom edge rises above the viewport bottom.
#[inline]
pub fn scene_opacity(hero_bottom: f32, viewport_height: f32) -> f32 {
    if viewport_height <= 0.0 || hero_bottom >= viewport_height {
        return 1.0;
    }
    let fade_out = 1.0 - hero_bottom / viewport_height;
    (1.0 - fade_out * SCENE_FADE_RATE).clamp(0.0, 1.0)
}
