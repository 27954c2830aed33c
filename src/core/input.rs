use super::constants::{
    CURSOR_OUTLINE_TAU_SEC, ORB_PARALLAX_DIVISOR, TILT_MAX_DEG, TILT_PERSPECTIVE_PX,
};
use glam::Vec2;

/// Element bounding box in client (viewport) CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn contains(&self, client: Vec2) -> bool {
        client.x >= self.left
            && client.x <= self.left + self.width
            && client.y >= self.top
            && client.y <= self.top + self.height
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    #[inline]
    pub fn local(&self, client: Vec2) -> Vec2 {
        Vec2::new(client.x - self.left, client.y - self.top)
    }
}

/// Map a client position to surface pixels of a canvas whose backing store is
/// `surface` pixels and whose displayed box is `bounds`. `None` outside the box.
#[inline]
pub fn client_to_surface(bounds: &Bounds, client: Vec2, surface: Vec2) -> Option<Vec2> {
    if bounds.is_degenerate() || !bounds.contains(client) {
        return None;
    }
    let scale = Vec2::new(surface.x / bounds.width, surface.y / bounds.height);
    Some(bounds.local(client) * scale)
}

/// Surface size for a canvas: its displayed size, or the viewport when layout
/// gives it no area.
#[inline]
pub fn canvas_backing_size(displayed: Vec2, viewport: Vec2) -> Vec2 {
    if displayed.x <= 0.0 || displayed.y <= 0.0 {
        viewport
    } else {
        displayed
    }
}

/// `(rotate_x, rotate_y)` in degrees for a tilt card, pointer given in the
/// card's local pixels.
#[inline]
pub fn tilt_angles(local: Vec2, size: Vec2) -> (f32, f32) {
    let center = size * 0.5;
    if center.x <= 0.0 || center.y <= 0.0 {
        return (0.0, 0.0);
    }
    let rotate_x = ((local.y - center.y) / center.y) * -TILT_MAX_DEG;
    let rotate_y = ((local.x - center.x) / center.x) * TILT_MAX_DEG;
    (rotate_x, rotate_y)
}

pub fn tilt_transform(rotate_x: f32, rotate_y: f32) -> String {
    format!(
        "perspective({}px) rotateX({}deg) rotateY({}deg)",
        TILT_PERSPECTIVE_PX, rotate_x, rotate_y
    )
}

pub fn glare_background(local: Vec2) -> String {
    format!(
        "radial-gradient(circle at {}px {}px, rgba(255,255,255,0.15) 0%, transparent 60%)",
        local.x, local.y
    )
}

/// Parallax offset of the `index`-th orb; later orbs move faster.
#[inline]
pub fn orb_offset(index: usize, page: Vec2, viewport: Vec2) -> Vec2 {
    let speed = (index + 1) as f32;
    (viewport - page * speed) / ORB_PARALLAX_DIVISOR
}

/// Trailing cursor outline that eases toward the latest pointer position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorTrail {
    position: Option<Vec2>,
    target: Option<Vec2>,
}

impl CursorTrail {
    pub fn set_target(&mut self, target: Vec2) {
        self.target = Some(target);
        if self.position.is_none() {
            self.position = Some(target);
        }
    }

    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    pub fn is_settled(&self) -> bool {
        match (self.position, self.target) {
            (Some(p), Some(t)) => p.distance_squared(t) < 0.01,
            _ => true,
        }
    }

    /// Ease toward the target and return the new position.
    pub fn step(&mut self, dt_sec: f32) -> Option<Vec2> {
        let (Some(pos), Some(target)) = (self.position, self.target) else {
            return self.position;
        };
        let alpha = 1.0 - (-dt_sec.max(0.0) / CURSOR_OUTLINE_TAU_SEC).exp();
        let next = if self.is_settled() {
            target
        } else {
            pos + (target - pos) * alpha
        };
        self.position = Some(next);
        self.position
    }
}
