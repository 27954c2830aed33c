use super::constants::*;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub fn field(alpha: f32) -> Self {
        let [r, g, b] = PARTICLE_RGB;
        Self {
            r,
            g,
            b,
            a: alpha.clamp(0.0, 1.0),
        }
    }

    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Drawing target for the particle field.
///
/// The web build implements this over a `CanvasRenderingContext2d`; tests
/// record the calls. Coordinates are surface pixels.
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
}

/// Attribute names accepted by [`FieldConfig::apply_attribute`].
pub const CONFIG_ATTRIBUTES: &[&str] = &[
    "data-particle-count",
    "data-interaction-radius",
    "data-repel-radius",
    "data-link-radius",
    "data-ambient-speed",
];

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub count: usize,
    pub interaction_radius: f32,
    pub repel_radius: f32,
    pub link_radius: f32,
    pub ambient_speed: f32,
    pub repel_push: f32,
    pub max_speed: f32,
    pub touch_ramp_up: f32,
    pub touch_decay: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            interaction_radius: INTERACTION_RADIUS,
            repel_radius: REPEL_RADIUS,
            link_radius: LINK_RADIUS,
            ambient_speed: AMBIENT_SPEED,
            repel_push: REPEL_PUSH,
            max_speed: MAX_SPEED,
            touch_ramp_up: TOUCH_RAMP_UP,
            touch_decay: TOUCH_DECAY,
        }
    }
}

impl FieldConfig {
    /// Apply one `data-*` override. Returns `Ok(false)` for attributes this
    /// config does not know, and an error for values that do not parse or are
    /// out of range; the config is left untouched in both cases.
    pub fn apply_attribute(&mut self, name: &str, value: &str) -> anyhow::Result<bool> {
        let value = value.trim();
        match name {
            "data-particle-count" => {
                let count: usize = value
                    .parse()
                    .map_err(|e| anyhow::anyhow!("{name}={value:?}: {e}"))?;
                self.count = count.min(MAX_PARTICLE_COUNT);
            }
            "data-interaction-radius" => self.interaction_radius = parse_positive(name, value)?,
            "data-repel-radius" => self.repel_radius = parse_positive(name, value)?,
            "data-link-radius" => self.link_radius = parse_positive(name, value)?,
            "data-ambient-speed" => self.ambient_speed = parse_positive(name, value)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

fn parse_positive(name: &str, value: &str) -> anyhow::Result<f32> {
    let v: f32 = value
        .parse()
        .map_err(|e| anyhow::anyhow!("{name}={value:?}: {e}"))?;
    if !v.is_finite() || v <= 0.0 {
        anyhow::bail!("{name}={value:?}: expected a finite positive number");
    }
    Ok(v)
}

/// Opacity of a line between two points `distance` apart, falling linearly
/// from 1 at distance 0 to 0 at `radius`. `None` when no line is drawn.
#[inline]
pub fn linear_falloff(distance: f32, radius: f32) -> Option<f32> {
    if radius <= 0.0 || !(distance < radius) {
        return None;
    }
    Some((1.0 - distance / radius).clamp(0.0, 1.0))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2, ambient_speed: f32) -> Self {
        let mut component = || (rng.gen::<f32>() - 0.5) * 2.0 * ambient_speed;
        let velocity = Vec2::new(component(), component());
        Self {
            position: Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y),
            velocity,
            radius: PARTICLE_RADIUS_MIN + rng.gen::<f32>() * PARTICLE_RADIUS_SPAN,
        }
    }

    /// Move one step and reflect off the bounds.
    ///
    /// Only a particle that is outside and still heading outward has its
    /// velocity flipped, so a particle left outside by a shrinking surface
    /// drifts back instead of oscillating in place.
    pub fn integrate(&mut self, bounds: Vec2) {
        self.position += self.velocity;
        if (self.position.x < 0.0 && self.velocity.x < 0.0)
            || (self.position.x >= bounds.x && self.velocity.x > 0.0)
        {
            self.velocity.x = -self.velocity.x;
        }
        if (self.position.y < 0.0 && self.velocity.y < 0.0)
            || (self.position.y >= bounds.y && self.velocity.y > 0.0)
        {
            self.velocity.y = -self.velocity.y;
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerSource {
    #[default]
    Mouse,
    Touch,
}

/// Pointer position in surface coordinates plus the intensity its lines are
/// drawn with. Mouse input is at full intensity while present; touch input
/// ramps up while the finger is down and fades after release.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    position: Option<Vec2>,
    source: PointerSource,
    touching: bool,
    intensity: f32,
    last_touch: Option<Vec2>,
}

impl PointerState {
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    pub fn source(&self) -> PointerSource {
        self.source
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn is_touching(&self) -> bool {
        self.touching
    }

    pub fn is_present(&self) -> bool {
        self.position.is_some() && self.intensity > 0.0
    }

    pub fn mouse_move(&mut self, position: Option<Vec2>) {
        // Browsers emit compatibility mouse events at the tap point right after
        // a tap; the touch keeps the pointer until its fade has finished.
        if self.source == PointerSource::Touch
            && (self.touching || self.position.is_some() || position == self.last_touch)
        {
            return;
        }
        self.source = PointerSource::Mouse;
        self.touching = false;
        self.position = position;
        self.intensity = if position.is_some() { 1.0 } else { 0.0 };
    }

    pub fn leave(&mut self) {
        self.position = None;
        self.touching = false;
        self.intensity = 0.0;
    }

    pub fn touch_start(&mut self, position: Vec2) {
        if self.source != PointerSource::Touch {
            self.intensity = 0.0;
        }
        self.source = PointerSource::Touch;
        self.position = Some(position);
        self.last_touch = Some(position);
        self.touching = true;
    }

    /// A touch that wanders off the surface stops counting as touching but
    /// keeps its last position so the lines fade out in place.
    pub fn touch_move(&mut self, position: Option<Vec2>) {
        if self.source != PointerSource::Touch {
            self.intensity = 0.0;
        }
        self.source = PointerSource::Touch;
        match position {
            Some(p) => {
                self.position = Some(p);
                self.last_touch = Some(p);
                self.touching = true;
            }
            None => self.touching = false,
        }
    }

    pub fn touch_end(&mut self) {
        self.touching = false;
    }

    /// Advance the touch intensity by one frame.
    pub fn advance(&mut self, ramp_up: f32, decay: f32) {
        if self.source != PointerSource::Touch {
            return;
        }
        if self.touching {
            self.intensity = (self.intensity + ramp_up).min(1.0);
        } else {
            self.intensity = (self.intensity - decay).max(0.0);
            if self.intensity == 0.0 {
                self.position = None;
            }
        }
    }
}

/// A fixed pool of particles living on a surface of `size` pixels.
pub struct ParticleField {
    config: FieldConfig,
    size: Vec2,
    particles: Vec<Particle>,
    pointer: PointerState,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(config: FieldConfig, width: f32, height: f32, rng: &mut R) -> Self {
        let size = sanitize_size(width, height);
        let particles = (0..config.count)
            .map(|_| Particle::random(rng, size, config.ambient_speed))
            .collect();
        Self {
            config,
            size,
            particles,
            pointer: PointerState::default(),
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = sanitize_size(width, height);
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn pointer_mut(&mut self) -> &mut PointerState {
        &mut self.pointer
    }

    /// Run one frame: move every particle, draw it, connect it to the pointer
    /// and to its neighbours.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let cfg = &self.config;
        self.pointer.advance(cfg.touch_ramp_up, cfg.touch_decay);
        surface.clear(self.size.x, self.size.y);

        let pointer = match self.pointer.position() {
            Some(p) if self.pointer.is_present() => Some((p, self.pointer.intensity())),
            _ => None,
        };
        let dot = Rgba::field(PARTICLE_ALPHA);

        for particle in &mut self.particles {
            particle.integrate(self.size);
            surface.fill_disc(particle.position, particle.radius, dot);

            let Some((target, intensity)) = pointer else {
                continue;
            };
            let delta = particle.position - target;
            let distance = delta.length();
            if let Some(opacity) = linear_falloff(distance, cfg.interaction_radius) {
                surface.stroke_line(
                    particle.position,
                    target,
                    POINTER_LINE_WIDTH * intensity,
                    Rgba::field(opacity * intensity),
                );
                if distance < cfg.repel_radius && distance > 0.0 {
                    particle.velocity += delta / distance * cfg.repel_push;
                    particle.velocity = particle.velocity.clamp_length_max(cfg.max_speed);
                }
            }
        }

        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = a.position.distance(b.position);
                if let Some(opacity) = linear_falloff(distance, cfg.link_radius) {
                    surface.stroke_line(
                        a.position,
                        b.position,
                        LINK_LINE_WIDTH,
                        Rgba::field(opacity * LINK_ALPHA_SCALE),
                    );
                }
            }
        }
    }
}

fn sanitize_size(width: f32, height: f32) -> Vec2 {
    let clean = |v: f32| if v.is_finite() && v > 0.0 { v } else { 0.0 };
    Vec2::new(clean(width), clean(height))
}
