// Host-side tests for the particle field simulation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod fx {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod particles {
        include!("../src/core/particles.rs");
    }
}

use fx::constants::*;
use fx::particles::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Clone, PartialEq)]
enum Draw {
    Clear(f32, f32),
    Disc(Vec2, f32, Rgba),
    Line(Vec2, Vec2, f32, Rgba),
}

#[derive(Default)]
struct Recorder {
    calls: Vec<Draw>,
}

impl Recorder {
    fn discs(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, Draw::Disc(..))).count()
    }

    fn lines(&self) -> Vec<&Draw> {
        self.calls
            .iter()
            .filter(|c| matches!(c, Draw::Line(..)))
            .collect()
    }

    // Lines ending at `point`.
    fn lines_to(&self, point: Vec2) -> Vec<(f32, Rgba)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Draw::Line(_, to, w, color) if *to == point => Some((*w, *color)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for Recorder {
    fn clear(&mut self, width: f32, height: f32) {
        self.calls.push(Draw::Clear(width, height));
    }
    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.calls.push(Draw::Disc(center, radius, color));
    }
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.calls.push(Draw::Line(from, to, width, color));
    }
}

fn still_field(positions: &[Vec2], config: FieldConfig) -> ParticleField {
    let mut rng = StdRng::seed_from_u64(7);
    let mut field = ParticleField::new(
        FieldConfig {
            count: positions.len(),
            ..config
        },
        800.0,
        600.0,
        &mut rng,
    );
    for (p, pos) in field.particles_mut().iter_mut().zip(positions) {
        p.position = *pos;
        p.velocity = Vec2::ZERO;
        p.radius = 2.0;
    }
    field
}

#[test]
fn field_spawns_configured_count_inside_bounds() {
    let mut rng = StdRng::seed_from_u64(42);
    let field = ParticleField::new(FieldConfig::default(), 640.0, 480.0, &mut rng);
    assert_eq!(field.particles().len(), PARTICLE_COUNT);
    for p in field.particles() {
        assert!(p.position.x >= 0.0 && p.position.x < 640.0);
        assert!(p.position.y >= 0.0 && p.position.y < 480.0);
        assert!(p.velocity.x.abs() <= AMBIENT_SPEED);
        assert!(p.velocity.y.abs() <= AMBIENT_SPEED);
        assert!(p.radius >= PARTICLE_RADIUS_MIN && p.radius < PARTICLE_RADIUS_MIN + PARTICLE_RADIUS_SPAN);
    }
}

#[test]
fn particles_stay_within_one_step_of_bounds() {
    let mut rng = StdRng::seed_from_u64(3);
    let config = FieldConfig {
        count: 40,
        ambient_speed: 2.5,
        ..FieldConfig::default()
    };
    let mut field = ParticleField::new(config, 200.0, 100.0, &mut rng);
    let mut surface = Recorder::default();
    for _ in 0..5_000 {
        field.tick(&mut surface);
        surface.calls.clear();
        for p in field.particles() {
            let slack = p.velocity.abs();
            assert!(p.position.x >= -slack.x && p.position.x < 200.0 + slack.x);
            assert!(p.position.y >= -slack.y && p.position.y < 100.0 + slack.y);
        }
    }
}

#[test]
fn crossing_a_bound_flips_only_that_axis() {
    let mut p = Particle {
        position: Vec2::new(99.5, 50.0),
        velocity: Vec2::new(1.0, 0.5),
        radius: 1.0,
    };
    p.integrate(Vec2::new(100.0, 100.0));
    assert_eq!(p.velocity, Vec2::new(-1.0, 0.5));
    p.integrate(Vec2::new(100.0, 100.0));
    assert!(p.position.x < 100.0);
}

#[test]
fn particle_left_outside_by_resize_drifts_back() {
    let mut p = Particle {
        position: Vec2::new(500.0, 10.0),
        velocity: Vec2::new(-0.1, 0.0),
        radius: 1.0,
    };
    // Already heading inward: no flip, keeps coming back.
    p.integrate(Vec2::new(100.0, 100.0));
    assert_eq!(p.velocity.x, -0.1);
    p.integrate(Vec2::new(100.0, 100.0));
    assert!(p.position.x < 500.0);
}

#[test]
fn tick_clears_then_draws_every_particle() {
    let mut field = still_field(
        &[Vec2::new(10.0, 10.0), Vec2::new(400.0, 300.0)],
        FieldConfig::default(),
    );
    let mut surface = Recorder::default();
    field.tick(&mut surface);
    assert_eq!(surface.calls[0], Draw::Clear(800.0, 600.0));
    assert_eq!(surface.discs(), 2);
    assert!(surface.lines().is_empty(), "far apart particles must not link");
}

#[test]
fn link_opacity_falls_off_linearly() {
    assert_eq!(linear_falloff(0.0, 120.0), Some(1.0));
    assert!((linear_falloff(30.0, 120.0).unwrap() - 0.75).abs() < 1e-6);
    assert!((linear_falloff(119.0, 120.0).unwrap() - 1.0 / 120.0).abs() < 1e-5);
    assert_eq!(linear_falloff(120.0, 120.0), None);
    assert_eq!(linear_falloff(500.0, 120.0), None);
    assert_eq!(linear_falloff(10.0, 0.0), None);
    assert_eq!(linear_falloff(f32::NAN, 120.0), None);
}

#[test]
fn nearby_pair_is_linked_once_with_half_alpha() {
    let a = Vec2::new(100.0, 100.0);
    let b = Vec2::new(160.0, 100.0);
    let mut field = still_field(&[a, b], FieldConfig::default());
    let mut surface = Recorder::default();
    field.tick(&mut surface);

    let lines = surface.lines();
    assert_eq!(lines.len(), 1);
    match lines[0] {
        Draw::Line(from, to, width, color) => {
            assert_eq!((*from, *to), (a, b));
            assert_eq!(*width, LINK_LINE_WIDTH);
            assert!((color.a - 0.5 * LINK_ALPHA_SCALE).abs() < 1e-6);
        }
        _ => unreachable!(),
    }
}

#[test]
fn pair_at_link_radius_is_not_linked() {
    let mut field = still_field(
        &[Vec2::new(100.0, 100.0), Vec2::new(100.0 + LINK_RADIUS, 100.0)],
        FieldConfig::default(),
    );
    let mut surface = Recorder::default();
    field.tick(&mut surface);
    assert!(surface.lines().is_empty());
}

#[test]
fn absent_pointer_leaves_motion_untouched() {
    let mut rng = StdRng::seed_from_u64(11);
    let config = FieldConfig::default();
    let mut field = ParticleField::new(config.clone(), 300.0, 300.0, &mut rng);
    let before: Vec<Particle> = field.particles().to_vec();
    let mut surface = Recorder::default();
    field.tick(&mut surface);

    for (old, new) in before.iter().zip(field.particles()) {
        assert_eq!(new.position, old.position + old.velocity);
        assert_eq!(new.velocity.abs(), old.velocity.abs());
    }
    let pointer = Vec2::new(150.0, 150.0);
    assert!(surface.lines_to(pointer).is_empty());
}

#[test]
fn mouse_pointer_draws_line_with_distance_falloff() {
    let p = Vec2::new(100.0, 100.0);
    let mut field = still_field(&[p], FieldConfig::default());
    let pointer = Vec2::new(100.0, 250.0); // 150 away
    field.pointer_mut().mouse_move(Some(pointer));
    let mut surface = Recorder::default();
    field.tick(&mut surface);

    let lines = surface.lines_to(pointer);
    assert_eq!(lines.len(), 1);
    let (width, color) = lines[0];
    assert_eq!(width, POINTER_LINE_WIDTH);
    assert!((color.a - 0.5).abs() < 1e-6);
}

#[test]
fn pointer_beyond_interaction_radius_draws_nothing() {
    let mut field = still_field(&[Vec2::new(0.0, 0.0)], FieldConfig::default());
    let pointer = Vec2::new(400.0, 0.0);
    field.pointer_mut().mouse_move(Some(pointer));
    let mut surface = Recorder::default();
    field.tick(&mut surface);
    assert!(surface.lines_to(pointer).is_empty());
    assert_eq!(field.particles()[0].velocity, Vec2::ZERO);
}

#[test]
fn pointer_inside_repel_radius_pushes_particle_away() {
    let mut field = still_field(&[Vec2::new(200.0, 200.0)], FieldConfig::default());
    field.pointer_mut().mouse_move(Some(Vec2::new(150.0, 200.0)));
    let mut surface = Recorder::default();
    field.tick(&mut surface);

    let v = field.particles()[0].velocity;
    assert!(v.x > 0.0, "expected push away from pointer, got {v:?}");
    assert!((v.x - REPEL_PUSH).abs() < 1e-6);
    assert_eq!(v.y, 0.0);
}

#[test]
fn repulsion_respects_speed_cap() {
    let mut field = still_field(&[Vec2::new(200.0, 200.0)], FieldConfig::default());
    field.particles_mut()[0].velocity = Vec2::new(MAX_SPEED, 0.0);
    let mut surface = Recorder::default();
    for _ in 0..20 {
        let p = field.particles()[0].position;
        field.pointer_mut().mouse_move(Some(p - Vec2::new(10.0, 0.0)));
        field.tick(&mut surface);
        assert!(field.particles()[0].velocity.length() <= MAX_SPEED + 1e-4);
    }
}

#[test]
fn pointer_on_top_of_particle_does_not_produce_nan() {
    let p = Vec2::new(50.0, 50.0);
    let mut field = still_field(&[p], FieldConfig::default());
    field.pointer_mut().mouse_move(Some(p));
    let mut surface = Recorder::default();
    field.tick(&mut surface);
    assert!(field.particles()[0].velocity.is_finite());
}

#[test]
fn mouse_leave_removes_pointer() {
    let mut state = PointerState::default();
    state.mouse_move(Some(Vec2::new(1.0, 2.0)));
    assert!(state.is_present());
    assert_eq!(state.intensity(), 1.0);
    state.leave();
    assert!(!state.is_present());
    assert_eq!(state.position(), None);
}

#[test]
fn touch_intensity_ramps_up_and_fades_slowly() {
    let mut state = PointerState::default();
    state.touch_start(Vec2::new(10.0, 10.0));
    assert_eq!(state.source(), PointerSource::Touch);
    assert!(!state.is_present(), "intensity starts at zero");

    let mut frames_up = 0;
    while state.intensity() < 1.0 {
        state.advance(TOUCH_RAMP_UP, TOUCH_DECAY);
        frames_up += 1;
        assert!(frames_up < 100);
    }
    state.touch_end();
    let mut frames_down = 0;
    while state.is_present() {
        state.advance(TOUCH_RAMP_UP, TOUCH_DECAY);
        frames_down += 1;
        assert!(frames_down < 100);
    }
    assert!(frames_down > frames_up, "fade-out should be slower than ramp-up");
    assert_eq!(state.position(), None);
}

#[test]
fn touch_leaving_surface_keeps_position_while_fading() {
    let mut state = PointerState::default();
    let pos = Vec2::new(30.0, 40.0);
    state.touch_start(pos);
    state.advance(0.5, 0.1);
    state.touch_move(None);
    assert!(!state.is_touching());
    state.advance(0.5, 0.1);
    assert_eq!(state.position(), Some(pos));
    assert!((state.intensity() - 0.4).abs() < 1e-6);
}

#[test]
fn compatibility_mouse_events_do_not_cut_touch_fade() {
    let mut state = PointerState::default();
    state.touch_start(Vec2::new(5.0, 5.0));
    state.advance(0.5, 0.1);
    state.touch_end();
    state.mouse_move(Some(Vec2::new(5.0, 5.0)));
    assert_eq!(state.source(), PointerSource::Touch);
    assert!(state.intensity() < 1.0);
}

#[test]
fn quick_tap_followed_by_compatibility_mousemove_fades_out() {
    let tap = Vec2::new(100.0, 160.0);
    let mut field = still_field(&[Vec2::new(100.0, 100.0)], FieldConfig::default());
    field.pointer_mut().touch_start(tap);
    field.pointer_mut().touch_end();
    field.pointer_mut().mouse_move(Some(tap));

    let mut surface = Recorder::default();
    for _ in 0..100 {
        surface.calls.clear();
        field.tick(&mut surface);
    }
    assert!(!field.pointer_mut().is_present());
    assert!(surface.lines_to(tap).is_empty());
}

#[test]
fn late_compatibility_mousemove_at_tap_point_is_ignored() {
    let tap = Vec2::new(5.0, 5.0);
    let mut state = PointerState::default();
    state.touch_start(tap);
    state.touch_end();
    state.advance(TOUCH_RAMP_UP, TOUCH_DECAY);
    assert_eq!(state.position(), None);

    state.mouse_move(Some(tap));
    assert!(!state.is_present());

    // A real mouse elsewhere takes the pointer back.
    state.mouse_move(Some(Vec2::new(50.0, 50.0)));
    assert_eq!(state.source(), PointerSource::Mouse);
    assert!(state.is_present());
}

#[test]
fn touch_after_mouse_ramps_up_from_zero() {
    let mut state = PointerState::default();
    state.mouse_move(Some(Vec2::new(1.0, 1.0)));
    assert_eq!(state.intensity(), 1.0);

    state.touch_start(Vec2::new(20.0, 20.0));
    assert_eq!(state.intensity(), 0.0);
    state.advance(TOUCH_RAMP_UP, TOUCH_DECAY);
    assert!((state.intensity() - TOUCH_RAMP_UP).abs() < 1e-6);
}

#[test]
fn touch_line_width_and_opacity_scale_with_intensity() {
    let p = Vec2::new(100.0, 100.0);
    let mut field = still_field(&[p], FieldConfig::default());
    let touch = Vec2::new(100.0, 160.0); // 60 away -> falloff 0.8
    field.pointer_mut().touch_start(touch);
    let mut surface = Recorder::default();
    field.tick(&mut surface);

    let lines = surface.lines_to(touch);
    assert_eq!(lines.len(), 1);
    let (width, color) = lines[0];
    assert!((width - POINTER_LINE_WIDTH * TOUCH_RAMP_UP).abs() < 1e-6);
    assert!((color.a - 0.8 * TOUCH_RAMP_UP).abs() < 1e-5);
}

#[test]
fn zero_particle_field_is_inert() {
    let mut rng = StdRng::seed_from_u64(1);
    let config = FieldConfig {
        count: 0,
        ..FieldConfig::default()
    };
    let mut field = ParticleField::new(config, 100.0, 100.0, &mut rng);
    field.pointer_mut().mouse_move(Some(Vec2::new(50.0, 50.0)));
    let mut surface = Recorder::default();
    field.tick(&mut surface);
    assert_eq!(surface.calls, vec![Draw::Clear(100.0, 100.0)]);
}

#[test]
fn degenerate_sizes_are_sanitized() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut field = ParticleField::new(FieldConfig::default(), -10.0, f32::NAN, &mut rng);
    assert_eq!(field.size(), Vec2::ZERO);
    field.resize(1024.0, 768.0);
    assert_eq!(field.size(), Vec2::new(1024.0, 768.0));
}

#[test]
fn attribute_overrides_apply_and_reject_bad_values() {
    let mut config = FieldConfig::default();
    assert!(config.apply_attribute("data-particle-count", " 60 ").unwrap());
    assert_eq!(config.count, 60);
    assert!(config.apply_attribute("data-link-radius", "90.5").unwrap());
    assert_eq!(config.link_radius, 90.5);

    assert!(config.apply_attribute("data-repel-radius", "-1").is_err());
    assert!(config.apply_attribute("data-repel-radius", "0").is_err());
    assert!(config.apply_attribute("data-link-radius", "0.0").is_err());
    assert_eq!(config.link_radius, 90.5);
    assert!(config.apply_attribute("data-ambient-speed", "fast").is_err());
    assert!(config.apply_attribute("data-interaction-radius", "inf").is_err());
    assert_eq!(config.repel_radius, REPEL_RADIUS);

    assert!(!config.apply_attribute("data-colour", "red").unwrap());
}

#[test]
fn particle_count_override_is_capped() {
    let mut config = FieldConfig::default();
    config.apply_attribute("data-particle-count", "100000").unwrap();
    assert_eq!(config.count, MAX_PARTICLE_COUNT);
}

#[test]
fn rgba_formats_as_css() {
    assert_eq!(Rgba::field(0.5).css(), "rgba(139, 92, 246, 0.5)");
    assert_eq!(Rgba::field(3.0).a, 1.0);
}
