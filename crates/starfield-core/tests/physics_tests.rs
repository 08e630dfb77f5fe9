// Host-side tests for forces, boundaries and the simulator tick.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use starfield_core::boundary::{self, BoundaryMode};
use starfield_core::constants::*;
use starfield_core::forces;
use starfield_core::simulator::{dt_frames, update_twinkle};
use starfield_core::{
    Bounds, KeyCommand, KeyboardImpulse, Particle, PointerState, ScalingCoefficients, SettingKey,
    Settings, SimState, Simulator, TickContext,
};
use std::time::Duration;

fn star(pos: Vec2, vel: Vec2) -> Particle {
    Particle {
        pos,
        vel,
        momentum: Vec2::ZERO,
        size: 1.0,
        opacity: 1.0,
        fade_speed: 1.0,
        white: 0.0,
        red: 0.0,
        edge: 1.0,
    }
}

fn ctx<'a>(
    bounds: Bounds,
    scaling: &'a ScalingCoefficients,
    settings: &'a Settings,
    pointer: &'a PointerState,
    keyboard: &'a KeyboardImpulse,
) -> TickContext<'a> {
    TickContext {
        bounds,
        scaling,
        settings,
        pointer,
        keyboard,
        dt_frames: 1.0,
        clamp_limit: forces::clamp_limit(settings, scaling),
        clock_ms: 0.0,
    }
}

// 700 + 500 is the reference perimeter, so every scaling factor is 1.
const REF_BOUNDS: Bounds = Bounds {
    width: 700.0,
    height: 500.0,
};

fn pointer_at(pos: Vec2, speed: f32) -> PointerState {
    let mut pointer = PointerState::default();
    pointer.moved(pos, 0.0);
    pointer.speed = speed;
    pointer
}

#[test]
fn attraction_pulls_toward_pointer() {
    let scaling = ScalingCoefficients::for_bounds(REF_BOUNDS);
    let mut settings = Settings::default();
    settings.set(SettingKey::RepelStrength, 0.0);
    let pointer = pointer_at(Vec2::new(100.0, 100.0), 5.0);
    let keyboard = KeyboardImpulse::default();
    let c = ctx(REF_BOUNDS, &scaling, &settings, &pointer, &keyboard);

    let mut p = star(Vec2::new(90.0, 100.0), Vec2::ZERO);
    forces::accumulate(&mut p, 1, &c);
    // falloff 0.96, exponent 1, strength 50 * 0.005, speed 5
    assert!((p.momentum.x - 1.2).abs() < 1e-3, "{:?}", p.momentum);
    assert!(p.momentum.y.abs() < 1e-6);
}

#[test]
fn repulsion_pushes_away_from_pointer() {
    let scaling = ScalingCoefficients::for_bounds(REF_BOUNDS);
    let mut settings = Settings::default();
    settings.set(SettingKey::AttractStrength, 0.0);
    let pointer = pointer_at(Vec2::new(100.0, 100.0), 5.0);
    let keyboard = KeyboardImpulse::default();
    let c = ctx(REF_BOUNDS, &scaling, &settings, &pointer, &keyboard);

    let mut p = star(Vec2::new(90.0, 100.0), Vec2::ZERO);
    forces::accumulate(&mut p, 1, &c);
    assert!(p.momentum.x < 0.0);
}

#[test]
fn orbit_adds_a_tangential_component() {
    let scaling = ScalingCoefficients::for_bounds(REF_BOUNDS);
    let mut settings = Settings::default();
    settings.set(SettingKey::RepelStrength, 0.0);
    let pointer = pointer_at(Vec2::new(100.0, 100.0), 5.0);
    let mut keyboard = KeyboardImpulse::default();
    keyboard.apply(KeyCommand::ToggleOrbit);
    let c = ctx(REF_BOUNDS, &scaling, &settings, &pointer, &keyboard);

    let mut p = star(Vec2::new(90.0, 100.0), Vec2::ZERO);
    forces::accumulate(&mut p, 1, &c);
    assert!(p.momentum.y.abs() > 0.5);
}

#[test]
fn idle_pointer_leaves_drifting_star_alone() {
    let scaling = ScalingCoefficients::for_bounds(REF_BOUNDS);
    let settings = Settings::default();
    let pointer = PointerState::default();
    let keyboard = KeyboardImpulse::default();
    let c = ctx(REF_BOUNDS, &scaling, &settings, &pointer, &keyboard);

    let mut p = star(Vec2::new(300.0, 200.0), Vec2::new(0.2, -0.1));
    forces::accumulate(&mut p, 3, &c);
    assert_eq!(p.momentum, Vec2::ZERO);
    forces::integrate(&mut p, 1.0);
    assert!((p.pos - Vec2::new(300.2, 199.9)).length() < 1e-4);
}

#[test]
fn momentum_never_exceeds_clamp_under_extreme_settings() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        let bounds = Bounds::new(rng.gen_range(100.0..3000.0), rng.gen_range(100.0..3000.0));
        let scaling = ScalingCoefficients::for_bounds(bounds);
        let mut settings = Settings::default();
        for key in SettingKey::ALL {
            let v = if rng.gen_bool(0.3) {
                if rng.gen_bool(0.5) {
                    0.0
                } else {
                    100.0
                }
            } else {
                rng.gen_range(0.0..=100.0)
            };
            settings.set(key, v);
        }
        let pointer_pos = Vec2::new(rng.gen_range(0.0..bounds.width), rng.gen_range(0.0..bounds.height));
        let mut pointer = pointer_at(pointer_pos, POINTER_SPEED_MAX);
        pointer.tapped(pointer_pos, 0.0);
        let mut keyboard = KeyboardImpulse::default();
        keyboard.apply(KeyCommand::Boost);
        keyboard.apply(KeyCommand::Nudge(Vec2::new(NUDGE, -NUDGE)));
        keyboard.apply(KeyCommand::Magnet(rng.gen_range(1..=9)));
        keyboard.apply(KeyCommand::ToggleOrbit);
        let mut c = ctx(bounds, &scaling, &settings, &pointer, &keyboard);
        c.dt_frames = rng.gen_range(0.0..=MAX_DT_FRAMES);

        let offset = Vec2::new(rng.gen_range(-30.0..30.0), rng.gen_range(-30.0..30.0));
        let mut p = star(pointer_pos + offset, Vec2::new(0.25, -0.25));
        p.momentum = Vec2::new(rng.gen_range(-500.0..500.0), rng.gen_range(-500.0..500.0));
        forces::accumulate(&mut p, rng.gen_range(0..3), &c);

        assert!(p.momentum.is_finite());
        assert!(
            p.momentum.length() <= c.clamp_limit * (1.0 + 1e-5) + 1e-5,
            "{} > {}",
            p.momentum.length(),
            c.clamp_limit
        );
    }
}

#[test]
fn wrap_keeps_particles_within_one_radius_of_the_canvas() {
    let bounds = Bounds::new(800.0, 600.0);
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..1000 {
        let mut p = star(
            Vec2::new(rng.gen_range(-400.0..1200.0), rng.gen_range(-300.0..900.0)),
            Vec2::ZERO,
        );
        p.white = rng.gen_range(0.0..1.0);
        boundary::wrap(&mut p, bounds);
        let r = p.radius();
        assert!(p.pos.x >= -r && p.pos.x <= bounds.width + r, "{:?}", p.pos);
        assert!(p.pos.y >= -r && p.pos.y <= bounds.height + r, "{:?}", p.pos);
    }
}

#[test]
fn wrap_moves_exited_particle_to_opposite_edge() {
    let bounds = Bounds::new(800.0, 600.0);
    let mut p = star(Vec2::new(-2.0, 300.0), Vec2::new(-0.2, 0.0));
    boundary::wrap(&mut p, bounds);
    assert_eq!(p.pos.x, 801.0);
    assert_eq!(p.vel, Vec2::new(-0.2, 0.0));
}

#[test]
fn bounce_keeps_particles_inside_and_points_velocity_inward() {
    let bounds = Bounds::new(800.0, 600.0);
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..1000 {
        let start = Vec2::new(rng.gen_range(-800.0..1600.0), rng.gen_range(-600.0..1200.0));
        let mut p = star(
            start,
            Vec2::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)),
        );
        p.momentum = Vec2::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0));
        let before = p.momentum.length();
        boundary::bounce(&mut p, bounds);
        let r = p.radius();
        let eps = 1e-3;
        assert!(p.pos.x >= r - eps && p.pos.x <= bounds.width - r + eps, "{:?}", p.pos);
        assert!(p.pos.y >= r - eps && p.pos.y <= bounds.height - r + eps, "{:?}", p.pos);
        if start.x < r {
            assert!(p.vel.x >= 0.0 && p.momentum.x >= 0.0);
        }
        if start.y > bounds.height - r {
            assert!(p.vel.y <= 0.0 && p.momentum.y <= 0.0);
        }
        assert!((p.momentum.length() - before).abs() < 1e-4);
    }
}

#[test]
fn bounce_only_near_an_active_pointer_without_strong_poke() {
    let p = star(Vec2::new(10.0, 10.0), Vec2::ZERO);
    let mut pointer = PointerState::default();
    assert_eq!(boundary::mode_for(&p, &pointer), BoundaryMode::Wrap);

    pointer.moved(Vec2::new(12.0, 12.0), 0.0);
    pointer.ring_timer = 1.0;
    assert_eq!(boundary::mode_for(&p, &pointer), BoundaryMode::Bounce);

    pointer.poke_timer = POKE_WRAP_THRESHOLD + 1.0;
    assert_eq!(boundary::mode_for(&p, &pointer), BoundaryMode::Wrap);

    pointer.poke_timer = 0.0;
    pointer.ring_timer = 0.0;
    assert_eq!(boundary::mode_for(&p, &pointer), BoundaryMode::Wrap);

    pointer.ring_timer = 1.0;
    pointer.left();
    assert_eq!(boundary::mode_for(&p, &pointer), BoundaryMode::Wrap);
}

fn ball_scene(y: f32) -> SimState {
    let mut state = SimState::new(Bounds::new(1000.0, 800.0));
    state.store.particles = vec![star(Vec2::new(5.0, y), Vec2::new(-0.25, 0.0))];
    state.keyboard.paddle_timer_ms = PADDLE_VISIBLE_MS;
    state
}

#[test]
fn ball_bounces_off_the_left_paddle() {
    let mut state = ball_scene(400.0);
    let mut sim = Simulator::new(5);
    sim.tick(&mut state, 1.0);

    let ball = &state.store.particles[0];
    assert!(ball.vel.x > 0.0, "{:?}", ball.vel);
    assert_eq!(ball.momentum, Vec2::ZERO);
    assert!(ball.pos.x >= state.scaling.paddle_thickness());
    // centre hit leaves at a flat angle
    assert!(ball.vel.y.abs() < 1e-4);
}

#[test]
fn paddle_hit_is_debounced() {
    let mut state = ball_scene(400.0);
    let mut sim = Simulator::new(5);
    sim.tick(&mut state, 1.0);

    let ball = &mut state.store.particles[0];
    ball.pos.x = 5.0;
    ball.vel = Vec2::new(-0.25, 0.0);
    sim.tick(&mut state, 1.0);
    assert!(state.store.particles[0].vel.x < 0.0);
}

#[test]
fn ball_misses_paddle_away_from_its_span() {
    let mut state = ball_scene(50.0);
    let mut sim = Simulator::new(5);
    sim.tick(&mut state, 1.0);
    assert!(state.store.particles[0].vel.x < 0.0);
}

#[test]
fn paddles_expire_after_their_visible_time() {
    let mut state = ball_scene(400.0);
    let mut sim = Simulator::new(5);
    let ticks = (PADDLE_VISIBLE_MS / (REFERENCE_FRAME_MS * MAX_DT_FRAMES)).ceil() as usize;
    for _ in 0..ticks {
        sim.tick(&mut state, MAX_DT_FRAMES);
    }
    assert!(!state.keyboard.paddles_active());
    assert!(sim.clock_ms() >= PADDLE_VISIBLE_MS as f64 - 1.0);
}

#[test]
fn opacity_and_flash_stay_bounded_over_a_long_run() {
    let bounds = Bounds::new(1200.0, 900.0);
    let mut state = SimState::new(bounds);
    let mut sim = Simulator::new(99);
    let mut rng = StdRng::seed_from_u64(100);
    let count = state.scaling.particle_count;
    let scaling = state.scaling.clone();
    state
        .store
        .create_fresh(count, bounds, &scaling, sim.rng_mut());

    for i in 0..3000 {
        if i % 50 == 0 {
            let pos = Vec2::new(rng.gen_range(0.0..1200.0), rng.gen_range(0.0..900.0));
            state.pointer.tapped(pos, i as f64 * 16.0);
        }
        sim.tick(&mut state, rng.gen_range(0.0..=MAX_DT_FRAMES));
        for p in &state.store.particles {
            assert!(p.opacity >= 0.0 && p.opacity <= OPACITY_MAX, "{}", p.opacity);
            assert!(p.white >= 0.0 && p.white <= 1.0);
            assert!(p.pos.is_finite() && p.momentum.is_finite());
        }
    }
}

#[test]
fn faded_star_resets_to_full_brightness() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut p = star(Vec2::ZERO, Vec2::ZERO);
    p.opacity = 0.001;
    update_twinkle(&mut p, 1.0, &mut rng);
    assert!(p.opacity >= OPACITY_RESET_BASE);
    assert!(p.opacity < OPACITY_RESET_BASE + OPACITY_RESET_SPAN);

    p.opacity = 0.5;
    update_twinkle(&mut p, 1.0, &mut rng);
    assert!((p.opacity - (0.5 - OPACITY_FADE_RATE)).abs() < 1e-6);

    p.opacity = 0.1;
    update_twinkle(&mut p, 1.0, &mut rng);
    assert!((p.opacity - (0.1 - OPACITY_TAIL_RATE)).abs() < 1e-6);
}

#[test]
fn elapsed_time_converts_to_capped_frames() {
    assert_eq!(dt_frames(Duration::ZERO), 0.0);
    assert!((dt_frames(Duration::from_micros(16_670)) - 1.0).abs() < 1e-3);
    assert_eq!(dt_frames(Duration::from_secs(5)), MAX_DT_FRAMES);
}

#[test]
fn tick_on_collapsed_canvas_is_a_no_op() {
    let mut state = SimState::new(Bounds::new(0.0, 0.0));
    state.store.particles = vec![star(Vec2::new(1.0, 1.0), Vec2::new(0.2, 0.2))];
    let mut sim = Simulator::new(1);
    sim.tick(&mut state, 1.0);
    assert_eq!(state.store.particles[0].pos, Vec2::new(1.0, 1.0));
    assert_eq!(sim.clock_ms(), 0.0);
}

#[test]
fn invert_drift_applies_once() {
    let mut state = SimState::new(REF_BOUNDS);
    state.store.particles = vec![star(Vec2::new(300.0, 200.0), Vec2::new(0.2, 0.0))];
    state.keyboard.apply(KeyCommand::InvertDrift);
    let mut sim = Simulator::new(1);
    sim.tick(&mut state, 1.0);
    assert_eq!(state.store.particles[0].vel, Vec2::new(-0.2, 0.0));
    sim.tick(&mut state, 1.0);
    assert_eq!(state.store.particles[0].vel, Vec2::new(-0.2, 0.0));
}

fn poke_settings(repel_scale: f32) -> Settings {
    let mut settings = Settings::default();
    settings.set(SettingKey::AttractStrength, 0.0);
    settings.set(SettingKey::RepelStrength, 0.0);
    settings.set(SettingKey::RepelScale, repel_scale);
    settings.set(SettingKey::PokeStrength, 10.0);
    settings.set(SettingKey::Clamp, 100.0);
    settings
}

fn poked_pointer() -> PointerState {
    let mut pointer = pointer_at(Vec2::new(100.0, 100.0), 0.0);
    pointer.poke_timer = POKE_START;
    pointer
}

#[test]
fn poke_pushes_stars_away_from_pointer() {
    let scaling = ScalingCoefficients::for_bounds(REF_BOUNDS);
    let settings = poke_settings(50.0);
    let pointer = poked_pointer();
    let keyboard = KeyboardImpulse::default();
    let c = ctx(REF_BOUNDS, &scaling, &settings, &pointer, &keyboard);

    let mut p = star(Vec2::new(90.0, 100.0), Vec2::ZERO);
    forces::accumulate(&mut p, 1, &c);
    // poke radius 50 * 3 * 2 = 300, exponent 1, strength 10 * 0.00008 * 2500
    let expected = (1.0 - 10.0 / 300.0) * 2.0;
    assert!((p.momentum.x + expected).abs() < 1e-3, "{:?}", p.momentum);
    assert!(p.momentum.y.abs() < 1e-6);

    let mut far = star(Vec2::new(100.0, 450.0), Vec2::ZERO);
    forces::accumulate(&mut far, 1, &c);
    assert_eq!(far.momentum, Vec2::ZERO);
}

#[test]
fn paddle_ball_uses_a_fixed_poke_exponent() {
    let scaling = ScalingCoefficients::for_bounds(REF_BOUNDS);
    // repulsion exponent 25 * 0.02 = 0.5
    let settings = poke_settings(25.0);
    let pointer = poked_pointer();
    let mut keyboard = KeyboardImpulse::default();
    keyboard.paddle_timer_ms = PADDLE_VISIBLE_MS;
    let c = ctx(REF_BOUNDS, &scaling, &settings, &pointer, &keyboard);
    let g: f32 = 1.0 - 10.0 / 300.0;

    let mut ball = star(Vec2::new(90.0, 100.0), Vec2::ZERO);
    forces::accumulate(&mut ball, BALL_INDEX, &c);
    assert!((ball.momentum.x + g.powf(PADDLE_POKE_EXPONENT) * 2.0).abs() < 1e-3);

    let mut other = star(Vec2::new(90.0, 100.0), Vec2::ZERO);
    forces::accumulate(&mut other, 1, &c);
    assert!((other.momentum.x + g.powf(0.5) * 2.0).abs() < 1e-3);

    let idle = KeyboardImpulse::default();
    let c = ctx(REF_BOUNDS, &scaling, &settings, &pointer, &idle);
    let mut ball = star(Vec2::new(90.0, 100.0), Vec2::ZERO);
    forces::accumulate(&mut ball, BALL_INDEX, &c);
    assert!((ball.momentum.x - other.momentum.x).abs() < 1e-6);
}

#[test]
fn drift_boost_scales_with_pointer_speed_up_to_a_cap() {
    let scaling = ScalingCoefficients::for_bounds(REF_BOUNDS);
    let settings = Settings::default();
    let keyboard = KeyboardImpulse::default();
    let vel = Vec2::new(0.2, -0.1);

    let mut pointer = PointerState::default();
    pointer.speed = 2.0;
    let c = ctx(REF_BOUNDS, &scaling, &settings, &pointer, &keyboard);
    let mut p = star(Vec2::new(300.0, 200.0), vel);
    forces::accumulate(&mut p, 1, &c);
    assert!((p.momentum - vel * 1.2).length() < 1e-6);

    pointer.speed = POINTER_SPEED_MAX;
    let c = ctx(REF_BOUNDS, &scaling, &settings, &pointer, &keyboard);
    let mut p = star(Vec2::new(300.0, 200.0), vel);
    forces::accumulate(&mut p, 1, &c);
    assert!((p.momentum - vel * DRIFT_BOOST_CAP).length() < 1e-6);
}

#[test]
fn magnet_pulls_toward_the_numpad_target() {
    let scaling = ScalingCoefficients::for_bounds(REF_BOUNDS);
    let settings = Settings::default();
    let pointer = PointerState::default();
    let mut keyboard = KeyboardImpulse::default();
    keyboard.apply(KeyCommand::Magnet(5));
    let c = ctx(REF_BOUNDS, &scaling, &settings, &pointer, &keyboard);

    // cell 5 is the canvas centre, (350, 250)
    let mut left = star(Vec2::new(100.0, 250.0), Vec2::ZERO);
    forces::accumulate(&mut left, 1, &c);
    assert!((left.momentum - Vec2::new(MAGNET_STRENGTH, 0.0)).length() < 1e-5);

    let mut above = star(Vec2::new(350.0, 100.0), Vec2::ZERO);
    forces::accumulate(&mut above, 1, &c);
    assert!((above.momentum - Vec2::new(0.0, MAGNET_STRENGTH)).length() < 1e-5);
}
