// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use hero_core::constants as scene;

#[test]
#[allow(clippy::assertions_on_constants)]
fn host_constants_are_within_reasonable_bounds() {
    // a stalled tab must not fast-forward the entrance in one step
    assert!(MAX_FRAME_DT_SEC > 1.0 / 60.0);
    assert!(MAX_FRAME_DT_SEC < (scene::CUBE_ENTRANCE_DURATION_MS as f64) / 1000.0);
    assert!(RECORD_STRIDE >= 12);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scene_constants_are_consistent() {
    assert!(scene::BOX_SMOOTH_RADIUS > 0.0 && scene::BOX_SMOOTH_RADIUS < scene::BOX_HALF_EXTENT);
    assert!(scene::BOX_SUBDIVISIONS >= 1);

    // a single qualifying move decays back to idle within a second at 60 fps
    let frames = scene::PULSE_INCREMENT / scene::PULSE_DECAY_PER_FRAME;
    assert!(frames <= scene::REFERENCE_FPS);

    // the dollar trail fades to nothing at its tail, never below
    let tail = 1.0 - (scene::TRAIL_SEGMENTS - 1) as f32 * scene::TRAIL_FALLOFF;
    assert!(tail > 0.0);
    let tail_delay = (scene::TRAIL_SEGMENTS - 1) as f32 * scene::TRAIL_STEP_DELAY;
    assert!(tail_delay < 1.0);

    // every cube bead gets part of the entrance window
    assert!((scene::CUBE_ORBIT_COUNT - 1) as f32 * scene::CUBE_ORBIT_STAGGER < 1.0);

    // streaks wrap somewhere inside the field they were spawned in
    assert!(scene::STAR_RESET_Z > -scene::STAR_DEPTH && scene::STAR_RESET_Z < scene::STAR_WRAP_Z);
    assert!(scene::BASE_OPACITY_MIN > 0.0 && scene::BASE_OPACITY_MIN < 1.0);
}
