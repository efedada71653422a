//! One-tick advancement of every wave

use super::geometry::{reset_points, Geometry};
use super::state::WaveState;
use log::trace;

/// Scroll a single wave by its speed. Returns true when it wrapped around a period.
pub fn step(wave: &mut WaveState, geometry: &Geometry) -> bool {
    let speed = wave.speed;
    wave.accumulated_move += speed;
    wave.left_edge += speed;
    // y stays on the generated pattern, only x scrolls
    for p in wave.points.iter_mut() {
        p.x += speed;
    }

    if wave.accumulated_move >= geometry.wavelength {
        wave.accumulated_move = 0.0;
        reset_points(wave, geometry);
        return true;
    }
    false
}

/// True when every pair of waves is more than `threshold` apart in phase.
/// Fewer than two waves can never overlap, so that is always true.
pub fn diverged(waves: &[WaveState], threshold: f32) -> bool {
    waves.iter().enumerate().all(|(i, a)| {
        waves[i + 1..]
            .iter()
            .all(|b| (a.accumulated_move - b.accumulated_move).abs() > threshold)
    })
}

/// Advance all waves by one tick, then decide whether ticking should go on.
///
/// Every wave moves before the stop check so a halted frame is always complete.
/// With `stop_requested` the animation halts only once the crests are visibly
/// apart; otherwise it keeps running.
pub fn advance(waves: &mut [WaveState], geometry: &Geometry, stop_requested: bool, threshold: f32) -> bool {
    for (k, wave) in waves.iter_mut().enumerate() {
        if step(wave, geometry) {
            trace!("wave {} wrapped", k);
        }
    }
    !(stop_requested && diverged(waves, threshold))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wave::geometry::generate;
    use crate::wave::state::WaveConfig;

    fn config(count: usize, offset: f32) -> WaveConfig {
        WaveConfig {
            amplitude: Some(10.0),
            level_line: Some(100.0),
            base_speed: 5.0,
            speed_offset_ratio: offset,
            wave_count: count,
            ..WaveConfig::default()
        }
    }

    #[test]
    fn step_moves_every_point() {
        let (geometry, mut waves) = generate(&config(1, 0.7), 400.0, 300.0);
        let before = waves[0].clone();
        assert!(!step(&mut waves[0], &geometry));
        assert_eq!(waves[0].accumulated_move(), 5.0);
        assert_eq!(waves[0].left_edge(), -395.0);
        for (a, b) in before.points().iter().zip(waves[0].points()) {
            assert_eq!(b.x, a.x + 5.0);
            assert_eq!(b.y, a.y);
        }
    }

    #[test]
    fn wraps_after_one_wavelength() {
        let (geometry, mut waves) = generate(&config(1, 0.7), 400.0, 300.0);
        let initial = waves[0].clone();
        let wraps = (0..80).filter(|_| step(&mut waves[0], &geometry)).count();
        assert_eq!(wraps, 1);
        assert_eq!(waves[0], initial);
    }

    #[test]
    fn diverged_needs_every_pair_apart() {
        let (_, mut waves) = generate(&config(3, 0.7), 400.0, 300.0);
        waves[0].accumulated_move = 0.0;
        waves[1].accumulated_move = 250.0;
        waves[2].accumulated_move = 100.0;
        assert!(!diverged(&waves, 200.0));
        waves[2].accumulated_move = 500.0;
        assert!(diverged(&waves, 200.0));
    }

    #[test]
    fn diverged_covers_pairs_beyond_the_third_wave() {
        let (_, mut waves) = generate(&config(4, 0.7), 400.0, 300.0);
        for (k, wave) in waves.iter_mut().enumerate() {
            wave.accumulated_move = k as f32 * 300.0;
        }
        assert!(diverged(&waves, 200.0));
        waves[3].accumulated_move = 650.0;
        assert!(!diverged(&waves, 200.0));
    }

    #[test]
    fn single_wave_is_always_diverged() {
        let (_, waves) = generate(&config(1, 0.7), 400.0, 300.0);
        assert!(diverged(&waves, 200.0));
        assert!(diverged(&[], 200.0));
    }

    #[test]
    fn advance_keeps_running_without_stop_request() {
        let (geometry, mut waves) = generate(&config(1, 0.7), 400.0, 300.0);
        assert!(advance(&mut waves, &geometry, false, 200.0));
        assert!(!advance(&mut waves, &geometry, true, 200.0));
    }

    #[test]
    fn zero_wavelength_resets_every_tick() {
        let (geometry, mut waves) = generate(&config(2, 0.7), 0.0, 0.0);
        for _ in 0..3 {
            advance(&mut waves, &geometry, false, 200.0);
        }
        for wave in &waves {
            assert_eq!(wave.accumulated_move(), 0.0);
            assert!(wave.points().iter().all(|p| p.x == 0.0));
        }
    }
}
