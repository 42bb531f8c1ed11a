//! Unit tests for colony-trail.

use std::sync::Arc;

use colony_core::{ManualClock, Millis, TargetType, Vec2};

use crate::{Pheromone, PheromoneTrail};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn trail(decay_ms: u64) -> (Arc<ManualClock>, PheromoneTrail) {
    let (clock, shared) = ManualClock::shared(Millis(10_000));
    (clock, PheromoneTrail::new(shared, decay_ms))
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

// ── Pheromone ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod pheromone_tests {
    use super::*;

    #[test]
    fn strength_is_linear_in_age() {
        let p = Pheromone::fresh(Vec2::ZERO, Millis(1_000), TargetType::Food);
        assert_eq!(p.strength, 1.0);
        assert!(close(p.strength_at(Millis(1_000), 5_000), 1.0));
        assert!(close(p.strength_at(Millis(2_000), 5_000), 0.8));
        assert!(close(p.strength_at(Millis(3_500), 5_000), 0.5));
        assert_eq!(p.strength_at(Millis(6_000), 5_000), 0.0);
        assert_eq!(p.strength_at(Millis(60_000), 5_000), 0.0);
    }

    #[test]
    fn future_timestamp_is_capped_at_full_strength() {
        let p = Pheromone::fresh(Vec2::ZERO, Millis(2_000), TargetType::Nest);
        assert_eq!(p.strength_at(Millis(1_000), 5_000), 1.0);
    }
}

// ── Trail ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod trail_tests {
    use super::*;

    #[test]
    fn add_does_not_deduplicate() {
        let (_clock, mut t) = trail(5_000);
        let now = t.effective_now();
        t.add_pheromone(Vec2::new(1.0, 1.0), now, TargetType::Food);
        t.add_pheromone(Vec2::new(1.0, 1.0), now, TargetType::Food);
        assert_eq!(t.len(), 2);
        assert!(t.pheromones().iter().all(|p| p.strength == 1.0));
    }

    #[test]
    fn decay_is_monotone_and_removes_expired() {
        let (clock, mut t) = trail(1_000);
        t.add_pheromone(Vec2::ZERO, t.effective_now(), TargetType::Food);

        let mut last = 1.0;
        for _ in 0..9 {
            clock.advance_ms(100);
            t.decay();
            let s = t.pheromones()[0].strength;
            assert!(s <= last);
            last = s;
        }
        assert!(close(last, 0.1));

        clock.advance_ms(100);
        t.decay();
        assert!(t.is_empty(), "strength 0 must be dropped");
    }

    #[test]
    fn decay_is_frozen_while_paused() {
        let (clock, mut t) = trail(1_000);
        t.add_pheromone(Vec2::ZERO, t.effective_now(), TargetType::Nest);
        clock.advance_ms(200);
        t.decay();
        assert!(close(t.pheromones()[0].strength, 0.8));

        t.pause();
        clock.advance_ms(5_000);
        t.decay();
        assert!(close(t.pheromones()[0].strength, 0.8));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn pause_is_subtracted_after_resume() {
        // Two decays separated by a pause P match one decay after (t2 - t1 - P).
        let (clock, mut paused) = trail(1_000);
        paused.add_pheromone(Vec2::ZERO, paused.effective_now(), TargetType::Food);
        clock.advance_ms(100);
        paused.decay();
        paused.pause();
        clock.advance_ms(400);
        paused.resume();
        clock.advance_ms(200);
        paused.decay();

        let (clock2, mut straight) = trail(1_000);
        straight.add_pheromone(Vec2::ZERO, straight.effective_now(), TargetType::Food);
        clock2.advance_ms(300);
        straight.decay();

        assert!(close(paused.pheromones()[0].strength, straight.pheromones()[0].strength));
        assert!(close(paused.pheromones()[0].strength, 0.7));
        assert_eq!(paused.paused_duration(), 400);
    }

    #[test]
    fn pause_and_resume_are_idempotent() {
        let (clock, mut t) = trail(1_000);
        t.pause();
        clock.advance_ms(100);
        t.pause(); // must not move the pause start
        clock.advance_ms(100);
        t.resume();
        t.resume(); // no open pause: no-op
        assert_eq!(t.paused_duration(), 200);
        assert!(!t.is_paused());
    }

    #[test]
    fn effective_now_stands_still_while_paused() {
        let (clock, mut t) = trail(1_000);
        let before = t.effective_now();
        t.pause();
        clock.advance_ms(750);
        assert_eq!(t.effective_now(), before);
        t.resume();
        clock.advance_ms(50);
        assert_eq!(t.effective_now(), Millis(before.0 + 50));
    }

    #[test]
    fn deposits_after_a_pause_start_at_full_strength() {
        let (clock, mut t) = trail(1_000);
        t.pause();
        clock.advance_ms(3_000);
        t.resume();
        t.add_pheromone(Vec2::ZERO, t.effective_now(), TargetType::Food);
        t.decay();
        assert_eq!(t.pheromones()[0].strength, 1.0);
    }

    #[test]
    fn clear_keeps_clock_state() {
        let (clock, mut t) = trail(1_000);
        t.add_pheromone(Vec2::ZERO, t.effective_now(), TargetType::Food);
        t.pause();
        clock.advance_ms(10);
        t.clear();
        assert!(t.is_empty());
        assert!(t.is_paused());
    }
}
