//! Property tests for the simulation building blocks

use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use runna::Tuning;
use runna::sim::{Player, Rect, aabb_overlap, generate_platforms, recycle_front};

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (
        -1000.0f32..1000.0,
        -1000.0f32..1000.0,
        0.5f32..500.0,
        0.5f32..500.0,
    )
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

proptest! {
    #[test]
    fn overlap_is_symmetric(a in rect_strategy(), b in rect_strategy()) {
        prop_assert_eq!(aabb_overlap(&a, &b), aabb_overlap(&b, &a));
    }

    #[test]
    fn touching_edges_never_overlap(a in rect_strategy(), w in 0.5f32..500.0, dy in -400.0f32..400.0) {
        let right_neighbour = Rect::new(a.right(), a.y + dy, w, a.h);
        prop_assert!(!aabb_overlap(&a, &right_neighbour));

        let below_neighbour = Rect::new(a.x, a.bottom(), a.w, a.h);
        prop_assert!(!aabb_overlap(&a, &below_neighbour));
    }

    #[test]
    fn rect_overlaps_itself(a in rect_strategy()) {
        prop_assert!(aabb_overlap(&a, &a));
    }

    #[test]
    fn recycling_keeps_pool_size(seed in any::<u64>(), recycles in 0usize..200) {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut platforms = generate_platforms(&mut rng, &tuning);

        for _ in 0..recycles {
            prop_assert!(recycle_front(&mut platforms, &mut rng, &tuning).is_some());
        }
        prop_assert_eq!(platforms.len(), tuning.pool_size);
    }

    #[test]
    fn recycled_platform_lands_past_the_last(seed in any::<u64>(), recycles in 1usize..100) {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut platforms = generate_platforms(&mut rng, &tuning);

        for _ in 0..recycles {
            let last_right = platforms.back().map(|p| p.right()).unwrap_or_default();
            let front_id = platforms.front().map(|p| p.id);

            let id = recycle_front(&mut platforms, &mut rng, &tuning);
            prop_assert_eq!(id, front_id);

            let back = *platforms.back().unwrap();
            prop_assert_eq!(Some(back.id), front_id);
            prop_assert!(back.pos.x > last_right);
            // Allow for f32 rounding far down the track
            let gap = back.pos.x - last_right;
            prop_assert!(gap >= tuning.spawn_gap_min - 0.01);
            prop_assert!(gap <= tuning.spawn_gap_max + 0.01);
        }
    }

    #[test]
    fn pool_stays_ordered_left_to_right(seed in any::<u64>(), recycles in 0usize..60) {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut platforms = generate_platforms(&mut rng, &tuning);
        for _ in 0..recycles {
            recycle_front(&mut platforms, &mut rng, &tuning);
        }

        let snapshot = platforms.snapshot();
        for pair in snapshot.windows(2) {
            prop_assert!(pair[0].right() < pair[1].pos.x);
        }
    }

    #[test]
    fn free_fall_speed_is_capped(
        gravity in 100.0f32..5000.0,
        max_fall_speed in 100.0f32..2000.0,
        steps in 1u32..200,
        hz in 30u32..=240,
    ) {
        let tuning = Tuning {
            gravity,
            max_fall_speed,
            ..Tuning::default()
        };
        let dt = 1.0 / hz as f32;
        let mut player = Player::new(&tuning);
        for _ in 0..steps {
            player.integrate(&tuning, dt);
        }

        let expected = (gravity * dt * steps as f32).min(max_fall_speed);
        let tolerance = expected * 1e-3 + 1e-3;
        prop_assert!(
            (player.vel.y - expected).abs() <= tolerance,
            "vy {} expected {}",
            player.vel.y,
            expected
        );
        prop_assert!(player.vel.y <= max_fall_speed);
    }
}
