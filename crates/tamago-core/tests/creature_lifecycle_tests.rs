//! End-to-end tests for the creature lifecycle
//!
//! These drive the public API only: build a kind, raise a creature, tick it,
//! feed it, age it and read its history back.

use std::sync::Arc;

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use tamago_core::{
    ActionEvent, Creature, CreatureAction, Kind, MaturePhase, ModelError, ParameterKind,
    ParameterTemplate, PlayerAction, kinds,
};

fn cube() -> Arc<Kind> {
    Arc::new(kinds::cube().expect("built-in cube kind"))
}

fn uniform_phase(days: u32, initial: Option<f32>, max: f32) -> MaturePhase {
    let templates = ParameterKind::ALL
        .iter()
        .map(|&kind| ParameterTemplate::new(kind, initial, 0.0, max).unwrap());
    MaturePhase::new(
        days,
        templates,
        vec![PlayerAction::Feed { amount: 1.0 }],
        vec![CreatureAction::ChaseTail { chance: 0.5 }],
    )
    .unwrap()
}

// ============================================================================
// Cube walkthrough
// ============================================================================

#[test]
fn test_cube_feeding_and_growth_walkthrough() {
    let mut yasha = Creature::new(cube(), "Yasha");

    for _ in 0..20 {
        yasha.update();
    }
    assert_eq!(yasha.parameters().value(ParameterKind::Satiety), 30.0);
    assert_eq!(yasha.parameters().value(ParameterKind::Health), 50.0);

    let event = yasha.perform_player_action("Feed").unwrap();
    assert_eq!(
        event,
        ActionEvent::Fed {
            amount: 3.0,
            satiety: 33.0
        }
    );

    // Day 10 lies in the second phase: bounds (0, 75), no override
    assert!(yasha.set_age(10).unwrap());
    assert_eq!(yasha.parameters().value(ParameterKind::Satiety), 33.0);
    assert_eq!(yasha.parameters()[ParameterKind::Satiety].range(), (0.0, 75.0));

    for _ in 0..20 {
        yasha.update();
    }
    assert_eq!(yasha.parameters().value(ParameterKind::Satiety), 13.0);

    for _ in 0..20 {
        yasha.perform_player_action("Feed").unwrap();
    }
    assert_eq!(yasha.parameters().value(ParameterKind::Satiety), 75.0);

    assert_eq!(yasha.history().len(), 40);
    assert_eq!(yasha.history().get(19).unwrap().age(), 0);
    assert_eq!(yasha.history().get(20).unwrap().age(), 10);
}

#[test]
fn test_cached_actions_from_an_old_phase_are_replaced() {
    let mut yasha = Creature::new(cube(), "Yasha");
    let old_feed = yasha.player_actions()[0];

    yasha.set_age(30).unwrap();
    assert_ne!(yasha.player_actions()[0], old_feed);
    assert_eq!(yasha.player_actions()[0], PlayerAction::Feed { amount: 7.0 });
}

// ============================================================================
// Decay and coupling
// ============================================================================

#[test]
fn test_satiety_decays_monotonically_to_floor() {
    let mut creature = Creature::new(cube(), "Decay");

    for n in 1..=60 {
        creature.update();
        let expected = f32::max(0.0, 50.0 - n as f32);
        assert_eq!(creature.parameters().value(ParameterKind::Satiety), expected);
    }
}

#[test]
fn test_health_follows_starvation() {
    let mut creature = Creature::new(cube(), "Hungry");
    let mut previous = creature.parameters().value(ParameterKind::Health);

    for _ in 0..80 {
        let satiety = creature.parameters().value(ParameterKind::Satiety);
        creature.update();
        let health = creature.parameters().value(ParameterKind::Health);

        // Threshold for satiety bounds (0, 50) is 12.5
        let expected_drop = if satiety > 0.0 && satiety < 12.5 {
            1.0
        } else if satiety == 0.0 {
            2.0
        } else {
            0.0
        };
        assert_eq!(health, f32::max(0.0, previous - expected_drop));
        previous = health;
    }

    assert_eq!(previous, 0.0);
}

// ============================================================================
// Growth policy
// ============================================================================

#[test]
fn test_growth_overrides_or_carries_per_template() {
    let young = uniform_phase(3, Some(8.0), 10.0);

    let adult_templates = [
        ParameterTemplate::with_value(ParameterKind::Health, 40.0, 0.0, 40.0).unwrap(),
        ParameterTemplate::with_value(ParameterKind::Satiety, 0.0, 0.0, 40.0).unwrap(),
        ParameterTemplate::carry(ParameterKind::Fatigue, 0.0, 40.0).unwrap(),
        ParameterTemplate::carry(ParameterKind::Hygiene, 0.0, 40.0).unwrap(),
        ParameterTemplate::carry(ParameterKind::Mood, 5.0, 40.0).unwrap(),
        ParameterTemplate::carry(ParameterKind::Stamina, 0.0, 4.0).unwrap(),
    ];
    let adult = MaturePhase::new(10, adult_templates, vec![], vec![]).unwrap();

    let kind = Arc::new(Kind::new("Blob", vec![young, adult]).unwrap());
    let mut blob = Creature::new(kind, "Blob");
    blob.update();

    let before = blob.parameters().clone();
    assert!(blob.set_age(3).unwrap());
    let after = blob.parameters();

    assert_eq!(after.value(ParameterKind::Health), 40.0);
    // An explicit zero is an override, not a carry
    assert_eq!(after.value(ParameterKind::Satiety), 0.0);
    assert_eq!(
        after.value(ParameterKind::Fatigue),
        before.value(ParameterKind::Fatigue)
    );
    // Carried values are clamped into the new bounds
    assert_eq!(after.value(ParameterKind::Mood), 8.0);
    assert_eq!(after.value(ParameterKind::Stamina), 4.0);

    for template in blob.phase().parameters() {
        assert_eq!(blob.parameters()[template.kind()].range(), template.range());
    }
    assert!(blob.player_actions().is_empty());
    assert!(blob.creature_actions().is_empty());
}

#[test]
fn test_age_change_inside_phase_keeps_parameters() {
    let mut creature = Creature::new(cube(), "Still");
    creature.update();
    let before = creature.parameters().clone();

    assert!(!creature.set_age(3).unwrap());
    assert_eq!(creature.parameters(), &before);
}

// ============================================================================
// History
// ============================================================================

#[test]
fn test_history_grows_by_one_per_update() {
    let mut creature = Creature::new(cube(), "Log");

    for n in 1..=12 {
        creature.update();
        assert_eq!(creature.history().len(), n);
    }

    let first = *creature.history().get(0).unwrap();
    for _ in 0..5 {
        creature.update();
    }
    assert_eq!(creature.history().get(0), Some(&first));

    for kind in ParameterKind::ALL {
        assert_eq!(
            creature.history().series(kind).len(),
            creature.history().len()
        );
    }
    let satiety = creature.history().series(ParameterKind::Satiety);
    assert_eq!(satiety[..3], [49.0, 48.0, 47.0]);
}

// ============================================================================
// Kind coverage
// ============================================================================

#[test]
fn test_lookup_succeeds_exactly_within_lifespan() {
    let durations = [1, 4, 9, 2];
    let phases = durations
        .iter()
        .map(|&days| uniform_phase(days, Some(1.0), 10.0))
        .collect();
    let kind = Kind::new("Steps", phases).unwrap();
    let total: u32 = durations.iter().sum();

    for age in 0..total {
        assert!(kind.phase_at(age).is_ok(), "age {age} should be covered");
    }
    for age in [total, total + 1, u32::MAX] {
        assert_eq!(
            kind.phase_at(age).unwrap_err(),
            ModelError::AgeOutOfRange {
                age,
                lifespan: total
            }
        );
    }
}

#[test]
fn test_random_action_is_reproducible_with_seed() {
    let run = |seed| {
        let mut creature = Creature::new(cube(), "Seeded");
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
        (0..50)
            .map(|_| creature.random_action(&mut rng).unwrap())
            .collect::<Vec<_>>()
    };

    assert_eq!(run(99), run(99));
}
