use rand::SeedableRng;
use rand::rngs::StdRng;
use viva::prelude::*;

fn tip(content: &str, category: &str) -> Tip {
    Tip::new(content).with_category(category)
}

fn load(rotator: &mut TipRotator, body: &str, rng: &mut StdRng) -> FetchOutcome {
    rotator.begin_fetch();
    let result = TipsPayload::from_json(body).map(TipsPayload::into_tips);
    rotator.finish_fetch(result, rng)
}

#[test]
fn test_every_accepted_shape_loads_all_tips() {
    let items = r#"[{"content": "Drink water", "category": "hydration"},
                    {"content": "Walk daily", "category": "activity"},
                    {"content": "Eat greens", "category": "nutrition"}]"#;
    let bodies = [
        items.to_string(),
        format!(r#"{{"tips": {}}}"#, items),
        format!(r#"{{"results": {}, "count": 3}}"#, items),
    ];

    for (seed, body) in bodies.iter().enumerate() {
        let mut rng = StdRng::seed_from_u64(seed as u64);
        let mut rotator = TipRotator::new(Tip::fallback());

        assert_eq!(load(&mut rotator, body, &mut rng), FetchOutcome::Loaded(3));
        assert_eq!(rotator.all_tips().len(), 3);
        assert!(rotator.all_tips().contains(rotator.current_tip()));
        assert!(rotator.error().is_none());
        assert!(!rotator.is_loading());
    }
}

#[test]
fn test_zero_tips_keeps_fallback_without_error() {
    for body in ["[]", r#"{"tips": []}"#, r#"{"results": []}"#, "{}"] {
        let mut rng = StdRng::seed_from_u64(0);
        let mut rotator = TipRotator::new(Tip::fallback());

        assert_eq!(load(&mut rotator, body, &mut rng), FetchOutcome::Empty);
        assert_eq!(rotator.current_tip(), &Tip::fallback());
        assert!(rotator.error().is_none());
    }
}

#[test]
fn test_failure_keeps_fallback_with_message() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut rotator = TipRotator::new(Tip::fallback());

    assert_eq!(load(&mut rotator, "<!doctype html>", &mut rng), FetchOutcome::Failed);
    assert_eq!(rotator.current_tip(), &Tip::fallback());
    assert_eq!(rotator.error(), Some("Failed to load tips. Using default."));
    assert_eq!(rotator.refresh_action(), RefreshAction::Retry);
}

#[test]
fn test_hundred_advances_never_repeat_the_previous_tip() {
    let a = tip("A", "hydration");
    let b = tip("B", "activity");
    let c = tip("C", "wellness");

    let mut rng = StdRng::seed_from_u64(2024);
    let mut rotator = TipRotator::new(Tip::fallback());
    rotator.begin_fetch();
    rotator.finish_fetch(Ok(vec![a, b.clone(), c]), &mut rng);

    // Walk until B is on display so the run starts from it.
    while rotator.current_tip() != &b {
        rotator.begin_advance(&mut rng);
        rotator.commit_advance();
    }

    for _ in 0..100 {
        let previous = rotator.current_tip().clone();
        rotator.begin_advance(&mut rng);
        rotator.commit_advance();
        assert_ne!(rotator.current_tip(), &previous);
    }
}

#[test]
fn test_single_tip_advance_is_stable() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut rotator = TipRotator::new(Tip::fallback());
    rotator.begin_fetch();
    rotator.finish_fetch(Ok(vec![tip("Only one", "wellness")]), &mut rng);

    for _ in 0..10 {
        rotator.begin_advance(&mut rng);
        rotator.commit_advance();
        assert_eq!(rotator.current_tip().content, "Only one");
        assert_eq!(rotator.icon(), TipIcon::Heart);
    }
}

#[test]
fn test_refresh_is_ignored_while_busy() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut rotator = TipRotator::new(Tip::fallback());

    rotator.begin_fetch();
    assert_eq!(rotator.refresh_action(), RefreshAction::Ignored);

    rotator.finish_fetch(Ok(vec![tip("A", "x"), tip("B", "y")]), &mut rng);
    let index = rotator.current_index();
    rotator.begin_advance(&mut rng);
    assert_eq!(rotator.refresh_action(), RefreshAction::Ignored);
    assert_eq!(rotator.current_index(), index);
}

#[test]
fn test_view_serializes_for_renderers() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut rotator = TipRotator::new(Tip::fallback());
    rotator.begin_fetch();
    rotator.finish_fetch(Ok(vec![tip("Drink water", "Hydration")]), &mut rng);

    let json = serde_json::to_value(rotator.view()).unwrap();
    assert_eq!(json["tip"]["content"], "Drink water");
    assert_eq!(json["icon"], "droplet");
    assert_eq!(json["index"], 0);
    assert_eq!(json["total"], 1);
    assert_eq!(json["loading"], false);
    assert!(json["error"].is_null());
}
