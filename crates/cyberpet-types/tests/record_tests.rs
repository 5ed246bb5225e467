use cyberpet_types::*;
use serde_json::json;

#[test]
fn test_create_twice_gives_equal_independent_records() {
    let first = PetRecord::create("Fluffy");
    let mut second = PetRecord::create("Fluffy");
    assert_eq!(first, second);

    second.set("hp", 1);
    assert_eq!(first.hp, Some(100));
    assert_ne!(first, second);
}

#[test]
fn test_builder_matches_course_shape() {
    let record = PetRecord::builder("Byte").hp(80).hunger(30).mood("happy").build();
    assert_eq!(
        record.to_value(),
        json!({"name": "Byte", "hp": 80, "hunger": 30, "mood": "happy"})
    );
}

#[test]
fn test_any_json_object_survives_decode_encode() -> anyhow::Result<()> {
    let original = json!({
        "name": "Glitch",
        "hp": "full",
        "hunger": 12,
        "max_hp": 250,
        "gold": 0,
        "inventory": ["potion", {"kind": "key", "door": 3}],
        "ratio": 0.75,
        "mood": null
    });

    let record: PetRecord = serde_json::from_value(original.clone())?;
    assert_eq!(record.hp, None);
    assert_eq!(record.hunger, Some(12));
    assert_eq!(record.max_hp, Some(250));
    assert_eq!(record.mood, None);

    let encoded = record.to_json_pretty()?;
    let back: serde_json::Value = serde_json::from_str(&encoded)?;
    assert_eq!(back, original);
    assert_eq!(PetRecord::from_json_str(&encoded)?, record);
    Ok(())
}

#[test]
fn test_non_object_is_rejected() {
    assert!(PetRecord::from_json_str("[1, 2, 3]").is_err());
    assert!(PetRecord::from_json_str("{not json").is_err());
}

#[test]
fn test_stat_panel_and_hud_rules_disagree_at_forty() {
    assert_eq!(StatLevel::classify(40), StatLevel::Warning);
    assert_eq!(HpBand::from_percent(percent_of(40, 100)), HpBand::Bad);
}
