//! Images, stat panels, bubbles and name tags.

use cyberpet::{DisplayMode, Emission, HungerScale, PetRecord, Tone, create_record};
use cyberpet_testing::TestWorld;
use cyberpet_testing::assertions::{
    assert_lines, assert_text_only, single_fragment, stat_levels,
};

#[test]
fn test_egg_rich_prints_then_shows_image() -> anyhow::Result<()> {
    let world = TestWorld::new().with_course_images();
    let mut rec = world.stage(DisplayMode::Rich);

    rec.stage.show_egg();

    let emissions = rec.output.emissions();
    assert_eq!(emissions.len(), 2);
    assert_eq!(
        emissions[0],
        Emission::Text("Mystery Egg found!".to_string(), Tone::Plain)
    );
    let Emission::Html(html) = &emissions[1] else {
        anyhow::bail!("expected markup, got {:?}", emissions[1]);
    };
    assert!(html.contains(r#"src="data:image/png;base64,"#));
    assert!(html.contains("width: 200px; height: 200px"));
    Ok(())
}

#[test]
fn test_egg_and_mood_plain() -> anyhow::Result<()> {
    let world = TestWorld::new();
    let mut rec = world.stage(DisplayMode::Plain);

    rec.stage.summon();
    rec.stage.show_mood("happy");
    rec.stage.show_image("poop.png");

    assert_text_only(&rec.output)?;
    assert_lines(
        &rec.output,
        &[
            "(O) [Mystery Egg]",
            "(^.happy.^) [Pet is happy]",
            "[IMAGE] poop.png",
        ],
    )
}

#[test]
fn test_missing_image_renders_nothing() {
    let world = TestWorld::new();
    let mut rec = world.stage(DisplayMode::Rich);

    rec.stage.show_mood("ecstatic");

    assert!(rec.output.emissions().is_empty());
}

#[test]
fn test_image_found_in_fallback_root() -> anyhow::Result<()> {
    let world = TestWorld::new().with_fallback_image("sad.png");
    let mut rec = world.stage(DisplayMode::Rich);

    rec.stage.show_image_sized("sad.png", 120);

    let html = single_fragment(&rec.output)?;
    assert!(html.contains("width: 120px; height: 120px"));
    assert!(html.contains(r#"alt="sad.png""#));
    Ok(())
}

#[test]
fn test_stat_panel_levels() -> anyhow::Result<()> {
    let world = TestWorld::new();
    let mut rec = world.stage(DisplayMode::Rich);

    rec.stage.show_stat_panel("Fluffy", 19, 20, Some(50));
    rec.stage.show_stat_panel("Fluffy", 150, -10, None);

    let fragments = rec.output.fragments();
    assert_eq!(stat_levels(&fragments[0]), ["critical", "warning", "nominal"]);
    assert_eq!(stat_levels(&fragments[1]), ["nominal", "critical"]);
    assert!(fragments[1].contains("150/100"));
    assert!(fragments[1].contains("width: 100%"));
    assert!(fragments[1].contains("width: 0%"));
    Ok(())
}

#[test]
fn test_inverted_hunger_scale() -> anyhow::Result<()> {
    let world = TestWorld::new();
    let mut rec = world.stage(DisplayMode::Rich);
    rec.stage = rec.stage.with_hunger_scale(HungerScale::Inverted);

    rec.stage.show_stat_panel("Fluffy", 90, 90, None);

    let html = single_fragment(&rec.output)?;
    assert_eq!(stat_levels(&html), ["nominal", "critical"]);
    Ok(())
}

#[test]
fn test_inverted_hunger_at_integer_extremes() -> anyhow::Result<()> {
    let world = TestWorld::new();
    let mut rec = world.stage(DisplayMode::Rich);
    rec.stage = rec.stage.with_hunger_scale(HungerScale::Inverted);

    rec.stage.show_stat_panel("x", 50, i64::MIN, None);
    rec.stage.show_stat_panel("x", 50, i64::MAX, None);

    let fragments = rec.output.fragments();
    assert_eq!(fragments.len(), 2);
    assert_eq!(stat_levels(&fragments[0]), ["nominal", "nominal"]);
    assert_eq!(stat_levels(&fragments[1]), ["nominal", "critical"]);
    Ok(())
}

#[test]
fn test_stat_panel_plain() -> anyhow::Result<()> {
    let world = TestWorld::new();
    let mut rec = world.stage(DisplayMode::Plain);

    rec.stage.show_stat_panel("Fluffy", 80, 30, Some(65));

    assert_lines(
        &rec.output,
        &["--- Fluffy ---", "HP: 80/100", "Hunger: 30/100", "Happy: 65/100"],
    )
}

#[test]
fn test_pet_record_shows_mood_then_stats() -> anyhow::Result<()> {
    let world = TestWorld::new();
    let mut rec = world.stage(DisplayMode::Plain);

    let mut pet = PetRecord::builder("Byte").hp(80).hunger(30).mood("sad").build();
    pet.set("happiness", 10);
    rec.stage.show_pet_record(&pet);
    rec.stage.show_pet_record(&PetRecord::new());

    assert_lines(
        &rec.output,
        &[
            "(^.sad.^) [Pet is sad]",
            "--- Byte ---",
            "HP: 80/100",
            "Hunger: 30/100",
            "Happy: 10/100",
            "(^.normal.^) [Pet is normal]",
            "--- Unknown ---",
            "HP: 0/100",
            "Hunger: 0/100",
        ],
    )
}

#[test]
fn test_caller_text_is_escaped_everywhere() -> anyhow::Result<()> {
    let world = TestWorld::new();
    let mut rec = world.stage(DisplayMode::Rich);
    let evil = r#"<img src=x onerror="alert('pwn')">"#;

    rec.stage.say(evil, evil);
    rec.stage.show_label(evil);
    rec.stage.show_stat_panel(evil, 50, 50, None);
    rec.stage.show_hud(&create_record(evil));
    rec.stage.show_mindset(evil);
    rec.stage.show_credits(evil);

    let fragments = rec.output.fragments();
    assert_eq!(fragments.len(), 6);
    for html in fragments {
        assert!(!html.contains("<img src=x"), "unescaped: {}", html);
        assert!(html.contains("&lt;img src=x onerror=&quot;alert(&#x27;pwn&#x27;)&quot;&gt;"));
    }
    Ok(())
}

#[test]
fn test_say_and_label_plain() -> anyhow::Result<()> {
    let world = TestWorld::new();
    let mut rec = world.stage(DisplayMode::Plain);

    rec.stage.say("Fluffy", "I'm hungry!");
    rec.stage.show_speech("Owner", "Here you go.");
    rec.stage.show_label("Fluffy");

    assert_lines(
        &rec.output,
        &[
            "Fluffy: I'm hungry!",
            "Owner: Here you go.",
            "[LABEL] Assigned Name: Fluffy",
        ],
    )
}
