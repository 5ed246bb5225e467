//! Dashboard, HUD and battle log presenters in both display modes.

use cyberpet::{DisplayMode, PetRecord};
use cyberpet_testing::assertions::{
    assert_empty_enemy_slot, assert_in_order, assert_lines, assert_text_only, log_entry_count,
    single_fragment, stat_levels,
};
use cyberpet_testing::fixtures::{sample_enemy, sample_logs, sample_player};
use cyberpet_testing::TestWorld;

#[test]
fn test_dashboard_without_enemy_keeps_slot_and_newest_logs() -> anyhow::Result<()> {
    let world = TestWorld::new().with_course_images();
    let mut rec = world.stage(DisplayMode::Rich);
    let logs = sample_logs(8);

    rec.stage.show_dashboard(&sample_player(), None, &logs);

    let html = single_fragment(&rec.output)?;
    assert_empty_enemy_slot(&html)?;
    assert_eq!(log_entry_count(&html), 5);
    assert_in_order(
        &html,
        &["Turn 8:", "Turn 7:", "Turn 6:", "Turn 5:", "Turn 4:"],
    )?;
    assert!(!html.contains("Turn 3:"));
    Ok(())
}

#[test]
fn test_dashboard_cards_embed_portraits_or_placeholder() -> anyhow::Result<()> {
    // happy.png exists, sad.png does not
    let world = TestWorld::new().with_image("happy.png");
    let mut rec = world.stage(DisplayMode::Rich);

    rec.stage
        .show_dashboard(&sample_player(), Some(&sample_enemy()), &["Slime appears!"]);

    let html = single_fragment(&rec.output)?;
    assert_in_order(
        &html,
        &[
            r#"class="card player""#,
            "data:image/png;base64,",
            "Hero",
            "HP: 40/100",
            r#"class="card enemy""#,
            r#"class="portrait-placeholder""#,
            "sad",
            "Slime",
            "HP: 30/60",
            "📜 Battle Log",
            "Slime appears!",
        ],
    )?;
    Ok(())
}

#[test]
fn test_dashboard_plain_lines() -> anyhow::Result<()> {
    let world = TestWorld::new();
    let mut rec = world.stage(DisplayMode::Plain);
    let logs = sample_logs(4);

    rec.stage
        .show_dashboard(&sample_player(), Some(&sample_enemy()), &logs);

    assert_text_only(&rec.output)?;
    assert_lines(
        &rec.output,
        &[
            "--- DASHBOARD ---",
            "Player: Hero | HP: 40",
            "Enemy: Slime | HP: 30",
            "--- LOGS ---",
            "> Turn 2: Hero attacks for 6 damage",
            "> Turn 3: Hero attacks for 9 damage",
            "> Turn 4: Hero attacks for 12 damage",
        ],
    )
}

#[test]
fn test_hud_and_stat_panel_disagree_at_forty() -> anyhow::Result<()> {
    let world = TestWorld::new();
    let mut rec = world.stage(DisplayMode::Rich);
    let player = sample_player();

    rec.stage.show_hud(&player);
    rec.stage.show_stat_panel("Hero", 40, 80, None);

    let fragments = rec.output.fragments();
    assert_eq!(fragments.len(), 2);
    assert!(fragments[0].contains(r#"data-band="bad""#));
    assert!(fragments[0].contains("width: 40%"));
    assert!(fragments[0].contains("💰 25 G"));
    assert_eq!(stat_levels(&fragments[1]), ["warning", "nominal"]);
    Ok(())
}

#[test]
fn test_hud_plain_defaults() -> anyhow::Result<()> {
    let world = TestWorld::new();
    let mut rec = world.stage(DisplayMode::Plain);

    rec.stage.show_hud(&PetRecord::new());

    assert_lines(
        &rec.output,
        &["--- HUD ---", "Player | HP: 100/100 | Gold: 0"],
    )
}

#[test]
fn test_battle_log_windows() -> anyhow::Result<()> {
    let world = TestWorld::new();
    let logs = sample_logs(12);

    let mut rich = world.stage(DisplayMode::Rich);
    rich.stage.show_log(&logs);
    let html = single_fragment(&rich.output)?;
    assert_eq!(log_entry_count(&html), 10);
    assert_in_order(&html, &["Turn 12:", "Turn 3:"])?;
    assert!(!html.contains("Turn 2:"));

    let mut plain = world.stage(DisplayMode::Plain);
    plain.stage.show_log(&logs);
    let lines = plain.output.lines();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "--- BATTLE LOG ---");
    assert_eq!(lines[1], "> Turn 8: Hero attacks for 24 damage");
    assert_eq!(lines[5], "> Turn 12: Hero attacks for 36 damage");
    Ok(())
}

#[test]
fn test_log_lines_are_escaped() -> anyhow::Result<()> {
    let world = TestWorld::new();
    let mut rec = world.stage(DisplayMode::Rich);

    rec.stage.show_log(&["<script>alert(1)</script>"]);

    let html = single_fragment(&rec.output)?;
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    Ok(())
}
