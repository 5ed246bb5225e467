use cyberpet_types::battle_log::{newest_first, tail};
use cyberpet_types::{
    DEFAULT_HP, DEFAULT_MAX_HP, DEFAULT_MOOD, HpBand, PetRecord, bar_width, percent_of,
};

use crate::presentation::view_models::{
    BattleLogViewModel, CardViewModel, DashboardViewModel, HudViewModel, Side,
};

const HUD_NAME: &str = "Player";
const CARD_NAME: &str = "Unknown";

const DASHBOARD_RECENT: usize = 5;
const DASHBOARD_CONSOLE: usize = 3;
const LOG_RECENT: usize = 10;
const LOG_CONSOLE: usize = 5;

pub fn present_hud(player: &PetRecord) -> HudViewModel {
    let hp = player.hp.unwrap_or(DEFAULT_HP);
    let max_hp = player.max_hp.unwrap_or(DEFAULT_MAX_HP);
    let percent = bar_width(percent_of(hp, max_hp));

    HudViewModel {
        name: player.name().unwrap_or(HUD_NAME).to_string(),
        hp,
        max_hp,
        gold: player.gold.unwrap_or(0),
        percent,
        band: HpBand::from_percent(percent),
    }
}

/// One dashboard card. `portrait` is the embedded mood image, if any.
pub fn present_card(entity: &PetRecord, side: Side, portrait: Option<String>) -> CardViewModel {
    let hp = entity.hp.unwrap_or(DEFAULT_HP);
    let max_hp = entity.max_hp.unwrap_or(DEFAULT_MAX_HP);

    CardViewModel {
        side,
        name: entity.name().unwrap_or(CARD_NAME).to_string(),
        hp,
        max_hp,
        mood: entity.mood().unwrap_or(DEFAULT_MOOD).to_string(),
        percent: bar_width(percent_of(hp, max_hp)),
        portrait,
    }
}

/// Dashboard for a fight. `portrait` is asked for the image of a mood tag and
/// may return `None` to get the placeholder box.
pub fn present_dashboard<S, F>(
    player: &PetRecord,
    enemy: Option<&PetRecord>,
    logs: &[S],
    mut portrait: F,
) -> DashboardViewModel
where
    S: AsRef<str>,
    F: FnMut(&str) -> Option<String>,
{
    let player_card = present_card(
        player,
        Side::Player,
        portrait(player.mood().unwrap_or(DEFAULT_MOOD)),
    );
    let enemy_card = enemy.map(|e| present_card(e, Side::Enemy, portrait(e.mood().unwrap_or(DEFAULT_MOOD))));

    DashboardViewModel {
        player: player_card,
        enemy: enemy_card,
        recent_logs: owned(newest_first(logs, DASHBOARD_RECENT)),
        console_logs: owned(tail(logs, DASHBOARD_CONSOLE)),
    }
}

pub fn present_battle_log<S: AsRef<str>>(messages: &[S]) -> BattleLogViewModel {
    BattleLogViewModel {
        recent: owned(newest_first(messages, LOG_RECENT)),
        console_tail: owned(tail(messages, LOG_CONSOLE)),
    }
}

fn owned<'a, S, I>(lines: I) -> Vec<String>
where
    S: AsRef<str> + 'a,
    I: IntoIterator<Item = &'a S>,
{
    lines.into_iter().map(|l| l.as_ref().to_string()).collect()
}
