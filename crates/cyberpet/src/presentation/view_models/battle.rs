use cyberpet_types::HpBand;
use serde::Serialize;

// --------------------------------------------------------
// HUD
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct HudViewModel {
    pub name: String,
    pub hp: i64,
    pub max_hp: i64,
    pub gold: i64,
    /// hp as a share of max_hp, clipped to 0..=100.
    pub percent: i64,
    pub band: HpBand,
}

// --------------------------------------------------------
// Dashboard
// --------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Enemy,
}

#[derive(Debug, Serialize)]
pub struct CardViewModel {
    pub side: Side,
    pub name: String,
    pub hp: i64,
    pub max_hp: i64,
    pub mood: String,
    /// Bar fill, clipped to 0..=100.
    pub percent: i64,
    /// Inline portrait; `None` renders a grey placeholder with the mood.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portrait: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DashboardViewModel {
    pub player: CardViewModel,
    pub enemy: Option<CardViewModel>,
    /// Last 5 log lines, newest first.
    pub recent_logs: Vec<String>,
    /// Last 3 log lines, oldest first, for the text view.
    pub console_logs: Vec<String>,
}

// --------------------------------------------------------
// Battle log
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct BattleLogViewModel {
    /// Last 10 lines, newest first.
    pub recent: Vec<String>,
    /// Last 5 lines, oldest first, for the text view.
    pub console_tail: Vec<String>,
}
