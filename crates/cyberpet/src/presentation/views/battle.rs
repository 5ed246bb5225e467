use cyberpet_types::HpBand;
use std::fmt;

use crate::display::DisplayMode;
use crate::presentation::formatters::Escaped;
use crate::presentation::view_models::{
    BattleLogViewModel, CardViewModel, CreateView, DashboardViewModel, HudViewModel, Side,
};

// --------------------------------------------------------
// HUD
// --------------------------------------------------------

impl CreateView for HudViewModel {
    fn create_view<'a>(&'a self, mode: DisplayMode) -> Box<dyn fmt::Display + 'a> {
        match mode {
            DisplayMode::Rich => Box::new(HudHtml { data: self }),
            DisplayMode::Plain => Box::new(HudText { data: self }),
        }
    }
}

struct HudHtml<'a> {
    data: &'a HudViewModel,
}

impl fmt::Display for HudHtml<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.data;
        f.write_str(r#"<div class="hud" style="background: rgba(0,0,0,0.8); color: white; padding: 10px; border-radius: 10px; display: flex; justify-content: space-between; align-items: center; width: 100%; max-width: 600px;">"#)?;
        write!(
            f,
            r#"<div style="font-weight: bold; font-size: 1.2em;">👤 {}</div>"#,
            Escaped(&d.name)
        )?;
        write!(
            f,
            r#"<div style="flex-grow: 1; margin: 0 20px;"><div style="background: #333; height: 15px; border-radius: 10px; overflow: hidden;"><div class="hp-fill" data-band="{band}" style="background: {color}; width: {percent}%; height: 100%;"></div></div><div style="font-size: 0.8em; text-align: center;">HP: {hp}/{max_hp}</div></div>"#,
            band = band_name(d.band),
            color = d.band.color(),
            percent = d.percent,
            hp = d.hp,
            max_hp = d.max_hp,
        )?;
        write!(f, r#"<div style="color: gold;">💰 {} G</div>"#, d.gold)?;
        f.write_str("</div>")
    }
}

fn band_name(band: HpBand) -> &'static str {
    match band {
        HpBand::Good => "good",
        HpBand::Bad => "bad",
    }
}

struct HudText<'a> {
    data: &'a HudViewModel,
}

impl fmt::Display for HudText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let d = self.data;
        writeln!(f, "--- HUD ---")?;
        write!(
            f,
            "{} | HP: {}/{} | Gold: {}",
            d.name, d.hp, d.max_hp, d.gold
        )
    }
}

// --------------------------------------------------------
// Dashboard
// --------------------------------------------------------

impl Side {
    fn accent(self) -> &'static str {
        match self {
            Side::Player => "#00C851",
            Side::Enemy => "#ff4444",
        }
    }

    fn tint(self) -> &'static str {
        match self {
            Side::Player => "rgba(0, 50, 0, 0.1)",
            Side::Enemy => "rgba(50, 0, 0, 0.1)",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Side::Player => "card player",
            Side::Enemy => "card enemy",
        }
    }
}

impl fmt::Display for CardViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let accent = self.side.accent();
        write!(
            f,
            r#"<div class="{class}" style="border: 2px solid {accent}; background: {tint}; border-radius: 10px; padding: 10px; width: 45%; display: flex; align-items: center;"><div style="margin-right: 15px;">"#,
            class = self.side.class(),
            accent = accent,
            tint = self.side.tint(),
        )?;
        match &self.portrait {
            Some(src) => write!(
                f,
                r#"<img src="{}" style="height: 80px; width: 80px; object-fit: contain;">"#,
                Escaped(src)
            )?,
            None => write!(
                f,
                r#"<div class="portrait-placeholder" style="height: 80px; width: 80px; background: #ccc; display: flex; align-items: center; justify-content: center;">{}</div>"#,
                Escaped(&self.mood)
            )?,
        }
        write!(
            f,
            r#"</div><div style="width: 100%;"><div style="font-weight: bold; font-size: 1.1em; margin-bottom: 5px;">{name}</div><div style="background: #444; height: 10px; border-radius: 5px; width: 100%;"><div style="background: {accent}; width: {percent}%; height: 100%; border-radius: 5px;"></div></div><div style="font-size: 0.8em; margin-top: 2px;">HP: {hp}/{max_hp}</div></div></div>"#,
            name = Escaped(&self.name),
            accent = accent,
            percent = self.percent,
            hp = self.hp,
            max_hp = self.max_hp,
        )
    }
}

impl CreateView for DashboardViewModel {
    fn create_view<'a>(&'a self, mode: DisplayMode) -> Box<dyn fmt::Display + 'a> {
        match mode {
            DisplayMode::Rich => Box::new(DashboardHtml { data: self }),
            DisplayMode::Plain => Box::new(DashboardText { data: self }),
        }
    }
}

struct DashboardHtml<'a> {
    data: &'a DashboardViewModel,
}

impl fmt::Display for DashboardHtml<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(r#"<div class="dashboard" style="font-family: Arial, sans-serif; max-width: 600px; border: 1px solid #ccc; padding: 10px; border-radius: 10px; background: #fff;">"#)?;
        f.write_str(r#"<div style="display: flex; justify-content: space-between; margin-bottom: 15px;">"#)?;
        write!(f, "{}", self.data.player)?;
        match &self.data.enemy {
            Some(enemy) => write!(f, "{}", enemy)?,
            None => f.write_str(r#"<div class="card empty" style="width: 45%;"></div>"#)?,
        }
        f.write_str("</div>")?;
        f.write_str(r#"<div class="battle-log" style="background: #f9f9f9; padding: 10px; border-radius: 5px; height: 120px; overflow-y: auto; font-size: 0.9em;"><strong>📜 Battle Log</strong>"#)?;
        write_log_entries(f, &self.data.recent_logs)?;
        f.write_str("</div></div>")
    }
}

struct DashboardText<'a> {
    data: &'a DashboardViewModel,
}

impl fmt::Display for DashboardText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "--- DASHBOARD ---")?;
        let player = &self.data.player;
        writeln!(f, "Player: {} | HP: {}", player.name, player.hp)?;
        if let Some(enemy) = &self.data.enemy {
            writeln!(f, "Enemy: {} | HP: {}", enemy.name, enemy.hp)?;
        }
        write!(f, "--- LOGS ---")?;
        for line in &self.data.console_logs {
            write!(f, "\n> {}", line)?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Battle log
// --------------------------------------------------------

impl CreateView for BattleLogViewModel {
    fn create_view<'a>(&'a self, mode: DisplayMode) -> Box<dyn fmt::Display + 'a> {
        match mode {
            DisplayMode::Rich => Box::new(BattleLogHtml { data: self }),
            DisplayMode::Plain => Box::new(BattleLogText { data: self }),
        }
    }
}

struct BattleLogHtml<'a> {
    data: &'a BattleLogViewModel,
}

impl fmt::Display for BattleLogHtml<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(r#"<div class="battle-log" style="font-family: Arial, sans-serif; max-width: 600px; border: 2px solid #333; padding: 10px; border-radius: 10px; background: #f9f9f9;"><div style="font-weight: bold; margin-bottom: 10px;">📜 Battle Log</div><div style="background: #fff; padding: 10px; border-radius: 5px; height: 150px; overflow-y: auto; font-size: 0.9em;">"#)?;
        write_log_entries(f, &self.data.recent)?;
        f.write_str("</div></div>")
    }
}

struct BattleLogText<'a> {
    data: &'a BattleLogViewModel,
}

impl fmt::Display for BattleLogText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "--- BATTLE LOG ---")?;
        for line in &self.data.console_tail {
            write!(f, "\n> {}", line)?;
        }
        Ok(())
    }
}

fn write_log_entries(f: &mut fmt::Formatter, lines: &[String]) -> fmt::Result {
    for line in lines {
        write!(
            f,
            r#"<div class="log-entry" style="border-bottom: 1px solid #eee; padding: 4px;">{}</div>"#,
            Escaped(line)
        )?;
    }
    Ok(())
}
