use cyberpet_types::{HungerScale, PetRecord, StatLevel, bar_width};

use crate::presentation::view_models::{
    ImageViewModel, LabelViewModel, SpeechViewModel, StatBarViewModel, StatPanelViewModel,
};

/// Reader defaults for a pet shown through its record.
const UNKNOWN_NAME: &str = "Unknown";

pub fn present_image(filename: &str, width: u32, src: Option<String>) -> ImageViewModel {
    ImageViewModel {
        filename: filename.to_string(),
        width,
        src,
    }
}

fn stat_bar(
    label: &'static str,
    text_label: &'static str,
    value: i64,
    level: StatLevel,
) -> StatBarViewModel {
    StatBarViewModel {
        label,
        text_label,
        value,
        width: bar_width(value),
        level,
    }
}

pub fn present_stat_panel(
    name: &str,
    hp: i64,
    hunger: i64,
    happiness: Option<i64>,
    hunger_scale: HungerScale,
) -> StatPanelViewModel {
    let mut bars = vec![
        stat_bar("HP", "HP", hp, StatLevel::classify(hp)),
        stat_bar("Hunger", "Hunger", hunger, hunger_scale.classify(hunger)),
    ];
    if let Some(happiness) = happiness {
        bars.push(stat_bar(
            "Happiness",
            "Happy",
            happiness,
            StatLevel::classify(happiness),
        ));
    }

    StatPanelViewModel {
        name: name.to_string(),
        bars,
    }
}

/// Stat panel for a record, with `Unknown` / 0 / 0 for missing fields.
pub fn present_record_stats(record: &PetRecord, hunger_scale: HungerScale) -> StatPanelViewModel {
    present_stat_panel(
        record.name().unwrap_or(UNKNOWN_NAME),
        record.hp.unwrap_or(0),
        record.hunger.unwrap_or(0),
        record.happiness,
        hunger_scale,
    )
}

pub fn present_speech(speaker: &str, message: &str) -> SpeechViewModel {
    SpeechViewModel {
        speaker: speaker.to_string(),
        message: message.to_string(),
    }
}

pub fn present_label(name: &str) -> LabelViewModel {
    LabelViewModel {
        name: name.to_string(),
    }
}
