use cyberpet_types::StatLevel;
use serde::Serialize;

// --------------------------------------------------------
// Image
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ImageViewModel {
    pub filename: String,
    pub width: u32,
    /// Inline data URI; `None` when the asset could not be loaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
}

// --------------------------------------------------------
// Stat panel
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct StatPanelViewModel {
    pub name: String,
    pub bars: Vec<StatBarViewModel>,
}

#[derive(Debug, Serialize)]
pub struct StatBarViewModel {
    pub label: &'static str,
    /// Shorter label used by the text view.
    pub text_label: &'static str,
    pub value: i64,
    /// Fill width in percent, clipped to 0..=100.
    pub width: i64,
    pub level: StatLevel,
}

// --------------------------------------------------------
// Speech bubble
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct SpeechViewModel {
    pub speaker: String,
    pub message: String,
}

// --------------------------------------------------------
// Name tag
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct LabelViewModel {
    pub name: String,
}
