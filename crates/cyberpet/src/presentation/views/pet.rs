use std::fmt;

use crate::display::DisplayMode;
use crate::presentation::formatters::Escaped;
use crate::presentation::view_models::{
    CreateView, ImageViewModel, LabelViewModel, SpeechViewModel, StatPanelViewModel,
};

// --------------------------------------------------------
// Image
// --------------------------------------------------------

impl CreateView for ImageViewModel {
    fn create_view<'a>(&'a self, mode: DisplayMode) -> Box<dyn fmt::Display + 'a> {
        match mode {
            DisplayMode::Rich => Box::new(ImageHtml { data: self }),
            DisplayMode::Plain => Box::new(ImageText { data: self }),
        }
    }
}

struct ImageHtml<'a> {
    data: &'a ImageViewModel,
}

impl fmt::Display for ImageHtml<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Some(src) = &self.data.src else {
            return Ok(());
        };
        write!(
            f,
            r#"<div style="display: flex; justify-content: center; align-items: center; width: {w}px; height: {w}px; overflow: hidden;"><img src="{src}" alt="{alt}" style="max-width: 100%; max-height: 100%; object-fit: contain;"></div>"#,
            w = self.data.width,
            src = Escaped(src),
            alt = Escaped(&self.data.filename),
        )
    }
}

struct ImageText<'a> {
    data: &'a ImageViewModel,
}

impl fmt::Display for ImageText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[IMAGE] {}", self.data.filename)
    }
}

// --------------------------------------------------------
// Stat panel
// --------------------------------------------------------

impl CreateView for StatPanelViewModel {
    fn create_view<'a>(&'a self, mode: DisplayMode) -> Box<dyn fmt::Display + 'a> {
        match mode {
            DisplayMode::Rich => Box::new(StatPanelHtml { data: self }),
            DisplayMode::Plain => Box::new(StatPanelText { data: self }),
        }
    }
}

struct StatPanelHtml<'a> {
    data: &'a StatPanelViewModel,
}

impl fmt::Display for StatPanelHtml<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(r#"<div class="stat-panel" style="border: 2px solid #333; border-radius: 10px; padding: 10px; width: 300px; background-color: #f0f0f0; font-family: Arial, sans-serif;">"#)?;
        write!(
            f,
            r#"<h3 style="margin: 0 0 10px 0; text-align: center;">🍱 {}</h3>"#,
            Escaped(&self.data.name)
        )?;
        for bar in &self.data.bars {
            write!(
                f,
                r#"<div style="margin-bottom: 5px;"><strong>{label}:</strong> {value}/100<div style="background-color: #ddd; border-radius: 5px; height: 10px; width: 100%;"><div class="stat-fill" data-level="{level}" style="background-color: {color}; width: {width}%; height: 100%; border-radius: 5px;"></div></div></div>"#,
                label = bar.label,
                value = bar.value,
                level = bar.level.as_str(),
                color = bar.level.color(),
                width = bar.width,
            )?;
        }
        f.write_str("</div>")
    }
}

struct StatPanelText<'a> {
    data: &'a StatPanelViewModel,
}

impl fmt::Display for StatPanelText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "--- {} ---", self.data.name)?;
        for bar in &self.data.bars {
            write!(f, "\n{}: {}/100", bar.text_label, bar.value)?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Speech bubble
// --------------------------------------------------------

impl CreateView for SpeechViewModel {
    fn create_view<'a>(&'a self, mode: DisplayMode) -> Box<dyn fmt::Display + 'a> {
        match mode {
            DisplayMode::Rich => Box::new(SpeechHtml { data: self }),
            DisplayMode::Plain => Box::new(SpeechText { data: self }),
        }
    }
}

struct SpeechHtml<'a> {
    data: &'a SpeechViewModel,
}

impl fmt::Display for SpeechHtml<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            r#"<div style="display: flex; align-items: center; margin-bottom: 10px;"><div style="font-weight: bold; margin-right: 10px;">{}:</div><div style="background-color: #fff; border: 2px solid #333; border-radius: 15px; padding: 8px 15px;">{}</div></div>"#,
            Escaped(&self.data.speaker),
            Escaped(&self.data.message),
        )
    }
}

struct SpeechText<'a> {
    data: &'a SpeechViewModel,
}

impl fmt::Display for SpeechText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.data.speaker, self.data.message)
    }
}

// --------------------------------------------------------
// Name tag
// --------------------------------------------------------

impl CreateView for LabelViewModel {
    fn create_view<'a>(&'a self, mode: DisplayMode) -> Box<dyn fmt::Display + 'a> {
        match mode {
            DisplayMode::Rich => Box::new(LabelHtml { data: self }),
            DisplayMode::Plain => Box::new(LabelText { data: self }),
        }
    }
}

struct LabelHtml<'a> {
    data: &'a LabelViewModel,
}

impl fmt::Display for LabelHtml<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            r#"<div style="background-color: #FFEB3B; padding: 5px 15px; border-radius: 15px; border: 3px solid #FBC02D; display: inline-block; font-weight: bold;">Hello, my name is {}</div>"#,
            Escaped(&self.data.name)
        )
    }
}

struct LabelText<'a> {
    data: &'a LabelViewModel,
}

impl fmt::Display for LabelText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[LABEL] Assigned Name: {}", self.data.name)
    }
}
