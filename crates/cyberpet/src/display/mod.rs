//! The display adapter: decides once whether output is rich markup or plain
//! text, and is the only path through which anything leaves the library.

pub mod surface;

use cyberpet_core::DisplayPreference;
use serde::Serialize;
use std::io;
use std::sync::Once;

use crate::presentation::renderers::Renderer;
use crate::presentation::view_models::CreateView;
pub use surface::{ConsoleSurface, Emission, NotebookSurface, RecordingSurface, Surface, Tone};

/// Environment marker set by the evcxr Jupyter kernel in the process it runs
/// cells in.
pub const NOTEBOOK_ENV: &str = "EVCXR_IS_RUNTIME";

const FALLBACK_NOTICE: &str = "⚠️ Notebook display not found. Running in TERMINAL mode (text only).";

static FALLBACK_WARNING: Once = Once::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Inline HTML for a notebook cell.
    Rich,
    /// Line-oriented text.
    Plain,
}

impl DisplayMode {
    pub fn is_rich(self) -> bool {
        matches!(self, DisplayMode::Rich)
    }
}

/// Probe the process environment for a notebook surface.
pub fn notebook_available() -> bool {
    std::env::var_os(NOTEBOOK_ENV).is_some()
}

/// Resolve a preference into a mode using the default probe.
pub fn detect_mode(preference: DisplayPreference) -> DisplayMode {
    detect_mode_with(preference, notebook_available)
}

/// Resolve a preference into a mode. The probe only runs for `Auto`.
pub fn detect_mode_with(preference: DisplayPreference, probe: impl FnOnce() -> bool) -> DisplayMode {
    match preference {
        DisplayPreference::Rich => DisplayMode::Rich,
        DisplayPreference::Plain => DisplayMode::Plain,
        DisplayPreference::Auto => {
            if probe() {
                DisplayMode::Rich
            } else {
                DisplayMode::Plain
            }
        }
    }
}

/// The display adapter. The mode is fixed at construction.
pub struct Display {
    mode: DisplayMode,
    surface: Box<dyn Surface>,
}

impl Display {
    pub fn new(mode: DisplayMode, surface: impl Surface + 'static) -> Self {
        Self {
            mode,
            surface: Box::new(surface),
        }
    }

    /// Probe once and build the matching stdout display. When an automatic
    /// probe fails the session falls back to plain text and says so, once per
    /// process.
    pub fn detect(preference: DisplayPreference) -> Self {
        Self::detect_with(preference, notebook_available, |mode| -> Box<dyn Surface> {
            match mode {
                DisplayMode::Rich => Box::new(NotebookSurface::stdout()),
                DisplayMode::Plain => Box::new(ConsoleSurface::stdout()),
            }
        })
    }

    /// [`detect`](Self::detect) with the probe and the surface supplied by
    /// the caller. `surface_for` receives the resolved mode.
    pub fn detect_with(
        preference: DisplayPreference,
        probe: impl FnOnce() -> bool,
        surface_for: impl FnOnce(DisplayMode) -> Box<dyn Surface>,
    ) -> Self {
        let mode = detect_mode_with(preference, probe);
        let mut display = Self {
            mode,
            surface: surface_for(mode),
        };
        if mode == DisplayMode::Plain && preference == DisplayPreference::Auto {
            FALLBACK_WARNING.call_once(|| {
                tracing::warn!(probe = NOTEBOOK_ENV, "notebook display unavailable, using plain text");
                display.print_toned(FALLBACK_NOTICE, Tone::Warning);
            });
        }
        display
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn is_rich(&self) -> bool {
        self.mode.is_rich()
    }

    /// Hand a markup fragment to the surface. No-op in plain mode.
    pub fn render(&mut self, fragment: &str) {
        if self.is_rich() {
            let result = self.surface.html(fragment);
            log_failure("html", result);
        }
    }

    /// Console line, emitted in both modes.
    pub fn print_line(&mut self, line: impl AsRef<str>) {
        self.print_toned(line, Tone::Plain);
    }

    pub fn print_toned(&mut self, line: impl AsRef<str>, tone: Tone) {
        let result = self.surface.text(line.as_ref(), tone);
        log_failure("text", result);
    }

    /// Drop the previous output. No-op in plain mode.
    pub fn clear(&mut self) {
        if self.is_rich() {
            let result = self.surface.clear();
            log_failure("clear", result);
        }
    }

    /// Start autoplaying a remote clip. No-op in plain mode.
    pub fn play_audio(&mut self, url: &str) {
        if self.is_rich() {
            let result = self.surface.audio(url);
            log_failure("audio", result);
        }
    }
}

impl Renderer for Display {
    fn render_view<T>(&mut self, view_model: &T)
    where
        T: CreateView + ?Sized,
    {
        let body = view_model.create_view(self.mode).to_string();
        match self.mode {
            DisplayMode::Rich => self.render(&body),
            DisplayMode::Plain => {
                for line in body.lines() {
                    self.print_line(line);
                }
            }
        }
    }
}

fn log_failure(channel: &'static str, result: io::Result<()>) {
    if let Err(err) = result {
        tracing::warn!(channel, error = %err, "display surface write failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenSurface;

    impl Surface for BrokenSurface {
        fn html(&mut self, _fragment: &str) -> io::Result<()> {
            Err(io::Error::other("closed"))
        }
        fn text(&mut self, _line: &str, _tone: Tone) -> io::Result<()> {
            Err(io::Error::other("closed"))
        }
        fn clear(&mut self) -> io::Result<()> {
            Err(io::Error::other("closed"))
        }
        fn audio(&mut self, _url: &str) -> io::Result<()> {
            Err(io::Error::other("closed"))
        }
    }

    #[test]
    fn test_explicit_preference_skips_probe() {
        let mode = detect_mode_with(DisplayPreference::Plain, || panic!("probe ran"));
        assert_eq!(mode, DisplayMode::Plain);
        let mode = detect_mode_with(DisplayPreference::Rich, || panic!("probe ran"));
        assert_eq!(mode, DisplayMode::Rich);
    }

    #[test]
    fn test_auto_follows_probe() {
        assert_eq!(detect_mode_with(DisplayPreference::Auto, || true), DisplayMode::Rich);
        assert_eq!(detect_mode_with(DisplayPreference::Auto, || false), DisplayMode::Plain);
    }

    #[test]
    fn test_plain_mode_drops_markup() {
        let recorder = RecordingSurface::new();
        let mut display = Display::new(DisplayMode::Plain, recorder.clone());
        display.render("<b>x</b>");
        display.clear();
        display.play_audio("https://example.com/a.ogg");
        display.print_line("still printed");
        assert_eq!(
            recorder.emissions(),
            [Emission::Text("still printed".to_string(), Tone::Plain)]
        );
    }

    #[test]
    fn test_rich_mode_forwards_everything() {
        let recorder = RecordingSurface::new();
        let mut display = Display::new(DisplayMode::Rich, recorder.clone());
        display.render("<b>x</b>");
        display.clear();
        display.play_audio("u");
        assert_eq!(
            recorder.emissions(),
            [
                Emission::Html("<b>x</b>".to_string()),
                Emission::Clear,
                Emission::Audio("u".to_string())
            ]
        );
    }

    #[test]
    fn test_fallback_notice_is_printed_once() {
        let first = RecordingSurface::new();
        let second = RecordingSurface::new();
        let explicit = RecordingSurface::new();

        let handle = first.clone();
        let display = Display::detect_with(DisplayPreference::Auto, || false, |_| Box::new(handle));
        assert_eq!(display.mode(), DisplayMode::Plain);
        let handle = second.clone();
        Display::detect_with(DisplayPreference::Auto, || false, |_| Box::new(handle));
        let handle = explicit.clone();
        Display::detect_with(DisplayPreference::Plain, || false, |_| Box::new(handle));

        assert_eq!(
            first.emissions(),
            [Emission::Text(FALLBACK_NOTICE.to_string(), Tone::Warning)]
        );
        assert!(second.emissions().is_empty());
        assert!(explicit.emissions().is_empty());
    }

    #[test]
    fn test_successful_probe_prints_nothing() {
        let recorder = RecordingSurface::new();
        let handle = recorder.clone();
        let display = Display::detect_with(DisplayPreference::Auto, || true, |mode| {
            assert_eq!(mode, DisplayMode::Rich);
            Box::new(handle)
        });
        assert!(display.is_rich());
        assert!(recorder.emissions().is_empty());
    }

    #[test]
    fn test_surface_failures_are_swallowed() {
        let mut display = Display::new(DisplayMode::Rich, BrokenSurface);
        display.render("<b>x</b>");
        display.print_line("x");
        display.clear();
        display.play_audio("u");
        assert!(display.is_rich());
    }
}
