use std::fmt;

use crate::display::DisplayMode;
use crate::presentation::formatters::Escaped;
use crate::presentation::view_models::{CelebrationViewModel, CreateView, CreditsViewModel};

const TROPHY: [&str; 8] = [
    r"      '._==_==_=_.'",
    r"      .-\:      /-.",
    r"     | (|:.     |) |",
    r"      '-|:.     |-'",
    r"        \::.    /",
    r"         '::. .'",
    r"           ) (",
    r"         _.' '._",
];

impl CreateView for CelebrationViewModel {
    fn create_view<'a>(&'a self, mode: DisplayMode) -> Box<dyn fmt::Display + 'a> {
        match mode {
            DisplayMode::Rich => Box::new(CelebrationHtml),
            DisplayMode::Plain => Box::new(CelebrationText),
        }
    }
}

struct CelebrationHtml;

impl fmt::Display for CelebrationHtml {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(r#"<div class="celebration" style="text-align: center; padding: 20px; background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); border-radius: 15px; color: white; font-family: Arial, sans-serif;"><div style="font-size: 3em; margin-bottom: 10px;">🎉</div><div style="font-size: 2em; font-weight: bold; margin-bottom: 10px;">CONGRATULATIONS!</div><div style="font-size: 1.2em;">You did it! 🎊</div><div style="margin-top: 20px; font-size: 4em;">🏆</div></div>"#)
    }
}

struct CelebrationText;

impl fmt::Display for CelebrationText {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "🎉 CONGRATULATIONS! 🎉")?;
        for row in TROPHY {
            write!(f, "\n{}", row)?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Credits
// --------------------------------------------------------

impl CreditsViewModel {
    /// Fixed credit rows after the director line.
    fn rows(&self) -> [(&'static str, String); 5] {
        [
            ("Director", self.director.clone()),
            ("Art", "Ys the Cat".to_string()),
            ("Engine", "Rust".to_string()),
            ("Library", format!("cyberpet v{}", self.library_version)),
            ("Based on", "Cyber-Pet Course".to_string()),
        ]
    }
}

impl CreateView for CreditsViewModel {
    fn create_view<'a>(&'a self, mode: DisplayMode) -> Box<dyn fmt::Display + 'a> {
        match mode {
            DisplayMode::Rich => Box::new(CreditsHtml { data: self }),
            DisplayMode::Plain => Box::new(CreditsText { data: self }),
        }
    }
}

struct CreditsHtml<'a> {
    data: &'a CreditsViewModel,
}

impl fmt::Display for CreditsHtml<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(r#"<div class="credits" style="background: linear-gradient(to bottom, #1a1a2e, #16213e); color: #eee; padding: 30px; border-radius: 10px; font-family: 'Courier New', monospace; text-align: center; max-width: 500px; margin: 0 auto;"><div style="font-size: 2em; margin-bottom: 20px; color: #ffd700;">✨ CREDITS ✨</div><div style="font-size: 1.2em; line-height: 2em;">"#)?;
        for (role, who) in self.data.rows() {
            write!(
                f,
                r#"<div style="margin: 10px 0;"><strong>{}:</strong> {}</div>"#,
                role,
                Escaped(&who)
            )?;
        }
        f.write_str(r#"</div><div style="margin-top: 30px; font-size: 1.5em; color: #ffd700;">THANK YOU FOR PLAYING!</div><div style="margin-top: 20px; font-size: 2em;">🎮 🎯 🎨</div></div>"#)
    }
}

struct CreditsText<'a> {
    data: &'a CreditsViewModel,
}

impl fmt::Display for CreditsText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "=== CREDITS ===")?;
        for (role, who) in self.data.rows() {
            writeln!(f, "{}: {}", role, who)?;
        }
        write!(f, "THANK YOU FOR PLAYING!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credits_text() {
        let vm = CreditsViewModel {
            director: "Ada".to_string(),
            library_version: "5.0.0",
        };
        let text = vm.create_view(DisplayMode::Plain).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "=== CREDITS ===",
                "Director: Ada",
                "Art: Ys the Cat",
                "Engine: Rust",
                "Library: cyberpet v5.0.0",
                "Based on: Cyber-Pet Course",
                "THANK YOU FOR PLAYING!",
            ]
        );
    }

    #[test]
    fn test_credits_html_escapes_director() {
        let vm = CreditsViewModel {
            director: "<b>Ada</b>".to_string(),
            library_version: "5.0.0",
        };
        let html = vm.create_view(DisplayMode::Rich).to_string();
        assert!(html.contains("<strong>Director:</strong> &lt;b&gt;Ada&lt;/b&gt;"));
    }

    #[test]
    fn test_celebration_text_has_trophy() {
        let text = CelebrationViewModel::default()
            .create_view(DisplayMode::Plain)
            .to_string();
        assert_eq!(text.lines().count(), 1 + TROPHY.len());
        assert!(text.starts_with("🎉 CONGRATULATIONS! 🎉"));
    }
}
