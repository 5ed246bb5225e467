use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::cell::RefCell;
use std::io::{self, Stdout, Write};
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

/// How a console line should read: plain narration or a status diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Plain,
    Success,
    Warning,
    Error,
}

/// The host mechanism behind a [`Display`](super::Display).
///
/// Markup, clear requests and audio only arrive here in rich mode; text
/// lines arrive in both modes.
pub trait Surface {
    fn html(&mut self, fragment: &str) -> io::Result<()>;
    fn text(&mut self, line: &str, tone: Tone) -> io::Result<()>;
    fn clear(&mut self) -> io::Result<()>;
    fn audio(&mut self, url: &str) -> io::Result<()>;
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn html(&mut self, fragment: &str) -> io::Result<()> {
        (**self).html(fragment)
    }

    fn text(&mut self, line: &str, tone: Tone) -> io::Result<()> {
        (**self).text(line, tone)
    }

    fn clear(&mut self) -> io::Result<()> {
        (**self).clear()
    }

    fn audio(&mut self, url: &str) -> io::Result<()> {
        (**self).audio(url)
    }
}

// --------------------------------------------------------
// Notebook
// --------------------------------------------------------

const BEGIN_CONTENT: &str = "EVCXR_BEGIN_CONTENT";
const END_CONTENT: &str = "EVCXR_END_CONTENT";

static NEXT_SURFACE: AtomicU64 = AtomicU64::new(0);

/// Writes rich output using the evcxr Jupyter kernel's content protocol:
/// anything framed by `EVCXR_BEGIN_CONTENT <mime>` / `EVCXR_END_CONTENT` on
/// stdout is rendered as that MIME type in the cell output.
///
/// The protocol has no clear-output message. Every fragment is wrapped in a
/// block with its own `id`, and [`clear`](Surface::clear) emits a stylesheet
/// hiding the blocks shown since the previous clear.
pub struct NotebookSurface<W: Write = Stdout> {
    out: W,
    surface: u64,
    next_block: u64,
    visible: Vec<String>,
}

impl NotebookSurface<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> NotebookSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            surface: NEXT_SURFACE.fetch_add(1, Ordering::Relaxed),
            next_block: 0,
            visible: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn content(&mut self, mime: &str, body: &str) -> io::Result<()> {
        writeln!(self.out, "{} {}", BEGIN_CONTENT, mime)?;
        writeln!(self.out, "{}", body)?;
        writeln!(self.out, "{}", END_CONTENT)?;
        self.out.flush()
    }

    fn block(&mut self, body: &str) -> io::Result<()> {
        let id = format!("cyberpet-{}-{}", self.surface, self.next_block);
        self.next_block += 1;
        self.content("text/html", &format!("<div id=\"{}\">{}</div>", id, body))?;
        self.visible.push(id);
        Ok(())
    }
}

impl<W: Write> Surface for NotebookSurface<W> {
    fn html(&mut self, fragment: &str) -> io::Result<()> {
        self.block(fragment)
    }

    fn text(&mut self, line: &str, _tone: Tone) -> io::Result<()> {
        writeln!(self.out, "{}", line)?;
        self.out.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.visible.is_empty() {
            return Ok(());
        }
        let selectors: Vec<String> = self.visible.iter().map(|id| format!("#{}", id)).collect();
        let rule = format!("<style>{} {{ display: none; }}</style>", selectors.join(", "));
        self.content("text/html", &rule)?;
        tracing::trace!(hidden = self.visible.len(), "notebook blocks hidden");
        self.visible.clear();
        Ok(())
    }

    fn audio(&mut self, url: &str) -> io::Result<()> {
        let fragment = format!(
            "<audio controls autoplay><source src=\"{}\">Your browser does not support the audio element.</audio>",
            crate::presentation::formatters::Escaped(url)
        );
        self.block(&fragment)
    }
}

// --------------------------------------------------------
// Console
// --------------------------------------------------------

/// Line-oriented fallback. Markup, clears and audio are dropped.
pub struct ConsoleSurface<W: Write = Stdout> {
    out: W,
    color: bool,
}

impl ConsoleSurface<Stdout> {
    /// Stdout, coloured when it is a terminal.
    pub fn stdout() -> Self {
        let color = io::stdout().is_terminal();
        Self {
            out: io::stdout(),
            color,
        }
    }
}

impl<W: Write> ConsoleSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out, color: false }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Surface for ConsoleSurface<W> {
    fn html(&mut self, _fragment: &str) -> io::Result<()> {
        Ok(())
    }

    fn text(&mut self, line: &str, tone: Tone) -> io::Result<()> {
        if !self.color {
            return writeln!(self.out, "{}", line);
        }
        match tone {
            Tone::Plain => writeln!(self.out, "{}", line),
            Tone::Success => writeln!(self.out, "{}", line.green()),
            Tone::Warning => writeln!(self.out, "{}", line.yellow()),
            Tone::Error => writeln!(self.out, "{}", line.red().bold()),
        }
    }

    fn clear(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn audio(&mut self, _url: &str) -> io::Result<()> {
        Ok(())
    }
}

// --------------------------------------------------------
// Recording
// --------------------------------------------------------

/// One call that reached a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emission {
    Html(String),
    Text(String, Tone),
    Clear,
    Audio(String),
}

/// In-memory surface for tests and for hosts that post-process output.
///
/// Clones share the same buffer, so keep one clone and hand the other to the
/// display.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    emissions: Rc<RefCell<Vec<Emission>>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emissions(&self) -> Vec<Emission> {
        self.emissions.borrow().clone()
    }

    /// Text lines only, in order.
    pub fn lines(&self) -> Vec<String> {
        self.emissions
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Emission::Text(line, _) => Some(line.clone()),
                _ => None,
            })
            .collect()
    }

    /// Markup fragments only, in order.
    pub fn fragments(&self) -> Vec<String> {
        self.emissions
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Emission::Html(html) => Some(html.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn audio(&self) -> Vec<String> {
        self.emissions
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Emission::Audio(url) => Some(url.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn take(&self) -> Vec<Emission> {
        std::mem::take(&mut *self.emissions.borrow_mut())
    }

    fn push(&self, emission: Emission) {
        self.emissions.borrow_mut().push(emission);
    }
}

impl Surface for RecordingSurface {
    fn html(&mut self, fragment: &str) -> io::Result<()> {
        self.push(Emission::Html(fragment.to_string()));
        Ok(())
    }

    fn text(&mut self, line: &str, tone: Tone) -> io::Result<()> {
        self.push(Emission::Text(line.to_string(), tone));
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.push(Emission::Clear);
        Ok(())
    }

    fn audio(&mut self, url: &str) -> io::Result<()> {
        self.push(Emission::Audio(url.to_string()));
        Ok(())
    }
}
