use serde::{Deserialize, Serialize};

/// Ordered battle messages, oldest first.
///
/// Presenters only ever read a bounded suffix of the log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BattleLog {
    lines: Vec<String>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The last `n` lines, oldest first.
    pub fn tail(&self, n: usize) -> &[String] {
        tail(&self.lines, n)
    }
}

impl AsRef<[String]> for BattleLog {
    fn as_ref(&self) -> &[String] {
        &self.lines
    }
}

impl<S: Into<String>> FromIterator<S> for BattleLog {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for BattleLog {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.lines.extend(iter.into_iter().map(Into::into));
    }
}

impl<'a> IntoIterator for &'a BattleLog {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// The last `n` items of `lines`, oldest first.
pub fn tail<T>(lines: &[T], n: usize) -> &[T] {
    &lines[lines.len().saturating_sub(n)..]
}

/// The last `n` items of `lines`, newest first.
pub fn newest_first<T>(lines: &[T], n: usize) -> impl Iterator<Item = &T> {
    tail(lines, n).iter().rev()
}
