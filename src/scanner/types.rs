use std::fmt;
use std::path::PathBuf;

/// Lines surrounding a match, clamped at file boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub before: Option<String>,
    pub line: String,
    pub after: Option<String>,
}

impl Context {
    /// Build the window around `lines[index]`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn around(lines: &[&str], index: usize) -> Self {
        let before = index.checked_sub(1).map(|i| lines[i].to_string());
        let after = lines.get(index + 1).map(|l| (*l).to_string());
        Self {
            before,
            line: lines[index].to_string(),
            after,
        }
    }

    /// Context lines in file order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.before
            .as_deref()
            .into_iter()
            .chain(std::iter::once(self.line.as_str()))
            .chain(self.after.as_deref())
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

/// One occurrence of a token pattern in a scanned file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub file: PathBuf,
    /// 1-based line number.
    pub line: usize,
    /// The matched text.
    pub token: String,
    pub context: Context,
    /// Source of the pattern that produced the match.
    pub pattern: String,
}
