//! Terminal Target - A crossterm-backed render surface.
//!
//! Owns a run of terminal rows starting at `origin_row`, one child per
//! row. Child operations mutate an internal line buffer; `commit()` diffs
//! that buffer against what was last painted and rewrites only the rows
//! that changed, clearing rows vacated by removals. Queued writes go out
//! in a single flush.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};

use super::target::RenderTarget;

/// Render target that paints children as terminal rows.
pub struct TerminalTarget {
    origin_row: u16,
    lines: Vec<String>,
    /// Rows as they were after the last commit. Diff basis.
    painted: Vec<String>,
}

impl TerminalTarget {
    /// Create a target that owns rows starting at `origin_row`.
    pub fn new(origin_row: u16) -> Self {
        Self {
            origin_row,
            lines: Vec::new(),
            painted: Vec::new(),
        }
    }

    /// First terminal row this target paints to.
    pub fn origin_row(&self) -> u16 {
        self.origin_row
    }

    /// Current line buffer (not necessarily painted yet).
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Forget what was painted. The next commit rewrites every row.
    ///
    /// Use after the terminal has been resized or scribbled on by
    /// something else.
    pub fn invalidate(&mut self) {
        self.painted.clear();
    }

    fn commit_to(&mut self, out: &mut impl Write) -> io::Result<()> {
        // Rewrite rows whose content changed since the last commit.
        for (row, line) in self.lines.iter().enumerate() {
            if self.painted.get(row) == Some(line) {
                continue;
            }
            queue!(
                out,
                MoveTo(0, self.origin_row + row as u16),
                Clear(ClearType::CurrentLine),
                Print(line),
            )?;
        }

        // Clear rows vacated by removals.
        for row in self.lines.len()..self.painted.len() {
            queue!(
                out,
                MoveTo(0, self.origin_row + row as u16),
                Clear(ClearType::CurrentLine),
            )?;
        }

        out.flush()?;
        self.painted = self.lines.clone();
        Ok(())
    }
}

impl RenderTarget for TerminalTarget {
    fn insert(&mut self, index: usize, content: &str) {
        self.lines.insert(index, content.to_string());
    }

    fn remove(&mut self, index: usize) {
        self.lines.remove(index);
    }

    fn move_child(&mut self, from: usize, to: usize) {
        let line = self.lines.remove(from);
        self.lines.insert(to, line);
    }

    fn clear(&mut self) {
        self.lines.clear();
    }

    fn child_count(&self) -> usize {
        self.lines.len()
    }

    fn commit(&mut self) -> io::Result<()> {
        let mut out = io::stdout();
        self.commit_to(&mut out)
    }
}

// =============================================================================
// Tests
// =============================================================================
