use anyhow::{Context, Result};
use livemark_engine::{ParseOptions, PreviewSession, parsing::snapshot};
use std::path::PathBuf;

/// Editor state: the preview session plus a byte-offset cursor.
pub struct App {
    session: PreviewSession,
    path: PathBuf,
    cursor: usize,
    modified: bool,
    pub status: String,
}

impl App {
    pub fn new(path: PathBuf, text: &str, options: ParseOptions) -> Self {
        Self {
            session: PreviewSession::new(text, options),
            path,
            cursor: 0,
            modified: false,
            status: String::new(),
        }
    }

    pub fn session(&self) -> &PreviewSession {
        &self.session
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn title(&self) -> String {
        let marker = if self.modified { " [+]" } else { "" };
        format!("{}{marker}", self.path.display())
    }

    pub fn insert_char(&mut self, c: char) -> Result<()> {
        let mut buf = [0u8; 4];
        let s = c.encode_utf8(&mut buf);
        self.session.insert(self.cursor, s)?;
        self.cursor += s.len();
        self.modified = true;
        Ok(())
    }

    pub fn backspace(&mut self) -> Result<()> {
        if let Some(prev) = self.session.prev_char(self.cursor) {
            self.session.delete(prev..self.cursor)?;
            self.cursor = prev;
            self.modified = true;
        }
        Ok(())
    }

    pub fn delete_forward(&mut self) -> Result<()> {
        if let Some(next) = self.session.next_char(self.cursor) {
            self.session.delete(self.cursor..next)?;
            self.modified = true;
        }
        Ok(())
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.session.prev_char(self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.session.next_char(self.cursor) {
            self.cursor = next;
        }
    }

    pub fn move_up(&mut self) {
        let text = self.session.text();
        let (row, col) = row_col(&text, self.cursor);
        if row > 0 {
            self.cursor = offset_at(&text, row - 1, col);
        }
    }

    pub fn move_down(&mut self) {
        let text = self.session.text();
        let (row, col) = row_col(&text, self.cursor);
        if row < text.matches('\n').count() {
            self.cursor = offset_at(&text, row + 1, col);
        }
    }

    pub fn move_home(&mut self) {
        let text = self.session.text();
        self.cursor = text[..self.cursor].rfind('\n').map_or(0, |i| i + 1);
    }

    pub fn move_end(&mut self) {
        let text = self.session.text();
        self.cursor = text[self.cursor..]
            .find('\n')
            .map_or(text.len(), |i| self.cursor + i);
    }

    /// Cursor as (row, column in chars) for placing the terminal cursor.
    pub fn cursor_position(&self) -> (usize, usize) {
        row_col(&self.session.text(), self.cursor)
    }

    pub fn toggle_live_preview(&mut self) {
        let on = !self.session.options().live_preview;
        self.session.set_live_preview(on);
        self.status = if on {
            "Live preview on".to_string()
        } else {
            "Live preview off (full render)".to_string()
        };
        log::info!("{}", self.status);
    }

    pub fn save(&mut self) -> Result<()> {
        std::fs::write(&self.path, self.session.text())
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        self.modified = false;
        self.status = format!("Saved {}", self.path.display());
        Ok(())
    }

    pub fn source_lines(&self) -> Vec<String> {
        self.session.text().split('\n').map(str::to_string).collect()
    }

    pub fn token_lines(&self) -> Vec<String> {
        snapshot::normalize(self.session.tokens())
            .to_string()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

fn row_col(text: &str, offset: usize) -> (usize, usize) {
    let before = &text[..offset];
    let row = before.matches('\n').count();
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    (row, before[line_start..].chars().count())
}

/// Byte offset of `col` chars into line `row`, clamped to the line end.
fn offset_at(text: &str, row: usize, col: usize) -> usize {
    let mut start = 0;
    for _ in 0..row {
        match text[start..].find('\n') {
            Some(i) => start += i + 1,
            None => return text.len(),
        }
    }
    let end = text[start..].find('\n').map_or(text.len(), |i| start + i);
    text[start..end]
        .char_indices()
        .nth(col)
        .map_or(end, |(i, _)| start + i)
}
