//! In-memory terminal backend.
//!
//! Keeps a grid of written cells, the programmed palette and a log of every
//! call. Used by the test suite and by hosts that want to render without a
//! terminal (snapshots, headless checks).

use std::collections::HashMap;
use std::io;

use super::{TerminalBackend, TerminalInfo};
use crate::strategy::Slot;

/// A written cell: the glyph and the slot that was active when it was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryCell {
    pub ch: char,
    pub slot: Slot,
}

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    DisableEcho,
    EnterFullscreen,
    EnableExtendedKeys,
    SetCursorVisible(bool),
    ForceSize { cols: u16, rows: u16 },
    EndSession,
    SetColor(Slot),
    MoveTo { row: u16, col: u16 },
    WriteChar(char),
    WriteStr(String),
    Flush,
    InitColor { slot: Slot, r: u16, g: u16, b: u16 },
}

impl BackendCall {
    /// Short name of the call, used to match injected failures.
    pub fn name(&self) -> &'static str {
        match self {
            BackendCall::DisableEcho => "disable_echo",
            BackendCall::EnterFullscreen => "enter_fullscreen",
            BackendCall::EnableExtendedKeys => "enable_extended_keys",
            BackendCall::SetCursorVisible(_) => "set_cursor_visible",
            BackendCall::ForceSize { .. } => "force_size",
            BackendCall::EndSession => "end_session",
            BackendCall::SetColor(_) => "set_color",
            BackendCall::MoveTo { .. } => "move_to",
            BackendCall::WriteChar(_) => "write_char",
            BackendCall::WriteStr(_) => "write_str",
            BackendCall::Flush => "flush",
            BackendCall::InitColor { .. } => "init_color",
        }
    }

    fn is_write(&self) -> bool {
        matches!(self, BackendCall::WriteChar(_) | BackendCall::WriteStr(_))
    }
}

/// Terminal backend that renders into memory.
#[derive(Debug, Clone)]
pub struct MemoryBackend {
    info: TerminalInfo,
    cols: u16,
    rows: u16,
    grid: Vec<Option<MemoryCell>>,
    cursor: (u16, u16),
    color: Slot,
    palette: HashMap<Slot, (u16, u16, u16)>,
    calls: Vec<BackendCall>,
    failing: Vec<&'static str>,
    echo: bool,
    fullscreen: bool,
    extended_keys: bool,
    cursor_visible: bool,
    ended: bool,
}

impl MemoryBackend {
    /// A backend reporting a `cols` x `rows` terminal with `colors` slots.
    pub fn new(cols: u16, rows: u16, colors: u16) -> Self {
        Self {
            info: TerminalInfo { cols, rows, colors },
            cols,
            rows,
            grid: vec![None; usize::from(cols) * usize::from(rows)],
            cursor: (0, 0),
            color: Slot(0),
            palette: HashMap::new(),
            calls: Vec::new(),
            failing: Vec::new(),
            echo: true,
            fullscreen: false,
            extended_keys: false,
            cursor_visible: true,
            ended: false,
        }
    }

    /// Make every call named `name` (see [`BackendCall::name`]) fail.
    pub fn fail_on(mut self, name: &'static str) -> Self {
        self.failing.push(name);
        self
    }

    /// Current logical size `(cols, rows)`.
    pub fn size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    /// Cell at logical `(col, row)`, if anything was written there.
    pub fn cell(&self, col: u16, row: u16) -> Option<MemoryCell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.grid[self.index(col, row)]
    }

    /// Text of row `row`, unwritten cells shown as spaces.
    pub fn row_text(&self, row: u16) -> String {
        (0..self.cols)
            .map(|col| self.cell(col, row).map(|c| c.ch).unwrap_or(' '))
            .collect()
    }

    /// Programmed palette entry for `slot`, channels in `[0, 1000]`.
    pub fn palette_entry(&self, slot: Slot) -> Option<(u16, u16, u16)> {
        self.palette.get(&slot).copied()
    }

    pub fn calls(&self) -> &[BackendCall] {
        &self.calls
    }

    /// How many recorded calls have the given name.
    pub fn count(&self, name: &str) -> usize {
        self.calls.iter().filter(|c| c.name() == name).count()
    }

    /// How many glyph writes (single or multi character) were made.
    pub fn write_count(&self) -> usize {
        self.calls.iter().filter(|c| c.is_write()).count()
    }

    pub fn echo_enabled(&self) -> bool {
        self.echo
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn extended_keys_enabled(&self) -> bool {
        self.extended_keys
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn session_ended(&self) -> bool {
        self.ended
    }

    fn index(&self, col: u16, row: u16) -> usize {
        usize::from(row) * usize::from(self.cols) + usize::from(col)
    }

    fn record(&mut self, call: BackendCall) -> io::Result<()> {
        let name = call.name();
        self.calls.push(call);
        if self.failing.contains(&name) {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("injected failure in {name}"),
            ));
        }
        Ok(())
    }

    fn put(&mut self, ch: char) {
        let (row, col) = self.cursor;
        if row < self.rows && col < self.cols {
            let idx = self.index(col, row);
            self.grid[idx] = Some(MemoryCell {
                ch,
                slot: self.color,
            });
        }
        self.cursor = (row, col.saturating_add(1));
    }
}

impl TerminalBackend for MemoryBackend {
    fn info(&self) -> io::Result<TerminalInfo> {
        Ok(self.info)
    }

    fn disable_echo(&mut self) -> io::Result<()> {
        self.record(BackendCall::DisableEcho)?;
        self.echo = false;
        Ok(())
    }

    fn enter_fullscreen(&mut self) -> io::Result<()> {
        self.record(BackendCall::EnterFullscreen)?;
        self.fullscreen = true;
        Ok(())
    }

    fn enable_extended_keys(&mut self) -> io::Result<()> {
        self.record(BackendCall::EnableExtendedKeys)?;
        self.extended_keys = true;
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        self.record(BackendCall::SetCursorVisible(visible))?;
        self.cursor_visible = visible;
        Ok(())
    }

    fn force_size(&mut self, cols: u16, rows: u16) -> io::Result<()> {
        self.record(BackendCall::ForceSize { cols, rows })?;
        self.cols = cols;
        self.rows = rows;
        self.grid = vec![None; usize::from(cols) * usize::from(rows)];
        self.cursor = (0, 0);
        Ok(())
    }

    fn end_session(&mut self) -> io::Result<()> {
        self.record(BackendCall::EndSession)?;
        self.echo = true;
        self.fullscreen = false;
        self.extended_keys = false;
        self.cursor_visible = true;
        self.ended = true;
        Ok(())
    }

    fn set_color(&mut self, slot: Slot) -> io::Result<()> {
        self.record(BackendCall::SetColor(slot))?;
        self.color = slot;
        Ok(())
    }

    fn move_to(&mut self, row: u16, col: u16) -> io::Result<()> {
        self.record(BackendCall::MoveTo { row, col })?;
        self.cursor = (row, col);
        Ok(())
    }

    fn write_char(&mut self, ch: char) -> io::Result<()> {
        self.record(BackendCall::WriteChar(ch))?;
        self.put(ch);
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.record(BackendCall::WriteStr(s.to_string()))?;
        for ch in s.chars() {
            self.put(ch);
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.record(BackendCall::Flush)
    }

    fn init_color(&mut self, slot: Slot, r: u16, g: u16, b: u16) -> io::Result<()> {
        self.record(BackendCall::InitColor { slot, r, g, b })?;
        self.palette.insert(slot, (r, g, b));
        Ok(())
    }
}
