//! Interactive context selection

use dialoguer::console::{style, Key, Term};
use log::debug;

use crate::error::{CcctxError, Result};

/// Maximum number of list items visible at once; longer lists scroll
const PAGE_SIZE: usize = 10;

/// Outcome of an interactive selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// User confirmed the highlighted context name
    Chosen(String),
    /// User pressed escape
    Cancelled,
}

/// What the event loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    Continue,
    Confirm,
    Cancel,
}

/// Cursor state for the list widget. Navigation clamps at both ends
/// rather than wrapping; the visible window scrolls to follow the cursor.
#[derive(Debug)]
struct SelectorState {
    cursor: usize,
    offset: usize,
    len: usize,
}

impl SelectorState {
    fn new(len: usize) -> Self {
        debug_assert!(len > 0);
        Self {
            cursor: 0,
            offset: 0,
            len,
        }
    }

    /// Number of lines the list occupies on screen
    fn page(&self) -> usize {
        self.len.min(PAGE_SIZE)
    }

    /// Indices of the items currently in the visible window
    fn visible(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.page()
    }

    fn handle_key(&mut self, key: &Key) -> Transition {
        match key {
            Key::ArrowDown | Key::Char('j') => {
                if self.cursor + 1 < self.len {
                    self.cursor += 1;
                }
                self.scroll_into_view();
                Transition::Continue
            }
            Key::ArrowUp | Key::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
                self.scroll_into_view();
                Transition::Continue
            }
            Key::Enter => Transition::Confirm,
            Key::Escape => Transition::Cancel,
            _ => Transition::Continue,
        }
    }

    fn scroll_into_view(&mut self) {
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + self.page() {
            self.offset = self.cursor + 1 - self.page();
        }
    }
}

/// Display a scrollable list of context names and block until the user
/// confirms one or cancels.
///
/// Errors with `NoContexts` before touching the terminal if `names` is
/// empty; callers should short-circuit that case with their own message.
/// The terminal is restored (cursor shown, rendered lines cleared) on every
/// exit path, including internal I/O errors.
pub fn run_selector(names: &[String]) -> Result<Selection> {
    if names.is_empty() {
        return Err(CcctxError::NoContexts);
    }

    let term = Term::stderr();
    if !term.is_term() {
        return Err(CcctxError::Io(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "interactive selection requires a terminal; pass a context name instead",
        )));
    }

    term.hide_cursor()?;
    let outcome = selection_loop(&term, names);

    // The prompt line plus one line per visible item were rendered.
    let _ = term.clear_last_lines(names.len().min(PAGE_SIZE) + 1);
    let _ = term.show_cursor();

    if let Ok(Selection::Chosen(name)) = &outcome {
        debug!("User selected context: {}", name);
    }
    outcome
}

fn selection_loop(term: &Term, names: &[String]) -> Result<Selection> {
    let mut state = SelectorState::new(names.len());

    term.write_line("Select a context (enter to confirm, esc to cancel)")?;
    render(term, names, &state)?;

    loop {
        let key = term.read_key()?;
        match state.handle_key(&key) {
            Transition::Continue => {
                term.clear_last_lines(state.page())?;
                render(term, names, &state)?;
            }
            Transition::Confirm => return Ok(Selection::Chosen(names[state.cursor].clone())),
            Transition::Cancel => return Ok(Selection::Cancelled),
        }
    }
}

/// Paint the visible window; only `state.page()` lines ever hit the screen
/// so the cursor-up-based repaint stays within rows that still exist.
fn render(term: &Term, names: &[String], state: &SelectorState) -> std::io::Result<()> {
    for i in state.visible() {
        if i == state.cursor {
            term.write_line(&format!("❯ {}", style(&names[i]).cyan()))?;
        } else {
            term.write_line(&format!("  {}", names[i]))?;
        }
    }
    Ok(())
}
