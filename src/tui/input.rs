use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};
use zeroize::Zeroize;

use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Outcome of feeding one key to a [`LineBuffer`].
#[derive(Debug, PartialEq, Eq)]
pub enum Edit {
    Continue,
    Submit,
    Cancel,
    Interrupt,
}

/// Single-line edit buffer, indexed by `char` so multi-byte letters
/// (æøå) edit correctly. Wiped on drop since it may hold a password.
pub struct LineBuffer {
    chars: Vec<char>,
    cursor: usize,
    digits_only: bool,
}

impl LineBuffer {
    pub fn new(initial: &str) -> Self {
        let chars: Vec<char> = initial.chars().collect();
        let cursor = chars.len();
        Self {
            chars,
            cursor,
            digits_only: false,
        }
    }

    pub fn numeric(initial: &str) -> Self {
        let mut line = Self::new(initial);
        line.digits_only = true;
        line
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn apply(&mut self, key: KeyEvent) -> Edit {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => return Edit::Interrupt,
            KeyCode::Char('q') if ctrl => return Edit::Cancel,
            KeyCode::Esc => return Edit::Cancel,
            KeyCode::Enter => return Edit::Submit,
            KeyCode::Char('u') if ctrl => {
                self.chars.zeroize();
                self.cursor = 0;
            }
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                self.chars.remove(self.cursor);
            }
            KeyCode::Delete if self.cursor < self.chars.len() => {
                self.chars.remove(self.cursor);
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.chars.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.chars.len(),
            KeyCode::Char(c) if !ctrl && (!self.digits_only || c.is_ascii_digit()) => {
                self.chars.insert(self.cursor, c);
                self.cursor += 1;
            }
            _ => {}
        }
        Edit::Continue
    }
}

impl Drop for LineBuffer {
    fn drop(&mut self) {
        self.chars.zeroize();
    }
}

fn redraw(prompt: &str, line: &LineBuffer) {
    let mut text = line.text();
    print!("\r{}: {}\x1b[K", prompt, text);
    print!("\x1b[{}G", prompt.chars().count() + 3 + line.cursor());
    flush();
    text.zeroize();
}

/// Read keys into `line` until Enter or Esc. Returns `None` on cancel.
fn edit_line(prompt: &str, mut line: LineBuffer) -> Option<String> {
    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(line.text()),
    };

    redraw(prompt, &line);

    let result = loop {
        match read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => match line.apply(key) {
                Edit::Continue => redraw(prompt, &line),
                Edit::Submit => break Some(line.text()),
                Edit::Cancel => break None,
                Edit::Interrupt => {
                    // process::exit skips destructors
                    line.chars.zeroize();
                    reset_terminal();
                    println!();
                    std::process::exit(0);
                }
            },
            Ok(_) => {}
            Err(_) => break None,
        }
    };

    drop(_guard);
    println!();
    result
}

/// Free-text prompt pre-filled with `initial`.
pub fn get_editable_input(prompt: &str, initial: &str) -> Option<String> {
    edit_line(prompt, LineBuffer::new(initial))
}

/// Digits-only prompt. `None` on cancel or empty input.
pub fn get_numeric_input(prompt: &str, initial: usize) -> Option<usize> {
    edit_line(prompt, LineBuffer::numeric(&initial.to_string()))?
        .parse()
        .ok()
}
