//! Raw-mode terminal plumbing: setup/teardown, key decoding and frame output.

use std::io::{self, Write};
use std::thread;

use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::{cursor, execute};
use services::Input;
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

const BELL: &[u8] = b"\x07";

/// Raw mode plus alternate screen for as long as it lives.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn enter(out: &mut impl Write) -> io::Result<Self> {
        enable_raw_mode()?;
        if let Err(err) = execute!(out, EnterAlternateScreen, cursor::Hide) {
            let _ = disable_raw_mode();
            return Err(err);
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Decodes a key press. Releases and unbound keys yield `None`.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Input> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let control = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if control => Some(Input::Interrupt),
        KeyCode::Up => Some(Input::Up),
        KeyCode::Down => Some(Input::Down),
        KeyCode::Left => Some(Input::Back),
        KeyCode::Right => Some(Input::Forward),
        KeyCode::Enter => Some(Input::Enter),
        KeyCode::Backspace => Some(Input::Backspace),
        KeyCode::Char(c) if !control && !key.modifiers.contains(KeyModifiers::ALT) => {
            Some(Input::Char(c))
        }
        _ => None,
    }
}

/// Blocking reader thread forwarding decoded keys. Stops once the receiver is
/// gone or reading fails.
pub fn spawn_key_reader(tx: UnboundedSender<io::Result<Input>>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        loop {
            let decoded = match event::read() {
                Ok(TermEvent::Key(key)) => match map_key(key) {
                    Some(input) => Ok(input),
                    None => continue,
                },
                Ok(_) => continue,
                Err(err) => Err(err),
            };
            let failed = decoded.is_err();
            if tx.send(decoded).is_err() || failed {
                debug!("key reader stopped");
                return;
            }
        }
    })
}

/// Writes a full frame; raw mode needs explicit carriage returns.
pub fn draw(out: &mut impl Write, frame: &str) -> io::Result<()> {
    out.write_all(frame.replace('\n', "\r\n").as_bytes())?;
    out.flush()
}

pub fn ring_bell(out: &mut impl Write) -> io::Result<()> {
    out.write_all(BELL)?;
    out.flush()
}
