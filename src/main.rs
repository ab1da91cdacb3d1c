use std::collections::HashMap;
use std::io::{stdout, BufWriter, Stdout, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::Rng;

use canvas_shooter::display::{self, Viewport};
use canvas_shooter::scheduler::{self, FixedRate, FrameHost};
use canvas_shooter::{GameConfig, Key, Session, Snapshot};

/// A direction key is considered "held" if its last press/repeat event
/// arrived within this many frames.  Covers terminals that don't emit
/// key-release events: OS key-repeat runs at ≥ 15 Hz, so at 60 FPS a window
/// of 8 frames (≈133 ms) is refreshed before it expires.
const HOLD_WINDOW: u64 = 8;

#[derive(Parser, Debug)]
#[command(version, about = "Single-screen arcade shooter in the terminal")]
struct Args {
    /// Simulation canvas width in game units
    #[arg(long, default_value_t = canvas_shooter::config::DEFAULT_CANVAS_WIDTH)]
    width: f32,

    /// Simulation canvas height in game units
    #[arg(long, default_value_t = canvas_shooter::config::DEFAULT_CANVAS_HEIGHT)]
    height: f32,

    /// RNG seed; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Frames (ticks) per second
    #[arg(long, default_value_t = 60)]
    fps: u32,
}

/// Translate a terminal key code into a game key.
fn game_key(code: &KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::Right),
        KeyCode::Char(' ') => Some(Key::Fire),
        KeyCode::Enter => Some(Key::Confirm),
        _ => None,
    }
}

fn is_quit(code: &KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

// ── Terminal host ─────────────────────────────────────────────────────────────

/// Input model: on keyboard-enhancement capable terminals (Ghostty, kitty, …)
/// proper `Press` / `Release` events are forwarded as key-down / key-up.
/// Classic terminals only send `Press` (OS key-repeat shows as repeated
/// `Press`), so direction keys expire after `HOLD_WINDOW` frames of silence
/// and every Space / Enter press is delivered as a down+up pair.
struct TerminalHost {
    out: BufWriter<Stdout>,
    rx: mpsc::Receiver<Event>,
    viewport: Viewport,
    clock: FixedRate,
    keyboard_enhanced: bool,
    /// Direction key → frame it was last seen (classic terminals only).
    key_frame: HashMap<Key, u64>,
    frame: u64,
}

impl TerminalHost {
    fn press<R: Rng>(&mut self, session: &mut Session<R>, key: Key) {
        session.on_key_down(key);
        if self.keyboard_enhanced {
            return;
        }
        match key {
            Key::Left | Key::Right => {
                self.key_frame.insert(key, self.frame);
            }
            Key::Fire | Key::Confirm => session.on_key_up(key),
        }
    }

    fn expire_held_keys<R: Rng>(&mut self, session: &mut Session<R>) {
        let frame = self.frame;
        self.key_frame.retain(|&key, &mut last| {
            let live = frame.saturating_sub(last) <= HOLD_WINDOW;
            if !live {
                session.on_key_up(key);
            }
            live
        });
    }
}

impl FrameHost for TerminalHost {
    type Error = std::io::Error;

    fn poll_input<R: Rng>(&mut self, session: &mut Session<R>) -> std::io::Result<bool> {
        self.frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = self.rx.try_recv() {
            match ev {
                Event::Key(KeyEvent {
                    code,
                    kind,
                    modifiers,
                    ..
                }) => {
                    if kind == KeyEventKind::Press && is_quit(&code, modifiers) {
                        return Ok(false);
                    }
                    let Some(key) = game_key(&code) else {
                        continue;
                    };
                    match kind {
                        KeyEventKind::Press => self.press(session, key),
                        // Refresh the hold window; fire stays edge-triggered
                        KeyEventKind::Repeat => {
                            if let Some(last) = self.key_frame.get_mut(&key) {
                                *last = self.frame;
                            }
                        }
                        KeyEventKind::Release => {
                            self.key_frame.remove(&key);
                            session.on_key_up(key);
                        }
                    }
                }
                Event::Resize(cols, rows) => {
                    self.viewport.cols = cols;
                    self.viewport.rows = rows;
                }
                _ => {}
            }
        }

        if !self.keyboard_enhanced {
            self.expire_held_keys(session);
        }
        Ok(true)
    }

    fn present(&mut self, snapshot: &Snapshot<'_>) -> std::io::Result<()> {
        display::render(&mut self.out, &self.viewport, snapshot)
    }

    fn wait_next_frame(&mut self) {
        self.clock.wait();
    }
}

// ── Terminal guard ────────────────────────────────────────────────────────────

/// Owns raw mode for as long as it lives.  Dropping it undoes every setup
/// step that succeeded, so the shell comes back usable after an early `?`
/// return or a panic in the frame loop.
struct TerminalGuard<W: Write> {
    out: W,
    alternate_screen: bool,
    cursor_hidden: bool,
    keyboard_enhanced: bool,
}

impl<W: Write> TerminalGuard<W> {
    fn enter(out: W) -> anyhow::Result<Self> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        let mut guard = Self {
            out,
            alternate_screen: false,
            cursor_hidden: false,
            keyboard_enhanced: false,
        };

        guard
            .out
            .execute(terminal::EnterAlternateScreen)
            .context("failed to enter the alternate screen")?;
        guard.alternate_screen = true;
        guard
            .out
            .execute(cursor::Hide)
            .context("failed to hide the cursor")?;
        guard.cursor_hidden = true;

        // Request key-release (and key-repeat) events from the terminal.
        // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
        guard.keyboard_enhanced = matches!(terminal::supports_keyboard_enhancement(), Ok(true))
            && guard
                .out
                .execute(PushKeyboardEnhancementFlags(
                    KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
                ))
                .is_ok();
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if self.keyboard_enhanced {
            let _ = self.out.execute(PopKeyboardEnhancementFlags);
        }
        if self.cursor_hidden {
            let _ = self.out.execute(cursor::Show);
        }
        if self.alternate_screen {
            let _ = self.out.execute(terminal::LeaveAlternateScreen);
        }
        let _ = terminal::disable_raw_mode();
        let _ = self.out.flush();
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = GameConfig::with_canvas(args.width, args.height);

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("starting with seed {seed}");
    let mut session = Session::seeded(config, seed).context("invalid canvas")?;

    let guard = TerminalGuard::enter(stdout())?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the frame loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = terminal::size().and_then(|(cols, rows)| {
        let mut host = TerminalHost {
            out: BufWriter::new(stdout()),
            rx,
            viewport: Viewport::new(config.canvas_width, config.canvas_height, cols, rows),
            clock: FixedRate::new(args.fps),
            keyboard_enhanced: guard.keyboard_enhanced,
            key_frame: HashMap::new(),
            frame: 0,
        };
        scheduler::run(&mut session, &mut host)
    });
    drop(guard);

    let frames = result.context("terminal I/O failed")?;
    log::info!(
        "quit after {frames} frames, final score {}",
        session.state().score
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{self, AssertUnwindSafe};

    const SHOW_CURSOR: &str = "\x1b[?25h";
    const LEAVE_ALTERNATE_SCREEN: &str = "\x1b[?1049l";
    const POP_KEYBOARD_FLAGS: &str = "\x1b[<1u";

    fn fully_entered(out: &mut Vec<u8>) -> TerminalGuard<&mut Vec<u8>> {
        TerminalGuard {
            out,
            alternate_screen: true,
            cursor_hidden: true,
            keyboard_enhanced: true,
        }
    }

    #[test]
    fn drop_restores_every_entered_step() {
        let mut buf = Vec::new();
        drop(fully_entered(&mut buf));
        let written = String::from_utf8(buf).unwrap();
        assert!(written.contains(POP_KEYBOARD_FLAGS));
        assert!(written.contains(SHOW_CURSOR));
        assert!(written.ends_with(LEAVE_ALTERNATE_SCREEN));
    }

    #[test]
    fn panic_in_frame_loop_still_restores() {
        let mut buf = Vec::new();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            let _guard = fully_entered(&mut buf);
            panic!("frame loop blew up");
        }));
        assert!(outcome.is_err());
        let written = String::from_utf8(buf).unwrap();
        assert!(written.contains(SHOW_CURSOR));
        assert!(written.contains(LEAVE_ALTERNATE_SCREEN));
    }

    #[test]
    fn partial_setup_only_undoes_what_succeeded() {
        let mut buf = Vec::new();
        drop(TerminalGuard {
            out: &mut buf,
            alternate_screen: true,
            cursor_hidden: false,
            keyboard_enhanced: false,
        });
        let written = String::from_utf8(buf).unwrap();
        assert_eq!(written, LEAVE_ALTERNATE_SCREEN);
    }

    #[test]
    fn enter_and_space_map_to_game_keys() {
        assert_eq!(game_key(&KeyCode::Enter), Some(Key::Confirm));
        assert_eq!(game_key(&KeyCode::Char(' ')), Some(Key::Fire));
        assert!(is_quit(&KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!is_quit(&KeyCode::Char('c'), KeyModifiers::NONE));
    }
}
