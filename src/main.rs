mod display;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::{self, Color, Print},
    terminal, ExecutableCommand, QueueableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use pantheon::compute::{
    continue_from_checkpoint, dismiss_message, init_state, set_firing, set_movement, step,
    toggle_pause, trigger_ability,
};
use pantheon::config::{GameConfig, DEFAULT_CONFIG_FILE};
use pantheon::constants::FPS;
use pantheon::input::MoveIntent;
use pantheon::state::{GameState, GameStatus};

const FRAME: Duration = Duration::from_micros(1_000_000 / FPS as u64);

/// Frames a press or repeat event keeps its key held. Terminals without
/// release events rely on auto-repeat, which refreshes well inside 8 frames.
const HOLD_WINDOW: u64 = 8;

/// Returns true if any of `keys` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|key| {
        key_frame
            .get(key)
            .is_some_and(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
    })
}

// ── Title screen ──────────────────────────────────────────────────────────────

enum MenuResult {
    Start,
    Quit,
}

fn show_menu<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    best_score: u32,
) -> std::io::Result<MenuResult> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (width, height) = terminal::size()?;
    let cx = width / 2;
    let cy = height / 2;

    let title = "☀  P A N T H E O N  ϟ";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        cy.saturating_sub(6),
    ))?;
    out.queue(style::SetForegroundColor(Color::Cyan))?;
    out.queue(Print(title))?;

    if best_score > 0 {
        let best = format!("Best Score: {}", best_score);
        out.queue(cursor::MoveTo(
            cx.saturating_sub(best.chars().count() as u16 / 2),
            cy.saturating_sub(5),
        ))?;
        out.queue(style::SetForegroundColor(Color::Yellow))?;
        out.queue(Print(&best))?;
    }

    let lines: &[(&str, Color)] = &[
        ("ENTER - Start", Color::White),
        ("", Color::DarkGrey),
        ("Defeat the Solar Warden to unlock [1] FLARE", Color::DarkGrey),
        ("Defeat the Storm Caller to unlock [2] BOLT", Color::DarkGrey),
        ("", Color::DarkGrey),
        ("←↑↓→ / WASD : Move   SPACE : Fire   P : Pause   Q : Quit", Color::DarkGrey),
    ];
    for (i, (text, color)) in lines.iter().enumerate() {
        let row = cy.saturating_sub(2) + i as u16;
        out.queue(cursor::MoveTo(
            cx.saturating_sub(text.chars().count() as u16 / 2),
            row,
        ))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*text))?;
    }

    out.queue(style::ResetColor)?;
    out.flush()?;

    // Wait for a start or quit key.
    loop {
        if let Ok(Event::Key(KeyEvent { code, kind, .. })) = rx.recv() {
            if kind != KeyEventKind::Press {
                continue;
            }
            match code {
                KeyCode::Enter | KeyCode::Char(' ') => return Ok(MenuResult::Start),
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(MenuResult::Quit);
                }
                _ => {}
            }
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

enum LoopExit {
    Quit,
    Restart,
}

/// Input model: a `key_frame` map records the frame of the last press/repeat
/// event for every key. Each frame, keys still within `HOLD_WINDOW` are
/// treated as held, so movement and fire can be held together. One-shot
/// actions (abilities, pause, dismiss, continue) fire on press only.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rng: &mut StdRng,
    rx: &mpsc::Receiver<Event>,
    best_score: &mut u32,
) -> std::io::Result<LoopExit> {
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Input ─────────────────────────────────────────────────────────────
        while let Ok(Event::Key(KeyEvent {
            code,
            kind,
            modifiers,
            ..
        })) = rx.try_recv()
        {
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code.clone(), frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            return Ok(LoopExit::Quit);
                        }
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(LoopExit::Quit);
                        }
                        KeyCode::Char('r') | KeyCode::Char('R')
                            if state.status == GameStatus::GameOver =>
                        {
                            return Ok(LoopExit::Restart);
                        }
                        KeyCode::Char('c') | KeyCode::Char('C') => {
                            continue_from_checkpoint(state);
                        }
                        KeyCode::Char('p') | KeyCode::Char('P') => toggle_pause(state),
                        KeyCode::Enter => dismiss_message(state),
                        KeyCode::Char('1') => trigger_ability(state, 1, rng),
                        KeyCode::Char('2') => trigger_ability(state, 2, rng),
                        KeyCode::Char('3') => trigger_ability(state, 3, rng),
                        _ => {}
                    }
                }
                KeyEventKind::Repeat => {
                    key_frame.insert(code.clone(), frame);
                }
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        // ── Translate held keys into intents ──────────────────────────────────
        let left = is_held(&key_frame, &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')], frame);
        let right = is_held(&key_frame, &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')], frame);
        let up = is_held(&key_frame, &[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')], frame);
        let down = is_held(&key_frame, &[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')], frame);
        set_movement(state, MoveIntent::from_keys(left, right, up, down));
        set_firing(state, is_held(&key_frame, &[KeyCode::Char(' ')], frame));

        step(state, rng);
        *best_score = (*best_score).max(state.score);

        display::render(out, state, *best_score)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = Arc::new(GameConfig::load_or_default(DEFAULT_CONFIG_FILE)?);
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Ask for release and repeat events; unsupported terminals ignore this.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Blocking reads happen off the frame loop.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    let result = run(&mut out, &rx, &config, &mut rng);

    // Restore the terminal even when the session failed.
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result.map_err(Into::into)
}

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: &Arc<GameConfig>,
    rng: &mut StdRng,
) -> std::io::Result<()> {
    let mut best_score = 0;

    'menu: loop {
        match show_menu(out, rx, best_score)? {
            MenuResult::Quit => break,
            MenuResult::Start => loop {
                let mut state = init_state(Arc::clone(config));
                match game_loop(out, &mut state, rng, rx, &mut best_score)? {
                    LoopExit::Quit => break 'menu,
                    LoopExit::Restart => continue,
                }
            },
        }
    }
    Ok(())
}
