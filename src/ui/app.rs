//! Application state and the terminal event loop.

use crate::audio::{self, SoundCue};
use crate::catalog::LOCATIONS;
use crate::constants::POLL_INTERVAL_MS;
use crate::errors::GameError;
use crate::fishing::{self, FishingSession, GamePhase};
use crate::player::PlayerAccount;
use super::{fishing_scene, gear_scene, overlays};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Which modal, if any, sits above the fishing scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Gear,
    Inventory,
    Journal,
}

/// Everything the terminal client owns: the session/account pair plus
/// view state.
pub struct App {
    pub session: FishingSession,
    pub player: PlayerAccount,
    pub overlay: Overlay,
    pub gear_menu: gear_scene::GearMenu,
    /// One-line feedback for recoverable errors.
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            session: FishingSession::new(LOCATIONS[0].id),
            player: PlayerAccount::new(),
            overlay: Overlay::None,
            gear_menu: gear_scene::GearMenu::new(),
            status: None,
            should_quit: false,
        }
    }

    fn draw(&self, frame: &mut Frame, now: Instant) {
        fishing_scene::render(frame, self, now);
        match self.overlay {
            Overlay::None => {}
            Overlay::Gear => gear_scene::render(frame, self),
            Overlay::Inventory => overlays::render_inventory(frame, &self.player),
            Overlay::Journal => overlays::render_journal(frame, &self.player),
        }
    }

    fn on_key(&mut self, key: KeyEvent, now: Instant) {
        self.status = None;

        if self.overlay == Overlay::Gear {
            gear_scene::on_key(self, key);
            return;
        }
        if self.overlay != Overlay::None {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                self.overlay = Overlay::None;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('g') => self.overlay = Overlay::Gear,
            KeyCode::Char('i') => self.overlay = Overlay::Inventory,
            KeyCode::Char('j') => self.overlay = Overlay::Journal,
            KeyCode::Char(' ') | KeyCode::Enter => self.primary_action(now),
            KeyCode::Char(c @ '1'..='3') => {
                let idx = c as usize - '1' as usize;
                let _ = fishing::select_location(&mut self.session, LOCATIONS[idx].id);
            }
            _ => {}
        }
    }

    /// The big button: cast, reel in, or dismiss, depending on phase.
    fn primary_action(&mut self, now: Instant) {
        match self.session.phase {
            GamePhase::Idle => match fishing::cast(&mut self.session, &mut self.player, now) {
                Ok(()) => audio::play(SoundCue::Cast),
                Err(GameError::InsufficientBait { .. }) => {
                    self.status = Some("Out of bait! Buy more in the gear menu.".to_string());
                    self.overlay = Overlay::Gear;
                }
                Err(_) => {}
            },
            GamePhase::Hooked => {
                if fishing::reel_in(&mut self.session, &mut self.player, &mut rand::thread_rng(), now)
                    .is_ok()
                {
                    audio::play(match self.session.last_catch {
                        Some(_) => SoundCue::Success,
                        None => SoundCue::Fail,
                    });
                }
            }
            GamePhase::Result => {
                let _ = fishing::close_result(&mut self.session);
            }
            // Casting/Waiting: nothing to do but wait.
            _ => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Sets up the terminal, runs the event loop until quit, restores the
/// terminal.
pub fn run() -> io::Result<()> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    let mut app = App::new();

    while !app.should_quit {
        let now = Instant::now();
        terminal.draw(|frame| app.draw(frame, now))?;

        // Poll for input (non-blocking) and advance timers.
        if event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                app.on_key(key, Instant::now());
            }
        }
        if let Some(cue) = fishing::tick(
            &mut app.session,
            &app.player,
            &mut rand::thread_rng(),
            Instant::now(),
        ) {
            audio::play(cue);
        }
    }

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn space_casts_from_idle() {
        let mut app = App::new();
        app.on_key(key(KeyCode::Char(' ')), Instant::now());
        assert_eq!(app.session.phase, GamePhase::Casting);
        assert_eq!(app.player.bait_count("worm"), 9);
    }

    #[test]
    fn out_of_bait_cast_opens_the_gear_menu() {
        let mut app = App::new();
        app.player.inventory.clear();
        app.on_key(key(KeyCode::Char(' ')), Instant::now());
        assert_eq!(app.session.phase, GamePhase::Idle);
        assert_eq!(app.overlay, Overlay::Gear);
        assert!(app.status.is_some());
    }

    #[test]
    fn location_keys_only_work_while_idle() {
        let mut app = App::new();
        app.on_key(key(KeyCode::Char('2')), Instant::now());
        assert_eq!(app.session.location_id, LOCATIONS[1].id);

        app.on_key(key(KeyCode::Char(' ')), Instant::now());
        app.on_key(key(KeyCode::Char('1')), Instant::now());
        assert_eq!(app.session.location_id, LOCATIONS[1].id);
    }

    #[test]
    fn q_quits_from_the_main_scene() {
        let mut app = App::new();
        app.on_key(key(KeyCode::Char('q')), Instant::now());
        assert!(app.should_quit);
    }

    #[test]
    fn esc_closes_read_only_overlays() {
        let mut app = App::new();
        app.overlay = Overlay::Journal;
        app.on_key(key(KeyCode::Esc), Instant::now());
        assert_eq!(app.overlay, Overlay::None);
    }
}
