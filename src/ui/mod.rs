//! Presentation layer: turns input into game operations and keeps what the
//! renderer needs (latest snapshot, message log, short-lived effects).

pub mod actions;
pub mod render;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::economy::{ClickerGame, Config, GeneratorKind, Outcome, Snapshot};
use crate::input::{ClickState, InputEvent};
use crate::time::FrameClock;

/// Most entries kept in the message log.
const MAX_LOG: usize = 50;

/// How long the "+N" income flash stays up after a production tick.
const INCOME_FLASH_MS: u64 = 400;

pub type Game = ClickerGame<Box<dyn FnMut(&Snapshot)>>;

#[derive(Clone, Debug)]
pub struct LogEntry {
    pub text: String,
    pub is_important: bool,
}

/// Everything the renderer reads.
pub struct Screen {
    /// Last snapshot pushed by the game.
    pub snapshot: Option<Snapshot>,
    pub log: Vec<LogEntry>,
    /// Milliseconds since start, drives the spinner.
    pub elapsed_ms: u64,
    /// Income of the latest production tick and how long to keep showing it.
    pub income_flash: Option<(u64, u64)>,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            snapshot: None,
            log: Vec::new(),
            elapsed_ms: 0,
            income_flash: None,
        }
    }

    pub fn present(&mut self, snapshot: &Snapshot) {
        self.snapshot = Some(snapshot.clone());
    }

    pub fn add_log(&mut self, text: &str, is_important: bool) {
        self.log.push(LogEntry {
            text: text.to_string(),
            is_important,
        });
        if self.log.len() > MAX_LOG {
            let excess = self.log.len() - MAX_LOG;
            self.log.drain(..excess);
        }
    }
}

/// What a key or click asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    MakeMoney,
    Upgrade,
    Buy(GeneratorKind),
}

impl Command {
    pub fn from_event(event: &InputEvent) -> Option<Command> {
        match *event {
            InputEvent::Key('c') | InputEvent::Key(' ') => Some(Command::MakeMoney),
            InputEvent::Key('u') => Some(Command::Upgrade),
            InputEvent::Key(key) => GeneratorKind::from_key(key).map(Command::Buy),
            InputEvent::Click(actions::MAKE_MONEY) => Some(Command::MakeMoney),
            InputEvent::Click(actions::UPGRADE) => Some(Command::Upgrade),
            InputEvent::Click(id) => actions::generator_for(id).map(Command::Buy),
        }
    }
}

pub struct App {
    game: Game,
    screen: Rc<RefCell<Screen>>,
    clock: FrameClock,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let screen = Rc::new(RefCell::new(Screen::new()));
        let presenter: Box<dyn FnMut(&Snapshot)> = Box::new({
            let screen = screen.clone();
            move |snapshot: &Snapshot| screen.borrow_mut().present(snapshot)
        });
        let game = ClickerGame::new(config, presenter);
        {
            let mut s = screen.borrow_mut();
            s.present(&game.snapshot());
            s.add_log("Click [C] to make money.", false);
        }
        Self {
            game,
            screen,
            clock: FrameClock::new(),
        }
    }

    #[cfg(test)]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[cfg(test)]
    pub fn screen(&self) -> std::cell::Ref<'_, Screen> {
        self.screen.borrow()
    }

    /// Handle an input event. Returns true if it mapped to a command.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match Command::from_event(event) {
            Some(command) => {
                self.perform(command);
                true
            }
            None => false,
        }
    }

    pub fn perform(&mut self, command: Command) {
        let outcome = match command {
            Command::MakeMoney => self.game.click(),
            Command::Upgrade => self.game.upgrade_outcome(),
            Command::Buy(kind) => self.game.buy_outcome(kind),
        };
        // The presenter borrows the screen during the call above, so the log
        // is written only after the game returns.
        let mut screen = self.screen.borrow_mut();
        match outcome {
            Outcome::Clicked { .. } => {}
            Outcome::Upgraded { level, click_yield } => screen.add_log(
                &format!("Upgrade {level}! Now +{click_yield} per click."),
                true,
            ),
            Outcome::Bought { kind, owned } => screen.add_log(
                &format!("Bought a {} ({owned} owned).", kind.name()),
                owned == 1,
            ),
            Outcome::TooExpensive { cost } => {
                screen.add_log(&format!("Not enough money, need {cost}."), false)
            }
        }
    }

    /// Advance by a browser timestamp (ms).
    pub fn tick(&mut self, now_ms: f64) {
        let elapsed = self.clock.update(now_ms);
        self.advance(elapsed);
    }

    pub fn advance(&mut self, elapsed_ms: u64) {
        let income = self.game.advance(elapsed_ms);
        let mut screen = self.screen.borrow_mut();
        screen.elapsed_ms = screen.elapsed_ms.saturating_add(elapsed_ms);
        let flash = screen.income_flash;
        screen.income_flash = match flash {
            _ if income > 0 => Some((income, INCOME_FLASH_MS)),
            Some((amount, left)) if left > elapsed_ms => Some((amount, left - elapsed_ms)),
            _ => None,
        };
    }

    pub fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.screen.borrow(), f, area, click_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(&Config::default())
    }

    fn snapshot(app: &App) -> Snapshot {
        app.screen().snapshot.clone().unwrap()
    }

    #[test]
    fn screen_starts_with_a_snapshot() {
        let app = app();
        assert_eq!(snapshot(&app).balance, 0);
    }

    #[test]
    fn click_key_updates_the_presented_snapshot() {
        let mut app = app();
        assert!(app.handle_input(&InputEvent::Key('c')));
        assert!(app.handle_input(&InputEvent::Key(' ')));
        assert_eq!(snapshot(&app).balance, 2);
        assert_eq!(app.game().state().balance(), 2);
    }

    #[test]
    fn click_target_ids_dispatch() {
        let mut app = app();
        for _ in 0..10 {
            app.handle_input(&InputEvent::Click(actions::MAKE_MONEY));
        }
        assert!(app.handle_input(&InputEvent::Click(actions::UPGRADE)));
        assert_eq!(snapshot(&app).click_yield, 2);
        assert_eq!(snapshot(&app).balance, 0);
    }

    #[test]
    fn unknown_input_is_not_consumed() {
        let mut app = app();
        assert!(!app.handle_input(&InputEvent::Key('x')));
        assert!(!app.handle_input(&InputEvent::Click(999)));
    }

    #[test]
    fn failed_purchase_is_logged_and_changes_nothing() {
        let mut app = app();
        app.handle_input(&InputEvent::Key('1'));
        assert_eq!(snapshot(&app).owned(GeneratorKind::Farm), 0);
        let last = app.screen().log.last().cloned().unwrap();
        assert!(last.text.contains("need 50"));
        assert!(!last.is_important);
    }

    #[test]
    fn farm_produces_on_tick_and_flashes_income() {
        let mut app = app();
        for _ in 0..50 {
            app.perform(Command::MakeMoney);
        }
        app.perform(Command::Buy(GeneratorKind::Farm));
        assert!(app.screen().log.last().unwrap().is_important);

        app.advance(1000);
        assert_eq!(snapshot(&app).balance, 1);
        assert_eq!(app.screen().income_flash, Some((1, INCOME_FLASH_MS)));

        app.advance(INCOME_FLASH_MS);
        assert_eq!(app.screen().income_flash, None);
    }

    #[test]
    fn tick_uses_browser_timestamps() {
        let mut app = app();
        for _ in 0..100 {
            app.perform(Command::MakeMoney);
        }
        app.perform(Command::Buy(GeneratorKind::Factory));
        app.tick(5_000.0);
        app.tick(6_000.0);
        assert_eq!(snapshot(&app).balance, 10);
        assert_eq!(app.screen().elapsed_ms, 1000);
    }

    #[test]
    fn log_is_capped() {
        let mut screen = Screen::new();
        for i in 0..(MAX_LOG + 10) {
            screen.add_log(&format!("line {i}"), false);
        }
        assert_eq!(screen.log.len(), MAX_LOG);
        assert_eq!(screen.log[0].text, "line 10");
    }

    #[test]
    fn command_mapping() {
        assert_eq!(
            Command::from_event(&InputEvent::Key('2')),
            Some(Command::Buy(GeneratorKind::Factory))
        );
        assert_eq!(
            Command::from_event(&InputEvent::Click(actions::buy_generator(GeneratorKind::Farm))),
            Some(Command::Buy(GeneratorKind::Farm))
        );
    }
}
