use crate::command::Command;
use crate::game::{GameSession, StepOutcome, Tuning};
use crate::input::map_input;
use crossterm::event::Event;
use log::{debug, info};
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Where input events come from
pub(crate) trait EventSource {
    /// Wait up to `timeout` for an event to become available.  Returns
    /// `true` if one is ready to be read.
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;

    /// Block until an event is available and return it
    fn read(&mut self) -> io::Result<Event>;
}

/// Input events from the controlling terminal
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        crossterm::event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        crossterm::event::read()
    }
}

/// The pending tick of a session in play
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Ticker {
    period: Duration,
    deadline: Instant,
}

impl Ticker {
    fn start(period: Duration) -> Ticker {
        Ticker {
            period,
            deadline: Instant::now() + period,
        }
    }

    fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }
}

/// Owner of the game session, its tick timer, and its input.  The timer only
/// exists while a game is being played.
#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng, E = TerminalEvents> {
    session: GameSession<R>,
    events: E,
    ticker: Option<Ticker>,
    quitting: bool,
}

impl App {
    pub(crate) fn new(tuning: Tuning) -> App {
        App::with_parts(GameSession::new(tuning), TerminalEvents)
    }
}

impl<R: Rng, E: EventSource> App<R, E> {
    pub(crate) fn with_parts(session: GameSession<R>, events: E) -> App<R, E> {
        App {
            session,
            events,
            ticker: None,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        self.stop_ticker();
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(&self.session, frame.area()))?;
        Ok(())
    }

    /// Wait for either the next key event or the next tick, whichever comes
    /// first, and handle it
    fn process_input(&mut self) -> io::Result<()> {
        if let Some(ticker) = self.ticker {
            let wait = ticker.remaining();
            if wait.is_zero() || !self.events.poll(wait)? {
                self.tick();
                return Ok(());
            }
        }
        let event = self.events.read()?;
        self.handle_event(event);
        Ok(())
    }

    fn tick(&mut self) {
        match self.session.step() {
            StepOutcome::Moved | StepOutcome::Ate => {
                // Re-arm with the current speed so that a speed change
                // applies from the next tick on
                self.ticker = Some(Ticker::start(self.session.speed()));
            }
            StepOutcome::Collided | StepOutcome::BoardFull | StepOutcome::Idle => {
                self.stop_ticker();
            }
        }
    }

    fn handle_event(&mut self, event: Event) {
        match Command::from_event(event) {
            Some(Command::Quit) => {
                info!("Quit requested");
                self.quitting = true;
            }
            Some(Command::Key(key)) => {
                let cmd = map_input(key, &self.session);
                if self.session.apply(cmd) {
                    self.start_ticker();
                }
            }
            None => (),
        }
    }

    fn start_ticker(&mut self) {
        let period = self.session.speed();
        debug!("Starting tick timer with period {period:?}");
        self.ticker = Some(Ticker::start(period));
    }

    fn stop_ticker(&mut self) {
        if self.ticker.take().is_some() {
            debug!("Tick timer stopped");
        }
    }
}
