use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

/// A key press recognized by the game
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Key {
    Enter,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

/// A decoded terminal event
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    /// The player asked to leave the program
    Quit,
    Key(Key),
}

impl Command {
    /// Decode a terminal event.  Key releases, unrecognized keys, and
    /// non-key events decode to `None`.
    pub(crate) fn from_event(event: Event) -> Option<Command> {
        Command::from_key_event(event.as_key_press_event()?)
    }

    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (_, KeyCode::Enter) => Some(Command::Key(Key::Enter)),
            (KeyModifiers::NONE, KeyCode::Up) => Some(Command::Key(Key::ArrowUp)),
            (KeyModifiers::NONE, KeyCode::Down) => Some(Command::Key(Key::ArrowDown)),
            (KeyModifiers::NONE, KeyCode::Left) => Some(Command::Key(Key::ArrowLeft)),
            (KeyModifiers::NONE, KeyCode::Right) => Some(Command::Key(Key::ArrowRight)),
            _ => None,
        }
    }
}
