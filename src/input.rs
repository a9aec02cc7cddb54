use crate::command::Key;
use crate::game::{Direction, GameSession, Phase};
use log::debug;
use rand::Rng;

/// What a key press asks the session to do
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum InputCommand {
    Ignore,
    SetDirection(Direction),
    /// Begin the first game
    Start,
    /// Begin a new game after the previous one ended
    Restart,
}

/// Translate a key press into a command for `session`.
///
/// Before the first game only Enter does anything, and after a game has ended
/// only Enter does anything.  During play the arrow keys steer the snake, but
/// a key that would send the snake straight back (opposite to the way it last
/// moved, or opposite to its current direction) is ignored.
pub(crate) fn map_input<R>(key: Key, session: &GameSession<R>) -> InputCommand {
    match (session.phase(), key) {
        (Phase::NotStarted, Key::Enter) => InputCommand::Start,
        (Phase::GameOver, Key::Enter) => InputCommand::Restart,
        (Phase::Playing, _) => {
            let direction = match key {
                Key::ArrowUp => Direction::Up,
                Key::ArrowDown => Direction::Down,
                Key::ArrowLeft => Direction::Left,
                Key::ArrowRight => Direction::Right,
                Key::Enter => return InputCommand::Ignore,
            };
            if session.snake().reverses(direction) {
                InputCommand::Ignore
            } else {
                InputCommand::SetDirection(direction)
            }
        }
        _ => InputCommand::Ignore,
    }
}

impl<R: Rng> GameSession<R> {
    /// Carry out `cmd`.  Returns `true` if the session changed in a way that
    /// affects ticking (the game started or restarted).
    pub(crate) fn apply(&mut self, cmd: InputCommand) -> bool {
        match cmd {
            InputCommand::Ignore => false,
            InputCommand::SetDirection(d) => {
                if self.turn(d) {
                    debug!("Direction set to {d:?}");
                }
                false
            }
            InputCommand::Start => self.start(),
            InputCommand::Restart => {
                self.reset(true);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Snake, StepOutcome, Tuning};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn new_session() -> GameSession<ChaCha12Rng> {
        GameSession::new_with_rng(Tuning::default(), ChaCha12Rng::seed_from_u64(RNG_SEED))
    }

    fn advance(session: &mut GameSession<ChaCha12Rng>) {
        let outcome = session.step();
        assert!(
            matches!(outcome, StepOutcome::Moved | StepOutcome::Ate),
            "unexpected outcome {outcome:?}"
        );
    }

    /// A session in play whose snake last moved in `heading`
    fn playing_heading(heading: Direction) -> GameSession<ChaCha12Rng> {
        let mut session = new_session();
        let _ = session.start();
        // Steer from the starting position (moving right) so that the snake
        // has just moved in `heading`
        match heading {
            Direction::Right => {}
            Direction::Down => {
                let _ = session.turn(Direction::Down);
            }
            Direction::Up | Direction::Left => {
                let _ = session.turn(Direction::Down);
                advance(&mut session);
                advance(&mut session);
                let _ = session.turn(Direction::Left);
                advance(&mut session);
                if heading == Direction::Up {
                    let _ = session.turn(Direction::Up);
                }
            }
        }
        advance(&mut session);
        assert_eq!(session.snake().heading(), heading);
        session
    }

    #[test]
    fn not_started_only_enter_starts() {
        let mut session = new_session();
        for key in [Key::ArrowUp, Key::ArrowDown, Key::ArrowLeft, Key::ArrowRight] {
            assert_eq!(map_input(key, &session), InputCommand::Ignore);
        }
        let cmd = map_input(Key::ArrowUp, &session);
        assert!(!session.apply(cmd), "ignored input should not change ticking");
        assert_eq!(session.phase(), Phase::NotStarted);
        assert_eq!(session.snake().direction(), Direction::Right);

        let cmd = map_input(Key::Enter, &session);
        assert_eq!(cmd, InputCommand::Start);
        assert!(session.apply(cmd), "start should begin ticking");
        assert_eq!(session.phase(), Phase::Playing);
    }

    #[rstest]
    #[case(Direction::Up, Key::ArrowDown)]
    #[case(Direction::Down, Key::ArrowUp)]
    #[case(Direction::Left, Key::ArrowRight)]
    #[case(Direction::Right, Key::ArrowLeft)]
    fn reversal_is_ignored(#[case] heading: Direction, #[case] key: Key) {
        let mut session = playing_heading(heading);
        let cmd = map_input(key, &session);
        assert_eq!(cmd, InputCommand::Ignore);
        let _ = session.apply(cmd);
        assert_eq!(session.snake().direction(), heading);
    }

    #[rstest]
    #[case(Direction::Up, Key::ArrowLeft, Direction::Left)]
    #[case(Direction::Up, Key::ArrowRight, Direction::Right)]
    #[case(Direction::Up, Key::ArrowUp, Direction::Up)]
    #[case(Direction::Right, Key::ArrowUp, Direction::Up)]
    #[case(Direction::Right, Key::ArrowDown, Direction::Down)]
    #[case(Direction::Left, Key::ArrowDown, Direction::Down)]
    #[case(Direction::Down, Key::ArrowRight, Direction::Right)]
    fn turning(#[case] heading: Direction, #[case] key: Key, #[case] expected: Direction) {
        let mut session = playing_heading(heading);
        let cmd = map_input(key, &session);
        assert_eq!(cmd, InputCommand::SetDirection(expected));
        assert!(!session.apply(cmd), "turning should not change ticking");
        assert_eq!(session.snake().direction(), expected);
    }

    #[test]
    fn two_presses_in_one_tick_cannot_reverse() {
        let mut session = playing_heading(Direction::Right);
        let cmd = map_input(Key::ArrowUp, &session);
        let _ = session.apply(cmd);
        assert_eq!(session.snake().direction(), Direction::Up);
        let cmd = map_input(Key::ArrowLeft, &session);
        assert_eq!(cmd, InputCommand::Ignore);
        let _ = session.apply(cmd);
        assert_eq!(session.snake().direction(), Direction::Up);
    }

    #[test]
    fn reverse_of_pending_turn_is_ignored() {
        let mut session = playing_heading(Direction::Right);
        let cmd = map_input(Key::ArrowUp, &session);
        assert_eq!(cmd, InputCommand::SetDirection(Direction::Up));
        let _ = session.apply(cmd);
        assert_eq!(session.snake().direction(), Direction::Up);
        assert_eq!(session.snake().heading(), Direction::Right);
        let cmd = map_input(Key::ArrowDown, &session);
        assert_eq!(cmd, InputCommand::Ignore);
        let _ = session.apply(cmd);
        assert_eq!(session.snake().direction(), Direction::Up);
        assert!(!session.turn(Direction::Down), "reversal should be rejected");
        assert_eq!(session.snake().direction(), Direction::Up);
    }

    #[test]
    fn enter_while_playing_is_ignored() {
        let session = playing_heading(Direction::Right);
        assert_eq!(map_input(Key::Enter, &session), InputCommand::Ignore);
    }

    #[test]
    fn game_over_only_enter_restarts() {
        let mut session = new_session();
        let _ = session.start();
        let _ = session.turn(Direction::Up);
        assert_eq!(session.step(), StepOutcome::Collided);
        assert_eq!(session.phase(), Phase::GameOver);
        for key in [Key::ArrowUp, Key::ArrowDown, Key::ArrowLeft, Key::ArrowRight] {
            assert_eq!(map_input(key, &session), InputCommand::Ignore);
        }
        let cmd = map_input(Key::Enter, &session);
        assert_eq!(cmd, InputCommand::Restart);
        assert!(session.apply(cmd), "restart should begin ticking");
        assert_eq!(session.phase(), Phase::Playing);
        assert_eq!(
            session.snake().cells().iter().copied().collect::<Vec<_>>(),
            Snake::START
        );
        assert_eq!(session.snake().direction(), Direction::Right);
    }
}
