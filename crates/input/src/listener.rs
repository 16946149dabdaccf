//! Input listener: key transitions in, engine commands out.
//!
//! Left and right are tracked as independent booleans. Every transition of
//! either arrow cancels the repeat timer, sends a move with the updated flags
//! right away and, while a direction is still held, restarts the timer so the
//! move repeats every [`MOVE_REPEAT_MS`].
//!
//! Synthetic repeat key-downs are ignored, so rotation fires once per press.
//!
//! Terminals that never report key releases can enable an auto-release
//! timeout: held keys are released once no key event arrived for that long.

use arrayvec::ArrayVec;
use tracing::debug;

use crate::core::IntervalTimer;
use crate::types::{GameCommand, Key, KeyInput, KeyState, MoveFlags, MOVE_REPEAT_MS};

/// Default auto-release timeout for terminals without key-release events.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Upper bound of commands produced by one [`InputListener::update`].
pub const MAX_COMMANDS_PER_UPDATE: usize = 16;

/// Commands produced by one call into the listener.
pub type Commands = ArrayVec<GameCommand, MAX_COMMANDS_PER_UPDATE>;

#[derive(Debug, Clone)]
pub struct InputListener {
    pressing_left: bool,
    pressing_right: bool,
    soft_drop_held: bool,
    repeat: IntervalTimer,
    key_release_timeout_ms: Option<u32>,
    since_last_key_ms: u32,
}

impl InputListener {
    /// A listener for terminals that report key releases.
    pub fn new() -> Self {
        Self {
            pressing_left: false,
            pressing_right: false,
            soft_drop_held: false,
            repeat: IntervalTimer::stopped(),
            key_release_timeout_ms: None,
            since_last_key_ms: 0,
        }
    }

    /// Release held keys after `timeout_ms` without key events.
    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = Some(timeout_ms);
        self
    }

    pub fn key_release_timeout_ms(&self) -> Option<u32> {
        self.key_release_timeout_ms
    }

    pub fn is_pressing_left(&self) -> bool {
        self.pressing_left
    }

    pub fn is_pressing_right(&self) -> bool {
        self.pressing_right
    }

    pub fn is_soft_drop_held(&self) -> bool {
        self.soft_drop_held
    }

    /// Whether the held-direction repeat timer is running.
    pub fn is_repeating(&self) -> bool {
        self.repeat.is_running()
    }

    fn held_flags(&self) -> MoveFlags {
        MoveFlags {
            pressing_left: self.pressing_left,
            pressing_right: self.pressing_right,
            rotating: false,
        }
    }

    /// Handle one key transition.
    pub fn handle(&mut self, input: KeyInput) -> Option<GameCommand> {
        match input.state {
            KeyState::Repeat => {
                self.since_last_key_ms = 0;
                None
            }
            KeyState::Down => {
                self.since_last_key_ms = 0;
                self.key_down(input.key)
            }
            KeyState::Up => self.key_up(input.key),
        }
    }

    fn key_down(&mut self, key: Key) -> Option<GameCommand> {
        match key {
            Key::Left => {
                if self.pressing_left {
                    // Auto-repeat delivered as a plain press.
                    return None;
                }
                self.pressing_left = true;
                self.direction_changed()
            }
            Key::Right => {
                if self.pressing_right {
                    return None;
                }
                self.pressing_right = true;
                self.direction_changed()
            }
            Key::Up => Some(GameCommand::Move(MoveFlags::rotate())),
            Key::Down => {
                if self.soft_drop_held {
                    return None;
                }
                self.soft_drop_held = true;
                Some(GameCommand::SoftDrop(true))
            }
            Key::Start => Some(GameCommand::Start),
        }
    }

    fn key_up(&mut self, key: Key) -> Option<GameCommand> {
        match key {
            Key::Left if self.pressing_left => {
                self.pressing_left = false;
                self.direction_changed()
            }
            Key::Right if self.pressing_right => {
                self.pressing_right = false;
                self.direction_changed()
            }
            Key::Down if self.soft_drop_held => {
                self.soft_drop_held = false;
                Some(GameCommand::SoftDrop(false))
            }
            _ => None,
        }
    }

    /// Cancel the repeat timer, then restart it and move right away if a
    /// direction is still held.
    fn direction_changed(&mut self) -> Option<GameCommand> {
        self.repeat.cancel();
        if !self.pressing_left && !self.pressing_right {
            return None;
        }
        self.repeat.set_period(Some(MOVE_REPEAT_MS));
        Some(GameCommand::Move(self.held_flags()))
    }

    /// Advance the repeat timer (and the auto-release timeout) by
    /// `elapsed_ms`, returning the commands that fell due.
    pub fn update(&mut self, elapsed_ms: u32) -> Commands {
        let mut commands = Commands::new();

        self.since_last_key_ms = self.since_last_key_ms.saturating_add(elapsed_ms);
        if let Some(timeout) = self.key_release_timeout_ms {
            if self.since_last_key_ms > timeout && self.holds_any_key() {
                debug!(idle_ms = self.since_last_key_ms, "auto-releasing held keys");
                self.pressing_left = false;
                self.pressing_right = false;
                self.repeat.cancel();
                if self.soft_drop_held {
                    self.soft_drop_held = false;
                    let _ = commands.try_push(GameCommand::SoftDrop(false));
                }
                return commands;
            }
        }

        let fired = self.repeat.advance(elapsed_ms);
        let flags = self.held_flags();
        for _ in 0..fired {
            if commands.try_push(GameCommand::Move(flags)).is_err() {
                break;
            }
        }
        commands
    }

    fn holds_any_key(&self) -> bool {
        self.pressing_left || self.pressing_right || self.soft_drop_held
    }

    /// Forget every held key and stop the repeat timer.
    ///
    /// Called when a session ends or restarts so no stale hold leaks into
    /// the next game.
    pub fn cancel(&mut self) {
        self.pressing_left = false;
        self.pressing_right = false;
        self.soft_drop_held = false;
        self.repeat.cancel();
        self.since_last_key_ms = 0;
    }
}

impl Default for InputListener {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moves(commands: &Commands) -> usize {
        commands
            .iter()
            .filter(|c| matches!(c, GameCommand::Move(_)))
            .count()
    }

    #[test]
    fn test_left_down_moves_immediately_then_repeats() {
        let mut listener = InputListener::new();

        assert_eq!(
            listener.handle(KeyInput::down(Key::Left)),
            Some(GameCommand::Move(MoveFlags::left()))
        );
        assert!(listener.update(MOVE_REPEAT_MS - 1).is_empty());

        let commands = listener.update(1);
        assert_eq!(commands.as_slice(), &[GameCommand::Move(MoveFlags::left())]);

        assert_eq!(moves(&listener.update(MOVE_REPEAT_MS * 2)), 2);
    }

    #[test]
    fn test_release_stops_repeats() {
        let mut listener = InputListener::new();
        listener.handle(KeyInput::down(Key::Right));
        assert_eq!(listener.handle(KeyInput::up(Key::Right)), None);

        assert!(!listener.is_repeating());
        assert!(listener.update(10 * MOVE_REPEAT_MS).is_empty());
    }

    #[test]
    fn test_both_arrows_tracked_independently() {
        let mut listener = InputListener::new();
        listener.handle(KeyInput::down(Key::Left));
        listener.update(200);

        // Pressing right restarts the cadence; right wins while both are held.
        let both = MoveFlags {
            pressing_left: true,
            pressing_right: true,
            rotating: false,
        };
        assert_eq!(
            listener.handle(KeyInput::down(Key::Right)),
            Some(GameCommand::Move(both))
        );
        assert!(listener.update(200).is_empty());

        // Releasing right falls back to the still-held left.
        assert_eq!(
            listener.handle(KeyInput::up(Key::Right)),
            Some(GameCommand::Move(MoveFlags::left()))
        );
        assert!(listener.is_pressing_left());
        assert!(!listener.is_pressing_right());
        assert_eq!(
            listener.update(MOVE_REPEAT_MS).as_slice(),
            &[GameCommand::Move(MoveFlags::left())]
        );
    }

    #[test]
    fn test_repeat_events_are_ignored() {
        let mut listener = InputListener::new();
        assert_eq!(
            listener.handle(KeyInput::down(Key::Up)),
            Some(GameCommand::Move(MoveFlags::rotate()))
        );
        assert_eq!(listener.handle(KeyInput::repeat(Key::Up)), None);
        assert_eq!(listener.handle(KeyInput::repeat(Key::Left)), None);
        assert!(!listener.is_pressing_left());
    }

    #[test]
    fn test_soft_drop_press_and_release() {
        let mut listener = InputListener::new();
        assert_eq!(
            listener.handle(KeyInput::down(Key::Down)),
            Some(GameCommand::SoftDrop(true))
        );
        // A second press without release is an auto-repeat.
        assert_eq!(listener.handle(KeyInput::down(Key::Down)), None);
        assert_eq!(
            listener.handle(KeyInput::up(Key::Down)),
            Some(GameCommand::SoftDrop(false))
        );
        assert_eq!(listener.handle(KeyInput::up(Key::Down)), None);
    }

    #[test]
    fn test_start_key() {
        let mut listener = InputListener::new();
        assert_eq!(
            listener.handle(KeyInput::down(Key::Start)),
            Some(GameCommand::Start)
        );
        assert_eq!(listener.handle(KeyInput::up(Key::Start)), None);
    }

    #[test]
    fn test_auto_release_after_timeout() {
        let mut listener = InputListener::new().with_key_release_timeout_ms(150);
        listener.handle(KeyInput::down(Key::Left));
        listener.handle(KeyInput::down(Key::Down));

        assert!(listener.update(150).is_empty());
        let commands = listener.update(1);
        assert_eq!(commands.as_slice(), &[GameCommand::SoftDrop(false)]);
        assert!(!listener.is_pressing_left());
        assert!(!listener.is_soft_drop_held());
        assert!(!listener.is_repeating());
    }

    #[test]
    fn test_repeat_events_extend_the_release_timeout() {
        let mut listener = InputListener::new().with_key_release_timeout_ms(150);
        listener.handle(KeyInput::down(Key::Right));
        listener.update(100);
        listener.handle(KeyInput::repeat(Key::Right));
        listener.update(100);
        assert!(listener.is_pressing_right());
    }

    #[test]
    fn test_cancel_forgets_held_keys() {
        let mut listener = InputListener::new();
        listener.handle(KeyInput::down(Key::Left));
        listener.handle(KeyInput::down(Key::Down));

        listener.cancel();

        assert!(!listener.is_pressing_left());
        assert!(!listener.is_soft_drop_held());
        assert!(listener.update(10 * MOVE_REPEAT_MS).is_empty());
        // The stale release is harmless.
        assert_eq!(listener.handle(KeyInput::up(Key::Left)), None);
    }
}
