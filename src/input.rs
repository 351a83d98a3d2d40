use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Unit vector `(dx, dy)` with y growing downwards.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Logical input events consumed by the game engine.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Reset,
    TogglePause,
}

/// What a key press asks the process to do.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Command {
    Game(GameInput),
    Quit,
}

/// Logical key names and the events they trigger.
pub const KEY_BINDINGS: &[(&str, GameInput)] = &[
    ("up", GameInput::Direction(Direction::Up)),
    ("w", GameInput::Direction(Direction::Up)),
    ("down", GameInput::Direction(Direction::Down)),
    ("s", GameInput::Direction(Direction::Down)),
    ("left", GameInput::Direction(Direction::Left)),
    ("a", GameInput::Direction(Direction::Left)),
    ("right", GameInput::Direction(Direction::Right)),
    ("d", GameInput::Direction(Direction::Right)),
    ("r", GameInput::Reset),
    ("space", GameInput::TogglePause),
];

/// Looks up a logical key name, ignoring case.
#[must_use]
pub fn input_for_key_name(name: &str) -> Option<GameInput> {
    KEY_BINDINGS
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, input)| *input)
}

/// Returns true when direction `next` does not reverse `current`.
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Maps a terminal key event to a command.
#[must_use]
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if is_quit_key(key) {
        return Some(Command::Quit);
    }

    // Ctrl/Alt chords belong to the terminal, not the game.
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    let name = key_name(key.code)?;
    input_for_key_name(&name).map(Command::Game)
}

fn is_quit_key(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
        || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}

fn key_name(code: KeyCode) -> Option<String> {
    let name = match code {
        KeyCode::Up => "up".to_owned(),
        KeyCode::Down => "down".to_owned(),
        KeyCode::Left => "left".to_owned(),
        KeyCode::Right => "right".to_owned(),
        KeyCode::Char(' ') => "space".to_owned(),
        KeyCode::Char(c) => c.to_string(),
        _ => return None,
    };

    Some(name)
}
