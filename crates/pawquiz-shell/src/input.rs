//! User input: line parsing and the keyboard listener.

/// A navigation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowRight,
    ArrowLeft,
}

/// One user action, as typed on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Pick the option with this 1-based number on the current question.
    Choose(usize),
    /// The Next / Finish button.
    Next,
    /// The Previous button.
    Previous,
    /// A key press routed through the keyboard listener.
    Key(Key),
    /// The Start Again button on the result screen.
    Restart,
    Quit,
    Help,
}

/// What a key press asks the engine to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Next,
    Previous,
}

/// Parse one line of user input. Returns `None` for anything unrecognised.
pub fn parse_input(line: &str) -> Option<Input> {
    let trimmed = line.trim();

    match trimmed {
        "\u{1b}[C" | "\u{1b}OC" => return Some(Input::Key(Key::ArrowRight)),
        "\u{1b}[D" | "\u{1b}OD" => return Some(Input::Key(Key::ArrowLeft)),
        _ => {}
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "n" | "next" | "f" | "finish" => Some(Input::Next),
        "p" | "prev" | "previous" => Some(Input::Previous),
        "right" | ">" => Some(Input::Key(Key::ArrowRight)),
        "left" | "<" => Some(Input::Key(Key::ArrowLeft)),
        "r" | "restart" => Some(Input::Restart),
        "q" | "quit" | "exit" => Some(Input::Quit),
        "?" | "h" | "help" => Some(Input::Help),
        other => other.parse::<usize>().ok().map(Input::Choose),
    }
}

/// The global keyboard listener.
///
/// Registered once per shell. It maps keys to actions and holds no copy of
/// quiz state; the shell applies the action to the engine as it is at the
/// moment of the key press.
#[derive(Debug, Clone)]
pub struct KeyListener {
    bindings: Vec<(Key, Action)>,
}

impl Default for KeyListener {
    fn default() -> Self {
        Self {
            bindings: vec![
                (Key::ArrowRight, Action::Next),
                (Key::ArrowLeft, Action::Previous),
            ],
        }
    }
}

impl KeyListener {
    pub fn on_key(&self, key: Key) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(bound, _)| *bound == key)
            .map(|(_, action)| *action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_words_and_numbers() {
        assert_eq!(parse_input("2\n"), Some(Input::Choose(2)));
        assert_eq!(parse_input("  Next "), Some(Input::Next));
        assert_eq!(parse_input("finish"), Some(Input::Next));
        assert_eq!(parse_input("p"), Some(Input::Previous));
        assert_eq!(parse_input("R"), Some(Input::Restart));
        assert_eq!(parse_input("q"), Some(Input::Quit));
        assert_eq!(parse_input("?"), Some(Input::Help));
        assert_eq!(parse_input("banana"), None);
        assert_eq!(parse_input(""), None);
        assert_eq!(parse_input("-1"), None);
    }

    #[test]
    fn parse_arrow_escape_sequences() {
        assert_eq!(
            parse_input("\u{1b}[C\n"),
            Some(Input::Key(Key::ArrowRight))
        );
        assert_eq!(parse_input("\u{1b}[D"), Some(Input::Key(Key::ArrowLeft)));
        assert_eq!(parse_input("\u{1b}OC"), Some(Input::Key(Key::ArrowRight)));
        assert_eq!(parse_input(">"), Some(Input::Key(Key::ArrowRight)));
        assert_eq!(parse_input("left"), Some(Input::Key(Key::ArrowLeft)));
    }

    #[test]
    fn default_bindings() {
        let keys = KeyListener::default();
        assert_eq!(keys.on_key(Key::ArrowRight), Some(Action::Next));
        assert_eq!(keys.on_key(Key::ArrowLeft), Some(Action::Previous));
    }
}
