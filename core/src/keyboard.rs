use crate::navigation::NavIntent;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    CloseModal,
    Navigate(NavIntent),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyOutcome {
    pub command: Option<KeyCommand>,
    pub prevent_default: bool,
}

impl KeyOutcome {
    const IGNORED: Self = Self {
        command: None,
        prevent_default: false,
    };
}

/// Maps a `KeyboardEvent.key` value to what the page should do with it.
///
/// While the modal is open only Escape does anything.
pub fn map_key(key: &str, modal_open: bool) -> KeyOutcome {
    if modal_open {
        return match key {
            "Escape" => KeyOutcome {
                command: Some(KeyCommand::CloseModal),
                prevent_default: false,
            },
            _ => KeyOutcome::IGNORED,
        };
    }
    let intent = match key {
        "ArrowDown" | "PageDown" => NavIntent::Next,
        "ArrowUp" | "PageUp" => NavIntent::Previous,
        "Home" => NavIntent::First,
        "End" => NavIntent::Last,
        _ => return KeyOutcome::IGNORED,
    };
    KeyOutcome {
        command: Some(KeyCommand::Navigate(intent)),
        prevent_default: true,
    }
}
