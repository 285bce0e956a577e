#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    is_open: bool,
    source: String,
    caption: String,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, source: &str, caption: &str) {
        self.source = source.to_string();
        self.caption = caption.to_string();
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.source.clear();
        self.caption.clear();
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn aria_hidden(&self) -> &'static str {
        if self.is_open {
            "false"
        } else {
            "true"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_sets_fields() {
        let mut modal = ModalState::new();
        modal.open("assets/a.jpg", "A — first");
        assert!(modal.is_open());
        assert_eq!(modal.source(), "assets/a.jpg");
        assert_eq!(modal.caption(), "A — first");
        assert_eq!(modal.aria_hidden(), "false");
    }

    #[test]
    fn close_is_idempotent() {
        let mut modal = ModalState::new();
        for round in 0..5 {
            modal.open(&format!("assets/{round}.jpg"), "caption");
            modal.close();
            modal.close();
            assert_eq!(modal, ModalState::default());
            assert_eq!(modal.aria_hidden(), "true");
        }
    }

    #[test]
    fn reopen_replaces_content() {
        let mut modal = ModalState::new();
        modal.open("a.jpg", "a");
        modal.open("b.jpg", "b");
        assert_eq!(modal.source(), "b.jpg");
        assert_eq!(modal.caption(), "b");
    }
}
