// Collapsible text helper
// Open/closed state behind a shipping option's additional description

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle {
    is_open: bool,
}

impl Toggle {
    pub fn new(open_by_default: bool) -> Self {
        Self {
            is_open: open_by_default,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }
}

impl Default for Toggle {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Additional description text for a shipping option, collapsible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdditionalDescription {
    description: String,
    toggle: Toggle,
}

impl AdditionalDescription {
    pub fn new(description: impl Into<String>, open_by_default: bool) -> Self {
        Self {
            description: description.into(),
            toggle: Toggle::new(open_by_default),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_expanded(&self) -> bool {
        self.toggle.is_open()
    }

    pub fn toggle(&mut self) {
        self.toggle.toggle();
    }

    /// Text to show, only while expanded
    pub fn visible_text(&self) -> Option<&str> {
        self.toggle.is_open().then_some(self.description.as_str())
    }
}
