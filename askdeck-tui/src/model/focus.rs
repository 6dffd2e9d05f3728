//! Input focus state

/// Where key events are routed
///
/// Text surfaces swallow shortcut letters: while `Search` or
/// `AnswerDraft` is focused, only `Esc` keeps its global behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The panel stack; shortcuts active
    #[default]
    Panels,
    /// The search box is being edited
    Search,
    /// The answer draft is being edited
    AnswerDraft,
}

impl Focus {
    /// Whether a text input currently owns the keyboard
    pub fn in_text_input(self) -> bool {
        matches!(self, Focus::Search | Focus::AnswerDraft)
    }
}
