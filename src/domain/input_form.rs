/// Events an input form reports to its owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputFormEvent {
    Change(String),
    Confirm,
    Cancel,
}

/// A key press as seen by the focused text box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyChord<'a> {
    pub key: &'a str,
    pub meta: bool,
    pub ctrl: bool,
}

impl<'a> KeyChord<'a> {
    pub fn new(key: &'a str) -> Self {
        Self {
            key,
            ..Default::default()
        }
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    /// Cmd+Enter or Ctrl+Enter
    pub fn is_confirm(&self) -> bool {
        (self.meta || self.ctrl) && self.key == "Enter"
    }
}

/// Multi-line note input with Add and Cancel controls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputForm {
    value: Option<String>,
}

impl InputForm {
    pub const PLACEHOLDER: &'static str = "Enter a note";
    pub const ADD_LABEL: &'static str = "Add";
    pub const CANCEL_LABEL: &'static str = "Cancel";

    pub fn new(value: Option<String>) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }

    /// Add is disabled while the value is blank
    pub fn disabled(&self) -> bool {
        self.value().trim().is_empty()
    }

    pub fn change(&mut self, value: impl Into<String>) -> InputFormEvent {
        let value = value.into();
        self.value = Some(value.clone());
        InputFormEvent::Change(value)
    }

    fn confirm(&self) -> Option<InputFormEvent> {
        if self.disabled() {
            return None;
        }
        Some(InputFormEvent::Confirm)
    }

    pub fn click_add(&self) -> Option<InputFormEvent> {
        self.confirm()
    }

    pub fn key_down(&self, chord: KeyChord<'_>) -> Option<InputFormEvent> {
        if chord.is_confirm() {
            tracing::trace!(value = self.value(), "confirm chord");
            return self.confirm();
        }
        None
    }

    pub fn cancel(&self) -> InputFormEvent {
        InputFormEvent::Cancel
    }
}

/// A text box whose height can be measured and pinned
pub trait AutoFit {
    /// Resets the height to the intrinsic size so scroll height is accurate
    fn reset_height(&mut self);

    /// Full content height including overflow, excluding borders
    fn scroll_height(&self) -> f32;

    /// Top and bottom border widths
    fn border_widths(&self) -> (f32, f32);

    fn set_height(&mut self, height: f32);
}

/// Pins the element's height to exactly fit its content.
///
/// Returns the height that was applied.
pub fn fit_to_content(el: &mut impl AutoFit) -> f32 {
    let (top, bottom) = el.border_widths();
    el.reset_height();
    let height = top + el.scroll_height() + bottom;
    el.set_height(height);
    height
}
