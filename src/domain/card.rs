use crate::domain::column::ColumnMessage;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+").expect("valid url regex"));

/// Stable identity of a card within the board
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Wraps an identifier handed in by the card store
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Creates a fresh random identifier for a newly added note
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CardId {
    type Err = crate::error::KanbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(crate::error::KanbanError::InvalidCardId(s.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A single note on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Card {
    pub fn new(id: impl Into<CardId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: Some(text.into()),
        }
    }

    /// A card whose text was never set
    pub fn untitled(id: impl Into<CardId>) -> Self {
        Self {
            id: id.into(),
            text: None,
        }
    }

    /// Splits the card text into alternating plain-text and URL segments
    pub fn segments(&self) -> Vec<Segment<'_>> {
        self.text.as_deref().map(linkify).unwrap_or_default()
    }
}

/// One piece of rendered card text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Link(&'a str),
}

impl<'a> Segment<'a> {
    /// Links open in a new browsing context
    pub const LINK_TARGET: &'static str = "_blank";
    /// Links never leak the referrer or the opener
    pub const LINK_REL: &'static str = "noopener noreferrer";

    pub fn as_str(&self) -> &'a str {
        match self {
            Self::Text(s) | Self::Link(s) => *s,
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, Self::Link(_))
    }
}

/// Splits `text` around every `http://` or `https://` run of non-whitespace.
///
/// The result always alternates text and link, starting and ending with a
/// text segment (possibly empty), so even indices are text and odd indices
/// are links. Concatenating the segments gives back `text`.
///
/// # Examples
/// ```
/// use kanban_core::domain::card::{linkify, Segment};
///
/// let parts = linkify("see https://example.com now");
/// assert_eq!(
///     parts,
///     vec![
///         Segment::Text("see "),
///         Segment::Link("https://example.com"),
///         Segment::Text(" now"),
///     ]
/// );
/// ```
pub fn linkify(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;

    for m in URL_RE.find_iter(text) {
        segments.push(Segment::Text(&text[last..m.start()]));
        segments.push(Segment::Link(m.as_str()));
        last = m.end();
    }
    segments.push(Segment::Text(&text[last..]));

    segments
}

/// Per-card transient drag state, owned by the column's card arena
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: CardId,
    dragging: bool,
}

impl CardView {
    pub const DEFAULT_DRAG_OPACITY: f32 = 0.5;

    pub fn new(id: CardId) -> Self {
        Self {
            id,
            dragging: false,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Marks this card as dragged and produces the message for its column
    pub fn on_drag_start(&mut self) -> ColumnMessage {
        tracing::trace!(card = %self.id, "card drag start");
        self.dragging = true;
        ColumnMessage::DragStarted(self.id.clone())
    }

    /// Clears the drag flag and produces the message for its column
    pub fn on_drag_end(&mut self) -> ColumnMessage {
        tracing::trace!(card = %self.id, "card drag end");
        self.dragging = false;
        ColumnMessage::DragEnded
    }

    /// Opacity override while dragging, `None` means the default
    pub fn opacity(&self, drag_opacity: f32) -> Option<f32> {
        self.dragging.then_some(drag_opacity)
    }
}
