//! # Kanban Core
//!
//! Headless interaction logic for a drag-and-drop kanban board.
//!
//! This crate owns the state a board UI needs between events (which card is
//! being dragged, which drop areas are hovered, what the search box filters,
//! what the add-note form holds) and turns it into render models. Painting,
//! persistence and the actual card reordering are left to the host.

pub mod domain;
pub mod error;
pub mod interaction;

// Re-export commonly used types
pub use domain::{
    board::{Board, BoardConfig},
    card::{Card, CardId, Segment},
    column::{Column, ColumnMessage, ColumnOutput, ColumnView, DragEvent},
    filter::Filter,
    input_form::{InputForm, KeyChord},
};
pub use error::{KanbanError, Result};
pub use interaction::{DropAreaArena, DropSlot};
