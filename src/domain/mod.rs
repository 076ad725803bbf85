pub mod board;
pub mod card;
pub mod column;
pub mod filter;
pub mod input_form;

pub use board::{Board, BoardConfig};
pub use card::{linkify, Card, CardId, CardView, Segment};
pub use column::{
    slot_gates, CardItem, Column, ColumnMessage, ColumnOutput, ColumnState, ColumnView,
    DragEvent, DragResponse, SlotGate,
};
pub use filter::Filter;
pub use input_form::{fit_to_content, AutoFit, InputForm, InputFormEvent, KeyChord};
