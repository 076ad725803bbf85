pub mod arena;
pub mod auto_leave;
pub mod drop_area;

pub use arena::{DropAreaArena, DropSlot};
pub use auto_leave::{AutoLeave, Expired};
pub use drop_area::{DragOverOutcome, DropArea};
