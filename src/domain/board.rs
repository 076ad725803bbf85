use crate::{
    domain::column::Column,
    error::{KanbanError, Result},
    interaction::auto_leave::AutoLeave,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Interaction timings and sizes shared by every column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Quiet period after the last drag-over before a drop area is left
    pub auto_leave_ms: u64,
    /// Height of a visible drop indicator
    pub drop_zone_height: u32,
    /// Opacity of a card while it is dragged
    pub drag_opacity: f32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            auto_leave_ms: AutoLeave::<()>::DEFAULT_WINDOW.as_millis() as u64,
            drop_zone_height: crate::interaction::DropArea::DEFAULT_ZONE_HEIGHT,
            drag_opacity: crate::domain::CardView::DEFAULT_DRAG_OPACITY,
        }
    }
}

impl BoardConfig {
    pub fn auto_leave_window(&self) -> Duration {
        Duration::from_millis(self.auto_leave_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.auto_leave_ms == 0 {
            return Err(KanbanError::ConfigError(
                "auto_leave_ms must be greater than zero".to_string(),
            ));
        }
        if !(self.drag_opacity > 0.0 && self.drag_opacity <= 1.0) {
            return Err(KanbanError::ConfigError(format!(
                "drag_opacity must be in (0, 1], got {}",
                self.drag_opacity
            )));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

/// A set of columns sharing one search box
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    pub config: BoardConfig,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_value: Option<String>,
}

impl Board {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            columns: Vec::new(),
            filter_value: None,
        }
    }

    /// Decodes a board snapshot supplied by the card store
    pub fn from_json(json: &str) -> Result<Self> {
        let mut board: Self = serde_json::from_str(json)?;
        board.config.validate()?;
        for column in &board.columns {
            column.validate()?;
        }
        let filter = board.filter_value.clone();
        board.set_filter(filter);
        Ok(board)
    }

    pub fn add_column(&mut self, mut column: Column) -> usize {
        column.set_filter(self.filter_value.clone());
        self.columns.push(column);
        self.columns.len() - 1
    }

    /// Applies the search box value to every column
    pub fn set_filter(&mut self, value: Option<String>) {
        for column in &mut self.columns {
            column.set_filter(value.clone());
        }
        self.filter_value = value;
    }

    pub fn column(&self, index: usize) -> Result<&Column> {
        self.columns
            .get(index)
            .ok_or(KanbanError::ColumnNotFound(index))
    }

    pub fn column_mut(&mut self, index: usize) -> Result<&mut Column> {
        self.columns
            .get_mut(index)
            .ok_or(KanbanError::ColumnNotFound(index))
    }
}
