use crate::{
    domain::{board::BoardConfig, card::CardId},
    error::Result,
    interaction::{
        auto_leave::{AutoLeave, Expired},
        drop_area::{DragOverOutcome, DropArea},
    },
};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt};

/// Position of a drop area inside a column
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "card")]
pub enum DropSlot {
    /// Directly above the given card
    Before(CardId),
    /// After the last card
    Trailing,
}

impl fmt::Display for DropSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Before(id) => write!(f, "before:{}", id),
            Self::Trailing => write!(f, "trailing"),
        }
    }
}

/// Owns the hover state of every drop area in a column, keyed by slot, and
/// the auto-leave timers that clear it.
pub struct DropAreaArena {
    areas: HashMap<DropSlot, DropArea>,
    timers: AutoLeave<DropSlot>,
    zone_height: u32,
}

impl DropAreaArena {
    /// Creates an arena on the current tokio runtime
    pub fn new(config: &BoardConfig) -> Result<Self> {
        Ok(Self {
            areas: HashMap::new(),
            timers: AutoLeave::new(config.auto_leave_window())?,
            zone_height: config.drop_zone_height,
        })
    }

    pub fn area(&self, slot: &DropSlot) -> Option<&DropArea> {
        self.areas.get(slot)
    }

    pub fn is_target(&self, slot: &DropSlot) -> bool {
        self.area(slot).is_some_and(DropArea::is_target)
    }

    pub fn visible(&self, slot: &DropSlot, disabled: bool) -> bool {
        self.area(slot).is_some_and(|a| a.visible(disabled))
    }

    pub fn indicator_height(&self, slot: &DropSlot, disabled: bool) -> u32 {
        self.area(slot)
            .map_or(0, |a| a.indicator_height(disabled, self.zone_height))
    }

    fn area_mut(&mut self, slot: &DropSlot) -> &mut DropArea {
        self.areas.entry(slot.clone()).or_default()
    }

    pub fn drag_enter(&mut self, slot: &DropSlot, disabled: bool) {
        self.area_mut(slot).drag_enter(disabled);
    }

    pub fn drag_over(&mut self, slot: &DropSlot, disabled: bool) -> DragOverOutcome {
        let outcome = self.area_mut(slot).drag_over(disabled);
        if let DragOverOutcome::Accept(generation) = outcome {
            tracing::trace!(slot = %slot, generation, "auto-leave armed");
            self.timers.arm(slot.clone(), generation);
        }
        outcome
    }

    /// Returns true when the drop should be handed to the column
    pub fn drop(&mut self, slot: &DropSlot, disabled: bool) -> bool {
        self.area_mut(slot).drop(disabled)
    }

    /// Applies an expired timer, returning true if the slot was left
    pub fn apply_expired(&mut self, expired: Expired<DropSlot>) -> bool {
        let left = self
            .areas
            .get_mut(&expired.key)
            .is_some_and(|area| area.expire(expired.generation));
        if left {
            tracing::debug!(slot = %expired.key, "drop area auto-left");
        }
        left
    }

    /// Waits for the next drag to go quiet and returns the slot it left
    pub async fn next_leave(&mut self) -> Option<DropSlot> {
        loop {
            let expired = self.timers.next().await?;
            let slot = expired.key.clone();
            if self.apply_expired(expired) {
                return Some(slot);
            }
        }
    }

    /// Applies every timer that has already expired
    pub fn poll_leaves(&mut self) -> Vec<DropSlot> {
        let mut left = Vec::new();
        while let Some(expired) = self.timers.try_next() {
            let slot = expired.key.clone();
            if self.apply_expired(expired) {
                left.push(slot);
            }
        }
        left
    }

    /// Drops state for slots that are no longer rendered
    pub fn retain<'a>(&mut self, live: impl IntoIterator<Item = &'a DropSlot>) {
        let live: Vec<&DropSlot> = live.into_iter().collect();
        let stale: Vec<DropSlot> = self
            .areas
            .keys()
            .filter(|slot| !live.contains(slot))
            .cloned()
            .collect();

        for slot in stale {
            self.timers.cancel(&slot);
            self.areas.remove(&slot);
        }
    }

    /// Forgets every drop area, e.g. once the drag session is over
    pub fn clear(&mut self) {
        self.timers.cancel_all();
        self.areas.clear();
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
