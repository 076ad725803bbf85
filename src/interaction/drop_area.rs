/// Result of a drag-over event on a drop area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOverOutcome {
    /// The area is disabled; the host must let the default action happen
    Ignored,
    /// The area accepts the drag; an auto-leave timer for this arm must be
    /// scheduled and the host must suppress the default action
    Accept(u64),
}

/// Hover state of one drop area.
///
/// Browsers fire enter and leave for every nested child, so there is no
/// reliable "left the whole area" signal. Instead every drag-over re-arms an
/// auto-leave timer; when the timer fires without a newer arm, the area is
/// considered left. `generation` identifies the latest arm so an older timer
/// that fires late has no effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropArea {
    is_target: bool,
    drag_over: bool,
    generation: u64,
}

impl DropArea {
    pub const DEFAULT_ZONE_HEIGHT: u32 = 40;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_target(&self) -> bool {
        self.is_target
    }

    pub fn is_drag_over(&self) -> bool {
        self.drag_over
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn drag_enter(&mut self, disabled: bool) {
        if disabled || self.drag_over {
            return;
        }
        self.is_target = true;
    }

    pub fn drag_over(&mut self, disabled: bool) -> DragOverOutcome {
        if disabled {
            return DragOverOutcome::Ignored;
        }
        self.drag_over = true;
        self.generation = self.generation.wrapping_add(1);
        DragOverOutcome::Accept(self.generation)
    }

    /// Returns true when the drop handler should run
    pub fn drop(&mut self, disabled: bool) -> bool {
        if disabled {
            return false;
        }
        self.is_target = false;
        true
    }

    /// Applies an expired auto-leave timer. Returns true if it was current.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.drag_over {
            return false;
        }
        self.drag_over = false;
        self.is_target = false;
        true
    }

    pub fn visible(&self, disabled: bool) -> bool {
        !disabled && self.is_target
    }

    /// Indicator height: collapsed unless visible
    pub fn indicator_height(&self, disabled: bool, zone_height: u32) -> u32 {
        if self.visible(disabled) {
            zone_height
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_marks_target() {
        let mut area = DropArea::new();
        area.drag_enter(false);
        assert!(area.is_target());
        assert!(area.visible(false));
        assert_eq!(area.indicator_height(false, 40), 40);
        assert_eq!(area.indicator_height(true, 40), 0);
    }

    #[test]
    fn test_disabled_area_ignores_everything() {
        let mut area = DropArea::new();
        area.drag_enter(true);
        assert_eq!(area.drag_over(true), DragOverOutcome::Ignored);
        assert!(!area.drop(true));
        assert_eq!(area, DropArea::new());
    }

    #[test]
    fn test_enter_suppressed_while_drag_over() {
        let mut area = DropArea::new();
        area.drag_enter(false);
        let DragOverOutcome::Accept(generation) = area.drag_over(false) else {
            panic!("expected accept");
        };
        assert!(area.expire(generation));
        assert!(!area.is_target());

        // Drag still hovering over a child: enter is redundant
        area.drag_over(false);
        area.drag_enter(false);
        assert!(!area.is_target());
    }

    #[test]
    fn test_stale_expiry_is_ignored() {
        let mut area = DropArea::new();
        area.drag_enter(false);
        let first = area.drag_over(false);
        let second = area.drag_over(false);
        assert_ne!(first, second);

        if let DragOverOutcome::Accept(old) = first {
            assert!(!area.expire(old));
        }
        assert!(area.is_target());
        assert!(area.is_drag_over());

        if let DragOverOutcome::Accept(current) = second {
            assert!(area.expire(current));
            assert!(!area.expire(current));
        }
        assert!(!area.is_target());
    }

    #[test]
    fn test_drop_clears_target() {
        let mut area = DropArea::new();
        area.drag_enter(false);
        assert!(area.drop(false));
        assert!(!area.is_target());
    }
}
