use serde::{Deserialize, Serialize};

/// Data element under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HoverTarget {
    /// Line-chart point index.
    Point(usize),
    /// Bar index.
    Bar(usize),
    /// Pie slice index.
    Slice(usize),
}

impl HoverTarget {
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Point(index) | Self::Bar(index) | Self::Slice(index) => index,
        }
    }
}

/// Per-chart hover state machine.
///
/// `Idle` is both the initial state and the state every interaction returns
/// to; transitions only happen through pointer events and dataset swaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering(HoverTarget),
}

impl HoverState {
    #[must_use]
    pub const fn target(self) -> Option<HoverTarget> {
        match self {
            Self::Idle => None,
            Self::Hovering(target) => Some(target),
        }
    }

    #[must_use]
    pub const fn is_hovering(self) -> bool {
        matches!(self, Self::Hovering(_))
    }

    /// Applies one hit-test result. Returns `true` when the state changed.
    pub fn on_pointer_move(&mut self, hit: Option<HoverTarget>) -> bool {
        let next = match hit {
            Some(target) => Self::Hovering(target),
            None => Self::Idle,
        };
        self.transition(next)
    }

    /// Returns `true` when a hover was cleared.
    pub fn on_pointer_leave(&mut self) -> bool {
        self.transition(Self::Idle)
    }

    /// Drops any hover target, e.g. because the dataset it pointed into was
    /// replaced. Returns `true` when a hover was cleared.
    pub fn invalidate(&mut self) -> bool {
        self.transition(Self::Idle)
    }

    fn transition(&mut self, next: Self) -> bool {
        if *self == next {
            return false;
        }
        *self = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{HoverState, HoverTarget};

    #[test]
    fn state_machine_cycles_through_idle() {
        let mut state = HoverState::default();
        assert_eq!(state, HoverState::Idle);

        assert!(state.on_pointer_move(Some(HoverTarget::Point(1))));
        assert_eq!(state.target(), Some(HoverTarget::Point(1)));

        assert!(!state.on_pointer_move(Some(HoverTarget::Point(1))));
        assert!(state.on_pointer_move(Some(HoverTarget::Point(2))));

        assert!(state.on_pointer_move(None));
        assert!(!state.is_hovering());

        assert!(state.on_pointer_move(Some(HoverTarget::Slice(0))));
        assert!(state.on_pointer_leave());
        assert!(!state.on_pointer_leave());
    }

    #[test]
    fn target_index_is_shared_across_kinds() {
        assert_eq!(HoverTarget::Point(3).index(), 3);
        assert_eq!(HoverTarget::Bar(4).index(), 4);
        assert_eq!(HoverTarget::Slice(5).index(), 5);
    }
}
