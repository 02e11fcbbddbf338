use alloc::vec::Vec;

/// A single viewability change reported by the paging widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewToken {
    pub index: usize,
    pub is_viewable: bool,
}

impl ViewToken {
    pub fn viewable(index: usize) -> Self {
        Self {
            index,
            is_viewable: true,
        }
    }

    pub fn hidden(index: usize) -> Self {
        Self {
            index,
            is_viewable: false,
        }
    }
}

/// A discrete viewability notification.
///
/// `changed` keeps the order in which the widget reported the entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewabilityEvent {
    pub changed: Vec<ViewToken>,
}

impl ViewabilityEvent {
    /// The entry that drives the index state machine.
    pub fn first(&self) -> Option<ViewToken> {
        self.changed.first().copied()
    }
}

/// A programmatic "scroll to index" request for the paging widget.
///
/// Fire-and-forget: completion is observed through later viewability events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollCommand {
    pub index: usize,
    pub animated: bool,
}

impl ScrollCommand {
    pub fn animated(index: usize) -> Self {
        Self {
            index,
            animated: true,
        }
    }
}

/// Visual variant of the page indicator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaginationType {
    /// Bar-style dots that stretch when active.
    #[default]
    Default,
    /// Fixed-size round dots that only fade.
    Circle,
}
