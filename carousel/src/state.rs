/// The index register and end-reached flag, updated together.
///
/// The register is signed and never clamped: a report for item 0 yields `-1`, and repeated
/// end-of-list notifications can push it past the last item. Consumers that need a valid
/// index should go through [`IndexState::clamped_index`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexState {
    pub current_index: i64,
    pub end_reached: bool,
}

/// What a transition touched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    pub index_changed: bool,
    pub end_reached_changed: bool,
}

impl Transition {
    pub fn any(&self) -> bool {
        self.index_changed || self.end_reached_changed
    }
}

impl IndexState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The widget reported `index` as the first changed viewable item.
    ///
    /// The current index becomes `index - 1`, matching the shifted item layout. The end flag is
    /// cleared only when `index` is inside the list.
    pub fn on_viewability_changed(&mut self, index: usize, len: usize) -> Transition {
        let prev = *self;
        self.current_index = index as i64 - 1;
        if index < len {
            self.end_reached = false;
        }
        self.diff(prev)
    }

    /// The widget scrolled past half of the final page.
    pub fn on_end_reached(&mut self) -> Transition {
        let prev = *self;
        self.current_index = self.current_index.saturating_add(1);
        self.end_reached = true;
        self.diff(prev)
    }

    pub fn is_in_range(&self, len: usize) -> bool {
        self.current_index >= 0 && (self.current_index as u64) < len as u64
    }

    /// The register clamped to `[0, len - 1]`, or 0 for an empty list.
    pub fn clamped_index(&self, len: usize) -> usize {
        if len == 0 || self.current_index < 0 {
            return 0;
        }
        (self.current_index as u64).min(len as u64 - 1) as usize
    }

    fn diff(&self, prev: Self) -> Transition {
        Transition {
            index_changed: self.current_index != prev.current_index,
            end_reached_changed: self.end_reached != prev.end_reached,
        }
    }
}
