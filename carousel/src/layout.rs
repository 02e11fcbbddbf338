/// Position and size of one item along the paging axis.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemLayout {
    pub length: f32,
    /// Leading edge in the scroll axis. Shifted one item back, so index 0 starts at `-length`.
    pub offset: f32,
    pub index: usize,
}

impl ItemLayout {
    pub fn end(&self) -> f32 {
        self.offset + self.length
    }
}

/// Layout hint for a fixed-width item.
///
/// The offset is `item_width * (index - 1)`: the paging widget counts the first page as item 1,
/// and scroll-to-index relies on this shift to land on the right page.
pub fn item_layout(item_width: f32, index: usize) -> ItemLayout {
    ItemLayout {
        length: item_width,
        offset: item_width * (index as f32 - 1.0),
        index,
    }
}

/// Fixed-size layout calculator handed to the paging widget so it never has to measure items.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemLayoutCalculator {
    item_width: f32,
}

impl ItemLayoutCalculator {
    pub fn new(item_width: f32) -> Self {
        debug_assert!(item_width > 0.0, "item_width must be positive");
        Self { item_width }
    }

    pub fn item_width(&self) -> f32 {
        self.item_width
    }

    pub fn layout(&self, index: usize) -> ItemLayout {
        item_layout(self.item_width, index)
    }

    /// Total scrollable length for `count` items.
    pub fn content_length(&self, count: usize) -> f32 {
        self.item_width * count as f32
    }

    /// Returns the index of the item whose laid-out span contains `offset`.
    ///
    /// Offsets before the first span map to 0 and offsets past the last span map to
    /// `count - 1`. Returns `None` for an empty list.
    pub fn item_at_offset(&self, offset: f32, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        // Inverse of `offset = w * (i - 1)`.
        let pos = offset / self.item_width + 1.0;
        let index = if pos <= 0.0 || pos.is_nan() {
            0
        } else {
            pos as usize
        };
        Some(index.min(count - 1))
    }
}
