use alloc::vec::Vec;

use carousel::{DotVisual, ItemLayout, PaginationType};

/// What the adapter should draw for the current state.
#[derive(Clone, Debug, PartialEq)]
pub enum Frame<'a, P> {
    /// The list is empty: draw the placeholder in a single item-wide container.
    Placeholder {
        item_width: f32,
        content: Option<&'a P>,
    },
    Items {
        layouts: Vec<ItemLayout>,
        current_index: i64,
        pagination: Option<PaginationFrame<'a>>,
    },
}

impl<P> Frame<'_, P> {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }

    pub fn pagination(&self) -> Option<&PaginationFrame<'_>> {
        match self {
            Self::Items { pagination, .. } => pagination.as_ref(),
            Self::Placeholder { .. } => None,
        }
    }
}

/// Page indicator render data for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct PaginationFrame<'a> {
    pub kind: PaginationType,
    pub color: &'a str,
    pub dots: Vec<DotVisual>,
}
