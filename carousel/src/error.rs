/// Errors returned when building a carousel from invalid options.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum CarouselError {
    #[error("item width must be finite and greater than zero, got {0}")]
    InvalidItemWidth(f32),
}

pub(crate) fn validate_item_width(item_width: f32) -> Result<f32, CarouselError> {
    if item_width.is_finite() && item_width > 0.0 {
        Ok(item_width)
    } else {
        Err(CarouselError::InvalidItemWidth(item_width))
    }
}
