/// Smallest scale the editor panel is ever drawn with.
pub const MIN_EDITOR_SCALE: usize = 1;

/// Largest scale of the form `base_scale - k * step` at which a
/// `buffer_width x buffer_height` editor fits into `max_width x max_height` pixels.
///
/// The result never drops below [`MIN_EDITOR_SCALE`], so a buffer that is larger than
/// the bounds even at that scale still gets a drawable panel.
pub fn compute_scale(
    buffer_width: usize,
    buffer_height: usize,
    max_width: usize,
    max_height: usize,
    base_scale: usize,
    step: usize,
) -> usize {
    let fits = |scale: usize| {
        buffer_width.saturating_mul(scale) <= max_width
            && buffer_height.saturating_mul(scale) <= max_height
    };

    let mut scale = base_scale.max(MIN_EDITOR_SCALE);
    if step == 0 {
        return scale;
    }
    while !fits(scale) {
        if scale < MIN_EDITOR_SCALE + step {
            return MIN_EDITOR_SCALE;
        }
        scale -= step;
    }
    scale
}
