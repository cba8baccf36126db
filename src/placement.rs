use crate::{Grid, PatternBuffer};

/// Writes `pattern` onto `grid` so that its bottom-right corner touches the anchor
/// cell from the top-left: pattern cell `(j, i)` lands on
/// `(anchor_x + j - width, anchor_y + i - height)`.
///
/// Target cells are overwritten, dead cells included. Writes outside the field are dropped.
pub fn stamp(grid: &mut Grid, pattern: &PatternBuffer, anchor_x: i64, anchor_y: i64) {
    let (w, h) = (pattern.width() as i64, pattern.height() as i64);
    for i in 0..h {
        for j in 0..w {
            let (x, y) = (anchor_x + j - w, anchor_y + i - h);
            if grid.contains(x, y) {
                grid.set(x as usize, y as usize, pattern.get(j as usize, i as usize));
            }
        }
    }
}
