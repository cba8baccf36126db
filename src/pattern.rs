/// Small editable stamp that gets placed onto the [`Grid`](crate::Grid).
///
/// The buffer is always a dense `width x height` rectangle with `width, height >= 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternBuffer {
    cells: Vec<bool>,
    width: usize,
    height: usize,
}

impl Default for PatternBuffer {
    fn default() -> Self {
        Self::glider()
    }
}

impl PatternBuffer {
    /// Create a dead buffer; dimensions below 1 are clamped to 1.
    pub fn blank(width: usize, height: usize) -> Self {
        let (width, height) = (width.max(1), height.max(1));
        Self {
            cells: vec![false; width * height],
            width,
            height,
        }
    }

    /// The default seed pattern:
    /// ```text
    /// .O.
    /// ..O
    /// OOO
    /// ```
    pub fn glider() -> Self {
        let mut pattern = Self::blank(3, 3);
        for (x, y) in [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)] {
            pattern.set(x, y, true);
        }
        pattern
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major cells.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        debug_assert!(x < self.width && y < self.height);
        self.cells[x + y * self.width]
    }

    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        debug_assert!(x < self.width && y < self.height);
        self.cells[x + y * self.width] = alive;
    }

    pub fn toggle(&mut self, x: usize, y: usize) {
        let alive = self.get(x, y);
        self.set(x, y, !alive);
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Kills every cell, keeping the dimensions.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Reallocates the buffer as `new_width x new_height` (each clamped to at least 1).
    ///
    /// With `preserve_content` the overlapping top-left rectangle is copied over,
    /// everything else starts dead.
    pub fn resize(&mut self, new_width: usize, new_height: usize, preserve_content: bool) {
        let mut resized = Self::blank(new_width, new_height);
        if preserve_content {
            let w = self.width.min(resized.width);
            let h = self.height.min(resized.height);
            for y in 0..h {
                let src = &self.cells[y * self.width..y * self.width + w];
                resized.cells[y * resized.width..y * resized.width + w].copy_from_slice(src);
            }
        }
        *self = resized;
    }

    /// Replaces the content with a `width x height` pattern described by `is_alive`.
    pub fn load(&mut self, width: usize, height: usize, is_alive: impl Fn(usize, usize) -> bool) {
        self.resize(width, height, false);
        for y in 0..self.height {
            for x in 0..self.width {
                self.cells[x + y * self.width] = is_alive(x, y);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PatternBuffer;

    fn alive_cells(pattern: &PatternBuffer) -> Vec<(usize, usize)> {
        let mut result = vec![];
        for y in 0..pattern.height() {
            for x in 0..pattern.width() {
                if pattern.get(x, y) {
                    result.push((x, y));
                }
            }
        }
        result
    }

    #[test]
    fn test_default_is_glider() {
        let pattern = PatternBuffer::default();
        assert_eq!((pattern.width(), pattern.height()), (3, 3));
        assert_eq!(
            alive_cells(&pattern),
            vec![(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]
        );
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut pattern = PatternBuffer::glider();
        pattern.toggle(0, 0);
        assert!(pattern.get(0, 0));
        pattern.toggle(0, 0);
        assert_eq!(pattern, PatternBuffer::glider());
    }

    #[test]
    fn test_resize_grow_preserves() {
        let mut pattern = PatternBuffer::blank(3, 3);
        pattern.set(1, 1, true);
        pattern.resize(5, 5, true);
        assert_eq!((pattern.width(), pattern.height()), (5, 5));
        assert_eq!(alive_cells(&pattern), vec![(1, 1)]);
    }

    #[test]
    fn test_resize_shrink_preserves_overlap() {
        let mut pattern = PatternBuffer::blank(3, 3);
        pattern.set(1, 1, true);
        pattern.resize(2, 2, true);
        assert_eq!(alive_cells(&pattern), vec![(1, 1)]);

        let mut pattern = PatternBuffer::glider();
        pattern.resize(2, 3, true);
        assert_eq!(alive_cells(&pattern), vec![(1, 0), (0, 2), (1, 2)]);
    }

    #[test]
    fn test_resize_without_preserve_clears() {
        let mut pattern = PatternBuffer::glider();
        pattern.resize(4, 2, false);
        assert_eq!((pattern.width(), pattern.height()), (4, 2));
        assert_eq!(pattern.population(), 0);
    }

    #[test]
    fn test_resize_clamps_to_one() {
        let mut pattern = PatternBuffer::glider();
        pattern.resize(0, 0, true);
        assert_eq!((pattern.width(), pattern.height()), (1, 1));
        assert!(!pattern.get(0, 0));
    }

    #[test]
    fn test_clear_keeps_dimensions() {
        let mut pattern = PatternBuffer::glider();
        pattern.resize(4, 6, true);
        pattern.clear();
        assert_eq!((pattern.width(), pattern.height()), (4, 6));
        assert_eq!(pattern.population(), 0);
    }

    #[test]
    fn test_load() {
        let mut pattern = PatternBuffer::glider();
        pattern.load(4, 1, |x, _| x % 2 == 0);
        assert_eq!(alive_cells(&pattern), vec![(0, 0), (2, 0)]);
    }
}
