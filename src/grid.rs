/// Bounded Conway's GoL field. Cells outside the field are permanently dead.
#[derive(Clone, Debug)]
pub struct Grid {
    cells_curr: Vec<bool>,
    cells_next: Vec<bool>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Create a field of `width x height` dead cells.
    ///
    /// `width >= 1 && height >= 1`
    pub fn blank(width: usize, height: usize) -> Self {
        assert!(width >= 1 && height >= 1);
        let size = width * height;
        Self {
            cells_curr: vec![false; size],
            cells_next: vec![false; size],
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the signed coordinate lies inside the field.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        debug_assert!(x < self.width && y < self.height);
        self.cells_curr[x + y * self.width]
    }

    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        debug_assert!(x < self.width && y < self.height);
        self.cells_curr[x + y * self.width] = alive;
    }

    /// Row-major view of the current generation.
    pub fn cells(&self) -> &[bool] {
        &self.cells_curr
    }

    /// Coordinates of all live cells, row by row.
    pub fn iter_alive(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let w = self.width;
        self.cells_curr
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(i, _)| (i % w, i / w))
    }

    pub fn population(&self) -> usize {
        self.cells_curr.iter().filter(|&&alive| alive).count()
    }

    pub fn clear(&mut self) {
        self.cells_curr.fill(false);
    }

    /// Fill the field with random cells.
    ///
    /// `fill_rate` - probability of a cell being alive, clamped to `[0, 1]`
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn randomize(&mut self, seed: Option<u64>, fill_rate: f64) {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let fill_rate = if fill_rate.is_nan() {
            0.
        } else {
            fill_rate.clamp(0., 1.)
        };
        for cell in self.cells_curr.iter_mut() {
            *cell = rng.gen_bool(fill_rate);
        }
    }

    fn count_neibs(&self, x: usize, y: usize) -> usize {
        let x1 = x.saturating_sub(1);
        let x2 = (x + 1).min(self.width - 1);
        let y1 = y.saturating_sub(1);
        let y2 = (y + 1).min(self.height - 1);
        let mut neibs = 0;
        for ny in y1..=y2 {
            let row = &self.cells_curr[ny * self.width..(ny + 1) * self.width];
            neibs += row[x1..=x2].iter().filter(|&&alive| alive).count();
        }
        // the cell itself was counted in its own 3x3 window
        neibs - self.cells_curr[x + y * self.width] as usize
    }

    /// Compute the next generation from a snapshot of the current one.
    pub fn advance(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let neibs = self.count_neibs(x, y);
                let idx = x + y * self.width;
                self.cells_next[idx] = if self.cells_curr[idx] {
                    neibs == 2 || neibs == 3
                } else {
                    neibs == 3
                };
            }
        }
        std::mem::swap(&mut self.cells_next, &mut self.cells_curr);
    }
}

// `cells_next` is scratch space and does not take part in comparison.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.cells_curr == other.cells_curr
    }
}

impl Eq for Grid {}
