use crate::{compute_scale, stamp, Grid, PatternBuffer, Phase, SimulationState};
use std::time::Instant;
use tracing::{debug, info};

/// Parameters of a [`Session`].
#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub grid_width: usize,
    pub grid_height: usize,
    pub tick_interval_ms: u64,
    /// Amount by which speed-up and slow-down commands shift the tick interval.
    pub tick_interval_step_ms: u64,
    pub editor_base_scale: usize,
    pub editor_scale_step: usize,
    /// Pixel bounds the stamp editor panel has to fit into.
    pub editor_max_width: usize,
    pub editor_max_height: usize,
    pub show_welcome: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            grid_width: 640,
            grid_height: 480,
            tick_interval_ms: 25,
            tick_interval_step_ms: 25,
            editor_base_scale: 20,
            editor_scale_step: 5,
            editor_max_width: 640,
            editor_max_height: 480,
            show_welcome: true,
        }
    }
}

/// Everything an interactive run owns: the field, the stamp, and the tick gate.
///
/// Input handlers call the editing methods first and [`Session::tick`] last within
/// one driver frame, so an edit is visible to the very next generation.
pub struct Session {
    config: SessionConfig,
    grid: Grid,
    pattern: PatternBuffer,
    state: SimulationState,
    editor_scale: usize,
    generation: u64,
    editor_visible: bool,
    show_tps: bool,
}

impl Session {
    pub fn new(config: SessionConfig, now: Instant) -> Self {
        let mut session = Self {
            grid: Grid::blank(config.grid_width, config.grid_height),
            pattern: PatternBuffer::glider(),
            state: SimulationState::new(config.show_welcome, config.tick_interval_ms, now),
            editor_scale: config.editor_base_scale,
            generation: 0,
            editor_visible: true,
            show_tps: false,
            config,
        };
        session.refit_editor();
        session
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn pattern(&self) -> &PatternBuffer {
        &self.pattern
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn is_terminated(&self) -> bool {
        self.phase() == Phase::Terminated
    }

    /// Pixels per stamp cell in the editor panel.
    pub fn editor_scale(&self) -> usize {
        self.editor_scale
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn editor_visible(&self) -> bool {
        self.editor_visible
    }

    pub fn show_tps(&self) -> bool {
        self.show_tps
    }

    fn refit_editor(&mut self) {
        self.editor_scale = compute_scale(
            self.pattern.width(),
            self.pattern.height(),
            self.config.editor_max_width,
            self.config.editor_max_height,
            self.config.editor_base_scale,
            self.config.editor_scale_step,
        );
    }

    /// Flips one stamp cell. The coordinate must lie inside the stamp.
    pub fn toggle_cell(&mut self, x: usize, y: usize) {
        self.pattern.toggle(x, y);
    }

    /// Grows or shrinks the stamp by `(dw, dh)`, keeping what was drawn.
    pub fn resize_pattern(&mut self, dw: i64, dh: i64) {
        let width = (self.pattern.width() as i64).saturating_add(dw).max(1) as usize;
        let height = (self.pattern.height() as i64).saturating_add(dh).max(1) as usize;
        self.pattern.resize(width, height, true);
        self.refit_editor();
        debug!(width, height, scale = self.editor_scale, "resized pattern");
    }

    pub fn clear_pattern(&mut self) {
        self.pattern.clear();
    }

    pub fn clear_grid(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    /// Stamps the pattern with its bottom-right corner at the anchor cell.
    ///
    /// Repeating the call at the same anchor changes nothing, so it may run every frame
    /// while the pointer is held.
    pub fn stamp_at_cursor(&mut self, x: i64, y: i64) {
        stamp(&mut self.grid, &self.pattern, x, y);
    }

    /// Ingests a rectangular picture as the new stamp.
    pub fn load_pattern(
        &mut self,
        width: usize,
        height: usize,
        is_alive: impl Fn(usize, usize) -> bool,
    ) {
        self.pattern.load(width, height, is_alive);
        self.refit_editor();
        info!(
            width = self.pattern.width(),
            height = self.pattern.height(),
            population = self.pattern.population(),
            "loaded pattern"
        );
    }

    /// Fills the field with random cells, see [`Grid::randomize`].
    pub fn randomize_grid(&mut self, seed: Option<u64>, fill_rate: f64) {
        self.grid.randomize(seed, fill_rate);
        self.generation = 0;
    }

    pub fn confirm(&mut self) {
        self.state.confirm();
    }

    pub fn toggle_pause(&mut self) {
        self.state.toggle_running();
        debug!(phase = ?self.state.phase(), "toggled pause");
    }

    /// Positive `delta_ms` slows the simulation down, negative speeds it up.
    pub fn adjust_tick_interval(&mut self, delta_ms: i64) {
        self.state.set_tick_interval(delta_ms);
        debug!(interval_ms = self.state.tick_interval_ms(), "tick interval");
    }

    /// Shortens the tick interval by one configured step.
    pub fn speed_up(&mut self) {
        self.adjust_tick_interval(-(self.config.tick_interval_step_ms as i64));
    }

    /// Lengthens the tick interval by one configured step.
    pub fn slow_down(&mut self) {
        self.adjust_tick_interval(self.config.tick_interval_step_ms as i64);
    }

    pub fn quit(&mut self) {
        self.state.terminate();
        info!(generation = self.generation, "quit requested");
    }

    pub fn toggle_editor(&mut self) {
        self.editor_visible = !self.editor_visible;
    }

    pub fn toggle_tps(&mut self) {
        self.show_tps = !self.show_tps;
    }

    /// Advances one generation if the gate allows it at `now`.
    ///
    /// Returns whether a generation was computed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.state.should_advance(now) {
            return false;
        }
        self.grid.advance();
        self.generation += 1;
        self.state.mark_advanced(now);
        true
    }
}
