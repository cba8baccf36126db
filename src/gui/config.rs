use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const WINDOW_SIZE: [f32; 2] = [1280., 960.];
    pub const MIN_WINDOW_SIZE: [f32; 2] = [640., 480.];

    /// Side of one field cell in points.
    pub const CELL_SIZE: f32 = 2.;
    pub const GRID_WIDTH: usize = 640;
    pub const GRID_HEIGHT: usize = 480;

    pub const EDITOR_BASE_SCALE: usize = 40;
    pub const EDITOR_SCALE_STEP: usize = 10;
    pub const EDITOR_STROKE_WIDTH: f32 = 1.;
    pub const EDITOR_STROKE_COLOR: Color32 = Color32::from_gray(127);
    pub const EDITOR_LABEL_GAP: f32 = 4.;

    pub const BACKGROUND_COLOR: Color32 = Color32::BLACK;
    pub const CELL_COLOR: Color32 = Color32::WHITE;
    pub const TEXT_COLOR: Color32 = Color32::WHITE;
    pub const ERROR_COLOR: Color32 = Color32::LIGHT_RED;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_MARGIN: f32 = 20.;

    /// Pause glyph: two bars, offsets from the bottom-right corner.
    pub const PAUSE_BAR_SIZE: [f32; 2] = [20., 80.];
    pub const PAUSE_BAR_OFFSETS: [[f32; 2]; 2] = [[120., 160.], [80., 160.]];

    pub const TICK_INTERVAL_MS: u64 = 25;
    pub const TICK_INTERVAL_STEP_MS: u64 = 25;
    pub const MAX_FPS: f64 = 60.;
    pub const RANDOM_FILL_RATE: f64 = 0.3;

    pub const WELCOME_TEXT: &'static str = "Welcome to the Game of Life!\n\n\
        Press <space> to start (and pause)\n\
        Click (and drag) to add the pattern to the screen\n\
        Press <backspace> to clear the screen\n\
        Press <delete> to clear the pattern\n\
        Press <tab> to show/hide the pattern editor\n\
        Press <up>/<down>/<left>/<right> to change the pattern size\n\
        Press <=>/<-> to change the speed\n\
        Press <o> to open a pattern file (.rle, .cells, .json)\n\
        Press <r> to fill the screen randomly\n\
        Press <f> to toggle the TPS (ticks per second) display\n\
        Press <q> to quit\n";
}
