use super::{draw::EditorGeometry, Config, FpsLimiter};
use crate::{load_pattern_file, Phase, Session};
use eframe::egui::{
    CentralPanel, ColorImage, Context, Frame, Key, Pos2, Rect, Sense, TextureHandle,
    TextureOptions, ViewportCommand,
};
use egui_file::FileDialog;
use std::{path::PathBuf, time::Instant};
use tracing::{info, warn};

pub struct App {
    pub(super) session: Session,          // Field, stamp and tick gate.
    pub(super) texture: TextureHandle,    // Texture handle of the field.
    pub(super) fps_limiter: FpsLimiter,   // Limits the frame rate and measures TPS.
    pub(super) random_seed: Option<u64>,  // Seed for random fills, `None` for entropy.
    pub(super) open_dialog: Option<FileDialog>, // Pattern file picker, while open.
    pub(super) opened_file: Option<PathBuf>, // Last loaded pattern file.
    pub(super) status: Option<String>,    // Last import error shown on screen.
}

impl App {
    pub fn new(ctx: &Context, session: Session, random_seed: Option<u64>) -> Self {
        Self {
            session,
            texture: ctx.load_texture("field", ColorImage::default(), TextureOptions::NEAREST),
            fps_limiter: FpsLimiter::default(),
            random_seed,
            open_dialog: None,
            opened_file: None,
            status: None,
        }
    }

    fn open_pattern_dialog(&mut self) {
        let mut dialog = FileDialog::open_file(self.opened_file.clone());
        dialog.open();
        self.open_dialog = Some(dialog);
    }

    fn update_dialog(&mut self, ctx: &Context) {
        let Some(dialog) = self.open_dialog.as_mut() else {
            return;
        };
        let path = if dialog.show(ctx).selected() {
            dialog.path().map(|path| path.to_path_buf())
        } else {
            None
        };
        if !dialog.visible() {
            self.open_dialog = None;
        }
        if let Some(path) = path {
            self.load_file(path);
        }
    }

    fn load_file(&mut self, path: PathBuf) {
        match load_pattern_file(&path) {
            Ok(pattern) => {
                self.session
                    .load_pattern(pattern.width, pattern.height, |x, y| pattern.is_alive(x, y));
                info!(path = %path.display(), "opened pattern file");
                self.status = None;
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "failed to open pattern file");
                self.status = Some(err.to_string());
            }
        }
        self.opened_file = Some(path);
    }

    fn handle_keys(&mut self, ctx: &Context) {
        let pressed = ctx.input(|input| {
            [
                Key::Q,
                Key::Space,
                Key::Backspace,
                Key::Delete,
                Key::Tab,
                Key::Equals,
                Key::Minus,
                Key::ArrowUp,
                Key::ArrowDown,
                Key::ArrowLeft,
                Key::ArrowRight,
                Key::F,
                Key::R,
                Key::O,
            ]
            .into_iter()
            .filter(|&key| input.key_pressed(key))
            .collect::<Vec<_>>()
        });

        for key in pressed {
            if self.session.phase() == Phase::Welcome {
                match key {
                    Key::Space => self.session.confirm(),
                    Key::Q => self.session.quit(),
                    _ => {}
                }
                continue;
            }
            match key {
                Key::Q => self.session.quit(),
                Key::Space => self.session.toggle_pause(),
                Key::Backspace => self.session.clear_grid(),
                Key::Delete => self.session.clear_pattern(),
                Key::Tab => self.session.toggle_editor(),
                Key::Equals => self.session.speed_up(),
                Key::Minus => self.session.slow_down(),
                // the editor is anchored to the right edge, so it grows leftwards
                Key::ArrowUp => self.session.resize_pattern(0, -1),
                Key::ArrowDown => self.session.resize_pattern(0, 1),
                Key::ArrowLeft => self.session.resize_pattern(1, 0),
                Key::ArrowRight => self.session.resize_pattern(-1, 0),
                Key::F => self.session.toggle_tps(),
                Key::R => self
                    .session
                    .randomize_grid(self.random_seed, Config::RANDOM_FILL_RATE),
                Key::O => self.open_pattern_dialog(),
                _ => {}
            }
        }
    }

    /// Pointer editing: a press on the editor toggles a stamp cell,
    /// holding the button anywhere else stamps at the pointer every frame.
    fn handle_pointer(&mut self, ctx: &Context, field_rect: Rect, pos: Pos2) {
        let (pressed, down) = ctx.input(|input| {
            (
                input.pointer.primary_pressed(),
                input.pointer.primary_down(),
            )
        });

        let editor = EditorGeometry::new(&self.session, field_rect);
        let on_editor = self.session.editor_visible() && editor.rect.contains(pos);
        if on_editor {
            if pressed {
                if let Some((x, y)) = editor.cell_at(pos) {
                    self.session.toggle_cell(x, y);
                }
            }
        } else if down {
            let rel = (pos - field_rect.min) / Config::CELL_SIZE;
            self.session
                .stamp_at_cursor(rel.x.floor() as i64, rel.y.floor() as i64);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        CentralPanel::default()
            .frame(Frame::none().fill(Config::BACKGROUND_COLOR))
            .show(ctx, |ui| {
                ctx.request_repaint();

                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
                let field_rect = response.rect;

                // input first, so this frame's edits feed the generation computed below
                if self.open_dialog.is_none() {
                    self.handle_keys(ctx);
                    if self.session.phase() != Phase::Welcome {
                        if let Some(pos) = response.hover_pos() {
                            self.handle_pointer(ctx, field_rect, pos);
                        }
                    }
                }

                self.session.tick(Instant::now());

                self.draw(&painter, field_rect);
            });

        self.update_dialog(ctx);

        if self.session.is_terminated() {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }

        self.fps_limiter.sleep(Config::MAX_FPS);
    }
}
