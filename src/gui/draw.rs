use super::{App, Config};
use crate::{Phase, Session};
use eframe::egui::{
    pos2, vec2, Align2, ColorImage, FontId, Painter, Pos2, Rect, Stroke, TextureOptions,
};

/// Placement of the stamp editor panel: glued to the top-right corner of the field.
pub(super) struct EditorGeometry {
    pub rect: Rect,
    scale: f32,
    width: usize,
    height: usize,
}

impl EditorGeometry {
    pub fn new(session: &Session, field_rect: Rect) -> Self {
        let pattern = session.pattern();
        let scale = session.editor_scale() as f32;
        let size = vec2(pattern.width() as f32, pattern.height() as f32) * scale;
        Self {
            rect: Rect::from_min_size(pos2(field_rect.right() - size.x, field_rect.top()), size),
            scale,
            width: pattern.width(),
            height: pattern.height(),
        }
    }

    pub fn cell_rect(&self, x: usize, y: usize) -> Rect {
        let min = self.rect.min + vec2(x as f32, y as f32) * self.scale;
        Rect::from_min_size(min, vec2(self.scale, self.scale))
    }

    /// Stamp cell under `pos`, if any.
    pub fn cell_at(&self, pos: Pos2) -> Option<(usize, usize)> {
        if !self.rect.contains(pos) {
            return None;
        }
        let rel = (pos - self.rect.min) / self.scale;
        let (x, y) = (rel.x.floor() as usize, rel.y.floor() as usize);
        // the far edges are inclusive in `Rect::contains`
        (x < self.width && y < self.height).then_some((x, y))
    }
}

impl App {
    fn text_font() -> FontId {
        FontId::proportional(Config::TEXT_SIZE)
    }

    fn draw_field(&mut self, painter: &Painter, field_rect: Rect) {
        let grid = self.session.grid();
        let gray = grid
            .cells()
            .iter()
            .map(|&alive| if alive { u8::MAX } else { 0 })
            .collect::<Vec<_>>();
        let image = ColorImage::from_gray([grid.width(), grid.height()], &gray);
        self.texture.set(image, TextureOptions::NEAREST);

        let size = vec2(grid.width() as f32, grid.height() as f32) * Config::CELL_SIZE;
        let uv = Rect::from_min_max(pos2(0., 0.), pos2(1., 1.));
        painter.image(
            self.texture.id(),
            Rect::from_min_size(field_rect.min, size),
            uv,
            Config::CELL_COLOR,
        );
    }

    fn draw_editor(&self, painter: &Painter, field_rect: Rect) {
        let editor = EditorGeometry::new(&self.session, field_rect);
        let pattern = self.session.pattern();

        painter.rect_filled(editor.rect, 0., Config::BACKGROUND_COLOR);
        let stroke = Stroke::new(Config::EDITOR_STROKE_WIDTH, Config::EDITOR_STROKE_COLOR);
        for y in 0..pattern.height() {
            for x in 0..pattern.width() {
                let cell = editor.cell_rect(x, y);
                if pattern.get(x, y) {
                    painter.rect_filled(cell, 0., Config::CELL_COLOR);
                }
                painter.rect_stroke(cell, 0., stroke);
            }
        }

        painter.text(
            editor.rect.center_bottom() + vec2(0., Config::EDITOR_LABEL_GAP),
            Align2::CENTER_TOP,
            format!("{}x{}", pattern.width(), pattern.height()),
            Self::text_font(),
            Config::TEXT_COLOR,
        );
    }

    fn draw_pause(&self, painter: &Painter, field_rect: Rect) {
        let [w, h] = Config::PAUSE_BAR_SIZE;
        for [dx, dy] in Config::PAUSE_BAR_OFFSETS {
            let min = field_rect.right_bottom() - vec2(dx, dy);
            painter.rect_filled(
                Rect::from_min_size(min, vec2(w, h)),
                0.,
                Config::CELL_COLOR,
            );
        }
    }

    fn draw_overlay_text(&self, painter: &Painter, field_rect: Rect) {
        let margin = vec2(Config::TEXT_MARGIN, Config::TEXT_MARGIN);
        if self.session.show_tps() {
            painter.text(
                field_rect.left_top() + margin,
                Align2::LEFT_TOP,
                format!(
                    "TPS: {:.2}\nGeneration: {}\nPopulation: {}",
                    self.fps_limiter.tps(),
                    self.session.generation(),
                    self.session.grid().population()
                ),
                Self::text_font(),
                Config::TEXT_COLOR,
            );
        }
        if let Some(status) = &self.status {
            painter.text(
                field_rect.left_bottom() + vec2(margin.x, -margin.y),
                Align2::LEFT_BOTTOM,
                status,
                Self::text_font(),
                Config::ERROR_COLOR,
            );
        }
    }

    pub(super) fn draw(&mut self, painter: &Painter, field_rect: Rect) {
        if self.session.phase() == Phase::Welcome {
            painter.rect_filled(field_rect, 0., Config::BACKGROUND_COLOR);
            painter.text(
                field_rect.left_top() + vec2(Config::TEXT_MARGIN, Config::TEXT_MARGIN),
                Align2::LEFT_TOP,
                Config::WELCOME_TEXT,
                Self::text_font(),
                Config::TEXT_COLOR,
            );
            return;
        }

        self.draw_field(painter, field_rect);
        if self.session.editor_visible() {
            self.draw_editor(painter, field_rect);
        }
        if !self.session.state().is_running() {
            self.draw_pause(painter, field_rect);
        }
        self.draw_overlay_text(painter, field_rect);
    }
}

#[cfg(test)]
mod tests {
    use super::EditorGeometry;
    use crate::{Session, SessionConfig};
    use eframe::egui::{pos2, Rect};
    use std::time::Instant;

    #[test]
    fn test_editor_hit_testing() {
        let session = Session::new(SessionConfig::default(), Instant::now());
        let field = Rect::from_min_max(pos2(0., 0.), pos2(640., 480.));
        let editor = EditorGeometry::new(&session, field);

        // glider at scale 20 occupies x in [580, 640), y in [0, 60)
        assert_eq!(editor.rect, Rect::from_min_max(pos2(580., 0.), pos2(640., 60.)));
        assert_eq!(editor.cell_at(pos2(580., 0.)), Some((0, 0)));
        assert_eq!(editor.cell_at(pos2(625., 45.5)), Some((2, 2)));
        assert_eq!(editor.cell_at(pos2(640., 60.)), None);
        assert_eq!(editor.cell_at(pos2(579.9, 10.)), None);
        assert_eq!(editor.cell_at(pos2(600., 61.)), None);
    }
}
