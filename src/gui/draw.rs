use super::{App, Config};
use crate::Evolve;
use eframe::egui::{pos2, vec2, Pos2, Rect, RichText, Sense, Stroke, Ui};

/// Screen rectangle of cell `(x, y)` for a field drawn from `origin`.
pub(super) fn cell_rect(origin: Pos2, x: usize, y: usize) -> Rect {
    Rect::from_min_size(
        pos2(
            origin.x + x as f32 * Config::CELL_SIZE,
            origin.y + y as f32 * Config::CELL_SIZE,
        ),
        vec2(Config::CELL_SIZE, Config::CELL_SIZE),
    )
}

impl<G: Evolve> App<G> {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    pub(super) fn draw(&self, ui: &mut Ui) {
        ui.label(Self::new_text(&format!(
            "Generation: {}    Alive: {}",
            self.field.generation(),
            self.field.population()
        )));

        let (w, h) = self.field.size();
        let size = vec2(w as f32, h as f32) * Config::CELL_SIZE;
        let (response, painter) = ui.allocate_painter(size, Sense::hover());
        let origin = response.rect.min;
        let border = Stroke::new(Config::BORDER_WIDTH, Config::BORDER_COLOR);

        for y in 0..h {
            for x in 0..w {
                let rect = cell_rect(origin, x, y);
                let fill = if self.field.get_cell(x, y) {
                    Config::ALIVE_COLOR
                } else {
                    Config::DEAD_COLOR
                };
                painter.rect_filled(rect, 0., fill);
                painter.rect_stroke(rect, 0., border);
            }
        }
    }
}
