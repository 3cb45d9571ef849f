use super::{Config, Ticker};
use crate::{CellMatrix, Evolve};
use eframe::egui::{CentralPanel, Color32, Context, Frame, Margin};
use std::time::Instant;

/// Window that advances the field once per tick and redraws it.
pub struct App<G: Evolve = CellMatrix> {
    pub(super) field: G,       // Conway's GoL field.
    pub(super) ticker: Ticker, // Schedules generation updates.
}

impl<G: Evolve> App<G> {
    pub fn new(field: G) -> Self {
        Self {
            field,
            ticker: Ticker::new(Config::TICK_INTERVAL, Instant::now()),
        }
    }

    /// Window size in points needed to show the whole field.
    pub fn inner_size(field: &G) -> [f32; 2] {
        let (w, h) = field.size();
        [
            w as f32 * Config::CELL_SIZE + 2. * Config::FRAME_MARGIN,
            h as f32 * Config::CELL_SIZE + 2. * Config::FRAME_MARGIN + Config::STATUS_HEIGHT,
        ]
    }

    pub fn field(&self) -> &G {
        &self.field
    }

    /// Advances the field if a tick is due at `now`.
    pub fn update_field(&mut self, now: Instant) -> bool {
        if !self.ticker.poll(now) {
            return false;
        }
        self.field.advance_generation();
        true
    }
}

impl<G: Evolve> eframe::App for App<G> {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.update_field(now);

        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Color32::LIGHT_GRAY),
            )
            .show(ctx, |ui| self.draw(ui));

        ctx.request_repaint_after(self.ticker.until_next(now));
    }
}
