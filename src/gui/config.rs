use eframe::egui::Color32;
use std::time::Duration;

pub struct Config;

impl Config {
    pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

    pub const CELL_SIZE: f32 = 25.;
    pub const BORDER_WIDTH: f32 = 1.;
    pub const ALIVE_COLOR: Color32 = Color32::from_rgb(0xff, 0xc8, 0x00);
    pub const DEAD_COLOR: Color32 = Color32::WHITE;
    pub const BORDER_COLOR: Color32 = Color32::BLACK;

    pub const FRAME_MARGIN: f32 = 20.;
    pub const STATUS_HEIGHT: f32 = 30.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
}
