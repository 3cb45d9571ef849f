#![warn(clippy::all)]

use cell_matrix::{App, CellMatrix, Params};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    use eframe::egui::ViewportBuilder;

    env_logger::init();

    let params = Params::default();
    let field = CellMatrix::random(params, None)?;
    log::info!(
        "starting {}x{} field with {}% alive",
        params.width,
        params.height,
        params.alive_probability_percent
    );

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(App::inner_size(&field))
            .with_resizable(false),
        follow_system_theme: false,
        default_theme: eframe::Theme::Light,
        ..Default::default()
    };
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(field)))),
    )?;
    Ok(())
}
