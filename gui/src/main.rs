mod app;

use eframe::egui;
use eframe::run_native;
use life_shared::library::register_builtins;
use life_shared::{Config, Rule, Simulation};

use crate::app::GuiOfLife;

const WINDOW_SIZE: [f32; 2] = [900.0, 780.0];

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut simulation = Simulation::new(Config::default(), Rule::conway());
    let presets = register_builtins(&mut simulation);
    log::info!(
        "{}x{} grid, {} presets, rule {}",
        simulation.cols(),
        simulation.rows(),
        presets,
        simulation.rule()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(WINDOW_SIZE),
        ..Default::default()
    };

    run_native(
        "Game of Life GUI",
        options,
        Box::new(move |cc| Ok(Box::new(GuiOfLife::new(cc, simulation)))),
    )
    .map_err(|err| anyhow::anyhow!("gui terminated: {err}"))?;
    Ok(())
}
