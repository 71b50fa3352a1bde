use eframe::egui::{self, Ui};

use crate::state::ChartState;
use crate::ui::panels;

/// Draws the chart for a dataset of `V` values into the central panel.
pub type DrawChart<V> = fn(&mut Ui, &ChartState<V>);

/// Native window settings for one demo.
#[derive(Debug, Clone, Copy)]
pub struct WindowConfig {
    pub title: &'static str,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
}

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ChartApp<V> {
    pub state: ChartState<V>,
    draw: DrawChart<V>,
}

impl<V> ChartApp<V> {
    pub fn new(state: ChartState<V>, draw: DrawChart<V>) -> Self {
        Self { state, draw }
    }
}

impl<V> eframe::App for ChartApp<V> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.dataset.is_empty() {
                panels::no_data(ui);
            } else {
                (self.draw)(ui, &self.state);
            }
        });
    }
}

/// Open the window and block until it is closed.
pub fn run<V: 'static>(
    window: WindowConfig,
    state: ChartState<V>,
    draw: DrawChart<V>,
) -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(window.title)
            .with_inner_size(window.inner_size)
            .with_min_inner_size(window.min_inner_size),
        ..Default::default()
    };

    eframe::run_native(
        window.title,
        options,
        Box::new(move |_cc| Ok(Box::new(ChartApp::new(state, draw)))),
    )
}
