use eframe::egui::{Color32, RichText, Ui};

use crate::state::ChartState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Chart title on the left, dataset summary next to it.
pub fn top_bar<V>(ui: &mut Ui, state: &ChartState<V>) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading(state.title.as_str());
        ui.separator();

        let summary = RichText::new(state.status_line());
        if state.skipped_rows > 0 {
            ui.label(summary.color(Color32::from_rgb(200, 120, 0)))
                .on_hover_text("Rows with unparseable fields were left out; see the log for details");
        } else {
            ui.label(summary);
        }
    });
}

// ---------------------------------------------------------------------------
// Empty dataset placeholder
// ---------------------------------------------------------------------------

pub fn no_data(ui: &mut Ui) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.label(RichText::new("No data rows in the input file").heading());
    });
}
