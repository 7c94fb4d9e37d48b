/// Central panel — the list of issues found by the last scan.
use crate::state::{AppPhase, AppState};
use crate::widgets;
use egui::Ui;

/// Draw the issue list, or a hint when there is nothing to show.
pub fn issue_panel(ui: &mut Ui, state: &mut AppState) {
    let color_muted = ui.visuals().weak_text_color();

    let report = match (state.phase, &state.report) {
        (AppPhase::Results, Some(report)) => report,
        _ => {
            ui.centered_and_justified(|ui| {
                ui.label(
                    egui::RichText::new("Pick a folder and press Scan")
                        .color(color_muted)
                        .italics(),
                );
            });
            return;
        }
    };

    ui.label(egui::RichText::new("Issues Found:").strong());
    ui.add_space(4.0);

    if report.is_clean() {
        ui.label(
            egui::RichText::new("✓ Every name is OneDrive-safe")
                .color(egui::Color32::from_rgb(0xa6, 0xe3, 0xa1)),
        );
        return;
    }

    if let Some(index) = widgets::issue_table::issue_table(ui, &report.issues, state.selected_issue)
    {
        state.selected_issue = Some(index);
    }
}
