/// Bottom status bar — scan status and statistics.
use crate::state::{AppPhase, AppState};
use egui::Ui;

/// Draw the status bar at the bottom of the window.
pub fn status_bar(ui: &mut Ui, state: &AppState) {
    // Extract theme-adaptive colours once for this frame.
    let color_accent = ui.visuals().hyperlink_color;
    let color_weak = ui.visuals().weak_text_color();
    let color_normal = ui.visuals().text_color();
    let color_warning = egui::Color32::from_rgb(0xfa, 0xb3, 0x87);
    let color_success = egui::Color32::from_rgb(0xa6, 0xe3, 0xa1);

    ui.horizontal(|ui| {
        let report = match (state.phase, &state.report) {
            (AppPhase::Results, Some(report)) => report,
            _ => {
                ui.label(egui::RichText::new(&state.status).size(12.0).color(color_weak));
                return;
            }
        };

        let status_color = if report.is_clean() {
            color_success
        } else {
            color_warning
        };
        ui.label(
            egui::RichText::new(&state.status)
                .size(12.0)
                .color(status_color),
        );

        ui.separator();
        ui.label(
            egui::RichText::new(format!("{} scanned", report.entries_scanned))
                .size(12.0)
                .color(color_normal),
        )
        .on_hover_text(format!("{} levels deep", report.max_depth));

        if report.dir_issue_count() > 0 {
            ui.separator();
            ui.label(
                egui::RichText::new(format!("{} folders", report.dir_issue_count()))
                    .size(12.0)
                    .color(color_accent),
            );
        }

        ui.separator();
        ui.label(
            egui::RichText::new(format!("{:.1}s", report.duration.as_secs_f64()))
                .size(12.0)
                .color(color_weak),
        );

        if !report.walk_errors.is_empty() {
            ui.separator();
            ui.label(
                egui::RichText::new(format!("{} unreadable", report.walk_errors.len()))
                    .size(12.0)
                    .color(color_warning),
            )
            .on_hover_text(
                report
                    .walk_errors
                    .iter()
                    .map(|e| format!("{}: {}", e.path, e.message))
                    .collect::<Vec<_>>()
                    .join("\n"),
            );
        }

        if let Some(ref outcome) = state.last_fix {
            ui.separator();
            ui.label(
                egui::RichText::new(format!(
                    "Last fix: {} renamed, {} errors",
                    outcome.fixed_count,
                    outcome.errors.len()
                ))
                .size(12.0)
                .color(color_weak),
            );
        }
    });
}
