/// Top action bar -- folder input, scan / fix / export controls, theme toggle.
use crate::state::AppState;
use egui::Ui;

/// Draw the toolbar.
pub fn toolbar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        // App title -- uses the egui accent/hyperlink colour so it adapts to
        // dark and light mode automatically.
        ui.label(
            egui::RichText::new("☁ SyncSafe")
                .size(18.0)
                .strong()
                .color(ui.visuals().hyperlink_color),
        );

        ui.separator();

        ui.label("Folder:");
        let input = ui.add(
            egui::TextEdit::singleline(&mut state.root_input)
                .hint_text("Folder to scan")
                .desired_width(380.0),
        );
        // Enter in the path box scans straight away.
        if input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            state.scan();
        }

        if ui
            .button("📁 Browse")
            .on_hover_text("Pick a folder")
            .clicked()
        {
            let mut dialog = rfd::FileDialog::new();
            let current = std::path::Path::new(state.root_input.trim());
            if current.is_dir() {
                dialog = dialog.set_directory(current);
            }
            if let Some(path) = dialog.pick_folder() {
                state.set_root(&path);
            }
        }

        let scan_btn = ui.add(egui::Button::new("▶ Scan").min_size(egui::vec2(70.0, 28.0)));
        if scan_btn.clicked() {
            state.scan();
        }

        ui.separator();

        let can_fix = state.issue_count() > 0;
        if ui
            .add(egui::Button::new("🔧 Fix All").min_size(egui::vec2(80.0, 28.0)))
            .on_hover_text(if can_fix {
                "Rename every entry listed below"
            } else {
                "Nothing to fix"
            })
            .clicked()
        {
            state.request_fix();
        }

        // Export button (only when results available).
        let can_export = state.report.is_some();
        if ui
            .add_enabled(can_export, egui::Button::new("📤 Export"))
            .on_hover_text("Export results to CSV or JSON")
            .on_disabled_hover_text("Run a scan first to enable export")
            .clicked()
        {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("CSV", &["csv"])
                .add_filter("JSON", &["json"])
                .set_file_name("syncsafe-report.csv")
                .save_file()
            {
                if let Err(err) = state.export_report(&path) {
                    tracing::error!("{err:#}");
                    state.notice = Some(crate::state::Notice {
                        kind: crate::state::NoticeKind::Error,
                        title: "Export failed".to_string(),
                        body: format!("{err:#}"),
                    });
                }
            }
        }

        // Right-aligned controls.
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("ℹ").on_hover_text("About SyncSafe").clicked() {
                state.show_about = true;
            }

            // ── Theme toggle (☀ light / 🌙 dark) ──────────────────
            let theme_label = if state.dark_mode { "☀" } else { "🌙" };
            let theme_tip = if state.dark_mode {
                "Switch to light mode"
            } else {
                "Switch to dark mode"
            };
            if ui.button(theme_label).on_hover_text(theme_tip).clicked() {
                state.dark_mode = !state.dark_mode;
            }
        });
    });
}
