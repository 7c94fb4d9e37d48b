/// Modal windows: fix confirmation, notices, and the About box.
use crate::state::{AppState, NoticeKind};

/// Draw whichever dialogs are currently open.
pub fn dialogs(ctx: &egui::Context, state: &mut AppState) {
    confirm_dialog(ctx, state);
    notice_dialog(ctx, state);
    about_dialog(ctx, state);
}

fn confirm_dialog(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_confirm {
        return;
    }

    let count = state.issue_count();
    egui::Window::new("Confirm")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(format!("Fix {count} files/folders?"));
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Yes").clicked() {
                    state.confirm_fix();
                }
                if ui.button("No").clicked() {
                    state.cancel_fix();
                }
            });
        });
}

fn notice_dialog(ctx: &egui::Context, state: &mut AppState) {
    let Some(notice) = state.notice.clone() else {
        return;
    };

    let title_color = match notice.kind {
        NoticeKind::Info => egui::Color32::from_rgb(0xa6, 0xe3, 0xa1),
        NoticeKind::Warning => egui::Color32::from_rgb(0xfa, 0xb3, 0x87),
        NoticeKind::Error => egui::Color32::from_rgb(0xf3, 0x8b, 0xa8),
    };

    let mut open = true;
    egui::Window::new(egui::RichText::new(&notice.title).color(title_color))
        .id(egui::Id::new("notice"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(notice.body.as_str());
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                state.dismiss_notice();
            }
        });
    if !open {
        state.dismiss_notice();
    }
}

fn about_dialog(ctx: &egui::Context, state: &mut AppState) {
    let mut show_about = state.show_about;
    egui::Window::new("About SyncSafe")
        .open(&mut show_about)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([340.0, 0.0])
        .show(ctx, |ui| {
            let accent = ui.visuals().hyperlink_color;
            let muted = ui.visuals().weak_text_color();
            let normal = ui.visuals().text_color();

            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new("☁ SyncSafe")
                        .size(24.0)
                        .strong()
                        .color(accent),
                );
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                        .size(13.0)
                        .color(muted),
                );
                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new(
                        "Finds file and folder names that OneDrive and Windows\n\
                         reject, and renames them to safe equivalents.",
                    )
                    .size(12.0)
                    .color(normal),
                );
                ui.add_space(12.0);
                ui.separator();
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new("MIT License - Built with Rust & egui")
                        .size(11.0)
                        .color(muted),
                );
                ui.add_space(8.0);
            });
        });
    state.show_about = show_about;
}
