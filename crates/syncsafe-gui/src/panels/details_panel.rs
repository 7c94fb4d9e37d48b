/// Details panel — shows which rules the selected entry breaks.
use crate::state::AppState;
use egui::Ui;
use syncsafe_core::model::IssueKind;

/// One-line explanation shown under each rule name.
fn explain(kind: IssueKind) -> &'static str {
    match kind {
        IssueKind::InvalidCharacters => "Contains one of < > : \" / \\ | ? *",
        IssueKind::NtfsStream => "A colon starts an NTFS alternate data stream",
        IssueKind::TrailingSpaceOrPeriod => "Windows drops trailing spaces and periods",
        IssueKind::ReservedName => "Matches a DOS device name such as CON or LPT1",
    }
}

/// Draw the details panel for the currently selected issue.
pub fn details_panel(ui: &mut Ui, state: &AppState) {
    let color_muted = ui.visuals().weak_text_color();
    let color_accent = ui.visuals().hyperlink_color;
    let color_warning = egui::Color32::from_rgb(0xfa, 0xb3, 0x87);

    let issue = match (state.selected_issue, &state.report) {
        (Some(index), Some(report)) => match report.issues.get(index) {
            Some(issue) => issue,
            None => return,
        },
        _ => {
            ui.label(
                egui::RichText::new("Select an issue to see details")
                    .color(color_muted)
                    .italics(),
            );
            return;
        }
    };

    ui.heading(egui::RichText::new(if issue.is_dir { "📁" } else { "📄" }).size(16.0));
    ui.add_space(2.0);

    ui.label(egui::RichText::new("Current name").color(color_muted));
    ui.label(egui::RichText::new(issue.original_name()).monospace());
    ui.add_space(6.0);

    ui.label(egui::RichText::new("New name").color(color_muted));
    ui.label(
        egui::RichText::new(issue.fixed_name())
            .monospace()
            .color(color_accent),
    );
    ui.add_space(6.0);

    ui.label(egui::RichText::new("Location").color(color_muted));
    let parent = issue
        .original
        .parent()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();
    ui.add(egui::Label::new(parent).wrap());

    ui.add_space(10.0);
    ui.separator();
    ui.add_space(6.0);

    for kind in issue.kinds.iter() {
        ui.label(egui::RichText::new(format!("⚠ {}", kind.label())).color(color_warning));
        ui.label(egui::RichText::new(explain(kind)).size(11.0).color(color_muted));
        ui.add_space(4.0);
    }
}
