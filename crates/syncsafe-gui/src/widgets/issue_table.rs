/// Issue table — one row per entry to rename, with the same three columns
/// the scan report exports: original path, fixed path, issue type.
use egui::Ui;
use egui_extras::{Column, TableBuilder};
use syncsafe_core::model::Issue;

const ROW_HEIGHT: f32 = 20.0;

/// Draw the table. Returns the index of a row clicked this frame.
pub fn issue_table(ui: &mut Ui, issues: &[Issue], selected: Option<usize>) -> Option<usize> {
    let mut clicked = None;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .sense(egui::Sense::click())
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::initial(350.0).at_least(120.0).clip(true))
        .column(Column::initial(350.0).at_least(120.0).clip(true))
        .column(Column::remainder().at_least(120.0))
        .header(ROW_HEIGHT + 2.0, |mut header| {
            header.col(|ui| {
                ui.strong("Original Path");
            });
            header.col(|ui| {
                ui.strong("Fixed Path");
            });
            header.col(|ui| {
                ui.strong("Issue Type");
            });
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, issues.len(), |mut row| {
                let index = row.index();
                let issue = &issues[index];
                row.set_selected(selected == Some(index));

                let original = issue.original.to_string_lossy();
                let fixed = issue.fixed.to_string_lossy();
                row.col(|ui| {
                    ui.add(egui::Label::new(original.as_ref()).truncate())
                        .on_hover_text(original.as_ref());
                });
                row.col(|ui| {
                    ui.add(egui::Label::new(fixed.as_ref()).truncate())
                        .on_hover_text(fixed.as_ref());
                });
                row.col(|ui| {
                    ui.label(issue.label());
                });

                if row.response().clicked() {
                    clicked = Some(index);
                }
            });
        });

    clicked
}
