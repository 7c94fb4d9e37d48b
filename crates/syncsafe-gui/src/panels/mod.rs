/// Layout panels composed by the app each frame.

pub mod details_panel;
pub mod dialogs;
pub mod issue_panel;
