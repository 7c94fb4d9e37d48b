/// UI widgets for SyncSafe.

pub mod issue_table;
pub mod status_bar;
pub mod toolbar;
