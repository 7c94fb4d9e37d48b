/// SyncSafe GUI — egui-based desktop frontend.
///
/// This crate contains all UI code. Business logic lives in `syncsafe-core`;
/// the UI only calls its `scan`, `execute`, and `export` entry points.
pub mod app;
pub mod panels;
pub mod state;
pub mod widgets;

pub use app::{SyncSafeApp, SyncSafeState};
