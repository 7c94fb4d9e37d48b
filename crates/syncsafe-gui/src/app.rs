/// Main `eframe::App` implementation for SyncSafe.
///
/// This is the top-level UI layout that composes all panels and widgets.
use crate::panels;
use crate::state::AppState;
use crate::widgets;
use std::path::PathBuf;

/// Pre-built application state.
///
/// Construct this **before** calling `eframe::run_native` so that the
/// initial scan (when a folder was given on the command line) completes
/// before the OS window is created.
pub struct SyncSafeState {
    pub(crate) inner: AppState,
}

impl SyncSafeState {
    /// Seed the folder input and scan it if `initial_root` is given.
    pub fn build(initial_root: Option<PathBuf>) -> Self {
        let mut state = AppState::new();
        if let Some(root) = initial_root {
            tracing::info!("Initial folder {}", root.display());
            state.set_root(&root);
            state.scan();
        }
        Self { inner: state }
    }

    pub fn state(&self) -> &AppState {
        &self.inner
    }
}

/// The SyncSafe application.
pub struct SyncSafeApp {
    state: AppState,
}

impl SyncSafeApp {
    /// Create a new application instance from pre-built state.
    pub fn with_state(cc: &eframe::CreationContext<'_>, state: SyncSafeState) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self { state: state.inner }
    }
}

impl eframe::App for SyncSafeApp {
    /// Override the GPU clear colour to match the active theme background,
    /// preventing a colour mismatch flash between frames.
    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        let [r, g, b, a] = visuals.panel_fill.to_array();
        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── Apply theme ───────────────────────────────────────────────────
        if self.state.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        // ── Top toolbar ───────────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .min_height(36.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                widgets::toolbar::toolbar(ui, &mut self.state);
                ui.add_space(4.0);
            });

        // ── Dialogs ───────────────────────────────────────────────────────
        panels::dialogs::dialogs(ctx, &mut self.state);

        // ── Bottom status bar ─────────────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(24.0)
            .show(ctx, |ui| {
                ui.add_space(2.0);
                widgets::status_bar::status_bar(ui, &self.state);
                ui.add_space(2.0);
            });

        // ── Right details panel ───────────────────────────────────────────
        egui::SidePanel::right("details_panel")
            .default_width(240.0)
            .min_width(180.0)
            .max_width(400.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    panels::details_panel::details_panel(ui, &self.state);
                });
            });

        // ── Central panel (issue table) ───────────────────────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::issue_panel::issue_panel(ui, &mut self.state);
        });
    }
}
