//! Bézier-Polaren-Studio.
//!
//! Interaktiver Viewer für Bézier-Kurven und ihre iterierten Polaren:
//! Kontrollpunkte per Klick setzen, Blendparameter t₁ und Polaren-Stufe
//! per Pfeiltasten einstellen.

use bezier_polar_studio::shared::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use bezier_polar_studio::{ui, AppController, AppIntent, AppState, StudioOptions};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Bezier-Polar-Studio v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
                .with_title(WINDOW_TITLE),
            ..Default::default()
        };

        eframe::run_native(
            WINDOW_TITLE,
            options,
            Box::new(|_cc| Ok(Box::new(StudioApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct StudioApp {
    state: AppState,
    controller: AppController,
}

impl StudioApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = StudioOptions::config_path();
        let studio_options = StudioOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = studio_options;

        Self {
            state,
            controller: AppController::new(),
        }
    }
}

impl eframe::App for StudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        // Plan vor der Event-Verarbeitung bauen: der Frame zeigt den Zustand
        // des letzten Frames, Mutationen werden im Folgeframe sichtbar
        let plan = self.controller.build_render_plan(&self.state);

        ui::render_status_bar(ctx, &plan);
        let events = ui::render_canvas_panel(ctx, &plan);

        self.process_events(events);
    }
}

impl StudioApp {
    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
