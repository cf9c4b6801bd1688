use std::thread;

mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use checker_core::{config, HttpVerificationService, VerificationService};
use controller::events::UiEvent;
use crossbeam_channel::{bounded, Receiver, Sender};
use eframe::egui;
use ui::app::CheckerApp;

fn spawn_backend_thread(
    endpoint: String,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Info(format!(
                    "Backend worker startup failure: {err}"
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let service = HttpVerificationService::new(endpoint);
            tracing::info!(endpoint = service.endpoint(), "backend worker ready");
            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::Verify(request) => {
                        let outcome = service.verify(request).await;
                        if ui_tx.send(UiEvent::VerificationFinished(outcome)).is_err() {
                            break;
                        }
                    }
                }
            }
        });
    });
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = config::load_settings();
    let endpoint = match config::validate_endpoint(&settings.endpoint_url) {
        Ok(endpoint) => endpoint,
        Err(err) => {
            tracing::error!("refusing to start: {err:#}");
            std::process::exit(2);
        }
    };

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    spawn_backend_thread(endpoint, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Document Rule Checker")
            .with_inner_size([920.0, 720.0])
            .with_min_inner_size([720.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Document Rule Checker",
        options,
        Box::new(|_cc| Ok(Box::new(CheckerApp::new(cmd_tx, ui_rx)))),
    )
}
