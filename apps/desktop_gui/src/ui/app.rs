use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{events::UiEvent, orchestration, reducer::AppModel};
use crate::ui::form;

pub struct EstimatorApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    model: AppModel,
    backend_gone: bool,
}

impl EstimatorApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            model: AppModel::default(),
            backend_gone: false,
        };
        orchestration::request_locations(&mut app.model, &app.cmd_tx);
        app
    }

    fn process_ui_events(&mut self) {
        if self.backend_gone {
            return;
        }
        loop {
            match self.ui_rx.try_recv() {
                Ok(event) => self.model.apply(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.backend_gone = true;
                    self.model
                        .backend_lost("Backend worker stopped; restart the app".to_string());
                    break;
                }
            }
        }
    }
}

impl eframe::App for EstimatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.weak(self.model.status.as_str());
        });

        egui::SidePanel::right("valuation_panel")
            .resizable(false)
            .default_width(300.0)
            .show(ctx, |ui| {
                form::result_panel(ui, &self.model.estimation);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            form::property_form(ui, &mut self.model, &self.cmd_tx);
        });

        if !self.backend_gone {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
