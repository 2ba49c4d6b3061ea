use std::time::Duration;

use client_core::ActiveView;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::{AppModel, StatusBannerSeverity, UiIntent};
use crate::ui::{landing, signup, theme};

pub struct WaitlistApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    model: AppModel,
}

impl WaitlistApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            model: AppModel::new(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.model.apply_event(event);
        }
    }

    fn apply_intents(&mut self, intents: Vec<UiIntent>) {
        for intent in intents {
            if let Some(cmd) = self.model.handle_intent(intent) {
                if let Err(failure) = dispatch_backend_command(&self.cmd_tx, cmd) {
                    self.model.command_dispatch_failed(failure);
                }
            }
        }
    }

    fn show_status_banner(&self, ui: &mut egui::Ui, intents: &mut Vec<UiIntent>) {
        let Some(banner) = &self.model.status_banner else {
            return;
        };
        let (fill, stroke) = match banner.severity {
            StatusBannerSeverity::Error => (
                theme::ERROR_BANNER_FILL,
                egui::Stroke::new(1.0, theme::ERROR_BANNER_STROKE),
            ),
        };

        egui::Frame::new()
            .fill(fill)
            .stroke(stroke)
            .corner_radius(egui::CornerRadius::same(8))
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new(&banner.message).color(egui::Color32::WHITE));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Dismiss").clicked() {
                            intents.push(UiIntent::DismissBanner);
                        }
                    });
                });
            });
        ui.add_space(8.0);
    }

    fn show_card(&self, ctx: &egui::Context, intents: &mut Vec<UiIntent>) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let avail = ui.available_size();
            ui.add_space((avail.y * 0.10).clamp(12.0, 80.0));

            ui.vertical_centered(|ui| {
                ui.set_max_width(theme::CARD_WIDTH);
                theme::card_frame(ui).show(ui, |ui| {
                    ui.style_mut().spacing.item_spacing = egui::vec2(10.0, 10.0);
                    self.show_status_banner(ui, intents);

                    match self.model.views.render() {
                        ActiveView::Landing => landing::show_landing(ui, intents),
                        ActiveView::Signup(form) => signup::show_signup(
                            ui,
                            form,
                            self.model.validation_hint.as_deref(),
                            intents,
                        ),
                    }
                });
                ui.add_space(6.0);
                ui.small(egui::RichText::new(&self.model.status).weak());
            });
        });
    }
}

impl eframe::App for WaitlistApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let mut intents = Vec::new();
        self.show_card(ctx, &mut intents);
        if !intents.is_empty() {
            self.apply_intents(intents);
            ctx.request_repaint();
        }

        let waiting = self
            .model
            .views
            .signup()
            .is_some_and(|form| form.status().is_loading());
        if waiting {
            ctx.request_repaint_after(Duration::from_millis(50));
        } else {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}
