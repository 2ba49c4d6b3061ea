use eframe::egui;

use crate::controller::reducer::UiIntent;
use crate::ui::theme;

pub fn show_landing(ui: &mut egui::Ui, intents: &mut Vec<UiIntent>) {
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new("👍").size(40.0));
        ui.heading(egui::RichText::new("Knowing what you're buying").strong());
        ui.label(egui::RichText::new("should be as simple as possible.").italics());
    });

    ui.separator();

    ui.label(
        "Thumbsy is an app which helps you get the reviews you want instantly in person. \
         Just scan a barcode and access thousands of customer insights online.",
    );
    ui.add_space(6.0);
    ui.label(
        "We are continuously updating the app and would love to take you along for the ride. \
         Want to join us in our beta testing? Click the link below.",
    );
    ui.add_space(12.0);

    ui.vertical_centered(|ui| {
        if ui.add(theme::primary_button("Try it now")).clicked() {
            intents.push(UiIntent::TryItNow);
        }
    });
}
