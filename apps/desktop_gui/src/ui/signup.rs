use client_core::{SubmissionController, SubmissionStatus};
use eframe::egui;

use crate::controller::reducer::UiIntent;
use crate::ui::theme;

pub fn show_signup(
    ui: &mut egui::Ui,
    form: &SubmissionController,
    validation_hint: Option<&str>,
    intents: &mut Vec<UiIntent>,
) {
    if ui
        .add(egui::Button::new(egui::RichText::new("⟨ Back").size(15.0)).frame(false))
        .clicked()
    {
        intents.push(UiIntent::GoBack);
    }

    ui.heading(egui::RichText::new("Join Our Waitlist!").strong());
    ui.label(
        "We're putting the finishing touches on Thumbsy and getting ready for launch. \
         Be among the first to experience instant product reviews right where you shop.",
    );
    ui.add_space(12.0);

    if *form.status() == SubmissionStatus::Success {
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("🎉 You're on the list!").size(18.0).strong());
            ui.label("Thanks for joining. We'll keep you updated on our progress.");
        });
        return;
    }

    let mut email_buf = form.email().to_string();
    let mut edit = egui::TextEdit::singleline(&mut email_buf)
        .id_salt(("waitlist_email", form.id()))
        .hint_text("Enter your email")
        .desired_width(f32::INFINITY);
    if form.error_message().is_some() {
        edit = edit.text_color(theme::ERROR_TEXT);
    }
    let email_resp = ui.add_enabled(form.input_enabled(), edit);
    if email_resp.changed() {
        intents.push(UiIntent::EditEmail(email_buf));
    }

    if let Some(hint) = validation_hint {
        ui.small(egui::RichText::new(hint).color(theme::ERROR_TEXT));
    }

    ui.add_space(8.0);
    let enter_pressed =
        email_resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
    let clicked = ui
        .vertical_centered(|ui| {
            ui.add_enabled(form.input_enabled(), theme::primary_button(form.submit_label()))
                .clicked()
        })
        .inner;
    if clicked || enter_pressed {
        intents.push(UiIntent::Submit);
    }

    if let Some(message) = form.error_message() {
        ui.add_space(6.0);
        ui.label(egui::RichText::new(message).color(theme::ERROR_TEXT));
    }
}
