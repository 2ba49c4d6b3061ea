use eframe::egui;

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(46, 125, 94);
pub const ERROR_TEXT: egui::Color32 = egui::Color32::from_rgb(196, 58, 58);
pub const ERROR_BANNER_FILL: egui::Color32 = egui::Color32::from_rgb(111, 53, 53);
pub const ERROR_BANNER_STROKE: egui::Color32 = egui::Color32::from_rgb(175, 96, 96);
pub const CARD_FILL: egui::Color32 = egui::Color32::from_rgb(252, 252, 250);
pub const CARD_WIDTH: f32 = 440.0;

pub fn visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = egui::Color32::from_rgb(214, 229, 222);
    visuals.selection.bg_fill = ACCENT;
    visuals.hyperlink_color = ACCENT;
    visuals
}

pub fn card_frame(ui: &egui::Ui) -> egui::Frame {
    egui::Frame::new()
        .fill(CARD_FILL)
        .corner_radius(egui::CornerRadius::same(14))
        .stroke(egui::Stroke::new(
            1.0,
            ui.visuals().widgets.noninteractive.bg_stroke.color,
        ))
        .inner_margin(egui::Margin::symmetric(24, 20))
}

pub fn primary_button(label: &str) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(label.to_string())
            .strong()
            .size(16.0)
            .color(egui::Color32::WHITE),
    )
    .fill(ACCENT)
    .min_size(egui::vec2(CARD_WIDTH - 48.0, 40.0))
}
