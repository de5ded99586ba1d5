use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Stat card: small muted title over a large value, optional accent color.
pub fn stat_card(ui: &mut egui::Ui, title: &str, value: &str, accent: Option<egui::Color32>) {
    DesignSystem::card_frame().show(ui, |ui| {
        ui.set_min_width(150.0);
        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new(title)
                    .small()
                    .color(DesignSystem::TEXT_SECONDARY),
            );
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(value)
                    .heading()
                    .strong()
                    .color(accent.unwrap_or(DesignSystem::TEXT_PRIMARY)),
            );
        });
    });
}
