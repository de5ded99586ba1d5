use crate::domain::pain::PainBand;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Renders a pain score as its traffic-light badge. Every view shows pain
/// through this widget so band colors and tokens stay consistent.
pub fn pain_badge(ui: &mut egui::Ui, pain: u8) {
    let band = PainBand::from_score(pain);
    ui.label(
        egui::RichText::new(format!("{} {}/10", band.traffic_light(), pain))
            .color(DesignSystem::band_color(band)),
    );
}

/// Badge for a follow-up that has not been reported yet.
pub fn pending_badge(ui: &mut egui::Ui) {
    ui.label(
        egui::RichText::new("pending")
            .italics()
            .color(DesignSystem::TEXT_MUTED),
    );
}
