use crate::application::agent::TrainerAgent;
use crate::domain::analysis::select_pending;
use crate::domain::pain::PainBand;
use crate::interfaces::components::card::stat_card;
use crate::interfaces::components::pain_badge::{pain_badge, pending_badge};
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// How many pending follow-ups the dashboard shows at once. The selector
/// itself returns the full set; truncation is a display concern.
const PENDING_DISPLAY_COUNT: usize = 5;

pub fn render_dashboard(agent: &mut TrainerAgent, ui: &mut egui::Ui) {
    ui.heading("Dashboard");
    ui.label(
        egui::RichText::new("Your rehabilitation progress at a glance")
            .color(DesignSystem::TEXT_SECONDARY),
    );
    ui.add_space(DesignSystem::SPACING_MEDIUM);

    render_stat_cards(agent, ui);
    ui.add_space(DesignSystem::SPACING_LARGE);

    render_pending_followups(agent, ui);
    ui.add_space(DesignSystem::SPACING_LARGE);

    render_recent_records(agent, ui);
}

fn render_stat_cards(agent: &TrainerAgent, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        let (total, pending, average, last) = match &agent.stats {
            Some(stats) => (
                stats.total_records.to_string(),
                stats.pending_pain_followups.to_string(),
                format!("{:.1}/10", stats.average_pain_during),
                stats
                    .last_record
                    .map(|d| d.format("%d/%m/%Y").to_string())
                    .unwrap_or_else(|| "N/A".to_string()),
            ),
            None => ("…".to_string(), "…".to_string(), "…".to_string(), "…".to_string()),
        };

        stat_card(ui, "Total records", &total, None);

        let pending_accent = match &agent.stats {
            Some(stats) if stats.pending_pain_followups > 0 => Some(DesignSystem::WARNING),
            _ => Some(DesignSystem::SUCCESS),
        };
        stat_card(ui, "Pending 24h", &pending, pending_accent);

        let pain_accent = agent
            .stats
            .as_ref()
            .map(|s| DesignSystem::band_color(PainBand::from_score(s.average_pain_during.round() as u8)));
        stat_card(ui, "Average pain", &average, pain_accent);

        stat_card(ui, "Last session", &last, None);
    });
}

fn render_pending_followups(agent: &mut TrainerAgent, ui: &mut egui::Ui) {
    let shown: Vec<_> = select_pending(&agent.pending)
        .take(PENDING_DISPLAY_COUNT)
        .cloned()
        .collect();
    if shown.is_empty() {
        return;
    }

    let mut clicked: Option<(i64, u8)> = None;

    DesignSystem::card_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("Update 24h pain")
                    .strong()
                    .size(16.0)
                    .color(DesignSystem::TEXT_PRIMARY),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(format!("{} pending", agent.pending.len()))
                        .small()
                        .color(DesignSystem::WARNING),
                );
            });
        });
        ui.add_space(DesignSystem::SPACING_SMALL);

        for record in &shown {
            let busy = agent.updating_record == Some(record.id);
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(&record.exercise_name)
                            .strong()
                            .color(DesignSystem::TEXT_PRIMARY),
                    );
                    ui.label(
                        egui::RichText::new(format!(
                            "{}x{} @ {}kg • intra pain {}/10 • {}",
                            record.set_count,
                            record.rep_count,
                            record.weight,
                            record.pain_during,
                            record.date.format("%d/%m/%Y")
                        ))
                        .small()
                        .color(DesignSystem::TEXT_SECONDARY),
                    );
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if busy {
                        ui.spinner();
                        return;
                    }
                    // 10..=0 because the layout is right-to-left.
                    for pain in (0..=10u8).rev() {
                        let band = PainBand::from_score(pain);
                        let button = egui::Button::new(
                            egui::RichText::new(pain.to_string())
                                .small()
                                .color(DesignSystem::BG_WINDOW),
                        )
                        .fill(DesignSystem::band_color(band))
                        .corner_radius(DesignSystem::ROUNDING_SMALL);
                        if ui.add(button).clicked() {
                            clicked = Some((record.id, pain));
                        }
                    }
                });
            });
            ui.add_space(4.0);
        }
    });

    if let Some((record_id, pain)) = clicked {
        agent.set_next_day_pain(record_id, pain);
    }
}

fn render_recent_records(agent: &TrainerAgent, ui: &mut egui::Ui) {
    DesignSystem::card_frame().show(ui, |ui| {
        ui.label(
            egui::RichText::new("Recent records")
                .strong()
                .size(16.0)
                .color(DesignSystem::TEXT_PRIMARY),
        );
        ui.add_space(DesignSystem::SPACING_SMALL);

        if agent.recent_records.is_empty() {
            ui.label(
                egui::RichText::new("No sessions logged yet. Try the chat.")
                    .color(DesignSystem::TEXT_MUTED),
            );
            return;
        }

        egui::Grid::new("recent_records_grid")
            .striped(true)
            .min_col_width(90.0)
            .spacing([20.0, 8.0])
            .show(ui, |ui| {
                for header in ["DATE", "EXERCISE", "SETS×REPS", "WEIGHT", "PAIN", "PAIN 24H", "VOLUME"] {
                    ui.label(
                        egui::RichText::new(header)
                            .small()
                            .strong()
                            .color(DesignSystem::TEXT_MUTED),
                    );
                }
                ui.end_row();

                for record in &agent.recent_records {
                    ui.label(record.date.format("%d/%m/%Y %H:%M").to_string());
                    ui.label(
                        egui::RichText::new(&record.exercise_name)
                            .strong()
                            .color(DesignSystem::TEXT_PRIMARY),
                    );
                    ui.label(format!("{}x{}", record.set_count, record.rep_count));
                    ui.label(format!("{}kg", record.weight));
                    pain_badge(ui, record.pain_during);
                    match record.pain_next_day {
                        Some(pain) => pain_badge(ui, pain),
                        None => pending_badge(ui),
                    }
                    ui.label(format!("{:.1}kg", record.volume()));
                    ui.end_row();
                }
            });
    });
}
