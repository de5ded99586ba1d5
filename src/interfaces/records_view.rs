use crate::application::agent::TrainerAgent;
use crate::domain::records::TrainingRecord;
use crate::interfaces::components::pain_badge::{pain_badge, pending_badge};
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::records_view_model::{filter_records, group_by_exercise};
use eframe::egui;

pub fn render_records(agent: &mut TrainerAgent, ui: &mut egui::Ui) {
    ui.heading("Log editor");
    ui.label(
        egui::RichText::new("Manual entry and session history")
            .color(DesignSystem::TEXT_SECONDARY),
    );
    ui.add_space(DesignSystem::SPACING_MEDIUM);

    render_entry_form(agent, ui);
    ui.add_space(DesignSystem::SPACING_MEDIUM);
    render_exercise_form(agent, ui);
    ui.add_space(DesignSystem::SPACING_LARGE);
    render_record_list(agent, ui);
}

fn render_entry_form(agent: &mut TrainerAgent, ui: &mut egui::Ui) {
    let exercise_names: Vec<String> = agent.exercises.iter().map(|e| e.name.clone()).collect();

    DesignSystem::card_frame().show(ui, |ui| {
        ui.label(
            egui::RichText::new("New record")
                .strong()
                .size(16.0)
                .color(DesignSystem::TEXT_PRIMARY),
        );
        ui.add_space(DesignSystem::SPACING_SMALL);

        ui.horizontal(|ui| {
            egui::ComboBox::from_label("Exercise")
                .selected_text(if agent.record_form.exercise_name.is_empty() {
                    "pick one".to_string()
                } else {
                    agent.record_form.exercise_name.clone()
                })
                .show_ui(ui, |ui| {
                    for name in &exercise_names {
                        ui.selectable_value(
                            &mut agent.record_form.exercise_name,
                            name.clone(),
                            name,
                        );
                    }
                });

            ui.add_space(DesignSystem::SPACING_SMALL);
            ui.label("Sets");
            ui.add(egui::DragValue::new(&mut agent.record_form.set_count).range(1..=20));
            ui.label("Reps");
            ui.add(egui::DragValue::new(&mut agent.record_form.rep_count).range(1..=100));
            ui.label("Weight (kg)");
            ui.add(
                egui::DragValue::new(&mut agent.record_form.weight)
                    .speed(0.5)
                    .range(0.0..=500.0),
            );
        });

        ui.add_space(DesignSystem::SPACING_SMALL);
        ui.horizontal(|ui| {
            ui.label("Pain during");
            ui.add(egui::Slider::new(&mut agent.record_form.pain_during, 0..=10));
            pain_badge(ui, agent.record_form.pain_during);
        });

        ui.add_space(DesignSystem::SPACING_SMALL);
        ui.horizontal(|ui| {
            ui.label("Notes");
            ui.add(
                egui::TextEdit::singleline(&mut agent.record_form.notes)
                    .desired_width(f32::INFINITY),
            );
        });

        ui.add_space(DesignSystem::SPACING_SMALL);
        ui.horizontal(|ui| {
            if ui.button("Save record").clicked() {
                agent.submit_record();
            }
            if let Some(error) = &agent.form_error {
                ui.colored_label(DesignSystem::DANGER, error);
            }
        });
    });
}

fn render_exercise_form(agent: &mut TrainerAgent, ui: &mut egui::Ui) {
    DesignSystem::card_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("Exercise catalogue")
                    .strong()
                    .color(DesignSystem::TEXT_PRIMARY),
            );
            let toggle = if agent.exercise_form.open { "Hide" } else { "Add exercise" };
            if ui.small_button(toggle).clicked() {
                agent.exercise_form.open = !agent.exercise_form.open;
            }
        });

        if !agent.exercise_form.open {
            return;
        }

        ui.add_space(DesignSystem::SPACING_SMALL);
        ui.horizontal(|ui| {
            ui.label("Name");
            ui.add(egui::TextEdit::singleline(&mut agent.exercise_form.name).desired_width(160.0));
            ui.label("Category");
            ui.add(
                egui::TextEdit::singleline(&mut agent.exercise_form.category).desired_width(140.0),
            );
            ui.label("Max pain threshold");
            ui.add(
                egui::DragValue::new(&mut agent.exercise_form.max_pain_threshold).range(0..=10),
            );
            if ui.button("Create").clicked() {
                agent.submit_exercise();
            }
        });
    });
}

fn render_record_list(agent: &mut TrainerAgent, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.label("Filter");
        ui.add(egui::TextEdit::singleline(&mut agent.record_filter).desired_width(200.0));
        ui.checkbox(&mut agent.group_by_exercise, "Group by exercise");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("Reload").clicked() {
                agent.load_records();
            }
        });
    });
    ui.add_space(DesignSystem::SPACING_SMALL);

    let filtered = filter_records(&agent.records, &agent.record_filter);
    if filtered.is_empty() {
        ui.label(egui::RichText::new("No matching records.").color(DesignSystem::TEXT_MUTED));
        return;
    }

    if agent.group_by_exercise {
        for (exercise, members) in group_by_exercise(&filtered) {
            ui.label(
                egui::RichText::new(exercise)
                    .strong()
                    .size(15.0)
                    .color(egui::Color32::GOLD),
            );
            records_table(ui, &members);
            ui.add_space(DesignSystem::SPACING_MEDIUM);
        }
    } else {
        records_table(ui, &filtered);
    }
}

fn records_table(ui: &mut egui::Ui, records: &[&TrainingRecord]) {
    egui::Grid::new(egui::Id::new("records_grid").with(records.first().map_or(0, |r| r.id)))
        .striped(true)
        .min_col_width(90.0)
        .spacing([20.0, 8.0])
        .show(ui, |ui| {
            for header in ["DATE", "EXERCISE", "SETS×REPS", "WEIGHT", "PAIN", "PAIN 24H", "NOTES"] {
                ui.label(
                    egui::RichText::new(header)
                        .small()
                        .strong()
                        .color(DesignSystem::TEXT_MUTED),
                );
            }
            ui.end_row();

            for record in records {
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
                ui.label(
                    egui::RichText::new(record.notes.as_deref().unwrap_or("—"))
                        .color(DesignSystem::TEXT_SECONDARY),
                );
                ui.end_row();
            }
        });
}
