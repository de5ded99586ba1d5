use crate::application::agent::TrainerAgent;
use crate::domain::analysis::{summarize, to_series, SeriesPoint};
use crate::interfaces::components::card::stat_card;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::trends_view_model::TrendCards;
use eframe::egui;
use egui_plot::{Bar, BarChart, Legend, Line, Plot};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn render_trends(agent: &mut TrainerAgent, ui: &mut egui::Ui) {
    ui.heading("Trends & progress");
    ui.label(
        egui::RichText::new("Load vs. pain over time, per exercise")
            .color(DesignSystem::TEXT_SECONDARY),
    );
    ui.add_space(DesignSystem::SPACING_MEDIUM);

    render_exercise_selector(agent, ui);
    ui.add_space(DesignSystem::SPACING_MEDIUM);

    let series: Vec<SeriesPoint> = to_series(&agent.trend_records).collect();
    let summary = summarize(&agent.trend_records);

    render_summary_cards(&TrendCards::from_summary(&summary), ui);
    ui.add_space(DesignSystem::SPACING_MEDIUM);

    render_chart(agent, &series, ui);
    ui.add_space(DesignSystem::SPACING_LARGE);

    render_monthly_report(agent, ui);
}

fn render_exercise_selector(agent: &mut TrainerAgent, ui: &mut egui::Ui) {
    if agent.exercises.is_empty() {
        ui.label(
            egui::RichText::new("No exercises yet. Create one in the log editor.")
                .color(DesignSystem::TEXT_MUTED),
        );
        return;
    }

    let tabs: Vec<(uuid::Uuid, String)> = agent
        .exercises
        .iter()
        .map(|e| (e.id, format!("{} ({})", e.name, e.category)))
        .collect();

    let mut clicked = None;
    ui.horizontal(|ui| {
        for (id, label) in &tabs {
            let is_selected = agent.selected_exercise == Some(*id);
            if ui.selectable_label(is_selected, label).clicked() && !is_selected {
                clicked = Some(*id);
            }
        }
    });
    if let Some(id) = clicked {
        agent.select_trend_exercise(id);
    }
}

fn render_summary_cards(cards: &TrendCards, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        stat_card(ui, "Sessions", &cards.sessions, None);
        stat_card(ui, "Max volume", &cards.max_volume, None);

        let pain_accent = cards.average_band.map(DesignSystem::band_color);
        stat_card(ui, "Average pain", &cards.average_pain, pain_accent);

        let (arrow, color) = DesignSystem::direction_badge(cards.direction);
        stat_card(
            ui,
            "Trend",
            &format!("{} {}", arrow, cards.direction_label),
            Some(color),
        );
    });
}

fn render_chart(agent: &TrainerAgent, series: &[SeriesPoint], ui: &mut egui::Ui) {
    DesignSystem::card_frame().show(ui, |ui| {
        ui.label(
            egui::RichText::new("Volume vs. pain")
                .strong()
                .size(16.0)
                .color(DesignSystem::TEXT_PRIMARY),
        );
        ui.add_space(DesignSystem::SPACING_SMALL);

        if agent.loading_trend {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(egui::RichText::new("loading…").color(DesignSystem::TEXT_MUTED));
            });
            return;
        }
        if series.is_empty() {
            ui.label(
                egui::RichText::new("Not enough data to chart yet.")
                    .color(DesignSystem::TEXT_MUTED),
            );
            return;
        }

        if let (Some(first), Some(last)) = (series.first(), series.last()) {
            ui.label(
                egui::RichText::new(format!("{} — {}", first.label, last.label))
                    .small()
                    .color(DesignSystem::TEXT_MUTED),
            );
        }

        // Volume bars and pain lines use different scales (kg vs. 0-10),
        // so they get stacked plots instead of a fake shared axis.
        let bars: Vec<Bar> = series
            .iter()
            .enumerate()
            .map(|(i, point)| Bar::new(i as f64, point.volume).width(0.6))
            .collect();

        Plot::new("trend_volume_plot")
            .height(200.0)
            .show_grid([true, true])
            .legend(Legend::default())
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(
                    BarChart::new("Volume (kg)", bars).color(DesignSystem::VOLUME_BAR),
                );
            });

        ui.add_space(DesignSystem::SPACING_SMALL);

        let intra_points: Vec<[f64; 2]> = series
            .iter()
            .enumerate()
            .map(|(i, point)| [i as f64, point.pain_during as f64])
            .collect();

        Plot::new("trend_pain_plot")
            .height(160.0)
            .include_y(0.0)
            .include_y(10.0)
            .show_grid([true, true])
            .legend(Legend::default())
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new("Pain intra", intra_points)
                        .color(DesignSystem::PAIN_LINE)
                        .width(2.0),
                );

                // 24h pain has gaps while follow-ups are pending; each
                // contiguous run becomes its own segment.
                for (run_idx, run) in next_day_runs(series).into_iter().enumerate() {
                    plot_ui.line(
                        Line::new(if run_idx == 0 { "Pain 24h" } else { "" }, run)
                            .color(DesignSystem::PAIN_24H_LINE)
                            .width(1.5),
                    );
                }
            });
    });
}

/// Split the 24h-pain series into contiguous runs around absent values.
fn next_day_runs(series: &[SeriesPoint]) -> Vec<Vec<[f64; 2]>> {
    let mut runs = Vec::new();
    let mut current: Vec<[f64; 2]> = Vec::new();
    for (i, point) in series.iter().enumerate() {
        match point.pain_next_day {
            Some(pain) => current.push([i as f64, pain as f64]),
            None => {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

fn render_monthly_report(agent: &mut TrainerAgent, ui: &mut egui::Ui) {
    DesignSystem::card_frame().show(ui, |ui| {
        ui.label(
            egui::RichText::new("Monthly report")
                .strong()
                .size(16.0)
                .color(DesignSystem::TEXT_PRIMARY),
        );
        ui.add_space(DesignSystem::SPACING_SMALL);

        ui.horizontal(|ui| {
            ui.label("Year");
            ui.add(egui::DragValue::new(&mut agent.report_year).range(2020..=2035));
            ui.label("Month");
            egui::ComboBox::from_id_salt("report_month")
                .selected_text(MONTH_NAMES[(agent.report_month - 1) as usize])
                .show_ui(ui, |ui| {
                    for (i, name) in MONTH_NAMES.iter().enumerate() {
                        ui.selectable_value(&mut agent.report_month, i as u32 + 1, *name);
                    }
                });

            if agent.loading_report {
                ui.spinner();
            } else if ui.button("Generate").clicked() {
                agent.load_report();
            }
        });

        if let Some(report) = &agent.report {
            ui.add_space(DesignSystem::SPACING_SMALL);
            ui.separator();
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("Period {}", report.period))
                        .strong()
                        .color(DesignSystem::TEXT_PRIMARY),
                );
                ui.separator();
                ui.label(format!("{} exercises", report.exercises_analyzed));
                ui.separator();
                ui.label(format!("{} sessions", report.total_sessions));
            });
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(&report.summary_text).color(DesignSystem::TEXT_SECONDARY),
            );
        }
    });
}
