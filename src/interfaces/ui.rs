use crate::application::agent::{TrainerAgent, View};
use crate::config::Mode;
use crate::interfaces::chat_view::render_chat;
use crate::interfaces::dashboard::render_dashboard;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::records_view::render_records;
use crate::interfaces::trends_view::render_trends;
use chrono::Utc;
use eframe::egui;

const NAV_ITEMS: [(View, &str); 4] = [
    (View::Dashboard, "Dashboard"),
    (View::Chat, "Chat"),
    (View::Records, "Log editor"),
    (View::Trends, "Trends"),
];

impl eframe::App for TrainerAgent {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(DesignSystem::theme());

        // Drain finished requests and forwarded log lines.
        self.poll_events();

        // --- Top Status Bar ---
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("RehabTrack");
                ui.separator();
                ui.label(format!("Time (UTC): {}", Utc::now().format("%H:%M:%S")));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let (label, color) = match self.config.mode {
                        Mode::Mock => ("● MOCK", DesignSystem::WARNING),
                        Mode::Live => ("● LIVE", DesignSystem::SUCCESS),
                    };
                    ui.label(egui::RichText::new(label).color(color).small());
                });
            });
        });

        // --- Error Banner ---
        if self.last_error.is_some() {
            egui::TopBottomPanel::top("error_banner").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let message = self.last_error.clone().unwrap_or_default();
                    ui.colored_label(DesignSystem::DANGER, message);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("Dismiss").clicked() {
                            self.last_error = None;
                        }
                    });
                });
            });
        }

        // --- Left Navigation & Activity Feed ---
        egui::SidePanel::left("nav_panel")
            .default_width(220.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(DesignSystem::SPACING_SMALL);
                for (view, label) in NAV_ITEMS {
                    let selected = self.active_view == view;
                    if ui
                        .selectable_label(selected, egui::RichText::new(label).size(15.0))
                        .clicked()
                    {
                        self.active_view = view;
                        if view == View::Chat {
                            self.chat_focused = true;
                        }
                    }
                }

                ui.add_space(DesignSystem::SPACING_MEDIUM);
                ui.separator();
                ui.label(
                    egui::RichText::new("Activity")
                        .small()
                        .color(DesignSystem::TEXT_MUTED),
                );
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for line in &self.activity_log {
                            ui.label(
                                egui::RichText::new(line)
                                    .small()
                                    .color(DesignSystem::TEXT_SECONDARY),
                            );
                        }
                    });
            });

        // --- Central Panel ---
        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| match self.active_view {
                        View::Dashboard => render_dashboard(self, ui),
                        View::Chat => render_chat(self, ui),
                        View::Records => render_records(self, ui),
                        View::Trends => render_trends(self, ui),
                    });
            });

        // Force frequent repaints so polled responses show up promptly
        ctx.request_repaint();
    }
}
