use crate::application::agent::TrainerAgent;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

pub fn render_chat(agent: &mut TrainerAgent, ui: &mut egui::Ui) {
    ui.heading("Log a session");
    ui.label(
        egui::RichText::new("Describe your training in plain words, e.g. 'leg press 3x10 40kg pain 2'")
            .color(DesignSystem::TEXT_SECONDARY),
    );
    ui.add_space(DesignSystem::SPACING_MEDIUM);

    // Chat History
    egui::ScrollArea::vertical()
        .auto_shrink([false, true])
        .max_height(ui.available_height() - 50.0) // Leave room for input
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for (sender, msg) in &agent.chat_history {
                ui.horizontal_wrapped(|ui| {
                    let (label_text, color) = match sender.as_str() {
                        "User" => ("You >", egui::Color32::from_rgb(100, 200, 255)),
                        "Coach" => ("Coach <", egui::Color32::from_rgb(255, 200, 100)),
                        "System" => ("System :", DesignSystem::TEXT_SECONDARY),
                        _ => (sender.as_str(), egui::Color32::WHITE),
                    };

                    ui.label(egui::RichText::new(label_text).strong().color(color));
                    ui.label(egui::RichText::new(msg).color(egui::Color32::from_gray(220)));
                });
            }

            if agent.sending_chat {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(
                        egui::RichText::new("thinking…").color(DesignSystem::TEXT_MUTED),
                    );
                });
            }
        });

    ui.separator();

    // Input Area
    ui.horizontal(|ui| {
        ui.label("Msg >");
        let response = ui.add(
            egui::TextEdit::singleline(&mut agent.chat_input).desired_width(f32::INFINITY),
        );

        if agent.chat_focused {
            response.request_focus();
            agent.chat_focused = false;
        }

        if ui.button("Send").clicked()
            || (response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)))
        {
            agent.send_chat();
            agent.chat_focused = true; // Refocus after send
        }
    });
}
