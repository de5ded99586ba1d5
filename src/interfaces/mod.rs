pub mod chat_view;
pub mod components;
pub mod dashboard;
pub mod design_system;
pub mod records_view;
pub mod trends_view;
pub mod ui;
pub mod view_models;
