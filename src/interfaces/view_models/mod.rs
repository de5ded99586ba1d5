pub mod records_view_model;
pub mod trends_view_model;
