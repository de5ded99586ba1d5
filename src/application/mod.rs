// UI agent - view state and backend request dispatch
pub mod agent;
