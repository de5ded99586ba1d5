pub mod card;
pub mod pain_badge;
