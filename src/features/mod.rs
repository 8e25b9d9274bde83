pub mod hazards;
pub mod news;
