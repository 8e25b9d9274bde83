mod hazard_dto;

pub use hazard_dto::*;
