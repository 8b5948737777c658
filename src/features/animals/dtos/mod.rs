mod animal_dto;

pub use animal_dto::*;
