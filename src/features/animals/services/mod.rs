mod animal_service;

pub use animal_service::AnimalService;
