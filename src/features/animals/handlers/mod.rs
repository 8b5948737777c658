mod animal_handler;

pub use animal_handler::*;
