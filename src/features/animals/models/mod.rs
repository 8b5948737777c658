mod animal;

pub use animal::{Animal, NewAnimal};
