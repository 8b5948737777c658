mod validator;

pub mod model;

pub use validator::TokenValidator;
