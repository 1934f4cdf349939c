pub mod jwt;
pub mod settings;
pub mod stripe;
