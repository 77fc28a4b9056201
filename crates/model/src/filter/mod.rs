pub mod coercion;
pub mod errors;
pub mod typed;
pub mod validator;
