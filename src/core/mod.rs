pub mod config;
pub mod literal;
pub mod numeral;
pub mod parser;
