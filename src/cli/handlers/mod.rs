pub mod config;
pub mod decode;
pub mod edit;
pub mod encode;
pub mod export;
pub mod extract;
pub mod inspect;
