pub mod career;
pub mod chat;
pub mod evaluation;
pub mod listing;
pub mod profile;
pub mod roadmap;
