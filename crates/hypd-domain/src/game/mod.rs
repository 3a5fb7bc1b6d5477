mod aggregate;
mod repository;

pub use aggregate::{Game, GameDraft};
pub use repository::GameRepository;
