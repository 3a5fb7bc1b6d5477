pub mod bootstrap;
pub mod error;
pub mod extract;
pub mod http;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::build_router;
pub use state::AppState;
