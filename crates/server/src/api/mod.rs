pub mod error;
pub mod handlers;
pub mod matching;
pub mod middleware;
pub mod routes;

pub use error::{ApiError, ErrorResponse};
pub use routes::create_router;
