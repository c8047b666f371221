pub mod analyses;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod torrents;

pub use handlers::ErrorResponse;
pub use routes::create_router;
