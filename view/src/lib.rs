pub mod config;
pub mod error;
pub mod query;
pub mod render;
pub mod routes;

pub use config::ViewConfig;
pub use routes::router;
