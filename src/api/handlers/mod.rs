//! HTTP request handlers for API endpoints.

pub mod delete;
pub mod generate;
pub mod health;
pub mod redirect;

pub use delete::delete_handler;
pub use generate::generate_handler;
pub use health::health_handler;
pub use redirect::redirect_handler;
