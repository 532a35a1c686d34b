//! HTTP request handlers for API endpoints.

pub mod create;
pub mod health;
pub mod list;
pub mod redirect;

pub use create::create_url_handler;
pub use health::health_handler;
pub use list::list_urls_handler;
pub use redirect::redirect_handler;
