pub mod poller;
pub mod routes;

pub use poller::ApiPoller;
pub use routes::{ApiRoutes, MESSAGE_PATH};
