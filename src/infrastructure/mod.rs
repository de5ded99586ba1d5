pub mod factory;
pub mod http_client_factory;
pub mod mock;
pub mod rest_api;

pub use factory::ServiceFactory;
