// Infrastructure layer - External dependencies and adapters
pub mod cache_store;
pub mod config;
pub mod http_gateway;
pub mod http_response;
pub mod tz_lookup;
