// Application layer - Use cases and the ports they depend on
pub mod errors;
pub mod forecast_extractor;
pub mod forecast_service;
pub mod timezone_resolver;
pub mod upstream_gateway;

#[cfg(test)]
pub mod test_support;
