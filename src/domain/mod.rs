// Domain layer - Value types and pure forecast computations
pub mod coordinate;
pub mod forecast;
pub mod interpolation;
pub mod local_time;
pub mod weather_payload;
