pub mod geocode;
pub mod nws;
