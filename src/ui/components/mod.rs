pub mod gauge;

pub use gauge::{humidity_gauge, rain_gauge, temperature_gauge};
