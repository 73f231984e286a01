pub mod error;
pub mod logging;
pub mod strip;
pub mod weather;

pub use error::{StripError, WeatherError};
