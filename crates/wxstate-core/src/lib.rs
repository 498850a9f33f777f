pub mod classifier;
pub mod minima;
pub mod models;

pub use classifier::{classify_flight_category, IMC_CEILING_FLOOR_FT, IMC_VISIBILITY_FLOOR_SM};
pub use minima::{AirportMinima, MinimaTable};
pub use models::{FlightCategory, WeatherObservation};
