mod config;
mod error;
mod types;

pub use config::{Config, DbConfig};
pub use error::Error;
pub use types::{Reservation, ReservationStatus};
