mod reservation;

pub use reservation::{Reservation, ReservationStatus};
