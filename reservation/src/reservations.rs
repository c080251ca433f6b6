use std::ops::Deref;

use mongodb::bson::oid::ObjectId;
use mongodb::Database;

use abi::Reservation;

use crate::{Document, Repository};

impl Document for Reservation {
    const COLLECTION: &'static str = "reservations";

    fn id(&self) -> Option<ObjectId> {
        self.id
    }

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }
}

/// Reservation-specific binding of the generic repository. Supplies the
/// collection and the log label, nothing else.
#[derive(Debug, Clone)]
pub struct ReservationRepository {
    repo: Repository<Reservation>,
}

impl ReservationRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            repo: Repository::new(db, "reservation"),
        }
    }
}

impl Deref for ReservationRepository {
    type Target = Repository<Reservation>;

    fn deref(&self) -> &Self::Target {
        &self.repo
    }
}
