use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};

use crate::Error;

/// One reservation document in the `reservations` collection.
///
/// `id` is `None` until the repository persists the document; it is assigned
/// exactly once at creation time and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reservation {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: String,
    pub resource_id: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub start: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub end: DateTime<Utc>,
    pub note: String,
    pub status: ReservationStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Blocked,
}

impl Reservation {
    pub fn new_pending(
        uid: impl Into<String>,
        rid: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            user_id: uid.into(),
            resource_id: rid.into(),
            start,
            end,
            note: note.into(),
            status: ReservationStatus::Pending,
        }
    }

    /// Field-level schema checks. Callers decide when to run them; the data
    /// layer itself never does.
    pub fn validate(&self) -> Result<(), Error> {
        if self.user_id.is_empty() {
            return Err(Error::InvalidUserId(self.user_id.clone()));
        }
        if self.resource_id.is_empty() {
            return Err(Error::InvalidResourceId(self.resource_id.clone()));
        }
        if self.start >= self.end {
            return Err(Error::InvalidTime);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice_reservation() -> Reservation {
        Reservation::new_pending(
            "aliceid",
            "ocean-view-room-713",
            "2026-12-25T15:00:00Z".parse().unwrap(),
            "2026-12-28T12:00:00Z".parse().unwrap(),
            "I need to book this for the xyz project.",
        )
    }

    #[test]
    fn new_pending_should_have_no_id_and_pending_status() {
        let rsvp = alice_reservation();
        assert!(rsvp.id.is_none());
        assert_eq!(rsvp.status, ReservationStatus::Pending);
        assert!(rsvp.validate().is_ok());
    }

    #[test]
    fn validate_should_reject_empty_user_id() {
        let mut rsvp = alice_reservation();
        rsvp.user_id = "".to_string();
        assert_eq!(rsvp.validate().unwrap_err(), Error::InvalidUserId("".into()));
    }

    #[test]
    fn validate_should_reject_empty_resource_id() {
        let mut rsvp = alice_reservation();
        rsvp.resource_id = "".to_string();
        assert_eq!(
            rsvp.validate().unwrap_err(),
            Error::InvalidResourceId("".into())
        );
    }

    #[test]
    fn validate_should_reject_inverted_window() {
        let mut rsvp = alice_reservation();
        std::mem::swap(&mut rsvp.start, &mut rsvp.end);
        assert_eq!(rsvp.validate().unwrap_err(), Error::InvalidTime);
    }

    #[test]
    fn status_should_serialize_lowercase() {
        let doc = mongodb::bson::to_document(&alice_reservation()).unwrap();
        assert_eq!(doc.get_str("status").unwrap(), "pending");
        // no _id key until the repository assigns one
        assert!(!doc.contains_key("_id"));
    }
}
