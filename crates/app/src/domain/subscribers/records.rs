//! Subscriber Records

use jiff::Timestamp;
use uuid::Uuid;

/// Status written on new subscriptions.
pub const ACTIVE_SUBSCRIBER_STATUS: &str = "active";

/// Subscriber Record
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriberRecord {
    pub uuid: Uuid,
    pub email: String,
    pub source: String,
    pub status: String,
    pub created_at: Timestamp,
}
