//! Request context carrying the authenticated identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Context for the current authenticated request.
///
/// Extracted by the API layer from the verified identity token and passed
/// into every service method, so each operation knows *who* is acting.
/// There is no ambient session: identity travels explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated identity's id (the profile primary key).
    pub user_id: Uuid,
    /// The username carried in the token claims.
    pub username: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, username: String) -> Self {
        Self {
            user_id,
            username,
            request_time: Utc::now(),
        }
    }
}
