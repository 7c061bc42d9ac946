//! Acknowledgement of a manually triggered poll.

use serde::{Deserialize, Serialize};

use crate::time::{Timestamp, lenient};

/// Body of a successful `POST /api/trigger-poll`.
///
/// Every field is optional so that a bare `{"ok": true}` (or `{}`) still
/// counts as an acknowledgement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollAck {
    pub ok: bool,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub last_poll: Option<Timestamp>,
}
