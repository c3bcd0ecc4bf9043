//! Activity-day DTOs.
//!
//! Activity rows carry no payload beyond the date itself, so the repository
//! works with scalar `ActivityDate` values rather than a row struct.

use serde::{Deserialize, Serialize};

use sattva_core::types::ActivityDate;

/// DTO for marking a day as active. The date is optional; the API falls
/// back to the server's UTC date when omitted.
#[derive(Debug, Deserialize)]
pub struct MarkActivity {
    pub date: Option<String>,
}

/// One day in an activity view (7-day window, consistency calendar).
#[derive(Debug, Clone, Serialize)]
pub struct DayActivity {
    pub date: ActivityDate,
    pub active: bool,
}
