/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Activity days are calendar dates with no time component, interpreted
/// in the reference timezone the client reports them in.
pub type ActivityDate = chrono::NaiveDate;
