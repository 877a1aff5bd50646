/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar dates (event dates, deadlines) carry no time-of-day or zone.
pub type CalendarDate = chrono::NaiveDate;
