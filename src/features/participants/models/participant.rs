use chrono::NaiveDate;
use sqlx::FromRow;

/// Database model for participant
#[derive(Debug, Clone, FromRow)]
pub struct Participant {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: NaiveDate,
    pub gender: String,
    pub city: String,
}
