use sqlx::FromRow;

/// Database model for venue
#[derive(Debug, Clone, FromRow)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub capacity: i32,
    pub contact_phone: String,
}
