use sqlx::FromRow;

/// Database model for sponsor
#[derive(Debug, Clone, FromRow)]
pub struct Sponsor {
    pub id: i64,
    pub name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub website: String,
    pub sector: String,
    pub description: String,
}
