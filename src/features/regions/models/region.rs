use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for a region row
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Region {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub image_url: Option<String>,
    #[allow(dead_code)]
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a region. `id` is assigned by the store when unset.
#[derive(Debug, Clone, Default)]
pub struct NewRegion {
    pub id: Option<Uuid>,
    pub code: String,
    pub name: String,
    pub image_url: Option<String>,
}
