//! Admin member-management DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::member::Member;

/// Member row in the admin listing
#[derive(Debug, Serialize, ToSchema)]
pub struct MemberSummary {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub roles: Vec<String>,
    pub has_survey: bool,
    pub created_at: DateTime<Utc>,
}

impl MemberSummary {
    pub fn from_member(m: Member) -> Self {
        Self {
            id: m.id,
            email: m.email,
            name: m.name,
            roles: m.roles,
            has_survey: m.survey.is_some(),
            created_at: m.created_at,
        }
    }
}
