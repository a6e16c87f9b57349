//! Authentication DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::member::{Member, Survey};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(email(message = "invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, max = 50, message = "name must be 1-50 characters"))]
    pub name: String,
    #[validate(length(min = 8, max = 128, message = "password must be 8-128 characters"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub member: MemberInfo,
}

/// Travel-preference survey payload; all three dimensions are set together.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SurveyRequest {
    #[validate(length(min = 1, max = 30, message = "season is required"))]
    pub season: String,
    #[validate(length(min = 1, max = 30, message = "theme is required"))]
    pub theme: String,
    #[validate(length(min = 1, max = 30, message = "companion is required"))]
    pub companion: String,
}

impl SurveyRequest {
    pub fn into_survey(self) -> Survey {
        Survey {
            season: self.season,
            theme: self.theme,
            companion: self.companion,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SurveyInfo {
    pub season: String,
    pub theme: String,
    pub companion: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MemberInfo {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub roles: Vec<String>,
    pub survey: Option<SurveyInfo>,
}

impl MemberInfo {
    pub fn from_member(m: Member) -> Self {
        Self {
            id: m.id,
            email: m.email,
            name: m.name,
            roles: m.roles,
            survey: m.survey.map(|s| SurveyInfo {
                season: s.season,
                theme: s.theme,
                companion: s.companion,
            }),
        }
    }
}
