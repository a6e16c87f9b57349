//! SeaORM implementation of MemberRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use tracing::info;

use crate::domain::member::{Member, MemberRepository, Survey};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::member;

// ── Conversion helpers ──────────────────────────────────────────

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Validation(format!("Database error: {}", e))
}

fn entity_to_domain(m: member::Model) -> Member {
    let survey = match (m.survey_season, m.survey_theme, m.survey_companion) {
        (Some(season), Some(theme), Some(companion)) => Some(Survey {
            season,
            theme,
            companion,
        }),
        _ => None,
    };

    Member {
        id: m.id,
        email: m.email,
        name: m.name,
        password_hash: m.password_hash,
        roles: serde_json::from_str(&m.roles).unwrap_or_default(),
        deleted: m.deleted,
        survey,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn roles_to_json(roles: &[String]) -> String {
    serde_json::to_string(roles).unwrap_or_else(|_| "[]".to_string())
}

// ── SeaOrmMemberRepository ──────────────────────────────────────

pub struct SeaOrmMemberRepository {
    db: DatabaseConnection,
}

impl SeaOrmMemberRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MemberRepository for SeaOrmMemberRepository {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Member>> {
        let model = member::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<Member>> {
        let model = member::Entity::find()
            .filter(member::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_all_active(&self) -> DomainResult<Vec<Member>> {
        let models = member::Entity::find()
            .filter(member::Column::Deleted.eq(false))
            .order_by_asc(member::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn save(&self, m: Member) -> DomainResult<Member> {
        let now = Utc::now();
        let (season, theme, companion) = match m.survey {
            Some(s) => (Some(s.season), Some(s.theme), Some(s.companion)),
            None => (None, None, None),
        };
        let model = member::ActiveModel {
            id: NotSet,
            email: Set(m.email),
            name: Set(m.name),
            password_hash: Set(m.password_hash),
            roles: Set(roles_to_json(&m.roles)),
            deleted: Set(m.deleted),
            survey_season: Set(season),
            survey_theme: Set(theme),
            survey_companion: Set(companion),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!("Member saved: {} ({})", result.email, result.id);
        Ok(entity_to_domain(result))
    }

    async fn update(&self, m: Member) -> DomainResult<()> {
        let existing = member::Entity::find_by_id(m.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::NotFound {
                entity: "Member",
                field: "id",
                value: m.id.to_string(),
            });
        };

        let (season, theme, companion) = match m.survey {
            Some(s) => (Some(s.season), Some(s.theme), Some(s.companion)),
            None => (None, None, None),
        };
        let model = member::ActiveModel {
            id: Set(m.id),
            email: Set(m.email),
            name: Set(m.name),
            password_hash: Set(m.password_hash),
            roles: Set(roles_to_json(&m.roles)),
            deleted: Set(m.deleted),
            survey_season: Set(season),
            survey_theme: Set(theme),
            survey_companion: Set(companion),
            created_at: Set(existing.created_at),
            updated_at: Set(Utc::now()),
        };
        model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}
