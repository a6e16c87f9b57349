//! SeaORM implementation of OrderRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use tracing::info;

use crate::domain::order::{Order, OrderRepository, OrderStatus};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::order;

// ── Conversion helpers ──────────────────────────────────────────

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Validation(format!("Database error: {}", e))
}

fn entity_to_domain(o: order::Model) -> Order {
    Order {
        id: o.id,
        member_id: o.member_id,
        product_id: o.product_id,
        quantity: o.quantity,
        status: match o.status {
            order::OrderStatus::Pending => OrderStatus::Pending,
            order::OrderStatus::Complete => OrderStatus::Complete,
            order::OrderStatus::Canceled => OrderStatus::Canceled,
        },
        order_date: o.order_date,
    }
}

fn status_to_entity(s: OrderStatus) -> order::OrderStatus {
    match s {
        OrderStatus::Pending => order::OrderStatus::Pending,
        OrderStatus::Complete => order::OrderStatus::Complete,
        OrderStatus::Canceled => order::OrderStatus::Canceled,
    }
}

// ── SeaOrmOrderRepository ───────────────────────────────────────

pub struct SeaOrmOrderRepository {
    db: DatabaseConnection,
}

impl SeaOrmOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderRepository for SeaOrmOrderRepository {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Order>> {
        let model = order::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_by_member(&self, member_id: i64) -> DomainResult<Vec<Order>> {
        let models = order::Entity::find()
            .filter(order::Column::MemberId.eq(member_id))
            .order_by_desc(order::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn save(&self, o: Order) -> DomainResult<Order> {
        let model = order::ActiveModel {
            id: NotSet,
            member_id: Set(o.member_id),
            product_id: Set(o.product_id),
            quantity: Set(o.quantity),
            status: Set(status_to_entity(o.status)),
            order_date: Set(o.order_date),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!(
            "Order saved: member={} product={} ({})",
            result.member_id, result.product_id, result.id
        );
        Ok(entity_to_domain(result))
    }

    async fn update(&self, o: Order) -> DomainResult<()> {
        let model = order::ActiveModel {
            id: Set(o.id),
            member_id: Set(o.member_id),
            product_id: Set(o.product_id),
            quantity: Set(o.quantity),
            status: Set(status_to_entity(o.status)),
            order_date: Set(o.order_date),
        };
        model.update(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}
