//! Order domain entity

use chrono::{DateTime, Utc};

/// Lifecycle of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Complete,
    Canceled,
}

impl Default for OrderStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Complete => write!(f, "Complete"),
            Self::Canceled => write!(f, "Canceled"),
        }
    }
}

/// A member's booking of one product
#[derive(Debug, Clone)]
pub struct Order {
    pub id: i64,
    pub member_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub status: OrderStatus,
    pub order_date: DateTime<Utc>,
}

impl Order {
    pub fn is_cancelable(&self) -> bool {
        self.status == OrderStatus::Pending
    }
}
