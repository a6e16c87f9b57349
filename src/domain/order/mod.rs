mod model;
mod repository;

pub use model::{Order, OrderStatus};
pub use repository::OrderRepository;
