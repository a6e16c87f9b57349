mod model;
mod repository;

pub use model::{Product, ProductStatus};
pub use repository::ProductRepository;
