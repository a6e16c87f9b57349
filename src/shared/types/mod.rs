pub mod errors;
pub mod pagination;

pub use errors::{DomainError, DomainResult};
pub use pagination::{paginate, PageRequest, PageResult};
