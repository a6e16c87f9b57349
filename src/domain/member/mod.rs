mod model;
mod repository;

pub use model::{Member, Survey, ADMIN_ROLE};
pub use repository::MemberRepository;
