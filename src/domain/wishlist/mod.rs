mod model;
mod repository;

pub use model::Wishlist;
pub use repository::WishlistRepository;
