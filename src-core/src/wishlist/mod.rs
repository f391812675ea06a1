pub mod wishlist_model;
pub mod wishlist_service;

pub use wishlist_model::{ItemKind, NewWishlistItem, WishlistItem, WishlistItemUpdate};
pub use wishlist_service::WishlistService;
