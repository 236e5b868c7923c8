mod loader;
mod models;

pub use loader::{load_categories, load_listings};
pub use models::{Category, ExistingListing, Subcategory};
