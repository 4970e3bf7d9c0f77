pub mod dto;
pub mod repository;
pub mod service;

pub use dto::{ProductRequest, ProductResponse};
pub use repository::{ProductFields, ProductRepository, SeaOrmProductRepository};
pub use service::ProductService;

/// Image location derived from the catalog coordinates at write time;
/// callers never supply it. The same rule runs on create and update.
pub fn image_path(category: &str, brand: &str, model: &str) -> String {
    format!("images/{}/{}/{}.jpg", category, brand, model)
}
