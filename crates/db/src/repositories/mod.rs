pub mod catalog_repo;
pub mod inquiry_repo;

pub use catalog_repo::CatalogRepo;
pub use inquiry_repo::InquiryRepo;
