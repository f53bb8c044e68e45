pub mod images;
pub mod metadata;

// Re-export all APIs
pub use images::ImageApi;
pub use metadata::MetadataApi;
