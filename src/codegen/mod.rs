pub mod asset;
pub mod builder;

// Re-export commonly used items
pub use asset::check_asset_node;
pub use builder::Converter;
