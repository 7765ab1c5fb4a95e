// Adapters layer: concrete employee sources the facade can sit in front of.

pub mod http_source;
pub mod memory_source;

pub use http_source::HttpEmployeeSource;
pub use memory_source::InMemoryEmployeeSource;
