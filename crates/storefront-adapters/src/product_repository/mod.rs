//! Product repository adapters.

mod memory;

pub use memory::InMemoryProductRepository;
