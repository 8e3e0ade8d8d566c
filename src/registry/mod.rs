pub mod registry;

pub use registry::AccountNumberRegistry;
