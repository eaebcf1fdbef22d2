mod registry;

#[cfg(test)]
pub use registry::MockRegistryTrait;
pub use registry::{RegistryTrait, ShortUrlRegistry};
