pub mod collector;
pub mod default;
pub mod error;
pub mod factory;
pub mod platform_configs;
pub mod platform_extractor;
pub mod platforms;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_utils;
