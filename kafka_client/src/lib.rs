pub mod connection_settings;
pub mod consumer;
pub mod error_policy;
pub mod producer;
pub mod security_protocol;
#[cfg(test)]
mod test_utils;
