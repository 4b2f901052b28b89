pub mod compression;
pub mod constants;
pub mod errors;
pub mod models;
pub mod repositories;
pub mod services;

#[cfg(test)]
pub mod test_utils;
