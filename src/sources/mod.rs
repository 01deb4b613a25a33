pub mod base;
pub mod mock;
pub mod file;
pub mod http;
