mod inception_service;

pub use inception_service::*;
