mod settings;

pub use settings::{Controller, Logger, Server, Settings};
