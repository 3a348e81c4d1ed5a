mod session_middleware;

pub use session_middleware::*;
