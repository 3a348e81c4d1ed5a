mod auth_handle;
mod control_handle;
mod door_handle;
mod output_handle;

pub use auth_handle::*;
pub use control_handle::*;
pub use door_handle::*;
pub use output_handle::*;
