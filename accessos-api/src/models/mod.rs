mod area;
mod door;
mod event;
mod input;
mod output;
mod session;
mod site;
mod user;

pub use area::*;
pub use door::*;
pub use event::*;
pub use input::*;
pub use output::*;
pub use session::*;
pub use site::*;
pub use user::*;

/// Controller-assigned identifier. The simulator and the dashboard sample use
/// short slugs, real controllers hand out GUIDs.
pub type Id = String;
