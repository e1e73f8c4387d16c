pub mod background;
pub mod color;
pub mod config;
pub mod constants;
pub mod field;
pub mod input;
pub mod orb;
pub mod render_loop;
pub mod scheduler;
pub mod surface;

pub use background::*;
pub use color::*;
pub use config::*;
pub use field::*;
pub use input::*;
pub use orb::*;
pub use render_loop::*;
pub use scheduler::*;
pub use surface::*;
