pub mod pointer;
pub mod resize;

pub use pointer::wire_hover;
pub use resize::{cube_view_size, globe_view_size, wire_resize};
