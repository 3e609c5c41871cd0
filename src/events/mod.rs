pub mod embed;
pub mod nav;
pub mod pointer;
pub mod scroll;

pub use embed::wire_embed_frame;
pub use nav::wire_navigation;
pub use pointer::wire_pointer_tracking;
pub use scroll::wire_scroll_tracking;
