//! Page behaviors of the site: header, mobile navigation, anchors, reveal
//! animations and lazy images. Each behavior is a [`Handler`] subscribed to a
//! single [`EventSource`] and acts on the elements it was given.

mod anchor;
mod dom;
mod event;
mod header;
mod intersection;
mod lazy_image;
mod nav;
mod page;
mod reveal;
mod tracking;

pub use anchor::*;
pub use dom::*;
pub use event::*;
pub use header::*;
pub use intersection::*;
pub use lazy_image::*;
pub use nav::*;
pub use page::*;
pub use reveal::*;
pub use tracking::*;
