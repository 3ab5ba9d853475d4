//! Photo gallery: endpoint client, grid view and lightbox.

mod client;
mod lightbox;
mod view;

pub use client::{GalleryClient, GalleryState, ViewerMode};
pub use lightbox::{wrap_index, Lightbox, ViewerKey};
pub use view::Gallery;
