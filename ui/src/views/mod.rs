mod gallery;
mod home;

pub use gallery::GalleryPage;
pub use home::Home;
