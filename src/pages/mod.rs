//! Page components for ServiceDock.

mod landing;
mod section;

pub use landing::Landing;
pub use section::{Chats, News, Profile};
