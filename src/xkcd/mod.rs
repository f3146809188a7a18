pub mod comic;
pub mod page;

pub use comic::ComicRecord;
pub use page::{find_comic_image, ComicImage};
