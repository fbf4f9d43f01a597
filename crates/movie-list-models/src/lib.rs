pub mod movie;

pub use movie::{Movie, TMDB_IMAGE_BASE_URL};
