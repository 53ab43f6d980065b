pub mod date;
pub mod dest;
pub mod media;
pub mod organize;
pub mod place;
