pub mod carousel;
pub mod config;
pub mod dom;
pub mod error;
pub mod net;

pub use carousel::{Carousel, CarouselEvent};
pub use config::CarouselConfig;
pub use error::CarouselError;
