pub mod image_io;
pub mod overlay;

pub use image_io::{list_images, load_raster, raster_from_dynamic};
pub use overlay::{render_overlay, save_overlay};
