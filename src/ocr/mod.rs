pub mod engine;
pub mod preprocess;
pub mod setup;

pub use engine::TessEngine;
pub use setup::find_tesseract;
