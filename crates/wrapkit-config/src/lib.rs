pub mod appearance;
pub mod color;
pub mod preferences;

pub use appearance::Appearance;
pub use color::HexColor;
pub use preferences::{resolve_data_dir, PreferenceStore};
