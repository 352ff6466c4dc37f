pub mod models;
pub mod patch;

pub use models::*;
pub use patch::{PlayerPatch, SettingsPatch};
