pub mod types;
pub mod helpers;
pub mod logger;
pub mod canon;
pub mod quran_detector;
pub mod hadith_detector;
pub mod footnotes;
pub mod grouping;
pub mod concepts;
pub mod export;

use std::error::Error;
use std::fs::create_dir_all;
use std::path::PathBuf;

use app_dirs::{get_app_root, AppDataType, AppInfo};

pub const APP_INFO: AppInfo = AppInfo { name: "tahqiq", author: "tahqiq" };

/// App data dir for logs and local state, created on first use.
pub fn get_create_tahqiq_dir() -> Result<PathBuf, Box<dyn Error>> {
    let p = get_app_root(AppDataType::UserData, &APP_INFO)?;
    if !p.exists() {
        create_dir_all(&p)?;
    }
    Ok(p)
}
