use std::env;
use std::path::PathBuf;
use crate::constants::paths::STORE_DIR;
use crate::index::IndexType;
use crate::{info, warn};

pub struct Config {
    pub index_type: IndexType,
    pub store_dir: PathBuf,
    pub trace: bool,
}

impl Config {
    pub fn new() -> Self {
        let index_type = match env::var("INDEX_TYPE") {
            Ok(value) => match value.parse::<IndexType>() {
                Ok(index_type) => {
                    info!("The index type was set to: {} using the environment variable \"INDEX_TYPE\"", value);
                    index_type
                }
                Err(err) => {
                    warn!("{}, setting the index type to \"LinHashMap\"", err);
                    IndexType::LinHashMap
                }
            },
            Err(_) => {
                info!("The index type was not set using the environment variable \"INDEX_TYPE\", setting it to \"LinHashMap\"");
                IndexType::LinHashMap
            }
        };

        let store_dir = match env::var("STORE_DIR") {
            Ok(value) => {
                info!("The store directory was set to: {} using the environment variable \"STORE_DIR\"", value);
                PathBuf::from(value)
            }
            Err(_) => {
                info!("The store directory was not set using the environment variable \"STORE_DIR\", setting it to \"{}\"", STORE_DIR);
                PathBuf::from(STORE_DIR)
            }
        };

        let trace = match env::var("TRACE") {
            Ok(value) => {
                let on = value == "1" || value.eq_ignore_ascii_case("true");
                info!("Tracing was set to: {} using the environment variable \"TRACE\"", on);
                on
            }
            Err(_) => false,
        };

        Self { index_type, store_dir, trace }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
