pub mod config;

pub use config::{
    get_api_url, get_token, get_user_id, load_config, load_config_from, save_config,
    save_config_to, Config,
};
