// src/cli/show_config.rs
use crate::settings::io::get_config_path;
use crate::settings::BrowserConfig;

pub fn run(config: &BrowserConfig) {
    match get_config_path() {
        Ok(path) => println!("Settings file: {}", path.display()),
        Err(e) => println!("Settings file: unavailable ({})", e),
    }
    println!();
    println!("{:<22} {}", "page_size", config.page_size);
    println!("{:<22} {}", "api_base_url", config.api_base_url);
    println!("{:<22} {}", "request_timeout_secs", config.request_timeout_secs);
    println!("{:<22} {}", "start_page", config.start_page);
}
