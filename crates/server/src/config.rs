use std::{collections::HashMap, fs};

use crate::dispatcher::DispatcherConfig;

pub const DEFAULT_OWNER_EMAIL: &str = "dono@example.com";
pub const DEFAULT_FROM_ADDRESS: &str = "Surpresa de Amor <onboarding@resend.dev>";
pub const DEFAULT_RESEND_API_BASE: &str = "https://api.resend.com";

#[derive(Debug)]
pub struct Settings {
    pub server_bind: String,
    pub resend_api_key: String,
    pub resend_api_base: String,
    pub owner_email: String,
    pub from_address: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8787".into(),
            resend_api_key: String::new(),
            resend_api_base: DEFAULT_RESEND_API_BASE.into(),
            owner_email: DEFAULT_OWNER_EMAIL.into(),
            from_address: DEFAULT_FROM_ADDRESS.into(),
        }
    }
}

impl Settings {
    pub fn dispatcher_config(&self) -> DispatcherConfig {
        DispatcherConfig {
            owner_email: self.owner_email.clone(),
            from_address: self.from_address.clone(),
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("server.toml") {
        apply_file(&mut settings, &raw);
    }
    apply_env(&mut settings, |key| std::env::var(key).ok());

    settings
}

fn apply_file(settings: &mut Settings, raw: &str) {
    let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) else {
        return;
    };
    if let Some(v) = file_cfg.get("bind_addr") {
        settings.server_bind = v.clone();
    }
    if let Some(v) = file_cfg.get("resend_api_base") {
        settings.resend_api_base = v.clone();
    }
    if let Some(v) = file_cfg.get("owner_email") {
        settings.owner_email = v.clone();
    }
    if let Some(v) = file_cfg.get("from_address") {
        settings.from_address = v.clone();
    }
}

fn apply_env(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Some(v) = var("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Some(v) = var("RESEND_API_KEY") {
        settings.resend_api_key = v;
    }
    if let Some(v) = var("APP__RESEND_API_KEY") {
        settings.resend_api_key = v;
    }

    if let Some(v) = var("APP__RESEND_API_BASE") {
        settings.resend_api_base = v;
    }
    if let Some(v) = var("APP__OWNER_EMAIL") {
        settings.owner_email = v;
    }
    if let Some(v) = var("APP__FROM_ADDRESS") {
        settings.from_address = v;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
