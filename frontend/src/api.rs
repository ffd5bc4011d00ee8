//! 网关上下文
//!
//! 只在 Context 中保存配置；需要调用后端时按需构造网关，
//! 浏览器适配器都是零大小类型，构造代价可以忽略。
//! 配置放在 `StoredValue` 里，句柄本身是 `Copy`，可以随意移入闭包。

use crate::web::{BrowserStorage, GlooHttpClient};
use civicsync::config::{ENV_VAR_API_URL, ENV_VAR_ENVIRONMENT};
use civicsync::{AppConfig, CivicApi, SessionStore};
use leptos::prelude::*;

pub type BrowserApi = CivicApi<GlooHttpClient, BrowserStorage>;

/// 编译期注入的配置（`CIVICSYNC_ENV` / `CIVICSYNC_API_URL`）
pub fn build_config() -> AppConfig {
    AppConfig::from_lookup(|key| match key {
        ENV_VAR_ENVIRONMENT => option_env!("CIVICSYNC_ENV").map(str::to_string),
        ENV_VAR_API_URL => option_env!("CIVICSYNC_API_URL").map(str::to_string),
        _ => None,
    })
}

#[derive(Clone, Copy)]
pub struct ApiContext {
    config: StoredValue<AppConfig>,
}

impl ApiContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    pub fn gateway(&self) -> BrowserApi {
        let credentials = SessionStore::new(BrowserStorage).reader();
        self.config
            .with_value(|config| CivicApi::new(GlooHttpClient, config, credentials))
    }
}

pub fn use_api() -> ApiContext {
    use_context::<ApiContext>().expect("ApiContext should be provided by App")
}
