//! 前端配置加载
//!
//! 服务端可以通过 `<meta name="appsite:api-base" content="...">` 注入后端地址，
//! 未注入时与页面同源。

use appsite_admin::ConsoleConfig;
use wasm_bindgen::JsCast;

const META_API_BASE: &str = "appsite:api-base";

pub fn load_config() -> ConsoleConfig {
    let config = ConsoleConfig::default();

    match meta_content(META_API_BASE) {
        Some(base) if !base.trim().is_empty() => config.with_api_base(&base),
        _ => config,
    }
}

/// 读取 `<meta name="...">` 的 content
fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", name);
    document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
        .map(|meta| meta.content())
}
