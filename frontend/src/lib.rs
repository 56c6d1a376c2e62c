//! Appsite 管理控制台前端
//!
//! 业务状态全部在 `appsite_admin` 核心库中，这里只负责：
//! - `web`: 浏览器 API 适配（fetch / LocalStorage）
//! - `auth`: 认证闸门的信号与 Context
//! - `components`: UI 组件层

mod auth;
mod config;
mod components {
    pub mod dashboard;
    mod icons;
    pub mod layout;
    pub mod login;
    mod menu;
    pub mod placeholder;
    pub mod user_list;
}

use crate::auth::AuthContext;
use crate::components::dashboard::DashboardPage;
use crate::components::layout::MainLayout;
use crate::components::login::LoginPage;
use crate::components::placeholder::PlaceholderPage;
use crate::components::user_list::UserListPage;
use appsite_admin::{AuthView, Page};

use leptos::prelude::*;

// 原生 Web API 封装模块
// 直接基于 web-sys，不引入 gloo-* 系列 crate，以减小 WASM 二进制体积。
pub(crate) mod web {
    mod http;
    mod storage;

    pub use http::FetchClient;
    pub use storage::LocalStorage;
}

/// 页面匹配函数
///
/// 对 `Page` 做穷尽匹配，未实现的页面统一落到占位面板。
fn page_matcher(page: Page) -> AnyView {
    match page {
        Page::Dashboard => view! { <DashboardPage /> }.into_any(),
        Page::UserList => view! { <UserListPage /> }.into_any(),
        Page::Placeholder(key) => view! { <PlaceholderPage key=key /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建认证上下文（读取一次会话令牌）
    let auth_ctx = AuthContext::new(config::load_config());
    provide_context(auth_ctx);

    // 2. 闸门变化时在登录页与主布局之间切换
    let current = auth_ctx.view_memo();

    move || match current.get() {
        AuthView::Login => view! { <LoginPage /> }.into_any(),
        AuthView::MainLayout => view! { <MainLayout matcher=page_matcher /> }.into_any(),
    }
}
