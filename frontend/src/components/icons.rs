//! 内联 SVG 图标（Lucide 风格）
//!
//! `MenuIcon` 负责把核心库解析出的 `IconKind` 画出来；
//! 其余组件是界面框架自身使用的固定图标。

use appsite_admin::IconKind;
use leptos::prelude::*;

const CIRCLE: &[&str] = &["M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20"];
const HOME: &[&str] = &["m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z", "M9 22V12h6v10"];
const DASHBOARD: &[&str] = &["M3 3h7v9H3z", "M14 3h7v5h-7z", "M14 12h7v9h-7z", "M3 16h7v5H3z"];
const USERS: &[&str] = &[
    "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
    "M9 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8",
    "M22 21v-2a4 4 0 0 0-3-3.87",
    "M16 3.13a4 4 0 0 1 0 7.75",
];
const USER: &[&str] = &[
    "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2",
    "M12 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8",
];
const SETTINGS: &[&str] = &[
    "M12 9a3 3 0 1 0 0 6a3 3 0 1 0 0-6",
    "M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 1 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-1.82-.33 1.65 1.65 0 0 0-1 1.51V21a2 2 0 1 1-4 0v-.09A1.65 1.65 0 0 0 9 19.4a1.65 1.65 0 0 0-1.82.33l-.06.06a2 2 0 1 1-2.83-2.83l.06-.06A1.65 1.65 0 0 0 4.68 15a1.65 1.65 0 0 0-1.51-1H3a2 2 0 1 1 0-4h.09A1.65 1.65 0 0 0 4.6 9a1.65 1.65 0 0 0-.33-1.82l-.06-.06a2 2 0 1 1 2.83-2.83l.06.06A1.65 1.65 0 0 0 9 4.68a1.65 1.65 0 0 0 1-1.51V3a2 2 0 1 1 4 0v.09a1.65 1.65 0 0 0 1 1.51 1.65 1.65 0 0 0 1.82-.33l.06-.06a2 2 0 1 1 2.83 2.83l-.06.06A1.65 1.65 0 0 0 19.4 9a1.65 1.65 0 0 0 1.51 1H21a2 2 0 1 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1z",
];
const FILE_TEXT: &[&str] = &[
    "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z",
    "M14 2v6h6",
    "M16 13H8",
    "M16 17H8",
    "M10 9H8",
];
const PHOTO: &[&str] = &[
    "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
    "M9 7a2 2 0 1 0 0 4a2 2 0 1 0 0-4",
    "m21 15-3.09-3.09a2 2 0 0 0-2.82 0L6 21",
];
const LIST: &[&str] = &["M8 6h13", "M8 12h13", "M8 18h13", "M3 6h.01", "M3 12h.01", "M3 18h.01"];

const MENU: &[&str] = &["M4 6h16", "M4 12h16", "M4 18h16"];
const LOG_OUT: &[&str] = &[
    "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4",
    "m16 17 5-5-5-5",
    "M21 12H9",
];
const REFRESH_CW: &[&str] = &[
    "M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8",
    "M21 3v5h-5",
    "M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16",
    "M8 16H3v5",
];
const SHIELD_CHECK: &[&str] = &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10", "m9 12 2 2 4-4"];

#[component]
fn Lucide(paths: &'static [&'static str]) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            {paths.iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}

fn paths_for(kind: IconKind) -> &'static [&'static str] {
    match kind {
        IconKind::Circle => CIRCLE,
        IconKind::Home => HOME,
        IconKind::Dashboard => DASHBOARD,
        IconKind::Users => USERS,
        IconKind::User => USER,
        IconKind::Settings => SETTINGS,
        IconKind::FileText => FILE_TEXT,
        IconKind::Photo => PHOTO,
        IconKind::List => LIST,
    }
}

/// 菜单项图标
#[component]
pub fn MenuIcon(kind: IconKind) -> impl IntoView {
    view! { <Lucide paths=paths_for(kind) /> }
}

#[component]
pub fn Menu() -> impl IntoView {
    view! { <Lucide paths=MENU /> }
}

#[component]
pub fn LogOut() -> impl IntoView {
    view! { <Lucide paths=LOG_OUT /> }
}

#[component]
pub fn RefreshCw() -> impl IntoView {
    view! { <Lucide paths=REFRESH_CW /> }
}

#[component]
pub fn ShieldCheck() -> impl IntoView {
    view! { <Lucide paths=SHIELD_CHECK /> }
}
