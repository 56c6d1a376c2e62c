//! 主布局
//!
//! 顶栏 + 侧边菜单 + 内容区。菜单在布局挂载时请求一次；
//! 窄屏下侧边栏收进抽屉，由顶栏的汉堡按钮切换。

use crate::auth::{logout, use_auth};
use crate::components::icons::{LogOut, Menu};
use crate::components::menu::render_nodes;
use appsite_admin::{MenuState, NavState, Page};
use leptos::prelude::*;
use leptos::task::spawn_local;

const DRAWER_ID: &str = "main-drawer";

#[component]
pub fn MainLayout(
    /// 页面到视图的映射
    matcher: fn(Page) -> AnyView,
) -> impl IntoView {
    let auth = use_auth();
    let default_page = auth.config.with_value(|c| c.default_page);

    let nav = RwSignal::new(NavState::new(default_page));
    let menu = RwSignal::new(MenuState::default());

    // 每次进入主布局请求一次菜单，之后不再刷新
    let api = auth.api();
    spawn_local(async move {
        let result = api.get_menu().await;
        menu.try_update(|m| m.apply(result));
    });

    // 只在页面变化时重建内容区，抽屉开关不影响已挂载的面板
    let page = Memo::new(move |_| nav.with(NavState::page));
    let drawer_opened = move || nav.with(NavState::drawer_opened);

    view! {
        <div class="drawer sm:drawer-open min-h-screen bg-base-200">
            <input
                id=DRAWER_ID
                type="checkbox"
                class="drawer-toggle"
                prop:checked=drawer_opened
                on:change=move |_| nav.update(NavState::toggle_drawer)
            />
            <div class="drawer-content flex flex-col">
                <div class="navbar bg-base-100 shadow">
                    <div class="flex-none sm:hidden">
                        <label for=DRAWER_ID aria-label="open menu" class="btn btn-square btn-ghost">
                            <Menu attr:class="h-6 w-6" />
                        </label>
                    </div>
                    <div class="flex-1">
                        <span class="text-xl font-bold px-2">"Appsite Admin"</span>
                    </div>
                    <div class="flex-none">
                        <button on:click=move |_| logout(&auth) class="btn btn-outline btn-error btn-sm gap-2">
                            <LogOut attr:class="h-4 w-4" /> "Logout"
                        </button>
                    </div>
                </div>
                <main class="flex-1 p-4 md:p-8">{move || matcher(page.get())}</main>
            </div>
            <div class="drawer-side z-40">
                <label for=DRAWER_ID aria-label="close menu" class="drawer-overlay"></label>
                <aside class="bg-base-100 min-h-full w-64">
                    <ul class="menu w-full">
                        <li class="menu-title">"Menu"</li>
                        {move || menu.with(|m| render_nodes(m.tree(), nav))}
                    </ul>
                </aside>
            </div>
        </div>
    }
}
