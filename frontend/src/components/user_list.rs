//! 用户列表面板
//!
//! 挂载时请求一次，"Refresh" 重新请求。请求不去重，
//! 多次刷新交错时以最后到达的结果为准。

use crate::auth::use_auth;
use crate::components::icons::RefreshCw;
use appsite_admin::UserListState;
use appsite_admin_shared::User;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn UserListPage() -> impl IntoView {
    let auth = use_auth();
    let state = RwSignal::new(UserListState::default());

    let load_users = move || {
        state.update(UserListState::begin);
        let api = auth.api();
        spawn_local(async move {
            let result = api.list_users().await;
            // 面板可能已被切走
            state.try_update(|s| s.finish(result));
        });
    };

    // 初始加载
    load_users();

    let loading = move || state.with(UserListState::loading);
    let users = move || state.with(|s| s.users().to_vec());
    let is_empty = move || state.with(|s| s.users().is_empty());

    view! {
        <div class="card bg-base-100 shadow-xl relative">
            <Show when=loading>
                <div class="absolute inset-0 z-10 flex items-center justify-center bg-base-100/60 rounded-box">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            </Show>
            <div class="card-body p-0">
                <div class="flex items-center justify-between p-6 pb-2">
                    <h3 class="card-title">"Users"</h3>
                    <button on:click=move |_| load_users() class="btn btn-ghost btn-sm gap-2">
                        <RefreshCw attr:class="h-4 w-4" /> "Refresh"
                    </button>
                </div>

                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>"UID"</th>
                                <th>"Username"</th>
                                <th>"Nickname"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || is_empty() && !loading()>
                                <tr>
                                    <td colspan="4" class="text-center py-8 text-base-content/50">
                                        "No users."
                                    </td>
                                </tr>
                            </Show>
                            <For each=users key=|u| u.clone() let:user>
                                <UserRow user=user />
                            </For>
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}

#[component]
fn UserRow(user: User) -> impl IntoView {
    // 只有 enabled 显示为绿色，其余取值（包括未知取值）一律红色
    let badge = if user.status.is_enabled() {
        "badge badge-success"
    } else {
        "badge badge-error"
    };
    let status = user.status.as_str().to_string();

    view! {
        <tr>
            <td class="font-mono text-sm">{user.uid}</td>
            <td>{user.username}</td>
            <td>{user.nickname}</td>
            <td><span class=badge>{status}</span></td>
        </tr>
    }
}
