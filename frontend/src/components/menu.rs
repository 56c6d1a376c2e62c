//! 递归菜单渲染
//!
//! 每个节点解析自己的图标；分组节点始终展开并递归渲染子树，
//! 叶子节点可点击，选中后切换当前页面并关闭抽屉。

use crate::components::icons::MenuIcon;
use appsite_admin::{IconRegistry, MenuEntry, NavState, log_info};
use appsite_admin_shared::MenuNode;
use leptos::prelude::*;

/// 渲染一层节点
///
/// 返回 `AnyView` 以便递归时类型收敛。
pub fn render_nodes(nodes: &[MenuNode], nav: RwSignal<NavState>) -> AnyView {
    nodes
        .iter()
        .map(|node| render_node(node, nav))
        .collect_view()
        .into_any()
}

fn render_node(node: &MenuNode, nav: RwSignal<NavState>) -> AnyView {
    let icon = IconRegistry::BUILTIN.resolve(node.icon_name());
    let label = node.label.clone();

    match MenuEntry::of(node) {
        MenuEntry::Leaf(leaf) => {
            let key = leaf.key.clone();
            let is_active = move || nav.with(|n| n.is_active(&key));
            let leaf = StoredValue::new(leaf.clone());
            let on_click = move |_| {
                leaf.with_value(|leaf| {
                    nav.update(|n| {
                        if n.select(MenuEntry::of(leaf)) {
                            log_info!("[Menu] selected {}", n.active_key());
                        }
                    })
                });
            };

            view! {
                <li>
                    <a class=move || if is_active() { "menu-active" } else { "" } on:click=on_click>
                        <MenuIcon kind=icon attr:class="h-4 w-4" />
                        {label}
                    </a>
                </li>
            }
            .into_any()
        }
        MenuEntry::Group { children, .. } => view! {
            <li>
                <span class="menu-title flex items-center gap-2">
                    <MenuIcon kind=icon attr:class="h-4 w-4" />
                    {label}
                </span>
                <ul>{render_nodes(children, nav)}</ul>
            </li>
        }
        .into_any(),
    }
}
