use leptos::prelude::*;

/// 菜单中存在但尚无面板的页面
#[component]
pub fn PlaceholderPage(key: String) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-24 text-center">
            <p class="text-xl">"Page not found or pending implementation"</p>
            <p class="text-sm text-base-content/50 mt-2 font-mono">{key}</p>
        </div>
    }
}
