use leptos::prelude::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h2 class="card-title text-2xl">"Dashboard"</h2>
                <p class="text-base-content/70">"Welcome to the Appsite Management Panel."</p>
            </div>
        </div>
    }
}
