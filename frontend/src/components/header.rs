use leptos::*;

use crate::APP_NAME;

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);

    view! {
        <header>
            <div class="header-left">
                <a href="/" class="logo">"✨ " {APP_NAME}</a>
            </div>
            <nav class="header-right desktop-nav">
                <a href="/guide" class="nav-link">"📖 사용가이드"</a>
                <a href="/contact" class="nav-link">"💬 문의하기"</a>
            </nav>
            <button
                class="menu-toggle"
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                {move || if menu_open.get() { "✕" } else { "☰" }}
            </button>
            <Show when=move || menu_open.get() fallback=|| view! { }>
                <nav class="mobile-nav">
                    <a href="/guide" class="nav-link" on:click=move |_| set_menu_open.set(false)>
                        "📖 사용가이드"
                    </a>
                    <a href="/contact" class="nav-link" on:click=move |_| set_menu_open.set(false)>
                        "💬 문의하기"
                    </a>
                </nav>
            </Show>
        </header>
    }
}
