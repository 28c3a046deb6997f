//! Hero section component

use leptos::*;

use crate::APP_NAME;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1 class="gradient-text">{APP_NAME}</h1>
            <div class="subtitle">
                "✨ 꼼꼼한 마케팅은 리뷰하이와 시작하세요 ✨"
            </div>
        </div>
    }
}
