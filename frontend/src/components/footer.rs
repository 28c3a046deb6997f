//! Footer component

use chrono::Datelike;
use leptos::*;

use crate::APP_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer>
            <div>"© " {year} " " {APP_NAME}</div>
            <div class="footer-links">
                <a href="/terms" class="footer-link">"이용약관"</a>
                <a href="/privacy" class="footer-link">"개인정보처리방침"</a>
                <span class="footer-made">"Made with " <span class="brand">{APP_NAME}</span></span>
            </div>
        </footer>
    }
}
