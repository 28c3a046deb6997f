//! Uploaded links list with copy and remove actions.

use leptos::*;
use reviewhi::{LinkStore, Notice};

use crate::components::use_toaster;
use crate::services::copy_to_clipboard;

#[component]
pub fn LinkList(links: RwSignal<LinkStore>) -> impl IntoView {
    let toaster = use_toaster();

    let copy_one = move |url: String| {
        copy_to_clipboard(&links.with_untracked(|l| l.copy_text(&url)));
        toaster.push(Notice::link_copied());
    };

    let copy_all = move |_| {
        // Nothing to copy: no clipboard write, no notice
        if let Some(text) = links.with_untracked(LinkStore::copy_all_text) {
            copy_to_clipboard(&text);
            toaster.push(Notice::all_links_copied());
        }
    };

    let remove_link = move |url: String| {
        links.update(|l| {
            l.remove(&url);
        });
    };

    view! {
        <div class="links-section">
            <div class="section-header">
                <h3 class="section-title">
                    "🔗 업로드된 링크 (" {move || links.with(|l| l.len())} ")"
                </h3>
                <div class="section-actions">
                    <button class="btn btn-outline" on:click=copy_all>"📋 모든 링크 복사"</button>
                    <button class="btn btn-danger" on:click=move |_| links.update(|l| l.clear())>
                        "✕ 모두 지우기"
                    </button>
                </div>
            </div>
            <div class="links-list">
                <For
                    each=move || links.with(|l| l.urls().into_iter().enumerate().collect::<Vec<_>>())
                    key=|(index, url)| format!("{}-{}", index, url)
                    children=move |(_, url)| {
                        let copy_url = url.clone();
                        let remove_url = url.clone();
                        view! {
                            <div class="link-item">
                                <span class="link-icon">"🖼️"</span>
                                <span class="link-url" title=url.clone()>{url}</span>
                                <div class="link-actions">
                                    <button
                                        class="btn-icon"
                                        title="링크 복사"
                                        on:click=move |_| copy_one(copy_url.clone())
                                    >
                                        "📋"
                                    </button>
                                    <button
                                        class="btn-icon btn-icon-danger"
                                        title="링크 삭제"
                                        on:click=move |_| remove_link(remove_url.clone())
                                    >
                                        "🗑️"
                                    </button>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
