use leptos::*;

use crate::types::UploadProgress;

/// Progress bar shown while a batch is uploading.
#[component]
pub fn ProgressSection(progress: ReadSignal<UploadProgress>) -> impl IntoView {
    view! {
        <div class="progress-section show">
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style=move || format!("width: {:.0}%;", progress.get().percent())
                ></div>
            </div>
            <div class="progress-label">
                {move || {
                    let p = progress.get();
                    format!("업로드 중... ({}/{})", p.done, p.total)
                }}
            </div>
        </div>
    }
}
