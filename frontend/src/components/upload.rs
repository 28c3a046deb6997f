//! Image uploader: drop zone, pending selection and the upload trigger.
//!
//! Owns the page state:
//!
//! - the [`SelectionStore`](reviewhi::SelectionStore) of files waiting for upload
//! - the [`LinkStore`] of public URLs
//! - the uploading flag and progress of the running batch
//!
//! Intake and removal are disabled while a batch runs, so the selection a
//! batch commits to is the one it started with.

use leptos::html::Input;
use leptos::*;
use reviewhi::{admit, FileId, LinkStore, Notice, UploadSequencer, ACCEPT_ATTR};
use web_sys::{DragEvent, Event, FileList, HtmlInputElement};

use crate::components::{use_toaster, LinkList, ProgressSection};
use crate::services::{candidates, create_preview, release_previews, SupabaseStorage};
use crate::types::{BrowserFile, BrowserSelection, UploadProgress};
use crate::storage_config;

#[component]
pub fn ImageUploader() -> impl IntoView {
    let toaster = use_toaster();

    let selection = create_rw_signal(BrowserSelection::new());
    let links = create_rw_signal(LinkStore::new());
    let uploading = create_rw_signal(false);
    let drag_active = create_rw_signal(false);
    let (progress, set_progress) = create_signal(UploadProgress::default());

    let file_input = create_node_ref::<Input>();

    // Intake for both drop and picker
    let on_files = move |files: FileList| {
        if uploading.get_untracked() {
            return;
        }

        let report = admit(candidates(&files), create_preview);
        toaster.push_all(report.notices());

        if !report.admitted.is_empty() {
            let count = report.admitted.len();
            selection.update(|s| {
                s.append(report.admitted);
            });
            log::info!("📸 {} image(s) added to the selection", count);
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        drag_active.set(false);
        if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
            on_files(files);
        }
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        if !uploading.get_untracked() {
            drag_active.set(true);
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            on_files(files);
        }
        // Allow picking the same file again
        input.set_value("");
    };

    let trigger_file_input = move |_| {
        if uploading.get_untracked() {
            return;
        }
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let remove_file = move |id: FileId| {
        selection.update(|s| {
            if let Some(file) = s.remove(&id) {
                release_previews(std::iter::once(&file));
            }
        });
    };

    let clear_files = move |_: ev::MouseEvent| {
        selection.update(|s| release_previews(&s.clear()));
    };

    let on_upload = move |_| {
        if uploading.get_untracked() {
            return;
        }

        let files = selection.with_untracked(|s| s.snapshot());
        if files.is_empty() {
            toaster.push(Notice::nothing_selected());
            return;
        }

        let storage = match storage_config() {
            Ok(config) => SupabaseStorage::new(config),
            Err(e) => {
                log::error!("❌ Storage is not configured: {}", e);
                toaster.push(Notice::upload_failure(&e.to_string()));
                return;
            }
        };

        uploading.set(true);
        set_progress.set(UploadProgress {
            done: 0,
            total: files.len(),
        });
        log::info!("📤 Uploading {} image(s) to bucket {}", files.len(), storage.bucket());

        spawn_local(async move {
            let report = UploadSequencer::new(&storage)
                .run(&files, |event| set_progress.update(|p| p.record(event)))
                .await;

            let mut outcome = None;
            selection.update(|s| links.update(|l| outcome = Some(report.apply(s, l))));

            if let Some((notice, released)) = outcome {
                release_previews(&released);
                toaster.push(notice);
            }
            uploading.set(false);
        });
    };

    view! {
        <div class="uploader-card">
            <div class="card-header">
                <h2 class="card-title">"🖼️ 이미지 업로더"</h2>
                <p class="card-description">"이미지를 드래그하여 업로드하고 링크를 받으세요 ✨"</p>
            </div>

            <div
                class="upload-section"
                class:drag-active=move || drag_active.get()
                class:disabled=move || uploading.get()
                on:click=trigger_file_input
                on:dragover=on_drag_over
                on:dragleave=move |_| drag_active.set(false)
                on:drop=on_drop
            >
                <input
                    type="file"
                    accept=ACCEPT_ATTR
                    multiple=true
                    style="display:none"
                    node_ref=file_input
                    on:click=|ev| ev.stop_propagation()
                    on:change=on_file_change
                />
                <div class="upload-icon">"📤"</div>
                <div class="upload-text">
                    {move || if drag_active.get() {
                        "🎯 이미지를 여기에 놓으세요..."
                    } else {
                        "📸 이미지를 여기에 드래그하거나 클릭하여 선택하세요"
                    }}
                </div>
                <div class="upload-badges">
                    <span class="badge">"JPG"</span>
                    <span class="badge">"JPEG"</span>
                    <span class="badge">"PNG"</span>
                </div>
            </div>

            <Show when=move || selection.with(|s| !s.is_empty()) fallback=|| view! { }>
                <SelectionGrid
                    selection=selection
                    uploading=uploading
                    on_remove=remove_file
                    on_clear=clear_files
                />
            </Show>

            <Show when=move || uploading.get() fallback=|| view! { }>
                <ProgressSection progress=progress/>
            </Show>

            <Show when=move || links.with(|l| !l.is_empty()) fallback=|| view! { }>
                <LinkList links=links/>
            </Show>

            <div class="card-footer">
                <button
                    class="btn btn-primary"
                    on:click=on_upload
                    disabled=move || uploading.get() || selection.with(|s| s.is_empty())
                >
                    {move || if uploading.get() { "⏳ 업로드 중..." } else { "📤 이미지 업로드" }}
                </button>
            </div>
        </div>
    }
}

/// Thumbnails of the pending files.
#[component]
fn SelectionGrid<R, C>(
    selection: RwSignal<BrowserSelection>,
    uploading: RwSignal<bool>,
    on_remove: R,
    on_clear: C,
) -> impl IntoView
where
    R: Fn(FileId) + Copy + 'static,
    C: Fn(ev::MouseEvent) + 'static,
{
    view! {
        <div class="selection-section">
            <div class="section-header">
                <h3 class="section-title">
                    "🖼️ 선택된 이미지 (" {move || selection.with(|s| s.len())} ")"
                </h3>
                <button
                    class="btn btn-ghost"
                    on:click=on_clear
                    disabled=move || uploading.get()
                >
                    "✕ 모두 지우기"
                </button>
            </div>
            <div class="selection-grid">
                <For
                    each=move || selection.with(|s| s.iter().cloned().collect::<Vec<BrowserFile>>())
                    key=|file| file.id
                    children=move |file| {
                        let id = file.id;
                        view! {
                            <div class="thumb">
                                <img src=file.preview.clone().unwrap_or_default() alt=file.name.clone()/>
                                <button
                                    class="thumb-remove"
                                    on:click=move |_| on_remove(id)
                                    disabled=move || uploading.get()
                                >
                                    "🗑️"
                                </button>
                                <div class="thumb-name">{file.name.clone()}</div>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
