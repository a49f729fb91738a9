pub mod slots;
pub mod template;
pub mod upload;

use crate::api::{ApiClient, RenderLatexRequest};
use crate::components::hooks::use_resizer::{use_resizer, Resizer};
use crate::components::ui::{Button, ButtonSize, ButtonVariant, Spinner, Textarea};
use crate::models::{DocumentType, ProjectDetail};
use crate::state::AppContext;
use crate::util::normalize_backend_url;
use icons::X;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use slots::DocumentSlots;
use upload::is_object_url;
use wasm_bindgen::JsCast;

const ZOOM_MIN: i32 = 50;
const ZOOM_MAX: i32 = 200;
const ZOOM_STEP: i32 = 10;
const ZOOM_DEFAULT: i32 = 100;

#[derive(Clone, Copy, PartialEq, Eq)]
enum PreviewTab {
    Preview,
    Notes,
}

fn normalize_media_url(client: &ApiClient, url: &str) -> Option<String> {
    normalize_backend_url(url, &client.base_url)
}

/// Two-pane workspace for one project: LaTeX editing on the left, PDF
/// preview and solution notes on the right.
///
/// Owns the state both panes share; everything below gets signals as props.
#[component]
pub fn ProjectEditor(project_id: String, initial_detail: ProjectDetail) -> impl IntoView {
    let app_state = expect_context::<AppContext>().0;
    let project_id = StoredValue::new(project_id);

    let client = app_state.api_client.get_untracked();
    let slots = RwSignal::new(DocumentSlots::from_detail(&initial_detail, |u| {
        normalize_media_url(&client, u)
    }));
    let detail = RwSignal::new(initial_detail);
    let document_mode = RwSignal::new(DocumentType::Problem);
    let zoom = RwSignal::new(ZOOM_DEFAULT);
    let pdf_url: RwSignal<Option<String>> = RwSignal::new(None);
    let generating_explanation = RwSignal::new(false);
    let explanation_error: RwSignal<Option<String>> = RwSignal::new(None);

    // The preview always shows the active mode's latest PDF. The slots carry
    // it: seeded from the fetched detail, overwritten as compile and OCR
    // responses land.
    Effect::new(move |_| {
        let mode = document_mode.get();
        let next = slots.with(|s| s.pdf_url(mode).map(str::to_string));
        // Rewriting the iframe src reloads the preview, so skip no-op writes.
        if pdf_url.with_untracked(|cur| *cur != next) {
            pdf_url.set(next);
        }
    });

    view! {
        <EditorHeader detail=detail pdf_url=pdf_url />

        <div class="flex-1 flex overflow-hidden rounded-2xl border bg-background shadow-sm">
            <EditorPanel
                project_id=project_id.get_value()
                detail=detail
                document_mode=document_mode
                slots=slots
                generating_explanation=generating_explanation
                explanation_error=explanation_error
            />
            <PreviewPanel
                project_id=project_id.get_value()
                detail=detail
                zoom=zoom
                pdf_url=pdf_url
            />
        </div>
    }
}

/// Breadcrumb header. The title tracks the detail signal so renames after
/// re-fetches show up without a reload.
#[component]
pub fn EditorHeader(
    detail: RwSignal<ProjectDetail>,
    pdf_url: RwSignal<Option<String>>,
) -> impl IntoView {
    let title = move || {
        detail.with(|d| {
            if d.title.trim().is_empty() {
                "プロジェクト".to_string()
            } else {
                d.title.clone()
            }
        })
    };

    view! {
        <header class="rounded-xl bg-linear-to-br from-sky-500 to-rose-400 flex items-center justify-between px-6 py-3 h-16 mb-4 shrink-0 z-10">
            <div class="flex min-w-0 items-center gap-2">
                <a href="/project" class="shrink-0 text-sm text-white/90 hover:underline">
                    "プロジェクト"
                </a>
                <span class="shrink-0 text-white/70">"›"</span>
                <h1 class="truncate text-2xl font-semibold text-white">{title}</h1>
            </div>

            <Show when=move || pdf_url.get().is_some() fallback=|| ().into_view()>
                <a
                    class="hidden shrink-0 items-center gap-2 rounded-full bg-background px-6 py-2.5 text-sm shadow-sm hover:underline sm:flex"
                    href=move || pdf_url.get().unwrap_or_default()
                    target="_blank"
                    rel="noopener"
                >
                    <svg
                        xmlns="http://www.w3.org/2000/svg"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        class="size-4"
                        aria-hidden="true"
                    >
                        <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" />
                        <path d="M7 10l5 5 5-5" />
                        <path d="M12 15V3" />
                    </svg>
                    <span class="tracking-wider">"PDFダウンロード"</span>
                </a>
            </Show>
        </header>
    }
}

/// Left pane: mode switcher, OCR upload area (problem mode), divider,
/// LaTeX buffer with compile/explanation actions.
#[component]
pub fn EditorPanel(
    project_id: String,
    detail: RwSignal<ProjectDetail>,
    document_mode: RwSignal<DocumentType>,
    slots: RwSignal<DocumentSlots>,
    generating_explanation: RwSignal<bool>,
    explanation_error: RwSignal<Option<String>>,
) -> impl IntoView {
    let app_state = expect_context::<AppContext>().0;
    let project_id = StoredValue::new(project_id);

    let latex_value = RwSignal::new(template::DEFAULT_LATEX.to_string());
    let default_latex = RwSignal::new(template::DEFAULT_LATEX.to_string());

    let ocr_processing = RwSignal::new(false);
    let ocr_error: RwSignal<Option<String>> = RwSignal::new(None);
    let compiling = RwSignal::new(false);
    let compile_error: RwSignal<Option<String>> = RwSignal::new(None);

    // Local object URL (blob:) after an upload, or the project's stored
    // image from the backend.
    let uploaded_image_url: RwSignal<Option<String>> = RwSignal::new(None);

    // Set after OCR fills the buffer; blocks the detail-sync effect below
    // from overwriting a result the backend does not have in full yet.
    let ocr_buffer_fresh = RwSignal::new(false);

    let container_ref: NodeRef<html::Div> = NodeRef::new();
    let resizer = use_resizer(container_ref);

    // A project with no compiled problem document opens on the default
    // template. Best effort; the built-in skeleton is already in place.
    Effect::new(move |_| {
        let has_doc = detail.with_untracked(|d| d.latest_latex_document.is_some());
        if has_doc {
            return;
        }
        let client = app_state.api_client.get_untracked();
        spawn_local(async move {
            let latex = template::resolve_default_latex(&client).await;
            default_latex.set(latex);
        });
    });

    // Keep buffer, slots and image in step with the backend copy. Skipped
    // entirely while an OCR result is showing.
    Effect::new(move |_| {
        let mode = document_mode.get();
        let d = detail.get();
        let fallback = default_latex.get();

        if ocr_buffer_fresh.get_untracked() {
            return;
        }

        let client = app_state.api_client.get_untracked();
        slots.set(DocumentSlots::from_detail(&d, |u| {
            normalize_media_url(&client, u)
        }));

        match d.latest_document(mode) {
            Some(doc) => latex_value.set(doc.latex_code.clone()),
            None => latex_value.set(fallback),
        }

        // Show the stored problem image unless a local preview is up.
        let showing_blob = uploaded_image_url
            .with_untracked(|u| u.as_deref().map(is_object_url).unwrap_or(false));
        if !showing_blob {
            uploaded_image_url.set(
                d.image_url
                    .as_deref()
                    .and_then(|u| normalize_media_url(&client, u)),
            );
        }
    });

    on_cleanup(move || {
        if let Some(url) = uploaded_image_url.get_untracked() {
            if is_object_url(&url) {
                let _ = web_sys::Url::revoke_object_url(&url);
            }
        }
    });

    let on_file_selected = Callback::new(move |file: web_sys::File| {
        // Swap the preview immediately, releasing the previous blob.
        if let Some(prev) = uploaded_image_url.get_untracked() {
            if is_object_url(&prev) {
                let _ = web_sys::Url::revoke_object_url(&prev);
            }
        }
        if let Ok(url) = web_sys::Url::create_object_url_with_blob(&file) {
            uploaded_image_url.set(Some(url));
        }

        // Rejections stay local: no bytes are read, nothing is sent.
        if let Err(e) = upload::validate_image_file(&file.type_(), file.size()) {
            ocr_error.set(Some(e.user_message()));
            return;
        }

        ocr_processing.set(true);
        ocr_error.set(None);

        let client = app_state.api_client.get_untracked();
        let id = project_id.get_value();
        let file_name = file.name();
        let mime_type = file.type_();
        let buffer_promise = file.array_buffer();

        spawn_local(async move {
            let buffer = match wasm_bindgen_futures::JsFuture::from(buffer_promise).await {
                Ok(buffer) => buffer,
                Err(_) => {
                    ocr_error.set(Some("OCR処理中にエラーが発生しました".to_string()));
                    ocr_processing.set(false);
                    return;
                }
            };
            let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

            match client.submit_ocr(&id, &file_name, &mime_type, bytes).await {
                Ok(resp) if resp.latex_code.is_empty() => {
                    ocr_error.set(Some("LaTeXコードの生成に失敗しました".to_string()));
                }
                Ok(resp) => {
                    ocr_buffer_fresh.set(true);
                    latex_value.set(resp.latex_code.clone());
                    let normalized = resp
                        .pdf_url
                        .as_deref()
                        .and_then(|u| normalize_media_url(&client, u));
                    slots.update(|s| {
                        s.record(DocumentType::Problem, resp.latex_document_id, normalized)
                    });
                    if let Ok(fresh) = client.project_detail(&id).await {
                        detail.set(fresh);
                    }
                }
                Err(e) => ocr_error.set(Some(e.user_message())),
            }
            ocr_processing.set(false);
        });
    });

    let on_compile = Callback::new(move |_: ()| {
        if compiling.get_untracked() {
            return;
        }
        compiling.set(true);
        compile_error.set(None);

        let client = app_state.api_client.get_untracked();
        let id = project_id.get_value();
        let mode = document_mode.get_untracked();
        let request = RenderLatexRequest {
            problem_id: id.clone(),
            document_type: mode,
            latex_document_id: slots
                .with_untracked(|s| s.document_id(mode).map(|d| d.to_string())),
            latex_code: latex_value.get_untracked(),
        };

        spawn_local(async move {
            match client.render_latex(&request).await {
                Ok(resp) => {
                    let normalized = resp
                        .pdf_url
                        .as_deref()
                        .and_then(|u| normalize_media_url(&client, u));
                    slots.update(|s| s.record(mode, resp.latex_document_id, normalized));
                    // The compiled buffer is now the backend copy, so the
                    // sync effect may take over again.
                    ocr_buffer_fresh.set(false);
                    if let Ok(fresh) = client.project_detail(&id).await {
                        detail.set(fresh);
                    }
                }
                // The body carries the compiler log; show it untouched.
                Err(e) => compile_error.set(Some(e.user_message())),
            }
            compiling.set(false);
        });
    });

    let on_generate_explanation = Callback::new(move |_: ()| {
        if generating_explanation.get_untracked() {
            return;
        }
        generating_explanation.set(true);
        explanation_error.set(None);

        let client = app_state.api_client.get_untracked();
        let id = project_id.get_value();

        spawn_local(async move {
            match client.generate_explanation(&id).await {
                Ok(_) => match client.project_detail(&id).await {
                    Ok(fresh) => {
                        // Release the OCR guard first so the fresh detail
                        // syncs into the explanation buffer.
                        ocr_buffer_fresh.set(false);
                        detail.set(fresh);
                        document_mode.set(DocumentType::Explanation);
                    }
                    Err(e) => explanation_error.set(Some(e.user_message())),
                },
                Err(e) => explanation_error.set(Some(e.user_message())),
            }
            generating_explanation.set(false);
        });
    });

    let on_switch = Callback::new(move |mode: DocumentType| {
        document_mode.set(mode);
        compile_error.set(None);
        ocr_buffer_fresh.set(false);
    });

    view! {
        <div class="w-full lg:w-1/2 flex flex-col border-r bg-background h-full relative">
            <DocumentModeSwitcher document_mode=document_mode on_switch=on_switch />

            <div node_ref=container_ref class="flex-1 flex flex-col overflow-hidden relative">
                // The upload half only applies to the problem source.
                <div class=move || {
                    if document_mode.get() == DocumentType::Problem { "contents" } else { "hidden" }
                }>
                    <ImageUploadArea
                        height=resizer.top_pane_height
                        processing=ocr_processing
                        error=ocr_error
                        image_url=uploaded_image_url
                        on_file=on_file_selected
                    />
                    <ResizerHandle resizer=resizer />
                </div>

                <LatexEditor
                    latex_value=latex_value
                    document_mode=document_mode
                    compiling=compiling
                    compile_error=compile_error
                    generating_explanation=generating_explanation
                    explanation_error=explanation_error
                    on_compile=on_compile
                    on_generate_explanation=on_generate_explanation
                />
            </div>
        </div>
    }
}

#[component]
pub fn DocumentModeSwitcher(
    document_mode: RwSignal<DocumentType>,
    on_switch: Callback<DocumentType>,
) -> impl IntoView {
    let tab_class = move |mode: DocumentType| {
        if document_mode.get() == mode {
            "px-4 py-1.5 text-sm font-medium rounded-lg border bg-background shadow-sm"
        } else {
            "px-4 py-1.5 text-sm font-medium rounded-lg border border-transparent text-muted-foreground hover:text-foreground"
        }
    };

    view! {
        <div class="px-6 py-4 border-b flex items-center justify-between bg-background shrink-0">
            <div class="flex p-1 bg-muted rounded-xl select-none">
                <button
                    class=move || tab_class(DocumentType::Problem)
                    on:click=move |_| on_switch.run(DocumentType::Problem)
                >
                    "問題ソース"
                </button>
                <button
                    class=move || tab_class(DocumentType::Explanation)
                    on:click=move |_| on_switch.run(DocumentType::Explanation)
                >
                    "解説ソース"
                </button>
            </div>
        </div>
    }
}

/// Upload target for the problem image. Accepts click-to-pick and drop;
/// while OCR runs, an overlay blocks a second submission.
#[component]
pub fn ImageUploadArea(
    height: RwSignal<f64>,
    processing: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    image_url: RwSignal<Option<String>>,
    on_file: Callback<web_sys::File>,
) -> impl IntoView {
    let handle_file_input = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            if !processing.get_untracked() {
                on_file.run(file);
            }
        }
        // Allow re-picking the same file.
        input.set_value("");
    };

    let handle_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        if processing.get_untracked() {
            return;
        }
        if let Some(file) = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0))
        {
            on_file.run(file);
        }
    };

    view! {
        <div
            class="px-6 py-4 flex flex-col relative shrink-0"
            style=move || format!("height: {}px; flex: none;", height.get())
        >
            <div class="flex items-center justify-between mb-2 shrink-0">
                <span class="text-[10px] font-bold text-muted-foreground uppercase tracking-wider">
                    "問題画像 (OCR対象)"
                </span>
            </div>

            <div class="flex-1 min-h-0 relative">
                <Show
                    when=move || image_url.get().is_some()
                    fallback=move || view! {
                        <label
                            class=move || {
                                if processing.get() {
                                    "group relative flex flex-col items-center justify-center w-full h-full border border-dashed rounded-2xl cursor-wait bg-muted/40"
                                } else if error.get().is_some() {
                                    "group relative flex flex-col items-center justify-center w-full h-full border border-dashed border-destructive/40 rounded-2xl cursor-pointer bg-destructive/5 hover:bg-destructive/10"
                                } else {
                                    "group relative flex flex-col items-center justify-center w-full h-full border border-dashed rounded-2xl cursor-pointer bg-muted/20 hover:bg-muted/40"
                                }
                            }
                            on:dragover=move |ev: web_sys::DragEvent| ev.prevent_default()
                            on:drop=handle_drop
                        >
                            <Show when=move || processing.get() fallback=|| ().into_view()>
                                <div class="flex flex-col items-center gap-3">
                                    <Spinner class="size-6" />
                                    <div class="text-center">
                                        <p class="text-xs font-semibold">"OCR処理中..."</p>
                                        <p class="text-[10px] text-muted-foreground mt-1">"しばらくお待ちください"</p>
                                    </div>
                                </div>
                            </Show>
                            <Show when=move || !processing.get() && error.get().is_some() fallback=|| ().into_view()>
                                <div class="flex flex-col items-center gap-3 px-4">
                                    <div class="text-center">
                                        <p class="text-xs font-semibold text-destructive">"エラーが発生しました"</p>
                                        <p class="text-[10px] text-destructive mt-1">{move || error.get().unwrap_or_default()}</p>
                                        <p class="text-[10px] text-muted-foreground mt-2">"別の画像を選択してください"</p>
                                    </div>
                                </div>
                            </Show>
                            <Show when=move || !processing.get() && error.get().is_none() fallback=|| ().into_view()>
                                <div class="flex flex-col items-center gap-3">
                                    <div class="text-center">
                                        <p class="text-xs font-semibold group-hover:text-foreground">"画像をアップロード"</p>
                                        <p class="text-[10px] text-muted-foreground mt-1">"ドラッグ＆ドロップ (PNG, JPG)"</p>
                                    </div>
                                </div>
                            </Show>
                            <input
                                type="file"
                                class="hidden"
                                accept=upload::ACCEPT_IMAGE_TYPES
                                on:change=handle_file_input
                                disabled=move || processing.get()
                            />
                        </label>
                    }
                >
                    <div
                        class="relative w-full h-full rounded-lg overflow-hidden border bg-muted/20"
                        on:dragover=move |ev: web_sys::DragEvent| ev.prevent_default()
                        on:drop=handle_drop
                    >
                        <img
                            src=move || image_url.get().unwrap_or_default()
                            alt="Uploaded problem image"
                            class="w-full h-full object-contain"
                        />
                        <Show when=move || processing.get() fallback=|| ().into_view()>
                            <div class="absolute inset-0 bg-black/50 flex flex-col items-center justify-center gap-3">
                                <Spinner class="size-6 text-white" />
                                <div class="text-center">
                                    <p class="text-xs font-semibold text-white">"OCR処理中..."</p>
                                    <p class="text-[10px] text-gray-200 mt-1">"しばらくお待ちください"</p>
                                </div>
                            </div>
                        </Show>
                        <Show when=move || !processing.get() && error.get().is_some() fallback=|| ().into_view()>
                            <div class="absolute inset-0 bg-destructive/80 flex flex-col items-center justify-center gap-3 px-4">
                                <div class="text-center">
                                    <p class="text-xs font-semibold text-white">"エラーが発生しました"</p>
                                    <p class="text-[10px] text-white/80 mt-1">{move || error.get().unwrap_or_default()}</p>
                                </div>
                            </div>
                        </Show>
                        <label class="absolute top-2 right-2 px-2 py-1 text-xs bg-background/90 hover:bg-background rounded-md border cursor-pointer">
                            "変更"
                            <input
                                type="file"
                                class="hidden"
                                accept=upload::ACCEPT_IMAGE_TYPES
                                on:change=handle_file_input
                                disabled=move || processing.get()
                            />
                        </label>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[component]
pub fn ResizerHandle(resizer: Resizer) -> impl IntoView {
    view! {
        <div
            class="h-2 bg-background hover:bg-muted/60 cursor-row-resize flex items-center justify-center shrink-0 z-10 relative"
            on:pointerdown=move |_| resizer.start_resizing()
        >
            <div class="w-10 h-1 bg-border rounded-full"></div>
        </div>
    }
}

/// The buffer plus its actions. Compile is always present; explanation
/// generation only applies to the problem source.
#[component]
pub fn LatexEditor(
    latex_value: RwSignal<String>,
    document_mode: RwSignal<DocumentType>,
    compiling: RwSignal<bool>,
    compile_error: RwSignal<Option<String>>,
    generating_explanation: RwSignal<bool>,
    explanation_error: RwSignal<Option<String>>,
    on_compile: Callback<()>,
    on_generate_explanation: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="flex-1 flex flex-col min-h-0 bg-background relative">
            <div class="px-6 py-2 flex items-center border-b border-dashed shrink-0">
                <div class="flex-1"></div>
                <span class="text-[10px] text-muted-foreground font-mono">"LaTeX Mode"</span>
            </div>

            <Textarea
                class="flex-1 min-h-0 resize-none rounded-none border-0 shadow-none px-6 py-4 font-mono text-sm leading-relaxed focus-visible:ring-0 focus-visible:border-transparent"
                placeholder="% LaTeXコードを入力してください..."
                bind_value=latex_value
            />

            <Show when=move || compile_error.get().is_some() fallback=|| ().into_view()>
                <div class="absolute bottom-0 left-0 right-0 bg-destructive/10 border-t border-destructive/30 z-30 max-h-48 overflow-y-auto">
                    <div class="px-4 py-3 flex items-start gap-3">
                        <div class="flex-1 min-w-0">
                            <div class="flex items-center justify-between mb-1">
                                <h4 class="text-xs font-semibold text-destructive">"LaTeXコンパイルエラー"</h4>
                                <button
                                    class="text-destructive/60 hover:text-destructive"
                                    aria-label="エラーを閉じる"
                                    on:click=move |_| compile_error.set(None)
                                >
                                    <X class="size-4" />
                                </button>
                            </div>
                            <pre class="text-[10px] text-destructive font-mono whitespace-pre-wrap overflow-x-auto">
                                {move || compile_error.get().unwrap_or_default()}
                            </pre>
                        </div>
                    </div>
                </div>
            </Show>

            <Show when=move || explanation_error.get().is_some() fallback=|| ().into_view()>
                <div class="absolute bottom-0 left-0 right-0 bg-destructive/10 border-t border-destructive/30 z-30 max-h-48 overflow-y-auto">
                    <div class="px-4 py-3 flex items-start gap-3">
                        <div class="flex-1 min-w-0">
                            <div class="flex items-center justify-between mb-1">
                                <h4 class="text-xs font-semibold text-destructive">"解説生成エラー"</h4>
                                <button
                                    class="text-destructive/60 hover:text-destructive"
                                    aria-label="エラーを閉じる"
                                    on:click=move |_| explanation_error.set(None)
                                >
                                    <X class="size-4" />
                                </button>
                            </div>
                            <pre class="text-[10px] text-destructive font-mono whitespace-pre-wrap overflow-x-auto">
                                {move || explanation_error.get().unwrap_or_default()}
                            </pre>
                        </div>
                    </div>
                </div>
            </Show>

            <div class="absolute bottom-6 right-6 flex items-center gap-2 z-20">
                <Button
                    variant=ButtonVariant::Outline
                    class="rounded-full px-6"
                    attr:disabled=move || compiling.get()
                    on:click=move |_| on_compile.run(())
                >
                    <Show when=move || compiling.get() fallback=|| ().into_view()>
                        <Spinner />
                    </Show>
                    {move || if compiling.get() { "コンパイル中..." } else { "コンパイル" }}
                </Button>

                <Show
                    when=move || document_mode.get() == DocumentType::Problem
                    fallback=|| ().into_view()
                >
                    <Button
                        class="rounded-full px-6"
                        attr:disabled=move || generating_explanation.get()
                        on:click=move |_| on_generate_explanation.run(())
                    >
                        <Show when=move || generating_explanation.get() fallback=|| ().into_view()>
                            <Spinner />
                        </Show>
                        {move || if generating_explanation.get() { "解説生成中..." } else { "AI解説を生成" }}
                    </Button>
                </Show>
            </div>
        </div>
    }
}

/// Right pane: PDF preview with zoom, and the solution-notes tab.
#[component]
pub fn PreviewPanel(
    project_id: String,
    detail: RwSignal<ProjectDetail>,
    zoom: RwSignal<i32>,
    pdf_url: RwSignal<Option<String>>,
) -> impl IntoView {
    let active_tab = RwSignal::new(PreviewTab::Preview);

    let tab_class = move |tab: PreviewTab| {
        if active_tab.get() == tab {
            "px-4 py-1.5 text-sm font-medium rounded-lg border bg-background shadow-sm"
        } else {
            "px-4 py-1.5 text-sm font-medium rounded-lg border border-transparent text-muted-foreground hover:text-foreground"
        }
    };

    view! {
        <div class="w-full lg:w-1/2 flex flex-col bg-background h-full">
            <div class="flex items-center justify-between px-6 border-b bg-background h-14 shrink-0">
                <div class="flex p-1 bg-muted rounded-xl select-none">
                    <button
                        class=move || tab_class(PreviewTab::Preview)
                        on:click=move |_| active_tab.set(PreviewTab::Preview)
                    >
                        "プレビュー"
                    </button>
                    <button
                        class=move || tab_class(PreviewTab::Notes)
                        on:click=move |_| active_tab.set(PreviewTab::Notes)
                    >
                        "チャット補足"
                    </button>
                </div>
                <ZoomControls zoom=zoom />
            </div>

            <div class="flex-1 overflow-auto">
                <Show
                    when=move || active_tab.get() == PreviewTab::Preview
                    fallback=move || view! {
                        <SolutionNotes project_id=project_id.clone() detail=detail />
                    }
                >
                    <PdfPreview pdf_url=pdf_url zoom=zoom />
                </Show>
            </div>
        </div>
    }
}

#[component]
pub fn ZoomControls(zoom: RwSignal<i32>) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2 bg-muted/60 rounded-lg p-1">
            <Button
                variant=ButtonVariant::Ghost
                size=ButtonSize::Icon
                class="size-6"
                attr:aria-label="ズームアウト"
                attr:disabled=move || zoom.get() <= ZOOM_MIN
                on:click=move |_| zoom.update(|z| *z = (*z - ZOOM_STEP).max(ZOOM_MIN))
            >
                "−"
            </Button>
            <span class="text-[10px] font-medium w-8 text-center font-mono">
                {move || format!("{}%", zoom.get())}
            </span>
            <Button
                variant=ButtonVariant::Ghost
                size=ButtonSize::Icon
                class="size-6"
                attr:aria-label="ズームイン"
                attr:disabled=move || zoom.get() >= ZOOM_MAX
                on:click=move |_| zoom.update(|z| *z = (*z + ZOOM_STEP).min(ZOOM_MAX))
            >
                "+"
            </Button>
        </div>
    }
}

/// Zoom scales against A4 paper (210mm x 297mm).
#[component]
pub fn PdfPreview(pdf_url: RwSignal<Option<String>>, zoom: RwSignal<i32>) -> impl IntoView {
    view! {
        <Show
            when=move || pdf_url.get().is_some()
            fallback=|| view! {
                <div class="h-full p-8 flex items-start justify-center">
                    <div class="w-full max-w-[500px] min-h-[700px] bg-background border rounded-sm p-12 flex flex-col items-center justify-center text-muted-foreground">
                        <p class="text-sm font-medium">"PDFプレビュー"</p>
                        <p class="text-xs mt-2">"コンパイルボタンを押してPDFを生成してください"</p>
                    </div>
                </div>
            }
        >
            <div class="min-h-full flex items-start justify-center p-8">
                <div
                    class="bg-background border rounded-sm overflow-hidden"
                    style=move || {
                        let scale = zoom.get() as f64 / 100.0;
                        format!("width: {}mm; min-height: {}mm;", 210.0 * scale, 297.0 * scale)
                    }
                >
                    <iframe
                        src=move || {
                            pdf_url
                                .get()
                                .map(|url| format!("{url}#toolbar=0&navpanes=0&scrollbar=1"))
                                .unwrap_or_default()
                        }
                        class="w-full border-0"
                        style=move || {
                            let scale = zoom.get() as f64 / 100.0;
                            format!("height: {}mm; min-height: 500px;", 297.0 * scale)
                        }
                        title="PDF Preview"
                    ></iframe>
                </div>
            </div>
        </Show>
    }
}

/// Free-form notes stored on the project. Saved with an explicit button;
/// the buffer is intentionally not re-seeded when the detail re-fetches.
#[component]
pub fn SolutionNotes(project_id: String, detail: RwSignal<ProjectDetail>) -> impl IntoView {
    let app_state = expect_context::<AppContext>().0;
    let project_id = StoredValue::new(project_id);

    let notes = RwSignal::new(
        detail.with_untracked(|d| d.solution_notes.clone().unwrap_or_default()),
    );
    let saving = RwSignal::new(false);
    let save_error: RwSignal<Option<String>> = RwSignal::new(None);
    let save_success = RwSignal::new(false);

    let on_save = move |_| {
        if saving.get_untracked() {
            return;
        }
        saving.set(true);
        save_error.set(None);
        save_success.set(false);

        let client = app_state.api_client.get_untracked();
        let id = project_id.get_value();
        let value = notes.get_untracked();

        spawn_local(async move {
            match client.update_solution_notes(&id, &value).await {
                Ok(updated) => {
                    detail.set(updated);
                    save_success.set(true);
                    let _ = window().set_timeout_with_callback_and_timeout_and_arguments_0(
                        wasm_bindgen::closure::Closure::once_into_js(move || {
                            save_success.set(false);
                        })
                        .as_ref()
                        .unchecked_ref(),
                        3000,
                    );
                }
                Err(e) => save_error.set(Some(e.user_message())),
            }
            saving.set(false);
        });
    };

    view! {
        <div class="h-full p-6">
            <div class="max-w-2xl mx-auto">
                <div class="mb-4">
                    <label class="block text-sm font-medium mb-2">"解答ノート"</label>
                    <Textarea
                        class="h-64 rounded-2xl px-4 py-3"
                        placeholder="解答の補足やメモを入力してください..."
                        bind_value=notes
                    />
                    <div class="mt-2 flex items-center justify-end">
                        <Button
                            variant=ButtonVariant::Secondary
                            class="rounded-full px-5"
                            attr:disabled=move || saving.get()
                            on:click=on_save
                        >
                            {move || if saving.get() { "保存中..." } else { "保存" }}
                        </Button>
                    </div>
                </div>

                <Show when=move || save_error.get().is_some() fallback=|| ().into_view()>
                    <div class="p-3 bg-destructive/10 border border-destructive/30 rounded-lg flex items-start gap-2">
                        <div class="flex-1">
                            <p class="text-xs font-semibold text-destructive mb-1">"保存エラー"</p>
                            <p class="text-xs text-destructive">{move || save_error.get().unwrap_or_default()}</p>
                        </div>
                        <button
                            class="text-destructive/60 hover:text-destructive shrink-0"
                            aria-label="エラーを閉じる"
                            on:click=move |_| save_error.set(None)
                        >
                            <X class="size-4" />
                        </button>
                    </div>
                </Show>

                <Show when=move || save_success.get() fallback=|| ().into_view()>
                    <div class="p-3 bg-success/10 border border-success/30 rounded-lg flex items-center gap-2">
                        <p class="text-xs font-semibold text-success">"保存しました"</p>
                    </div>
                </Show>
            </div>
        </div>
    }
}
