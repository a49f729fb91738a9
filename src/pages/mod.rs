use crate::api::TemplateUpsertRequest;
use crate::components::hooks::use_confirm::{use_confirm, ConfirmState};
use crate::components::ui::{
    Alert, AlertActions, AlertDescription, Button, ButtonSize, ButtonVariant, Card, CardContent,
    CardDescription, CardHeader, CardTitle, Input, Label, Spinner, Textarea,
};
use crate::editor::{template, ProjectEditor};
use crate::filter::{filter_and_sort, SortKey, SortOrder};
use crate::models::{Project, ProjectDetail, Template, UserAccount, ViewMode};
use crate::state::AppContext;
use crate::storage::{save_user_to_storage, save_view_mode};
use crate::util::{format_date_ymd, relative_time_label};
use icons::{Check, ChevronDown};
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate, use_params};
use leptos_router::params::Params;
use leptos_router::NavigateOptions;
use wasm_bindgen::JsCast;

/// Shown when a project list row has a blank title.
pub(crate) fn display_title(title: &str) -> String {
    if title.trim().is_empty() {
        "無題のプロジェクト".to_string()
    } else {
        title.to_string()
    }
}

const SORT_CHOICES: [(SortKey, SortOrder); 4] = [
    (SortKey::UpdatedAt, SortOrder::Desc),
    (SortKey::UpdatedAt, SortOrder::Asc),
    (SortKey::CreatedAt, SortOrder::Desc),
    (SortKey::CreatedAt, SortOrder::Asc),
];

pub(crate) fn sort_choice_label(key: SortKey, order: SortOrder) -> &'static str {
    match (key, order) {
        (SortKey::UpdatedAt, SortOrder::Desc) => "最終更新順（新しい順）",
        (SortKey::UpdatedAt, SortOrder::Asc) => "最終更新順（古い順）",
        (SortKey::CreatedAt, SortOrder::Desc) => "作成日順（新しい順）",
        (SortKey::CreatedAt, SortOrder::Asc) => "作成日順（古い順）",
    }
}

/// Clear local state and send the browser to the login screen. Used whenever
/// an authenticated call answers 401.
fn redirect_to_login(app_state: AppContext) {
    app_state.0.clear_session();
    let _ = window().location().set_href("/login");
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let username: RwSignal<String> = RwSignal::new(String::new());
    let password: RwSignal<String> = RwSignal::new(String::new());
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let loading: RwSignal<bool> = RwSignal::new(false);

    let app_state = expect_context::<AppContext>();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if loading.get_untracked() {
            return;
        }

        let username_val = username.get();
        let password_val = password.get();
        if username_val.trim().is_empty() || password_val.is_empty() {
            return;
        }

        let client = app_state.0.api_client.get_untracked();

        loading.set(true);
        error.set(None);

        spawn_local(async move {
            match client.login(&username_val, &password_val).await {
                // A 200 without the identity fields is still a failure.
                Ok(resp) => match (resp.success, resp.user_id, resp.username) {
                    (true, Some(id), Some(name)) => {
                        let user = UserAccount {
                            id,
                            username: name,
                            email: resp.email.unwrap_or_default(),
                        };
                        save_user_to_storage(&user);
                        app_state.0.current_user.set(Some(user));
                        // Full reload so the CSRF bootstrap picks up the
                        // rotated token.
                        let _ = window().location().set_href("/project");
                    }
                    _ => error.set(Some(
                        "ログインに失敗しました。もう一度お試しください。".to_string(),
                    )),
                },
                Err(e) => error.set(Some(e.user_message())),
            }
            loading.set(false);
        });
    };

    view! {
        <div class="min-h-screen bg-background">
            <div class="mx-auto flex min-h-screen w-full max-w-sm flex-col justify-center px-4 py-10">
                <div class="mb-2 flex items-center justify-center">
                    <a href="/" class="text-lg font-semibold tracking-tight text-foreground">"MathOCR"</a>
                </div>
                <p class="mb-6 text-center text-[10px] text-muted-foreground">"プリント作成をもっと手軽に。"</p>

                <Card>
                    <CardHeader>
                        <CardTitle class="text-lg">"ログイン"</CardTitle>
                        <CardDescription class="text-xs">"ユーザー名とパスワードを入力してください。"</CardDescription>
                    </CardHeader>

                    <CardContent>
                        <form class="flex flex-col gap-3" on:submit=on_submit>
                            <div class="flex flex-col gap-1.5">
                                <Label html_for="username" class="text-xs">"ユーザー名"</Label>
                                <Input
                                    id="username"
                                    r#type="text"
                                    placeholder="ユーザー名を入力"
                                    bind_value=username
                                    required=true
                                    class="h-8 text-sm"
                                />
                            </div>

                            <div class="flex flex-col gap-1.5">
                                <Label html_for="password" class="text-xs">"パスワード"</Label>
                                <Input
                                    id="password"
                                    r#type="password"
                                    placeholder="パスワードを入力"
                                    bind_value=password
                                    required=true
                                    class="h-8 text-sm"
                                />
                            </div>

                            <Show when=move || error.get().is_some() fallback=|| ().into_view()>
                                {move || {
                                    error.get().map(|e| {
                                        view! {
                                            <Alert class="border-destructive/30">
                                                <AlertDescription class="text-destructive text-xs">
                                                    {e}
                                                </AlertDescription>
                                            </Alert>
                                        }
                                    })
                                }}
                            </Show>

                            <Button
                                class="w-full rounded-full"
                                size=ButtonSize::Sm
                                attr:disabled=move || loading.get()
                            >
                                <span class="inline-flex items-center gap-2">
                                    <Show when=move || loading.get() fallback=|| ().into_view()>
                                        <Spinner />
                                    </Show>
                                    {move || if loading.get() { "ログイン中..." } else { "ログイン" }}
                                </span>
                            </Button>
                        </form>
                    </CardContent>
                </Card>
            </div>
        </div>
    }
}

/// Authenticated layout: sidebar plus the routed page. Unauthenticated
/// visitors get the login form in place.
///
/// The cached session is re-validated against `/api/auth/user/` on every
/// mount; a 401 tears the session down.
#[component]
pub fn AppShell(children: ChildrenFn) -> impl IntoView {
    let app_state = expect_context::<AppContext>();

    // Store children so the view macro sees an `Fn` (not an `FnOnce`).
    let children = StoredValue::new(children);

    Effect::new(move |_| {
        let client = app_state.0.api_client.get_untracked();
        let had_cached_user = app_state.0.current_user.get_untracked().is_some();

        spawn_local(async move {
            match client.current_user().await {
                Ok(user) => {
                    save_user_to_storage(&user);
                    app_state.0.current_user.set(Some(user));
                }
                Err(e) if e.is_unauthorized() => {
                    if had_cached_user {
                        redirect_to_login(app_state);
                    }
                }
                // Transient failure: keep the cached session, page loads
                // will surface their own errors.
                Err(_) => {}
            }
        });
    });

    view! {
        <Show
            when=move || app_state.0.current_user.get().is_some()
            fallback=move || view! { <LoginPage /> }
        >
            <div class="h-screen flex overflow-hidden bg-muted/40 text-foreground">
                <SidebarNav />
                <main class="flex-1 flex flex-col min-w-0 overflow-hidden p-4">
                    {move || children.with_value(|c| c())}
                </main>
            </div>
        </Show>
    }
}

#[component]
pub fn SidebarNav() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let location = use_location();
    let pathname = move || location.pathname.get();

    let username = move || {
        app_state
            .0
            .current_user
            .get()
            .map(|u| u.username)
            .unwrap_or_default()
    };
    let avatar_letter = move || {
        username()
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    };

    let on_logout = move |_: web_sys::MouseEvent| {
        let client = app_state.0.api_client.get_untracked();
        spawn_local(async move {
            client.logout().await;
            redirect_to_login(app_state);
        });
    };

    view! {
        <aside class="hidden w-72 shrink-0 p-3 md:block">
            <div class="flex h-full flex-col rounded-3xl border bg-background p-4 shadow-sm">
                <div class="mt-8 mb-10 flex flex-col items-center gap-2 px-2">
                    <p class="text-center text-[10px] text-muted-foreground">"プリント作成をもっと手軽に。"</p>
                    <a href="/project" class="text-2xl font-bold tracking-tight">"MathOCR"</a>
                </div>

                <nav class="space-y-2">
                    <SidebarNavLink
                        href="/project"
                        label="ホーム"
                        active=Signal::derive(move || pathname().starts_with("/project"))
                    >
                        <HomeGlyph class="size-5" />
                    </SidebarNavLink>
                    <SidebarNavLink
                        href="/template"
                        label="テンプレート"
                        active=Signal::derive(move || pathname().starts_with("/template"))
                    >
                        <PencilGlyph class="size-5" />
                    </SidebarNavLink>
                    <SidebarNavLink
                        href="/trash"
                        label="ゴミ箱"
                        active=Signal::derive(move || pathname().starts_with("/trash"))
                    >
                        <TrashGlyph class="size-5" />
                    </SidebarNavLink>
                    <SidebarNavLink
                        href="/settings"
                        label="設定"
                        active=Signal::derive(move || pathname().starts_with("/settings"))
                    >
                        <SlidersGlyph class="size-5" />
                    </SidebarNavLink>
                </nav>

                <div class="mt-auto rounded-xl border p-4">
                    <div class="flex items-center gap-3 p-1">
                        <div class="flex h-10 w-10 shrink-0 items-center justify-center rounded-full bg-primary text-sm font-semibold text-primary-foreground">
                            {avatar_letter}
                        </div>
                        <p class="min-w-0 truncate text-sm font-semibold">{username}</p>
                    </div>
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Sm
                        class="mt-3 w-full rounded-full"
                        on:click=on_logout
                    >
                        "ログアウト"
                    </Button>
                </div>
            </div>
        </aside>
    }
}

#[component]
pub fn SidebarNavLink(
    href: &'static str,
    label: &'static str,
    #[prop(into)] active: Signal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            href=href
            class=move || {
                if active.get() {
                    "flex items-center gap-3 rounded-xl bg-muted px-4 py-3 text-sm font-medium text-foreground"
                } else {
                    "flex items-center gap-3 rounded-xl px-4 py-3 text-sm text-muted-foreground transition-colors hover:bg-muted/60 hover:text-foreground"
                }
            }
        >
            {children()}
            <span>{label}</span>
        </a>
    }
}

/// Gradient page header shared by the list pages and the editor.
#[component]
pub fn ListHeader(
    title: &'static str,
    #[prop(optional, into)] count: Option<Signal<usize>>,
) -> impl IntoView {
    view! {
        <header class="rounded-xl bg-linear-to-br from-sky-500 to-rose-400 flex items-center justify-between px-6 py-3 h-16 mb-4 shrink-0 z-10">
            <h1 class="flex items-center gap-3 text-2xl font-semibold text-white">
                {title}
                {count.map(|count| view! {
                    <Show when=move || { count.get() > 0 } fallback=|| ().into_view()>
                        <span class="rounded-full bg-white px-2.5 py-1 text-xs font-medium text-green-600">
                            {move || count.get()}
                        </span>
                    </Show>
                })}
            </h1>
        </header>
    }
}

/// Confirmation modal driven by a [`ConfirmState`] signal. The pending
/// entity id is handed to `on_confirm`; the caller owns the request and
/// settles the state afterwards.
#[component]
pub fn ConfirmDialog(
    state: RwSignal<ConfirmState>,
    title: &'static str,
    message: &'static str,
    confirm_label: &'static str,
    #[prop(optional)] danger: bool,
    error: RwSignal<Option<String>>,
    on_confirm: Callback<String>,
) -> impl IntoView {
    let processing = move || state.with(|s| s.is_processing());

    let on_cancel = move |_: web_sys::MouseEvent| {
        if state.with_untracked(|s| s.is_processing()) {
            return;
        }
        state.update(|s| s.close());
        error.set(None);
    };

    let on_confirm_click = move |_: web_sys::MouseEvent| {
        if state.with_untracked(|s| s.is_processing()) {
            return;
        }
        let Some(id) = state.with_untracked(|s| s.pending_id().map(|id| id.to_string())) else {
            return;
        };
        on_confirm.run(id);
    };

    view! {
        <Show when=move || state.with(|s| s.pending_id().is_some()) fallback=|| ().into_view()>
            <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/30 px-4">
                <div class="w-full max-w-sm rounded-md border border-border bg-background p-4 shadow-lg">
                    <div class="mb-3 space-y-1">
                        <div class="text-sm font-medium">{title}</div>
                        <div class=if danger {
                            "text-xs text-destructive"
                        } else {
                            "text-xs text-muted-foreground"
                        }>{message}</div>
                    </div>

                    <div class="space-y-2">
                        <Show when=move || error.get().is_some() fallback=|| ().into_view()>
                            {move || error.get().map(|e| view! {
                                <Alert class="border-destructive/30">
                                    <AlertDescription class="text-destructive text-xs">{e}</AlertDescription>
                                </Alert>
                            })}
                        </Show>

                        <div class="flex items-center justify-end gap-2 pt-2">
                            <Button
                                variant=ButtonVariant::Outline
                                size=ButtonSize::Sm
                                attr:disabled=processing
                                on:click=on_cancel
                            >
                                "キャンセル"
                            </Button>
                            <Button
                                variant=if danger { ButtonVariant::Outline } else { ButtonVariant::Default }
                                size=ButtonSize::Sm
                                class=if danger { "border-destructive/40 text-destructive" } else { "" }
                                attr:disabled=processing
                                on:click=on_confirm_click
                            >
                                <span class="inline-flex items-center gap-2">
                                    <Show when=processing fallback=|| ().into_view()>
                                        <Spinner />
                                    </Show>
                                    {confirm_label}
                                </span>
                            </Button>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn ProjectListPage() -> impl IntoView {
    view! {
        <AppShell>
            <ProjectListView />
        </AppShell>
    }
}

#[component]
pub fn ProjectListView() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let navigate = StoredValue::new(use_navigate());

    let query: RwSignal<String> = RwSignal::new(String::new());
    let sort_key: RwSignal<SortKey> = RwSignal::new(SortKey::UpdatedAt);
    let sort_order: RwSignal<SortOrder> = RwSignal::new(SortOrder::Desc);
    let view_mode = app_state.0.view_mode;

    let create_open: RwSignal<bool> = RwSignal::new(false);
    let create_title: RwSignal<String> = RwSignal::new(String::new());
    let create_error: RwSignal<Option<String>> = RwSignal::new(None);
    let create_loading: RwSignal<bool> = RwSignal::new(false);
    let create_title_ref: NodeRef<html::Input> = NodeRef::new();

    let delete_confirm = use_confirm();
    let delete_error: RwSignal<Option<String>> = RwSignal::new(None);

    // Every mutation re-fetches; the id guard drops responses that lost the
    // race against a newer request.
    let load_projects = move || {
        let req_id = app_state.0.projects_request_id.get_untracked().wrapping_add(1);
        app_state.0.projects_request_id.set(req_id);
        app_state.0.projects_loading.set(true);
        app_state.0.projects_error.set(None);

        let client = app_state.0.api_client.get_untracked();
        spawn_local(async move {
            let result = client.list_projects().await;
            if app_state.0.projects_request_id.get_untracked() != req_id {
                return;
            }
            match result {
                Ok(projects) => app_state.0.projects.set(projects),
                Err(e) if e.is_unauthorized() => {
                    redirect_to_login(app_state);
                    return;
                }
                Err(e) => app_state.0.projects_error.set(Some(e.user_message())),
            }
            app_state.0.projects_loading.set(false);
        });
    };

    Effect::new(move |_| load_projects());

    let filtered = move || {
        filter_and_sort(
            &app_state.0.projects.get(),
            &query.get(),
            sort_key.get(),
            sort_order.get(),
        )
    };
    let has_query = Signal::derive(move || !query.get().trim().is_empty());

    let open_create = move || {
        create_title.set(String::new());
        create_error.set(None);
        create_open.set(true);
    };
    let open_create_cb = Callback::new(move |_: ()| open_create());

    // Focus the title input once the dialog is mounted.
    Effect::new(move |_| {
        if !create_open.get() {
            return;
        }
        let _ = window().set_timeout_with_callback_and_timeout_and_arguments_0(
            wasm_bindgen::closure::Closure::once_into_js(move || {
                if let Some(el) = create_title_ref.get_untracked() {
                    let _ = el.focus();
                }
            })
            .as_ref()
            .unchecked_ref(),
            0,
        );
    });

    let submit_create = move || {
        if create_loading.get_untracked() {
            return;
        }

        let title = create_title.get_untracked();
        if title.trim().is_empty() {
            create_error.set(Some("プロジェクトタイトルを入力してください".to_string()));
            return;
        }

        let client = app_state.0.api_client.get_untracked();
        create_loading.set(true);
        create_error.set(None);

        spawn_local(async move {
            match client.create_project(title.trim()).await {
                Ok(project) => {
                    create_open.set(false);
                    navigate.with_value(|nav| {
                        nav(&format!("/project/{}/editor", project.id), Default::default());
                    });
                }
                Err(e) if e.is_unauthorized() => {
                    redirect_to_login(app_state);
                }
                Err(e) => create_error.set(Some(e.user_message())),
            }
            create_loading.set(false);
        });
    };

    let on_open = Callback::new(move |id: String| {
        navigate.with_value(|nav| {
            nav(&format!("/project/{id}/editor"), Default::default());
        });
    });

    let on_delete_open = Callback::new(move |id: String| {
        delete_error.set(None);
        delete_confirm.update(|s| s.open(id));
    });

    let on_delete = Callback::new(move |id: String| {
        delete_confirm.update(|s| s.start_processing());
        delete_error.set(None);

        let client = app_state.0.api_client.get_untracked();
        spawn_local(async move {
            match client.delete_project(&id).await {
                Ok(_) => {
                    delete_confirm.update(|s| s.reset());
                    load_projects();
                }
                Err(e) if e.is_unauthorized() => {
                    redirect_to_login(app_state);
                }
                Err(_) => {
                    delete_error.set(Some("プロジェクトの削除に失敗しました".to_string()));
                    delete_confirm.update(|s| s.stop_processing());
                }
            }
        });
    });

    view! {
        <ListHeader
            title="プロジェクト"
            count=Signal::derive(move || app_state.0.projects.get().len())
        />

        <div class="flex-1 flex flex-col min-w-0 overflow-hidden rounded-2xl border bg-background shadow-sm">
            <div class="mb-4 flex shrink-0 items-center justify-between gap-3 border-b px-6 py-4">
                <div class="max-w-md flex-1">
                    <div class="flex items-center gap-2 rounded-xl border bg-background px-4 shadow-sm">
                        <SearchGlyph class="size-4 shrink-0 text-muted-foreground" />
                        <Input
                            r#type="search"
                            placeholder="検索..."
                            bind_value=query
                            class="h-10 flex-1 border-0 px-0 shadow-none focus-visible:ring-0 focus-visible:border-transparent"
                        />
                    </div>
                </div>
                <div class="flex items-center gap-3">
                    <SortMenu sort_key=sort_key sort_order=sort_order />
                    <ViewModeToggle view_mode=view_mode persist=true />
                </div>
            </div>

            <div class="flex-1 overflow-auto px-6 pb-6">
                <Show when=move || app_state.0.projects_error.get().is_some() fallback=|| ().into_view()>
                    {move || app_state.0.projects_error.get().map(|e| view! {
                        <Alert class="mb-4 border-destructive/30">
                            <AlertDescription class="text-destructive text-xs">{e}</AlertDescription>
                            <AlertActions>
                                <Button
                                    variant=ButtonVariant::Outline
                                    size=ButtonSize::Sm
                                    on:click=move |_| load_projects()
                                >
                                    "再試行"
                                </Button>
                            </AlertActions>
                        </Alert>
                    })}
                </Show>

                <Show
                    when=move || !(app_state.0.projects_loading.get() && app_state.0.projects.get().is_empty())
                    fallback=|| view! {
                        <div class="flex justify-center py-16">
                            <Spinner class="size-6" />
                        </div>
                    }
                >
                    <Show
                        when=move || !filtered().is_empty()
                        fallback=move || view! {
                            <ProjectEmptyState has_query=has_query on_create=open_create_cb />
                        }
                    >
                        <div class=move || match view_mode.get() {
                            ViewMode::Grid => "grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4",
                            ViewMode::List => "flex flex-col gap-3",
                        }>
                            <CreatePlaceholderCard
                                view_mode=view_mode
                                label="新しいプロジェクトを作成"
                                on_click=open_create_cb
                            />
                            {move || {
                                filtered()
                                    .into_iter()
                                    .map(|project| view! {
                                        <ProjectCard
                                            project=project
                                            view_mode=view_mode
                                            on_open=on_open
                                            on_delete=on_delete_open
                                        />
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </Show>
                </Show>
            </div>
        </div>

        <Show when=move || create_open.get() fallback=|| ().into_view()>
            <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/30 px-4">
                <div class="w-full max-w-sm rounded-md border border-border bg-background p-4 shadow-lg">
                    <div class="mb-3 space-y-1">
                        <div class="text-sm font-medium">"新規プロジェクト作成"</div>
                        <div class="text-xs text-muted-foreground">"新しいプロジェクトのタイトルを入力してください"</div>
                    </div>

                    <div class="space-y-2">
                        <div class="space-y-1">
                            <Label class="text-xs">"タイトル"</Label>
                            <Input
                                node_ref=create_title_ref
                                bind_value=create_title
                                placeholder="例: 数学II 演習問題"
                                class="h-8 text-sm border-border bg-background"
                                on:keydown=move |ev: web_sys::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        submit_create();
                                    }
                                }
                            />
                        </div>

                        <Show when=move || create_error.get().is_some() fallback=|| ().into_view()>
                            {move || create_error.get().map(|e| view! {
                                <Alert class="border-destructive/30">
                                    <AlertDescription class="text-destructive text-xs">{e}</AlertDescription>
                                </Alert>
                            })}
                        </Show>

                        <div class="flex items-center justify-end gap-2 pt-2">
                            <Button
                                variant=ButtonVariant::Outline
                                size=ButtonSize::Sm
                                attr:disabled=move || create_loading.get()
                                on:click=move |_| create_open.set(false)
                            >
                                "キャンセル"
                            </Button>
                            <Button
                                size=ButtonSize::Sm
                                attr:disabled=move || {
                                    create_loading.get() || create_title.get().trim().is_empty()
                                }
                                on:click=move |_| submit_create()
                            >
                                <span class="inline-flex items-center gap-2">
                                    <Show when=move || create_loading.get() fallback=|| ().into_view()>
                                        <Spinner />
                                    </Show>
                                    {move || if create_loading.get() { "作成中..." } else { "作成する" }}
                                </span>
                            </Button>
                        </div>
                    </div>
                </div>
            </div>
        </Show>

        <ConfirmDialog
            state=delete_confirm
            title="プロジェクトを削除しますか？"
            message="このプロジェクトはゴミ箱に移動されます。後で復元することができます。"
            confirm_label="削除"
            danger=true
            error=delete_error
            on_confirm=on_delete
        />
    }
}

#[component]
pub fn SortMenu(sort_key: RwSignal<SortKey>, sort_order: RwSignal<SortOrder>) -> impl IntoView {
    let open: RwSignal<bool> = RwSignal::new(false);

    view! {
        <div class="relative">
            <Button
                variant=ButtonVariant::Outline
                size=ButtonSize::Sm
                class="rounded-xl"
                on:click=move |_| open.update(|v| *v = !*v)
            >
                <span class="text-xs">
                    {move || sort_choice_label(sort_key.get(), sort_order.get())}
                </span>
                <ChevronDown class="size-3.5 text-muted-foreground" />
            </Button>

            <Show when=move || open.get() fallback=|| ().into_view()>
                <div class="fixed inset-0 z-40" on:click=move |_| open.set(false)></div>
                <div class="absolute right-0 z-50 mt-1 w-56 rounded-md border bg-background p-1 shadow-md">
                    {SORT_CHOICES
                        .iter()
                        .map(|&(key, order)| view! {
                            <button
                                class="flex w-full items-center gap-2 rounded-sm px-2 py-1.5 text-left text-xs hover:bg-accent"
                                on:click=move |_| {
                                    sort_key.set(key);
                                    sort_order.set(order);
                                    open.set(false);
                                }
                            >
                                <span class="flex w-4 items-center justify-center">
                                    <Show
                                        when=move || {
                                            sort_key.get() == key && sort_order.get() == order
                                        }
                                        fallback=|| ().into_view()
                                    >
                                        <Check class="size-3.5" />
                                    </Show>
                                </span>
                                {sort_choice_label(key, order)}
                            </button>
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn ViewModeToggle(
    view_mode: RwSignal<ViewMode>,
    #[prop(optional)] persist: bool,
) -> impl IntoView {
    let set_mode = move |mode: ViewMode| {
        view_mode.set(mode);
        if persist {
            save_view_mode(mode);
        }
    };

    let segment_class = move |mode: ViewMode| {
        if view_mode.get() == mode {
            "flex h-full w-1/2 items-center justify-center rounded-2xl bg-background text-foreground shadow-sm"
        } else {
            "flex h-full w-1/2 items-center justify-center rounded-2xl text-muted-foreground transition-colors hover:text-foreground"
        }
    };

    view! {
        <div class="flex h-9 w-[76px] items-center rounded-3xl bg-muted p-1">
            <button
                class=move || segment_class(ViewMode::Grid)
                aria-label="グリッド表示"
                on:click=move |_| set_mode(ViewMode::Grid)
            >
                <GridGlyph class="size-4" />
            </button>
            <button
                class=move || segment_class(ViewMode::List)
                aria-label="リスト表示"
                on:click=move |_| set_mode(ViewMode::List)
            >
                <ListGlyph class="size-4" />
            </button>
        </div>
    }
}

#[component]
pub fn ProjectEmptyState(
    #[prop(into)] has_query: Signal<bool>,
    #[prop(optional)] on_create: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="flex h-full flex-col items-center justify-center py-16 text-center">
            <FileGlyph class="mb-4 size-16 text-muted-foreground opacity-50" />
            <p class="mb-2 text-sm text-muted-foreground">
                {move || {
                    if has_query.get() {
                        "検索結果が見つかりませんでした"
                    } else {
                        "プロジェクトがありません"
                    }
                }}
            </p>
            <Show when=move || !has_query.get() fallback=|| ().into_view()>
                <p class="mb-4 text-xs text-muted-foreground">"新規プロジェクトを作成して始めましょう"</p>
                {on_create.map(|on_create| view! {
                    <Button class="rounded-full" on:click=move |_| on_create.run(())>
                        "新規プロジェクトを作成"
                    </Button>
                })}
            </Show>
        </div>
    }
}

/// Dashed "create" tile rendered at the head of a non-empty grid.
#[component]
pub fn CreatePlaceholderCard(
    #[prop(into)] view_mode: Signal<ViewMode>,
    label: &'static str,
    on_click: Callback<()>,
) -> impl IntoView {
    view! {
        {move || match view_mode.get() {
            ViewMode::Grid => view! {
                <Card
                    class="group flex min-h-[200px] cursor-pointer flex-col items-center justify-center gap-2 border-2 border-dashed p-8 transition-colors hover:bg-muted/40"
                    on:click=move |_| on_click.run(())
                >
                    <PlusSquareGlyph class="size-12 text-muted-foreground group-hover:text-foreground" />
                    <span class="text-sm font-medium">{label}</span>
                </Card>
            }
            .into_any(),
            ViewMode::List => view! {
                <Card
                    class="group flex min-h-[72px] cursor-pointer flex-row items-center gap-4 border-2 border-dashed px-4 py-4 transition-colors hover:bg-muted/40"
                    on:click=move |_| on_click.run(())
                >
                    <div class="flex h-10 w-10 shrink-0 items-center justify-center rounded-lg border bg-muted/40">
                        <PlusSquareGlyph class="size-5 text-muted-foreground group-hover:text-foreground" />
                    </div>
                    <span class="text-sm font-medium">{label}</span>
                </Card>
            }
            .into_any(),
        }}
    }
}

#[component]
pub fn ProjectCard(
    project: Project,
    #[prop(into)] view_mode: Signal<ViewMode>,
    on_open: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let id = StoredValue::new(project.id);
    let title = StoredValue::new(display_title(&project.title));
    let updated_at = StoredValue::new(project.updated_at);
    let created_at = StoredValue::new(project.created_at);

    let open = move |_: web_sys::MouseEvent| on_open.run(id.get_value());
    let delete = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        on_delete.run(id.get_value());
    };

    let delete_button = move || {
        view! {
            <div class="hidden shrink-0 items-center group-hover:flex">
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Icon
                    class="h-7 w-7 text-destructive"
                    attr:title="削除"
                    on:click=delete
                >
                    <TrashGlyph class="size-4" />
                </Button>
            </div>
        }
    };

    view! {
        {move || match view_mode.get() {
            ViewMode::Grid => view! {
                <Card
                    class="group relative cursor-pointer gap-0 p-5 transition-colors hover:bg-muted/20 hover:ring-1 hover:ring-border"
                    on:click=open
                >
                    <div class="flex items-start justify-between">
                        <FolderGlyph class="size-10 text-sky-500" />
                        {delete_button()}
                    </div>

                    <h2 class="mt-2 mb-4 truncate text-base font-semibold">
                        {title.get_value()}
                    </h2>

                    <div class="mt-auto space-y-2 border-t pt-3">
                        <div class="flex items-center gap-2 text-xs text-muted-foreground">
                            <ClockGlyph class="size-3.5 shrink-0" />
                            <span>{relative_time_label(&updated_at.get_value())}</span>
                        </div>
                        <div class="flex items-center gap-2 text-xs text-muted-foreground">
                            <CalendarGlyph class="size-3.5 shrink-0" />
                            <span>{format_date_ymd(&created_at.get_value())}</span>
                        </div>
                    </div>
                </Card>
            }
            .into_any(),
            ViewMode::List => view! {
                <Card
                    class="group relative min-h-[72px] cursor-pointer flex-row items-center gap-4 px-4 py-4 transition-colors hover:bg-muted/20 hover:ring-1 hover:ring-border"
                    on:click=open
                >
                    <div class="flex h-10 w-10 shrink-0 items-center justify-center rounded-xl border bg-muted/30">
                        <FolderGlyph class="size-5 text-sky-500" />
                    </div>

                    <div class="flex min-w-0 flex-1 items-center gap-6">
                        <h2 class="min-w-0 flex-1 truncate text-base font-semibold">
                            {title.get_value()}
                        </h2>
                        <div class="hidden shrink-0 items-center gap-6 sm:flex">
                            <div class="flex items-center gap-2 text-xs text-muted-foreground">
                                <ClockGlyph class="size-3.5 shrink-0" />
                                <span>{relative_time_label(&updated_at.get_value())}</span>
                            </div>
                            <div class="flex items-center gap-2 text-xs text-muted-foreground">
                                <CalendarGlyph class="size-3.5 shrink-0" />
                                <span>{format_date_ymd(&created_at.get_value())}</span>
                            </div>
                        </div>
                    </div>

                    {delete_button()}
                </Card>
            }
            .into_any(),
        }}
    }
}

#[component]
pub fn TrashPage() -> impl IntoView {
    view! {
        <AppShell>
            <TrashListView />
        </AppShell>
    }
}

#[component]
pub fn TrashListView() -> impl IntoView {
    let app_state = expect_context::<AppContext>();

    let projects: RwSignal<Vec<Project>> = RwSignal::new(vec![]);
    let loading: RwSignal<bool> = RwSignal::new(false);
    let error: RwSignal<Option<String>> = RwSignal::new(None);

    let sort_key: RwSignal<SortKey> = RwSignal::new(SortKey::UpdatedAt);
    let sort_order: RwSignal<SortOrder> = RwSignal::new(SortOrder::Desc);
    // Trash keeps its own, non-persisted rendering mode.
    let view_mode: RwSignal<ViewMode> = RwSignal::new(ViewMode::Grid);

    let restore_confirm = use_confirm();
    let restore_error: RwSignal<Option<String>> = RwSignal::new(None);
    let delete_confirm = use_confirm();
    let delete_error: RwSignal<Option<String>> = RwSignal::new(None);

    let load_trashed = move || {
        if loading.get_untracked() {
            return;
        }
        loading.set(true);
        error.set(None);

        let client = app_state.0.api_client.get_untracked();
        spawn_local(async move {
            match client.list_trashed_projects().await {
                Ok(list) => projects.set(list),
                Err(e) if e.is_unauthorized() => {
                    redirect_to_login(app_state);
                    return;
                }
                Err(e) => error.set(Some(e.user_message())),
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| load_trashed());

    let sorted = move || filter_and_sort(&projects.get(), "", sort_key.get(), sort_order.get());

    let on_restore_open = Callback::new(move |id: String| {
        restore_error.set(None);
        restore_confirm.update(|s| s.open(id));
    });
    let on_delete_open = Callback::new(move |id: String| {
        delete_error.set(None);
        delete_confirm.update(|s| s.open(id));
    });

    let on_restore = Callback::new(move |id: String| {
        restore_confirm.update(|s| s.start_processing());
        restore_error.set(None);

        let client = app_state.0.api_client.get_untracked();
        spawn_local(async move {
            match client.restore_project(&id).await {
                Ok(_) => {
                    restore_confirm.update(|s| s.reset());
                    load_trashed();
                }
                Err(e) if e.is_unauthorized() => {
                    redirect_to_login(app_state);
                }
                Err(_) => {
                    restore_error.set(Some("プロジェクトの復元に失敗しました".to_string()));
                    restore_confirm.update(|s| s.stop_processing());
                }
            }
        });
    });

    let on_permanent_delete = Callback::new(move |id: String| {
        delete_confirm.update(|s| s.start_processing());
        delete_error.set(None);

        let client = app_state.0.api_client.get_untracked();
        spawn_local(async move {
            match client.permanently_delete_project(&id).await {
                Ok(_) => {
                    delete_confirm.update(|s| s.reset());
                    load_trashed();
                }
                Err(e) if e.is_unauthorized() => {
                    redirect_to_login(app_state);
                }
                Err(_) => {
                    delete_error.set(Some("プロジェクトの完全削除に失敗しました".to_string()));
                    delete_confirm.update(|s| s.stop_processing());
                }
            }
        });
    });

    view! {
        <ListHeader title="ゴミ箱" count=Signal::derive(move || projects.get().len()) />

        <div class="flex-1 flex flex-col min-w-0 overflow-hidden rounded-2xl border bg-background shadow-sm">
            <div class="mb-4 flex shrink-0 items-center justify-end gap-3 border-b px-6 py-4">
                <SortMenu sort_key=sort_key sort_order=sort_order />
                <ViewModeToggle view_mode=view_mode />
            </div>

            <div class="flex-1 overflow-auto px-6 pb-6">
                <Show when=move || error.get().is_some() fallback=|| ().into_view()>
                    {move || error.get().map(|e| view! {
                        <Alert class="mb-4 border-destructive/30">
                            <AlertDescription class="text-destructive text-xs">{e}</AlertDescription>
                            <AlertActions>
                                <Button
                                    variant=ButtonVariant::Outline
                                    size=ButtonSize::Sm
                                    on:click=move |_| load_trashed()
                                >
                                    "再試行"
                                </Button>
                            </AlertActions>
                        </Alert>
                    })}
                </Show>

                <Show
                    when=move || !(loading.get() && projects.get().is_empty())
                    fallback=|| view! {
                        <div class="flex justify-center py-16">
                            <Spinner class="size-6" />
                        </div>
                    }
                >
                    <Show
                        when=move || !sorted().is_empty()
                        fallback=|| view! { <ProjectEmptyState has_query=false /> }
                    >
                        <div class=move || match view_mode.get() {
                            ViewMode::Grid => "grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4",
                            ViewMode::List => "flex flex-col gap-3",
                        }>
                            {move || {
                                sorted()
                                    .into_iter()
                                    .map(|project| view! {
                                        <TrashCard
                                            project=project
                                            view_mode=view_mode
                                            on_restore=on_restore_open
                                            on_permanent_delete=on_delete_open
                                        />
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </Show>
                </Show>
            </div>
        </div>

        <ConfirmDialog
            state=restore_confirm
            title="プロジェクトを復元しますか？"
            message="このプロジェクトはプロジェクト一覧に戻ります。"
            confirm_label="復元"
            error=restore_error
            on_confirm=on_restore
        />

        <ConfirmDialog
            state=delete_confirm
            title="プロジェクトを完全に削除しますか？"
            message="この操作は取り消せません。プロジェクトが完全に削除されます。"
            confirm_label="完全に削除"
            danger=true
            error=delete_error
            on_confirm=on_permanent_delete
        />
    }
}

#[component]
pub fn TrashCard(
    project: Project,
    #[prop(into)] view_mode: Signal<ViewMode>,
    on_restore: Callback<String>,
    on_permanent_delete: Callback<String>,
) -> impl IntoView {
    let id = StoredValue::new(project.id);
    let title = StoredValue::new(display_title(&project.title));
    let updated_at = StoredValue::new(project.updated_at);
    let created_at = StoredValue::new(project.created_at);

    let actions = move || {
        view! {
            <div class="hidden shrink-0 items-center gap-1 group-hover:flex">
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Icon
                    class="h-7 w-7"
                    attr:title="復元する"
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        on_restore.run(id.get_value());
                    }
                >
                    <RestoreGlyph class="size-4 text-muted-foreground" />
                </Button>
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Icon
                    class="h-7 w-7 text-destructive"
                    attr:title="完全に削除する"
                    on:click=move |ev: web_sys::MouseEvent| {
                        ev.stop_propagation();
                        on_permanent_delete.run(id.get_value());
                    }
                >
                    <TrashGlyph class="size-4" />
                </Button>
            </div>
        }
    };

    view! {
        {move || match view_mode.get() {
            ViewMode::Grid => view! {
                <Card class="group relative gap-0 p-5">
                    <div class="flex items-start justify-between">
                        <FolderGlyph class="size-10 text-muted-foreground" />
                        {actions()}
                    </div>

                    <h2 class="mt-2 mb-4 truncate text-base font-semibold">
                        {title.get_value()}
                    </h2>

                    <div class="mt-auto space-y-2 border-t pt-3">
                        <div class="flex items-center gap-2 text-xs text-muted-foreground">
                            <ClockGlyph class="size-3.5 shrink-0" />
                            <span>{relative_time_label(&updated_at.get_value())}</span>
                        </div>
                        <div class="flex items-center gap-2 text-xs text-muted-foreground">
                            <CalendarGlyph class="size-3.5 shrink-0" />
                            <span>{format_date_ymd(&created_at.get_value())}</span>
                        </div>
                    </div>
                </Card>
            }
            .into_any(),
            ViewMode::List => view! {
                <Card class="group relative min-h-[72px] flex-row items-center gap-4 px-4 py-4">
                    <div class="flex h-10 w-10 shrink-0 items-center justify-center rounded-xl border bg-muted/30">
                        <FolderGlyph class="size-5 text-muted-foreground" />
                    </div>

                    <div class="flex min-w-0 flex-1 items-center gap-6">
                        <h2 class="min-w-0 flex-1 truncate text-base font-semibold">
                            {title.get_value()}
                        </h2>
                        <div class="hidden shrink-0 items-center gap-6 sm:flex">
                            <div class="flex items-center gap-2 text-xs text-muted-foreground">
                                <ClockGlyph class="size-3.5 shrink-0" />
                                <span>{relative_time_label(&updated_at.get_value())}</span>
                            </div>
                            <div class="flex items-center gap-2 text-xs text-muted-foreground">
                                <CalendarGlyph class="size-3.5 shrink-0" />
                                <span>{format_date_ymd(&created_at.get_value())}</span>
                            </div>
                        </div>
                    </div>

                    {actions()}
                </Card>
            }
            .into_any(),
        }}
    }
}

#[component]
pub fn TemplatePage() -> impl IntoView {
    view! {
        <AppShell>
            <TemplateListView />
        </AppShell>
    }
}

#[component]
pub fn TemplateListView() -> impl IntoView {
    let app_state = expect_context::<AppContext>();

    let templates: RwSignal<Vec<Template>> = RwSignal::new(vec![]);
    let loading: RwSignal<bool> = RwSignal::new(false);
    let list_error: RwSignal<Option<String>> = RwSignal::new(None);

    let form_open: RwSignal<bool> = RwSignal::new(false);
    let editing_id: RwSignal<Option<String>> = RwSignal::new(None);
    // Editing keeps the stored flag; creation always starts non-default.
    let editing_default: RwSignal<bool> = RwSignal::new(false);
    let form_name: RwSignal<String> = RwSignal::new(String::new());
    let form_content: RwSignal<String> = RwSignal::new(String::new());
    let form_error: RwSignal<Option<String>> = RwSignal::new(None);
    let form_loading: RwSignal<bool> = RwSignal::new(false);
    let form_saving: RwSignal<bool> = RwSignal::new(false);

    let delete_confirm = use_confirm();
    let delete_error: RwSignal<Option<String>> = RwSignal::new(None);

    let load_templates = move || {
        if loading.get_untracked() {
            return;
        }
        loading.set(true);

        let client = app_state.0.api_client.get_untracked();
        spawn_local(async move {
            match client.list_templates().await {
                Ok(list) => {
                    templates.set(list);
                    list_error.set(None);
                }
                Err(e) if e.is_unauthorized() => {
                    redirect_to_login(app_state);
                    return;
                }
                Err(_) => list_error.set(Some("テンプレートの取得に失敗しました".to_string())),
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| load_templates());

    let open_create = move || {
        editing_id.set(None);
        editing_default.set(false);
        form_name.set(String::new());
        form_content.set(template::DEFAULT_TEMPLATE_CONTENT.to_string());
        form_error.set(None);
        form_open.set(true);
    };
    let open_create_cb = Callback::new(move |_: ()| open_create());

    let open_edit = Callback::new(move |id: String| {
        editing_id.set(Some(id.clone()));
        form_name.set(String::new());
        form_content.set(String::new());
        form_error.set(None);
        form_loading.set(true);
        form_open.set(true);

        let client = app_state.0.api_client.get_untracked();
        spawn_local(async move {
            match client.template_detail(&id).await {
                Ok(detail) => {
                    form_name.set(detail.name);
                    form_content.set(detail.content);
                    editing_default.set(detail.is_default);
                }
                Err(e) if e.is_unauthorized() => {
                    redirect_to_login(app_state);
                    return;
                }
                Err(_) => form_error.set(Some("テンプレートの取得に失敗しました".to_string())),
            }
            form_loading.set(false);
        });
    });

    let close_form = move || {
        if form_saving.get_untracked() {
            return;
        }
        form_open.set(false);
        editing_id.set(None);
        form_error.set(None);
    };

    let submit_form = move || {
        if form_saving.get_untracked() || form_loading.get_untracked() {
            return;
        }

        let name = form_name.get_untracked();
        let content = form_content.get_untracked();
        if let Err(msg) = template::validate_template_form(&name, &content) {
            form_error.set(Some(msg));
            return;
        }

        let request = TemplateUpsertRequest {
            name: name.trim().to_string(),
            content,
            is_default: editing_id.get_untracked().is_some() && editing_default.get_untracked(),
        };
        let target = editing_id.get_untracked();
        let client = app_state.0.api_client.get_untracked();

        form_saving.set(true);
        form_error.set(None);

        spawn_local(async move {
            let result = match &target {
                Some(id) => client.update_template(id, &request).await,
                None => client.create_template(&request).await,
            };
            match result {
                Ok(_) => {
                    form_saving.set(false);
                    form_open.set(false);
                    editing_id.set(None);
                    load_templates();
                    return;
                }
                Err(e) if e.is_unauthorized() => {
                    redirect_to_login(app_state);
                }
                Err(_) => form_error.set(Some("保存に失敗しました".to_string())),
            }
            form_saving.set(false);
        });
    };

    let on_delete_open = Callback::new(move |id: String| {
        delete_error.set(None);
        delete_confirm.update(|s| s.open(id));
    });

    let on_delete = Callback::new(move |id: String| {
        delete_confirm.update(|s| s.start_processing());
        delete_error.set(None);

        let client = app_state.0.api_client.get_untracked();
        spawn_local(async move {
            match client.delete_template(&id).await {
                Ok(_) => {
                    delete_confirm.update(|s| s.reset());
                    load_templates();
                }
                Err(e) if e.is_unauthorized() => {
                    redirect_to_login(app_state);
                }
                Err(_) => {
                    delete_error.set(Some("削除に失敗しました".to_string()));
                    delete_confirm.update(|s| s.stop_processing());
                }
            }
        });
    });

    let on_set_default = Callback::new(move |id: String| {
        let client = app_state.0.api_client.get_untracked();
        spawn_local(async move {
            match client.set_default_template(&id).await {
                Ok(_) => load_templates(),
                Err(e) if e.is_unauthorized() => {
                    redirect_to_login(app_state);
                }
                Err(_) => list_error.set(Some("デフォルト設定に失敗しました".to_string())),
            }
        });
    });

    view! {
        <ListHeader title="テンプレート" />

        <div class="flex-1 flex flex-col min-w-0 overflow-hidden rounded-2xl border bg-background shadow-sm">
            <div class="flex-1 overflow-auto px-6 pb-6 pt-6">
                <Show when=move || list_error.get().is_some() fallback=|| ().into_view()>
                    {move || list_error.get().map(|e| view! {
                        <Alert class="mb-4 border-destructive/30">
                            <AlertDescription class="text-destructive text-xs">{e}</AlertDescription>
                            <AlertActions>
                                <Button
                                    variant=ButtonVariant::Outline
                                    size=ButtonSize::Sm
                                    on:click=move |_| load_templates()
                                >
                                    "再試行"
                                </Button>
                            </AlertActions>
                        </Alert>
                    })}
                </Show>

                <Show
                    when=move || !(loading.get() && templates.get().is_empty())
                    fallback=|| view! {
                        <div class="flex justify-center py-16">
                            <Spinner class="size-6" />
                        </div>
                    }
                >
                    <Show
                        when=move || !templates.get().is_empty()
                        fallback=move || view! {
                            <div class="flex h-full flex-col items-center justify-center py-16 text-center">
                                <FileGlyph class="mb-4 size-16 text-muted-foreground opacity-50" />
                                <p class="mb-2 text-sm font-medium text-muted-foreground">"テンプレートがありません"</p>
                                <p class="mb-4 text-xs text-muted-foreground">"新しいテンプレートを作成してください"</p>
                                <Button
                                    variant=ButtonVariant::Secondary
                                    class="rounded-full"
                                    on:click=move |_| open_create()
                                >
                                    "テンプレートを作成"
                                </Button>
                            </div>
                        }
                    >
                        <div class="grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-3">
                            <CreatePlaceholderCard
                                view_mode=ViewMode::Grid
                                label="新しいテンプレートを作成"
                                on_click=open_create_cb
                            />
                            {move || {
                                templates
                                    .get()
                                    .into_iter()
                                    .map(|t| view! {
                                        <TemplateCard
                                            template=t
                                            on_edit=open_edit
                                            on_delete=on_delete_open
                                            on_set_default=on_set_default
                                        />
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </Show>
                </Show>
            </div>
        </div>

        <Show when=move || form_open.get() fallback=|| ().into_view()>
            <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/30 px-4">
                <div class="w-full max-w-2xl rounded-md border border-border bg-background p-4 shadow-lg">
                    <div class="mb-3 space-y-1">
                        <div class="text-sm font-medium">
                            {move || if editing_id.get().is_some() { "テンプレート編集" } else { "テンプレート作成" }}
                        </div>
                    </div>

                    <Show
                        when=move || !form_loading.get()
                        fallback=|| view! {
                            <div class="flex justify-center py-10">
                                <Spinner class="size-6" />
                            </div>
                        }
                    >
                        <div class="space-y-2">
                            <div class="space-y-1">
                                <Label class="text-xs">"テンプレート名"</Label>
                                <Input
                                    bind_value=form_name
                                    placeholder="例: 標準テンプレート"
                                    class="h-8 text-sm border-border bg-background"
                                />
                            </div>

                            <div class="space-y-1">
                                <Label class="text-xs">
                                    "テンプレート内容"
                                    <span class="font-normal text-muted-foreground">
                                        "({children}プレースホルダーを含めてください)"
                                    </span>
                                </Label>
                                <Textarea
                                    bind_value=form_content
                                    class="h-64 font-mono text-sm border-border bg-background"
                                />
                            </div>

                            <Show when=move || form_error.get().is_some() fallback=|| ().into_view()>
                                {move || form_error.get().map(|e| view! {
                                    <Alert class="border-destructive/30">
                                        <AlertDescription class="text-destructive text-xs">{e}</AlertDescription>
                                    </Alert>
                                })}
                            </Show>

                            <div class="flex items-center justify-end gap-2 pt-2">
                                <Button
                                    variant=ButtonVariant::Outline
                                    size=ButtonSize::Sm
                                    attr:disabled=move || form_saving.get()
                                    on:click=move |_| close_form()
                                >
                                    "キャンセル"
                                </Button>
                                <Button
                                    size=ButtonSize::Sm
                                    attr:disabled=move || form_saving.get()
                                    on:click=move |_| submit_form()
                                >
                                    <span class="inline-flex items-center gap-2">
                                        <Show when=move || form_saving.get() fallback=|| ().into_view()>
                                            <Spinner />
                                        </Show>
                                        {move || if form_saving.get() { "保存中..." } else { "保存" }}
                                    </span>
                                </Button>
                            </div>
                        </div>
                    </Show>
                </div>
            </div>
        </Show>

        <ConfirmDialog
            state=delete_confirm
            title="このテンプレートを削除しますか？"
            message="この操作は取り消せません。"
            confirm_label="削除"
            danger=true
            error=delete_error
            on_confirm=on_delete
        />
    }
}

#[component]
pub fn TemplateCard(
    template: Template,
    on_edit: Callback<String>,
    on_delete: Callback<String>,
    on_set_default: Callback<String>,
) -> impl IntoView {
    let id = StoredValue::new(template.id);
    let is_default = template.is_default;

    view! {
        <Card class="gap-0 p-4">
            <div class="mb-3 flex items-start justify-between">
                <div class="flex min-w-0 items-center gap-2">
                    <h3 class="truncate text-base font-semibold">{template.name}</h3>
                    <Show when=move || is_default fallback=|| ().into_view()>
                        <span class="shrink-0 rounded-full border border-success/30 bg-success/10 px-2.5 py-0.5 text-xs font-medium text-success">
                            "デフォルト"
                        </span>
                    </Show>
                </div>
                <div class="flex shrink-0 items-center gap-1">
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        class="h-7 w-7"
                        attr:title="編集"
                        on:click=move |_| on_edit.run(id.get_value())
                    >
                        <PencilGlyph class="size-4 text-muted-foreground" />
                    </Button>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        class="h-7 w-7 text-destructive"
                        attr:title="削除"
                        on:click=move |_| on_delete.run(id.get_value())
                    >
                        <TrashGlyph class="size-4" />
                    </Button>
                </div>
            </div>

            <div class="flex items-center justify-between border-t pt-3 text-xs text-muted-foreground">
                <span>{format_date_ymd(&template.updated_at)}</span>
                <Show when=move || !is_default fallback=|| ().into_view()>
                    <button
                        class="text-xs font-medium text-foreground hover:underline"
                        on:click=move |_| on_set_default.run(id.get_value())
                    >
                        "デフォルトに設定"
                    </button>
                </Show>
            </div>
        </Card>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <AppShell>
            <ListHeader title="設定" />
            <div class="flex-1 flex flex-col items-center justify-center rounded-2xl border bg-background shadow-sm">
                <p class="text-sm font-medium text-muted-foreground">"設定機能は準備中です"</p>
            </div>
        </AppShell>
    }
}

#[derive(Params, PartialEq, Clone, Debug)]
pub struct ProjectRouteParams {
    pub id: Option<String>,
}

#[component]
pub fn EditorPage() -> impl IntoView {
    view! {
        <AppShell>
            <EditorScreen />
        </AppShell>
    }
}

#[component]
pub fn EditorScreen() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let params = use_params::<ProjectRouteParams>();

    // Use a closure so params access happens inside a reactive tracking context.
    let project_id = move || params.get().ok().and_then(|p| p.id).unwrap_or_default();

    let detail: RwSignal<Option<ProjectDetail>> = RwSignal::new(None);
    let loading: RwSignal<bool> = RwSignal::new(true);
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let not_found: RwSignal<bool> = RwSignal::new(false);
    let retry_tick: RwSignal<u64> = RwSignal::new(0);

    Effect::new(move |_| {
        let _tick = retry_tick.get();
        let id = project_id();
        if id.trim().is_empty() {
            return;
        }

        loading.set(true);
        error.set(None);
        not_found.set(false);
        detail.set(None);

        let client = app_state.0.api_client.get_untracked();
        spawn_local(async move {
            match client.project_detail(&id).await {
                Ok(d) => detail.set(Some(d)),
                Err(e) if e.is_unauthorized() => {
                    redirect_to_login(app_state);
                    return;
                }
                Err(e) if e.is_not_found() => not_found.set(true),
                Err(e) => error.set(Some(e.user_message())),
            }
            loading.set(false);
        });
    });

    view! {
        {move || {
            if loading.get() {
                return view! {
                    <div class="flex-1 flex items-center justify-center rounded-2xl border bg-background shadow-sm">
                        <Spinner class="size-6" />
                    </div>
                }
                .into_any();
            }

            if not_found.get() {
                return view! {
                    <div class="flex-1 flex flex-col items-center justify-center rounded-2xl border bg-background py-16 text-center shadow-sm">
                        <p class="text-sm font-medium">"プロジェクトが見つかりません"</p>
                        <p class="mt-2 text-xs text-muted-foreground">"削除されたか、URLが間違っている可能性があります。"</p>
                        <Button
                            variant=ButtonVariant::Outline
                            class="mt-4 rounded-full"
                            href="/project"
                        >
                            "プロジェクト一覧に戻る"
                        </Button>
                    </div>
                }
                .into_any();
            }

            if let Some(msg) = error.get() {
                return view! {
                    <div class="flex-1 flex flex-col items-center justify-center rounded-2xl border bg-background py-16 text-center shadow-sm">
                        <p class="max-w-md text-xs text-destructive">{msg}</p>
                        <Button
                            variant=ButtonVariant::Outline
                            size=ButtonSize::Sm
                            class="mt-4"
                            on:click=move |_| retry_tick.update(|t| *t = t.wrapping_add(1))
                        >
                            "再試行"
                        </Button>
                    </div>
                }
                .into_any();
            }

            match detail.get() {
                Some(d) => view! {
                    <ProjectEditor project_id=project_id() initial_detail=d />
                }
                .into_any(),
                None => ().into_any(),
            }
        }}
    }
}

/// `/` only decides where to go.
#[component]
pub fn RootPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let navigate = StoredValue::new(use_navigate());

    Effect::new(move |_| {
        let target = if app_state.0.is_authenticated() {
            "/project"
        } else {
            "/login"
        };
        navigate.with_value(|nav| {
            nav(
                target,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        });
    });

    ().into_view()
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex min-h-screen flex-col items-center justify-center bg-background text-center">
            <p class="text-sm font-medium">"ページが見つかりません"</p>
            <Button variant=ButtonVariant::Outline class="mt-4 rounded-full" href="/">
                "トップに戻る"
            </Button>
        </div>
    }
}

// Inline SVG glyphs (lucide outlines), sized by the caller.

#[component]
fn HomeGlyph(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <path d="M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2Z" />
            <path d="M9 22V12h6v10" />
        </svg>
    }
}

#[component]
fn PencilGlyph(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <path d="M12 20h9" />
            <path d="M16.5 3.5a2.121 2.121 0 0 1 3 3L7 19l-4 1 1-4Z" />
        </svg>
    }
}

#[component]
fn TrashGlyph(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <path d="M3 6h18" />
            <path d="M8 6V4h8v2" />
            <path d="M19 6l-1 14H6L5 6" />
            <path d="M10 11v6" />
            <path d="M14 11v6" />
        </svg>
    }
}

#[component]
fn SlidersGlyph(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <path d="M4 21v-7" />
            <path d="M4 10V3" />
            <path d="M12 21v-9" />
            <path d="M12 8V3" />
            <path d="M20 21v-5" />
            <path d="M20 12V3" />
            <path d="M2 14h4" />
            <path d="M10 8h4" />
            <path d="M18 16h4" />
        </svg>
    }
}

#[component]
fn SearchGlyph(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <circle cx="11" cy="11" r="8" />
            <path d="m21 21-4.3-4.3" />
        </svg>
    }
}

#[component]
fn FolderGlyph(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <path d="M20 20a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-7.9a2 2 0 0 1-1.69-.9L9.6 3.9A2 2 0 0 0 7.93 3H4a2 2 0 0 0-2 2v13a2 2 0 0 0 2 2Z" />
        </svg>
    }
}

#[component]
fn ClockGlyph(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <circle cx="12" cy="12" r="10" />
            <path d="M12 6v6l4 2" />
        </svg>
    }
}

#[component]
fn CalendarGlyph(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <path d="M8 2v4" />
            <path d="M16 2v4" />
            <path d="M3 6a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2Z" />
            <path d="M3 10h18" />
        </svg>
    }
}

#[component]
fn RestoreGlyph(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <path d="M3 12a9 9 0 1 0 9-9 9.75 9.75 0 0 0-6.74 2.74L3 8" />
            <path d="M3 3v5h5" />
        </svg>
    }
}

#[component]
fn PlusSquareGlyph(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <path d="M3 5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2Z" />
            <path d="M12 8v8" />
            <path d="M8 12h8" />
        </svg>
    }
}

#[component]
fn FileGlyph(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z" />
            <path d="M14 2v4a2 2 0 0 0 2 2h4" />
            <path d="M9 15h6" />
        </svg>
    }
}

#[component]
fn GridGlyph(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <rect width="7" height="7" x="3" y="3" rx="1" />
            <rect width="7" height="7" x="14" y="3" rx="1" />
            <rect width="7" height="7" x="14" y="14" rx="1" />
            <rect width="7" height="7" x="3" y="14" rx="1" />
        </svg>
    }
}

#[component]
fn ListGlyph(#[prop(into, optional)] class: String) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <path d="M8 6h13" />
            <path d="M8 12h13" />
            <path d="M8 18h13" />
            <path d="M3 6h.01" />
            <path d="M3 12h.01" />
            <path d="M3 18h.01" />
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_title_falls_back_when_blank() {
        assert_eq!(display_title("数学II 演習問題"), "数学II 演習問題");
        assert_eq!(display_title(""), "無題のプロジェクト");
        assert_eq!(display_title("   "), "無題のプロジェクト");
    }

    #[test]
    fn test_sort_choice_labels_cover_all_pairs() {
        assert_eq!(
            sort_choice_label(SortKey::UpdatedAt, SortOrder::Desc),
            "最終更新順（新しい順）"
        );
        assert_eq!(
            sort_choice_label(SortKey::UpdatedAt, SortOrder::Asc),
            "最終更新順（古い順）"
        );
        assert_eq!(
            sort_choice_label(SortKey::CreatedAt, SortOrder::Desc),
            "作成日順（新しい順）"
        );
        assert_eq!(
            sort_choice_label(SortKey::CreatedAt, SortOrder::Asc),
            "作成日順（古い順）"
        );

        // Every menu entry maps onto a distinct label.
        let labels: std::collections::HashSet<&str> = SORT_CHOICES
            .iter()
            .map(|&(key, order)| sort_choice_label(key, order))
            .collect();
        assert_eq!(labels.len(), SORT_CHOICES.len());
    }
}
