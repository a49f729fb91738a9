use crate::models::{
    DocumentType, Project, ProjectDetail, Template, TemplateDetail, UserAccount,
};
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ApiErrorKind {
    /// Transport failure before any HTTP status existed.
    Network,
    /// 2xx response with an undecodable body.
    Parse,
    /// Client-side input rejection; no request was made.
    Validation,
    Unauthorized,
    Forbidden,
    NotFound,
    /// Any other non-2xx status.
    Http,
}

#[derive(Clone, Debug)]
pub(crate) struct ApiError {
    pub kind: ApiErrorKind,
    pub status: Option<u16>,
    pub message: String,
    /// Raw server payload when the error body was JSON.
    pub payload: Option<serde_json::Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ApiError {
    pub(crate) fn network(e: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            status: None,
            message: e.to_string(),
            payload: None,
        }
    }

    pub(crate) fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            status: None,
            message: e.to_string(),
            payload: None,
        }
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Validation,
            status: None,
            message: message.into(),
            payload: None,
        }
    }

    /// Classify a non-2xx response. The server's own `error`/`message` text
    /// wins over a synthesized one when the body carries it.
    pub(crate) fn from_status(status: u16, payload: Option<serde_json::Value>) -> Self {
        let kind = match status {
            401 => ApiErrorKind::Unauthorized,
            403 => ApiErrorKind::Forbidden,
            404 => ApiErrorKind::NotFound,
            _ => ApiErrorKind::Http,
        };

        let message = payload
            .as_ref()
            .and_then(extract_server_message)
            .unwrap_or_else(|| format!("Request failed ({status})"));

        Self {
            kind,
            status: Some(status),
            message,
            payload,
        }
    }

    pub(crate) fn is_unauthorized(&self) -> bool {
        self.kind == ApiErrorKind::Unauthorized
    }

    pub(crate) fn is_not_found(&self) -> bool {
        self.kind == ApiErrorKind::NotFound
    }

    /// Text the server put in its error body, if any.
    pub(crate) fn server_message(&self) -> Option<String> {
        self.payload.as_ref().and_then(extract_server_message)
    }

    /// Display text. The backend already writes user-facing Japanese into
    /// its error bodies (including full LaTeX compile logs), so that text
    /// wins; the fixed per-class table below only covers responses without
    /// one.
    pub(crate) fn user_message(&self) -> String {
        if let Some(msg) = self.server_message() {
            return msg;
        }

        match self.kind {
            ApiErrorKind::Validation => {
                if self.message.is_empty() {
                    "入力内容に誤りがあります。".to_string()
                } else {
                    self.message.clone()
                }
            }
            ApiErrorKind::Network => {
                "ネットワークエラーが発生しました。インターネット接続を確認してください。".to_string()
            }
            ApiErrorKind::Unauthorized => "認証に失敗しました。再度ログインしてください。".to_string(),
            ApiErrorKind::Forbidden => "アクセス権限がありません。".to_string(),
            ApiErrorKind::NotFound => "リソースが見つかりません。".to_string(),
            ApiErrorKind::Http => match self.status {
                Some(400) => "リクエストが不正です。入力内容を確認してください。".to_string(),
                Some(s) if (500..=599).contains(&s) => {
                    "サーバーエラーが発生しました。しばらくしてから再度お試しください。".to_string()
                }
                _ => "予期しないエラーが発生しました。".to_string(),
            },
            ApiErrorKind::Parse => "予期しないエラーが発生しました。".to_string(),
        }
    }
}

/// DRF error bodies use `{"error": …}`; a few views use `{"message": …}`.
pub(crate) fn extract_server_message(payload: &serde_json::Value) -> Option<String> {
    for key in ["error", "message", "detail"] {
        if let Some(text) = payload.get(key).and_then(|v| v.as_str()) {
            if !text.trim().is_empty() {
                return Some(text.to_string());
            }
        }
    }
    None
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct EnvConfig {
    pub api_base_url: String,
}

impl EnvConfig {
    pub fn new() -> Self {
        let default_base_url = "http://localhost:8000".to_string();

        // We support BOTH `window.ENV.API_BASE_URL` (documented in README)
        // and `window.ENV.api_base_url` (legacy key) for compatibility.
        if let Some(window) = web_sys::window() {
            if let Some(env) = window.get("ENV") {
                if !env.is_undefined() && env.is_object() {
                    if let Ok(url) = js_sys::Reflect::get(&env, &"API_BASE_URL".into()) {
                        if let Some(url_str) = url.as_string() {
                            return Self { api_base_url: url_str };
                        }
                    }

                    if let Ok(url) = js_sys::Reflect::get(&env, &"api_base_url".into()) {
                        if let Some(url_str) = url.as_string() {
                            return Self { api_base_url: url_str };
                        }
                    }
                }
            }
        }

        Self {
            api_base_url: default_base_url,
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login is the one endpoint that reports failure inside a 400 body
/// (`{"success": false, "message": …}`), so most fields are optional.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct CsrfResponse {
    pub token: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct CreateProjectRequest {
    pub title: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct UpdateProjectRequest {
    pub solution_notes: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct OcrResponse {
    pub problem_id: String,
    pub latex_document_id: String,
    pub latex_code: String,
    #[serde(default)]
    pub pdf_url: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct RenderLatexRequest {
    pub problem_id: String,
    pub document_type: DocumentType,
    /// Prior document id for the slot; the backend validates ownership and
    /// answers with a fresh id at `version = max + 1`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latex_document_id: Option<String>,
    pub latex_code: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct RenderLatexResponse {
    pub latex_document_id: String,
    #[serde(default)]
    pub pdf_url: Option<String>,
    pub version: i32,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct GenerateExplanationRequest {
    pub problem_id: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct ExplanationResponse {
    pub explanation_id: String,
    pub latex_code: String,
    #[serde(default)]
    pub pdf_url: Option<String>,
    pub version: i32,
    #[serde(default)]
    pub created_at: String,
    /// Alias of `explanation_id` kept by the backend for older clients.
    #[serde(default)]
    pub latex_document_id: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct TemplateUpsertRequest {
    pub name: String,
    pub content: String,
    pub is_default: bool,
}

/// Split a `Cookie`-header style string and pull out Django's csrftoken.
pub(crate) fn csrf_token_from_cookie(cookie: &str) -> Option<String> {
    cookie
        .split(';')
        .map(|part| part.trim())
        .find_map(|part| part.strip_prefix("csrftoken="))
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
}

/// HTTP gateway to the MathOCR backend.
///
/// The session rides on cookies (`sessionid`), so requests go out with
/// credentials included; unsafe methods additionally echo Django's csrftoken
/// in the `X-CSRFToken` header. Calls never panic and never retry; every
/// method returns an `ApiResult` for the caller to decide.
#[derive(Clone)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
    pub(crate) csrf_token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            csrf_token: None,
        }
    }

    pub fn from_env() -> Self {
        Self::new(EnvConfig::new().api_base_url)
    }

    pub fn set_csrf_token(&mut self, token: String) {
        self.csrf_token = Some(token);
    }

    /// Token for the `X-CSRFToken` header: the bootstrapped one, else
    /// whatever the browser already holds in `document.cookie`.
    pub(crate) fn current_csrf_token(&self) -> Option<String> {
        if let Some(token) = &self.csrf_token {
            return Some(token.clone());
        }

        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
            .and_then(|d| d.cookie().ok())
            .and_then(|c| csrf_token_from_cookie(&c))
    }

    fn with_session(req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        #[cfg(target_arch = "wasm32")]
        {
            req.fetch_credentials_include()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            req
        }
    }

    fn with_csrf_header(
        &self,
        req: reqwest::RequestBuilder,
        method: &reqwest::Method,
    ) -> reqwest::RequestBuilder {
        let safe = *method == reqwest::Method::GET || *method == reqwest::Method::HEAD;
        if safe {
            return req;
        }
        match self.current_csrf_token() {
            Some(token) => req.header("X-CSRFToken", token),
            None => req,
        }
    }

    fn build_request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let client = reqwest::Client::new();
        let url = format!("{}{}", self.base_url, path);
        let req = client.request(method.clone(), url);
        let req = Self::with_session(req);
        self.with_csrf_header(req, &method)
    }

    async fn error_from_response(res: reqwest::Response) -> ApiError {
        let status = res.status().as_u16();
        let body = res.text().await.unwrap_or_default();
        let payload: Option<serde_json::Value> = serde_json::from_str(&body).ok();
        ApiError::from_status(status, payload)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let req = self.build_request(reqwest::Method::GET, path);
        let res = req.send().await.map_err(ApiError::network)?;

        if res.status().is_success() {
            res.json().await.map_err(ApiError::parse)
        } else {
            Err(Self::error_from_response(res).await)
        }
    }

    async fn send_json<T: serde::de::DeserializeOwned>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &impl serde::Serialize,
    ) -> ApiResult<T> {
        let req = self.build_request(method, path).json(body);
        let res = req.send().await.map_err(ApiError::network)?;

        if res.status().is_success() {
            res.json().await.map_err(ApiError::parse)
        } else {
            Err(Self::error_from_response(res).await)
        }
    }

    /// For endpoints that answer 204 or whose body the caller ignores.
    async fn send_empty(&self, method: reqwest::Method, path: &str) -> ApiResult<()> {
        let req = self.build_request(method, path);
        let res = req.send().await.map_err(ApiError::network)?;

        if res.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(res).await)
        }
    }

    // --- auth ---

    pub async fn fetch_csrf_token(&self) -> ApiResult<String> {
        let res: CsrfResponse = self.get_json("/api/auth/csrf/").await?;
        Ok(res.token)
    }

    pub async fn login(&self, username: &str, password: &str) -> ApiResult<LoginResponse> {
        self.send_json(
            reqwest::Method::POST,
            "/api/auth/login/",
            &LoginRequest {
                username: username.to_string(),
                password: password.to_string(),
            },
        )
        .await
    }

    /// Session teardown is best-effort; callers treat any failure as success.
    pub async fn logout(&self) {
        let _ = self.send_empty(reqwest::Method::POST, "/api/auth/logout/").await;
    }

    pub async fn current_user(&self) -> ApiResult<UserAccount> {
        self.get_json("/api/auth/user/").await
    }

    // --- projects ---

    pub async fn list_projects(&self) -> ApiResult<Vec<Project>> {
        self.get_json("/api/project/").await
    }

    pub async fn create_project(&self, title: &str) -> ApiResult<Project> {
        self.send_json(
            reqwest::Method::POST,
            "/api/project/create/",
            &CreateProjectRequest {
                title: title.to_string(),
            },
        )
        .await
    }

    pub async fn project_detail(&self, project_id: &str) -> ApiResult<ProjectDetail> {
        self.get_json(&format!("/api/project/{}/", urlencoding::encode(project_id)))
            .await
    }

    pub async fn update_solution_notes(
        &self,
        project_id: &str,
        solution_notes: &str,
    ) -> ApiResult<ProjectDetail> {
        self.send_json(
            reqwest::Method::PATCH,
            &format!("/api/project/{}/", urlencoding::encode(project_id)),
            &UpdateProjectRequest {
                solution_notes: solution_notes.to_string(),
            },
        )
        .await
    }

    /// Soft delete: the backend moves the project to trash and answers with
    /// the row it removed from the active list.
    pub async fn delete_project(&self, project_id: &str) -> ApiResult<Project> {
        let req = self.build_request(
            reqwest::Method::DELETE,
            &format!("/api/project/{}/", urlencoding::encode(project_id)),
        );
        let res = req.send().await.map_err(ApiError::network)?;

        if res.status().is_success() {
            res.json().await.map_err(ApiError::parse)
        } else {
            Err(Self::error_from_response(res).await)
        }
    }

    pub async fn restore_project(&self, project_id: &str) -> ApiResult<Project> {
        self.send_json(
            reqwest::Method::POST,
            &format!("/api/project/{}/restore/", urlencoding::encode(project_id)),
            &serde_json::json!({}),
        )
        .await
    }

    /// Permanent delete answers 204 with no body.
    pub async fn permanently_delete_project(&self, project_id: &str) -> ApiResult<()> {
        self.send_empty(
            reqwest::Method::DELETE,
            &format!("/api/project/{}/permanent/", urlencoding::encode(project_id)),
        )
        .await
    }

    pub async fn list_trashed_projects(&self) -> ApiResult<Vec<Project>> {
        self.get_json("/api/project/trash/").await
    }

    // --- documents ---

    /// Multipart upload: `image` + `problem_id`. The caller has already read
    /// the file into memory and validated type/size.
    pub async fn submit_ocr(
        &self,
        project_id: &str,
        file_name: &str,
        mime_type: &str,
        bytes: Vec<u8>,
    ) -> ApiResult<OcrResponse> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime_type)
            .map_err(ApiError::network)?;
        let form = reqwest::multipart::Form::new()
            .text("problem_id", project_id.to_string())
            .part("image", part);

        let req = self.build_request(reqwest::Method::POST, "/api/ocr/").multipart(form);
        let res = req.send().await.map_err(ApiError::network)?;

        if res.status().is_success() {
            res.json().await.map_err(ApiError::parse)
        } else {
            Err(Self::error_from_response(res).await)
        }
    }

    pub async fn render_latex(&self, request: &RenderLatexRequest) -> ApiResult<RenderLatexResponse> {
        self.send_json(reqwest::Method::POST, "/api/latex/render/", request)
            .await
    }

    pub async fn generate_explanation(&self, project_id: &str) -> ApiResult<ExplanationResponse> {
        self.send_json(
            reqwest::Method::POST,
            "/api/explanation/generate/",
            &GenerateExplanationRequest {
                problem_id: project_id.to_string(),
            },
        )
        .await
    }

    // --- templates ---

    pub async fn list_templates(&self) -> ApiResult<Vec<Template>> {
        self.get_json("/api/template/").await
    }

    pub async fn template_detail(&self, template_id: &str) -> ApiResult<TemplateDetail> {
        self.get_json(&format!("/api/template/{}/", urlencoding::encode(template_id)))
            .await
    }

    pub async fn create_template(&self, request: &TemplateUpsertRequest) -> ApiResult<TemplateDetail> {
        self.send_json(reqwest::Method::POST, "/api/template/", request)
            .await
    }

    pub async fn update_template(
        &self,
        template_id: &str,
        request: &TemplateUpsertRequest,
    ) -> ApiResult<TemplateDetail> {
        self.send_json(
            reqwest::Method::PATCH,
            &format!("/api/template/{}/", urlencoding::encode(template_id)),
            request,
        )
        .await
    }

    pub async fn delete_template(&self, template_id: &str) -> ApiResult<()> {
        self.send_empty(
            reqwest::Method::DELETE,
            &format!("/api/template/{}/", urlencoding::encode(template_id)),
        )
        .await
    }

    pub async fn set_default_template(&self, template_id: &str) -> ApiResult<TemplateDetail> {
        self.send_json(
            reqwest::Method::POST,
            &format!("/api/template/{}/set-default/", urlencoding::encode(template_id)),
            &serde_json::json!({}),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_contract_deserialize() {
        let json = r#"{
            "success": true,
            "user_id": 7,
            "username": "tanaka",
            "email": "tanaka@example.com"
        }"#;
        let parsed: LoginResponse = serde_json::from_str(json).expect("login response should parse");
        assert!(parsed.success);
        assert_eq!(parsed.user_id, Some(7));
        assert_eq!(parsed.username.as_deref(), Some("tanaka"));
    }

    #[test]
    fn test_login_failure_contract_deserialize() {
        let json = r#"{"success": false, "message": "IDまたはパスワードに誤りがあります。"}"#;
        let parsed: LoginResponse = serde_json::from_str(json).expect("login failure should parse");
        assert!(!parsed.success);
        assert!(parsed.user_id.is_none());
        assert_eq!(
            parsed.message.as_deref(),
            Some("IDまたはパスワードに誤りがあります。")
        );
    }

    #[test]
    fn test_ocr_response_contract_deserialize() {
        let json = r#"{
            "problem_id": "p-1",
            "latex_document_id": "doc-1",
            "latex_code": "x^2",
            "pdf_url": "/media/pdfs/problem_p-1.pdf",
            "created_at": "2025-03-01T00:00:00Z"
        }"#;
        let parsed: OcrResponse = serde_json::from_str(json).expect("ocr response should parse");
        assert_eq!(parsed.latex_document_id, "doc-1");
        assert_eq!(parsed.pdf_url.as_deref(), Some("/media/pdfs/problem_p-1.pdf"));
    }

    #[test]
    fn test_render_request_omits_missing_document_id() {
        let req = RenderLatexRequest {
            problem_id: "p-1".to_string(),
            document_type: DocumentType::Problem,
            latex_document_id: None,
            latex_code: "\\documentclass{article}".to_string(),
        };
        let v = serde_json::to_value(&req).expect("should serialize");
        assert_eq!(v["document_type"], "problem");
        assert!(v.get("latex_document_id").is_none());

        let req = RenderLatexRequest {
            latex_document_id: Some("doc-9".to_string()),
            document_type: DocumentType::Explanation,
            ..req
        };
        let v = serde_json::to_value(&req).expect("should serialize");
        assert_eq!(v["document_type"], "explanation");
        assert_eq!(v["latex_document_id"], "doc-9");
    }

    #[test]
    fn test_explanation_response_keeps_alias_field() {
        let json = r#"{
            "explanation_id": "exp-1",
            "latex_code": "\\section*{解説}",
            "pdf_url": null,
            "version": 1,
            "created_at": "2025-03-01T00:00:00Z",
            "latex_document_id": "exp-1"
        }"#;
        let parsed: ExplanationResponse =
            serde_json::from_str(json).expect("explanation response should parse");
        assert_eq!(parsed.explanation_id, "exp-1");
        assert_eq!(parsed.latex_document_id.as_deref(), Some("exp-1"));
        assert!(parsed.pdf_url.is_none());
    }

    #[test]
    fn test_error_classification_by_status() {
        let err = ApiError::from_status(401, None);
        assert_eq!(err.kind, ApiErrorKind::Unauthorized);
        assert!(err.is_unauthorized());

        let err = ApiError::from_status(403, None);
        assert_eq!(err.kind, ApiErrorKind::Forbidden);

        let err = ApiError::from_status(404, None);
        assert_eq!(err.kind, ApiErrorKind::NotFound);
        assert!(err.is_not_found());

        let err = ApiError::from_status(500, None);
        assert_eq!(err.kind, ApiErrorKind::Http);
        assert_eq!(err.status, Some(500));
    }

    #[test]
    fn test_server_message_wins_over_synthesized() {
        let payload = serde_json::json!({"error": "プロジェクトが見つかりません"});
        let err = ApiError::from_status(404, Some(payload));
        assert_eq!(err.message, "プロジェクトが見つかりません");
        assert_eq!(err.server_message().as_deref(), Some("プロジェクトが見つかりません"));
        assert_eq!(err.user_message(), "プロジェクトが見つかりません");

        // Compile failures ship the full LaTeX log in the body; it must
        // reach the panel verbatim.
        let log = "PDF生成中にエラーが発生しました: ! Undefined control sequence.\nl.5 \\fraac";
        let payload = serde_json::json!({ "error": log });
        let err = ApiError::from_status(500, Some(payload));
        assert_eq!(err.user_message(), log);

        // Without a body the fixed taxonomy text is used.
        let err = ApiError::from_status(404, None);
        assert_eq!(err.user_message(), "リソースが見つかりません。");
    }

    #[test]
    fn test_user_message_table() {
        assert_eq!(
            ApiError::from_status(400, None).user_message(),
            "リクエストが不正です。入力内容を確認してください。"
        );
        assert_eq!(
            ApiError::from_status(401, None).user_message(),
            "認証に失敗しました。再度ログインしてください。"
        );
        assert_eq!(
            ApiError::from_status(403, None).user_message(),
            "アクセス権限がありません。"
        );
        assert_eq!(
            ApiError::from_status(503, None).user_message(),
            "サーバーエラーが発生しました。しばらくしてから再度お試しください。"
        );
        assert_eq!(
            ApiError::validation("").user_message(),
            "入力内容に誤りがあります。"
        );
        assert_eq!(
            ApiError::validation("画像ファイルを選択してください").user_message(),
            "画像ファイルを選択してください"
        );
    }

    #[test]
    fn test_extract_server_message_probes_known_keys() {
        let v = serde_json::json!({"error": "だめ"});
        assert_eq!(extract_server_message(&v).as_deref(), Some("だめ"));

        let v = serde_json::json!({"message": "Logged out successfully."});
        assert_eq!(
            extract_server_message(&v).as_deref(),
            Some("Logged out successfully.")
        );

        let v = serde_json::json!({"detail": "Not found."});
        assert_eq!(extract_server_message(&v).as_deref(), Some("Not found."));

        let v = serde_json::json!({"error": "   "});
        assert_eq!(extract_server_message(&v), None);

        let v = serde_json::json!({"count": 3});
        assert_eq!(extract_server_message(&v), None);
    }

    #[test]
    fn test_csrf_token_from_cookie() {
        assert_eq!(
            csrf_token_from_cookie("sessionid=abc; csrftoken=tok123").as_deref(),
            Some("tok123")
        );
        assert_eq!(
            csrf_token_from_cookie("csrftoken=tok123").as_deref(),
            Some("tok123")
        );
        assert_eq!(csrf_token_from_cookie("sessionid=abc"), None);
        assert_eq!(csrf_token_from_cookie("csrftoken="), None);
        assert_eq!(csrf_token_from_cookie(""), None);
    }

    #[test]
    fn test_api_client_new() {
        let client = ApiClient::new("http://localhost:8000".to_string());
        assert_eq!(client.base_url, "http://localhost:8000");
        assert!(client.csrf_token.is_none());
    }

    #[test]
    fn test_api_client_set_csrf_token() {
        let mut client = ApiClient::new("http://localhost:8000".to_string());
        client.set_csrf_token("tok".to_string());
        assert_eq!(client.csrf_token.as_deref(), Some("tok"));
    }
}
