use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use store::{Note, NoteStore};
use tower::ServiceExt;
use tower_sessions::MemoryStore as SessionMemoryStore;

use crate::auth::{hash_password, UserStore};
use crate::models::User;
use crate::{settings, AppState};

const PASSWORD: &str = "s3cret-pass";

struct TestApp {
    app: Router,
    state: AppState,
}

impl TestApp {
    fn new() -> Self {
        let state = AppState::in_memory();
        let app = super::app(
            state.clone(),
            SessionMemoryStore::default(),
            &settings::Session::default(),
        );
        Self { app, state }
    }

    async fn user(&self, username: &str) -> User {
        let hash = hash_password(PASSWORD).unwrap();
        self.state.users.create_user(username, &hash).await.unwrap()
    }

    /// Log `username` in and return the session cookie.
    async fn login(&self, username: &str) -> String {
        let response = self
            .post(
                "/auth/login/",
                &[("username", username), ("password", PASSWORD)],
                None,
            )
            .await;
        assert_eq!(response.status(), StatusCode::FOUND);
        response.headers()[header::SET_COOKIE]
            .to_str()
            .unwrap()
            .split(';')
            .next()
            .unwrap()
            .to_string()
    }

    async fn get(&self, uri: &str, cookie: Option<&str>) -> Response {
        let mut request = Request::get(uri);
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        self.send(request.body(Body::empty()).unwrap()).await
    }

    async fn post(&self, uri: &str, fields: &[(&str, &str)], cookie: Option<&str>) -> Response {
        let body = fields
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        let mut request = Request::post(uri).header(
            header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        );
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        self.send(request.body(Body::from(body)).unwrap()).await
    }

    async fn send(&self, request: Request<Body>) -> Response {
        self.app.clone().oneshot(request).await.unwrap()
    }

    async fn note(&self, author: &User, title: &str, slug: &str) -> Note {
        self.state
            .notes
            .create(store::NewNote::new(title, "Текст заметки", author.id).with_slug(slug))
            .await
            .unwrap()
    }

    async fn count(&self) -> u64 {
        self.state.notes.count().await.unwrap()
    }
}

fn location(response: &Response) -> &str {
    response.headers()[header::LOCATION].to_str().unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

const NOTE_FORM: [(&str, &str); 3] = [
    ("title", "Новая заметка"),
    ("text", "Текст заметки"),
    ("slug", "new-slug"),
];

#[tokio::test]
async fn test_public_pages() {
    let app = TestApp::new();
    for uri in ["/", "/auth/login/", "/auth/signup/"] {
        assert_eq!(app.get(uri, None).await.status(), StatusCode::OK, "{uri}");
    }
}

#[tokio::test]
async fn test_anonymous_is_redirected_to_login() {
    let app = TestApp::new();
    let author = app.user("author").await;
    app.note(&author, "Заметка", "zametka").await;

    for uri in [
        "/notes/",
        "/add/",
        "/done/",
        "/note/zametka/",
        "/edit/zametka/",
        "/delete/zametka/",
    ] {
        let response = app.get(uri, None).await;
        assert_eq!(response.status(), StatusCode::FOUND, "{uri}");
        assert_eq!(location(&response), format!("/auth/login/?next={uri}"));
    }
}

#[tokio::test]
async fn test_author_reaches_every_note_page() {
    let app = TestApp::new();
    let author = app.user("author").await;
    app.note(&author, "Заметка", "zametka").await;
    let cookie = app.login("author").await;

    for uri in [
        "/notes/",
        "/add/",
        "/done/",
        "/note/zametka/",
        "/edit/zametka/",
        "/delete/zametka/",
    ] {
        let response = app.get(uri, Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
    }
}

#[tokio::test]
async fn test_other_user_gets_404() {
    let app = TestApp::new();
    let author = app.user("author").await;
    app.user("reader").await;
    app.note(&author, "Заметка", "zametka").await;
    let cookie = app.login("reader").await;

    for uri in ["/note/zametka/", "/edit/zametka/", "/delete/zametka/"] {
        let response = app.get(uri, Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

#[tokio::test]
async fn test_missing_note_is_404() {
    let app = TestApp::new();
    app.user("author").await;
    let cookie = app.login("author").await;
    let response = app.get("/note/missing/", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let app = TestApp::new();
    let response = app.get("/no/such/page/", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_shows_only_own_notes() {
    let app = TestApp::new();
    let author = app.user("author").await;
    let reader = app.user("reader").await;
    app.note(&author, "Заметка автора", "author-note").await;
    app.note(&reader, "Чужая заметка", "reader-note").await;
    let cookie = app.login("author").await;

    let body = body_text(app.get("/notes/", Some(&cookie)).await).await;
    assert!(body.contains("Заметка автора"));
    assert!(!body.contains("Чужая заметка"));
}

#[tokio::test]
async fn test_user_can_create_note() {
    let app = TestApp::new();
    let author = app.user("author").await;
    let cookie = app.login("author").await;

    let response = app.post("/add/", &NOTE_FORM, Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/done/");
    assert_eq!(app.count().await, 1);

    let note = app.state.notes.get_by_slug("new-slug").await.unwrap();
    assert_eq!(note.title, "Новая заметка");
    assert_eq!(note.text, "Текст заметки");
    assert_eq!(note.author, author.id);
}

#[tokio::test]
async fn test_anonymous_cannot_create_note() {
    let app = TestApp::new();
    let response = app.post("/add/", &NOTE_FORM, None).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/auth/login/?next=/add/");
    assert_eq!(app.count().await, 0);
}

#[tokio::test]
async fn test_duplicate_slug_rejected() {
    let app = TestApp::new();
    let author = app.user("author").await;
    app.note(&author, "Заметка", "new-slug").await;
    let cookie = app.login("author").await;

    let response = app.post("/add/", &NOTE_FORM, Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("new-slug - such slug already exists, choose a unique value!"));
    assert_eq!(app.count().await, 1);
}

#[tokio::test]
async fn test_empty_slug_is_generated_from_title() {
    let app = TestApp::new();
    app.user("author").await;
    let cookie = app.login("author").await;

    let form = [
        ("title", "Название заметки"),
        ("text", "Текст"),
        ("slug", ""),
    ];
    let response = app.post("/add/", &form, Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    let note = app
        .state
        .notes
        .get_by_slug(&store::slugify("Название заметки"))
        .await
        .unwrap();
    assert_eq!(note.slug, "nazvanie-zametki");
}

#[tokio::test]
async fn test_invalid_form_is_redisplayed() {
    let app = TestApp::new();
    app.user("author").await;
    let cookie = app.login("author").await;

    let response = app
        .post("/add/", &[("title", "Без текста")], Some(&cookie))
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("This field is required."));
    assert!(body.contains("Без текста"));
    assert_eq!(app.count().await, 0);
}

#[tokio::test]
async fn test_author_can_edit_note() {
    let app = TestApp::new();
    let author = app.user("author").await;
    app.note(&author, "Заметка", "zametka").await;
    let cookie = app.login("author").await;

    let response = app.post("/edit/zametka/", &NOTE_FORM, Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/done/");

    let note = app.state.notes.get_by_slug("new-slug").await.unwrap();
    assert_eq!(note.title, "Новая заметка");
    assert_eq!(note.text, "Текст заметки");
    assert!(app.state.notes.get_by_slug("zametka").await.is_err());
}

#[tokio::test]
async fn test_other_user_cannot_edit_note() {
    let app = TestApp::new();
    let author = app.user("author").await;
    app.user("reader").await;
    let original = app.note(&author, "Заметка", "zametka").await;
    let cookie = app.login("reader").await;

    let response = app.post("/edit/zametka/", &NOTE_FORM, Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let note = app.state.notes.get_by_slug("zametka").await.unwrap();
    assert_eq!(note, original);
}

#[tokio::test]
async fn test_author_can_delete_note() {
    let app = TestApp::new();
    let author = app.user("author").await;
    app.note(&author, "Заметка", "zametka").await;
    let cookie = app.login("author").await;

    let response = app.post("/delete/zametka/", &[], Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/done/");
    assert_eq!(app.count().await, 0);
}

#[tokio::test]
async fn test_other_user_cannot_delete_note() {
    let app = TestApp::new();
    let author = app.user("author").await;
    app.user("reader").await;
    app.note(&author, "Заметка", "zametka").await;
    let cookie = app.login("reader").await;

    let response = app.post("/delete/zametka/", &[], Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.count().await, 1);
}

#[tokio::test]
async fn test_login_redirects_to_next() {
    let app = TestApp::new();
    app.user("author").await;

    let form = [
        ("username", "author"),
        ("password", PASSWORD),
        ("next", "/notes/"),
    ];
    let response = app.post("/auth/login/", &form, None).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/notes/");

    for next in ["//evil.example/", "/\\evil.example/", "https://evil.example/"] {
        let form = [("username", "author"), ("password", PASSWORD), ("next", next)];
        let response = app.post("/auth/login/", &form, None).await;
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(location(&response), "/", "{next}");
    }
}

#[tokio::test]
async fn test_login_page_keeps_next() {
    let app = TestApp::new();
    let body = body_text(app.get("/auth/login/?next=/notes/", None).await).await;
    assert!(body.contains("value=\"/notes/\""));
}

#[tokio::test]
async fn test_wrong_password_is_rejected() {
    let app = TestApp::new();
    app.user("author").await;

    let form = [("username", "author"), ("password", "wrong-password")];
    let response = app.post("/auth/login/", &form, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    assert!(body_text(response)
        .await
        .contains("Please enter a correct username and password."));
}

#[tokio::test]
async fn test_logout_ends_session() {
    let app = TestApp::new();
    app.user("author").await;
    let cookie = app.login("author").await;
    assert_eq!(app.get("/notes/", Some(&cookie)).await.status(), StatusCode::OK);

    let response = app.get("/auth/logout/", Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        app.get("/notes/", Some(&cookie)).await.status(),
        StatusCode::FOUND
    );
}

#[tokio::test]
async fn test_signup_creates_account() {
    let app = TestApp::new();
    let form = [
        ("username", "newcomer"),
        ("password1", PASSWORD),
        ("password2", PASSWORD),
    ];
    let response = app.post("/auth/signup/", &form, None).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/auth/login/");

    // The new account can log in right away.
    app.login("newcomer").await;
}

#[tokio::test]
async fn test_signup_rejects_duplicate_and_mismatch() {
    let app = TestApp::new();
    app.user("author").await;

    let duplicate = [
        ("username", "author"),
        ("password1", PASSWORD),
        ("password2", PASSWORD),
    ];
    let response = app.post("/auth/signup/", &duplicate, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response)
        .await
        .contains("A user with that username already exists."));

    let mismatch = [
        ("username", "newcomer"),
        ("password1", PASSWORD),
        ("password2", "something-else"),
    ];
    let response = app.post("/auth/signup/", &mismatch, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response)
        .await
        .contains("The two password fields didn’t match."));
    assert!(app
        .state
        .users
        .find_by_username("newcomer")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_anonymous_post_changes_nothing() {
    let app = TestApp::new();
    let author = app.user("author").await;
    let original = app.note(&author, "Заметка", "zametka").await;

    for uri in ["/edit/zametka/", "/delete/zametka/"] {
        let response = app.post(uri, &NOTE_FORM, None).await;
        assert_eq!(response.status(), StatusCode::FOUND, "{uri}");
        assert_eq!(location(&response), format!("/auth/login/?next={uri}"));
    }
    assert_eq!(app.count().await, 1);
    let note = app.state.notes.get_by_slug("zametka").await.unwrap();
    assert_eq!(note, original);
}

#[tokio::test]
async fn test_edit_to_taken_slug_rejected() {
    let app = TestApp::new();
    let author = app.user("author").await;
    let reader = app.user("reader").await;
    app.note(&reader, "Чужая заметка", "new-slug").await;
    let original = app.note(&author, "Заметка", "zametka").await;
    let cookie = app.login("author").await;

    let response = app.post("/edit/zametka/", &NOTE_FORM, Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("new-slug - such slug already exists, choose a unique value!"));
    let note = app.state.notes.get_by_slug("zametka").await.unwrap();
    assert_eq!(note, original);
}

#[tokio::test]
async fn test_login_ignores_surrounding_whitespace() {
    let app = TestApp::new();
    let form = [
        ("username", " padded "),
        ("password1", PASSWORD),
        ("password2", PASSWORD),
    ];
    let response = app.post("/auth/signup/", &form, None).await;
    assert_eq!(response.status(), StatusCode::FOUND);

    let form = [("username", " padded "), ("password", PASSWORD)];
    let response = app.post("/auth/login/", &form, None).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/");
}
