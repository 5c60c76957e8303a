use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Helper for testing gateway clients using wiremock.
///
/// Returns the running server together with its root URL (trailing slash
/// included), ready to hand to a connection client.
///
/// Warning: when using `Mock::expect` ensure `server` is not dropped before
/// the test completes.
pub async fn start_gateway_mock(mocks: Vec<Mock>) -> (MockServer, String) {
    let server = MockServer::start().await;

    for mock in mocks {
        server.register(mock).await;
    }

    let root = format!("{}/", server.uri());

    (server, root)
}

/// Mock for a login page that hands out an anti-forgery cookie.
pub fn login_page_mock(xsrf: &str) -> Mock {
    Mock::given(method("GET")).and(path("/login")).respond_with(
        ResponseTemplate::new(200).insert_header("set-cookie", format!("_xsrf={xsrf}; Path=/")),
    )
}

/// Mock for a login submission the server accepts: the redirect carries the
/// session cookie.
pub fn login_success_mock(session_name: &str, session_value: &str) -> Mock {
    Mock::given(method("POST")).and(path("/login")).respond_with(
        ResponseTemplate::new(302)
            .insert_header("set-cookie", format!("{session_name}={session_value}"))
            .insert_header("location", "/tree?"),
    )
}

/// Mock for a login submission the server rejects by re-rendering the login
/// page.
pub fn login_rejected_mock() -> Mock {
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200))
}

/// Mock for the tree page of a server that runs without a password.
pub fn tree_page_mock() -> Mock {
    Mock::given(method("GET"))
        .and(path("/tree"))
        .respond_with(ResponseTemplate::new(200))
}

/// Mock for the hub probe of a plain notebook server.
pub fn hub_not_found_mock() -> Mock {
    Mock::given(method("GET"))
        .and(path("/hub/api"))
        .respond_with(ResponseTemplate::new(404))
}

/// Mock for the hub probe of a hub-fronted deployment.
pub fn hub_api_mock() -> Mock {
    Mock::given(method("GET"))
        .and(path("/hub/api"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "version": "4.0.0" })),
        )
}

/// Mock for a hub login submission the hub accepts.
pub fn hub_login_success_mock(session_name: &str, session_value: &str) -> Mock {
    Mock::given(method("POST")).and(path("/hub/login")).respond_with(
        ResponseTemplate::new(302)
            .insert_header("set-cookie", format!("{session_name}={session_value}"))
            .insert_header("location", "/hub/spawn"),
    )
}
