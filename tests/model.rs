use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tweeter::{Api, AppAction, Config, Environment, FetchStatus, Model, ReactionName, Store};

/// Serve a single canned response and hand back the request line
async fn serve_once(status: &'static str, body: &'static str) -> (Config, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buffer = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let read = socket.read(&mut buffer).await.unwrap();
            if read == 0 {
                break;
            }
            request.extend_from_slice(&buffer[..read]);
        }
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        let request = String::from_utf8_lossy(&request).to_string();
        request.lines().next().unwrap_or_default().to_string()
    });
    let url = url::Url::parse(&format!("http://{address}")).unwrap();
    (Config::new(url), server)
}

const POSTS: &str = r#"[
  {"id":"1","title":"First Post!","content":"Hello!","user":"0",
   "date":"2024-01-01T10:00:00.000Z",
   "reactions":{"thumbsUp":1,"tada":0,"heart":0,"rocket":2,"eyes":0}},
  {"id":"2","title":"Second Post","content":"More text","user":"2",
   "date":"2024-01-02T10:00:00.000Z",
   "reactions":{"thumbsUp":0,"tada":0,"heart":0,"rocket":0,"eyes":0}}
]"#;

#[tokio::test]
async fn test_model_fetches_posts() {
    let (config, server) = serve_once("200 OK", POSTS).await;
    let model = Model::new(config);

    let posts = model.posts().await.unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].title, "First Post!");
    assert_eq!(posts[0].author, "0");
    assert_eq!(posts[0].reactions.get(ReactionName::Rocket), 2);

    let request_line = server.await.unwrap();
    assert_eq!(request_line, "GET /fakeApi/posts HTTP/1.1");
}

#[tokio::test]
async fn test_model_fetches_users() {
    let (config, server) = serve_once("200 OK", r#"[{"id":"0","name":"Tianna Jenkins"}]"#).await;
    let users = Model::new(config).users().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Tianna Jenkins");
    assert_eq!(server.await.unwrap(), "GET /fakeApi/users HTTP/1.1");
}

#[tokio::test]
async fn test_model_reports_server_errors() {
    let (config, _server) = serve_once("500 Internal Server Error", "{}").await;
    let error = Model::new(config).posts().await.unwrap_err();
    assert!(error.starts_with("API Error: posts"), "{error}");
}

#[tokio::test]
async fn test_store_fetch_against_http() {
    let (config, _server) = serve_once("200 OK", POSTS).await;
    let mut store = Store::new(Environment::new(config));
    store.send(AppAction::add_post("Local", "post", "0")).await;
    store.send(AppAction::fetch_posts()).await;

    let state = store.state();
    assert_eq!(state.posts.status, FetchStatus::Succeeded);
    assert_eq!(state.posts.posts.len(), 3);
}

#[tokio::test]
async fn test_store_fetch_against_malformed_body() {
    let (config, _server) = serve_once("200 OK", r#"{"posts":[]}"#).await;
    let mut store = Store::new(Environment::new(config));
    store.send(AppAction::fetch_posts()).await;

    let state = store.state();
    assert_eq!(state.posts.status, FetchStatus::Rejected);
    assert!(state.posts.error.as_deref().unwrap_or_default().starts_with("API Error: posts"));
}
