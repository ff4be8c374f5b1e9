/// Landing route

/// GET / - Greeting
pub async fn home() -> &'static str {
    "Hello, Music Player!"
}
