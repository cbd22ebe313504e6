/// GET /api/hello
///
/// Plain-text liveness greeting used by the frontend's connectivity check.
pub async fn hello() -> &'static str {
    "hello world from Rust!"
}
