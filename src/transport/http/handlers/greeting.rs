#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Static greeting", body = String, content_type = "text/plain")
    )
)]
pub async fn greeting_handler() -> &'static str {
    "hello world"
}
