#[tokio::main]
async fn main() {
    unichoise_be::start_server().await;
}
