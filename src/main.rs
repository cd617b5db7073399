#[tokio::main]
async fn main() {
    fieldbook::run().await;
}
