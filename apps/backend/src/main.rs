#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ipad_help_backend::run().await
}
