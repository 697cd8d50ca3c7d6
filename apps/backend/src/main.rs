#[tokio::main]
async fn main() -> anyhow::Result<()> {
    quran_quiz_backend::run().await
}
