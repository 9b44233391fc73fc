use anyhow::Result;
use prtally::handle;

#[tokio::main]
async fn main() -> Result<()> {
    handle().await?;
    Ok(())
}
