use streamtape_http::{ClientOptions, RetryConfig, StreamTapeClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = StreamTapeClient::from_env().map_err(anyhow::Error::msg)?;
    let options = ClientOptions {
        retry: RetryConfig {
            max_retries: 2,
            ..RetryConfig::default()
        },
        ..client.options().clone()
    };
    let client = client.with_options(options);

    let account = client.account().info().await?;
    println!("account {} ({})", account.apiid, account.email);

    let root = client.file().list_folder(None).await?;
    for folder in root.folders {
        println!("folder {} {}", folder.id, folder.name);
    }
    for file in root.files {
        println!("file {} {} bytes", file.name, file.size);
    }

    Ok(())
}
