use std::time::{SystemTime, UNIX_EPOCH};

use streamtape_http::{ErrorKind, StreamTapeClient};

fn unique_suffix() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock must be after epoch")
        .as_millis()
}

#[tokio::test]
async fn live_account_and_folder_roundtrip() {
    let client = match StreamTapeClient::from_env() {
        Ok(client) => client,
        Err(_) => {
            eprintln!("skipping live test: STREAMTAPE_LOGIN/STREAMTAPE_KEY not set");
            return;
        }
    };

    let account = client
        .account()
        .info()
        .await
        .expect("account info must succeed");
    assert!(!account.apiid.is_empty());

    let name = format!("live_{}", unique_suffix());
    let folder_id = client
        .file()
        .create_folder(&name, None)
        .await
        .expect("folder creation must succeed");

    let root = client
        .file()
        .list_folder(None)
        .await
        .expect("listing root must succeed");
    assert!(root.folders.iter().any(|folder| folder.id == folder_id));

    let deleted = client
        .file()
        .delete_folder(&folder_id)
        .await
        .expect("folder deletion must succeed");
    assert!(deleted);

    let err = client
        .download()
        .ticket("definitely-not-a-file")
        .await
        .expect_err("unknown file must fail");
    assert!(matches!(
        err.kind(),
        ErrorKind::NotFound | ErrorKind::ApiRequest | ErrorKind::Validation
    ));
}
