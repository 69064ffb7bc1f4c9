use anyhow::Result;

// Smoke test against a locally running server: `cargo run` first, then
// `cargo test --test quick_dev -- --ignored --nocapture`.
#[tokio::test]
#[ignore = "needs a running server on localhost:8080"]
async fn quick_dev() -> Result<()> {
    let hc = httpc_test::new_client("http://localhost:8080")?;

    hc.do_get("/").await?.print().await?;

    hc.do_post(
        "/",
        (
            "title=Hello&content=World&is_published=on&category=2",
            "application/x-www-form-urlencoded",
        ),
    )
    .await?
    .print()
    .await?;

    hc.do_post(
        "/",
        (
            "title=&content=x&category=1",
            "application/x-www-form-urlencoded",
        ),
    )
    .await?
    .print()
    .await?;

    hc.do_get("/dogs").await?.print().await?;

    Ok(())
}
