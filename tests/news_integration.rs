use dotenv::dotenv;

use newsdesk::{NewsFilters, NewsService, NewsSession};

/// Integration test that hits the live NewsAPI.org endpoints.
///
/// This requires outbound network access and a `NEWS_API_KEY` in the
/// environment (or a .env file). It is marked ignored by default to avoid
/// failures in offline or CI environments. Run manually with:
/// `cargo test -- --ignored fetches_live_headlines`.
#[tokio::test]
#[ignore = "requires network access and a NewsAPI key"]
async fn fetches_live_headlines() -> anyhow::Result<()> {
    dotenv().ok();
    let _ = tracing_subscriber::fmt::try_init();

    let service = NewsService::from_env()?;
    let mut session = NewsSession::new();

    let first = service
        .fetch_top_headlines(
            &mut session,
            &NewsFilters {
                page_size: Some(10),
                page: Some(1),
                ..Default::default()
            },
        )
        .await?;

    assert!(!first.articles.is_empty(), "expected at least one headline");
    for article in &first.articles {
        assert!(!article.url.is_empty());
        assert!(!article.title.is_empty());
    }
    println!(
        "page 1: {} of {} headlines, first: {} — {}",
        first.articles.len(),
        first.total_results,
        first.articles[0].source.name,
        first.articles[0].title
    );

    // Second page of the same session: nothing from page 1 may reappear.
    let second = service
        .fetch_top_headlines(
            &mut session,
            &NewsFilters {
                page_size: Some(10),
                page: Some(2),
                ..Default::default()
            },
        )
        .await?;

    for article in &second.articles {
        assert!(
            !first.articles.iter().any(|a| a.url == article.url),
            "page 2 repeated a page 1 url: {}",
            article.url
        );
    }
    println!("page 2: {} unique headlines", second.articles.len());

    Ok(())
}

/// Run manually with: `cargo test -- --ignored searches_live_corpus`.
#[tokio::test]
#[ignore = "requires network access and a NewsAPI key"]
async fn searches_live_corpus() -> anyhow::Result<()> {
    dotenv().ok();
    let _ = tracing_subscriber::fmt::try_init();

    let service = NewsService::from_env()?;
    let mut session = NewsSession::new();

    let page = service
        .search_news(&mut session, "  climate  ", &NewsFilters::default())
        .await?;

    assert!(!page.articles.is_empty(), "expected search results");
    println!(
        "search: {} results, first: {}",
        page.total_results, page.articles[0].title
    );

    let sources = service.fetch_sources().await?;
    assert!(!sources.is_empty(), "expected at least one source");
    println!("sources: {} available", sources.len());

    Ok(())
}
