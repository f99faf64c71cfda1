//! Concurrent download of the media attached to a batch of tweets.

use std::path::Path;

use futures::stream::{self, StreamExt};

use crate::api::{Tweet, TwitterApi};
use crate::download::media::download_media_file;
use crate::error::{Error, Result};
use crate::fs;

/// Default bound on concurrently processed tweets.
pub const DEFAULT_CONCURRENT_DOWNLOADS: usize = 4;

/// Download every media attachment of the given tweets into `dest_dir`.
///
/// Each tweet is one unit of work; units run concurrently up to
/// `concurrency`, while the media items inside a single tweet download in
/// order. The call returns only after every unit has finished, and yields
/// the id of the last tweet in input order. Tweets without media are
/// skipped.
///
/// A failing unit does not cancel its siblings. All units are drained and
/// the first failure is then propagated.
pub async fn download_tweet_media(
    api: &TwitterApi,
    tweets: &[Tweet],
    dest_dir: &Path,
    concurrency: usize,
    show_progress: bool,
) -> Result<u64> {
    let last_id = tweets
        .last()
        .map(|tweet| tweet.id)
        .ok_or_else(|| Error::Download("No tweets to download media from".to_string()))?;

    fs::ensure_dir(dest_dir)?;

    let concurrency = concurrency.max(1);

    let results: Vec<Result<usize>> = stream::iter(tweets)
        .map(|tweet| download_for_tweet(api, tweet, dest_dir, show_progress))
        .buffer_unordered(concurrency)
        .collect()
        .await;

    let mut downloaded = 0;
    let mut first_error = None;
    for result in results {
        match result {
            Ok(count) => downloaded += count,
            Err(e) => {
                tracing::warn!("Tweet media download failed: {}", e);
                first_error.get_or_insert(e);
            }
        }
    }
    if let Some(e) = first_error {
        return Err(e);
    }

    tracing::info!(
        "Downloaded {} media file(s) from {} tweet(s)",
        downloaded,
        tweets.len()
    );

    Ok(last_id)
}

/// Download the media items of one tweet, in order.
async fn download_for_tweet(
    api: &TwitterApi,
    tweet: &Tweet,
    dest_dir: &Path,
    show_progress: bool,
) -> Result<usize> {
    let mut count = 0;
    for media in tweet.media() {
        download_media_file(api, media.download_url(), dest_dir, show_progress).await?;
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Credentials, MediaEntity, TweetEntities};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_api(server: &MockServer) -> TwitterApi {
        TwitterApi::new(
            Credentials::new("test-key", "test-secret"),
            "twitter-downloader-tests",
            &server.uri(),
        )
        .unwrap()
    }

    fn tweet(id: u64, media_urls: &[String]) -> Tweet {
        let media: Vec<MediaEntity> = media_urls
            .iter()
            .map(|url| MediaEntity {
                media_url: url.clone(),
                media_url_https: None,
                media_type: Some("photo".to_string()),
            })
            .collect();
        Tweet {
            id,
            text: format!("tweet {}", id),
            created_at: "Thu Apr 06 15:28:43 +0000 2017".to_string(),
            entities: TweetEntities {
                media: (!media.is_empty()).then_some(media),
            },
        }
    }

    #[tokio::test]
    async fn test_downloads_media_and_returns_last_id() {
        let server = MockServer::start().await;
        let api = test_api(&server);

        Mock::given(method("GET"))
            .and(path("/media/img1.jpg"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"jpeg-bytes".to_vec()))
            .expect(1)
            .mount(&server)
            .await;

        let tweets = vec![
            tweet(1, &[]),
            tweet(2, &[format!("{}/media/img1.jpg", server.uri())]),
            tweet(3, &[]),
        ];

        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().join("out");

        let last_id = download_tweet_media(&api, &tweets, &dest, 4, false)
            .await
            .unwrap();

        assert_eq!(last_id, 3);
        let written = std::fs::read(dest.join("img1.jpg")).unwrap();
        assert_eq!(written, b"jpeg-bytes");
    }

    #[tokio::test]
    async fn test_tweets_without_media_are_noops() {
        let server = MockServer::start().await;
        let api = test_api(&server);

        let tweets = vec![tweet(10, &[]), tweet(20, &[])];

        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().join("nested/out");

        let last_id = download_tweet_media(&api, &tweets, &dest, 4, false)
            .await
            .unwrap();

        assert_eq!(last_id, 20);
        // The destination is created even when nothing gets written.
        assert!(dest.is_dir());
        assert_eq!(std::fs::read_dir(&dest).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_multiple_items_in_one_tweet() {
        let server = MockServer::start().await;
        let api = test_api(&server);

        for name in ["a.jpg", "b.jpg"] {
            Mock::given(method("GET"))
                .and(path(format!("/media/{}", name)))
                .respond_with(ResponseTemplate::new(200).set_body_bytes(name.as_bytes().to_vec()))
                .expect(1)
                .mount(&server)
                .await;
        }

        let urls = vec![
            format!("{}/media/a.jpg", server.uri()),
            format!("{}/media/b.jpg", server.uri()),
        ];
        let tweets = vec![tweet(7, &urls)];

        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().to_path_buf();

        let last_id = download_tweet_media(&api, &tweets, &dest, 4, false)
            .await
            .unwrap();

        assert_eq!(last_id, 7);
        assert!(dest.join("a.jpg").is_file());
        assert!(dest.join("b.jpg").is_file());
    }

    #[tokio::test]
    async fn test_failure_surfaces_after_all_units_drain() {
        let server = MockServer::start().await;
        let api = test_api(&server);

        Mock::given(method("GET"))
            .and(path("/media/missing.jpg"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/media/ok.jpg"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"ok".to_vec()))
            .expect(1)
            .mount(&server)
            .await;

        let tweets = vec![
            tweet(1, &[format!("{}/media/missing.jpg", server.uri())]),
            tweet(2, &[format!("{}/media/ok.jpg", server.uri())]),
        ];

        let tmp = tempfile::tempdir().unwrap();
        let dest = tmp.path().to_path_buf();

        let err = download_tweet_media(&api, &tweets, &dest, 4, false)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Download(_)));
        // The sibling unit still ran to completion.
        assert!(dest.join("ok.jpg").is_file());
    }

    #[tokio::test]
    async fn test_empty_batch_is_an_error() {
        let server = MockServer::start().await;
        let api = test_api(&server);

        let tmp = tempfile::tempdir().unwrap();
        let err = download_tweet_media(&api, &[], tmp.path(), 4, false)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Download(_)));
    }

    #[tokio::test]
    async fn test_concurrency_floor_of_one() {
        let server = MockServer::start().await;
        let api = test_api(&server);

        Mock::given(method("GET"))
            .and(path("/media/img.jpg"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"x".to_vec()))
            .mount(&server)
            .await;

        let tweets = vec![tweet(1, &[format!("{}/media/img.jpg", server.uri())])];

        let tmp = tempfile::tempdir().unwrap();
        let last_id = download_tweet_media(&api, &tweets, tmp.path(), 0, false)
            .await
            .unwrap();

        assert_eq!(last_id, 1);
    }
}
