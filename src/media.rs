//! Finding media in posts
//!
//! A URL counts as media when its last dot-separated segment is one of
//! [`MEDIA_EXTENSIONS`]. There is no network probing; a `.php` endpoint that
//! serves a PNG is not media, a `.png` that 404s is.

use std::sync::LazyLock;

use regex_lite::Regex;
use serde::Serialize;

use crate::models::{Post, PostView};

/// File extensions treated as media (compared lower-cased)
pub const MEDIA_EXTENSIONS: &[&str] = &[
    "png", "webp", "jpg", "jpeg", "gif", "mp4", "mkv", "mp3", "ogg", "flac", "m4a", "mov", "opus",
    "apng", "avif", "jfif", "svg", "bmp", "ico", "tif", "tiff",
];

/// `http(s)://` or `www.` followed by URL characters; parenthesised groups are
/// allowed anywhere and the URL may not end on punctuation.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:https?://|www\.)(?:\([-A-Z0-9+&@#/%=~_|$?!:,.]*\)|[-A-Z0-9+&@#/%=~_|$?!:,.])*(?:\([-A-Z0-9+&@#/%=~_|$?!:,.]*\)|[A-Z0-9+&@#/%=~_|$])",
    )
    .expect("valid regex")
});

/// Iterate over the URLs embedded in `text`, in order of appearance.
///
/// Duplicates are yielded as often as they occur. Call again to restart.
pub fn find_urls(text: &str) -> impl Iterator<Item = &str> {
    URL_PATTERN.find_iter(text).map(|m| m.as_str())
}

/// Whether `url` ends in a known media extension (case-insensitive)
pub fn is_media_url(url: &str) -> bool {
    if !url.contains('.') {
        return false;
    }
    url.rsplit('.')
        .next()
        .is_some_and(|ext| MEDIA_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// Media URLs of a post: the post URL first, then every media link in the body
pub fn media_urls(post: &Post) -> Vec<String> {
    let mut urls = Vec::new();

    if let Some(url) = post.url.as_deref()
        && is_media_url(url)
    {
        urls.push(url.to_string());
    }

    if let Some(body) = post.body.as_deref() {
        urls.extend(
            find_urls(body)
                .filter(|url| is_media_url(url))
                .map(str::to_string),
        );
    }

    urls
}

/// A post picked for archiving, with the media to download for it.
///
/// Serializes as the original post view plus a `media` array.
#[derive(Debug, Clone, Serialize)]
pub struct MediaPost {
    /// The listing entry as fetched
    #[serde(flatten)]
    pub view: PostView,
    /// Media URLs, in download order
    pub media: Vec<String>,
}

/// Keep the posts that carry media, or every post when `include_all` is set.
pub fn select_posts(posts: Vec<PostView>, include_all: bool) -> Vec<MediaPost> {
    posts
        .into_iter()
        .filter_map(|view| {
            let media = media_urls(&view.post);
            if media.is_empty() && !include_all {
                tracing::debug!(id = view.id(), title = view.title(), "no media, skipping post");
                return None;
            }
            Some(MediaPost { view, media })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn view(id: i64, url: Option<&str>, body: Option<&str>) -> PostView {
        serde_json::from_value(json!({
            "post": { "id": id, "name": format!("post {id}"), "url": url, "body": body },
            "community": { "id": 1, "name": "pics" },
            "counts": { "score": 3 }
        }))
        .unwrap()
    }

    #[test]
    fn test_is_media_url() {
        assert!(is_media_url("https://i.example.com/cat.png"));
        assert!(is_media_url("https://i.example.com/CAT.JPEG"));
        assert!(is_media_url("https://example.com/clip.Mp4"));
        assert!(!is_media_url("https://example.com/article.html"));
        assert!(!is_media_url("https://example.com/image.png?width=640"));
        assert!(!is_media_url("no-extension-here"));
        assert!(!is_media_url(""));
    }

    #[test]
    fn test_find_urls_in_order() {
        let urls: Vec<_> =
            find_urls("check out https://example.com/a.png and www.test.org/b").collect();
        assert_eq!(urls, vec!["https://example.com/a.png", "www.test.org/b"]);
    }

    #[test]
    fn test_find_urls_trailing_punctuation_and_parens() {
        let text = "See https://en.wikipedia.org/wiki/Rust_(language). Also (http://x.org/y.gif), ok?";
        let urls: Vec<_> = find_urls(text).collect();
        assert_eq!(
            urls,
            vec!["https://en.wikipedia.org/wiki/Rust_(language)", "http://x.org/y.gif"]
        );
    }

    #[test]
    fn test_find_urls_restartable_and_duplicates() {
        let text = "https://a.io/x.png https://a.io/x.png";
        assert_eq!(find_urls(text).count(), 2);
        assert_eq!(find_urls(text).count(), 2);
        assert_eq!(find_urls("nothing to see").count(), 0);
    }

    #[test]
    fn test_media_urls_from_url_and_body() {
        let post = view(
            1,
            Some("https://a.io/main.webp"),
            Some("more: https://a.io/one.gif and https://a.io/page.html and https://a.io/two.MOV"),
        );
        assert_eq!(
            media_urls(&post.post),
            vec![
                "https://a.io/main.webp",
                "https://a.io/one.gif",
                "https://a.io/two.MOV"
            ]
        );
    }

    #[test]
    fn test_select_video_post() {
        let selected = select_posts(vec![view(5, Some("https://v.io/clip.mp4"), None)], false);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].media, vec!["https://v.io/clip.mp4"]);
    }

    #[test]
    fn test_select_drops_text_posts_unless_all() {
        let posts = vec![
            view(1, None, Some("just words")),
            view(2, Some("https://blog.io/post"), None),
            view(3, None, Some("pic: https://a.io/p.jpg")),
        ];
        let selected = select_posts(posts.clone(), false);
        assert_eq!(selected.iter().map(|p| p.view.id()).collect::<Vec<_>>(), vec![3]);

        let everything = select_posts(posts, true);
        assert_eq!(everything.len(), 3);
        assert!(everything[0].media.is_empty());
    }

    #[test]
    fn test_media_post_serializes_flat() {
        let selected = select_posts(vec![view(9, Some("https://a.io/x.png"), None)], false);
        let value = serde_json::to_value(&selected[0]).unwrap();
        assert_eq!(value["post"]["id"], 9);
        assert_eq!(value["community"]["name"], "pics");
        assert_eq!(value["counts"]["score"], 3);
        assert_eq!(value["media"][0], "https://a.io/x.png");
    }
}
