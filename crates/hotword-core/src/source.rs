//! Text sources: local files and fetched web pages.
//!
//! Pages are kept in a [`PageCache`] so a URL is downloaded once.
//! Everything here runs before mining. Failures surface as
//! [`SourceError`] so the algorithms only ever see a valid buffer.

use std::io::Read;
use std::time::Duration;

use camino::Utf8PathBuf;
use scraper::{ElementRef, Html, Node, Selector};

use crate::cache::PageCache;
use crate::error::{SourceError, SourceResult};

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

/// Browser user agent sent with page requests unless configured otherwise.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_14) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/12.0 Safari/605.1.15";

/// Pause before every network request, in milliseconds.
pub const DEFAULT_FETCH_DELAY_MS: u64 = 500;

/// Article body on review pages; preferred over the whole `<body>`.
const ARTICLE_SELECTOR: &str = "div.article div.main";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the text to mine comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    /// A local text file.
    File(Utf8PathBuf),
    /// A web page whose visible text is extracted.
    Webpage(String),
}

/// Settings for reading a [`TextSource`].
#[derive(Debug, Clone)]
pub struct SourceOptions {
    /// Refuse files and pages larger than this; `None` disables the check.
    pub max_input_bytes: Option<usize>,
    /// User agent for page requests.
    pub user_agent: String,
    /// Page cache database; `None` downloads every time and stores nothing.
    pub cache_path: Option<Utf8PathBuf>,
    /// Download even when the page is cached. The fresh copy is still stored.
    pub no_cache: bool,
    /// Pause before every network request.
    pub fetch_delay: Duration,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            max_input_bytes: Some(DEFAULT_MAX_INPUT_BYTES),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            cache_path: None,
            no_cache: false,
            fetch_delay: Duration::from_millis(DEFAULT_FETCH_DELAY_MS),
        }
    }
}

impl TextSource {
    /// Pick a source from a CLI argument.
    pub fn from_arg(arg: &str, webpage: bool) -> Self {
        if webpage {
            Self::Webpage(arg.to_string())
        } else {
            Self::File(Utf8PathBuf::from(arg))
        }
    }

    /// Short label for logs and messages.
    pub fn label(&self) -> &str {
        match self {
            Self::File(path) => path.as_str(),
            Self::Webpage(url) => url,
        }
    }

    /// Produce the full text of this source.
    #[tracing::instrument(skip(options), fields(source = self.label()))]
    pub fn read(&self, options: &SourceOptions) -> SourceResult<String> {
        match self {
            Self::File(path) => read_file(path, options.max_input_bytes),
            Self::Webpage(url) => fetch_page_text(url, options),
        }
    }
}

/// Fail with [`SourceError::TooLarge`] when `size` exceeds `max_bytes`.
pub fn check_size(name: &str, size: u64, max_bytes: Option<usize>) -> SourceResult<()> {
    match max_bytes {
        Some(max) if size > max as u64 => Err(SourceError::TooLarge {
            name: name.to_string(),
            size,
            max,
        }),
        _ => Ok(()),
    }
}

/// Read a file after checking its size against `max_bytes`.
pub fn read_file(path: &Utf8PathBuf, max_bytes: Option<usize>) -> SourceResult<String> {
    let read_err = |source| SourceError::Read {
        path: path.clone(),
        source,
    };
    // Preflight: check file size via metadata before reading into memory.
    let metadata = std::fs::metadata(path.as_std_path()).map_err(read_err)?;
    check_size(path.as_str(), metadata.len(), max_bytes)?;
    std::fs::read_to_string(path.as_std_path()).map_err(read_err)
}

/// Visible text of `url`, served from the page cache when possible.
pub fn fetch_page_text(url: &str, options: &SourceOptions) -> SourceResult<String> {
    let html = match options.cache_path {
        Some(ref path) => {
            let cache = PageCache::open(path)?;
            cached_html(&cache, url, options.no_cache, || download(url, options))?
        }
        None => download(url, options)?,
    };
    check_size(url, html.len() as u64, options.max_input_bytes)?;
    Ok(visible_text(&html, true))
}

/// HTML of `url` from `cache`, calling `fetch` only on a miss or when
/// `refresh` is set. Fetched pages are stored.
pub fn cached_html<F>(cache: &PageCache, url: &str, refresh: bool, fetch: F) -> SourceResult<String>
where
    F: FnOnce() -> SourceResult<String>,
{
    if !refresh && let Some(html) = cache.get(url)? {
        tracing::debug!(url, bytes = html.len(), "page served from cache");
        return Ok(html);
    }
    let html = fetch()?;
    cache.put(url, &html)?;
    tracing::debug!(url, cache = %cache.path(), "page stored in cache");
    Ok(html)
}

/// Download `url` after the configured delay. Non-200 answers are errors.
fn download(url: &str, options: &SourceOptions) -> SourceResult<String> {
    let fetch_err = |source| SourceError::Fetch {
        url: url.to_string(),
        source,
    };
    if !options.fetch_delay.is_zero() {
        std::thread::sleep(options.fetch_delay);
    }
    let client = reqwest::blocking::Client::builder()
        .user_agent(options.user_agent.as_str())
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(fetch_err)?;
    let response = client.get(url).send().map_err(fetch_err)?;
    if let Some(length) = response.content_length() {
        check_size(url, length, options.max_input_bytes)?;
    }
    let status = response.status();
    let body = read_limited(response, url, options.max_input_bytes)?;
    tracing::debug!(status = status.as_u16(), bytes = body.len(), "page fetched");

    if status != reqwest::StatusCode::OK {
        return Err(SourceError::Status {
            url: url.to_string(),
            status: status.as_u16(),
            body: visible_text(&body, false),
        });
    }
    Ok(body)
}

/// Read at most `max_bytes` of `reader` as text.
///
/// One byte past the limit is read so an oversized body is reported as
/// too large instead of being silently truncated.
pub fn read_limited<R: Read>(reader: R, url: &str, max_bytes: Option<usize>) -> SourceResult<String> {
    let cap = max_bytes.map_or(u64::MAX, |max| (max as u64).saturating_add(1));
    let mut bytes = Vec::new();
    reader
        .take(cap)
        .read_to_end(&mut bytes)
        .map_err(|source| SourceError::Body {
            url: url.to_string(),
            source,
        })?;
    check_size(url, bytes.len() as u64, max_bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Visible text of an HTML document.
///
/// With `prefer_article`, the article body is used when the page has one;
/// otherwise the whole `<body>`. Text inside `<script>` and `<style>` is
/// skipped; remaining text nodes are trimmed and joined by single spaces.
pub fn visible_text(html: &str, prefer_article: bool) -> String {
    let document = Html::parse_document(html);
    let root = prefer_article
        .then(|| select_first(&document, ARTICLE_SELECTOR))
        .flatten()
        .or_else(|| select_first(&document, "body"));

    let Some(root) = root else {
        return String::new();
    };

    let mut parts: Vec<&str> = Vec::new();
    collect_text(root, &mut parts);
    parts.join(" ")
}

fn select_first<'a>(document: &'a Html, selector: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector).ok()?;
    document.select(&selector).next()
}

fn collect_text<'a>(element: ElementRef<'a>, parts: &mut Vec<&'a str>) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let text = text.trim();
                if !text.is_empty() {
                    parts.push(text);
                }
            }
            Node::Element(el) if matches!(el.name(), "script" | "style") => {}
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    collect_text(child, parts);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const PAGE: &str = r#"<html><head><title>标题</title><style>p { color: red }</style></head>
<body>
  <div class="nav">导航</div>
  <div class="article"><div class="main">
    <p>春风又绿江南岸</p>
    <script>var x = "脚本";</script>
    <p>明月何时照我还</p>
  </div></div>
</body></html>"#;

    #[test]
    fn article_body_is_preferred() {
        let text = visible_text(PAGE, true);
        assert_eq!(text, "春风又绿江南岸 明月何时照我还");
    }

    #[test]
    fn body_is_used_without_article() {
        let text = visible_text(PAGE, false);
        assert!(text.starts_with("导航"));
        assert!(!text.contains("脚本"));
        assert!(!text.contains("color"));
        assert!(!text.contains("标题"));
    }

    #[test]
    fn page_without_article_falls_back_to_body() {
        let text = visible_text("<html><body><p>只有正文</p></body></html>", true);
        assert_eq!(text, "只有正文");
    }

    #[test]
    fn reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("poem.txt");
        fs::write(&path, "床前明月光").unwrap();
        let path = Utf8PathBuf::try_from(path).unwrap();
        let text = TextSource::File(path)
            .read(&SourceOptions::default())
            .unwrap();
        assert_eq!(text, "床前明月光");
    }

    #[test]
    fn missing_file_is_unavailable() {
        let err = read_file(&Utf8PathBuf::from("/nonexistent/poem.txt"), None).unwrap_err();
        assert!(matches!(err, SourceError::Read { .. }));
        assert!(err.to_string().contains("source unavailable"));
    }

    #[test]
    fn oversized_file_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("big.txt");
        fs::write(&path, "春".repeat(100)).unwrap();
        let path = Utf8PathBuf::try_from(path).unwrap();
        let err = read_file(&path, Some(10)).unwrap_err();
        assert!(matches!(err, SourceError::TooLarge { size: 300, max: 10, .. }));
    }

    /// Options that never sleep and cache into `dir`.
    fn cached_options(dir: &TempDir) -> SourceOptions {
        SourceOptions {
            cache_path: Some(Utf8PathBuf::try_from(dir.path().join("pages.sqlite")).unwrap()),
            fetch_delay: Duration::ZERO,
            ..SourceOptions::default()
        }
    }

    // Nothing listens on the discard port, so a download attempt fails fast.
    const OFFLINE_URL: &str = "http://127.0.0.1:9/review/1";

    #[test]
    fn cached_page_is_served_without_download() {
        let cache = PageCache::open_in_memory().unwrap();
        cache.put(OFFLINE_URL, PAGE).unwrap();
        let html = cached_html(&cache, OFFLINE_URL, false, || {
            panic!("cached page must not be downloaded")
        })
        .unwrap();
        assert_eq!(html, PAGE);
    }

    #[test]
    fn cache_miss_downloads_and_stores() {
        let cache = PageCache::open_in_memory().unwrap();
        let mut calls = 0;
        let html = cached_html(&cache, OFFLINE_URL, false, || {
            calls += 1;
            Ok("<p>新</p>".to_string())
        })
        .unwrap();
        assert_eq!(html, "<p>新</p>");
        assert_eq!(calls, 1);
        assert_eq!(cache.get(OFFLINE_URL).unwrap().as_deref(), Some("<p>新</p>"));
    }

    #[test]
    fn refresh_bypasses_cached_copy() {
        let cache = PageCache::open_in_memory().unwrap();
        cache.put(OFFLINE_URL, "<p>旧</p>").unwrap();
        let html = cached_html(&cache, OFFLINE_URL, true, || Ok("<p>新</p>".to_string())).unwrap();
        assert_eq!(html, "<p>新</p>");
        assert_eq!(cache.get(OFFLINE_URL).unwrap().as_deref(), Some("<p>新</p>"));
    }

    #[test]
    fn failed_download_stores_nothing() {
        let cache = PageCache::open_in_memory().unwrap();
        let err = cached_html(&cache, OFFLINE_URL, false, || {
            Err(SourceError::Status {
                url: OFFLINE_URL.to_string(),
                status: 404,
                body: String::new(),
            })
        })
        .unwrap_err();
        assert!(matches!(err, SourceError::Status { status: 404, .. }));
        assert_eq!(cache.get(OFFLINE_URL).unwrap(), None);
    }

    #[test]
    fn webpage_source_reads_from_cache_file() {
        let tmp = TempDir::new().unwrap();
        let options = cached_options(&tmp);
        PageCache::open(options.cache_path.as_ref().unwrap())
            .unwrap()
            .put(OFFLINE_URL, PAGE)
            .unwrap();

        let text = TextSource::Webpage(OFFLINE_URL.to_string())
            .read(&options)
            .unwrap();
        assert_eq!(text, "春风又绿江南岸 明月何时照我还");
    }

    #[test]
    fn uncached_offline_page_is_unavailable() {
        let tmp = TempDir::new().unwrap();
        let err = TextSource::Webpage(OFFLINE_URL.to_string())
            .read(&cached_options(&tmp))
            .unwrap_err();
        assert!(matches!(err, SourceError::Fetch { .. }));
        assert!(err.to_string().contains("source unavailable"));
    }

    #[test]
    fn oversized_cached_page_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let options = SourceOptions {
            max_input_bytes: Some(32),
            ..cached_options(&tmp)
        };
        PageCache::open(options.cache_path.as_ref().unwrap())
            .unwrap()
            .put(OFFLINE_URL, PAGE)
            .unwrap();

        let err = TextSource::Webpage(OFFLINE_URL.to_string())
            .read(&options)
            .unwrap_err();
        assert!(matches!(err, SourceError::TooLarge { max: 32, .. }));
        assert!(err.to_string().contains(OFFLINE_URL));
    }

    #[test]
    fn body_past_limit_is_too_large() {
        let body = "春".repeat(100);
        let err = read_limited(body.as_bytes(), OFFLINE_URL, Some(64)).unwrap_err();
        assert!(matches!(err, SourceError::TooLarge { size: 65, max: 64, .. }));
    }

    #[test]
    fn body_within_limit_is_read_whole() {
        let body = "春风又绿江南岸";
        assert_eq!(read_limited(body.as_bytes(), OFFLINE_URL, Some(body.len())).unwrap(), body);
        assert_eq!(read_limited(body.as_bytes(), OFFLINE_URL, None).unwrap(), body);
    }

    #[test]
    fn size_check_honors_missing_limit() {
        assert!(check_size("page", 10, None).is_ok());
        assert!(check_size("page", 10, Some(10)).is_ok());
        assert!(check_size("page", 11, Some(10)).is_err());
    }

    #[test]
    fn from_arg_picks_variant() {
        assert_eq!(
            TextSource::from_arg("https://example.com", true),
            TextSource::Webpage("https://example.com".to_string())
        );
        assert_eq!(
            TextSource::from_arg("poem.txt", false),
            TextSource::File(Utf8PathBuf::from("poem.txt"))
        );
    }
}
