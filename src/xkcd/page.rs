use scraper::{Html, Selector};
use url::Url;

use crate::errors::Result;

const COMIC_MARKER: &str = "comics";

/// The comic image found on a page, not yet downloaded.
///
/// `address` is the reference as it appears in the output; `url` is its
/// parsed, percent-encoded form used for the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComicImage {
    pub address: String,
    pub url: Url,
    pub caption: Option<String>,
}

/// Return the first `<img>` whose `src` mentions "comics", in document order.
///
/// Pages without such an image give `Ok(None)`. `<img>` tags without a
/// `src` are ignored.
pub fn find_comic_image(html: &str, page_url: &Url) -> Result<Option<ComicImage>> {
    let document = Html::parse_document(html);
    let img = Selector::parse("img").expect("static selector");

    let Some((src, tag)) = document
        .select(&img)
        .map(|element| element.value())
        .find_map(|tag| {
            let src = tag.attr("src")?;
            src.contains(COMIC_MARKER).then_some((src, tag))
        })
    else {
        return Ok(None);
    };

    let address = absolute_address(src, page_url)?;
    Ok(Some(ComicImage {
        url: Url::parse(&address)?,
        address,
        caption: tag.attr("title").map(ToString::to_string),
    }))
}

// Protocol relative and absolute references keep their text untouched.
fn absolute_address(src: &str, page_url: &Url) -> Result<String> {
    if src.starts_with("//") {
        return Ok(format!("http:{src}"));
    }
    if Url::parse(src).is_ok() {
        return Ok(src.to_string());
    }
    Ok(page_url.join(src)?.into())
}
