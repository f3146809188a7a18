use log::{debug, info, warn};

use crate::errors::Result;
use crate::models::{FetchRequest, ResultDocument};
use crate::selector::{IdSource, RandomIds};
use crate::xkcd::{find_comic_image, ComicRecord};
use crate::xkcd_client::XkcdClient;

/// Fetch the requested cartoons and write them out. Nothing is written if any
/// request fails.
pub async fn run(request: &FetchRequest, client: &XkcdClient) -> Result<usize> {
    info!(
        "Fetching {} cartoons between {} and {}",
        request.count(),
        request.id_range().start(),
        request.id_range().end()
    );

    let mut ids = RandomIds::new();
    let records = fetch_cartoons(request, client, &mut ids).await?;

    let document = ResultDocument::new(&records);
    document.write(request.destination())?;

    info!(
        "Wrote {} cartoons to {}",
        document.len(),
        request.destination().display()
    );
    Ok(document.len())
}

/// One draw per iteration; pages without a comic image are skipped, not retried.
pub async fn fetch_cartoons<S: IdSource>(
    request: &FetchRequest,
    client: &XkcdClient,
    ids: &mut S,
) -> Result<Vec<ComicRecord>> {
    let mut records = Vec::new();

    for _ in 0..request.count() {
        let id = ids.next_id(request.id_range());
        let page_url = client.page_url(id)?;
        debug!("Getting page {page_url}");

        let html = client.get_page(&page_url).await?;
        let Some(image) = find_comic_image(&html, &page_url)? else {
            warn!("No comic image on {page_url}, skipping");
            continue;
        };

        info!("{}", image.address);
        info!("{}", image.caption.as_deref().unwrap_or("None"));

        let bytes = client.get_image(&image.url).await?;
        records.push(ComicRecord::new(page_url, image, bytes));
    }

    Ok(records)
}
