use lyceum_db::{SiteStore, StoreError};
use lyceum_models::{AboutContent, sections};
use lyceum_observability::track_page_fallback;
use tracing::{error, instrument};

use crate::modules::about::model::AboutPageData;

pub const PAGE: &str = "about";

pub struct AboutService;

impl AboutService {
    /// Load the about document, directors and leadership.
    ///
    /// Never fails: any query failure degrades the whole page to
    /// [`AboutPageData::default`].
    #[instrument(skip(store))]
    pub async fn load_about_page(store: &dyn SiteStore) -> AboutPageData {
        match Self::fetch(store).await {
            Ok(data) => data,
            Err(e) => {
                error!(page = PAGE, error = %e, "Error fetching about data");
                track_page_fallback(PAGE);
                AboutPageData::default()
            }
        }
    }

    async fn fetch(store: &dyn SiteStore) -> Result<AboutPageData, StoreError> {
        let (blocks, directors, leadership) = tokio::try_join!(
            store.find_sections(&sections::ABOUT),
            store.list_directors(),
            store.list_leadership(),
        )?;

        Ok(AboutPageData {
            about: AboutContent::from_blocks(blocks),
            directors,
            leadership,
        })
    }
}
