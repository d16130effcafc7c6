//! Lazy traversal of paginated collections.
//!
//! The server splits large collections into pages and links each page to the
//! next through a `next` entry in the `<plural>_links` array. A [`Paginator`]
//! follows those links one request at a time:
//!
//! - The first request is the filtered listing request.
//! - Each later request is a GET on the advertised `next` href, used verbatim
//!   (the href already carries the filters and the marker).
//! - Traversal ends when a page has no `next` link, or when a page comes back
//!   empty.
//!
//! Pages are only fetched when the caller asks for more items, so a caller that
//! stops early never pays for the rest of the collection. A server that keeps
//! advertising `next` links forever is cut off after the client's page cap
//! with [`ResourceError::PaginationLoop`].
//!
//! # Example
//!
//! ```rust,ignore
//! use futures::TryStreamExt;
//!
//! let mut pages = client.load_balancers().pages(None)?;
//! while let Some(lb) = pages.try_next().await? {
//!     if lb.name == "wanted" {
//!         break;
//!     }
//! }
//!
//! // Or as a stream:
//! let active: Vec<_> = client
//!     .load_balancers()
//!     .pages(None)?
//!     .into_stream()
//!     .try_filter(|lb| futures::future::ready(lb.provisioning_status.is_active()))
//!     .try_collect()
//!     .await?;
//! ```

use std::collections::VecDeque;

use futures::Stream;

use crate::clients::{HttpError, HttpMethod, HttpRequest, Transport};
use crate::rest::envelope::unwrap_collection;
use crate::rest::resource::ensure_success;
use crate::rest::{RestClient, RestResource, ResourceError};

/// A lazy, fused iterator over every resource in a paginated collection.
///
/// Once a fetch fails or the last page has been consumed, every further call
/// returns `Ok(None)`.
pub struct Paginator<'c, R, T> {
    client: &'c RestClient<T>,
    next: Option<HttpRequest>,
    buffer: VecDeque<R>,
    pages_fetched: u32,
}

impl<'c, R: RestResource, T: Transport> Paginator<'c, R, T> {
    /// Creates a paginator whose first page is fetched with `first`.
    #[must_use]
    pub const fn new(client: &'c RestClient<T>, first: HttpRequest) -> Self {
        Self {
            client,
            next: Some(first),
            buffer: VecDeque::new(),
            pages_fetched: 0,
        }
    }

    /// Returns the number of pages fetched so far.
    #[must_use]
    pub const fn pages_fetched(&self) -> u32 {
        self.pages_fetched
    }

    /// Returns `true` if no further page will be requested.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.next.is_none()
    }

    /// Fetches the next page and returns its items.
    ///
    /// Items already buffered by [`try_next`](Self::try_next) are not
    /// returned again; mixing the two is allowed but rarely useful.
    ///
    /// # Errors
    ///
    /// Returns the transport, status or decode error of the failed fetch, or
    /// [`ResourceError::PaginationLoop`] if the server still advertises a next
    /// page after the page cap was reached. The paginator is exhausted
    /// afterwards.
    pub async fn next_page(&mut self) -> Result<Option<Vec<R>>, ResourceError> {
        let Some(request) = self.next.take() else {
            return Ok(None);
        };

        let max_pages = self.client.max_pages();
        if self.pages_fetched >= max_pages {
            tracing::warn!(
                resource = R::NAME,
                max_pages,
                next = %request.path,
                "listing still advertises a next page at the page cap, giving up"
            );
            return Err(ResourceError::PaginationLoop {
                resource: R::NAME,
                max_pages,
            });
        }

        let response = self.client.send(request).await?;
        let response = ensure_success(response, R::NAME, None)?;
        let page = unwrap_collection::<R>(R::PLURAL, &response.body, R::NAME)?;
        self.pages_fetched += 1;

        tracing::debug!(
            resource = R::NAME,
            page = self.pages_fetched,
            items = page.items.len(),
            has_next = !page.is_last(),
            "fetched listing page"
        );

        // An empty page ends the listing even if it links onwards.
        if let (Some(href), false) = (page.next, page.items.is_empty()) {
            let request = HttpRequest::builder(HttpMethod::Get, href)
                .build()
                .map_err(HttpError::from)?;
            self.next = Some(request);
        }

        Ok(Some(page.items))
    }

    /// Returns the next resource, fetching a page only when the buffer is
    /// empty.
    ///
    /// # Errors
    ///
    /// See [`next_page`](Self::next_page).
    pub async fn try_next(&mut self) -> Result<Option<R>, ResourceError> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Ok(Some(item));
            }
            match self.next_page().await? {
                Some(items) => self.buffer.extend(items),
                None => return Ok(None),
            }
        }
    }

    /// Drains the listing into a vector, in server order.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered. Items from pages fetched before
    /// the failure are discarded.
    pub async fn collect_all(mut self) -> Result<Vec<R>, ResourceError> {
        let mut items: Vec<R> = self.buffer.drain(..).collect();
        while let Some(page) = self.next_page().await? {
            items.extend(page);
        }
        Ok(items)
    }

    /// Converts the paginator into a [`Stream`] of resources.
    ///
    /// The stream yields at most one error and ends after it.
    pub fn into_stream(self) -> impl Stream<Item = Result<R, ResourceError>> + 'c
    where
        R: 'c,
    {
        futures::stream::try_unfold(self, |mut pages| async move {
            let item = pages.try_next().await?;
            Ok::<_, ResourceError>(item.map(|item| (item, pages)))
        })
    }
}

impl<R, T> std::fmt::Debug for Paginator<'_, R, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Paginator")
            .field("next", &self.next.as_ref().map(|r| r.path.as_str()))
            .field("buffered", &self.buffer.len())
            .field("pages_fetched", &self.pages_fetched)
            .finish_non_exhaustive()
    }
}
