// src/application/listing.rs
//! Glue between services and the pagination core.
//!
//! A list call is split in two halves around the store: `plan` validates the
//! request and produces the store query, `finish` turns the fetched records
//! into a page with its next key. Store errors between the two propagate as-is.
use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::pagination::{
    IntoRawList, ListRequest, Listing, OptionsOf, Page, QueryOf, assemble, resolve_options,
    to_store_query,
};

pub fn plan<L, P>(request: ListRequest<P>) -> ApplicationResult<(OptionsOf<L>, QueryOf<L>)>
where
    L: Listing,
    P: IntoRawList<L::Filters, L::Cursor>,
{
    let from_token = matches!(request, ListRequest::NextKey(_));
    let options = resolve_options::<L, P>(request).map_err(|err| {
        tracing::debug!(listing = L::NAME, from_token, error = %err, "rejected list request");
        ApplicationError::from(err)
    })?;
    let query = to_store_query(&options, L::sort(&options.filters));
    Ok((options, query))
}

pub fn finish<L, T>(
    options: &OptionsOf<L>,
    records: Vec<L::Record>,
    format: impl FnMut(L::Record) -> T,
) -> ApplicationResult<Page<T>>
where
    L: Listing,
{
    let page = assemble(options, records, format)?;
    tracing::debug!(
        listing = L::NAME,
        items = page.items.len(),
        limit = options.limit.get(),
        has_more = page.next_key.is_some(),
        "assembled page"
    );
    Ok(page)
}
