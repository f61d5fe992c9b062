//! pexels-client - Caching HTTP gateway to the Pexels photo API.

mod api;
mod client;

pub use client::{
    DEFAULT_BASE_URL, DEFAULT_IMPORT_TIMEOUT, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT, PexelsClient,
    PexelsClientBuilder,
};
