/// Request and response surface of the transport capability.
pub mod fetcher;
/// Production transport backed by `reqwest`.
pub mod reqwest_fetcher;

pub use fetcher::{FetchRequest, FetchResponse, Fetcher};
pub use reqwest_fetcher::ReqwestFetcher;
