pub mod client;
pub mod interface;

pub use client::ContentClient;
pub use interface::ContentApi;
