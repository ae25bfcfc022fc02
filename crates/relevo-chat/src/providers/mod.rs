pub mod cohere;

pub use cohere::CohereChatProvider;
