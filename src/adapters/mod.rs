// Adapters layer: concrete implementations of the domain ports (http, files, webhook).

pub mod files;
pub mod http;
pub mod merged;
pub mod remote;
pub mod webhook;

pub use files::LocalFileSource;
pub use merged::MergedSource;
pub use remote::RemotePageSource;
pub use webhook::WebhookNotifier;
