pub mod cli;
pub mod document;
pub mod request;

pub use cli::Cli;
pub use document::ResultDocument;
pub use request::FetchRequest;
