pub mod configuration;
pub mod errors;
pub mod models;
pub mod run;
pub mod selector;
pub mod xkcd;
pub mod xkcd_client;

pub use configuration::Settings;
pub use errors::{Error, Result};
pub use models::{Cli, FetchRequest, ResultDocument};
pub use run::{fetch_cartoons, run};
pub use xkcd_client::XkcdClient;
