pub mod use_cases;

pub use use_cases::batch_driver::{BatchConfig, BatchDriver};
pub use use_cases::candidate_selection::{IndexPicker, RandomPicker};
pub use use_cases::image_fetcher::ImageFetcher;
pub use use_cases::image_resolver::ImageResolver;
