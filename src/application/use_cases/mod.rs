pub mod batch_driver;
pub mod candidate_selection;
pub mod image_fetcher;
pub mod image_resolver;

#[cfg(test)]
pub(crate) mod test_support;
