pub mod batch_download;
pub mod states;
