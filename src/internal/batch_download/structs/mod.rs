pub mod batch;
pub mod batch_controller;
pub mod batch_downloader;
pub mod batch_scheduler;
pub mod control_command;
pub mod countdown_engine;
pub mod download_item;
pub mod duration_policy;
pub mod hook_adapters;
pub mod hooks_container;
pub mod reactive_state;
pub mod reveal_order;
pub mod sim_config;
pub mod sim_error;
pub mod timer_event;
