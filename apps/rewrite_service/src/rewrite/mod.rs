pub mod catalog;
pub mod rewrite_controller;
pub mod rewrite_prompt;
pub mod rewrite_service;
pub mod rewrite_types;
