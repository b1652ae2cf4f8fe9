//! markpad
//!
//! Markdown editor and prompt workbench: prompt templates, plans and saved
//! responses in a local store, plus Groq and OpenRouter chat clients.

pub mod app;
pub mod editor;
pub mod prompts;
pub mod providers;
pub mod storage;
pub mod types;
