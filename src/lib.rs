// Library root
// -----------
// This crate exposes the pieces of the watch-history CLI. The binary
// (`main.rs`) loads configuration, builds an `AppState` and runs the menu.
//
// Module responsibilities:
// - `catalog`: the fixed genre -> titles table.
// - `store`: users and their per-genre watch minutes.
// - `recommend`: most-watched genre and a random title from it.
// - `state`: owns catalog, users and the random source.
// - `ui`: the numbered menu loop and its input sources.
// - `config` / `error`: startup configuration and domain errors.
pub mod catalog;
pub mod config;
pub mod error;
pub mod recommend;
pub mod state;
pub mod store;
pub mod ui;
