//! Telon library.
//!
//! A raylib-backed 2D stage: Y-up stage coordinates, counter-clockwise
//! rotation and a 0-50 transparency scale translated onto the native
//! window, plus the event, audio, canvas and grid plumbing a small game
//! needs around it.
//!
//! - [`space`] – the pure stage/native coordinate conventions
//! - [`stage`] – actors, text and the shared [`Anchored`](stage::Anchored) adapter
//! - [`grid`] – sprite-sheet frame selection
//! - [`canvas`] – CPU pixel surface with a presentable RGBA image
//! - [`backend`] – window state, event dispatch, hotkeys, key bindings,
//!   screenshot numbering and INI configuration
//! - [`audio`] – dedicated audio thread behind channels
//! - [`runner`] – the thin raylib pass-through layer

pub mod audio;
pub mod backend;
pub mod canvas;
pub mod color;
pub mod error;
pub mod grid;
pub mod runner;
pub mod space;
pub mod stage;
