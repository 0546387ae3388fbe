//! Translate & Speak: a single-page front end for a remote translation + TTS backend.
//!
//! The page is a thin renderer; form state, the request lifecycle and the
//! autoplay trigger run here, one [`controller::Session`] per websocket.

pub mod backend_service;
pub mod config;
pub mod controller;
pub mod handlers;
pub mod messages;
pub mod playback;
pub mod routes;
pub mod state;
pub mod translate;
pub mod view;
pub mod websocket;
