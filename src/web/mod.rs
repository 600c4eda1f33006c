//! Web view layer: page markup, SVG rendering and the axum server

mod page;
mod server;
mod svg;

pub(crate) use server::serve;
