// Render surface: the genpdf page-flow driver and its HTTP handlers.
// The layout core stays pure; everything with side effects lives here.

pub mod handlers;
pub mod pdf;
