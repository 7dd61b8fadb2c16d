//! # Screen Modules
//!
//! One module per routed view:
//!
//! - **[`coins`]**: `/`, the coin listing
//! - **[`coin`]**: `/:coinId`, metadata, ticker and the tab links
//! - **[`price`]**: `/:coinId/price`, candlestick chart
//! - **[`chart`]**: `/:coinId/chart`, close-price line chart
//!
//! ## Rendering Pattern
//!
//! ```rust,ignore
//! pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) -> String {
//!     // Read cached data with app.queries.snapshot(..)
//!     // Call app.open_* / app.navigate on clicks
//!     // Return the page title
//! }
//! ```
//!
//! Screens receive a **cloned state snapshot**; user actions go through `App`
//! methods which take the lock internally. Screens never start fetches: the
//! app mounts the queries a route needs before the frame is drawn.

pub mod chart;
pub mod coin;
pub mod coins;
pub mod price;
