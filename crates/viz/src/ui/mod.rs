//! UI components for the explorer
//!
//! These modules handle rendering of the stacked-pane interface.

pub mod caption;
pub mod chart_pane;
pub mod inspector;
pub mod layout;
pub mod slider;
