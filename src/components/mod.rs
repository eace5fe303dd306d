pub mod app;
pub mod settings_panel;
pub mod swipe;
pub mod swipe_readout;
