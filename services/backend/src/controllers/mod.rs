pub mod relay;
pub use relay::RelayController;
