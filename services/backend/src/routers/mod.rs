pub mod relay;
pub mod root;
pub use relay::relay_routes;
pub use root::{health_check_route, root_route};
