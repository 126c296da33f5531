pub mod events;
pub mod factory;
pub mod logs;
pub mod memory;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GatewayPublisherVia {
    Logs,
    Memory,
}
