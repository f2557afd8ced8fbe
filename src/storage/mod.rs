pub mod consts;
pub mod games;
pub mod interface;
pub mod sockets;
pub mod sweep;
