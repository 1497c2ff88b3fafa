pub mod trades_poller;
