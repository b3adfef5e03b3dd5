//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements   | Connects to                 |
//! |----------------|--------------|-----------------------------|
//! | `config_store` | ConfigPort   | JSON file / in-memory blob  |
//! | `json_sink`    | EventSink    | JSON lines on any `Write`   |
//! | `log_sink`     | EventSink    | `log` facade                |
//! | `sim`          | ActuatorPort | Simulated heater/cooler/fan |

pub mod config_store;
pub mod json_sink;
pub mod log_sink;
pub mod sim;
