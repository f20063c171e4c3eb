//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter           | Implements     | Connects to                  |
//! |-------------------|----------------|------------------------------|
//! | `HwmonSensor`     | `SensorPort`   | hwmon sysfs attribute        |
//! | `SysfsPwm`        | `ActuatorPort` | PWM command channel          |
//! | `HardwareAdapter` | both           | the two above, combined      |
//! | `SystemClock`     | `ClockPort`    | `std::thread::sleep`         |
//! | `LogEventSink`    | `EventSink`    | the `log` facade             |
//! | `FileLogger`      | `log::Log`     | the append-only daemon log   |

pub mod clock;
pub mod file_logger;
pub mod hardware;
pub mod hwmon;
pub mod log_sink;
pub mod pwm;

pub use clock::SystemClock;
pub use file_logger::FileLogger;
pub use hardware::HardwareAdapter;
pub use hwmon::HwmonSensor;
pub use log_sink::LogEventSink;
pub use pwm::SysfsPwm;
