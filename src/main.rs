use env_logger::{Builder, Env};
use fortune_wheel::{Wheel, WheelConfig, WheelError};

fn main() -> Result<(), WheelError> {
    Builder::from_env(Env::default().default_filter_or("warn,fortune_wheel=info")).init();

    let mut wheel = Wheel::new(WheelConfig::default())?;
    wheel.show()
}
