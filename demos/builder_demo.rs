use fortune_wheel::{Color, Wheel, WheelConfig};
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // A smaller wheel on a lighter background, seeded from the builder
    let config = WheelConfig::builder()
        .title("Who makes coffee?".to_string())
        .items(
            ["Ana", "Bogdan", "Carmen", "Dan", "Elena"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
        .background_color(Color::new(0x1e, 0x29, 0x3b))
        .label_font_size(16.0)
        .build();

    let mut wheel = Wheel::new(config)?;

    // Start already spinning so the window opens mid-animation
    wheel.state_mut().spin(Instant::now());

    println!("Click \"Spin!\" to spin again, type + Enter to add a name.");
    println!("Press Escape to exit");

    wheel.show()?;
    Ok(())
}
