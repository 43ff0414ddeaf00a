mod i2c;
mod gauge;
mod charge;
mod temp;
mod ticker;

use std::env;
use std::io::{self, Write};
use std::time::Duration;
use getopts::Options;
use anyhow::{Context, Error};
use crate::gauge::{Gauge, Max17048};
use crate::charge::{battery_icon, voltage_to_percentage, LOW_BATTERY_PERCENTAGE};
use crate::temp::CpuTemp;
use crate::ticker::Ticker;

// The gauge sits on the expansion header's bus on the reference board.
const I2C_BUS: u8 = 13;

const TICK_PERIOD: Duration = Duration::from_secs(1);

fn single_reading(gauge: &mut dyn Gauge, cpu_temp: Option<&mut CpuTemp>) {
    let voltage = match gauge.voltage() {
        Ok(voltage) => voltage,
        Err(err) => {
            // No fresh data: suppress the whole status block.
            eprintln!("Can't read the fuel gauge: {}.", err);
            return;
        },
    };

    let percentage = voltage_to_percentage(voltage);

    println!("{} Battery Status", battery_icon(percentage));
    println!("  Voltage: {:.2}V", voltage);
    println!("  Charge:  {}%", percentage);

    if let Some(temperature) = cpu_temp.and_then(|t| t.celsius().ok()) {
        println!("  CPU:     {:.1}°C", temperature);
    }

    if percentage < LOW_BATTERY_PERCENTAGE {
        println!("  ⚠️  Low battery - please charge soon!");
    }
}

fn status_line(voltage: f32) -> String {
    let percentage = voltage_to_percentage(voltage);
    format!("{} Battery: {:3}% ({:.2}V)",
            battery_icon(percentage), percentage, voltage)
}

fn monitor(gauge: &mut dyn Gauge, ticker: &Ticker) -> Result<(), Error> {
    println!("Battery Monitor (Press Ctrl+C to stop)");
    println!("{}", "-".repeat(40));

    while !ticker.is_cancelled() {
        match gauge.voltage() {
            Ok(voltage) => {
                print!("\r{}", status_line(voltage));
                io::stdout().flush()?;
            },
            // Skip this cycle's update and wait for the next tick.
            Err(err) => eprintln!("Can't read the fuel gauge: {}.", err),
        }

        if !ticker.wait() {
            break;
        }
    }

    println!("\n\nProgram stopped");
    Ok(())
}

fn main() -> Result<(), Error> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut opts = Options::new();
    opts.optflag("h", "help", "Print this help message.");
    opts.optflag("c", "continuous", "Refresh the status line every second until interrupted.");

    let matches = opts.parse(&args)
                      .context("failed to parse the command line arguments")?;

    if matches.opt_present("h") {
        println!("{}", opts.usage("Usage: batmon [-h|-c]"));
        return Ok(());
    }

    let ticker = Ticker::new(TICK_PERIOD);
    signal_hook::flag::register(signal_hook::consts::SIGINT, ticker.cancel_flag())?;
    signal_hook::flag::register(signal_hook::consts::SIGTERM, ticker.cancel_flag())?;

    let mut gauge = Max17048::new(I2C_BUS)
                             .context("can't open the fuel gauge")?;
    let mut cpu_temp = CpuTemp::new().ok();

    if matches.opt_present("c") {
        monitor(&mut gauge, &ticker)?;
    } else {
        single_reading(&mut gauge, cpu_temp.as_mut());
    }

    Ok(())
}
