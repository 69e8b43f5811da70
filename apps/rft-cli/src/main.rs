use clap::{Parser, Subcommand};
use std::path::PathBuf;

use rft_app::{
    AppResult, LoadOverrides, MismatchInput, Report, ToolboxConfig, UnitInput, WavelengthInput,
    component_service, load_config, notation_service, reflection_service, rf_service,
};
use rft_formulas::InjectionMode;
use rft_notation::QuantityKind;

#[derive(Parser)]
#[command(name = "rft-cli")]
#[command(about = "RF Toolbox CLI - RF and electronics design calculators", long_about = None)]
struct Cli {
    /// YAML file with default Z0, supply voltages, power limit and injection side
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print the report as JSON
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reflection coefficient, VSWR and S11 of a load impedance
    Gamma {
        /// Load resistance (e.g. 75, 1k2)
        resistance: String,
        /// Load reactance
        #[arg(default_value = "0", allow_hyphen_values = true)]
        reactance: String,
        /// Reference impedance, overrides the config
        #[arg(long)]
        z0: Option<String>,
    },
    /// Load impedance from |Γ| and angle
    Impedance {
        /// Reflection coefficient magnitude
        #[arg(allow_hyphen_values = true)]
        magnitude: String,
        /// Angle in degrees
        #[arg(default_value = "0", allow_hyphen_values = true)]
        angle: String,
        #[arg(long)]
        z0: Option<String>,
    },
    /// Complete VSWR, S11 and |Γ| from one of them
    Swr {
        /// Which figure VALUE is: vswr, s11 or gamma
        #[arg(long, default_value = "vswr")]
        from: MismatchInput,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Resistors in parallel with per-branch current and dissipation
    ParallelR {
        /// Resistor values, separate or comma-separated
        #[arg(required = true)]
        resistors: Vec<String>,
        /// Voltage across the bank
        #[arg(long)]
        delta_v: Option<String>,
        /// Per-resistor power limit
        #[arg(long)]
        p_max: Option<String>,
    },
    /// Inductors in parallel
    ParallelL {
        #[arg(required = true)]
        inductors: Vec<String>,
    },
    /// Capacitors in series
    SeriesC {
        #[arg(required = true)]
        capacitors: Vec<String>,
    },
    /// Voltage divider with parallel banks in each leg
    Divider {
        /// Upper leg resistors
        #[arg(long, required = true, num_args = 1..)]
        upper: Vec<String>,
        /// Lower leg resistors
        #[arg(long, required = true, num_args = 1..)]
        lower: Vec<String>,
        /// Supply voltage
        #[arg(long)]
        vdc: Option<String>,
        #[arg(long)]
        p_max: Option<String>,
    },
    /// Free-space path loss with a distance table
    Fspl {
        frequency: String,
        distance: String,
        /// Frequency unit (Hz, kHz, MHz, GHz, THz)
        #[arg(long)]
        freq_unit: Option<String>,
        /// Distance unit (m, km, cm, mm, ft, mi, nmi)
        #[arg(long)]
        dist_unit: Option<String>,
        /// Transmit antenna gain in dBi
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        gain_tx: String,
        /// Receive antenna gain in dBi
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        gain_rx: String,
    },
    /// LO and image frequency from RF and IF
    Image {
        rf: String,
        intermediate: String,
        #[arg(long)]
        unit: Option<String>,
        /// low or high side injection, overrides the config
        #[arg(long)]
        mode: Option<InjectionMode>,
    },
    /// RF and image frequency from LO and IF
    ImageFromLo {
        lo: String,
        intermediate: String,
        #[arg(long)]
        unit: Option<String>,
        #[arg(long)]
        mode: Option<InjectionMode>,
    },
    /// IF and image frequency from RF and LO
    Intermediate {
        rf: String,
        lo: String,
        #[arg(long)]
        unit: Option<String>,
        #[arg(long)]
        mode: Option<InjectionMode>,
    },
    /// Image frequencies of a dual-conversion receiver
    DualImage {
        rf: String,
        if1: String,
        if2: String,
        #[arg(long)]
        unit: Option<String>,
    },
    /// Frequency to wavelength, or back with --from-wavelength
    Wavelength {
        value: String,
        #[arg(long)]
        unit: Option<String>,
        /// VALUE is a wavelength
        #[arg(long)]
        from_wavelength: bool,
        /// Relative permittivity of the medium
        #[arg(long)]
        er: Option<String>,
    },
    /// Convert between W, mW, dBm, dBμV, dBmV and V(rms)
    Power {
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Source unit key (W, mW, dBm, dBuV_50, dBuV_75, dBmV_50, dBmV_75, V_50, V_75)
        from: String,
        /// Target unit key; all units when omitted
        #[arg(long)]
        to: Option<String>,
    },
    /// Octave and decade bandwidth of a band
    Octave {
        low: String,
        high: String,
        #[arg(long)]
        unit: Option<String>,
    },
    /// Parse engineering notation
    Parse {
        text: String,
        #[arg(long, default_value = "generic")]
        kind: QuantityKind,
    },
    /// Format an SI value in engineering notation
    Format {
        #[arg(allow_hyphen_values = true)]
        value: String,
        #[arg(long, default_value = "generic")]
        kind: QuantityKind,
    },
}

fn main() -> AppResult<()> {
    // Logs go to stderr so --json output stays parseable
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ToolboxConfig::default(),
    };

    let report = run(cli.command, &config)?;
    print_report(&report, cli.json)
}

fn run(command: Commands, config: &ToolboxConfig) -> AppResult<Report> {
    match command {
        Commands::Gamma {
            resistance,
            reactance,
            z0,
        } => reflection_service::gamma_calculator(&resistance, &reactance, z0.as_deref(), config),
        Commands::Impedance {
            magnitude,
            angle,
            z0,
        } => reflection_service::impedance_calculator(&magnitude, &angle, z0.as_deref(), config),
        Commands::Swr { from, value } => reflection_service::mismatch_calculator(from, &value),
        Commands::ParallelR {
            resistors,
            delta_v,
            p_max,
        } => {
            let overrides = LoadOverrides {
                voltage: delta_v,
                max_power: p_max,
            };
            component_service::parallel_resistance_calculator(&resistors, &overrides, config)
        }
        Commands::ParallelL { inductors } => {
            component_service::parallel_inductance_calculator(&inductors)
        }
        Commands::SeriesC { capacitors } => {
            component_service::series_capacitance_calculator(&capacitors)
        }
        Commands::Divider {
            upper,
            lower,
            vdc,
            p_max,
        } => {
            let overrides = LoadOverrides {
                voltage: vdc,
                max_power: p_max,
            };
            component_service::divider_calculator(&upper, &lower, &overrides, config)
        }
        Commands::Fspl {
            frequency,
            distance,
            freq_unit,
            dist_unit,
            gain_tx,
            gain_rx,
        } => rf_service::fspl_calculator(
            UnitInput::new(&frequency, freq_unit.as_deref()),
            UnitInput::new(&distance, dist_unit.as_deref()),
            &gain_tx,
            &gain_rx,
        ),
        Commands::Image {
            rf,
            intermediate,
            unit,
            mode,
        } => rf_service::image_calculator(
            UnitInput::new(&rf, unit.as_deref()),
            UnitInput::new(&intermediate, unit.as_deref()),
            mode,
            config,
        ),
        Commands::ImageFromLo {
            lo,
            intermediate,
            unit,
            mode,
        } => rf_service::image_from_lo_calculator(
            UnitInput::new(&lo, unit.as_deref()),
            UnitInput::new(&intermediate, unit.as_deref()),
            mode,
            config,
        ),
        Commands::Intermediate { rf, lo, unit, mode } => rf_service::intermediate_calculator(
            UnitInput::new(&rf, unit.as_deref()),
            UnitInput::new(&lo, unit.as_deref()),
            mode,
            config,
        ),
        Commands::DualImage { rf, if1, if2, unit } => rf_service::dual_image_calculator(
            UnitInput::new(&rf, unit.as_deref()),
            UnitInput::new(&if1, unit.as_deref()),
            UnitInput::new(&if2, unit.as_deref()),
        ),
        Commands::Wavelength {
            value,
            unit,
            from_wavelength,
            er,
        } => {
            let value = UnitInput::new(&value, unit.as_deref());
            let input = if from_wavelength {
                WavelengthInput::Wavelength(value)
            } else {
                WavelengthInput::Frequency(value)
            };
            rf_service::wavelength_calculator(input, er.as_deref(), config)
        }
        Commands::Power { value, from, to } => {
            rf_service::power_calculator(&value, &from, to.as_deref())
        }
        Commands::Octave { low, high, unit } => rf_service::octave_calculator(
            UnitInput::new(&low, unit.as_deref()),
            UnitInput::new(&high, unit.as_deref()),
        ),
        Commands::Parse { text, kind } => notation_service::parse_calculator(&text, kind),
        Commands::Format { value, kind } => notation_service::format_calculator(&value, kind),
    }
}

fn print_report(report: &Report, json: bool) -> AppResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{report}");
        if report.any_flagged() {
            println!("⚠ some values exceed the configured limits");
        }
    }
    Ok(())
}
