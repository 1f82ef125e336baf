//! regview - CLI Entry Point
//!
//! Commands:
//! - `regview fmt <pattern>` - Render a bit pattern in a display base
//! - `regview speed [--index N]` - Show the run speed setting
//! - `regview table` - List the run speed table
//! - `regview view <values...>` - Interactive register viewer
//! - `regview test` - Built-in self-test

use clap::{Parser, Subcommand, ValueEnum};
use regview::Base;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "regview")]
#[command(author = "Yigit")]
#[command(version = "0.1.0")]
#[command(about = "Bit-exact register display formatting and run speed control")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a bit pattern
    Fmt {
        /// Decimal or 0x-prefixed hex pattern (a real number for --kind float/double)
        pattern: String,
        /// How to interpret the pattern
        #[arg(short, long, value_enum, default_value = "all")]
        kind: Kind,
        /// Display base: decimal, hex or ascii
        #[arg(short, long, default_value = "decimal")]
        base: Base,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show (and optionally set) the run speed
    Speed {
        /// Slider index to select (0-40)
        #[arg(short, long)]
        index: Option<usize>,
    },
    /// List the run speed table
    Table {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Interactive register viewer
    View {
        /// Initial register values (decimal or 0x hex)
        values: Vec<String>,
    },
    /// Run the built-in self-test
    Test,
}

/// Interpretation of a `fmt` pattern.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    /// Signed 32-bit integer
    Int,
    /// Unsigned 32-bit integer
    Unsigned,
    /// Signed 64-bit integer
    Long,
    /// Raw single-precision bits
    FloatBits,
    /// Raw double-precision bits
    DoubleBits,
    /// Single-precision value
    Float,
    /// Double-precision value
    Double,
    /// Every 32-bit rendering at once
    All,
}

/// Errors from parsing a user-entered bit pattern.
#[derive(Debug, Error)]
enum PatternError {
    #[error("'{0}' is not a number")]
    Invalid(String),

    #[error("'{text}' does not fit in {bits} bits")]
    TooWide { text: String, bits: u32 },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Fmt { pattern, kind, base, json }) => {
            format_pattern(&pattern, kind, base, json);
        }
        Some(Commands::Speed { index }) => {
            show_speed(index);
        }
        Some(Commands::Table { json }) => {
            show_table(json);
        }
        Some(Commands::View { values }) => {
            view_registers(&values);
        }
        Some(Commands::Test) => {
            run_self_test();
        }
        None => {
            println!("regview v0.1.0");
            println!("Register display formatting and run speed control");
            println!();
            println!("Use --help for available commands");
            println!();
            demo_formatting();
        }
    }
}

/// Parse a decimal or `0x` hex pattern that must fit in `bits` bits.
///
/// Both the signed and the unsigned range are accepted, so `-1` and
/// `4294967295` give the same 32-bit pattern.
fn parse_pattern(text: &str, bits: u32) -> Result<i64, PatternError> {
    let trimmed = text.trim().replace('_', "");
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.as_str()),
    };

    let magnitude = match digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        Some(hex) => u128::from_str_radix(hex, 16),
        None => digits.parse::<u128>(),
    }
    .map_err(|_| PatternError::Invalid(text.to_string()))?;

    let too_wide = || PatternError::TooWide { text: text.to_string(), bits };
    let unsigned_max = (1u128 << bits) - 1;
    let signed_min = 1u128 << (bits - 1);

    if negative {
        if magnitude > signed_min {
            return Err(too_wide());
        }
        Ok((magnitude as i128).wrapping_neg() as i64)
    } else {
        if magnitude > unsigned_max {
            return Err(too_wide());
        }
        Ok(magnitude as u64 as i64)
    }
}

fn parse_word(text: &str) -> Result<i32, PatternError> {
    parse_pattern(text, 32).map(|v| v as i32)
}

fn parse_doubleword(text: &str) -> Result<i64, PatternError> {
    parse_pattern(text, 64)
}

fn exit_with(e: impl std::fmt::Display) -> ! {
    eprintln!("❌ {}", e);
    std::process::exit(1);
}

fn format_pattern(pattern: &str, kind: Kind, base: Base, json: bool) {
    use regview::display::*;

    let rendered = match kind {
        Kind::Int => parse_word(pattern).map(|v| format_int(v, base)),
        Kind::Unsigned => parse_word(pattern).map(|v| format_unsigned(v, base)),
        Kind::Long => parse_doubleword(pattern).map(|v| format_long(v, base)),
        Kind::FloatBits => parse_word(pattern).map(|v| format_float_bits(v, base)),
        Kind::DoubleBits => parse_doubleword(pattern).map(|v| format_double_bits(v, base)),
        Kind::Float => pattern
            .trim()
            .parse::<f32>()
            .map(|v| format_float(v, base))
            .map_err(|_| PatternError::Invalid(pattern.to_string())),
        Kind::Double => pattern
            .trim()
            .parse::<f64>()
            .map(|v| format_double(v, base))
            .map_err(|_| PatternError::Invalid(pattern.to_string())),
        Kind::All => {
            let bits = parse_word(pattern).unwrap_or_else(|e| exit_with(e));
            let rendering = render_all(bits, base);
            if json {
                match serde_json::to_string_pretty(&rendering) {
                    Ok(s) => println!("{}", s),
                    Err(e) => exit_with(e),
                }
            } else {
                println!("signed:   {}", rendering.int);
                println!("unsigned: {}", rendering.unsigned);
                println!("float:    {}", rendering.float);
                println!("ascii:    {}", rendering.ascii);
            }
            return;
        }
    };

    let text = rendered.unwrap_or_else(|e| exit_with(e));
    if json {
        println!("{}", serde_json::json!({ "base": base, "value": text }));
    } else {
        println!("{}", text);
    }
}

fn show_speed(index: Option<usize>) {
    use regview::SimContext;

    let ctx = SimContext::new();
    println!("Rate control active: {}", ctx.run_speed_exists());

    let speed = ctx.run_speed();
    if let Some(index) = index {
        if let Err(e) = speed.set_index(index) {
            exit_with(e);
        }
    }

    println!("Rate control active: {}", ctx.run_speed_exists());
    println!("Index: {}", speed.index());
    println!("Rate:  {} inst/sec", speed.run_speed());
    println!("{}", speed.label());
    match speed.step_delay() {
        Some(delay) => println!("Step delay: {:?}", delay),
        None => println!("Step delay: none (unlimited)"),
    }
}

fn show_table(json: bool) {
    use regview::speed::speed_table;

    let rows = speed_table();
    if json {
        match serde_json::to_string_pretty(&rows) {
            Ok(s) => println!("{}", s),
            Err(e) => exit_with(e),
        }
        return;
    }

    for row in rows {
        let marker = if row.unlimited { "∞" } else { " " };
        println!("{:2} {} {:>6} {}", row.index, marker, row.rate, row.label);
    }
}

#[cfg(feature = "tui")]
fn view_registers(values: &[String]) {
    let mut words = Vec::with_capacity(values.len());
    for text in values {
        words.push(parse_word(text).unwrap_or_else(|e| exit_with(e)));
    }
    if words.is_empty() {
        words = vec![0, -1, 0x4869_210a, 0x3f80_0000];
    }

    if let Err(e) = regview::run_viewer(words) {
        exit_with(format!("Viewer error: {}", e));
    }
}

#[cfg(not(feature = "tui"))]
fn view_registers(_values: &[String]) {
    exit_with("viewer not available: built without the 'tui' feature");
}

fn demo_formatting() {
    use regview::display::*;

    println!("━━━ Display Bases ━━━");
    println!();
    for value in [0, 42, -1, 0x4869_210a] {
        println!(
            "  {:>11}  {}  {:>10}  {}",
            format_int(value, Base::Decimal),
            format_int(value, Base::Hexadecimal),
            format_unsigned(value, Base::Decimal),
            format_int(value, Base::Ascii),
        );
    }
    println!();
    println!("  1.0 as double: {}", format_double(1.0, Base::Hexadecimal));
    println!();
}

fn run_self_test() {
    use regview::display::*;
    use regview::speed::{speed_label, UNLIMITED_SPEED};
    use regview::{DisplayBase, SimContext};

    println!("━━━ regview Self-Test ━━━");
    println!();

    let mut passed = 0;
    let mut failed = 0;
    let mut check = |name: &str, ok: bool| {
        if ok {
            println!("{}... ✓", name);
            passed += 1;
        } else {
            println!("{}... ✗", name);
            failed += 1;
        }
    };

    check(
        "Unsigned vs signed decimal",
        format_unsigned(-1, Base::Decimal) == "4294967295" && format_int(-1, Base::Decimal) == "-1",
    );

    check(
        "Hex is signedness-agnostic",
        [0, 1, -1, i32::MIN, i32::MAX]
            .iter()
            .all(|&v| format_unsigned(v, Base::Hexadecimal) == format_int(v, Base::Hexadecimal)),
    );

    check(
        "Double hex round trip",
        [0.0f64, 1.0, f64::NAN].iter().all(|&v| {
            let s = format_double(v, Base::Hexadecimal);
            u64::from_str_radix(&s[2..], 16).ok() == Some(format::double_bits(v))
        }),
    );

    let holder = DisplayBase::new(Base::Hexadecimal);
    holder.set(Base::Ascii);
    check("ASCII never stored as default", holder.get() == Base::Hexadecimal);

    let ctx = SimContext::new();
    let before = ctx.run_speed_exists();
    let starts_unlimited = ctx.run_speed().run_speed() == UNLIMITED_SPEED;
    check("Rate control created lazily", !before && ctx.run_speed_exists() && starts_unlimited);

    check(
        "Speed labels",
        speed_label(0).map(|l| l.contains("0.05")).unwrap_or(false)
            && speed_label(36).map(|l| l.contains("at max")).unwrap_or(false),
    );

    println!();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Results: {} passed, {} failed", passed, failed);

    if failed == 0 {
        println!("✓ All tests passed!");
    } else {
        std::process::exit(1);
    }
}
