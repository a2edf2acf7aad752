use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use dconv::{
    FloatKind, IntegerKind, NumError, NumericKind, format_decimal, format_float, format_int,
    parse_float, parse_int,
};
use tracing::{debug, metadata::LevelFilter, warn};
use tracing_subscriber::{EnvFilter, prelude::*};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Fail on out-of-range input instead of printing the best-effort value.
    #[clap(long, env = "DCONV_STRICT", global = true)]
    strict: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse integers and print their canonical form.
    Int {
        #[clap(long, value_enum, default_value_t = IntKind::Isize)]
        kind: IntKind,
        #[clap(required = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Parse floats and print the shortest round-tripping fixed form.
    Float {
        #[clap(long, value_enum, default_value_t = FloatKindArg::F64)]
        kind: FloatKindArg,
        #[clap(required = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Parse as any kind and print through the f64 formatter.
    Decimal {
        #[clap(long, value_enum, default_value_t = AnyKind::F64)]
        kind: AnyKind,
        #[clap(required = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum IntKind {
    I8,
    I16,
    I32,
    I64,
    Isize,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FloatKindArg {
    F32,
    F64,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum AnyKind {
    I8,
    I16,
    I32,
    I64,
    Isize,
    F32,
    F64,
}

/// Applies the strictness policy to a parse result.
fn settle<T: NumericKind>(parsed: Result<T, NumError<T>>, strict: bool) -> Result<T> {
    match parsed {
        Ok(value) => Ok(value),
        Err(err) if err.is_range() && !strict => {
            warn!(
                input = err.input(),
                target = err.target(),
                "{err}, using best-effort value"
            );
            Ok(err.value())
        }
        Err(err) => Err(err).context("conversion failed"),
    }
}

fn int<T: IntegerKind>(text: &str, strict: bool) -> Result<String> {
    let value = settle(parse_int::<T>(text), strict)?;
    debug!(text, kind = T::NAME, bits = T::BITS, "parsed integer");
    Ok(format_int(value))
}

fn float<T: FloatKind>(text: &str, strict: bool) -> Result<String> {
    let value = settle(parse_float::<T>(text), strict)?;
    debug!(text, kind = T::NAME, bits = T::BITS, "parsed float");
    Ok(format_float(value))
}

fn decimal_from_int<T: IntegerKind>(text: &str, strict: bool) -> Result<String> {
    Ok(format_decimal(settle(parse_int::<T>(text), strict)?))
}

fn decimal_from_float<T: FloatKind>(text: &str, strict: bool) -> Result<String> {
    Ok(format_decimal(settle(parse_float::<T>(text), strict)?))
}

fn convert(command: &Command, text: &str, strict: bool) -> Result<String> {
    match command {
        Command::Int { kind, .. } => match kind {
            IntKind::I8 => int::<i8>(text, strict),
            IntKind::I16 => int::<i16>(text, strict),
            IntKind::I32 => int::<i32>(text, strict),
            IntKind::I64 => int::<i64>(text, strict),
            IntKind::Isize => int::<isize>(text, strict),
        },
        Command::Float { kind, .. } => match kind {
            FloatKindArg::F32 => float::<f32>(text, strict),
            FloatKindArg::F64 => float::<f64>(text, strict),
        },
        Command::Decimal { kind, .. } => match kind {
            AnyKind::I8 => decimal_from_int::<i8>(text, strict),
            AnyKind::I16 => decimal_from_int::<i16>(text, strict),
            AnyKind::I32 => decimal_from_int::<i32>(text, strict),
            AnyKind::I64 => decimal_from_int::<i64>(text, strict),
            AnyKind::Isize => decimal_from_int::<isize>(text, strict),
            AnyKind::F32 => decimal_from_float::<f32>(text, strict),
            AnyKind::F64 => decimal_from_float::<f64>(text, strict),
        },
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let texts = match &args.command {
        Command::Int { text, .. } | Command::Float { text, .. } | Command::Decimal { text, .. } => {
            text
        }
    };

    let mut failed = 0usize;
    for text in texts {
        match convert(&args.command, text, args.strict) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("{e:#}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} inputs could not be converted", texts.len());
    }
    Ok(())
}
