extern crate clap;
extern crate env_logger;
extern crate failure;
#[macro_use]
extern crate log;
extern crate mandelbrot;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use mandelbrot::{render, write_ppm, Complex, RenderConfig, TransferId};
use std::path::PathBuf;
use std::str::FromStr;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn parse_complex(s: &str) -> Option<Complex> {
    match parse_pair(s, ',') {
        Some((re, im)) => Some(Complex { re, im }),
        None => None,
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const FILENAME: &str = "filename";
const RESOLUTION: &str = "resolution";
const TOPLEFT: &str = "topleft";
const BOTTOMRIGHT: &str = "bottomright";
const MAXITERATIONS: &str = "maxiterations";
const TRANSFER: &str = "transfer";
const THREADS: &str = "threads";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();
    let transfer_names: Vec<&str> = TransferId::ALL.iter().map(|t| t.name()).collect();

    App::new("mandelbrot")
        .version("0.1.0")
        .about("Renders the Mandelbrot set to a binary PPM image")
        .after_help(
            "Example:\n    mandelbrot -r 900x600 -l=-0.8,0.2 -b=-0.6,0.05 -m 800 -f detail.ppm\n\n\
             A region three units wide and two high keeps pixels square at 3:2 resolutions.",
        )
        .arg(
            Arg::with_name(FILENAME)
                .long(FILENAME)
                .short("f")
                .takes_value(true)
                .default_value("image.ppm")
                .help("Output file"),
        )
        .arg(
            Arg::with_name(RESOLUTION)
                .long(RESOLUTION)
                .short("r")
                .takes_value(true)
                .default_value("900x600")
                .validator(|s| validate_pair::<u32>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image, WIDTHxHEIGHT"),
        )
        .arg(
            Arg::with_name(TOPLEFT)
                .long(TOPLEFT)
                .short("l")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-2,1")
                .validator(|s| validate_pair::<f32>(&s, ',', "Could not parse top left corner"))
                .help("Top left corner of the region, as real,imaginary"),
        )
        .arg(
            Arg::with_name(BOTTOMRIGHT)
                .long(BOTTOMRIGHT)
                .short("b")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("1,-1")
                .validator(|s| validate_pair::<f32>(&s, ',', "Could not parse bottom right corner"))
                .help("Bottom right corner of the region, as real,imaginary"),
        )
        .arg(
            Arg::with_name(MAXITERATIONS)
                .long(MAXITERATIONS)
                .short("m")
                .takes_value(true)
                .default_value("500")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        u32::max_value(),
                        "Could not parse iteration count",
                        "Iteration count must be at least 1",
                    )
                })
                .help("Maximum number of iterations per sample"),
        )
        .arg(
            Arg::with_name(TRANSFER)
                .long(TRANSFER)
                .short("c")
                .takes_value(true)
                .default_value("linear")
                .possible_values(&transfer_names)
                .help("How iteration counts are turned into colors"),
        )
        .arg(
            Arg::with_name(THREADS)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("1")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to use in the renderer"),
        )
        .get_matches()
}

// Every value below has a default and passed its validator, so the
// parses only fail if the two disagree.
fn config(matches: &ArgMatches) -> Result<RenderConfig, failure::Error> {
    let value = |name: &str| matches.value_of(name).unwrap_or_default().to_string();

    let (width, height) = parse_pair::<u32>(&value(RESOLUTION), 'x')
        .ok_or_else(|| failure::err_msg("Error parsing image dimensions"))?;
    let top_left = parse_complex(&value(TOPLEFT))
        .ok_or_else(|| failure::err_msg("Error parsing top left point"))?;
    let bottom_right = parse_complex(&value(BOTTOMRIGHT))
        .ok_or_else(|| failure::err_msg("Error parsing bottom right point"))?;
    let max_iterations = u32::from_str(&value(MAXITERATIONS))?;
    let transfer = TransferId::from_str(&value(TRANSFER)).map_err(failure::err_msg)?;
    let threads = usize::from_str(&value(THREADS))?;

    let config = RenderConfig {
        width,
        height,
        top_left,
        bottom_right,
        max_iterations,
        transfer,
        output: PathBuf::from(value(FILENAME)),
        threads,
    };
    config.validate()?;
    Ok(config)
}

fn run() -> Result<(), failure::Error> {
    let matches = args();
    let config = config(&matches)?;
    debug!("{:?}", config);
    let image = render(&config)?;
    write_ppm(&config.output, &image)?;
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
