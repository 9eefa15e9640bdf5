//! マンデルブロ集合レンダラ
//!
//! ピクセル毎にエスケープタイムを計算し、PNG に保存するかウィンドウに表示する。
//!
//! 操作方法 (--window):
//!   - Q / Escape キー: 終了

use std::path::PathBuf;
use std::process::exit;

use basic_mandelbrot::common::{
    config::RenderConfig,
    constants::DEFAULT_OUTPUT,
    error::{Error, Result},
    pixel::Painter,
    progress::{Progress, WithProgress},
    render::{render, save_png, to_argb_buffer},
};
use clap::{Arg, ArgAction, ArgMatches, Command};
use env_logger::Env;
use image::RgbImage;
use log::{error, info};
use minifb::{Key, Window, WindowOptions};

fn main() {
    let matches = command().get_matches();

    let verbosity = matches
        .get_one::<String>("verbosity")
        .map(String::as_str)
        .unwrap_or("info");
    env_logger::Builder::from_env(Env::default().default_filter_or(verbosity)).init();

    if let Err(e) = run(&matches) {
        error!("{}", e);
        exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let config = build_config(matches)?;
    info!(
        "{}x{}, max_iteration {}, viewport ({}, {}) - ({}, {})",
        config.width,
        config.height,
        config.max_iteration,
        config.viewport.x1,
        config.viewport.y1,
        config.viewport.x2,
        config.viewport.y2
    );

    let painter = Painter::new(config)?;
    let total = painter.config().total_pixels();
    let progress = if matches.get_flag("no-progress") {
        Progress::hidden(total)
    } else {
        Progress::new(total)
    };

    let image = render(&WithProgress::new(&painter, &progress))?;
    progress.finish();

    if matches.get_flag("window") {
        show(&image)
    } else {
        let output = matches
            .get_one::<PathBuf>("output")
            .cloned()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
        save_png(&image, &output)
    }
}

// 設定ファイル（あれば）を読み込み、コマンドライン引数で上書きする
fn build_config(matches: &ArgMatches) -> Result<RenderConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            info!("configuration: {}", path.display());
            RenderConfig::load(path)?
        }
        None => RenderConfig::default(),
    };

    if let Some(width) = matches.get_one::<u32>("width") {
        config.width = *width;
    }
    if let Some(height) = matches.get_one::<u32>("height") {
        config.height = *height;
    }
    if let Some(max_iteration) = matches.get_one::<u32>("max-iteration") {
        config.max_iteration = *max_iteration;
    }

    Ok(config)
}

fn show(image: &RgbImage) -> Result<()> {
    let (width, height) = (image.width() as usize, image.height() as usize);
    let buffer = to_argb_buffer(image);

    let mut window = Window::new(
        "マンデルブロ集合",
        width,
        height,
        WindowOptions {
            resize: false,
            ..WindowOptions::default()
        },
    )
    .map_err(|e| Error::Window(e.to_string()))?;

    window.set_target_fps(60);

    while window.is_open() && !window.is_key_down(Key::Escape) && !window.is_key_down(Key::Q) {
        window
            .update_with_buffer(&buffer, width, height)
            .map_err(|e| Error::Window(e.to_string()))?;
    }

    info!("window closed");
    Ok(())
}

// Command line arguments, parsed with clap
fn command() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_parser(clap::value_parser!(PathBuf))
                .value_name("FILE")
                .help("TOML file with width, height, max_iteration and [viewport]"),
        )
        .arg(
            Arg::new("width")
                .long("width")
                .value_parser(clap::value_parser!(u32))
                .value_name("PIXELS")
                .help("Image width"),
        )
        .arg(
            Arg::new("height")
                .long("height")
                .value_parser(clap::value_parser!(u32))
                .value_name("PIXELS")
                .help("Image height"),
        )
        .arg(
            Arg::new("max-iteration")
                .short('i')
                .long("max-iteration")
                .value_parser(clap::value_parser!(u32))
                .value_name("N")
                .help("Iteration cap per pixel"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(clap::value_parser!(PathBuf))
                .value_name("FILE")
                .help("PNG file to write (default: mandelbrot.png)"),
        )
        .arg(
            Arg::new("window")
                .short('w')
                .long("window")
                .action(ArgAction::SetTrue)
                .help("Show the image in a window instead of writing a file"),
        )
        .arg(
            Arg::new("no-progress")
                .long("no-progress")
                .action(ArgAction::SetTrue)
                .help("Do not print the progress bar"),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbosity")
                .value_name("VERBOSITY_LEVEL")
                .help("Set verbosity level for output (trace, debug, info (default), warn, error)"),
        )
}

#[cfg(test)]
mod tests {
    use std::fs;

    use basic_mandelbrot::common::constants::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_ITER};
    use tempdir::TempDir;

    use super::*;

    fn matches_from(args: &[&str]) -> ArgMatches {
        let mut argv = vec!["basic-mandelbrot"];
        argv.extend_from_slice(args);
        command().try_get_matches_from(argv).unwrap()
    }

    fn write_config(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("render.toml");
        fs::write(
            &path,
            r#"
            width = 40
            height = 30
            max_iteration = 50

            [viewport]
            x1 = -1.0
            "#,
        )
        .unwrap();
        path
    }

    #[test]
    fn defaults_without_config_file() {
        let config = build_config(&matches_from(&[])).unwrap();
        assert_eq!(config, RenderConfig::default());
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.max_iteration, MAX_ITER);
    }

    #[test]
    fn file_values_are_used() {
        let dir = TempDir::new("basic-mandelbrot").unwrap();
        let path = write_config(&dir);

        let config = build_config(&matches_from(&["--config", path.to_str().unwrap()])).unwrap();
        assert_eq!((config.width, config.height, config.max_iteration), (40, 30, 50));
        assert_eq!(config.viewport.x1, -1.0);
    }

    #[test]
    fn flags_override_file_values() {
        let dir = TempDir::new("basic-mandelbrot").unwrap();
        let path = write_config(&dir);

        let config = build_config(&matches_from(&[
            "-c",
            path.to_str().unwrap(),
            "--width",
            "64",
            "-i",
            "200",
        ]))
        .unwrap();
        assert_eq!(config.width, 64);
        assert_eq!(config.height, 30);
        assert_eq!(config.max_iteration, 200);
        assert_eq!(config.viewport.x1, -1.0);
    }

    #[test]
    fn zero_height_flag_fails_at_painter() {
        let dir = TempDir::new("basic-mandelbrot").unwrap();
        let path = write_config(&dir);

        let config =
            build_config(&matches_from(&["--config", path.to_str().unwrap(), "--height", "0"]))
                .unwrap();
        assert_eq!(config.height, 0);
        assert!(matches!(Painter::new(config), Err(Error::Config(_))));
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let result = build_config(&matches_from(&["--config", "/nonexistent/render.toml"]));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn non_numeric_width_is_rejected_by_the_parser() {
        let argv = vec!["basic-mandelbrot", "--width", "wide"];
        assert!(command().try_get_matches_from(argv).is_err());
    }
}
