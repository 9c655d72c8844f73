//! End-to-end tests for the CLI commands: write PNG fixtures into a temp
//! directory, run a parsed command, read the result back.

use clap::Parser;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tint_cli::commands::{load_image, save_image};
use tint_cli::Cli;
use tint_core::Image;

fn fixture(dir: &Path, name: &str, image: &Image) -> PathBuf {
    let path = dir.join(name);
    save_image(&path, image).unwrap();
    path
}

fn run(args: &[&str]) -> anyhow::Result<()> {
    let cli = Cli::try_parse_from(std::iter::once("tint").chain(args.iter().copied()))?;
    tint_cli::run(cli.command)
}

fn s(p: &Path) -> &str {
    p.to_str().unwrap()
}

#[test]
fn png_roundtrip_is_lossless() {
    let dir = TempDir::new().unwrap();
    let data: Vec<u8> = (0..5 * 3 * 3).map(|v| (v * 11) as u8).collect();
    let img = Image::from_data(5, 3, 3, data).unwrap();
    let path = fixture(dir.path(), "rt.png", &img);
    assert_eq!(load_image(&path).unwrap(), img);
}

#[test]
fn balance_command() {
    let dir = TempDir::new().unwrap();
    let input = fixture(dir.path(), "in.png", &Image::filled(2, 2, &[100, 100, 100]));
    let output = dir.path().join("out.png");

    run(&["balance", s(&input), "-o", s(&output), "--red", "2,0"]).unwrap();

    let out = load_image(&output).unwrap();
    assert_eq!(out.pixel(1, 1), &[200, 100, 100]);
}

#[test]
fn balance_command_bgr() {
    let dir = TempDir::new().unwrap();
    let input = fixture(dir.path(), "in.png", &Image::filled(2, 2, &[10, 20, 30]));
    let output = dir.path().join("out.png");

    run(&[
        "balance", s(&input), "-o", s(&output), "--red", "2,0", "--green", "0,0", "--blue", "0,0",
        "--bgr",
    ])
    .unwrap();

    let out = load_image(&output).unwrap();
    assert_eq!(out.pixel(0, 0), &[0, 0, 60]);
}

#[test]
fn gamma_command() {
    let dir = TempDir::new().unwrap();
    let input = fixture(dir.path(), "in.png", &Image::filled(3, 3, &[0, 128, 255]));
    let output = dir.path().join("out.png");

    run(&["gamma", s(&input), "-o", s(&output)]).unwrap();

    let px = load_image(&output).unwrap().pixel(0, 0).to_vec();
    assert_eq!(px[0], 0);
    assert!(px[1] > 128);
    assert_eq!(px[2], 255);
}

#[test]
fn gamma_command_rejects_zero() {
    let dir = TempDir::new().unwrap();
    let input = fixture(dir.path(), "in.png", &Image::filled(1, 1, &[1, 2, 3]));
    let output = dir.path().join("out.png");

    let err = run(&["gamma", s(&input), "-o", s(&output), "--gamma", "0"]).unwrap_err();
    assert!(format!("{err:#}").contains("exponent"));
    assert!(!output.exists());
}

#[test]
fn blend_command_resizes_secondary() {
    let dir = TempDir::new().unwrap();
    let primary = fixture(dir.path(), "a.png", &Image::filled(4, 4, &[255, 255, 255]));
    let secondary = fixture(dir.path(), "b.png", &Image::filled(2, 6, &[0, 0, 0]));
    let output = dir.path().join("out.png");

    run(&[
        "blend", s(&primary), s(&secondary), "-o", s(&output), "--factor", "0.5",
    ])
    .unwrap();

    let out = load_image(&output).unwrap();
    assert_eq!(out.shape(), (4, 4, 3));
    assert!(out.data().iter().all(|&v| v == 127 || v == 128));
}

#[test]
fn resize_command() {
    let dir = TempDir::new().unwrap();
    let input = fixture(dir.path(), "in.png", &Image::filled(8, 4, &[9, 8, 7]));
    let output = dir.path().join("out.png");

    run(&["resize", s(&input), "-o", s(&output), "-w", "4"]).unwrap();

    let out = load_image(&output).unwrap();
    assert_eq!(out.dimensions(), (4, 2));
    assert_eq!(out.pixel(3, 1), &[9, 8, 7]);
}

#[test]
fn missing_input_reports_path() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.png");
    let err = run(&["info", s(&missing)]).unwrap_err();
    assert!(format!("{err:#}").contains("nope.png"));
}
