use super::*;

fn write_tile(dir: &Path, name: &str, px: [u8; 4]) {
    image::RgbaImage::from_pixel(4, 3, image::Rgba(px))
        .save(dir.join(name))
        .unwrap();
}

#[test]
fn empty_directory_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("readme.txt"), "x").unwrap();

    let opts = DirectoryOpts::new(dir.path());
    assert_eq!(
        build_from_directory(&opts).unwrap(),
        DirectoryOutcome::NoImages
    );
    assert!(!opts.output_path().exists());
}

#[test]
fn directory_sheet_is_written_next_to_tiles() {
    let dir = tempfile::tempdir().unwrap();
    write_tile(dir.path(), "b.png", [0, 255, 0, 255]);
    write_tile(dir.path(), "a.png", [255, 0, 0, 128]);

    let opts = DirectoryOpts::new(dir.path());
    let DirectoryOutcome::Written(summary) = build_from_directory(&opts).unwrap() else {
        panic!("expected a sheet");
    };
    assert_eq!(summary.path, dir.path().join("sprite_sheet.png"));
    assert_eq!(summary.tiles, 2);
    assert_eq!((summary.width, summary.height), (8, 3));

    let sheet = image::open(&summary.path).unwrap().to_rgba8();
    assert_eq!(sheet.get_pixel(0, 0).0, [255, 0, 0, 128]);
    assert_eq!(sheet.get_pixel(4, 0).0, [0, 255, 0, 255]);
}

#[test]
fn rerun_ignores_previous_output_and_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    write_tile(dir.path(), "1.png", [1, 2, 3, 255]);
    write_tile(dir.path(), "2.png", [4, 5, 6, 255]);

    let opts = DirectoryOpts::new(dir.path());
    build_from_directory(&opts).unwrap();
    let first = std::fs::read(opts.output_path()).unwrap();

    let DirectoryOutcome::Written(summary) = build_from_directory(&opts).unwrap() else {
        panic!("expected a sheet");
    };
    assert_eq!(summary.tiles, 2);
    assert_eq!(std::fs::read(opts.output_path()).unwrap(), first);
}

#[test]
fn explicit_output_and_extension_are_honoured() {
    let dir = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    image::RgbaImage::from_pixel(2, 2, image::Rgba([9, 9, 9, 255]))
        .save_with_format(dir.path().join("tile.img"), image::ImageFormat::Png)
        .unwrap();
    write_tile(dir.path(), "ignored.png", [0, 0, 0, 255]);

    let opts = DirectoryOpts {
        extension: "img".to_string(),
        output: Some(out.path().join("strip.png")),
        ..DirectoryOpts::new(dir.path())
    };
    let DirectoryOutcome::Written(summary) = build_from_directory(&opts).unwrap() else {
        panic!("expected a sheet");
    };
    assert_eq!(summary.tiles, 1);
    assert!(out.path().join("strip.png").is_file());
    assert!(!dir.path().join("sprite_sheet.png").exists());
}

#[test]
fn numbered_sheet_with_bitmap_font_is_rgb_strip() {
    let dir = tempfile::tempdir().unwrap();
    let config = NumberedSheetConfig {
        tile_width: 20,
        tile_height: 12,
        count: 4,
        output: dir.path().join("numbers.png"),
        ..NumberedSheetConfig::default()
    };

    let summary = build_numbered(&config, &FontSource::Builtin).unwrap();
    assert_eq!(summary.tiles, 4);
    assert_eq!((summary.width, summary.height), (80, 12));

    let img = image::open(&summary.path).unwrap();
    assert_eq!(img.color(), image::ColorType::Rgb8);
    assert_eq!(img.to_rgb8().get_pixel(0, 0).0, [255, 255, 255]);
}

#[test]
fn numbered_sheet_rejects_invalid_config_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let config = NumberedSheetConfig {
        tile_height: 0,
        output: dir.path().join("numbers.png"),
        ..NumberedSheetConfig::default()
    };
    assert!(build_numbered(&config, &FontSource::Builtin).is_err());
    assert!(!config.output.exists());
}
