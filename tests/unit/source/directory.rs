use super::*;

fn write_png(path: &Path, w: u32, h: u32, px: [u8; 4]) {
    image::RgbaImage::from_pixel(w, h, image::Rgba(px))
        .save(path)
        .unwrap();
}

#[test]
fn lists_only_matching_files_sorted_by_name() {
    let dir = tempfile::tempdir().unwrap();
    write_png(&dir.path().join("b.png"), 2, 2, [0, 255, 0, 255]);
    write_png(&dir.path().join("a.png"), 2, 2, [255, 0, 0, 255]);
    write_png(&dir.path().join("c10.png"), 2, 2, [0, 0, 255, 255]);
    write_png(&dir.path().join("c2.png"), 2, 2, [0, 0, 255, 255]);
    std::fs::write(dir.path().join("notes.txt"), "x").unwrap();
    std::fs::write(dir.path().join("upper.PNG"), "x").unwrap();
    std::fs::create_dir(dir.path().join("nested.png")).unwrap();

    let files = list_image_files(dir.path(), DEFAULT_EXTENSION).unwrap();
    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["a.png", "b.png", "c10.png", "c2.png"]);
}

#[test]
fn does_not_recurse_into_subdirectories() {
    let dir = tempfile::tempdir().unwrap();
    let sub = dir.path().join("frames");
    std::fs::create_dir(&sub).unwrap();
    write_png(&sub.join("inner.png"), 1, 1, [1, 2, 3, 255]);

    assert!(list_image_files(dir.path(), "png").unwrap().is_empty());
}

#[test]
fn extension_accepts_leading_dot_and_rejects_empty() {
    let dir = tempfile::tempdir().unwrap();
    write_png(&dir.path().join("a.png"), 1, 1, [1, 2, 3, 255]);
    assert_eq!(list_image_files(dir.path(), ".png").unwrap().len(), 1);
    assert!(list_image_files(dir.path(), "").is_err());
}

#[test]
fn load_images_decodes_in_order_and_widens_rgb() {
    let dir = tempfile::tempdir().unwrap();
    write_png(&dir.path().join("1.png"), 3, 2, [10, 20, 30, 40]);
    image::RgbImage::from_pixel(3, 2, image::Rgb([7, 8, 9]))
        .save(dir.path().join("2.png"))
        .unwrap();

    let tiles = load_images(dir.path(), "png").unwrap();
    assert_eq!(tiles.len(), 2);
    assert_eq!(tiles[0].get_pixel(0, 0).0, [10, 20, 30, 40]);
    assert_eq!(tiles[1].get_pixel(2, 1).0, [7, 8, 9, 255]);
}

#[test]
fn missing_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_images(&dir.path().join("missing"), "png").unwrap_err();
    assert!(err.to_string().contains("read image directory"));
}

#[test]
fn corrupt_png_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("broken.png"), b"not a png").unwrap();
    let err = load_images(dir.path(), "png").unwrap_err();
    assert!(err.to_string().contains("broken.png"));
}
