mod common;

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use pixsheet::ooxml::xlsx::MutableWorksheet;
use pixsheet::{ConvertOptions, Error, ResampleFilter, convert, convert_with_progress};

fn cell_ref(row: u32, col: u32) -> String {
    format!("{}{}", MutableWorksheet::column_to_letters(col), row)
}

#[test]
fn solid_red_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("red.png");
    let output = dir.path().join("red.xlsx");
    RgbImage::from_pixel(4, 4, Rgb([255, 0, 0])).save(&input).unwrap();

    let summary = convert(&input, &output, &ConvertOptions::default().with_max_size(4)).unwrap();
    assert_eq!(summary.grid_size, (4, 4));
    assert_eq!(summary.distinct_colors, 1);

    let sheet = common::read_xlsx(&output);
    assert_eq!(sheet.dimension, "A1:D4");
    assert_eq!(sheet.cells.len(), 16);
    for row in 1..=4 {
        for col in 1..=4 {
            assert_eq!(sheet.color(&cell_ref(row, col)), Some("FFFF0000"));
        }
    }
    // One colour means one extra fill beyond the two defaults.
    assert_eq!(sheet.fills.len(), 3);
}

#[test]
fn two_by_two_colour_fidelity() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("quad.png");
    let output = dir.path().join("quad.xlsx");
    let colors = [
        [Rgb([0x12, 0x34, 0x56]), Rgb([0xAB, 0xCD, 0xEF])],
        [Rgb([0x00, 0xFF, 0x00]), Rgb([0x0A, 0x0B, 0x0C])],
    ];
    RgbImage::from_fn(2, 2, |x, y| colors[y as usize][x as usize])
        .save(&input)
        .unwrap();

    convert(&input, &output, &ConvertOptions::default().with_max_size(2)).unwrap();

    let sheet = common::read_xlsx(&output);
    assert_eq!(sheet.color("A1"), Some("FF123456"));
    assert_eq!(sheet.color("B1"), Some("FFABCDEF"));
    assert_eq!(sheet.color("A2"), Some("FF00FF00"));
    assert_eq!(sheet.color("B2"), Some("FF0A0B0C"));
}

#[test]
fn used_range_covers_resized_grid() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("wide.png");
    let output = dir.path().join("wide.xlsx");
    RgbImage::from_fn(60, 30, |x, y| Rgb([(x * 4) as u8, (y * 8) as u8, 128]))
        .save(&input)
        .unwrap();

    let summary = convert(
        &input,
        &output,
        &ConvertOptions::default()
            .with_max_size(12)
            .with_filter(ResampleFilter::Triangle),
    )
    .unwrap();
    assert_eq!(summary.source_size, (60, 30));
    assert_eq!(summary.grid_size, (12, 6));

    let sheet = common::read_xlsx(&output);
    assert_eq!(sheet.dimension, "A1:L6");
    assert_eq!(sheet.cells.len(), 72);
    for row in 1..=6 {
        for col in 1..=12 {
            let color = sheet.color(&cell_ref(row, col));
            assert!(color.is_some(), "cell {} has no fill", cell_ref(row, col));
        }
    }
}

#[test]
fn geometry_is_uniform() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("noise.png");
    let output = dir.path().join("noise.xlsx");
    RgbImage::from_fn(5, 3, |x, y| Rgb([(x * 50) as u8, (y * 90) as u8, 3]))
        .save(&input)
        .unwrap();

    let options = ConvertOptions::default()
        .with_max_size(5)
        .with_cell_width(3.0)
        .with_row_height(18.5);
    convert(&input, &output, &options).unwrap();

    let sheet = common::read_xlsx(&output);
    assert_eq!(sheet.cols, vec![(1, 5, 3.0)]);
    assert_eq!(sheet.column_width(6), None);
    assert_eq!(
        sheet.rows,
        vec![(1, Some(18.5)), (2, Some(18.5)), (3, Some(18.5))]
    );
}

#[test]
fn package_layout_and_properties() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("logo.png");
    let output = dir.path().join("logo.xlsx");
    RgbImage::from_pixel(2, 2, Rgb([1, 2, 3])).save(&input).unwrap();

    convert(&input, &output, &ConvertOptions::default().with_max_size(2)).unwrap();

    let sheet = common::read_xlsx(&output);
    for member in [
        "[Content_Types].xml",
        "_rels/.rels",
        "docProps/core.xml",
        "xl/workbook.xml",
        "xl/_rels/workbook.xml.rels",
        "xl/styles.xml",
        "xl/worksheets/sheet1.xml",
    ] {
        assert!(sheet.members.iter().any(|m| m == member), "missing {member}");
    }
    assert!(sheet.core.contains("<dc:title>logo</dc:title>"));
    assert!(sheet.core.contains("<dc:creator>pixsheet</dc:creator>"));
}

#[test]
fn control_characters_are_dropped_from_title() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("a\u{1}b.png");
    let output = dir.path().join("title.xlsx");
    RgbImage::from_pixel(1, 1, Rgb([7, 7, 7])).save_with_format(&input, image::ImageFormat::Png).unwrap();

    convert(&input, &output, &ConvertOptions::default().with_max_size(1)).unwrap();

    let sheet = common::read_xlsx(&output);
    assert!(!sheet.core.contains('\u{1}'));
    assert!(sheet.core.contains("<dc:title>ab</dc:title>"));

    let mut reader = quick_xml::Reader::from_str(&sheet.core);
    loop {
        match reader.read_event() {
            Ok(quick_xml::events::Event::Eof) => break,
            Err(e) => panic!("core properties are not well-formed: {e}"),
            _ => {}
        }
    }
}

#[test]
fn alpha_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("ghost.png");
    let output = dir.path().join("ghost.xlsx");
    RgbaImage::from_pixel(1, 1, Rgba([200, 100, 50, 0]))
        .save(&input)
        .unwrap();

    convert(&input, &output, &ConvertOptions::default().with_max_size(1)).unwrap();

    let sheet = common::read_xlsx(&output);
    assert_eq!(sheet.dimension, "A1");
    assert_eq!(sheet.color("A1"), Some("FFC86432"));
}

#[test]
fn small_images_are_upscaled() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tiny.png");
    let output = dir.path().join("tiny.xlsx");
    RgbImage::from_pixel(2, 1, Rgb([9, 9, 9])).save(&input).unwrap();

    let mut rows = Vec::new();
    let summary = convert_with_progress(
        &input,
        &output,
        &ConvertOptions::default().with_max_size(8),
        |p| rows.push((p.completed, p.total)),
    )
    .unwrap();

    assert_eq!(summary.grid_size, (8, 4));
    assert_eq!(rows, vec![(1, 4), (2, 4), (3, 4), (4, 4)]);
}

#[test]
fn overwrites_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.xlsx");
    RgbImage::from_pixel(3, 3, Rgb([0, 0, 255])).save(&input).unwrap();
    std::fs::write(&output, b"not a spreadsheet").unwrap();

    convert(&input, &output, &ConvertOptions::default().with_max_size(3)).unwrap();

    let sheet = common::read_xlsx(&output);
    assert_eq!(sheet.color("C3"), Some("FF0000FF"));
}

#[test]
fn missing_input_is_image_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("nope.png");
    let err = convert(&input, dir.path().join("out.xlsx"), &ConvertOptions::default())
        .unwrap_err();
    match err {
        Error::ImageLoad { path, .. } => assert_eq!(path, input),
        other => panic!("expected ImageLoad, got {other:?}"),
    }
}

#[test]
fn missing_output_dir_is_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("no").join("such").join("out.xlsx");
    RgbImage::from_pixel(2, 2, Rgb([5, 5, 5])).save(&input).unwrap();

    let err = convert(&input, &output, &ConvertOptions::default()).unwrap_err();
    match err {
        Error::Write { path, .. } => assert_eq!(path, output),
        other => panic!("expected Write, got {other:?}"),
    }
}
