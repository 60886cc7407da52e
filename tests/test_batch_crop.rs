use std::fs;
use std::path::PathBuf;

use card_crop_lib::{BatchConfig, BatchCropper};
use image::{Rgb, RgbImage};

//fresh per-test scratch directory under the system temp dir, with an "in"
//subdirectory ready for fixtures
fn temp_workspace(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("card_crop_test_{}_{}", name, std::process::id()));
    if dir.exists() {
        fs::remove_dir_all(&dir).unwrap();
    }
    fs::create_dir_all(dir.join("in")).unwrap();
    dir
}

//a dark card inset into a light background on all four sides
fn inset_card(w: u32, h: u32, margin: u32) -> RgbImage {
    RgbImage::from_fn(w, h, |x, y| {
        let on_card = (margin..w - margin).contains(&x) && (margin..h - margin).contains(&y);
        if on_card {
            Rgb([15, 15, 15])
        } else {
            Rgb([245, 245, 245])
        }
    })
}

#[test]
fn test_batch_crops_matching_files() {
    let ws = temp_workspace("crops_matching");
    let in_dir = ws.join("in");
    let out_dir = ws.join("out");

    inset_card(100, 100, 10)
        .save(in_dir.join("guanyu_sexy_pixel.png"))
        .unwrap();
    inset_card(64, 96, 4)
        .save(in_dir.join("zhangfei_sexy_pixel.png"))
        .unwrap();

    //wrong suffix: must not be discovered
    inset_card(32, 32, 2).save(in_dir.join("ignored.png")).unwrap();

    let cropper = BatchCropper::new(BatchConfig::new(&in_dir, &out_dir));
    let files = cropper.discover().unwrap();
    assert_eq!(files.len(), 2);

    let report = cropper.run(&files).unwrap();
    assert_eq!(report.cropped.len(), 2);
    assert!(report.failures.is_empty());
    assert_eq!(report.len(), 2);

    //output dimensions are (right - left + 1, bottom - top + 1)
    let guanyu = image::open(out_dir.join("guanyu_card.png")).unwrap().to_rgb8();
    assert_eq!(guanyu.dimensions(), (80, 80));

    let zhangfei = image::open(out_dir.join("zhangfei_card.png")).unwrap().to_rgb8();
    assert_eq!(zhangfei.dimensions(), (56, 88));

    assert!(!out_dir.join("ignored.png").exists());
    assert!(!out_dir.join("ignored_card.png").exists());

    fs::remove_dir_all(&ws).unwrap();
}

#[test]
fn test_recorded_coordinates_match_detection() {
    let ws = temp_workspace("coords");
    let in_dir = ws.join("in");
    let out_dir = ws.join("out");

    inset_card(100, 100, 10)
        .save(in_dir.join("guanyu_sexy_pixel.png"))
        .unwrap();

    let cropper = BatchCropper::new(BatchConfig::new(&in_dir, &out_dir));
    let files = cropper.discover().unwrap();
    let report = cropper.run(&files).unwrap();

    let record = &report.cropped[0];
    assert_eq!(
        (record.left, record.top, record.right, record.bottom),
        (10, 10, 89, 89)
    );
    assert_eq!((record.out_width, record.out_height), (80, 80));
    assert_eq!(record.dest_path, out_dir.join("guanyu_card.png"));

    fs::remove_dir_all(&ws).unwrap();
}

#[test]
fn test_borderless_image_is_a_failure_not_an_abort() {
    let ws = temp_workspace("borderless");
    let in_dir = ws.join("in");
    let out_dir = ws.join("out");

    //all-white image: no edges anywhere
    RgbImage::from_pixel(50, 50, Rgb([255, 255, 255]))
        .save(in_dir.join("blank_sexy_pixel.png"))
        .unwrap();

    //a croppable one alongside it
    inset_card(60, 60, 5)
        .save(in_dir.join("good_sexy_pixel.png"))
        .unwrap();

    let cropper = BatchCropper::new(BatchConfig::new(&in_dir, &out_dir));
    let files = cropper.discover().unwrap();
    assert_eq!(files.len(), 2);

    let report = cropper.run(&files).unwrap();
    assert_eq!(report.cropped.len(), 1);
    assert_eq!(report.failures.len(), 1);

    let failure = &report.failures[0];
    assert!(failure.src_path.ends_with("blank_sexy_pixel.png"));
    for side in ["left", "right", "top", "bottom"] {
        assert!(failure.error.contains(side), "missing side {side:?} in {:?}", failure.error);
    }

    //no output was written for the failed file
    assert!(!out_dir.join("blank_card.png").exists());
    assert!(out_dir.join("good_card.png").exists());

    fs::remove_dir_all(&ws).unwrap();
}

#[test]
fn test_undecodable_file_is_a_failure_not_an_abort() {
    let ws = temp_workspace("undecodable");
    let in_dir = ws.join("in");
    let out_dir = ws.join("out");

    fs::write(in_dir.join("bad_sexy_pixel.png"), b"this is not a png").unwrap();
    inset_card(60, 60, 5)
        .save(in_dir.join("good_sexy_pixel.png"))
        .unwrap();

    let cropper = BatchCropper::new(BatchConfig::new(&in_dir, &out_dir));
    let files = cropper.discover().unwrap();
    let report = cropper.run(&files).unwrap();

    assert_eq!(report.cropped.len(), 1);
    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].src_path.ends_with("bad_sexy_pixel.png"));
    assert!(out_dir.join("good_card.png").exists());

    fs::remove_dir_all(&ws).unwrap();
}

#[test]
fn test_empty_directory_completes_with_empty_report() {
    let ws = temp_workspace("empty");
    let in_dir = ws.join("in");
    let out_dir = ws.join("out");

    let cropper = BatchCropper::new(BatchConfig::new(&in_dir, &out_dir));
    let files = cropper.discover().unwrap();
    assert!(files.is_empty());

    let report = cropper.run(&files).unwrap();
    assert!(report.cropped.is_empty());
    assert!(report.failures.is_empty());

    //the output directory is still created
    assert!(out_dir.is_dir());

    fs::remove_dir_all(&ws).unwrap();
}

#[test]
fn test_discovery_order_is_deterministic() {
    let ws = temp_workspace("ordering");
    let in_dir = ws.join("in");

    for name in ["c_sexy_pixel.png", "a_sexy_pixel.png", "b_sexy_pixel.png"] {
        inset_card(40, 40, 4).save(in_dir.join(name)).unwrap();
    }

    let cropper = BatchCropper::new(BatchConfig::new(&in_dir, ws.join("out")));
    let files = cropper.discover().unwrap();

    let names = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect::<Vec<_>>();
    assert_eq!(names, ["a_sexy_pixel.png", "b_sexy_pixel.png", "c_sexy_pixel.png"]);

    fs::remove_dir_all(&ws).unwrap();
}

#[test]
fn test_report_serializes_to_json() {
    let ws = temp_workspace("json");
    let in_dir = ws.join("in");

    inset_card(60, 60, 5)
        .save(in_dir.join("good_sexy_pixel.png"))
        .unwrap();

    let cropper = BatchCropper::new(BatchConfig::new(&in_dir, ws.join("out")));
    let files = cropper.discover().unwrap();
    let report = cropper.run(&files).unwrap();

    let json: serde_json::Value = serde_json::from_str(&serde_json::to_string(&report).unwrap()).unwrap();
    assert_eq!(json["cropped"].as_array().unwrap().len(), 1);
    assert_eq!(json["failures"].as_array().unwrap().len(), 0);
    assert_eq!(json["cropped"][0]["left"], 5);

    fs::remove_dir_all(&ws).unwrap();
}
