#[cfg(test)]
mod tests {
    use assert_fs::prelude::*;
    use assert_fs::TempDir;
    use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
    use serde_json::{json, Value};
    use splashmark::{BatchProcessor, Config, ImageProcessor, SplashmarkError, Transport};
    use std::cell::RefCell;
    use std::io::Cursor;

    /// Serves a fixed listing and fails the downloads whose URL contains
    /// `broken`.
    struct ScriptedUnsplash {
        listing: Value,
        requests: RefCell<Vec<String>>,
    }

    impl ScriptedUnsplash {
        fn new(listing: Value) -> Self {
            Self {
                listing,
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for ScriptedUnsplash {
        fn get_json(&self, url: &str, _query: &[(&str, String)]) -> splashmark::Result<Value> {
            self.requests.borrow_mut().push(url.to_string());
            Ok(self.listing.clone())
        }

        fn get_bytes(&self, url: &str) -> splashmark::Result<Vec<u8>> {
            if url.contains("broken") {
                let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "connection reset by peer");
                return Err(SplashmarkError::Io(io));
            }

            let img = RgbImage::from_fn(120, 90, |x, y| Rgb([(x * 2) as u8, (y * 2) as u8, 128]));
            let mut buffer = Cursor::new(Vec::new());
            img.write_to(&mut buffer, ImageFormat::Jpeg)?;
            Ok(buffer.into_inner())
        }
    }

    fn photo(url: &str) -> Value {
        json!({ "urls": { "regular": url, "small": format!("{}?w=400", url) } })
    }

    fn config_in(temp_dir: &TempDir) -> Config {
        let logo = temp_dir.child("logo.png");
        RgbaImage::from_pixel(6, 4, Rgba([255, 255, 255, 200]))
            .save(logo.path())
            .unwrap();

        Config {
            width: 32,
            height: 20,
            logo_path: logo.path().to_path_buf(),
            output_dir: temp_dir.path().join("output"),
            optimize_png: false,
            log_file: None,
            ..Default::default()
        }
    }

    fn png_names(dir: &std::path::Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn one_failed_download_does_not_stop_the_batch() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(&temp_dir);
        let api = ScriptedUnsplash::new(json!({
            "total": 3,
            "results": [
                photo("https://images.example.com/a"),
                photo("https://images.example.com/broken"),
                photo("https://images.example.com/c"),
            ]
        }));

        let batch = BatchProcessor::new(&api, &config).unwrap();
        let report = batch.run(Some("mountains"), 3, 0.0).unwrap();

        assert_eq!(report.requested, 3);
        assert_eq!(report.saved.len(), 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].0, 2);
        assert!(report.failures[0].1.contains("connection reset"));

        assert_eq!(
            png_names(&config.output_dir),
            vec!["image_mountains_1.png", "image_mountains_3.png"]
        );
        assert_eq!(
            *api.requests.borrow(),
            vec!["https://api.unsplash.com/search/photos"]
        );
    }

    #[test]
    fn outputs_have_the_target_size_with_and_without_blur() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(&temp_dir);
        let api = ScriptedUnsplash::new(json!([
            photo("https://images.example.com/x"),
            photo("https://images.example.com/y"),
        ]));

        let batch = BatchProcessor::new(&api, &config).unwrap();
        let sharp = batch.run(None, 2, 0.0).unwrap();
        let blurred = batch.run(None, 2, 3.0).unwrap();

        assert!(sharp.failures.is_empty() && blurred.failures.is_empty());
        for name in sharp.saved.iter().chain(blurred.saved.iter()) {
            let saved = image::open(config.output_dir.join(name)).unwrap();
            assert_eq!((saved.width(), saved.height()), (32, 20), "{}", name);
        }
        assert_eq!(png_names(&config.output_dir).len(), 4);
    }

    #[test]
    fn reruns_never_overwrite_earlier_output() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(&temp_dir);
        let api = ScriptedUnsplash::new(photo("https://images.example.com/solo"));

        let batch = BatchProcessor::new(&api, &config).unwrap();
        let first = batch.run(None, 1, 0.0).unwrap();
        let second = batch.run(None, 1, 0.0).unwrap();

        assert_eq!(first.saved, vec!["image_noQuery_1.png"]);
        assert_eq!(second.saved, vec!["image_noQuery_2.png"]);
    }

    #[test]
    fn missing_logo_fails_setup() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            logo_path: temp_dir.path().join("logos").join("white.png"),
            output_dir: temp_dir.path().join("output"),
            ..Default::default()
        };

        assert!(ImageProcessor::from_config(&config).is_err());
        let api = ScriptedUnsplash::new(json!([]));
        assert!(BatchProcessor::new(&api, &config).is_err());
        assert!(api.requests.borrow().is_empty());
    }

    #[test]
    fn logo_sits_in_the_middle_of_the_saved_file() {
        let temp_dir = TempDir::new().unwrap();
        let logo = temp_dir.child("logo.png");
        RgbaImage::from_pixel(4, 2, Rgba([255, 0, 255, 255]))
            .save(logo.path())
            .unwrap();
        let config = Config {
            width: 10,
            height: 6,
            logo_path: logo.path().to_path_buf(),
            output_dir: temp_dir.path().join("out"),
            ..Default::default()
        };

        let processor = ImageProcessor::from_config(&config).unwrap();
        let mut source = Cursor::new(Vec::new());
        RgbImage::from_pixel(50, 30, Rgb([0, 0, 0]))
            .write_to(&mut source, ImageFormat::Png)
            .unwrap();

        let name = processor.process(source.get_ref(), "center", 0, 0.0).unwrap();
        let saved = image::open(config.output_dir.join(name)).unwrap().to_rgba8();

        assert_eq!(*saved.get_pixel(3, 2), Rgba([255, 0, 255, 255]));
        assert_eq!(*saved.get_pixel(6, 3), Rgba([255, 0, 255, 255]));
        assert_eq!(*saved.get_pixel(2, 2), Rgba([0, 0, 0, 255]));
        assert_eq!(*saved.get_pixel(7, 3), Rgba([0, 0, 0, 255]));
        assert_eq!(*saved.get_pixel(3, 4), Rgba([0, 0, 0, 255]));
    }
}
