//! Tests for PNG export, default output naming and preview paths

#[cfg(test)]
mod tests {
    use identicon::IdenticonError;
    use identicon::io::image::{default_output_path, preview_path, save_png, viewer_command};
    use identicon::render_identicon;
    use std::fs;
    use std::ffi::OsStr;
    use std::path::PathBuf;
    use tempfile::TempDir;

    // Tests the default name is the short digest hex with a png extension
    // Verified by formatting the digest in uppercase
    #[test]
    fn test_default_output_path() {
        assert_eq!(default_output_path("test"), PathBuf::from("b0f00a08.png"));
        assert_eq!(default_output_path(""), PathBuf::from("7852b855.png"));
    }

    // Tests saved files decode back to the rendered pixels
    // Verified by saving a blank image instead of the render
    #[test]
    fn test_save_png_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("icon.png");
        let image = render_identicon("round trip", 6).unwrap();

        save_png(&image, &path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(loaded.dimensions(), (18, 18));
        assert_eq!(loaded, image);
    }

    // Tests directory creation failures surface as file system errors
    // Verified by ignoring the create_dir_all result
    #[test]
    fn test_save_png_blocked_directory() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let image = render_identicon("blocked", 2).unwrap();
        let result = save_png(&image, &blocker.join("icon.png"));
        assert!(matches!(result, Err(IdenticonError::FileSystem { .. })));
    }

    // Tests previews are written to the temporary directory
    // Verified by writing previews to the working directory
    #[test]
    fn test_preview_path() {
        let path = preview_path("test");
        assert!(path.starts_with(std::env::temp_dir()));
        assert!(path.to_string_lossy().ends_with("identicon_preview_b0f00a08.png"));
    }

    // Tests the viewer is handed the preview file as its final argument
    // Verified by launching the viewer on the working directory
    #[test]
    fn test_viewer_command_targets_preview() {
        let path = preview_path("viewer");
        let command = viewer_command(&path);

        assert_eq!(command.get_args().last(), Some(path.as_os_str()));
        let program = command.get_program();
        assert!(
            [OsStr::new("xdg-open"), OsStr::new("open"), OsStr::new("cmd")].contains(&program),
            "{program:?}"
        );
    }
}
