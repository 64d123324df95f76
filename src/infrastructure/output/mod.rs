//! Output service implementations

pub mod filesystem_output;

pub use filesystem_output::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{GenerationError, OutputService, SourceFile};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_filesystem_output_write_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_service = FileSystemOutputService::new();

        let file = SourceFile {
            path: temp_dir.path().join("app/src/Workflow/PingSiteWorkflow.php"),
            content: "<?php\n".to_string(),
        };

        output_service.write_file(&file).await.unwrap();

        let written = std::fs::read_to_string(&file.path).unwrap();
        assert_eq!(written, "<?php\n");
    }

    #[tokio::test]
    async fn test_filesystem_output_overwrites_existing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_service = FileSystemOutputService::new();
        let path = temp_dir.path().join("Foo.php");
        std::fs::write(&path, "a much longer previous content").unwrap();

        let file = SourceFile {
            path: path.clone(),
            content: "short".to_string(),
        };
        output_service.write_file(&file).await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "short");
    }

    #[tokio::test]
    async fn test_filesystem_output_ensure_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_service = FileSystemOutputService::new();

        let nested_path = temp_dir.path().join("a/b/c");
        output_service.ensure_directory(&nested_path).await.unwrap();

        assert!(nested_path.exists());
        assert!(nested_path.is_dir());
    }

    #[tokio::test]
    async fn test_filesystem_output_reports_path_on_failure() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output_service = FileSystemOutputService::new();

        // A regular file where a directory is expected
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let file = SourceFile {
            path: blocker.join("Foo.php"),
            content: String::new(),
        };
        let error = output_service.write_file(&file).await.unwrap_err();

        match error {
            GenerationError::FileWrite { path, .. } => assert_eq!(path, blocker),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
