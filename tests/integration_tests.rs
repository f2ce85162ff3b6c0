use tempfile::TempDir;
use word_sort::{CliConfig, LocalStorage, SortEngine, WordSortPipeline};

fn config_for(temp_dir: &TempDir, input_name: &str) -> CliConfig {
    CliConfig {
        input_path: Some(
            temp_dir
                .path()
                .join(input_name)
                .to_str()
                .unwrap()
                .to_string(),
        ),
        output_path: temp_dir
            .path()
            .join("output.txt")
            .to_str()
            .unwrap()
            .to_string(),
        verbose: false,
        monitor: false,
    }
}

async fn run_sort(config: CliConfig) -> word_sort::Result<String> {
    let storage = LocalStorage::new();
    let pipeline = WordSortPipeline::new(storage, config);
    let engine = SortEngine::new(pipeline);
    engine.run().await
}

#[tokio::test]
async fn test_end_to_end_sorts_words_alphabetically() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(&temp_dir, "words.txt");

    std::fs::write(temp_dir.path().join("words.txt"), "banana\nApple\ncherry\n").unwrap();

    let output_path = run_sort(config).await.unwrap();

    let output = std::fs::read_to_string(&output_path).unwrap();
    assert_eq!(output, "Apple\nbanana\ncherry\n");
}

#[tokio::test]
async fn test_end_to_end_trims_whitespace() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(&temp_dir, "words.txt");

    std::fs::write(temp_dir.path().join("words.txt"), "  dog  \ncat\n").unwrap();

    let output_path = run_sort(config).await.unwrap();

    let output = std::fs::read_to_string(&output_path).unwrap();
    assert_eq!(output, "cat\ndog\n");
}

#[tokio::test]
async fn test_end_to_end_empty_input_produces_empty_output() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(&temp_dir, "words.txt");

    std::fs::write(temp_dir.path().join("words.txt"), "").unwrap();

    let output_path = run_sort(config).await.unwrap();

    let output = std::fs::read(&output_path).unwrap();
    assert!(output.is_empty());
}

#[tokio::test]
async fn test_end_to_end_whitespace_only_lines_sort_first() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(&temp_dir, "words.txt");

    std::fs::write(temp_dir.path().join("words.txt"), "zebra\n   \nant\n").unwrap();

    let output_path = run_sort(config).await.unwrap();

    let output = std::fs::read_to_string(&output_path).unwrap();
    assert_eq!(output, "\nant\nzebra\n");
}

#[tokio::test]
async fn test_end_to_end_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();

    std::fs::write(
        temp_dir.path().join("words.txt"),
        "pear\n  Apple \n\nbanana\n",
    )
    .unwrap();

    let first_path = run_sort(config_for(&temp_dir, "words.txt")).await.unwrap();
    let first_output = std::fs::read(&first_path).unwrap();

    // Sort the program's own output a second time.
    let second_path = run_sort(config_for(&temp_dir, "output.txt")).await.unwrap();
    let second_output = std::fs::read(&second_path).unwrap();

    assert_eq!(first_output, second_output);
}

#[tokio::test]
async fn test_end_to_end_overwrites_existing_output() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(&temp_dir, "words.txt");

    std::fs::write(temp_dir.path().join("words.txt"), "b\na\n").unwrap();
    std::fs::write(temp_dir.path().join("output.txt"), "stale content\n").unwrap();

    let output_path = run_sort(config).await.unwrap();

    let output = std::fs::read_to_string(&output_path).unwrap();
    assert_eq!(output, "a\nb\n");
}

#[tokio::test]
async fn test_end_to_end_missing_input_fails_without_output() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(&temp_dir, "does_not_exist.txt");

    let result = run_sort(config).await;

    assert!(result.is_err());
    assert!(!temp_dir.path().join("output.txt").exists());
}

#[tokio::test]
async fn test_end_to_end_non_utf8_input_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(&temp_dir, "words.txt");

    std::fs::write(temp_dir.path().join("words.txt"), [0xff, 0xfe, 0x0a]).unwrap();

    let result = run_sort(config).await;

    assert!(result.is_err());
}
